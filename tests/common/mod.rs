#![allow(dead_code)]

pub fn create_wav(channels: u16, sample_rate: u32, bits_per_sample: u16, data: &[u8]) -> Vec<u8> {
	build_wav(1, channels, sample_rate, bits_per_sample, &[], None, data)
}

pub fn build_wav(
	format_code: u16,
	channels: u16,
	sample_rate: u32,
	bits_per_sample: u16,
	fmt_extra: &[u8],
	extra_chunk: Option<(&[u8; 4], &[u8])>,
	data: &[u8],
) -> Vec<u8> {
	let mut body = Vec::new();

	body.extend_from_slice(b"WAVE");

	body.extend_from_slice(b"fmt ");
	body.extend_from_slice(&(16 + fmt_extra.len() as u32).to_le_bytes());
	body.extend_from_slice(&format_code.to_le_bytes());
	body.extend_from_slice(&channels.to_le_bytes());
	body.extend_from_slice(&sample_rate.to_le_bytes());
	let byte_rate = sample_rate * channels as u32 * bits_per_sample as u32 / 8;
	body.extend_from_slice(&byte_rate.to_le_bytes());
	let block_align = channels * bits_per_sample / 8;
	body.extend_from_slice(&block_align.to_le_bytes());
	body.extend_from_slice(&bits_per_sample.to_le_bytes());
	body.extend_from_slice(fmt_extra);

	if let Some((id, payload)) = extra_chunk {
		body.extend_from_slice(id);
		body.extend_from_slice(&(payload.len() as u32).to_le_bytes());
		body.extend_from_slice(payload);
		if payload.len() % 2 == 1 {
			body.push(0);
		}
	}

	body.extend_from_slice(b"data");
	body.extend_from_slice(&(data.len() as u32).to_le_bytes());
	body.extend_from_slice(data);

	let mut wav = Vec::with_capacity(body.len() + 8);
	wav.extend_from_slice(b"RIFF");
	wav.extend_from_slice(&(body.len() as u32).to_le_bytes());
	wav.extend_from_slice(&body);
	wav
}

pub fn i16_bytes(samples: &[i16]) -> Vec<u8> {
	samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

pub fn generate_sine_wave(samples: usize, frequency: f64, sample_rate: u32) -> Vec<f64> {
	(0..samples)
		.map(|i| {
			let t = i as f64 / sample_rate as f64;
			(2.0 * std::f64::consts::PI * frequency * t).sin() * 0.5
		})
		.collect()
}

pub fn assert_close(actual: &[f64], expected: &[f64], tolerance: f64) {
	assert_eq!(actual.len(), expected.len());
	for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
		assert!((a - e).abs() <= tolerance, "sample {}: {} vs {} (tolerance {})", i, a, e, tolerance);
	}
}
