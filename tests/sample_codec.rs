mod common;

use pcmwav::WavError;
use pcmwav::core::{BitDepth, Overflow, Sample, SamplingInfo};

const DEPTHS: [BitDepth; 3] = [BitDepth::Depth16, BitDepth::Depth24, BitDepth::Depth32];

fn encode_bytes(depth: BitDepth, value: f64, overflow: Overflow) -> Vec<u8> {
	let mut out = Vec::new();
	depth.encode(value, overflow, &mut out).unwrap();
	out
}

#[test]
fn test_bit_depth_from_bits() {
	assert_eq!(BitDepth::from_bits(16).unwrap(), BitDepth::Depth16);
	assert_eq!(BitDepth::from_bits(24).unwrap(), BitDepth::Depth24);
	assert_eq!(BitDepth::from_bits(32).unwrap(), BitDepth::Depth32);

	for bits in [0u16, 8, 12, 20, 64] {
		assert!(matches!(BitDepth::from_bits(bits), Err(WavError::UnsupportedBitDepth(b)) if b == bits));
	}
}

#[test]
fn test_16bit_negative_full_scale() {
	let sample = Sample::from_f64(BitDepth::Depth16, -1.0, Overflow::Wrap).unwrap();
	assert_eq!(sample, Sample::Sample16(-32768));

	let bytes = encode_bytes(BitDepth::Depth16, -1.0, Overflow::Wrap);
	assert_eq!(bytes, vec![0x00, 0x80]);
	assert_eq!(BitDepth::Depth16.decode(&bytes).unwrap(), -1.0);
}

#[test]
fn test_16bit_little_endian_layout() {
	let bytes = encode_bytes(BitDepth::Depth16, 0.5, Overflow::Wrap);
	assert_eq!(bytes, vec![0x00, 0x40]);

	let sample = Sample::from_le_bytes(BitDepth::Depth16, &[0x34, 0x12]).unwrap();
	assert_eq!(sample, Sample::Sample16(0x1234));
}

#[test]
fn test_24bit_sign_extension() {
	let minus_one = Sample::from_le_bytes(BitDepth::Depth24, &[0xFF, 0xFF, 0xFF]).unwrap();
	assert_eq!(minus_one, Sample::Sample24(-1));
	assert_eq!(minus_one.to_f64(), -1.0 / 8_388_608.0);

	let min = Sample::from_le_bytes(BitDepth::Depth24, &[0x00, 0x00, 0x80]).unwrap();
	assert_eq!(min, Sample::Sample24(-8_388_608));
	assert_eq!(min.to_f64(), -1.0);

	let max = Sample::from_le_bytes(BitDepth::Depth24, &[0xFF, 0xFF, 0x7F]).unwrap();
	assert_eq!(max, Sample::Sample24(8_388_607));
	assert!(max.to_f64() < 1.0);

	let negative = Sample::from_le_bytes(BitDepth::Depth24, &[0x00, 0x00, 0xC0]).unwrap();
	assert_eq!(negative.to_f64(), -0.5);
}

#[test]
fn test_24bit_writes_three_bytes() {
	let mut out = Vec::new();
	Sample::Sample24(-2).write_le(&mut out);
	assert_eq!(out, vec![0xFE, 0xFF, 0xFF]);

	let bytes = encode_bytes(BitDepth::Depth24, -1.0, Overflow::Wrap);
	assert_eq!(bytes, vec![0x00, 0x00, 0x80]);
}

#[test]
fn test_32bit_extremes() {
	assert_eq!(BitDepth::Depth32.decode(&[0x00, 0x00, 0x00, 0x80]).unwrap(), -1.0);

	let sample = Sample::from_f64(BitDepth::Depth32, -1.0, Overflow::Wrap).unwrap();
	assert_eq!(sample, Sample::Sample32(i32::MIN));

	let bytes = encode_bytes(BitDepth::Depth32, 0.25, Overflow::Wrap);
	assert_eq!(bytes, vec![0x00, 0x00, 0x00, 0x20]);
}

#[test]
fn test_roundtrip_within_one_step() {
	let values = [-1.0, -0.75, -0.3, -0.000_01, 0.0, 0.123_4, 0.5, 0.9, 0.999_999];

	for depth in DEPTHS {
		let step = 1.0 / depth.scale();
		for &value in &values {
			let bytes = encode_bytes(depth, value, Overflow::Wrap);
			assert_eq!(bytes.len(), depth.bytes());
			let decoded = depth.decode(&bytes).unwrap();
			assert!((decoded - value).abs() < step, "{:?}: {} -> {}", depth, value, decoded);
		}
	}
}

#[test]
fn test_quantized_values_roundtrip_exactly() {
	for depth in DEPTHS {
		let scale = depth.scale();
		for int in [-(scale as i64), -12345, -1, 0, 1, 777, scale as i64 - 1] {
			let value = int as f64 / scale;
			let bytes = encode_bytes(depth, value, Overflow::Reject);
			assert_eq!(depth.decode(&bytes).unwrap(), value);
		}
	}
}

#[test]
fn test_encode_truncates_toward_zero() {
	let step = 1.0 / 32768.0;

	let just_below_zero = Sample::from_f64(BitDepth::Depth16, -0.4 * step, Overflow::Wrap).unwrap();
	assert_eq!(just_below_zero, Sample::Sample16(0));

	let positive = Sample::from_f64(BitDepth::Depth16, 100.9 * step, Overflow::Wrap).unwrap();
	assert_eq!(positive, Sample::Sample16(100));

	let negative = Sample::from_f64(BitDepth::Depth16, -100.9 * step, Overflow::Wrap).unwrap();
	assert_eq!(negative, Sample::Sample16(-100));
}

#[test]
fn test_overflow_wraps_by_default() {
	assert_eq!(Overflow::default(), Overflow::Wrap);

	let wrapped = Sample::from_f64(BitDepth::Depth16, 1.0, Overflow::Wrap).unwrap();
	assert_eq!(wrapped, Sample::Sample16(-32768));

	let wrapped = Sample::from_f64(BitDepth::Depth24, 1.0, Overflow::Wrap).unwrap();
	assert_eq!(wrapped, Sample::Sample24(-8_388_608));

	let wrapped = Sample::from_f64(BitDepth::Depth32, 1.0, Overflow::Wrap).unwrap();
	assert_eq!(wrapped, Sample::Sample32(i32::MIN));
}

#[test]
fn test_overflow_clamp() {
	let high = Sample::from_f64(BitDepth::Depth16, 1.5, Overflow::Clamp).unwrap();
	assert_eq!(high, Sample::Sample16(i16::MAX));

	let low = Sample::from_f64(BitDepth::Depth16, -3.0, Overflow::Clamp).unwrap();
	assert_eq!(low, Sample::Sample16(i16::MIN));

	let high = Sample::from_f64(BitDepth::Depth24, 1.0, Overflow::Clamp).unwrap();
	assert_eq!(high, Sample::Sample24(8_388_607));

	let high = Sample::from_f64(BitDepth::Depth32, 2.0, Overflow::Clamp).unwrap();
	assert_eq!(high, Sample::Sample32(i32::MAX));
}

#[test]
fn test_overflow_reject() {
	for value in [1.0, 1.5, -1.000_001, f64::NAN] {
		let result = Sample::from_f64(BitDepth::Depth16, value, Overflow::Reject);
		assert!(matches!(result, Err(WavError::ValueOutOfRange(_))), "{} accepted", value);
	}

	assert!(Sample::from_f64(BitDepth::Depth16, -1.0, Overflow::Reject).is_ok());
}

#[test]
fn test_wrong_byte_count() {
	let result = Sample::from_le_bytes(BitDepth::Depth24, &[0x00, 0x01]);
	assert!(matches!(result, Err(WavError::SampleWidth { expected: 3, found: 2 })));

	assert!(BitDepth::Depth32.decode(&[0u8; 3]).is_err());
}

#[test]
fn test_sampling_info_derived_fields() {
	let info = SamplingInfo::new(2, 44100, 16).unwrap();
	assert_eq!(info.bytes_per_sample(), 2);
	assert_eq!(info.block_align(), 4);
	assert_eq!(info.bytes_per_second().unwrap(), 176_400);
	assert_eq!(info.block_align_field().unwrap(), 4);
	assert_eq!(info.format_code(), 1);
	assert_eq!(info.chunk_size(), 16);

	let info = SamplingInfo::new(6, 48000, 24).unwrap();
	assert_eq!(info.block_align(), 18);
	assert_eq!(info.bytes_per_second().unwrap(), 864_000);
}

#[test]
fn test_header_fields_that_do_not_fit() {
	let wide = SamplingInfo::new(20000, 44100, 32).unwrap();
	assert_eq!(wide.block_align(), 80_000);
	assert!(matches!(wide.block_align_field(), Err(WavError::HeaderOverflow("block align"))));

	let fast = SamplingInfo::new(16000, 200_000, 16).unwrap();
	assert_eq!(fast.block_align_field().unwrap(), 32_000);
	assert!(matches!(fast.bytes_per_second(), Err(WavError::HeaderOverflow("byte rate"))));
}

#[test]
fn test_sampling_info_validation() {
	assert!(matches!(SamplingInfo::new(0, 44100, 16), Err(WavError::InvalidChannelCount)));
	assert!(matches!(SamplingInfo::new(1, 44100, 8), Err(WavError::UnsupportedBitDepth(8))));
}

#[test]
fn test_sampling_info_presets() {
	let default = SamplingInfo::default();
	assert_eq!(default.channel_count(), 1);
	assert_eq!(default.sample_rate(), 44100);
	assert_eq!(default.bits_per_sample(), 16);

	let stereo = SamplingInfo::stereo();
	assert_eq!(stereo.channel_count(), 2);
	assert_eq!(stereo.sample_rate(), 44100);

	let deep = stereo.at_depth(BitDepth::Depth24);
	assert_eq!(deep.bits_per_sample(), 24);
	assert_eq!(deep.channel_count(), 2);
	assert_eq!(stereo.bits_per_sample(), 16);
}

#[test]
fn test_sample_prototype_matches_depth() {
	for depth in DEPTHS {
		let info = SamplingInfo::with_depth(1, 8000, depth).unwrap();
		let prototype = info.sample_prototype();
		assert_eq!(prototype.depth(), depth);
		assert_eq!(prototype.to_f64(), 0.0);
	}
}
