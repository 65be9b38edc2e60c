use super::frame_count;
use crate::core::{Channels, Overflow, Sample, SamplingInfo};
use crate::error::{WavError, WavResult};

/// Builds samples from doubles and interleaves them into a `data` payload.
pub struct PcmEncoder {
	info: SamplingInfo,
	overflow: Overflow,
}

impl PcmEncoder {
	pub fn new(info: SamplingInfo) -> Self {
		Self { info, overflow: Overflow::default() }
	}

	pub fn with_overflow(mut self, overflow: Overflow) -> Self {
		self.overflow = overflow;
		self
	}

	pub fn info(&self) -> SamplingInfo {
		self.info
	}

	pub fn samples_from_f64(&self, input: &[Vec<f64>]) -> WavResult<Channels> {
		frame_count(input, self.info.channels())?;
		let depth = self.info.bit_depth();

		input
			.iter()
			.map(|values| {
				values
					.iter()
					.map(|&value| Sample::from_f64(depth, value, self.overflow))
					.collect::<WavResult<Vec<Sample>>>()
			})
			.collect()
	}

	pub fn interleave(&self, channels: &[Vec<Sample>]) -> WavResult<Vec<u8>> {
		let nb_samples = frame_count(channels, self.info.channels())?;
		let depth = self.info.bit_depth();
		let mut output = Vec::with_capacity(nb_samples * self.info.block_align());

		for index in 0..nb_samples {
			for channel in channels {
				let sample = channel[index];
				if sample.depth() != depth {
					return Err(WavError::MixedBitDepth);
				}
				sample.write_le(&mut output);
			}
		}

		Ok(output)
	}

	pub fn encode_f64(&self, input: &[Vec<f64>]) -> WavResult<Vec<u8>> {
		let channels = self.samples_from_f64(input)?;
		self.interleave(&channels)
	}
}
