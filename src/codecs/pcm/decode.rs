use crate::core::{Channels, Sample, SamplingInfo};
use crate::error::{WavError, WavResult};

/// Handling of bytes past the last whole frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingBytes {
	#[default]
	Reject,
	Drop,
}

/// Splits a frame-interleaved `data` payload into per-channel samples.
pub struct PcmDecoder {
	info: SamplingInfo,
	trailing: TrailingBytes,
}

impl PcmDecoder {
	pub fn new(info: SamplingInfo) -> Self {
		Self { info, trailing: TrailingBytes::default() }
	}

	pub fn with_trailing(mut self, trailing: TrailingBytes) -> Self {
		self.trailing = trailing;
		self
	}

	pub fn info(&self) -> SamplingInfo {
		self.info
	}

	pub fn samples_per_channel(&self, len: usize) -> WavResult<usize> {
		let block_align = self.info.block_align();
		let remainder = len % block_align;

		if remainder != 0 {
			match self.trailing {
				TrailingBytes::Reject => return Err(WavError::TruncatedBuffer { len, block_align }),
				TrailingBytes::Drop => {
					log::warn!("dropping {} trailing bytes after the last whole frame", remainder);
				}
			}
		}

		Ok(len / block_align)
	}

	pub fn deinterleave(&self, data: &[u8]) -> WavResult<Channels> {
		let nb_samples = self.samples_per_channel(data.len())?;
		let depth = self.info.bit_depth();
		let mut channels: Channels =
			(0..self.info.channels()).map(|_| Vec::with_capacity(nb_samples)).collect();

		for frame in data.chunks_exact(self.info.block_align()) {
			for (channel, bytes) in channels.iter_mut().zip(frame.chunks_exact(depth.bytes())) {
				channel.push(Sample::from_le_bytes(depth, bytes)?);
			}
		}

		Ok(channels)
	}

	pub fn decode_f64(&self, data: &[u8]) -> WavResult<Vec<Vec<f64>>> {
		let channels = self.deinterleave(data)?;
		Ok(channels.iter().map(|c| c.iter().map(Sample::to_f64).collect()).collect())
	}
}
