pub mod decode;
pub mod encode;

pub use decode::{PcmDecoder, TrailingBytes};
pub use encode::PcmEncoder;

use crate::error::{WavError, WavResult};

/// Checks per-channel sequences against the expected channel count and
/// returns the shared length.
pub fn frame_count<T>(channels: &[Vec<T>], expected: usize) -> WavResult<usize> {
	if channels.len() != expected {
		return Err(WavError::ChannelCountMismatch { expected, found: channels.len() });
	}

	let len = channels.first().map_or(0, Vec::len);
	for (channel, samples) in channels.iter().enumerate() {
		if samples.len() != len {
			return Err(WavError::ChannelLengthMismatch { channel, expected: len, found: samples.len() });
		}
	}

	Ok(len)
}
