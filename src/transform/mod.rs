pub mod concat;
pub mod mix;

pub use concat::{concatenate, concatenate_channels};
pub use mix::{superimpose, superimpose_channels};

use crate::codecs::pcm::frame_count;
use crate::core::{BitDepth, Sample};
use crate::error::{WavError, WavResult};

/// Channel count shared by every clip.
fn shared_channel_count(clips: &[&[Vec<Sample>]]) -> WavResult<usize> {
	let Some(first) = clips.first() else {
		return Ok(0);
	};

	for clip in clips {
		frame_count(clip, first.len())?;
	}

	if first.is_empty() {
		return Err(WavError::InvalidChannelCount);
	}

	Ok(first.len())
}

/// Bit depth shared by every sample, `None` when there are no samples.
fn common_depth(sets: &[&[Sample]]) -> WavResult<Option<BitDepth>> {
	let mut samples = sets.iter().flat_map(|set| set.iter());
	let Some(depth) = samples.next().map(Sample::depth) else {
		return Ok(None);
	};

	if samples.any(|sample| sample.depth() != depth) {
		return Err(WavError::MixedBitDepth);
	}

	Ok(Some(depth))
}

/// Same as `common_depth`, across every channel of every clip.
fn shared_depth(clips: &[&[Vec<Sample>]]) -> WavResult<Option<BitDepth>> {
	let sets: Vec<&[Sample]> =
		clips.iter().flat_map(|clip| clip.iter().map(Vec::as_slice)).collect();
	common_depth(&sets)
}
