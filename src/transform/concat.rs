use super::{common_depth, shared_channel_count, shared_depth};
use crate::core::{Channels, Sample};
use crate::error::WavResult;

/// Appends sample sets end to end. All sets must share one bit depth.
pub fn concatenate(sets: &[&[Sample]]) -> WavResult<Vec<Sample>> {
	common_depth(sets)?;

	let total = sets.iter().map(|set| set.len()).sum();
	let mut output = Vec::with_capacity(total);
	for set in sets {
		output.extend_from_slice(set);
	}
	Ok(output)
}

/// Appends whole clips, channel by channel.
pub fn concatenate_channels(clips: &[&[Vec<Sample>]]) -> WavResult<Channels> {
	let channels = shared_channel_count(clips)?;
	shared_depth(clips)?;

	(0..channels)
		.map(|c| {
			let sets: Vec<&[Sample]> = clips.iter().map(|clip| clip[c].as_slice()).collect();
			concatenate(&sets)
		})
		.collect()
}
