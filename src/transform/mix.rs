use super::{common_depth, shared_channel_count, shared_depth};
use crate::core::{Channels, Overflow, Sample};
use crate::error::WavResult;

/// Additive mix of sample sets. The output is as long as the longest set;
/// shorter sets contribute nothing past their end. Sums outside `[-1.0, 1.0)`
/// go through `overflow` when re-encoded.
pub fn superimpose(sets: &[&[Sample]], overflow: Overflow) -> WavResult<Vec<Sample>> {
	let Some(depth) = common_depth(sets)? else {
		return Ok(Vec::new());
	};

	let len = sets.iter().map(|set| set.len()).max().unwrap_or(0);
	let mut sums = vec![0.0f64; len];

	for set in sets {
		for (sum, sample) in sums.iter_mut().zip(set.iter()) {
			*sum += sample.to_f64();
		}
	}

	sums.into_iter().map(|value| Sample::from_f64(depth, value, overflow)).collect()
}

/// Mixes whole clips, channel by channel.
pub fn superimpose_channels(clips: &[&[Vec<Sample>]], overflow: Overflow) -> WavResult<Channels> {
	let channels = shared_channel_count(clips)?;
	shared_depth(clips)?;

	(0..channels)
		.map(|c| {
			let sets: Vec<&[Sample]> = clips.iter().map(|clip| clip[c].as_slice()).collect();
			superimpose(&sets, overflow)
		})
		.collect()
}
