pub mod read;
pub mod write;

pub use read::WavReader;
pub use write::WavWriter;

use crate::codecs::pcm::frame_count;
use crate::codecs::{PcmDecoder, PcmEncoder, TrailingBytes};
use crate::core::{BitDepth, Channels, Overflow, Sample, SamplingInfo};
use crate::error::{WavError, WavResult};
use crate::transform;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// A whole WAV file held in memory as per-channel samples.
#[derive(Debug, Clone, PartialEq)]
pub struct WavFile {
	info: SamplingInfo,
	channels: Channels,
}

impl WavFile {
	pub fn new(info: SamplingInfo, channels: Channels) -> WavResult<Self> {
		frame_count(&channels, info.channels())?;

		let depth = info.bit_depth();
		if channels.iter().flatten().any(|sample| sample.depth() != depth) {
			return Err(WavError::MixedBitDepth);
		}

		Ok(Self { info, channels })
	}

	pub fn from_f64(info: SamplingInfo, input: &[Vec<f64>], overflow: Overflow) -> WavResult<Self> {
		let channels = PcmEncoder::new(info).with_overflow(overflow).samples_from_f64(input)?;
		Ok(Self { info, channels })
	}

	pub fn open<P: AsRef<Path>>(path: P, trailing: TrailingBytes) -> WavResult<Self> {
		let path = path.as_ref();
		log::debug!("reading {}", path.display());
		Self::read_from(BufReader::new(File::open(path)?), trailing)
	}

	pub fn read_from<R: Read>(reader: R, trailing: TrailingBytes) -> WavResult<Self> {
		let reader = WavReader::new(reader)?;
		let info = reader.info();
		let data = reader.read_data()?;
		let channels = PcmDecoder::new(info).with_trailing(trailing).deinterleave(&data)?;
		Ok(Self { info, channels })
	}

	pub fn save<P: AsRef<Path>>(&self, path: P) -> WavResult<()> {
		let path = path.as_ref();
		log::debug!("writing {}", path.display());
		self.write_to(BufWriter::new(File::create(path)?))?;
		Ok(())
	}

	pub fn write_to<W: Write>(&self, writer: W) -> WavResult<W> {
		let data = self.to_data()?;
		WavWriter::new(writer, self.info).write(&data)
	}

	/// Interleaved `data` payload.
	pub fn to_data(&self) -> WavResult<Vec<u8>> {
		PcmEncoder::new(self.info).interleave(&self.channels)
	}

	pub fn info(&self) -> SamplingInfo {
		self.info
	}

	pub fn channels(&self) -> &[Vec<Sample>] {
		&self.channels
	}

	pub fn into_channels(self) -> Channels {
		self.channels
	}

	pub fn samples_per_channel(&self) -> usize {
		self.channels.first().map_or(0, Vec::len)
	}

	pub fn duration_secs(&self) -> f64 {
		if self.info.sample_rate() == 0 {
			return 0.0;
		}
		self.samples_per_channel() as f64 / self.info.sample_rate() as f64
	}

	pub fn samples_as_f64(&self) -> Vec<Vec<f64>> {
		self.channels.iter().map(|c| c.iter().map(Sample::to_f64).collect()).collect()
	}

	/// Requantizes every sample to `depth`.
	pub fn convert(&self, depth: BitDepth, overflow: Overflow) -> WavResult<Self> {
		Self::from_f64(self.info.at_depth(depth), &self.samples_as_f64(), overflow)
	}

	pub fn concatenate(files: &[WavFile]) -> WavResult<Self> {
		let info = shared_info(files)?;
		let clips: Vec<&[Vec<Sample>]> = files.iter().map(|f| f.channels.as_slice()).collect();
		Ok(Self { info, channels: transform::concatenate_channels(&clips)? })
	}

	pub fn superimpose(files: &[WavFile], overflow: Overflow) -> WavResult<Self> {
		let info = shared_info(files)?;
		let clips: Vec<&[Vec<Sample>]> = files.iter().map(|f| f.channels.as_slice()).collect();
		Ok(Self { info, channels: transform::superimpose_channels(&clips, overflow)? })
	}
}

fn shared_info(files: &[WavFile]) -> WavResult<SamplingInfo> {
	let first = files.first().ok_or(WavError::invalid_data("no input files"))?.info;

	for file in &files[1..] {
		let info = file.info;
		if info.channel_count() != first.channel_count()
			|| info.sample_rate() != first.sample_rate()
			|| info.bit_depth() != first.bit_depth()
		{
			return Err(WavError::FormatMismatch(format!("{} vs {}", first, info)));
		}
	}

	Ok(first)
}
