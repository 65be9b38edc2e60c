use crate::core::{BitDepth, FORMAT_PCM, SamplingInfo};
use crate::error::{WavError, WavResult};
use crate::io::ReadPrimitives;
use std::io::{ErrorKind, Read};

const FMT_FIELDS_SIZE: u32 = 16;

pub struct WavReader<R: Read> {
	reader: R,
	info: SamplingInfo,
	data_size: u32,
}

impl<R: Read> WavReader<R> {
	/// Parses the RIFF header up to the start of the `data` payload.
	pub fn new(mut reader: R) -> WavResult<Self> {
		if &reader.read_tag()? != b"RIFF" {
			return Err(WavError::invalid_data("not a RIFF file"));
		}
		let riff_size = reader.read_u32_le()?;

		if &reader.read_tag()? != b"WAVE" {
			return Err(WavError::invalid_data("not a WAVE file"));
		}

		let mut info = None;

		loop {
			let chunk_id = match reader.read_tag() {
				Ok(id) => id,
				Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
					return Err(WavError::MissingChunk(if info.is_some() { "data" } else { "fmt " }));
				}
				Err(e) => return Err(e.into()),
			};
			let chunk_size = reader.read_u32_le()?;

			match &chunk_id {
				b"fmt " => {
					info = Some(Self::read_fmt(&mut reader, chunk_size)?);
				}
				b"data" => {
					let Some(info) = info else {
						return Err(WavError::MissingChunk("fmt "));
					};
					log::debug!("riff size {}, data size {}, {}", riff_size, chunk_size, info);
					return Ok(Self { reader, info, data_size: chunk_size });
				}
				other => {
					log::warn!("skipping '{}' chunk ({} bytes)", String::from_utf8_lossy(other), chunk_size);
					reader.skip(padded(chunk_size))?;
				}
			}
		}
	}

	fn read_fmt(reader: &mut R, chunk_size: u32) -> WavResult<SamplingInfo> {
		if chunk_size < FMT_FIELDS_SIZE {
			return Err(WavError::invalid_data("fmt chunk too small"));
		}

		let format_code = reader.read_u16_le()?;
		let channels = reader.read_u16_le()?;
		let sample_rate = reader.read_u32_le()?;
		let byte_rate = reader.read_u32_le()?;
		let block_align = reader.read_u16_le()?;
		let bits_per_sample = reader.read_u16_le()?;

		if format_code != FORMAT_PCM {
			return Err(WavError::UnsupportedFormat(format_code));
		}

		reader.skip(padded(chunk_size) - FMT_FIELDS_SIZE as u64)?;

		let depth = BitDepth::from_bits(bits_per_sample)?;
		let info = SamplingInfo::from_fmt(format_code, chunk_size, channels, sample_rate, depth)?;

		if info.bytes_per_second().ok() != Some(byte_rate) || block_align as usize != info.block_align() {
			log::debug!(
				"header byte rate {} / block align {} disagree with computed {:?} / {}",
				byte_rate,
				block_align,
				info.bytes_per_second().ok(),
				info.block_align()
			);
		}

		Ok(info)
	}

	pub fn info(&self) -> SamplingInfo {
		self.info
	}

	pub fn data_size(&self) -> u32 {
		self.data_size
	}

	/// Reads the whole `data` payload in one go.
	pub fn read_data(mut self) -> WavResult<Vec<u8>> {
		Ok(self.reader.read_vec(self.data_size as usize)?)
	}
}

/// RIFF chunks are word aligned.
fn padded(size: u32) -> u64 {
	size as u64 + (size & 1) as u64
}
