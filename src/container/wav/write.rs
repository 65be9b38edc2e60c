use crate::core::{PCM_FMT_CHUNK_SIZE, SamplingInfo};
use crate::error::{WavError, WavResult};
use crate::io::WritePrimitives;
use std::io::Write;

/// Bytes between the RIFF size field and the `data` payload.
const HEADER_TAIL: u32 = 36;

pub struct WavWriter<W: Write> {
	writer: W,
	info: SamplingInfo,
}

impl<W: Write> WavWriter<W> {
	pub fn new(writer: W, info: SamplingInfo) -> Self {
		Self { writer, info }
	}

	fn write_header(&mut self, data_size: u32) -> WavResult<()> {
		let info = self.info;
		let byte_rate = info.bytes_per_second()?;
		let block_align = info.block_align_field()?;
		let w = &mut self.writer;

		w.write_tag(b"RIFF")?;
		w.write_u32_le(HEADER_TAIL + data_size)?;
		w.write_tag(b"WAVE")?;

		w.write_tag(b"fmt ")?;
		w.write_u32_le(PCM_FMT_CHUNK_SIZE)?;
		w.write_u16_le(info.format_code())?;
		w.write_u16_le(info.channel_count())?;
		w.write_u32_le(info.sample_rate())?;
		w.write_u32_le(byte_rate)?;
		w.write_u16_le(block_align)?;
		w.write_u16_le(info.bits_per_sample())?;

		w.write_tag(b"data")?;
		w.write_u32_le(data_size)?;

		log::debug!("wrote header: {}, data size {}", info, data_size);
		Ok(())
	}

	/// Writes the header and the complete `data` payload, then hands back the
	/// flushed writer.
	pub fn write(mut self, data: &[u8]) -> WavResult<W> {
		let data_size = u32::try_from(data.len())
			.ok()
			.filter(|size| size.checked_add(HEADER_TAIL).is_some())
			.ok_or(WavError::DataTooLarge(data.len()))?;

		self.write_header(data_size)?;
		self.writer.write_all(data)?;
		self.writer.flush()?;
		Ok(self.writer)
	}
}
