use super::sample::{BitDepth, Sample};
use crate::error::{WavError, WavResult};
use std::fmt;

pub const FORMAT_PCM: u16 = 1;
pub const PCM_FMT_CHUNK_SIZE: u32 = 16;

/// Shape of a PCM stream. Built once, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingInfo {
	channel_count: u16,
	sample_rate: u32,
	bit_depth: BitDepth,
	format_code: u16,
	chunk_size: u32,
}

impl SamplingInfo {
	pub fn new(channel_count: u16, sample_rate: u32, bits_per_sample: u16) -> WavResult<Self> {
		let bit_depth = BitDepth::from_bits(bits_per_sample)?;
		Self::with_depth(channel_count, sample_rate, bit_depth)
	}

	pub fn with_depth(channel_count: u16, sample_rate: u32, bit_depth: BitDepth) -> WavResult<Self> {
		Self::from_fmt(FORMAT_PCM, PCM_FMT_CHUNK_SIZE, channel_count, sample_rate, bit_depth)
	}

	/// Full form used when the fields come from a parsed `fmt ` chunk.
	pub fn from_fmt(
		format_code: u16,
		chunk_size: u32,
		channel_count: u16,
		sample_rate: u32,
		bit_depth: BitDepth,
	) -> WavResult<Self> {
		if channel_count == 0 {
			return Err(WavError::InvalidChannelCount);
		}
		Ok(Self { channel_count, sample_rate, bit_depth, format_code, chunk_size })
	}

	/// Two channels, 44.1 kHz, 16-bit.
	pub fn stereo() -> Self {
		Self { channel_count: 2, ..Self::default() }
	}

	/// Same stream shape at another bit depth.
	pub fn at_depth(&self, bit_depth: BitDepth) -> Self {
		Self { bit_depth, ..*self }
	}

	#[inline]
	pub fn channel_count(&self) -> u16 {
		self.channel_count
	}

	#[inline]
	pub fn channels(&self) -> usize {
		self.channel_count as usize
	}

	#[inline]
	pub fn sample_rate(&self) -> u32 {
		self.sample_rate
	}

	#[inline]
	pub fn bit_depth(&self) -> BitDepth {
		self.bit_depth
	}

	#[inline]
	pub fn bits_per_sample(&self) -> u16 {
		self.bit_depth.bits()
	}

	#[inline]
	pub fn format_code(&self) -> u16 {
		self.format_code
	}

	#[inline]
	pub fn chunk_size(&self) -> u32 {
		self.chunk_size
	}

	#[inline]
	pub fn bytes_per_sample(&self) -> usize {
		self.bit_depth.bytes()
	}

	/// Bytes per frame.
	#[inline]
	pub fn block_align(&self) -> usize {
		self.bytes_per_sample() * self.channels()
	}

	/// Block align as stored in the `fmt ` chunk.
	pub fn block_align_field(&self) -> WavResult<u16> {
		u16::try_from(self.block_align()).map_err(|_| WavError::HeaderOverflow("block align"))
	}

	/// Exact byte rate; fails when it does not fit the 32-bit header field.
	pub fn bytes_per_second(&self) -> WavResult<u32> {
		u32::try_from(self.block_align())
			.ok()
			.and_then(|align| self.sample_rate.checked_mul(align))
			.ok_or(WavError::HeaderOverflow("byte rate"))
	}

	pub fn sample_prototype(&self) -> Sample {
		Sample::zero(self.bit_depth)
	}
}

impl Default for SamplingInfo {
	fn default() -> Self {
		Self {
			channel_count: 1,
			sample_rate: 44100,
			bit_depth: BitDepth::Depth16,
			format_code: FORMAT_PCM,
			chunk_size: PCM_FMT_CHUNK_SIZE,
		}
	}
}

impl fmt::Display for SamplingInfo {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} Hz, {} ch, {}-bit (format {}, fmt size {})",
			self.sample_rate,
			self.channel_count,
			self.bits_per_sample(),
			self.format_code,
			self.chunk_size
		)
	}
}
