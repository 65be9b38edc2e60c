use crate::error::{WavError, WavResult};

/// Width of one PCM sample on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitDepth {
	Depth16,
	Depth24,
	Depth32,
}

impl BitDepth {
	pub fn from_bits(bits: u16) -> WavResult<Self> {
		match bits {
			16 => Ok(Self::Depth16),
			24 => Ok(Self::Depth24),
			32 => Ok(Self::Depth32),
			other => Err(WavError::UnsupportedBitDepth(other)),
		}
	}

	#[inline]
	pub const fn bits(self) -> u16 {
		match self {
			Self::Depth16 => 16,
			Self::Depth24 => 24,
			Self::Depth32 => 32,
		}
	}

	#[inline]
	pub const fn bytes(self) -> usize {
		self.bits() as usize / 8
	}

	/// Half-range magnitude, `2^(bits - 1)`.
	#[inline]
	pub fn scale(self) -> f64 {
		(1u64 << (self.bits() - 1)) as f64
	}

	#[inline]
	fn min_int(self) -> i64 {
		-(1i64 << (self.bits() - 1))
	}

	#[inline]
	fn max_int(self) -> i64 {
		(1i64 << (self.bits() - 1)) - 1
	}

	/// Little-endian two's-complement bytes to a normalized double.
	pub fn decode(self, bytes: &[u8]) -> WavResult<f64> {
		Ok(Sample::from_le_bytes(self, bytes)?.to_f64())
	}

	/// Normalized double to little-endian bytes, appended to `out`.
	pub fn encode(self, value: f64, overflow: Overflow, out: &mut Vec<u8>) -> WavResult<()> {
		Sample::from_f64(self, value, overflow)?.write_le(out);
		Ok(())
	}
}

/// What `encode` does with values outside `[-1.0, 1.0)`.
///
/// `Wrap` keeps only the low `bits` of the truncated integer, so `1.0` at
/// 16-bit comes back as `-1.0`. Callers that can produce such values should
/// pre-scale or pick `Clamp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
	#[default]
	Wrap,
	Clamp,
	Reject,
}

/// One decoded PCM sample. `Sample24` holds a sign-extended 24-bit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
	Sample16(i16),
	Sample24(i32),
	Sample32(i32),
}

impl Sample {
	pub const fn zero(depth: BitDepth) -> Self {
		match depth {
			BitDepth::Depth16 => Self::Sample16(0),
			BitDepth::Depth24 => Self::Sample24(0),
			BitDepth::Depth32 => Self::Sample32(0),
		}
	}

	#[inline]
	pub const fn depth(&self) -> BitDepth {
		match self {
			Self::Sample16(_) => BitDepth::Depth16,
			Self::Sample24(_) => BitDepth::Depth24,
			Self::Sample32(_) => BitDepth::Depth32,
		}
	}

	#[inline]
	pub const fn as_i32(&self) -> i32 {
		match *self {
			Self::Sample16(v) => v as i32,
			Self::Sample24(v) | Self::Sample32(v) => v,
		}
	}

	pub fn from_le_bytes(depth: BitDepth, bytes: &[u8]) -> WavResult<Self> {
		if bytes.len() != depth.bytes() {
			return Err(WavError::SampleWidth { expected: depth.bytes(), found: bytes.len() });
		}

		let sample = match depth {
			BitDepth::Depth16 => Self::Sample16(i16::from_le_bytes([bytes[0], bytes[1]])),
			// place the three bytes high, then shift back down to sign-extend bit 23
			BitDepth::Depth24 => Self::Sample24(i32::from_le_bytes([0, bytes[0], bytes[1], bytes[2]]) >> 8),
			BitDepth::Depth32 => {
				Self::Sample32(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
			}
		};

		Ok(sample)
	}

	/// Scales by `2^(bits - 1)` and truncates toward zero.
	pub fn from_f64(depth: BitDepth, value: f64, overflow: Overflow) -> WavResult<Self> {
		let scaled = value * depth.scale();

		let int = match overflow {
			Overflow::Wrap => scaled as i64,
			Overflow::Clamp => (scaled.trunc() as i64).clamp(depth.min_int(), depth.max_int()),
			Overflow::Reject => {
				if !(-1.0..1.0).contains(&value) {
					return Err(WavError::ValueOutOfRange(value));
				}
				scaled as i64
			}
		};

		Ok(Self::from_i64_wrapping(depth, int))
	}

	fn from_i64_wrapping(depth: BitDepth, int: i64) -> Self {
		match depth {
			BitDepth::Depth16 => Self::Sample16(int as i16),
			BitDepth::Depth24 => Self::Sample24(((int as i32) << 8) >> 8),
			BitDepth::Depth32 => Self::Sample32(int as i32),
		}
	}

	#[inline]
	pub fn to_f64(&self) -> f64 {
		self.as_i32() as f64 / self.depth().scale()
	}

	pub fn write_le(&self, out: &mut Vec<u8>) {
		match *self {
			Self::Sample16(v) => out.extend_from_slice(&v.to_le_bytes()),
			Self::Sample24(v) => out.extend_from_slice(&v.to_le_bytes()[..3]),
			Self::Sample32(v) => out.extend_from_slice(&v.to_le_bytes()),
		}
	}
}
