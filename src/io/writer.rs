use std::io::{Result, Write};

/// Little-endian field writers for RIFF headers.
pub trait WritePrimitives: Write {
	#[inline]
	fn write_tag(&mut self, tag: &[u8; 4]) -> Result<()> {
		self.write_all(tag)
	}

	#[inline]
	fn write_u16_le(&mut self, value: u16) -> Result<()> {
		self.write_all(&value.to_le_bytes())
	}

	#[inline]
	fn write_u32_le(&mut self, value: u32) -> Result<()> {
		self.write_all(&value.to_le_bytes())
	}
}

impl<W: Write + ?Sized> WritePrimitives for W {}
