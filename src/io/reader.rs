use std::io::{Read, Result};

/// Little-endian field readers for RIFF headers.
pub trait ReadPrimitives: Read {
	#[inline]
	fn read_tag(&mut self) -> Result<[u8; 4]> {
		let mut buf = [0u8; 4];
		self.read_exact(&mut buf)?;
		Ok(buf)
	}

	#[inline]
	fn read_u16_le(&mut self) -> Result<u16> {
		let mut buf = [0u8; 2];
		self.read_exact(&mut buf)?;
		Ok(u16::from_le_bytes(buf))
	}

	#[inline]
	fn read_u32_le(&mut self) -> Result<u32> {
		let mut buf = [0u8; 4];
		self.read_exact(&mut buf)?;
		Ok(u32::from_le_bytes(buf))
	}

	/// Grows with the bytes actually read, not with `len`.
	fn read_vec(&mut self, len: usize) -> Result<Vec<u8>> {
		let mut buf = Vec::new();
		Read::take(&mut *self, len as u64).read_to_end(&mut buf)?;
		if buf.len() < len {
			return Err(std::io::ErrorKind::UnexpectedEof.into());
		}
		Ok(buf)
	}

	fn skip(&mut self, len: u64) -> Result<()> {
		let mut limited = Read::take(&mut *self, len);
		let copied = std::io::copy(&mut limited, &mut std::io::sink())?;
		if copied < len {
			return Err(std::io::ErrorKind::UnexpectedEof.into());
		}
		Ok(())
	}
}

impl<R: Read + ?Sized> ReadPrimitives for R {}
