//! Hex integer reads.
//!
//! Everything goes through [`Cursor::read_u32_be`]. Narrow widths range-check
//! its result, signed widths reinterpret the bit pattern, and the `_le`
//! variants byte-swap the big-endian result. `"12345678"` read as `u32_le`
//! is `0x78563412`.

use byteorder::{ByteOrder, LittleEndian};

use crate::{
	config::Narrowing,
	cursor::Cursor,
	error::Result,
};

// nibbles in a u32
const MAX_NIBBLES: usize = 8;

fn nibble(c: u8) -> Option<u32> {
	char::from(c).to_digit(16)
}

impl Cursor<'_> {
	/// Reads up to 8 hex digits, most significant first.
	///
	/// Leading spaces and a single `0x` are skipped unless turned off in
	/// [`Options`](crate::Options). Stops before the first non-hex character.
	/// Fails, restoring the position from before any skipping, if no digit
	/// was read.
	pub fn read_u32_be(&mut self) -> Result<u32> {
		self.atomic("u32 be", |c| {
			if c.is_empty() {
				return Err(c.mismatch("u32 be"));
			}
			if c.options.hex_trim_spaces {
				c.trim_left()?;
			}
			if c.options.hex_prefix {
				c.skip_substr("0x").ok();
			}

			let mut value = 0u32;
			let mut count = 0;
			while count < MAX_NIBBLES {
				let Some(n) = c.peek().and_then(nibble) else {
					break;
				};
				value = (value << 4) | n;
				count += 1;
				c.bump(1);
			}

			if count == 0 {
				return Err(c.mismatch("u32 be"));
			}

			Ok(value)
		})
	}

	pub fn read_u16_be(&mut self) -> Result<u16> {
		self.atomic("u16 be", |c| {
			let v = c.read_u32_be()?;
			u16::try_from(v).map_err(|_| c.mismatch("u16 be"))
		})
	}

	pub fn read_u8_be(&mut self) -> Result<u8> {
		self.atomic("u8 be", |c| {
			let v = c.read_u32_be()?;
			u8::try_from(v).map_err(|_| c.mismatch("u8 be"))
		})
	}

	/// `read_u32_be` reinterpreted as two's complement: `"ffffffff"` is `-1`.
	pub fn read_i32_be(&mut self) -> Result<i32> {
		self.atomic("i32 be", |c| c.read_u32_be()).map(|v| v as i32)
	}

	/// The digits must fit in 16 bits (`"8000"` is `-32768`) unless narrowing
	/// is permissive, in which case the value is truncated.
	pub fn read_i16_be(&mut self) -> Result<i16> {
		self.atomic("i16 be", |c| {
			let v = c.read_u32_be()?;
			match c.options.narrowing {
				Narrowing::Strict => u16::try_from(v)
					.map(|v| v as i16)
					.map_err(|_| c.mismatch("i16 be")),
				Narrowing::Permissive => Ok(v as i16),
			}
		})
	}

	pub fn read_i8_be(&mut self) -> Result<i8> {
		self.atomic("i8 be", |c| {
			let v = c.read_u32_be()?;
			match c.options.narrowing {
				Narrowing::Strict => u8::try_from(v)
					.map(|v| v as i8)
					.map_err(|_| c.mismatch("i8 be")),
				Narrowing::Permissive => Ok(v as i8),
			}
		})
	}

	pub fn read_u32_le(&mut self) -> Result<u32> {
		self.atomic("u32 le", |c| c.read_u32_be())
			.map(|v| LittleEndian::read_u32(&v.to_be_bytes()))
	}

	pub fn read_u16_le(&mut self) -> Result<u16> {
		self.atomic("u16 le", |c| c.read_u16_be())
			.map(|v| LittleEndian::read_u16(&v.to_be_bytes()))
	}

	/// Same as `read_u8_be`, a single byte has no order.
	pub fn read_u8_le(&mut self) -> Result<u8> {
		self.atomic("u8 le", |c| c.read_u8_be())
	}

	pub fn read_i32_le(&mut self) -> Result<i32> {
		self.atomic("i32 le", |c| c.read_i32_be())
			.map(|v| LittleEndian::read_i32(&v.to_be_bytes()))
	}

	pub fn read_i16_le(&mut self) -> Result<i16> {
		self.atomic("i16 le", |c| c.read_i16_be())
			.map(|v| LittleEndian::read_i16(&v.to_be_bytes()))
	}

	pub fn read_i8_le(&mut self) -> Result<i8> {
		self.atomic("i8 le", |c| c.read_i8_be())
	}
}
