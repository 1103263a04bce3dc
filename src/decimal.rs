//! Decimal integer reads.
//!
//! Only the 32-bit reads scan text. Narrower reads run the 32-bit scan and
//! then range-check, rolling back the whole number if it does not fit.

use crate::{
	config::Narrowing,
	cursor::Cursor,
	error::Result,
};

// any magnitude past this is out of range for both u32 and i32
const OVERFLOW: u64 = 1 << 33;

impl Cursor<'_> {
	/// Scans `\s*[+-]?[0-9]+` and returns the value widened to i64.
	/// Magnitudes are clamped to `OVERFLOW` so the caller's range check rejects them.
	fn scan_decimal(&mut self, signed: bool, what: &'static str) -> Result<i64> {
		let blanks = self
			.remaining()
			.iter()
			.take_while(|b| b.is_ascii_whitespace())
			.count();
		self.bump(blanks);

		let negative = match self.peek() {
			Some(b'+') => {
				self.bump(1);
				false
			}
			Some(b'-') if signed => {
				self.bump(1);
				true
			}
			Some(_) => false,
			None => return Err(self.mismatch(what)),
		};

		let mut magnitude: u64 = 0;
		let mut digits = 0;
		while let Some(d) = self.peek().filter(u8::is_ascii_digit) {
			magnitude = (magnitude * 10 + (d - b'0') as u64).min(OVERFLOW);
			digits += 1;
			self.bump(1);
		}

		if digits == 0 {
			return Err(self.mismatch(what));
		}

		let magnitude = magnitude as i64;
		Ok(if negative { -magnitude } else { magnitude })
	}

	pub fn read_u32(&mut self) -> Result<u32> {
		self.atomic("u32", |c| {
			let v = c.scan_decimal(false, "u32")?;
			u32::try_from(v).map_err(|_| c.mismatch("u32"))
		})
	}

	pub fn read_u16(&mut self) -> Result<u16> {
		self.atomic("u16", |c| {
			let v = c.read_u32()?;
			u16::try_from(v).map_err(|_| c.mismatch("u16"))
		})
	}

	pub fn read_u8(&mut self) -> Result<u8> {
		self.atomic("u8", |c| {
			let v = c.read_u32()?;
			u8::try_from(v).map_err(|_| c.mismatch("u8"))
		})
	}

	pub fn read_i32(&mut self) -> Result<i32> {
		self.atomic("i32", |c| {
			let v = c.scan_decimal(true, "i32")?;
			i32::try_from(v).map_err(|_| c.mismatch("i32"))
		})
	}

	pub fn read_i16(&mut self) -> Result<i16> {
		self.atomic("i16", |c| {
			let v = c.read_i32()?;
			match c.options.narrowing {
				Narrowing::Strict => i16::try_from(v).map_err(|_| c.mismatch("i16")),
				Narrowing::Permissive => Ok(v as i16),
			}
		})
	}

	pub fn read_i8(&mut self) -> Result<i8> {
		self.atomic("i8", |c| {
			let v = c.read_i32()?;
			match c.options.narrowing {
				Narrowing::Strict => i8::try_from(v).map_err(|_| c.mismatch("i8")),
				Narrowing::Permissive => Ok(v as i8),
			}
		})
	}
}
