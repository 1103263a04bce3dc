use tracing::trace;

use crate::{
	cursor::Cursor,
	error::{CursorError, Result},
};

impl<'a> Cursor<'a> {
	/// Consumes the next character if it is `c`.
	pub fn skip_char(&mut self, c: u8) -> Result<()> {
		self.atomic("skip char", |cur| {
			if cur.read_byte()? == c {
				Ok(())
			} else {
				Err(cur.mismatch("skip char"))
			}
		})
	}

	/// Consumes everything up to and including the next `c`.
	pub fn skip_until_char(&mut self, c: u8) -> Result<()> {
		self.atomic("skip until char", |cur| {
			while cur.read_byte()? != c {}
			Ok(())
		})
	}

	/// Consumes `s` if the unread input starts with it.
	pub fn skip_substr(&mut self, s: impl AsRef<[u8]>) -> Result<()> {
		let s = s.as_ref();
		if s.is_empty() {
			return Err(CursorError::InvalidArgument("empty substring"));
		}

		if !self.remaining().starts_with(s) {
			trace!(offset = self.position(), "substring not at cursor");
			return Err(self.mismatch("skip substr"));
		}

		self.bump(s.len());
		Ok(())
	}

	/// Moves past the first occurrence of `s` in the unread input.
	pub fn skip_until_substr(&mut self, s: impl AsRef<[u8]>) -> Result<()> {
		let s = s.as_ref();
		if s.is_empty() {
			return Err(CursorError::InvalidArgument("empty substring"));
		}

		match self.remaining().windows(s.len()).position(|w| w == s) {
			Some(idx) => {
				self.bump(idx + s.len());
				Ok(())
			}
			None => {
				trace!(offset = self.position(), "substring not found");
				Err(self.mismatch("skip until substr"))
			}
		}
	}

	/// Copies exactly `size` characters into `out` followed by a `0`.
	///
	/// `out` must hold at least `size + 1` bytes.
	pub fn read_substr(&mut self, out: &mut [u8], size: usize) -> Result<()> {
		if size == 0 {
			return Err(CursorError::InvalidArgument("zero size"));
		}
		if out.len() <= size {
			return Err(CursorError::InvalidArgument("output buffer too small"));
		}

		let src = self.read_slice(size)?;
		out[..size].copy_from_slice(src);
		out[size] = 0;

		Ok(())
	}

	/// Copies characters into `out` until `c`, which is consumed but not copied.
	///
	/// At most `out.len()` characters are scanned. Returns how many were
	/// copied; a `0` is written right after them. If `c` does not show up in
	/// time nothing is written and the cursor does not move.
	pub fn read_substr_until_char(&mut self, out: &mut [u8], c: u8) -> Result<usize> {
		if out.is_empty() {
			return Err(CursorError::InvalidArgument("empty output buffer"));
		}

		let limit = out.len().min(self.available());
		let Some(idx) = self.remaining()[..limit].iter().position(|&b| b == c) else {
			trace!(offset = self.position(), limit, "stop char not found");
			return Err(self.mismatch("read substr until char"));
		};

		out[..idx].copy_from_slice(&self.remaining()[..idx]);
		out[idx] = 0;
		self.bump(idx + 1);

		Ok(idx)
	}

	/// Borrows the next `size` characters.
	pub fn read_slice(&mut self, size: usize) -> Result<&'a [u8]> {
		if self.available() < size || self.is_empty() {
			return Err(self.mismatch("read slice"));
		}

		let out = &self.remaining()[..size];
		self.bump(size);
		Ok(out)
	}

	/// Borrows everything before the next `c` and moves past `c`.
	pub fn read_slice_until_char(&mut self, c: u8) -> Result<&'a [u8]> {
		let rest = self.remaining();
		let idx = rest
			.iter()
			.position(|&b| b == c)
			.ok_or_else(|| self.mismatch("read slice until char"))?;

		self.bump(idx + 1);
		Ok(&rest[..idx])
	}

	pub fn read_str_until_char(&mut self, c: u8) -> Result<&'a str> {
		self.atomic("read str until char", |cur| {
			let bytes = cur.read_slice_until_char(c)?;
			std::str::from_utf8(bytes).map_err(|_| cur.mismatch("read str until char"))
		})
	}

	/// Skips leading ASCII spaces and returns how many there were.
	///
	/// Finding no spaces is not an error; only an exhausted cursor is.
	pub fn trim_left(&mut self) -> Result<usize> {
		if self.is_empty() {
			return Err(self.mismatch("trim left"));
		}

		let count = self.remaining().iter().take_while(|&&b| b == b' ').count();
		self.bump(count);

		Ok(count)
	}
}

#[cfg(test)]
mod tests {
	use crate::{
		cursor::Cursor,
		error::{CursorError, ErrorKind},
	};

	#[test]
	fn skip_char() {
		let mut cursor = Cursor::from_cstr(c"BC").unwrap();
		cursor.skip_char(b'B').unwrap();
		assert_eq!(cursor.read_char().unwrap(), 'C');
		assert!(cursor.is_empty());

		let mut cursor = Cursor::from_cstr(c"BC").unwrap();
		let err = cursor.skip_char(b'C').unwrap_err();
		assert_eq!(err, CursorError::Parse { what: "skip char", offset: 0 });
		assert_eq!(cursor.read_char().unwrap(), 'B');
		assert!(!cursor.is_empty());
	}

	#[test]
	fn skip_until_char() {
		let mut cursor = Cursor::from_cstr(c"AK_TEST").unwrap();
		cursor.skip_until_char(b'_').unwrap();
		assert_eq!(cursor.read_char().unwrap(), 'T');
		assert!(!cursor.is_empty());

		let mut cursor = Cursor::from_cstr(c"AK_TEST").unwrap();
		assert!(cursor.skip_until_char(b' ').is_err());
		assert_eq!(cursor.position(), 0);
		assert_eq!(cursor.read_char().unwrap(), 'A');
	}

	#[test]
	fn skip_until_last_char() {
		let mut cursor = Cursor::from_cstr(c"SKIP+").unwrap();
		cursor.skip_until_char(b'+').unwrap();
		assert!(cursor.is_empty());
		assert!(cursor.skip_until_char(b'+').is_err());
	}

	#[test]
	fn skip_substr() {
		let mut cursor = Cursor::from_cstr(c"AK_T").unwrap();
		cursor.skip_substr("AK_").unwrap();
		assert_eq!(cursor.read_char().unwrap(), 'T');
		assert!(cursor.is_empty());

		let mut cursor = Cursor::from_cstr(c"AK_T").unwrap();
		assert!(cursor.skip_substr("__").is_err());
		assert_eq!(cursor.read_char().unwrap(), 'A');

		// present, but not at the cursor
		let mut cursor = Cursor::from_cstr(c"AK_TEST_AFTER").unwrap();
		assert!(cursor.skip_substr("TEST").is_err());
		assert_eq!(cursor.position(), 0);
	}

	#[test]
	fn skip_substr_longer_than_input() {
		let mut cursor = Cursor::from_cstr(c"AK").unwrap();
		assert!(cursor.skip_substr("AKA").is_err());
		assert_eq!(cursor.position(), 0);
	}

	#[test]
	fn skip_until_substr() {
		let mut cursor = Cursor::from_cstr(c"AK_T").unwrap();
		cursor.skip_until_substr("AK_").unwrap();
		assert_eq!(cursor.read_char().unwrap(), 'T');
		assert!(cursor.is_empty());

		let mut cursor = Cursor::from_cstr(c"AK_TEST_AFTER").unwrap();
		cursor.skip_until_substr("TEST_").unwrap();
		assert_eq!(cursor.read_char().unwrap(), 'A');
		assert!(!cursor.is_empty());

		let mut cursor = Cursor::from_cstr(c"AK_TEST_AFTER").unwrap();
		cursor.skip_until_substr("AFTER").unwrap();
		assert!(cursor.is_empty());
	}

	#[test]
	fn skip_until_substr_first_occurrence() {
		let mut cursor = Cursor::from_cstr(c"a,b,c").unwrap();
		cursor.skip_until_substr(",").unwrap();
		assert_eq!(cursor.position(), 2);
	}

	#[test]
	fn skip_until_substr_missing() {
		let mut cursor = Cursor::from_cstr(c"AK_T").unwrap();
		assert!(cursor.skip_until_substr("__").is_err());
		assert_eq!(cursor.read_char().unwrap(), 'A');

		// would run off the end
		let mut cursor = Cursor::from_cstr(c"AK_TEST").unwrap();
		assert!(cursor.skip_until_substr("TESTA").is_err());
		assert_eq!(cursor.position(), 0);
	}

	#[test]
	fn search_stays_inside_logical_length() {
		let buf = b"AK_\0TEST\0";
		let mut cursor = Cursor::init(buf, 3).unwrap();
		assert!(cursor.skip_until_substr("TEST").is_err());
		assert!(cursor.skip_until_char(b'T').is_err());
		assert_eq!(cursor.position(), 0);
	}

	#[test]
	fn empty_substring_is_invalid() {
		let mut cursor = Cursor::from_cstr(c"AK").unwrap();
		assert_eq!(
			cursor.skip_substr("").unwrap_err().kind(),
			ErrorKind::InvalidArgument
		);
		assert_eq!(
			cursor.skip_until_substr("").unwrap_err().kind(),
			ErrorKind::InvalidArgument
		);
	}

	#[test]
	fn read_substr() {
		let mut cursor = Cursor::from_cstr(c"AK_TEST_AFTER").unwrap();
		let mut buf = [0xffu8; 100];
		cursor.read_substr(&mut buf, 3).unwrap();
		assert_eq!(&buf[..4], b"AK_\0");
		assert_eq!(cursor.read_char().unwrap(), 'T');

		let mut cursor = Cursor::from_cstr(c"AK").unwrap();
		let err = cursor.read_substr(&mut buf, 3).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::Parse);
		assert_eq!(cursor.position(), 0);
		assert_eq!(cursor.read_char().unwrap(), 'A');
	}

	#[test]
	fn read_substr_arguments() {
		let mut cursor = Cursor::from_cstr(c"AK_TEST").unwrap();

		let mut small = [0u8; 3];
		assert_eq!(
			cursor.read_substr(&mut small, 3).unwrap_err(),
			CursorError::InvalidArgument("output buffer too small")
		);
		assert_eq!(
			cursor.read_substr(&mut small, 0).unwrap_err(),
			CursorError::InvalidArgument("zero size")
		);
		assert_eq!(cursor.position(), 0);
	}

	#[test]
	fn read_substr_until_char() {
		let mut cursor = Cursor::from_cstr(c"AK_TEST_AFTER").unwrap();
		let mut buf = [0xffu8; 100];
		let n = cursor.read_substr_until_char(&mut buf, b'T').unwrap();
		assert_eq!(n, 3);
		assert_eq!(&buf[..4], b"AK_\0");
		assert_eq!(cursor.read_char().unwrap(), 'E');

		let mut cursor = Cursor::from_cstr(c"AK").unwrap();
		assert!(cursor.read_substr_until_char(&mut buf, b'_').is_err());
		assert_eq!(cursor.read_char().unwrap(), 'A');
	}

	#[test]
	fn read_substr_until_char_capacity() {
		// the stop char has to be found within out.len() characters
		let mut cursor = Cursor::from_cstr(c"ABCD,").unwrap();
		let mut buf = [0xffu8; 4];
		assert!(cursor.read_substr_until_char(&mut buf, b',').is_err());
		assert_eq!(cursor.position(), 0);
		assert_eq!(buf, [0xff; 4]);

		let mut buf = [0xffu8; 5];
		assert_eq!(cursor.read_substr_until_char(&mut buf, b',').unwrap(), 4);
		assert_eq!(&buf, b"ABCD\0");
		assert!(cursor.is_empty());
	}

	#[test]
	fn read_substr_until_char_immediate_stop() {
		let mut cursor = Cursor::from_cstr(c",x").unwrap();
		let mut buf = [0xffu8; 4];
		assert_eq!(cursor.read_substr_until_char(&mut buf, b',').unwrap(), 0);
		assert_eq!(buf[0], 0);
		assert_eq!(cursor.read_char().unwrap(), 'x');
	}

	#[test]
	fn zero_copy_reads() {
		let mut cursor = Cursor::from_cstr(c"OK name=value;rest").unwrap();

		assert_eq!(cursor.read_slice(2).unwrap(), b"OK");
		cursor.trim_left().unwrap();
		assert_eq!(cursor.read_str_until_char(b'=').unwrap(), "name");
		assert_eq!(cursor.read_slice_until_char(b';').unwrap(), b"value");
		assert!(cursor.read_slice(5).is_err());
		assert_eq!(cursor.read_slice(4).unwrap(), b"rest");
		assert!(cursor.read_slice(0).is_err());
	}

	#[test]
	fn read_str_rejects_invalid_utf8() {
		let buf = b"\xff\xfe;\0";
		let mut cursor = Cursor::init(buf, 3).unwrap();

		let err = cursor.read_str_until_char(b';').unwrap_err();
		assert_eq!(
			err,
			CursorError::Parse {
				what: "read str until char",
				offset: 0
			}
		);
		assert_eq!(cursor.position(), 0);
	}

	#[test]
	fn trim_left() {
		let mut cursor = Cursor::from_cstr(c"   AK_TEST").unwrap();
		assert_eq!(cursor.trim_left().unwrap(), 3);
		assert_eq!(cursor.read_char().unwrap(), 'A');

		let mut cursor = Cursor::from_cstr(c"   ").unwrap();
		assert_eq!(cursor.trim_left().unwrap(), 3);
		assert!(cursor.is_empty());
		assert!(cursor.trim_left().is_err());

		let mut cursor = Cursor::from_cstr(c"AK_TEST").unwrap();
		assert_eq!(cursor.trim_left().unwrap(), 0);
		assert_eq!(cursor.read_char().unwrap(), 'A');
	}

	#[test]
	fn trim_left_only_spaces() {
		let mut cursor = Cursor::from_cstr(c"\t x").unwrap();
		assert_eq!(cursor.trim_left().unwrap(), 0);
		assert_eq!(cursor.position(), 0);
	}
}
