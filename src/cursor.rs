use std::ffi::CStr;

use bytes::Buf;
use tracing::{debug, trace};

use crate::{
	config::Options,
	error::{CursorError, Result},
};

/// Forward-only read position over a caller-owned, null-terminated buffer.
///
/// Every operation either advances past exactly what it consumed or leaves
/// the position where it was on entry.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
	// logical bytes only, the sentinel is checked once in `with_options` and then dropped
	buffer: &'a [u8],
	pos: usize,
	pub(crate) options: Options,
}

impl<'a> Cursor<'a> {
	/// Creates a cursor over the first `length` bytes of `buffer`.
	///
	/// `buffer[length]` must be `0`. Fails with `InvalidArgument` for an empty
	/// buffer or zero length and `NotTerminated` when the sentinel is missing.
	pub fn init(buffer: &'a [u8], length: usize) -> Result<Self> {
		Self::with_options(buffer, length, Options::default())
	}

	pub fn with_options(buffer: &'a [u8], length: usize, options: Options) -> Result<Self> {
		if buffer.is_empty() {
			debug!("refusing empty buffer");
			return Err(CursorError::InvalidArgument("empty buffer"));
		}
		if length == 0 {
			debug!("refusing zero length");
			return Err(CursorError::InvalidArgument("zero length"));
		}

		match buffer.get(length) {
			Some(&0) => {}
			_ => {
				debug!(length, buffer_len = buffer.len(), "sentinel missing");
				return Err(CursorError::NotTerminated { length });
			}
		}

		Ok(Self {
			buffer: &buffer[..length],
			pos: 0,
			options,
		})
	}

	/// Single-shot cursor over a C string, e.g. `Cursor::from_cstr(c"SKIP+10,20")`.
	pub fn from_cstr(s: &'a CStr) -> Result<Self> {
		let bytes = s.to_bytes_with_nul();
		Self::init(bytes, bytes.len() - 1)
	}

	pub fn options(&self) -> Options {
		self.options
	}

	pub fn position(&self) -> usize {
		self.pos
	}

	/// Logical length, excluding the sentinel
	pub fn len(&self) -> usize {
		self.buffer.len()
	}

	pub fn available(&self) -> usize {
		self.buffer.len().saturating_sub(self.pos)
	}

	pub fn is_empty(&self) -> bool {
		self.pos >= self.buffer.len()
	}

	/// The unread part of the logical buffer.
	pub fn remaining(&self) -> &'a [u8] {
		&self.buffer[self.pos..]
	}

	pub fn peek(&self) -> Option<u8> {
		self.buffer.get(self.pos).copied()
	}

	/// Runs `f` and restores the entry position if it fails.
	///
	/// Parse errors coming out of `f` are reported under `what` at the entry
	/// offset, so callers see the operation they invoked rather than the
	/// primitive that tripped.
	pub(crate) fn atomic<T>(
		&mut self,
		what: &'static str,
		f: impl FnOnce(&mut Self) -> Result<T>,
	) -> Result<T> {
		let start = self.pos;

		f(self).map_err(|e| {
			self.pos = start;
			trace!(what, offset = start, "rolled back");

			match e {
				CursorError::Parse { .. } => CursorError::Parse { what, offset: start },
				other => other,
			}
		})
	}

	pub(crate) fn mismatch(&self, what: &'static str) -> CursorError {
		CursorError::Parse {
			what,
			offset: self.pos,
		}
	}

	/// Moves forward `n` bytes. Callers must have checked `available()`.
	pub(crate) fn bump(&mut self, n: usize) {
		debug_assert!(n <= self.available());
		self.pos += n;
	}

	pub fn read_char(&mut self) -> Result<char> {
		self.read_byte().map(char::from)
	}

	pub fn read_byte(&mut self) -> Result<u8> {
		let byte = self.peek().ok_or_else(|| self.mismatch("byte"))?;
		self.pos += 1;

		Ok(byte)
	}

	/// Reads a single raw `0` or `1` byte.
	pub fn read_bool(&mut self) -> Result<bool> {
		self.atomic("bool", |c| match c.read_byte()? {
			0 => Ok(false),
			1 => Ok(true),
			_ => Err(c.mismatch("bool")),
		})
	}
}

impl Buf for Cursor<'_> {
	fn remaining(&self) -> usize {
		self.available()
	}

	fn chunk(&self) -> &[u8] {
		Cursor::remaining(self)
	}

	fn advance(&mut self, cnt: usize) {
		assert!(
			cnt <= self.available(),
			"cannot advance past end of cursor ({cnt} > {})",
			self.available()
		);
		self.pos += cnt;
	}
}
