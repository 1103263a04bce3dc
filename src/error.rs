use std::ops::BitOrAssign;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
	#[error("invalid argument: {0}")]
	InvalidArgument(&'static str),
	#[error("buffer is not null-terminated at offset {length}")]
	NotTerminated { length: usize },
	#[error("{what}: no match at offset {offset}")]
	Parse { what: &'static str, offset: usize },
}

/// Coarse classification of a [`CursorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	InvalidArgument,
	NotTerminated,
	Parse,
}

impl CursorError {
	pub fn kind(&self) -> ErrorKind {
		match self {
			CursorError::InvalidArgument(_) => ErrorKind::InvalidArgument,
			CursorError::NotTerminated { .. } => ErrorKind::NotTerminated,
			CursorError::Parse { .. } => ErrorKind::Parse,
		}
	}
}

pub type Result<T, E = CursorError> = std::result::Result<T, E>;

/// Collects the kinds of errors seen across a run of cursor calls.
///
/// Useful when a caller wants to fire off several reads and only check
/// once at the end:
///
/// ```
/// # use charcursor::{Cursor, Status, ErrorKind};
/// let mut cursor = Cursor::from_cstr(c"-10").unwrap();
/// let mut status = Status::default();
/// status |= cursor.read_u8();
/// status |= cursor.read_i8();
/// assert!(status.is_error());
/// assert!(status.contains(ErrorKind::Parse));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Status(u8);

impl Status {
	fn bit(kind: ErrorKind) -> u8 {
		match kind {
			ErrorKind::InvalidArgument => 0b001,
			ErrorKind::NotTerminated => 0b010,
			ErrorKind::Parse => 0b100,
		}
	}

	pub fn is_ok(&self) -> bool {
		self.0 == 0
	}

	pub fn is_error(&self) -> bool {
		!self.is_ok()
	}

	pub fn contains(&self, kind: ErrorKind) -> bool {
		self.0 & Self::bit(kind) != 0
	}
}

impl<T> BitOrAssign<Result<T>> for Status {
	fn bitor_assign(&mut self, rhs: Result<T>) {
		if let Err(e) = rhs {
			self.0 |= Self::bit(e.kind());
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn status_accumulates_kinds() {
		let mut status = Status::default();
		assert!(status.is_ok());

		status |= Ok::<_, CursorError>(1u8);
		assert!(status.is_ok());

		status |= Err::<(), _>(CursorError::InvalidArgument("buffer"));
		status |= Err::<(), _>(CursorError::Parse { what: "u8", offset: 0 });

		assert!(status.is_error());
		assert!(status.contains(ErrorKind::InvalidArgument));
		assert!(status.contains(ErrorKind::Parse));
		assert!(!status.contains(ErrorKind::NotTerminated));
	}

	#[test]
	fn error_messages() {
		let e = CursorError::Parse { what: "u16", offset: 4 };
		assert_eq!(e.to_string(), "u16: no match at offset 4");
		assert_eq!(e.kind(), ErrorKind::Parse);

		let e = CursorError::NotTerminated { length: 5 };
		assert_eq!(e.to_string(), "buffer is not null-terminated at offset 5");
	}
}
