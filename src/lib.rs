//! Forward-only cursor over a null-terminated character buffer.
//!
//! The cursor hands out small parsing primitives (decimal and hex integers,
//! characters, substrings, delimiter skips) for line- and record-oriented
//! decoders to build on. A call either consumes exactly the token it
//! matched or leaves the cursor where it was, so a caller can try one
//! parse, fall back to another, and never see a half-consumed field.
//!
//! ```
//! use charcursor::Cursor;
//!
//! let mut cursor = Cursor::from_cstr(c"+CSQ: 23,99").unwrap();
//! cursor.skip_until_substr("+CSQ:").unwrap();
//! cursor.trim_left().unwrap();
//! assert_eq!(cursor.read_u8().unwrap(), 23);
//! cursor.skip_char(b',').unwrap();
//! assert_eq!(cursor.read_u8().unwrap(), 99);
//! assert!(cursor.is_empty());
//! ```

pub mod config;
mod cursor;
mod decimal;
pub mod error;
mod hex;
pub mod logging;
mod scan;

pub use config::{Narrowing, Options};
pub use cursor::Cursor;
pub use error::{CursorError, ErrorKind, Result, Status};
