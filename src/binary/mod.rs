//! Decoder for Apple binary cookie files.
//!
//! # File Structure
//!
//! ```text
//! +----------------------+
//! |  "cook"              |  magic
//! |  page count          |  i32 BE
//! |  page sizes          |  page count x i32 BE
//! +----------------------+
//! |  PAGE 0              |  tag, cookie count (i32 LE),
//! |                      |  cookie offsets (i32 LE), end tag,
//! |                      |  cookie records
//! +----------------------+
//! |  PAGE 1              |
//! +----------------------+
//! |      ...             |
//! +----------------------+
//! ```
//!
//! Each cookie record holds its size, flags, four string sub-offsets, an
//! 8-byte marker, expiry and creation dates (f64 LE, Mac epoch) and the
//! null-terminated url, name, path and value strings.
//!
//! Pages and cookies are decoded strictly in sequence. Page sizes, cookie
//! offsets, cookie sizes and string sub-offsets are decoded and kept but
//! never used to seek or to bound a read.

mod cursor;
mod decoder;
mod format;
mod parser;


pub use cursor::CursorReader;
pub use decoder::{CStringBytes, FieldDecoder};
pub use format::*;
pub use parser::{parse_bytes, parse_path, CookieFile, CookieParser, Page};
