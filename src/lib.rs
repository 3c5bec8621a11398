//! binarycookies - A parser for Apple binary cookie files.
//!
//! WebKit-based browsers persist HTTP cookies in a paged binary format
//! (`Cookies.binarycookies`). This crate decodes that format into a flat
//! list of [`CookieRecord`]s and exports them as JSON, CSV or text.
//!
//! # Quick Start
//!
//! ```no_run
//! use binarycookies::{parse_path, output::{write_results, ExportConfig, OutputFormat}};
//! use std::path::Path;
//!
//! let input = Path::new("Cookies.binarycookies");
//! let records = parse_path(input)?;
//! for record in &records {
//!     println!("{}={} ({})", record.name, record.value, record.url);
//! }
//!
//! let config = ExportConfig::new(OutputFormat::Json, "out");
//! write_results(&records, &config, input)?;
//! # Ok::<(), binarycookies::Error>(())
//! ```
//!
//! # Structural Access
//!
//! [`CookieParser::parse_file`] keeps the page structure and every raw
//! field, including the ones the decoder reads but never acts on
//! (page sizes, cookie offsets, record sizes, string sub-offsets).
//!
//! # Errors
//!
//! A parse either yields every record or fails. A bad magic, a truncated
//! file, an unterminated string or an unrepresentable date all abort the
//! whole parse; a file with zero cookies is `Ok(vec![])`.

mod error;
mod flag;
mod record;

pub mod binary;
pub mod output;

// Re-export core types
pub use error::{Error, Result};
pub use flag::{describe_flag, CookieFlags};
pub use record::{CookieRecord, RawCookie};

// Re-export parser entry points
pub use binary::{parse_bytes, parse_path, CookieFile, CookieParser, Page};

// Re-export output types
pub use output::{write_results, ExportConfig, OutputFormat};
