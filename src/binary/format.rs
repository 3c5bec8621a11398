//! Binary cookie format constants and structures.

use time::macros::format_description;
use time::OffsetDateTime;

use crate::{Error, Result};

/// Magic bytes for identifying binary cookie files.
pub const MAGIC: [u8; 4] = *b"cook";

/// Seconds between the Unix epoch and the Mac epoch (2001-01-01T00:00:00Z).
pub const MAC_EPOCH_OFFSET: i64 = 978_307_200;

/// Size of generic tag and reserved fields.
pub const TAG_SIZE: usize = 4;

/// Size of the marker between the sub-offsets and the dates of a cookie.
pub const COOKIE_END_MARKER_SIZE: usize = 8;

/// File header: magic followed by the big-endian page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    /// Magic bytes: "cook"
    pub magic: [u8; 4],
    /// Number of pages (i32 BE)
    pub page_count: i32,
}

/// Check the file magic.
pub fn validate_magic(magic: [u8; 4]) -> Result<()> {
    if magic != MAGIC {
        return Err(Error::InvalidMagic(magic));
    }
    Ok(())
}

/// Per-page header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageHeader {
    /// Page start tag (not validated)
    pub tag: [u8; 4],
    /// Number of cookies in the page (i32 LE)
    pub cookie_count: i32,
    /// Page-relative cookie offsets (i32 LE). Not used for seeking: cookies
    /// are decoded in sequence directly after the header.
    pub cookie_offsets: Vec<i32>,
    /// End-of-header tag (not validated)
    pub end_tag: [u8; 4],
}

/// Format a Mac absolute timestamp as `"Mon, 01 Jan 2024"` in UTC.
///
/// Fractional seconds are floored before conversion. Years past 9999 are
/// written as plain digits (`"Mon, 30 Jun 14645"`).
pub fn format_mac_time(raw: f64) -> Result<String> {
    let unix = (raw + MAC_EPOCH_OFFSET as f64).floor();
    if !unix.is_finite() || unix < i64::MIN as f64 || unix > i64::MAX as f64 {
        return Err(Error::InvalidTimestamp(raw));
    }

    let date = OffsetDateTime::from_unix_timestamp(unix as i64)
        .map_err(|_| Error::InvalidTimestamp(raw))?;

    // `[year]` prefixes a `+` on five-digit years, so the year is appended here.
    let prefix = date
        .format(format_description!(
            "[weekday repr:short], [day] [month repr:short]"
        ))
        .map_err(|_| Error::InvalidTimestamp(raw))?;

    Ok(format!("{} {:04}", prefix, date.year()))
}
