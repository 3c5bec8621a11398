//! Plain text exporter.

use std::io::Write;

use crate::{CookieRecord, Result};

/// Format one record as a `Cookie:` line, without the trailing newline.
pub fn format_line(record: &CookieRecord) -> String {
    format!(
        "Cookie: {}={}; domain={}; path={}; created={};expires={}; {}",
        record.name,
        record.value,
        record.url,
        record.path,
        record.create_date,
        record.expiry_date,
        record.cookie_flag
    )
}

/// Write one line per record.
pub fn write_text<W: Write>(records: &[CookieRecord], mut writer: W) -> Result<()> {
    for record in records {
        writeln!(writer, "{}", format_line(record))?;
    }
    Ok(())
}
