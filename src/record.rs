//! Decoded cookie records.

use serde::{Deserialize, Serialize};

use crate::binary::format_mac_time;
use crate::flag::describe_flag;
use crate::Result;

/// Every field of one cookie entry as stored on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct RawCookie {
    /// Declared record size. Informational only; never used to bound reads.
    pub size: i32,
    /// Raw attribute flag value
    pub flags: i32,
    /// Sub-offsets of url, name, path and value. Informational only: the
    /// strings are read in fixed order after the dates.
    pub url_offset: i32,
    pub name_offset: i32,
    pub path_offset: i32,
    pub value_offset: i32,
    /// Expiry in seconds since the Mac epoch
    pub expiry: f64,
    /// Creation in seconds since the Mac epoch
    pub creation: f64,
    pub url: String,
    pub name: String,
    pub path: String,
    pub value: String,
}

impl RawCookie {
    /// Convert to the exported record, formatting dates and flags.
    pub fn to_record(&self) -> Result<CookieRecord> {
        Ok(CookieRecord {
            name: self.name.clone(),
            value: self.value.clone(),
            url: self.url.clone(),
            path: self.path.clone(),
            expiry_date: format_mac_time(self.expiry)?,
            create_date: format_mac_time(self.creation)?,
            cookie_flag: describe_flag(self.flags).to_string(),
        })
    }
}

/// One exported cookie. Field order is the export column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookieRecord {
    pub name: String,
    pub value: String,
    pub url: String,
    pub path: String,
    /// Expiry date, e.g. `"Mon, 01 Jan 2024"`
    pub expiry_date: String,
    /// Creation date, e.g. `"Mon, 01 Jan 2024"`
    pub create_date: String,
    /// Flag description: `""`, `"Secure"`, `"HttpOnly"`, `"Secure; HttpOnly"` or `"Unknown"`
    pub cookie_flag: String,
}

impl CookieRecord {
    /// Column names in export order.
    pub const FIELDS: [&'static str; 7] = [
        "name",
        "value",
        "url",
        "path",
        "expiry_date",
        "create_date",
        "cookie_flag",
    ];
}
