//! Cookie attribute flags.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Attribute bits stored in a cookie record's flag field.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CookieFlags: u32 {
        /// Cookie is only sent over HTTPS.
        const SECURE = 0b0000_0001;
        /// Cookie is hidden from scripts.
        const HTTP_ONLY = 0b0000_0100;
    }
}

impl CookieFlags {
    /// Interpret the raw little-endian flag field.
    ///
    /// Returns `None` for any value outside the known combinations
    /// (0, 1, 4, 5), including negative values.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 | 1 | 4 | 5 => Self::from_bits(raw as u32),
            _ => None,
        }
    }

    /// Get the description used in exported records.
    pub fn description(&self) -> &'static str {
        if *self == Self::SECURE | Self::HTTP_ONLY {
            "Secure; HttpOnly"
        } else if *self == Self::SECURE {
            "Secure"
        } else if *self == Self::HTTP_ONLY {
            "HttpOnly"
        } else {
            ""
        }
    }
}

impl fmt::Display for CookieFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Map a raw flag value to its description, `"Unknown"` for unrecognized values.
pub fn describe_flag(raw: i32) -> &'static str {
    CookieFlags::from_raw(raw)
        .map(|flags| flags.description())
        .unwrap_or("Unknown")
}
