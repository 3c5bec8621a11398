//! Error types for binarycookies.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for binarycookies operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The cookie file could not be opened
    #[error("failed to open the cookie file {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid file magic bytes
    #[error("not a binary cookie file: expected magic \"cook\", found {0:02x?}")]
    InvalidMagic([u8; 4]),

    /// A fixed-size read ran past the end of the source
    #[error("unexpected end of file at offset {offset}: needed {needed} bytes")]
    UnexpectedEof { offset: u64, needed: usize },

    /// A null-terminated string ran past the end of the source
    #[error("unterminated string starting at offset {offset}")]
    UnterminatedString { offset: u64 },

    /// A null-terminated string is not valid UTF-8
    #[error("invalid UTF-8 in string starting at offset {offset}")]
    InvalidString { offset: u64 },

    /// A date field cannot be represented as a calendar date
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(f64),

    /// Output format tag is not one of json, csv, txt
    #[error("output file type is not supported: {0}")]
    UnsupportedOutput(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// True for errors caused by reading past the available data.
    pub fn is_stream_error(&self) -> bool {
        matches!(
            self,
            Error::UnexpectedEof { .. } | Error::UnterminatedString { .. }
        )
    }

    /// True for errors caused by content that is not a valid cookie file.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidMagic(_) | Error::InvalidString { .. } | Error::InvalidTimestamp(_)
        )
    }
}

/// Result type alias for binarycookies operations.
pub type Result<T> = std::result::Result<T, Error>;
