//! Exporters for decoded cookie records.
//!
//! Three formats are supported, selected by tag:
//!
//! - `json`: a pretty-printed array of record objects
//! - `csv`: a header row followed by one row per record
//! - `txt`: one `Cookie: name=value; ...` line per record

mod csv;
mod json;
mod text;

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::{CookieRecord, Error, Result};

pub use self::csv::write_csv;
pub use self::json::write_json;
pub use self::text::{format_line, write_text};

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Json,
    Csv,
    Txt,
}

impl OutputFormat {
    /// File extension, also the tag accepted by `from_str`.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Txt => "txt",
        }
    }

    /// Render records into `writer`.
    pub fn render<W: Write>(&self, records: &[CookieRecord], writer: W) -> Result<()> {
        match self {
            OutputFormat::Json => write_json(records, writer),
            OutputFormat::Csv => write_csv(records, writer),
            OutputFormat::Txt => write_text(records, writer),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "txt" => Ok(OutputFormat::Txt),
            _ => Err(Error::UnsupportedOutput(s.to_string())),
        }
    }
}

/// Where and how parsed records are saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub format: OutputFormat,
    pub output_dir: PathBuf,
}

impl ExportConfig {
    pub fn new(format: OutputFormat, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            format,
            output_dir: output_dir.into(),
        }
    }

    /// Destination for results parsed from `input`:
    /// `<output_dir>/<input file name>-parsed.<ext>`.
    pub fn output_file(&self, input: &Path) -> PathBuf {
        let name = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.output_dir
            .join(format!("{}-parsed.{}", name, self.format.extension()))
    }
}

/// Write `records` parsed from `input` to the file chosen by `config`.
///
/// Returns the path written.
pub fn write_results(
    records: &[CookieRecord],
    config: &ExportConfig,
    input: &Path,
) -> Result<PathBuf> {
    let path = config.output_file(input);
    save_rendered(&path, |buf| config.format.render(records, buf))?;

    log::debug!("Wrote {} records to {:?}", records.len(), path);
    Ok(path)
}

/// Render into memory, then create `path` only if rendering succeeded.
fn save_rendered<F>(path: &Path, render: F) -> Result<()>
where
    F: FnOnce(&mut Vec<u8>) -> Result<()>,
{
    let mut buf = Vec::new();
    render(&mut buf)?;
    fs::write(path, buf)?;
    Ok(())
}
