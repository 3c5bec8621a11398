//! JSON exporter.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};

use crate::{CookieRecord, Result};

/// Write records as a JSON array indented by four spaces.
///
/// Non-ASCII characters are written as `\uXXXX` escapes, with surrogate
/// pairs outside the basic plane.
pub fn write_json<W: Write>(records: &[CookieRecord], writer: W) -> Result<()> {
    let formatter = AsciiFormatter {
        pretty: PrettyFormatter::with_indent(b"    "),
    };
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    records.serialize(&mut serializer)?;
    Ok(())
}

/// Pretty formatter that keeps string contents 7-bit clean.
struct AsciiFormatter<'a> {
    pretty: PrettyFormatter<'a>,
}

impl Formatter for AsciiFormatter<'_> {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(fragment[start..index].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = index + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::tests::sample_records;

    #[test]
    fn test_json_parses_back() {
        let records = sample_records();
        let mut out = Vec::new();
        write_json(&records, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), records.len());
        for object in array {
            let mut keys: Vec<&str> = object
                .as_object()
                .unwrap()
                .keys()
                .map(String::as_str)
                .collect();
            keys.sort_unstable();
            let mut expected = CookieRecord::FIELDS.to_vec();
            expected.sort_unstable();
            assert_eq!(keys, expected);
        }

        let decoded: Vec<CookieRecord> = serde_json::from_slice(&out).unwrap();
        assert_eq!(decoded, records);
    }

    #[test]
    fn test_json_indentation() {
        let mut out = Vec::new();
        write_json(&sample_records()[..1], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("[\n    {\n        \"name\": \"sid\","));
    }

    #[test]
    fn test_json_escapes_non_ascii() {
        let mut records = sample_records();
        records[0].value = "caf\u{e9} \u{1f36a}".to_string();

        let mut out = Vec::new();
        write_json(&records, &mut out).unwrap();
        assert!(out.is_ascii());

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(r#""value": "caf\u00e9 \ud83c\udf6a","#));

        let decoded: Vec<CookieRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(decoded, records);
    }

    #[test]
    fn test_json_keeps_standard_escapes() {
        let mut records = sample_records();
        records[0].value = "a\"b\\c\n".to_string();

        let mut out = Vec::new();
        write_json(&records[..1], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(r#""value": "a\"b\\c\n","#));
    }

    #[test]
    fn test_json_empty() {
        let mut out = Vec::new();
        write_json(&[], &mut out).unwrap();
        assert_eq!(out, b"[]");
    }
}
