//! CSV exporter.

use std::io::Write;

use crate::{CookieRecord, Result};

/// Write a header row and one row per record.
pub fn write_csv<W: Write>(records: &[CookieRecord], writer: W) -> Result<()> {
    let mut writer = ::csv::Writer::from_writer(writer);
    writer.write_record(CookieRecord::FIELDS)?;
    for record in records {
        writer.write_record([
            &record.name,
            &record.value,
            &record.url,
            &record.path,
            &record.expiry_date,
            &record.create_date,
            &record.cookie_flag,
        ])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::tests::sample_records;

    #[test]
    fn test_csv_layout() {
        let records = sample_records();
        let mut out = Vec::new();
        write_csv(&records, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), records.len() + 1);
        assert_eq!(
            lines[0],
            "name,value,url,path,expiry_date,create_date,cookie_flag"
        );
        assert_eq!(
            lines[1],
            "sid,abc,.example.com,/,\"Mon, 01 Jan 2024\",\"Sun, 31 Dec 2023\",Secure"
        );
        // Values containing the delimiter are quoted
        assert!(lines[2].starts_with("pref,\"a,b\","));
    }

    #[test]
    fn test_csv_crlf_terminated() {
        let mut out = Vec::new();
        write_csv(&[], &mut out).unwrap();
        assert_eq!(
            out,
            b"name,value,url,path,expiry_date,create_date,cookie_flag\r\n"
        );
    }
}
