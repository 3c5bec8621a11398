//! Builders for on-disk cookie file fixtures.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Seconds between the Unix epoch and the Mac epoch.
pub const MAC_EPOCH_OFFSET: f64 = 978_307_200.0;

/// A cookie to encode.
pub struct CookieFixture {
    pub flags: i32,
    pub expiry: f64,
    pub creation: f64,
    pub url: String,
    pub name: String,
    pub path: String,
    pub value: String,
}

impl CookieFixture {
    pub fn new(url: &str, name: &str, path: &str, value: &str) -> Self {
        Self {
            flags: 0,
            expiry: 0.0,
            creation: 0.0,
            url: url.to_string(),
            name: name.to_string(),
            path: path.to_string(),
            value: value.to_string(),
        }
    }

    /// Set dates from Unix timestamps.
    pub fn unix_dates(mut self, expiry: i64, creation: i64) -> Self {
        self.expiry = expiry as f64 - MAC_EPOCH_OFFSET;
        self.creation = creation as f64 - MAC_EPOCH_OFFSET;
        self
    }

    pub fn flags(mut self, flags: i32) -> Self {
        self.flags = flags;
        self
    }

    fn encode(&self) -> Vec<u8> {
        let strings = [&self.url, &self.name, &self.path, &self.value];
        let mut offsets = Vec::with_capacity(4);
        let mut next = 56usize;
        for s in strings {
            offsets.push(next as i32);
            next += s.len() + 1;
        }

        let mut out = Vec::with_capacity(next);
        out.extend_from_slice(&(next as i32).to_le_bytes());
        out.extend_from_slice(&[0; 4]);
        out.extend_from_slice(&self.flags.to_le_bytes());
        out.extend_from_slice(&[0; 4]);
        for offset in offsets {
            out.extend_from_slice(&offset.to_le_bytes());
        }
        out.extend_from_slice(&[0; 8]);
        out.extend_from_slice(&self.expiry.to_le_bytes());
        out.extend_from_slice(&self.creation.to_le_bytes());
        for s in strings {
            out.extend_from_slice(s.as_bytes());
            out.push(0);
        }
        out
    }
}

/// Encode pages of cookies into a complete binary cookie file.
pub fn build_cookie_file(pages: &[Vec<CookieFixture>]) -> Vec<u8> {
    let mut bodies = Vec::with_capacity(pages.len());
    for cookies in pages {
        let records: Vec<Vec<u8>> = cookies.iter().map(CookieFixture::encode).collect();
        let mut body = vec![0x00, 0x00, 0x01, 0x00];
        body.extend_from_slice(&(records.len() as i32).to_le_bytes());
        let mut offset = 12 + 4 * records.len();
        for record in &records {
            body.extend_from_slice(&(offset as i32).to_le_bytes());
            offset += record.len();
        }
        body.extend_from_slice(&[0; 4]);
        for record in records {
            body.extend_from_slice(&record);
        }
        bodies.push(body);
    }

    let mut out = b"cook".to_vec();
    out.extend_from_slice(&(pages.len() as i32).to_be_bytes());
    for body in &bodies {
        out.extend_from_slice(&(body.len() as i32).to_be_bytes());
    }
    for body in bodies {
        out.extend_from_slice(&body);
    }
    out
}

/// Write `data` into `dir` under `name`.
pub fn write_fixture(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, data).unwrap();
    path
}

/// Two pages, twelve cookies in total.
pub fn twelve_cookie_file() -> Vec<u8> {
    let page = |prefix: &str, count: usize| -> Vec<CookieFixture> {
        (0..count)
            .map(|i| {
                CookieFixture::new(
                    &format!(".{}{}.com", prefix, i),
                    &format!("{}_name_{}", prefix, i),
                    "/",
                    &format!("value{}", i),
                )
                .flags([0, 1, 4, 5][i % 4])
                .unix_dates(1_735_689_600 + i as i64 * 86_400, 1_704_067_200)
            })
            .collect()
    };
    build_cookie_file(&[page("a", 7), page("b", 5)])
}
