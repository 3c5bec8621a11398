//! Structural parser for binary cookie files.

use memmap2::Mmap;
use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use super::cursor::CursorReader;
use super::decoder::FieldDecoder;
use super::format::*;
use crate::record::{CookieRecord, RawCookie};
use crate::{Error, Result};

/// Upper bound on capacity reserved from untrusted count fields.
const MAX_PREALLOC: usize = 1024;

/// One decoded page.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub header: PageHeader,
    pub cookies: Vec<RawCookie>,
}

/// Structural view of a whole cookie file.
#[derive(Debug, Clone, PartialEq)]
pub struct CookieFile {
    /// Page sizes from the big-endian table. Read but not used to bound pages.
    pub page_sizes: Vec<i32>,
    pub pages: Vec<Page>,
}

impl CookieFile {
    /// Total number of decoded cookies across all pages.
    pub fn cookie_count(&self) -> usize {
        self.pages.iter().map(|p| p.cookies.len()).sum()
    }

    /// Flatten into exported records, page order then offset-table order.
    pub fn records(&self) -> Result<Vec<CookieRecord>> {
        self.pages
            .iter()
            .flat_map(|page| page.cookies.iter())
            .map(RawCookie::to_record)
            .collect()
    }
}

/// Parser for binary cookie files.
///
/// Owns the byte source for the duration of a parse. The source is dropped
/// when the parser is, on success and on every error path.
pub struct CookieParser<R> {
    reader: CursorReader<R>,
}

impl CookieParser<Cursor<Mmap>> {
    /// Open a binary cookie file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let open_error = |source| Error::Open {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(open_error)?;
        let mmap = unsafe { Mmap::map(&file).map_err(open_error)? };

        Ok(Self::new(Cursor::new(mmap)))
    }
}

impl<'a> CookieParser<Cursor<&'a [u8]>> {
    /// Parse from an in-memory buffer.
    pub fn from_bytes(data: &'a [u8]) -> Self {
        Self::new(Cursor::new(data))
    }
}

impl<R: Read + Seek> CookieParser<R> {
    /// Create a parser over any seekable source.
    pub fn new(source: R) -> Self {
        Self {
            reader: CursorReader::new(source),
        }
    }

    /// Offset of the next unread byte.
    pub fn position(&self) -> u64 {
        self.reader.position()
    }

    /// Decode the whole file into a flat list of records.
    pub fn parse(self) -> Result<Vec<CookieRecord>> {
        self.parse_file()?.records()
    }

    /// Decode the whole file, keeping the page structure.
    pub fn parse_file(mut self) -> Result<CookieFile> {
        let header = self.read_header()?;
        log::debug!("Number of pages: {}", header.page_count);

        let page_sizes = self.read_page_sizes(header.page_count)?;

        let mut pages = Vec::with_capacity(page_sizes.len());
        for (index, page_size) in page_sizes.iter().enumerate() {
            log::debug!("Page {} size: {}", index, page_size);
            pages.push(self.read_page()?);
        }

        Ok(CookieFile { page_sizes, pages })
    }

    /// Read the magic and the big-endian page count.
    pub fn read_header(&mut self) -> Result<FileHeader> {
        let magic = self.reader.read_tag()?;
        validate_magic(magic)?;
        let page_count = self.reader.read_i32_be()?;

        Ok(FileHeader { magic, page_count })
    }

    /// Read `count` big-endian page sizes. A negative count reads nothing.
    pub fn read_page_sizes(&mut self, count: i32) -> Result<Vec<i32>> {
        let count = count.max(0) as usize;
        let mut page_sizes = Vec::with_capacity(count.min(MAX_PREALLOC));
        for _ in 0..count {
            page_sizes.push(self.reader.read_i32_be()?);
        }
        Ok(page_sizes)
    }

    /// Read a page header: tag, cookie count, offset table and end tag.
    pub fn read_page_header(&mut self) -> Result<PageHeader> {
        let tag = self.reader.read_tag()?;
        let cookie_count = self.reader.read_i32_le()?;
        log::debug!("Cookie number: {}", cookie_count);

        let count = cookie_count.max(0) as usize;
        let mut cookie_offsets = Vec::with_capacity(count.min(MAX_PREALLOC));
        for _ in 0..count {
            let offset = self.reader.read_i32_le()?;
            log::debug!("Cookie offset: {}", offset);
            cookie_offsets.push(offset);
        }

        let end_tag = self.reader.read_tag()?;

        Ok(PageHeader {
            tag,
            cookie_count,
            cookie_offsets,
            end_tag,
        })
    }

    /// Read one page: its header followed by one cookie per offset entry.
    ///
    /// Cookies are decoded back to back from the end of the header; the
    /// offsets only determine how many there are.
    pub fn read_page(&mut self) -> Result<Page> {
        let header = self.read_page_header()?;

        let mut cookies = Vec::with_capacity(header.cookie_offsets.len());
        for _ in &header.cookie_offsets {
            cookies.push(self.read_cookie()?);
        }

        Ok(Page { header, cookies })
    }

    /// Read one cookie record at the cursor.
    pub fn read_cookie(&mut self) -> Result<RawCookie> {
        let start = self.reader.position();

        let size = self.reader.read_i32_le()?;
        let _reserved = self.reader.read_tag()?;
        let flags = self.reader.read_i32_le()?;
        let _reserved = self.reader.read_tag()?;

        let url_offset = self.reader.read_i32_le()?;
        let name_offset = self.reader.read_i32_le()?;
        let path_offset = self.reader.read_i32_le()?;
        let value_offset = self.reader.read_i32_le()?;

        let _end_marker = self.reader.read_array::<COOKIE_END_MARKER_SIZE>()?;

        let expiry = self.reader.read_f64_le()?;
        let creation = self.reader.read_f64_le()?;

        let url = self.reader.read_cstring()?;
        let name = self.reader.read_cstring()?;
        let path = self.reader.read_cstring()?;
        let value = self.reader.read_cstring()?;

        let consumed = self.reader.position() - start;
        if consumed != size as u64 {
            log::trace!(
                "Cookie at offset {} declares size {} but spans {} bytes",
                start,
                size,
                consumed
            );
        }
        log::trace!("Decoded cookie {} for {}", name, url);

        Ok(RawCookie {
            size,
            flags,
            url_offset,
            name_offset,
            path_offset,
            value_offset,
            expiry,
            creation,
            url,
            name,
            path,
            value,
        })
    }

    /// Give the source back to the caller.
    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }
}

/// Parse the cookie file at `path`.
pub fn parse_path(path: impl AsRef<Path>) -> Result<Vec<CookieRecord>> {
    CookieParser::open(path)?.parse()
}

/// Parse a cookie file already loaded into memory.
pub fn parse_bytes(data: &[u8]) -> Result<Vec<CookieRecord>> {
    CookieParser::from_bytes(data).parse()
}
