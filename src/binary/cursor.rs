//! Cursor reader over a seekable byte source.

use std::io::{self, Read, Seek, SeekFrom};

use crate::{Error, Result};

/// Owns a byte source and the offset of the next unread byte.
///
/// Every read seeks the source to the cursor offset first, so the source
/// may be touched by someone else between calls.
pub struct CursorReader<R> {
    source: R,
    offset: u64,
}

impl<R: Read + Seek> CursorReader<R> {
    /// Create a reader positioned at the start of the source.
    pub fn new(source: R) -> Self {
        Self { source, offset: 0 }
    }

    /// Offset of the next unread byte.
    pub fn position(&self) -> u64 {
        self.offset
    }

    /// Move the cursor to an absolute offset.
    pub fn seek_to(&mut self, offset: u64) {
        self.offset = offset;
    }

    /// Fill `buf` from the cursor and advance by `buf.len()`.
    ///
    /// On failure the cursor is left where it was.
    pub fn read_exact_at_cursor(&mut self, buf: &mut [u8]) -> Result<()> {
        self.source.seek(SeekFrom::Start(self.offset))?;
        match self.source.read_exact(buf) {
            Ok(()) => {
                self.offset += buf.len() as u64;
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Err(Error::UnexpectedEof {
                offset: self.offset,
                needed: buf.len(),
            }),
            Err(e) => Err(Error::Io(e)),
        }
    }

    /// Read exactly `n` bytes.
    pub fn read_raw(&mut self, n: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; n];
        self.read_exact_at_cursor(&mut buf)?;
        Ok(buf)
    }

    /// Give the source back to the caller.
    pub fn into_inner(self) -> R {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_raw_advances_cursor() {
        let mut reader = CursorReader::new(Cursor::new(b"chunkdata".to_vec()));
        assert_eq!(reader.read_raw(4).unwrap(), b"chun");
        assert_eq!(reader.position(), 4);
        assert_eq!(reader.read_raw(5).unwrap(), b"kdata");
        assert_eq!(reader.position(), 9);
    }

    #[test]
    fn test_read_raw_past_end() {
        let mut reader = CursorReader::new(Cursor::new(b"abc".to_vec()));
        let err = reader.read_raw(4).unwrap_err();
        assert!(matches!(err, Error::UnexpectedEof { offset: 0, needed: 4 }));
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_reads_from_cursor_after_external_seek() {
        let mut reader = CursorReader::new(Cursor::new(b"0123456789".to_vec()));
        reader.read_raw(2).unwrap();

        // Move the underlying source behind the reader's back
        reader.source.seek(SeekFrom::Start(8)).unwrap();
        assert_eq!(reader.read_raw(2).unwrap(), b"23");
    }

    #[test]
    fn test_seek_to() {
        let mut reader = CursorReader::new(Cursor::new(b"0123456789".to_vec()));
        reader.seek_to(6);
        assert_eq!(reader.read_raw(3).unwrap(), b"678");
        assert_eq!(reader.position(), 9);
    }

    #[test]
    fn test_zero_length_read() {
        let mut reader = CursorReader::new(Cursor::new(Vec::new()));
        assert!(reader.read_raw(0).unwrap().is_empty());
        assert_eq!(reader.position(), 0);
    }
}
