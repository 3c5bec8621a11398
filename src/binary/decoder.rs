//! Field decoders for the primitive encodings used by cookie files.

use std::io::{Read, Seek};

use super::cursor::CursorReader;
use super::format::TAG_SIZE;
use crate::{Error, Result};

/// Decode-at-cursor operations.
///
/// Every method advances the cursor by exactly the number of bytes it
/// consumed; a failed read leaves the cursor untouched.
pub trait FieldDecoder {
    /// Fill `buf` from the cursor.
    fn read_into(&mut self, buf: &mut [u8]) -> Result<()>;

    /// Offset of the next unread byte.
    fn offset(&self) -> u64;

    /// Move the cursor to an absolute offset.
    fn rewind_to(&mut self, offset: u64);

    /// Read a fixed-size array.
    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.read_into(&mut buf)?;
        Ok(buf)
    }

    /// Read a raw chunk of `size` bytes (tags, reserved fields, markers).
    fn read_chunk(&mut self, size: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; size];
        self.read_into(&mut buf)?;
        Ok(buf)
    }

    /// Read a 4-byte tag.
    fn read_tag(&mut self) -> Result<[u8; TAG_SIZE]> {
        self.read_array()
    }

    /// Read a big-endian signed 32-bit integer.
    fn read_i32_be(&mut self) -> Result<i32> {
        Ok(i32::from_be_bytes(self.read_array()?))
    }

    /// Read a little-endian signed 32-bit integer.
    fn read_i32_le(&mut self) -> Result<i32> {
        Ok(i32::from_le_bytes(self.read_array()?))
    }

    /// Read a little-endian 64-bit float.
    fn read_f64_le(&mut self) -> Result<f64> {
        Ok(f64::from_le_bytes(self.read_array()?))
    }

    /// Read a null-terminated UTF-8 string, consuming the terminator.
    ///
    /// On failure the cursor is restored to the start of the string.
    fn read_cstring(&mut self) -> Result<String> {
        let start = self.offset();
        let bytes: Result<Vec<u8>> = CStringBytes::new(&mut *self).collect();
        let bytes = match bytes {
            Ok(bytes) => bytes,
            Err(e) => {
                self.rewind_to(start);
                return Err(e);
            }
        };

        String::from_utf8(bytes).map_err(|_| {
            self.rewind_to(start);
            Error::InvalidString { offset: start }
        })
    }
}

impl<R: Read + Seek> FieldDecoder for CursorReader<R> {
    fn read_into(&mut self, buf: &mut [u8]) -> Result<()> {
        self.read_exact_at_cursor(buf)
    }

    fn offset(&self) -> u64 {
        self.position()
    }

    fn rewind_to(&mut self, offset: u64) {
        self.seek_to(offset)
    }
}

/// Yields the bytes of a null-terminated string one at a time.
///
/// Stops after consuming the terminator. Running out of input yields a
/// single `UnterminatedString` error.
pub struct CStringBytes<'a, D: FieldDecoder + ?Sized> {
    decoder: &'a mut D,
    start: u64,
    done: bool,
}

impl<'a, D: FieldDecoder + ?Sized> CStringBytes<'a, D> {
    pub fn new(decoder: &'a mut D) -> Self {
        let start = decoder.offset();
        Self {
            decoder,
            start,
            done: false,
        }
    }
}

impl<D: FieldDecoder + ?Sized> Iterator for CStringBytes<'_, D> {
    type Item = Result<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.decoder.read_array::<1>() {
            Ok([0]) => {
                self.done = true;
                None
            }
            Ok([byte]) => Some(Ok(byte)),
            Err(Error::UnexpectedEof { .. }) => {
                self.done = true;
                Some(Err(Error::UnterminatedString { offset: self.start }))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
