use std::io::{ErrorKind, Read};

use byteorder::{ByteOrder, LittleEndian};

use crate::constants::{CodeType, CODE_BYTES, DEFAULT_BUFFER_SIZE};
use crate::types::LzwError;

/// Decode a complete in-memory wire buffer into codes.
///
/// A length that is not a multiple of the code width is rejected as
/// `CorruptedStream`.
pub fn decode_codes(wire: &[u8]) -> Result<Vec<CodeType>, LzwError> {
    let trailing = wire.len() % CODE_BYTES;
    if trailing != 0 {
        return Err(LzwError::CorruptedStream { trailing });
    }

    Ok(wire
        .chunks_exact(CODE_BYTES)
        .map(LittleEndian::read_u16)
        .collect())
}

/// Reads fixed-width codes from a byte source in `capacity`-sized blocks.
///
/// Distinguishes a clean end of stream (`Ok(None)` on a code boundary) from
/// a stream that stops mid-code (`CorruptedStream`). Interrupted reads are
/// retried; any other read error is returned as `Io`.
pub struct CodeReader<R: Read> {
    inner: R,
    buf: Vec<u8>,
    pos: usize,
    end: usize,
    bytes_read: u64,
}

impl<R: Read> CodeReader<R> {
    pub fn new(inner: R) -> Self {
        Self::with_capacity(inner, DEFAULT_BUFFER_SIZE)
    }

    pub fn with_capacity(inner: R, capacity: usize) -> Self {
        Self {
            inner,
            buf: vec![0u8; capacity.max(CODE_BYTES)],
            pos: 0,
            end: 0,
            bytes_read: 0,
        }
    }

    /// Next code, or `None` once the source is exhausted.
    pub fn read_code(&mut self) -> Result<Option<CodeType>, LzwError> {
        if self.end - self.pos < CODE_BYTES {
            self.fill()?;
        }

        match self.end - self.pos {
            0 => Ok(None),
            n if n < CODE_BYTES => Err(LzwError::CorruptedStream { trailing: n }),
            _ => {
                let code = LittleEndian::read_u16(&self.buf[self.pos..self.pos + CODE_BYTES]);
                self.pos += CODE_BYTES;
                Ok(Some(code))
            }
        }
    }

    /// Total bytes pulled from the source so far.
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    // Keeps any partial code at the front, then reads until a whole code is
    // buffered or the source reports EOF.
    fn fill(&mut self) -> Result<(), LzwError> {
        self.buf.copy_within(self.pos..self.end, 0);
        self.end -= self.pos;
        self.pos = 0;

        while self.end < CODE_BYTES {
            match self.inner.read(&mut self.buf[self.end..]) {
                Ok(0) => break,
                Ok(n) => {
                    self.end += n;
                    self.bytes_read += n as u64;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}
