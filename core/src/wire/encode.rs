use std::io::Write;

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};

use crate::constants::{CodeType, CODE_BYTES};
use crate::types::LzwError;

/// Encode codes into the canonical wire layout.
///
/// Layout:
///
/// ```text
/// [ code 0 (2, LE) ][ code 1 (2, LE) ] ... [ code N-1 (2, LE) ]
/// ```
///
/// No header, no count: the end of the byte stream ends the code stream.
pub fn encode_codes(codes: &[CodeType]) -> Vec<u8> {
    let mut out = vec![0u8; codes.len() * CODE_BYTES];
    LittleEndian::write_u16_into(codes, &mut out);
    out
}

/// Writes fixed-width codes to a byte sink.
///
/// Every code is written straight through; wrap unbuffered sinks such as
/// `File` in a `BufWriter`.
pub struct CodeWriter<W: Write> {
    inner: W,
    codes_written: u64,
}

impl<W: Write> CodeWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            codes_written: 0,
        }
    }

    #[inline]
    pub fn write_code(&mut self, code: CodeType) -> Result<(), LzwError> {
        self.inner.write_u16::<LittleEndian>(code)?;
        self.codes_written += 1;
        Ok(())
    }

    pub fn codes_written(&self) -> u64 {
        self.codes_written
    }

    pub fn bytes_written(&self) -> u64 {
        self.codes_written * CODE_BYTES as u64
    }

    pub fn flush(&mut self) -> Result<(), LzwError> {
        self.inner.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
