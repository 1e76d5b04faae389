//! codec/decoder.rs
//! LZW decoder: rebuilds the encoder's table from the code stream alone.

use crate::constants::{CodeType, SENTINEL};
use crate::dictionary::DecoderDictionary;
use crate::types::LzwError;

/// Code-at-a-time LZW decoder.
///
/// The decoder's table trails the encoder's by one entry: the entry the
/// encoder added when it emitted code `n` is only known here once code
/// `n + 1` arrives, because its last byte is the first byte of `n + 1`.
#[derive(Debug, Clone)]
pub struct Decoder {
    dictionary: DecoderDictionary,
    /// Last code consumed, or `SENTINEL` before the first one.
    /// Survives a reset: the first entry of the new table extends it.
    previous: CodeType,
    scratch: Vec<u8>,
    resets: u64,
}

impl Decoder {
    pub fn new() -> Self {
        Self {
            dictionary: DecoderDictionary::new(),
            previous: SENTINEL,
            scratch: Vec::new(),
            resets: 0,
        }
    }

    /// Consume one code and return the bytes it stands for.
    ///
    /// The returned slice borrows an internal buffer that is overwritten by
    /// the next call.
    pub fn decode_code(&mut self, code: CodeType) -> Result<&[u8], LzwError> {
        if self.dictionary.is_full() {
            self.reset();
        }

        let len = self.dictionary.len();
        if code as usize > len {
            return Err(LzwError::InvalidCode {
                code,
                dictionary_len: len,
            });
        }

        if code as usize == len {
            // The encoder emitted the entry it had just created: the pattern
            // is previous + first byte of previous.
            if self.previous == SENTINEL {
                return Err(LzwError::InvalidCode {
                    code,
                    dictionary_len: len,
                });
            }
            let byte = self.dictionary.first_byte(self.previous)?;
            self.dictionary.push(self.previous, byte);
            self.dictionary.reconstruct_into(code, &mut self.scratch)?;
        } else {
            self.dictionary.reconstruct_into(code, &mut self.scratch)?;
            if self.previous != SENTINEL {
                let byte = self.scratch.first().copied().ok_or(LzwError::InvalidCode {
                    code,
                    dictionary_len: len,
                })?;
                self.dictionary.push(self.previous, byte);
            }
        }

        self.previous = code;
        Ok(&self.scratch)
    }

    /// Decode a whole code sequence into `out`.
    pub fn decode_all(mut self, codes: &[CodeType], out: &mut Vec<u8>) -> Result<(), LzwError> {
        for &code in codes {
            out.extend_from_slice(self.decode_code(code)?);
        }
        Ok(())
    }

    pub fn dictionary(&self) -> &DecoderDictionary {
        &self.dictionary
    }

    pub fn resets(&self) -> u64 {
        self.resets
    }

    fn reset(&mut self) {
        self.dictionary.reset();
        self.resets += 1;
        tracing::debug!(resets = self.resets, "decoder dictionary full, reseeded");
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}
