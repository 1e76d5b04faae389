//! codec/encoder.rs
//! Greedy longest-match LZW encoder.

use std::mem;

use crate::constants::{CodeType, SENTINEL};
use crate::dictionary::EncoderDictionary;

/// Byte-at-a-time LZW encoder.
///
/// Each input byte produces at most one code. After a miss the match
/// restarts at the byte just consumed, not at the empty string; that is what
/// keeps the decoder's table growth in lockstep with this one.
#[derive(Debug, Clone)]
pub struct Encoder {
    dictionary: EncoderDictionary,
    /// Code of the longest match so far, or `SENTINEL` before the first byte.
    prefix: CodeType,
    resets: u64,
}

impl Encoder {
    pub fn new() -> Self {
        Self {
            dictionary: EncoderDictionary::new(),
            prefix: SENTINEL,
            resets: 0,
        }
    }

    /// Feed one byte; returns the code emitted for the previous match, if
    /// the byte could not extend it.
    pub fn encode_byte(&mut self, byte: u8) -> Option<CodeType> {
        if self.dictionary.is_full() {
            self.reset();
        }

        match self.dictionary.get(self.prefix, byte) {
            Some(code) => {
                self.prefix = code;
                None
            }
            None => {
                self.dictionary.insert(self.prefix, byte);
                let emitted = mem::replace(&mut self.prefix, EncoderDictionary::root(byte));
                debug_assert_ne!(emitted, SENTINEL);
                Some(emitted)
            }
        }
    }

    /// Flush the trailing match. Returns `None` if no byte was ever fed.
    pub fn finish(&mut self) -> Option<CodeType> {
        match mem::replace(&mut self.prefix, SENTINEL) {
            SENTINEL => None,
            code => Some(code),
        }
    }

    /// Encode a whole buffer into `out`, flushing at the end.
    pub fn encode_all(mut self, input: &[u8], out: &mut Vec<CodeType>) {
        out.extend(input.iter().filter_map(|&b| self.encode_byte(b)));
        out.extend(self.finish());
    }

    pub fn dictionary(&self) -> &EncoderDictionary {
        &self.dictionary
    }

    /// Number of times the table filled up and was reseeded.
    pub fn resets(&self) -> u64 {
        self.resets
    }

    fn reset(&mut self) {
        self.dictionary.reset();
        self.resets += 1;
        tracing::debug!(resets = self.resets, "encoder dictionary full, reseeded");
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}
