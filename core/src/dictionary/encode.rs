use std::collections::HashMap;

use crate::constants::{CodeType, ALPHABET_SIZE, SENTINEL};

/// Encoder-side table: `(prefix, next byte) -> code`.
///
/// Root entries are keyed by `(SENTINEL, b)` and map to `b`, so a single
/// byte always encodes as its own numeric value.
#[derive(Debug, Clone)]
pub struct EncoderDictionary {
    entries: HashMap<(CodeType, u8), CodeType>,
}

impl EncoderDictionary {
    pub fn new() -> Self {
        let mut dictionary = Self {
            entries: HashMap::with_capacity(SENTINEL as usize),
        };
        dictionary.reset();
        dictionary
    }

    /// Clear the table and reseed the 256 root entries.
    pub fn reset(&mut self) {
        self.entries.clear();
        for b in 0..=u8::MAX {
            let code = self.entries.len() as CodeType;
            self.entries.insert((SENTINEL, b), code);
        }
        debug_assert_eq!(self.entries.len(), ALPHABET_SIZE);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// No code below `SENTINEL` is left to assign.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= SENTINEL as usize
    }

    #[inline]
    pub fn get(&self, prefix: CodeType, byte: u8) -> Option<CodeType> {
        self.entries.get(&(prefix, byte)).copied()
    }

    /// Code of the single-byte root entry for `byte`.
    #[inline]
    pub fn root(byte: u8) -> CodeType {
        byte as CodeType
    }

    /// Insert `(prefix, byte)` and return its code, which is always the
    /// table size before insertion.
    ///
    /// Callers must reset a full table first and must not insert a key that
    /// is already present.
    pub fn insert(&mut self, prefix: CodeType, byte: u8) -> CodeType {
        debug_assert!(!self.is_full());
        let code = self.entries.len() as CodeType;
        let previous = self.entries.insert((prefix, byte), code);
        debug_assert!(previous.is_none());
        code
    }
}

impl Default for EncoderDictionary {
    fn default() -> Self {
        Self::new()
    }
}

