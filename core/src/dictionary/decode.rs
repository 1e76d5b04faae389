use crate::constants::{CodeType, ALPHABET_SIZE, SENTINEL};
use crate::types::LzwError;

/// One decoder table entry: the code of the prefix sequence plus the byte
/// that extends it. Root entries carry `SENTINEL` as their prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub prefix: CodeType,
    pub byte: u8,
}

/// Decoder-side table, indexed by code.
#[derive(Debug, Clone)]
pub struct DecoderDictionary {
    entries: Vec<Entry>,
}

impl DecoderDictionary {
    pub fn new() -> Self {
        let mut dictionary = Self {
            entries: Vec::with_capacity(SENTINEL as usize),
        };
        dictionary.reset();
        dictionary
    }

    /// Clear the table and reseed the 256 root entries.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.entries
            .extend((0..=u8::MAX).map(|byte| Entry { prefix: SENTINEL, byte }));
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

    #[inline]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= SENTINEL as usize
    }

    #[inline]
    pub fn get(&self, code: CodeType) -> Option<Entry> {
        self.entries.get(code as usize).copied()
    }

    /// Append `(prefix, byte)`; the returned code equals the size before
    /// insertion.
    pub fn push(&mut self, prefix: CodeType, byte: u8) -> CodeType {
        debug_assert!(!self.is_full());
        let code = self.entries.len() as CodeType;
        self.entries.push(Entry { prefix, byte });
        code
    }

    /// Rebuild the byte sequence for `code` into `out` (cleared first).
    ///
    /// Walks the prefix chain back to a root, then reverses. A link to a
    /// missing entry, or a chain longer than the table, can only come from
    /// forged input and is reported as `InvalidCode`.
    pub fn reconstruct_into(&self, code: CodeType, out: &mut Vec<u8>) -> Result<(), LzwError> {
        out.clear();

        let mut k = code;
        while k != SENTINEL {
            let entry = self.get(k).ok_or(LzwError::InvalidCode {
                code,
                dictionary_len: self.len(),
            })?;
            out.push(entry.byte);
            if out.len() > self.len() {
                return Err(LzwError::InvalidCode {
                    code,
                    dictionary_len: self.len(),
                });
            }
            k = entry.prefix;
        }

        out.reverse();
        Ok(())
    }

    /// First byte of the sequence for `code`, without materializing it.
    pub fn first_byte(&self, code: CodeType) -> Result<u8, LzwError> {
        let invalid = || LzwError::InvalidCode {
            code,
            dictionary_len: self.len(),
        };

        let mut entry = self.get(code).ok_or_else(invalid)?;
        let mut steps = 0usize;
        while entry.prefix != SENTINEL {
            steps += 1;
            if steps > self.len() {
                return Err(invalid());
            }
            entry = self.get(entry.prefix).ok_or_else(invalid)?;
        }
        Ok(entry.byte)
    }
}

impl Default for DecoderDictionary {
    fn default() -> Self {
        Self::new()
    }
}
