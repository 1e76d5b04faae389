use std::io;

use thiserror::Error;

use crate::constants::CodeType;

/// Unified codec error covering malformed compressed input and I/O.
/// - Every variant is fatal; callers must not trust partial output.
/// - `From<io::Error>` enables `?` across the stream helpers.
#[derive(Debug, Error)]
pub enum LzwError {
    /// A code that is neither an existing entry nor the next inferable one.
    #[error("invalid compressed code {code} (dictionary holds {dictionary_len} entries)")]
    InvalidCode {
        code: CodeType,
        dictionary_len: usize,
    },

    /// The compressed stream ended in the middle of a code.
    #[error("corrupted compressed stream: {trailing} trailing byte(s) do not form a code")]
    CorruptedStream { trailing: usize },

    /// Underlying read or write failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Buffer size rejected by the stream helpers.
    #[error("invalid buffer size: {have} (must be in 1..={max})")]
    InvalidBufferSize { have: usize, max: usize },
}

impl LzwError {
    /// True for errors caused by malformed compressed input.
    pub fn is_corrupt_input(&self) -> bool {
        matches!(self, LzwError::InvalidCode { .. } | LzwError::CorruptedStream { .. })
    }
}
