//! telemetry/counters.rs
//! Mutable counters used during a compress or decompress pass.
//!
//! Converted into an immutable `TelemetrySnapshot` at the end of the pass.
use serde::{Deserialize, Serialize};

use crate::constants::CODE_BYTES;

/// Deterministic counters collected during stream processing.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    /// Uncompressed bytes consumed (compress) or produced (decompress).
    pub bytes_plaintext: u64,
    /// Compressed bytes produced (compress) or consumed (decompress).
    pub bytes_compressed: u64,
    pub codes: u64,
    pub resets: u64,
}

impl TelemetryCounters {
    /// Record plaintext bytes read by the encoder or written by the decoder.
    pub fn add_plaintext(&mut self, len: usize) {
        self.bytes_plaintext += len as u64;
    }

    /// Record one code on the wire.
    pub fn add_code(&mut self) {
        self.codes += 1;
        self.bytes_compressed += CODE_BYTES as u64;
    }

    pub fn set_resets(&mut self, resets: u64) {
        self.resets = resets;
    }
}
