//! telemetry/snapshot.rs
//!
//! Immutable summary of one compress or decompress pass.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::timers::{StageTimes, TelemetryTimer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Compress,
    Decompress,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Compress => f.write_str("compress"),
            Direction::Decompress => f.write_str("decompress"),
        }
    }
}

/// Core telemetry snapshot.
/// Captures counters, ratio, throughput, stage timings, and elapsed duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub direction: Direction,
    pub bytes_plaintext: u64,
    pub bytes_compressed: u64,
    pub codes: u64,
    pub resets: u64,
    /// `bytes_compressed / bytes_plaintext`; may exceed 1.0 for
    /// incompressible input, 0.0 when there is no plaintext.
    pub compression_ratio: f64,
    pub throughput_plaintext_bytes_per_sec: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl TelemetrySnapshot {
    pub fn from(direction: Direction, counters: &TelemetryCounters, timer: &TelemetryTimer) -> Self {
        let elapsed = timer.elapsed();

        let compression_ratio = if counters.bytes_plaintext > 0 {
            counters.bytes_compressed as f64 / counters.bytes_plaintext as f64
        } else {
            0.0
        };

        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.bytes_plaintext as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            direction,
            bytes_plaintext: counters.bytes_plaintext,
            bytes_compressed: counters.bytes_compressed,
            codes: counters.codes,
            resets: counters.resets,
            compression_ratio,
            throughput_plaintext_bytes_per_sec: throughput,
            elapsed,
            stage_times: timer.stage_times.clone(),
        }
    }

    /// Percentage of the plaintext size saved by compression, rounded toward
    /// zero. Negative when the output grew; 0 for empty input.
    pub fn space_savings_percent(&self) -> i64 {
        if self.bytes_plaintext == 0 {
            return 0;
        }
        let saved = self.bytes_plaintext as i128 - self.bytes_compressed as i128;
        (saved * 100 / self.bytes_plaintext as i128) as i64
    }

    pub fn input_bytes(&self) -> u64 {
        match self.direction {
            Direction::Compress => self.bytes_plaintext,
            Direction::Decompress => self.bytes_compressed,
        }
    }

    pub fn output_bytes(&self) -> u64 {
        match self.direction {
            Direction::Compress => self.bytes_compressed,
            Direction::Decompress => self.bytes_plaintext,
        }
    }

    pub fn sanity_check(&self) -> bool {
        self.bytes_compressed == self.codes * crate::constants::CODE_BYTES as u64
            && self.stage_times.total() <= self.elapsed
    }
}
