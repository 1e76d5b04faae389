//! telemetry/mod.rs
//! Counters, timers, and immutable snapshots for codec passes.
//!
//! A snapshot is what the stream entry points hand back to the caller; it
//! carries everything needed for a compression-ratio report.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
