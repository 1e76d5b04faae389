use std::path::Path;

use anyhow::Result;

use lzw_core::{Direction, TelemetrySnapshot};

/// One-line human summary of a finished pass.
pub fn summary(input: &Path, snapshot: &TelemetrySnapshot) -> String {
    match snapshot.direction {
        Direction::Compress => format!(
            "The file {} is compressed by {}%",
            input.display(),
            snapshot.space_savings_percent()
        ),
        Direction::Decompress => format!("The file {} is decompressed.", input.display()),
    }
}

pub fn json(snapshot: &TelemetrySnapshot) -> Result<String> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}
