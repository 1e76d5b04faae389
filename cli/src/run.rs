use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use anyhow::{bail, Context, Result};

use lzw_core::stream::{compress_with_buffer, decompress_with_buffer};
use lzw_core::telemetry::Stage;
use lzw_core::{Direction, TelemetrySnapshot};

use crate::args::Cli;

/// Open both files, run the selected pass, and return its telemetry.
pub fn run(cli: &Cli) -> Result<TelemetrySnapshot> {
    ensure_distinct(&cli.input, &cli.output)?;

    let input = File::open(&cli.input)
        .with_context(|| format!("input file `{}` could not be opened", cli.input.display()))?;
    let output = File::create(&cli.output)
        .with_context(|| format!("output file `{}` could not be opened", cli.output.display()))?;

    // The core reads in `buffer_size` blocks itself; only the writer is buffered here.
    let writer = BufWriter::with_capacity(cli.buffer_size, output);

    let direction = cli.direction();
    tracing::debug!(
        %direction,
        input = %cli.input.display(),
        output = %cli.output.display(),
        buffer_size = cli.buffer_size,
        "starting"
    );

    let snapshot = match direction {
        Direction::Compress => compress_with_buffer(input, writer, cli.buffer_size),
        Direction::Decompress => decompress_with_buffer(input, writer, cli.buffer_size),
    }
    .with_context(|| format!("failed to {} `{}`", direction, cli.input.display()))?;

    tracing::info!(
        %direction,
        bytes_in = snapshot.input_bytes(),
        bytes_out = snapshot.output_bytes(),
        resets = snapshot.resets,
        elapsed_ms = snapshot.elapsed.as_millis() as u64,
        read_ms = stage_ms(&snapshot, Stage::Read),
        codec_ms = stage_ms(&snapshot, codec_stage(direction)),
        flush_ms = stage_ms(&snapshot, Stage::Flush),
        "done"
    );
    Ok(snapshot)
}

fn codec_stage(direction: Direction) -> Stage {
    match direction {
        Direction::Compress => Stage::Encode,
        Direction::Decompress => Stage::Decode,
    }
}

fn stage_ms(snapshot: &TelemetrySnapshot, stage: Stage) -> u64 {
    snapshot.stage_times.get(stage).as_millis() as u64
}

fn ensure_distinct(input: &Path, output: &Path) -> Result<()> {
    let same = match (fs::canonicalize(input), fs::canonicalize(output)) {
        (Ok(a), Ok(b)) => a == b,
        _ => input == output,
    };
    if same {
        bail!(
            "input file `{}` and output file `{}` must be distinct",
            input.display(),
            output.display()
        );
    }
    Ok(())
}
