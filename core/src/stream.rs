//! stream.rs
//! Compress/decompress entry points over `Read`/`Write`.
//!
//! The core never opens, tunes, or closes handles. Input is pulled in
//! `buffer_size` blocks, so readers need no extra buffering; writers receive
//! one small write per code and should be buffered if they are files.

use std::io::{ErrorKind, Read, Write};
use std::time::Instant;

use crate::codec::{Decoder, Encoder};
use crate::constants::{DEFAULT_BUFFER_SIZE, MAX_BUFFER_SIZE};
use crate::telemetry::{Direction, Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::types::LzwError;
use crate::wire::{decode_codes, encode_codes, CodeReader, CodeWriter};

/// Compress everything `reader` yields into `writer`.
pub fn compress<R: Read, W: Write>(reader: R, writer: W) -> Result<TelemetrySnapshot, LzwError> {
    compress_with_buffer(reader, writer, DEFAULT_BUFFER_SIZE)
}

/// Decompress a code stream from `reader` into `writer`.
pub fn decompress<R: Read, W: Write>(reader: R, writer: W) -> Result<TelemetrySnapshot, LzwError> {
    decompress_with_buffer(reader, writer, DEFAULT_BUFFER_SIZE)
}

/// Summary: Compress data read from R in `buffer_size` blocks.
/// - Rejects a zero or oversized buffer.
/// - Flushes the trailing match and the writer after EOF.
pub fn compress_with_buffer<R: Read, W: Write>(
    mut reader: R,
    writer: W,
    buffer_size: usize,
) -> Result<TelemetrySnapshot, LzwError> {
    check_buffer_size(buffer_size)?;

    let mut timer = TelemetryTimer::new();
    let mut counters = TelemetryCounters::default();
    let mut encoder = Encoder::new();
    let mut out = CodeWriter::new(writer);
    let mut buf = vec![0u8; buffer_size];

    tracing::debug!(buffer_size, "compress started");

    loop {
        let n = match timer.time(Stage::Read, || reader.read(&mut buf)) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        counters.add_plaintext(n);

        let started = Instant::now();
        for &byte in &buf[..n] {
            if let Some(code) = encoder.encode_byte(byte) {
                out.write_code(code)?;
                counters.add_code();
            }
        }
        timer.add_stage_time(Stage::Encode, started.elapsed());
    }

    if let Some(code) = encoder.finish() {
        out.write_code(code)?;
        counters.add_code();
    }
    timer.time(Stage::Flush, || out.flush())?;

    counters.set_resets(encoder.resets());
    timer.finish();

    let snapshot = TelemetrySnapshot::from(Direction::Compress, &counters, &timer);
    tracing::debug!(
        bytes_in = snapshot.bytes_plaintext,
        bytes_out = snapshot.bytes_compressed,
        resets = snapshot.resets,
        "compress finished"
    );
    Ok(snapshot)
}

/// Summary: Decompress codes read from R, pulling `buffer_size` blocks.
/// - A stream ending mid-code fails with `CorruptedStream`.
/// - An impossible code fails with `InvalidCode`; output written so far is
///   not guaranteed to be meaningful.
pub fn decompress_with_buffer<R: Read, W: Write>(
    reader: R,
    mut writer: W,
    buffer_size: usize,
) -> Result<TelemetrySnapshot, LzwError> {
    check_buffer_size(buffer_size)?;

    let mut timer = TelemetryTimer::new();
    let mut counters = TelemetryCounters::default();
    let mut decoder = Decoder::new();
    let mut codes = CodeReader::with_capacity(reader, buffer_size);

    tracing::debug!(buffer_size, "decompress started");

    loop {
        let code = match timer.time(Stage::Read, || codes.read_code())? {
            Some(code) => code,
            None => break,
        };

        let started = Instant::now();
        let bytes = decoder.decode_code(code)?;
        writer.write_all(bytes)?;
        counters.add_code();
        counters.add_plaintext(bytes.len());
        timer.add_stage_time(Stage::Decode, started.elapsed());
    }
    timer.time(Stage::Flush, || writer.flush())?;

    counters.set_resets(decoder.resets());
    timer.finish();

    let snapshot = TelemetrySnapshot::from(Direction::Decompress, &counters, &timer);
    tracing::debug!(
        bytes_in = snapshot.bytes_compressed,
        bytes_out = snapshot.bytes_plaintext,
        resets = snapshot.resets,
        "decompress finished"
    );
    Ok(snapshot)
}

/// Compress an in-memory buffer to its wire bytes.
pub fn compress_bytes(input: &[u8]) -> Vec<u8> {
    encode_codes(&crate::codec::encode(input))
}

/// Decompress in-memory wire bytes.
pub fn decompress_bytes(wire: &[u8]) -> Result<Vec<u8>, LzwError> {
    crate::codec::decode(&decode_codes(wire)?)
}

fn check_buffer_size(buffer_size: usize) -> Result<(), LzwError> {
    if buffer_size == 0 || buffer_size > MAX_BUFFER_SIZE {
        return Err(LzwError::InvalidBufferSize {
            have: buffer_size,
            max: MAX_BUFFER_SIZE,
        });
    }
    Ok(())
}
