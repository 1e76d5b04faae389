// Stream entry points: Read/Write plumbing, error propagation, telemetry.

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor, Read, Write};
    use std::time::Duration;

    use lzw_core::constants::{CODE_BYTES, MAX_BUFFER_SIZE};
    use lzw_core::stream::{compress_with_buffer, decompress_with_buffer};
    use lzw_core::telemetry::Stage;
    use lzw_core::{compress, compress_bytes, decompress, decompress_bytes, encode, Direction, LzwError};

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "nope"))
        }
    }

    /// Accepts `budget` bytes, then fails.
    struct FailingWriter {
        budget: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.budget == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            let n = buf.len().min(self.budget);
            self.budget -= n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn sample() -> Vec<u8> {
        b"It was the best of times, it was the worst of times, ".repeat(200)
    }

    #[test]
    fn stream_round_trip() {
        let input = sample();

        let mut compressed = Vec::new();
        let enc = compress(Cursor::new(&input), &mut compressed).unwrap();

        let mut restored = Vec::new();
        let dec = decompress(Cursor::new(&compressed), &mut restored).unwrap();

        assert_eq!(restored, input);
        assert_eq!(enc.direction, Direction::Compress);
        assert_eq!(dec.direction, Direction::Decompress);
        assert_eq!(enc.codes, dec.codes);
        assert_eq!(enc.bytes_plaintext, dec.bytes_plaintext);
        assert_eq!(enc.bytes_compressed, dec.bytes_compressed);
    }

    #[test]
    fn stream_output_matches_in_memory_helpers() {
        let input = sample();

        let mut compressed = Vec::new();
        compress(Cursor::new(&input), &mut compressed).unwrap();
        assert_eq!(compressed, compress_bytes(&input));
        assert_eq!(decompress_bytes(&compressed).unwrap(), input);
    }

    #[test]
    fn small_buffers_do_not_change_output() {
        let input = sample();
        let reference = compress_bytes(&input);

        for buffer_size in [1, 2, 3, 17, 4096] {
            let mut compressed = Vec::new();
            compress_with_buffer(Cursor::new(&input), &mut compressed, buffer_size).unwrap();
            assert_eq!(compressed, reference, "buffer size {}", buffer_size);

            let mut restored = Vec::new();
            decompress_with_buffer(Cursor::new(&compressed), &mut restored, buffer_size).unwrap();
            assert_eq!(restored, input, "buffer size {}", buffer_size);
        }
    }

    #[test]
    fn empty_stream_round_trips() {
        let mut compressed = Vec::new();
        let snapshot = compress(io::empty(), &mut compressed).unwrap();
        assert!(compressed.is_empty());
        assert_eq!(snapshot.codes, 0);
        assert_eq!(snapshot.compression_ratio, 0.0);
        assert_eq!(snapshot.space_savings_percent(), 0);

        let mut restored = Vec::new();
        decompress(io::empty(), &mut restored).unwrap();
        assert!(restored.is_empty());
    }

    #[test]
    fn truncated_stream_is_corrupted() {
        let mut compressed = compress_bytes(&sample());
        compressed.pop();

        let mut restored = Vec::new();
        let err = decompress(Cursor::new(&compressed), &mut restored).unwrap_err();
        assert!(matches!(err, LzwError::CorruptedStream { trailing: 1 }));
        assert!(err.is_corrupt_input());

        assert!(matches!(
            decompress_bytes(&compressed),
            Err(LzwError::CorruptedStream { .. })
        ));
    }

    #[test]
    fn forged_code_is_invalid() {
        let mut compressed = compress_bytes(b"hello hello hello");
        // Second code is checked against a 256-entry table.
        compressed[2..4].copy_from_slice(&0x7fffu16.to_le_bytes());

        let mut restored = Vec::new();
        assert!(matches!(
            decompress(Cursor::new(&compressed), &mut restored),
            Err(LzwError::InvalidCode { code: 0x7fff, dictionary_len: 256 })
        ));
    }

    #[test]
    fn read_failure_is_io() {
        let mut out = Vec::new();
        match compress(FailingReader, &mut out) {
            Err(LzwError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
            other => panic!("unexpected result: {:?}", other),
        }

        match decompress(FailingReader, &mut out) {
            Err(LzwError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn write_failure_is_io() {
        let input = sample();
        let err = compress(Cursor::new(&input), FailingWriter { budget: 10 }).unwrap_err();
        assert!(matches!(err, LzwError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));

        let compressed = compress_bytes(&input);
        let err = decompress(Cursor::new(&compressed), FailingWriter { budget: 10 }).unwrap_err();
        assert!(matches!(err, LzwError::Io(_)));
        assert!(!err.is_corrupt_input());
    }

    #[test]
    fn buffer_size_is_validated() {
        let mut out = Vec::new();
        assert!(matches!(
            compress_with_buffer(io::empty(), &mut out, 0),
            Err(LzwError::InvalidBufferSize { have: 0, .. })
        ));
        assert!(matches!(
            decompress_with_buffer(io::empty(), &mut out, MAX_BUFFER_SIZE + 1),
            Err(LzwError::InvalidBufferSize { max: MAX_BUFFER_SIZE, .. })
        ));
    }

    #[test]
    fn telemetry_counts_match_output() {
        let input = b"abcd".repeat(10_000);
        let mut compressed = Vec::new();
        let snapshot = compress(Cursor::new(&input), &mut compressed).unwrap();

        assert_eq!(snapshot.bytes_plaintext, input.len() as u64);
        assert_eq!(snapshot.bytes_compressed, compressed.len() as u64);
        assert_eq!(snapshot.codes, encode(&input).len() as u64);
        assert_eq!(snapshot.codes * CODE_BYTES as u64, snapshot.bytes_compressed);
        assert_eq!(snapshot.input_bytes(), input.len() as u64);
        assert_eq!(snapshot.output_bytes(), compressed.len() as u64);
        assert_eq!(snapshot.resets, 0);
        assert!(snapshot.compression_ratio < 0.1);
        assert!(snapshot.space_savings_percent() > 90);
        assert!(snapshot.stage_times.has_all(&[Stage::Read, Stage::Encode, Stage::Flush]));
        assert_eq!(snapshot.stage_times.get(Stage::Decode), Duration::ZERO);
        assert!(snapshot.sanity_check());

        let mut restored = Vec::new();
        let snapshot = decompress(Cursor::new(&compressed), &mut restored).unwrap();
        assert_eq!(snapshot.input_bytes(), compressed.len() as u64);
        assert_eq!(snapshot.output_bytes(), input.len() as u64);
        assert!(snapshot
            .stage_times
            .has_all(&[Stage::Read, Stage::Decode, Stage::Flush]));
        assert_eq!(snapshot.stage_times.get(Stage::Encode), Duration::ZERO);
        assert!(snapshot.stage_times.get(Stage::Read) <= snapshot.elapsed);
        assert!(snapshot.sanity_check());
    }

    #[test]
    fn incompressible_input_reports_growth() {
        // Every byte is new: one code per byte, two bytes per code.
        let input: Vec<u8> = (0..=u8::MAX).collect();
        let mut compressed = Vec::new();
        let snapshot = compress(Cursor::new(&input), &mut compressed).unwrap();

        assert_eq!(compressed.len(), input.len() * CODE_BYTES);
        assert_eq!(snapshot.compression_ratio, 2.0);
        assert_eq!(snapshot.space_savings_percent(), -100);
    }
}
