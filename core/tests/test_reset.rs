// Dictionary overflow: both sides must reseed at the same logical point.

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use lzw_core::constants::{ALPHABET_SIZE, SENTINEL};
    use lzw_core::{decode, encode, Decoder, Encoder};

    /// High-entropy input: short matches, so the table fills quickly.
    fn noisy_input(len: usize, seed: u64) -> Vec<u8> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut data = vec![0u8; len];
        rng.fill(&mut data[..]);
        data
    }

    /// Encoder table size right after each emitted code.
    fn encoder_sizes(data: &[u8]) -> (Vec<u16>, Vec<usize>, u64) {
        let mut encoder = Encoder::new();
        let mut codes = Vec::new();
        let mut sizes = Vec::new();
        for &b in data {
            if let Some(code) = encoder.encode_byte(b) {
                codes.push(code);
                sizes.push(encoder.dictionary().len());
            }
        }
        if let Some(code) = encoder.finish() {
            codes.push(code);
            sizes.push(encoder.dictionary().len());
        }
        (codes, sizes, encoder.resets())
    }

    #[test]
    fn multi_reset_input_round_trips() {
        let data = noisy_input(600_000, 0x5eed);
        let (codes, _, resets) = encoder_sizes(&data);
        assert!(resets >= 2, "only {} resets", resets);

        assert_eq!(codes, encode(&data));
        assert_eq!(decode(&codes).unwrap(), data);
    }

    #[test]
    fn decoder_tracks_encoder_table_code_by_code() {
        let data = noisy_input(600_000, 42);
        let (codes, enc_sizes, enc_resets) = encoder_sizes(&data);

        let mut decoder = Decoder::new();
        let mut dec_sizes = Vec::with_capacity(codes.len());
        let mut out = Vec::with_capacity(data.len());
        for &code in &codes {
            out.extend_from_slice(decoder.decode_code(code).unwrap());
            dec_sizes.push(decoder.dictionary().len());
        }

        assert_eq!(out, data);
        assert_eq!(decoder.resets(), enc_resets);
        assert!(enc_resets >= 2);

        // The decoder learns the entry for code n when code n + 1 arrives.
        for n in 0..codes.len() - 1 {
            assert_eq!(enc_sizes[n], dec_sizes[n + 1], "table size diverged at code {}", n);
        }
    }

    #[test]
    fn tables_never_exceed_sentinel() {
        let data = noisy_input(300_000, 7);
        let mut encoder = Encoder::new();
        let mut decoder = Decoder::new();

        for &b in &data {
            if let Some(code) = encoder.encode_byte(b) {
                decoder.decode_code(code).unwrap();
            }
            assert!(encoder.dictionary().len() <= SENTINEL as usize);
            assert!(decoder.dictionary().len() <= SENTINEL as usize);
        }
        assert!(encoder.resets() >= 1);
    }

    #[test]
    fn reset_restarts_code_assignment() {
        let data = noisy_input(300_000, 99);
        let mut encoder = Encoder::new();
        let mut last_resets = 0;

        for &b in &data {
            let emitted = encoder.encode_byte(b);
            if encoder.resets() != last_resets {
                last_resets = encoder.resets();
                // A byte right after a reset always misses the fresh table.
                assert!(emitted.is_some());
                assert_eq!(encoder.dictionary().len(), ALPHABET_SIZE + 1);
            }
        }
        assert!(last_resets >= 1);
    }

    #[test]
    fn repetitive_tail_after_reset_round_trips() {
        // Fill the table with noise, then switch to a pattern that keeps
        // hitting inferred codes in the fresh table.
        let mut data = noisy_input(250_000, 3);
        data.extend(b"xyxyxyxyxyxyxy".repeat(2_000));
        data.extend(std::iter::repeat(b'q').take(50_000));

        let codes = encode(&data);
        assert_eq!(decode(&codes).unwrap(), data);
    }
}
