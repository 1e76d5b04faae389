//! codec/mod.rs
//! Fixed-width LZW encoder and decoder.
//!
//! Neither side transmits its table; both derive it from the data in the
//! same order, so entry `k` spells the same bytes on both sides.

pub mod encoder;
pub mod decoder;

pub use encoder::Encoder;
pub use decoder::Decoder;

use crate::constants::CodeType;
use crate::types::LzwError;

/// Encode a whole buffer into its code sequence.
pub fn encode(input: &[u8]) -> Vec<CodeType> {
    let mut codes = Vec::new();
    Encoder::new().encode_all(input, &mut codes);
    codes
}

/// Decode a whole code sequence back into bytes.
pub fn decode(codes: &[CodeType]) -> Result<Vec<u8>, LzwError> {
    let mut out = Vec::new();
    Decoder::new().decode_all(codes, &mut out)?;
    Ok(out)
}
