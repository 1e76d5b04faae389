//! LZW code tables.
//!
//! Responsibilities:
//! - Seed and reset the 256 single-byte root entries
//! - Assign codes sequentially (new code == size before insertion)
//! - Resolve codes back to byte sequences on the decode side
//!
//! Non-responsibilities:
//! - Deciding when to emit a code
//! - IO
//!
//! The two sides keep distinct representations: the encoder needs point
//! lookups by `(prefix, byte)`, the decoder needs indexed lookups by code.

pub mod encode;
pub mod decode;

pub use encode::EncoderDictionary;
pub use decode::{DecoderDictionary, Entry};
