//! Wire format for compressed streams.
//!
//! Responsibilities:
//! - Encode codes as fixed-width little-endian units
//! - Decode units with strict end-of-stream validation
//!
//! Non-responsibilities:
//! - Dictionary state
//! - Opening or closing handles

pub mod encode;
pub mod decode;

pub use encode::{encode_codes, CodeWriter};
pub use decode::{decode_codes, CodeReader};
