//! lzw-core
//!
//! Lossless fixed-width (16-bit) LZW codec.
//! No header, no variable-width codes, no threads.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

pub mod dictionary;
pub mod codec;
pub mod wire;
pub mod telemetry;

// Stream layer
pub mod stream;

pub use codec::{decode, encode, Decoder, Encoder};
pub use constants::{CodeType, SENTINEL};
pub use stream::{compress, compress_bytes, decompress, decompress_bytes};
pub use telemetry::{Direction, TelemetrySnapshot};
pub use types::LzwError;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::codec::{Decoder, Encoder};
    pub use crate::constants::{CodeType, SENTINEL};
    pub use crate::stream::{compress, compress_with_buffer, decompress, decompress_with_buffer};
    pub use crate::telemetry::TelemetrySnapshot;
    pub use crate::types::LzwError;
}
