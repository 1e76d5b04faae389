/// Type used to store and transmit codes.
pub type CodeType = u16;

/// Width of one code on the wire, in bytes.
pub const CODE_BYTES: usize = std::mem::size_of::<CodeType>();

/// Reserved "no prefix" marker and dictionary capacity.
///
/// This is the largest value a `CodeType` can hold, so the usable code space
/// is `[0, SENTINEL)`: one less than the full 16-bit range. A dictionary that
/// reaches `SENTINEL` entries is reset before the next unit is processed, and
/// `SENTINEL` itself is never assigned to an entry.
pub const SENTINEL: CodeType = CodeType::MAX;

/// Number of single-byte root entries seeded on every reset.
pub const ALPHABET_SIZE: usize = 256;

/// Default I/O buffer size used by the stream helpers (1 MiB).
pub const DEFAULT_BUFFER_SIZE: usize = 1024 * 1024;

/// Max buffer size sanity bound (32 MiB).
pub const MAX_BUFFER_SIZE: usize = 32 * 1024 * 1024;
