use alloc::string::String;

/// Errors raised by the hashing engine.
///
/// Every variant is a caller bug: none of them is transient, and the engine
/// never retries or recovers from one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The value handed to `update` (or used as an HMAC key) is not text or bytes.
    #[error("type mismatch: expected text, bytes or a byte view, got {kind}")]
    TypeMismatch { kind: &'static str },

    /// A byte view points outside of its backing buffer.
    #[error("byte view out of bounds: offset {offset} + length {length} exceeds buffer of {capacity} bytes")]
    ViewOutOfBounds {
        offset: usize,
        length: usize,
        capacity: usize,
    },

    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("unsupported encoding: {0}")]
    UnsupportedEncoding(String),
}

pub type Result<T> = core::result::Result<T, Error>;
