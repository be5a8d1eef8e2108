//! Error types shared across the crate.

use thiserror::Error;

/// Convenience alias used by every fallible operation in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// The two variants are deliberately distinct so that callers can branch on
/// the failure kind:
/// - [`Error::InvalidInput`]: a terminal rejection of the given arguments;
///   retrying with the same arguments will not succeed.
/// - [`Error::Codec`]: a failure inside the JSON codec, propagated verbatim.
#[derive(Debug, Error)]
pub enum Error {
    /// A required argument was empty, malformed, or failed a validation
    /// check. Carries the name of the rejecting operation.
    #[error("invalid input to {0:?}")]
    InvalidInput(&'static str),

    /// An error surfaced unchanged from the JSON codec: a value that cannot
    /// serialise, or bytes that cannot deserialise into the requested type.
    #[error(transparent)]
    Codec(#[from] serde_json::Error),
}

impl Error {
    /// Returns `true` for the non-retryable input-rejection variant.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }
}
