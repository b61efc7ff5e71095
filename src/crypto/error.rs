//! Error types.

use std::fmt;

/// [`Result`][`std::result::Result`] type with the point derivation [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Point derivation errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Curve library rejected the scalar
    InvalidScalar,

    /// Seed is not valid UTF-8
    EncodingError,

    /// Encoding returned by the curve library does not decompress
    InvalidPoint,
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidScalar => fmt.write_str("invalid scalar: clamping invariant violated"),
            Error::EncodingError => fmt.write_str("seed is not valid UTF-8"),
            Error::InvalidPoint => fmt.write_str("invalid point: encoding does not decompress"),
        }
    }
}

impl std::error::Error for Error {}
