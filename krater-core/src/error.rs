//! Error types for Krater verification operations.

use core::fmt;

/// Result type alias using [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during signature verification.
///
/// Malformed-input variants carry the expected and actual sizes and are
/// deliberately distinguishable from [`Error::VerificationFailed`], which is
/// the single opaque outcome for any cryptographic check failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Invalid public key length provided.
    InvalidKeyLength {
        /// Expected length in bytes.
        expected: usize,
        /// Actual length provided.
        actual: usize,
    },

    /// Invalid signature length.
    InvalidSignatureLength {
        /// Expected length in bytes.
        expected: usize,
        /// Actual length provided.
        actual: usize,
    },

    /// Invalid extended message digest length.
    InvalidDigestLength {
        /// Expected length in bytes.
        expected: usize,
        /// Actual length provided.
        actual: usize,
    },

    /// Wrong number of polynomial coefficients.
    InvalidCoefficientCount {
        /// Expected number of coefficients.
        expected: usize,
        /// Actual number of coefficients provided.
        actual: usize,
    },

    /// Ring degree not supported by the parameter set.
    UnsupportedRingDegree {
        /// The rejected degree.
        degree: usize,
    },

    /// Encoding or decoding error (e.g. coefficient out of field range).
    EncodingError,

    /// Signature verification failed.
    VerificationFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKeyLength { expected, actual } => {
                write!(f, "invalid key length: expected {expected}, got {actual}")
            }
            Error::InvalidSignatureLength { expected, actual } => {
                write!(
                    f,
                    "invalid signature length: expected {expected}, got {actual}"
                )
            }
            Error::InvalidDigestLength { expected, actual } => {
                write!(
                    f,
                    "invalid digest length: expected {expected}, got {actual}"
                )
            }
            Error::InvalidCoefficientCount { expected, actual } => {
                write!(
                    f,
                    "invalid coefficient count: expected {expected}, got {actual}"
                )
            }
            Error::UnsupportedRingDegree { degree } => {
                write!(f, "unsupported ring degree: {degree}")
            }
            Error::EncodingError => write!(f, "encoding or decoding error"),
            Error::VerificationFailed => write!(f, "signature verification failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
