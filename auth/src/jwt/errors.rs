use thiserror::Error;

/// Error type for JWT operations.
///
/// The variants exist for logging. Anything facing an end user should collapse
/// every decoding variant into a single "invalid credentials" answer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    TokenExpired,

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is malformed: {0}")]
    Malformed(String),
}
