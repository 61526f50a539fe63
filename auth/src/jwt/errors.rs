use thiserror::Error;

/// Error type for JWT operations.
///
/// Validation failures keep their cause for server-side logging. Callers
/// facing clients should treat every variant other than `EncodingFailed`
/// as the same rejection.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    TokenExpired,

    #[error("Token is invalid: {0}")]
    InvalidToken(String),
}
