use thiserror::Error;

/// Error type for token operations.
///
/// Every validation failure is reported as `Invalid` so callers cannot tell
/// a bad signature from an expired or malformed token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token subject must not be empty")]
    EmptySubject,

    #[error("Unauthorized")]
    Invalid,
}
