//! Error types for policy encoding and decoding.

use thiserror::Error;

/// Errors that can occur while encoding or decoding a policy document.
#[derive(Debug, Error)]
pub enum PolicyError {
    /// The document carried a version literal other than the current
    /// `"2012-10-17"` or the legacy `"2008-10-17"`. Carries the raw
    /// offending value.
    #[error("invalid policy version {0:?}")]
    InvalidVersion(String),

    /// A statement carried an effect literal other than `"Allow"` or
    /// `"Deny"`. Carries the raw offending value.
    #[error("invalid effect {0:?}")]
    InvalidEffect(String),

    /// The input was not a well-formed policy document, or encoding failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PolicyError>;
