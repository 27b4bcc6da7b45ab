//! Error taxonomy for the estimator and the advisory boundary.
//!
//! Two failure categories exist: bad inputs (rejected before any scoring
//! starts) and structurally invalid advisory payloads (rejected whole, never
//! partially trusted). Everything inside the estimator itself is total over
//! finite inputs via clamping.

use thiserror::Error;

/// Errors that can occur while building or consuming an analysis.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// Unknown crop key, non-finite soil values, or an unusable field
    /// selection. Raised before generator allocation.
    #[error("validation error: {0}")]
    Validation(String),

    /// An external advisory payload was malformed, had missing or mis-typed
    /// fields, or carried non-finite numbers. The whole payload is rejected.
    #[error("advisory response format error: {0}")]
    ResponseFormat(String),

    /// HTTP request to the advisory service failed.
    #[cfg(feature = "remote")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl AdvisorError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        AdvisorError::Validation(msg.into())
    }

    pub(crate) fn response_format(msg: impl Into<String>) -> Self {
        AdvisorError::ResponseFormat(msg.into())
    }
}
