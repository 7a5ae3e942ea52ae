//! Centralized error types for TTPX.

use thiserror::Error;

/// Main error type for TTP extraction operations.
///
/// Every variant is terminal for the request it occurred in; nothing is
/// retried or silently recovered.
#[derive(Error, Debug)]
pub enum TtpxError {
    /// The completion service credential is missing or unusable. Raised at
    /// startup, before any request can be issued.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The completion service rejected the credential.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The completion service could not be reached, timed out, or failed
    /// server-side.
    #[error("Completion service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The completion service answered without any usable content.
    #[error("Completion service returned no usable content")]
    EmptyResult,

    /// The submitted report is empty; no outbound call is made for it.
    #[error("Report text is empty; paste a threat report before extracting")]
    EmptyReport,
}

/// Result type for TTPX operations.
pub type TtpxResult<T> = Result<T, TtpxError>;

impl TtpxError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an authentication error.
    pub fn authentication(msg: impl Into<String>) -> Self {
        Self::Authentication(msg.into())
    }

    /// Create a service-unavailable error.
    pub fn service_unavailable(msg: impl Into<String>) -> Self {
        Self::ServiceUnavailable(msg.into())
    }
}
