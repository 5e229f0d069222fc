//! Error types raised by input validation and by the SMS provider

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum body length accepted by the provider for a single message
pub const MAX_MESSAGE_LENGTH: usize = 1600;

/// Local input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid phone number format: {phone}. Expected E.164 format (e.g., +1234567890)")]
    InvalidPhoneNumber { phone: String },

    #[error("Message body must not be empty")]
    EmptyMessageBody,

    #[error("Message body exceeds maximum length of 1600 characters (got {length})")]
    MessageBodyTooLong { length: usize },
}

/// A rejection returned by the provider's REST API
///
/// Mirrors the provider's error document: a numeric error code, a message,
/// the HTTP status and an optional documentation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderError {
    /// Provider error code (e.g. 21211 for an invalid 'To' number)
    #[serde(default)]
    pub code: Option<u32>,
    /// Provider error message
    pub message: String,
    /// HTTP status of the failed response
    #[serde(default)]
    pub status: Option<u16>,
    /// Link to the provider documentation for this error
    #[serde(default)]
    pub more_info: Option<String>,
}

impl ProviderError {
    /// Create a provider error from a code and message
    pub fn new(code: Option<u32>, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            status: None,
            more_info: None,
        }
    }

    /// Attach the HTTP status of the failed response
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.status, self.code) {
            (Some(status), Some(code)) => write!(f, "HTTP {} error {}: {}", status, code, self.message),
            (Some(status), None) => write!(f, "HTTP {} error: {}", status, self.message),
            (None, Some(code)) => write!(f, "Error {}: {}", code, self.message),
            (None, None) => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Failure of a single call made by an SMS provider client
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The provider answered and rejected the request
    #[error(transparent)]
    Api(#[from] ProviderError),

    /// The request did not produce a usable provider answer
    ///
    /// `kind` names the failure category (`TimeoutError`, `ConnectionError`, ...)
    #[error("{kind}: {message}")]
    Transport { kind: String, message: String },
}

impl ClientError {
    /// Create a transport-level failure
    pub fn transport(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            kind: kind.into(),
            message: message.into(),
        }
    }
}
