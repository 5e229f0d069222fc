//! Connector error types and error handling.

mod types;

#[cfg(test)]
mod tests;

pub use types::{ClientError, ProviderError, ValidationError, MAX_MESSAGE_LENGTH};

use thiserror::Error;

/// Error category names reported to the workflow engine
pub mod error_types {
    pub const CONFIGURATION_ERROR: &str = "ConfigurationError";
    pub const VALIDATION_ERROR: &str = "ValidationError";
    pub const PROVIDER_ERROR: &str = "ProviderError";
}

/// Errors produced while constructing or running a connector command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Credentials or account state rejected at construction
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Anything else; `kind` is the runtime category name
    #[error("{kind}: {message}")]
    Unexpected { kind: String, message: String },
}

impl CommandError {
    /// Category name used as `error_type` in failure results
    pub fn error_type(&self) -> &str {
        match self {
            CommandError::Configuration { .. } => error_types::CONFIGURATION_ERROR,
            CommandError::Validation(_) => error_types::VALIDATION_ERROR,
            CommandError::Provider(_) => error_types::PROVIDER_ERROR,
            CommandError::Unexpected { kind, .. } => kind,
        }
    }

    /// HTTP-like status reported alongside a failure result
    pub fn status(&self) -> u16 {
        match self {
            CommandError::Configuration { .. }
            | CommandError::Validation(_)
            | CommandError::Provider(_) => 400,
            CommandError::Unexpected { .. } => 500,
        }
    }
}

impl From<ClientError> for CommandError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Api(provider) => CommandError::Provider(provider),
            ClientError::Transport { kind, message } => CommandError::Unexpected { kind, message },
        }
    }
}
