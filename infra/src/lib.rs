//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer of the Twilio connector.
//! It provides the concrete SMS provider clients used by the core
//! `SendSmsCommand` together with configuration loading.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **SMS**: Twilio REST client and a mock provider for development
//! - **Config**: Layered configuration (`.env`, optional TOML file, `TWILIO_*` variables)

// Re-export core types for convenience
pub use ct_core::errors::*;

/// Configuration module for the SMS provider
pub mod config;

/// SMS provider module - External SMS providers
pub mod sms;

use std::sync::Arc;

use ct_core::services::{SendSmsCommand, SmsProvider};

use crate::config::TwilioConfig;
use crate::sms::TwilioRestClient;

/// Build the send-SMS command from configuration.
///
/// Validates the sender number and checks the credentials against the
/// provider before returning.
pub async fn connect<P: SmsProvider>(
    provider: Arc<P>,
    config: &TwilioConfig,
) -> Result<SendSmsCommand<P>, InfrastructureError> {
    let command = SendSmsCommand::connect(
        provider,
        &config.account_sid,
        &config.auth_token,
        &config.from_number,
    )
    .await?;

    Ok(command)
}

/// Build a Twilio-backed send-SMS command from configuration.
pub async fn connect_twilio(
    config: &TwilioConfig,
) -> Result<SendSmsCommand<TwilioRestClient>, InfrastructureError> {
    let client = Arc::new(TwilioRestClient::new(config)?);
    connect(client, config).await
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP client construction error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Command construction error
    #[error(transparent)]
    Command(#[from] CommandError),
}
