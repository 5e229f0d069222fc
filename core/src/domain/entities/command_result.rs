//! Result record handed back to the workflow engine
//!
//! The record uses a flat JSON envelope. A success looks like
//!
//! ```json
//! {"status": 200, "message_sid": "SM...", "to": "+15551234567", "from": "+15557654321",
//!  "status_code": "queued", "timestamp": "2026-01-01T00:00:00Z",
//!  "details": "Message sent to +15551234567"}
//! ```
//!
//! and a failure looks like
//!
//! ```json
//! {"status": 400, "error_type": "ProviderError", "error_code": 21211,
//!  "error_message": "...", "timestamp": "2026-01-01T00:00:00Z"}
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::message::{MessageReceipt, OutboundMessage};
use crate::errors::CommandError;

pub const STATUS_OK: u16 = 200;

/// Successful send
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsDelivery {
    pub status: u16,
    pub message_sid: String,
    pub to: String,
    pub from: String,
    /// Provider delivery status
    pub status_code: String,
    pub timestamp: DateTime<Utc>,
    pub details: String,
}

/// Failed send or failed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsFailure {
    pub status: u16,
    pub error_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<u32>,
    pub error_message: String,
    pub timestamp: DateTime<Utc>,
}

impl SmsFailure {
    /// Build a failure record from any command error
    pub fn from_error(err: &CommandError) -> Self {
        let (error_code, error_message) = match err {
            CommandError::Provider(provider) => (provider.code, provider.message.clone()),
            CommandError::Configuration { message } => (None, message.clone()),
            CommandError::Unexpected { message, .. } => (None, message.clone()),
            CommandError::Validation(validation) => (None, validation.to_string()),
        };

        Self {
            status: err.status(),
            error_type: err.error_type().to_string(),
            error_code,
            error_message,
            timestamp: Utc::now(),
        }
    }
}

/// Outcome of one command invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommandResult {
    Success(SmsDelivery),
    Failure(SmsFailure),
}

impl CommandResult {
    /// Success record for a message the provider accepted
    pub fn delivered(message: &OutboundMessage, receipt: MessageReceipt) -> Self {
        CommandResult::Success(SmsDelivery {
            status: STATUS_OK,
            message_sid: receipt.sid,
            to: message.to.to_string(),
            from: message.from.to_string(),
            status_code: receipt.status,
            timestamp: Utc::now(),
            details: format!("Message sent to {}", message.to),
        })
    }

    /// Failure record for an error
    pub fn failed(err: &CommandError) -> Self {
        CommandResult::Failure(SmsFailure::from_error(err))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CommandResult::Success(_))
    }

    /// Numeric status field of the envelope
    pub fn status(&self) -> u16 {
        match self {
            CommandResult::Success(delivery) => delivery.status,
            CommandResult::Failure(failure) => failure.status,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            CommandResult::Success(delivery) => delivery.timestamp,
            CommandResult::Failure(failure) => failure.timestamp,
        }
    }

    /// Render the flat envelope as a JSON value
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

impl From<CommandError> for CommandResult {
    fn from(err: CommandError) -> Self {
        CommandResult::failed(&err)
    }
}
