//! Mock SMS Provider Implementation
//!
//! A mock implementation of the SMS provider for development and testing.
//! This implementation logs SMS messages instead of sending them.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use ct_core::domain::entities::{AccountInfo, MessageReceipt, OutboundMessage};
use ct_core::domain::value_objects::Credentials;
use ct_core::errors::{ClientError, ProviderError};
use ct_core::services::SmsProvider;

/// Twilio error code for rejected credentials
pub const AUTHENTICATION_ERROR_CODE: u32 = 20003;

/// Mock SMS provider for development and testing
///
/// This implementation:
/// - Accepts any credentials unless told to reject them
/// - Logs SMS messages
/// - Generates Twilio-shaped message SIDs (`SM` + 32 hex digits)
/// - Tracks message count for testing
#[derive(Clone)]
pub struct MockSmsProvider {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether the credential check should fail
    reject_credentials: Arc<AtomicBool>,
    /// Whether sends should fail
    simulate_failure: Arc<AtomicBool>,
    /// Whether to print messages to console
    console_output: bool,
}

impl MockSmsProvider {
    /// Create a new mock SMS provider
    pub fn new() -> Self {
        Self::with_options(true, false)
    }

    /// Create a mock provider with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            reject_credentials: Arc::new(AtomicBool::new(false)),
            simulate_failure: Arc::new(AtomicBool::new(simulate_failure)),
            console_output,
        }
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Reset the message counter
    pub fn reset_counter(&self) {
        self.message_count.store(0, Ordering::SeqCst);
    }

    /// Enable or disable send failure simulation
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }

    /// Enable or disable credential rejection
    pub fn set_reject_credentials(&self, reject: bool) {
        self.reject_credentials.store(reject, Ordering::SeqCst);
    }
}

impl Default for MockSmsProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SmsProvider for MockSmsProvider {
    async fn fetch_account(&self, credentials: &Credentials) -> Result<AccountInfo, ClientError> {
        if self.reject_credentials.load(Ordering::SeqCst) {
            warn!(
                "Mock SMS provider rejecting credentials for account {}",
                credentials.account_sid
            );
            return Err(ProviderError::new(Some(AUTHENTICATION_ERROR_CODE), "Authenticate")
                .with_status(401)
                .into());
        }

        Ok(AccountInfo {
            sid: credentials.account_sid.clone(),
            status: "active".to_string(),
        })
    }

    async fn create_message(
        &self,
        _credentials: &Credentials,
        message: &OutboundMessage,
    ) -> Result<MessageReceipt, ClientError> {
        let masked_phone = message.to.masked();

        // Simulate failure if configured
        if self.simulate_failure.load(Ordering::SeqCst) {
            warn!(
                "Mock SMS provider simulating failure for phone: {}",
                masked_phone
            );
            return Err(ProviderError::new(None, "Simulated SMS sending failure")
                .with_status(500)
                .into());
        }

        // Generate mock message SID
        let message_id = format!("SM{}", Uuid::new_v4().simple());

        // Increment message counter
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            // Console output for development - show full message
            println!("\n{}", "=".repeat(60));
            println!("MOCK SMS PROVIDER - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("From: {}", message.from);
            println!("To: {} (masked: {})", message.to, masked_phone);
            println!("Message ID: {}", message_id);
            println!("Content: {}", message.body);
            println!("{}\n", "=".repeat(60));
        }

        // Structured logging for production
        info!(
            target: "sms_service",
            provider = "mock",
            phone = %masked_phone,
            message_id = %message_id,
            message_length = message.body_length(),
            "SMS sent successfully (mock)"
        );

        Ok(MessageReceipt {
            sid: message_id,
            status: "queued".to_string(),
        })
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
