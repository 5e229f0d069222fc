//! SMS Provider Module
//!
//! This module provides the provider clients the send-SMS command calls
//! through. It includes the Twilio REST client and a mock implementation
//! for development.
//!
//! ## Features
//!
//! - **Twilio Support**: Production SMS via the Twilio REST API
//! - **Mock Implementation**: Console output for development
//! - **Security**: Phone number masking in logs

pub mod mock_sms;
pub mod twilio;

// Re-export commonly used types
pub use mock_sms::MockSmsProvider;
pub use twilio::TwilioRestClient;

#[cfg(test)]
mod tests;
