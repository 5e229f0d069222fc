//! Connector commands and the provider contracts they depend on.

pub mod sms;

// Re-export commonly used types
pub use sms::{SendSmsCommand, SmsProvider};
