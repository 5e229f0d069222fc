//! Messages exchanged with the SMS provider

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::PhoneNumber;

/// Account status the provider reports for a usable account
pub const ACCOUNT_STATUS_ACTIVE: &str = "active";

/// A text message ready to be handed to the provider
///
/// Both numbers are validated [`PhoneNumber`]s, so nothing unnormalized can
/// reach the remote call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub from: PhoneNumber,
    pub to: PhoneNumber,
    pub body: String,
}

impl OutboundMessage {
    pub fn new(from: PhoneNumber, to: PhoneNumber, body: impl Into<String>) -> Self {
        Self {
            from,
            to,
            body: body.into(),
        }
    }

    /// Body length in characters, the unit the provider limits
    pub fn body_length(&self) -> usize {
        self.body.chars().count()
    }
}

/// What the provider returns after accepting a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageReceipt {
    /// Provider-assigned message identifier
    pub sid: String,
    /// Provider delivery status (queued, accepted, sent, ...)
    pub status: String,
}

/// Account details returned by the credential check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub sid: String,
    /// Account status (active, suspended, closed)
    pub status: String,
}

impl AccountInfo {
    pub fn is_active(&self) -> bool {
        self.status.eq_ignore_ascii_case(ACCOUNT_STATUS_ACTIVE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_status() {
        let mut account = AccountInfo {
            sid: "ACtest".to_string(),
            status: "active".to_string(),
        };
        assert!(account.is_active());

        account.status = "suspended".to_string();
        assert!(!account.is_active());
    }

    #[test]
    fn test_body_length_counts_characters() {
        let message = OutboundMessage::new(
            PhoneNumber::parse("+15557654321").unwrap(),
            PhoneNumber::parse("+15551234567").unwrap(),
            "héllo 👋",
        );
        assert_eq!(message.body_length(), 7);
        assert!(message.body.len() > 7);
    }

    #[test]
    fn test_receipt_ignores_unknown_fields() {
        let body = r#"{
            "sid": "SM1234567890abcdef1234567890abcdef",
            "status": "queued",
            "error_code": null,
            "error_message": null,
            "num_segments": "1",
            "direction": "outbound-api"
        }"#;

        let receipt: MessageReceipt = serde_json::from_str(body).unwrap();
        assert_eq!(receipt.status, "queued");
        assert_eq!(receipt.sid, "SM1234567890abcdef1234567890abcdef");
    }
}
