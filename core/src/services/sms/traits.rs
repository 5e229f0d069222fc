//! Contract between the send-SMS command and an SMS provider client

use async_trait::async_trait;

use crate::domain::entities::{AccountInfo, MessageReceipt, OutboundMessage};
use crate::domain::value_objects::Credentials;
use crate::errors::ClientError;

/// Remote SMS provider
///
/// Every call is a single request with no retries. Implementations hold only
/// stateless client configuration, so one instance can serve many commands.
#[async_trait]
pub trait SmsProvider: Send + Sync {
    /// Fetch the account identified by `credentials`, confirming they are accepted
    async fn fetch_account(&self, credentials: &Credentials) -> Result<AccountInfo, ClientError>;

    /// Send one text message
    async fn create_message(
        &self,
        credentials: &Credentials,
        message: &OutboundMessage,
    ) -> Result<MessageReceipt, ClientError>;

    /// Get the service provider name (e.g., "Twilio", "Mock")
    fn provider_name(&self) -> &str;
}
