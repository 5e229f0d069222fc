//! Send-SMS command implementation

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::domain::entities::{CommandResult, OutboundMessage};
use crate::domain::value_objects::{ConfigValue, Credentials, PhoneNumber};
use crate::errors::{ClientError, CommandError, ValidationError, MAX_MESSAGE_LENGTH};

use super::traits::SmsProvider;

/// Connector command that sends one SMS per invocation
///
/// Credentials and the sender number are bound when the command is created;
/// recipient and body are supplied on each [`execute`](Self::execute) call.
pub struct SendSmsCommand<P: SmsProvider> {
    provider: Arc<P>,
    credentials: Credentials,
    from_number: PhoneNumber,
}

impl<P: SmsProvider> SendSmsCommand<P> {
    /// Create a command, validating the sender and confirming the credentials
    ///
    /// # Arguments
    ///
    /// * `provider` - SMS provider client
    /// * `account_sid` - Provider account identifier
    /// * `auth_token` - Provider secret token
    /// * `from_number` - Sender number, E.164 with or without the leading `+`
    ///
    /// # Errors
    ///
    /// * `CommandError::Validation` - the sender number is not E.164
    /// * `CommandError::Configuration` - the provider rejected the credentials
    ///   or the account is not active
    /// * `CommandError::Unexpected` - the credential check could not be completed
    pub async fn connect(
        provider: Arc<P>,
        account_sid: impl Into<ConfigValue>,
        auth_token: impl Into<ConfigValue>,
        from_number: impl Into<ConfigValue>,
    ) -> Result<Self, CommandError> {
        let credentials = Credentials::new(account_sid.into().resolve(), auth_token.into().resolve());
        let from_number = PhoneNumber::parse(&from_number.into().resolve())?;

        match provider.fetch_account(&credentials).await {
            Ok(account) if account.is_active() => {
                info!(
                    provider = provider.provider_name(),
                    account_sid = %credentials.account_sid,
                    from = %from_number.masked(),
                    "SMS client initialized successfully"
                );
            }
            Ok(account) => {
                error!(
                    provider = provider.provider_name(),
                    account_sid = %account.sid,
                    account_status = %account.status,
                    "SMS account is not active"
                );
                return Err(CommandError::Configuration {
                    message: format!(
                        "{} account {} is {}",
                        provider.provider_name(),
                        account.sid,
                        account.status
                    ),
                });
            }
            Err(ClientError::Api(rejection)) => {
                error!(
                    provider = provider.provider_name(),
                    "Failed to initialize SMS client: {}", rejection
                );
                return Err(CommandError::Configuration {
                    message: format!(
                        "Invalid {} credentials: {}",
                        provider.provider_name(),
                        rejection
                    ),
                });
            }
            Err(err @ ClientError::Transport { .. }) => {
                error!(
                    provider = provider.provider_name(),
                    "Could not verify SMS credentials: {}", err
                );
                return Err(err.into());
            }
        }

        Ok(Self {
            provider,
            credentials,
            from_number,
        })
    }

    /// Send one message
    ///
    /// Never fails: validation errors, provider rejections and transport
    /// failures are all reported as [`CommandResult::Failure`].
    pub async fn execute(
        &self,
        to_number: impl Into<ConfigValue>,
        message_body: impl Into<ConfigValue>,
    ) -> CommandResult {
        let to_number = to_number.into().resolve();
        let message_body = message_body.into().resolve();

        match self.send(&to_number, message_body).await {
            Ok(result) => result,
            Err(err) => {
                match &err {
                    CommandError::Provider(rejection) => {
                        error!(
                            target: "sms_service",
                            provider = self.provider.provider_name(),
                            error_code = ?rejection.code,
                            more_info = rejection.more_info.as_deref().unwrap_or("-"),
                            "Provider API error: {}", rejection.message
                        );
                    }
                    CommandError::Validation(validation) => {
                        warn!(target: "sms_service", "Validation error: {}", validation);
                    }
                    other => {
                        error!(target: "sms_service", "Unexpected error: {}", other);
                    }
                }
                CommandResult::failed(&err)
            }
        }
    }

    async fn send(&self, to_number: &str, message_body: String) -> Result<CommandResult, CommandError> {
        let to = PhoneNumber::parse(to_number)?;
        validate_message_body(&message_body)?;

        let message = OutboundMessage::new(self.from_number.clone(), to, message_body);

        info!(
            target: "sms_service",
            provider = self.provider.provider_name(),
            phone = %message.to.masked(),
            "Sending SMS"
        );
        debug!(message_length = message.body_length(), "Outbound message prepared");

        let receipt = self
            .provider
            .create_message(&self.credentials, &message)
            .await?;

        info!(
            target: "sms_service",
            provider = self.provider.provider_name(),
            phone = %message.to.masked(),
            message_id = %receipt.sid,
            status = %receipt.status,
            "SMS sent successfully"
        );

        Ok(CommandResult::delivered(&message, receipt))
    }

    /// Normalized sender number
    pub fn from_number(&self) -> &PhoneNumber {
        &self.from_number
    }

    pub fn account_sid(&self) -> &str {
        &self.credentials.account_sid
    }

    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }
}

/// Check a message body against the provider limits
///
/// The body must not be empty and must be at most [`MAX_MESSAGE_LENGTH`]
/// characters long. Whitespace-only bodies are left for the provider to judge.
pub fn validate_message_body(body: &str) -> Result<(), ValidationError> {
    if body.is_empty() {
        return Err(ValidationError::EmptyMessageBody);
    }

    let length = body.chars().count();
    if length > MAX_MESSAGE_LENGTH {
        return Err(ValidationError::MessageBodyTooLong { length });
    }

    Ok(())
}
