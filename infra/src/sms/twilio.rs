//! Twilio SMS Provider Implementation
//!
//! This module talks to the Twilio REST API with `reqwest`.
//! It implements the core `SmsProvider` trait for production SMS delivery.
//!
//! ## Features
//!
//! - Credential check through the Accounts resource
//! - Message creation through the Messages resource
//! - Twilio error documents surfaced as `ProviderError`s with their numeric code
//! - Transport failures classified by category (timeout, connection, decode)
//! - Security: Phone number masking in logs

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info};

use ct_core::domain::entities::{AccountInfo, MessageReceipt, OutboundMessage};
use ct_core::domain::value_objects::Credentials;
use ct_core::errors::{ClientError, ProviderError};
use ct_core::services::SmsProvider;

use crate::{config::TwilioConfig, InfrastructureError};

/// Twilio REST API client
///
/// Holds only HTTP configuration (connection pool, base URL, timeout), so a
/// single client can be shared by every command instance.
#[derive(Debug, Clone)]
pub struct TwilioRestClient {
    http: Client,
    base_url: Url,
}

impl TwilioRestClient {
    /// Create a new Twilio REST client
    pub fn new(config: &TwilioConfig) -> Result<Self, InfrastructureError> {
        let base_url = Url::parse(&config.api_base_url).map_err(|e| {
            InfrastructureError::Config(format!(
                "Invalid Twilio API base URL '{}': {}",
                config.api_base_url, e
            ))
        })?;

        if base_url.cannot_be_a_base() {
            return Err(InfrastructureError::Config(format!(
                "Twilio API base URL '{}' cannot carry a path",
                config.api_base_url
            )));
        }

        let http = Client::builder().timeout(config.request_timeout()).build()?;

        info!(
            "Twilio REST client initialized for {} (timeout: {}s)",
            base_url, config.request_timeout_secs
        );

        Ok(Self { http, base_url })
    }

    /// `{base}/Accounts/{sid}.json`
    pub fn account_url(&self, account_sid: &str) -> Url {
        let resource = format!("{}.json", account_sid);
        self.endpoint(&["Accounts", resource.as_str()])
    }

    /// `{base}/Accounts/{sid}/Messages.json`
    pub fn messages_url(&self, account_sid: &str) -> Url {
        self.endpoint(&["Accounts", account_sid, "Messages.json"])
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // `new` rejects cannot-be-a-base URLs, so a path is always available
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

#[async_trait]
impl SmsProvider for TwilioRestClient {
    async fn fetch_account(&self, credentials: &Credentials) -> Result<AccountInfo, ClientError> {
        let url = self.account_url(&credentials.account_sid);
        debug!("Fetching Twilio account {}", credentials.account_sid);

        let response = self
            .http
            .get(url)
            .basic_auth(&credentials.account_sid, Some(&credentials.auth_token))
            .send()
            .await
            .map_err(transport_error)?;

        read_response(response).await
    }

    async fn create_message(
        &self,
        credentials: &Credentials,
        message: &OutboundMessage,
    ) -> Result<MessageReceipt, ClientError> {
        let url = self.messages_url(&credentials.account_sid);
        debug!(
            "Creating Twilio message to {} (message length: {} chars)",
            message.to.masked(),
            message.body_length()
        );

        let response = self
            .http
            .post(url)
            .basic_auth(&credentials.account_sid, Some(&credentials.auth_token))
            .form(&[
                ("To", message.to.as_str()),
                ("From", message.from.as_str()),
                ("Body", message.body.as_str()),
            ])
            .send()
            .await
            .map_err(transport_error)?;

        read_response(response).await
    }

    fn provider_name(&self) -> &str {
        "Twilio"
    }
}

async fn read_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();

    if status.is_success() {
        return response.json::<T>().await.map_err(transport_error);
    }

    let body = response.text().await.map_err(transport_error)?;
    let rejection = parse_error_body(status, &body);
    error!("Twilio API error: {}", rejection);

    Err(ClientError::Api(rejection))
}

/// Decode a Twilio error document
///
/// Twilio answers failed requests with `{"code", "message", "more_info", "status"}`.
/// Bodies that are not such a document fall back to the HTTP reason phrase.
pub fn parse_error_body(status: StatusCode, body: &str) -> ProviderError {
    match serde_json::from_str::<ProviderError>(body) {
        Ok(mut rejection) => {
            if rejection.status.is_none() {
                rejection.status = Some(status.as_u16());
            }
            rejection
        }
        Err(_) => {
            let message = status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            ProviderError::new(None, message).with_status(status.as_u16())
        }
    }
}

/// Classify a `reqwest` failure by its runtime category
pub fn transport_error(err: reqwest::Error) -> ClientError {
    let kind = if err.is_timeout() {
        "TimeoutError"
    } else if err.is_connect() {
        "ConnectionError"
    } else if err.is_decode() {
        "DecodeError"
    } else {
        "HttpError"
    };

    ClientError::transport(kind, err.to_string())
}
