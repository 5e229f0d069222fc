//! Configuration management for the SMS provider
//!
//! Settings are layered, later sources winning:
//! 1. `.env` file (loaded into the process environment by `dotenvy`)
//! 2. Optional `twilio-<environment>.toml` file
//! 3. `TWILIO_*` environment variables (`TWILIO_ACCOUNT_SID`, `TWILIO_AUTH_TOKEN`,
//!    `TWILIO_FROM_NUMBER`, `TWILIO_PROVIDER`, `TWILIO_API_BASE_URL`,
//!    `TWILIO_REQUEST_TIMEOUT_SECS`)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use ct_shared::Environment;

use crate::InfrastructureError;

/// Production REST API root
pub const DEFAULT_API_BASE_URL: &str = "https://api.twilio.com/2010-04-01";

/// Which provider implementation to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SmsProviderKind {
    /// Twilio REST API
    #[default]
    Twilio,
    /// In-memory provider for development
    Mock,
}

/// Twilio SMS service configuration
#[derive(Clone, Deserialize, Serialize)]
pub struct TwilioConfig {
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    pub auth_token: String,
    /// From phone number (must be a Twilio phone number)
    pub from_number: String,
    /// Provider implementation
    #[serde(default)]
    pub provider: SmsProviderKind,
    /// REST API root
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Timeout for API requests in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl TwilioConfig {
    /// Create a configuration for the production API with default timeouts
    pub fn new(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
        from_number: impl Into<String>,
    ) -> Self {
        Self {
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
            from_number: from_number.into(),
            provider: SmsProviderKind::default(),
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }

    /// Load configuration from the environment
    pub fn from_env() -> Result<Self, InfrastructureError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let environment = Environment::from_env();

        let settings = ::config::Config::builder()
            .add_source(::config::File::with_name(environment.config_file()).required(false))
            .add_source(::config::Environment::with_prefix("TWILIO"))
            .build()
            .map_err(|e| InfrastructureError::Config(e.to_string()))?;

        let loaded: Self = settings
            .try_deserialize()
            .map_err(|e| InfrastructureError::Config(e.to_string()))?;

        tracing::debug!(
            environment = %environment,
            provider = ?loaded.provider,
            api_base_url = %loaded.api_base_url,
            "Loaded SMS configuration"
        );

        Ok(loaded)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl fmt::Debug for TwilioConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwilioConfig")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"<redacted>")
            .field("from_number", &self.from_number)
            .field("provider", &self.provider)
            .field("api_base_url", &self.api_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}
