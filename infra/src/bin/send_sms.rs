//! Send one SMS from the command line
//!
//! ```text
//! send-sms <to> <body>
//! ```
//!
//! Configuration comes from `TWILIO_*` variables (see `ct_infra::config`).
//! The flat result record is printed to stdout as JSON.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use tracing::{error, info};

use ct_core::services::SmsProvider;
use ct_infra::config::{SmsProviderKind, TwilioConfig};
use ct_infra::sms::{MockSmsProvider, TwilioRestClient};
use ct_shared::{init_logging, Environment, LoggingConfig};

const EXIT_FAILURE_RESULT: u8 = 1;
const EXIT_SETUP_ERROR: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let environment = Environment::from_env();
    if let Err(e) = init_logging(&LoggingConfig::for_environment(environment)) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match run().await {
        Ok(code) => code,
        Err(e) => {
            error!("send-sms setup failed: {:#}", e);
            eprintln!("error: {:#}", e);
            ExitCode::from(EXIT_SETUP_ERROR)
        }
    }
}

async fn run() -> anyhow::Result<ExitCode> {
    let mut args = std::env::args().skip(1);
    let (to, body) = match (args.next(), args.next()) {
        (Some(to), Some(body)) => (to, body),
        _ => anyhow::bail!("usage: send-sms <to> <body>"),
    };

    let config = TwilioConfig::from_env().context("loading SMS configuration")?;
    info!("Starting send-sms with {:?} provider", config.provider);

    match config.provider {
        SmsProviderKind::Twilio => {
            let client = TwilioRestClient::new(&config).context("building Twilio client")?;
            send(Arc::new(client), &config, to, body).await
        }
        SmsProviderKind::Mock => send(Arc::new(MockSmsProvider::new()), &config, to, body).await,
    }
}

async fn send<P: SmsProvider>(
    provider: Arc<P>,
    config: &TwilioConfig,
    to: String,
    body: String,
) -> anyhow::Result<ExitCode> {
    let command = ct_infra::connect(provider, config)
        .await
        .context("connecting to SMS provider")?;

    let result = command.execute(to, body).await;
    let rendered = serde_json::to_string_pretty(&result).context("rendering result")?;
    println!("{}", rendered);

    Ok(if result.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_FAILURE_RESULT)
    })
}
