//! Mock provider for testing the send-SMS command

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::domain::entities::{AccountInfo, MessageReceipt, OutboundMessage};
use crate::domain::value_objects::Credentials;
use crate::errors::ClientError;
use crate::services::sms::SmsProvider;

pub const STUB_MESSAGE_SID: &str = "SM00000000000000000000000000000001";

// Stub provider with scripted answers
pub struct StubProvider {
    pub account: Result<AccountInfo, ClientError>,
    pub send: Result<MessageReceipt, ClientError>,
    pub fetch_calls: AtomicUsize,
    pub send_calls: AtomicUsize,
    pub sent: Mutex<Vec<OutboundMessage>>,
    pub seen_credentials: Mutex<Vec<Credentials>>,
}

impl StubProvider {
    pub fn accepting() -> Self {
        Self {
            account: Ok(AccountInfo {
                sid: "ACtest".to_string(),
                status: "active".to_string(),
            }),
            send: Ok(MessageReceipt {
                sid: STUB_MESSAGE_SID.to_string(),
                status: "queued".to_string(),
            }),
            fetch_calls: AtomicUsize::new(0),
            send_calls: AtomicUsize::new(0),
            sent: Mutex::new(Vec::new()),
            seen_credentials: Mutex::new(Vec::new()),
        }
    }

    pub fn with_account(mut self, account: Result<AccountInfo, ClientError>) -> Self {
        self.account = account;
        self
    }

    pub fn with_send(mut self, send: Result<MessageReceipt, ClientError>) -> Self {
        self.send = send;
        self
    }

    pub fn send_count(&self) -> usize {
        self.send_calls.load(Ordering::SeqCst)
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn last_sent(&self) -> Option<OutboundMessage> {
        self.sent.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl SmsProvider for StubProvider {
    async fn fetch_account(&self, credentials: &Credentials) -> Result<AccountInfo, ClientError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.seen_credentials.lock().unwrap().push(credentials.clone());
        self.account.clone()
    }

    async fn create_message(
        &self,
        credentials: &Credentials,
        message: &OutboundMessage,
    ) -> Result<MessageReceipt, ClientError> {
        self.send_calls.fetch_add(1, Ordering::SeqCst);
        self.seen_credentials.lock().unwrap().push(credentials.clone());
        self.sent.lock().unwrap().push(message.clone());
        self.send.clone()
    }

    fn provider_name(&self) -> &str {
        "Stub"
    }
}
