//! HTTP mail relay notifier.
//!
//! Posts `{from, to, subject, text}` as JSON to a transactional-mail endpoint,
//! authenticating with a bearer key when one is configured.

use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

use super::{EmailMessage, NotifyError, Notifier};

pub struct MailRelayNotifier {
    endpoint: String,
    api_key: Option<String>,
    sender: String,
    http: reqwest::Client,
}

impl MailRelayNotifier {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>, sender: impl Into<String>) -> Result<Self, NotifyError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()?;
        Ok(Self::with_client(endpoint, api_key, sender, http))
    }

    pub fn with_client(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        sender: impl Into<String>,
        http: reqwest::Client,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key,
            sender: sender.into(),
            http,
        }
    }
}

#[async_trait]
impl Notifier for MailRelayNotifier {
    async fn send(&self, message: &EmailMessage) -> Result<(), NotifyError> {
        let payload = json!({
            "from": self.sender,
            "to": message.to,
            "subject": message.subject,
            "text": message.body,
        });

        let mut request = self.http.post(&self.endpoint).json(&payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Rejected(status.as_u16()));
        }

        debug!(to = %message.to, "Alert email handed to relay");
        Ok(())
    }
}
