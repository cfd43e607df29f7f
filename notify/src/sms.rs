//! HTTP client for the SMS gateway.

use crate::error::NotifyError;
use crate::message::NotificationMessage;
use crate::messenger::Messenger;

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

/// Default timeout for gateway requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default connection timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for a generic JSON SMS gateway.
///
/// Sends `POST {base_url}/v1/messages` with `{"from", "to", "body"}`. A 2xx
/// status means the gateway accepted the message; queuing and carrier
/// delivery beyond that point are the gateway's business.
pub struct SmsClient {
    /// Base URL of the gateway.
    base_url: String,
    /// HTTP client (reusable connection pool).
    http_client: reqwest::Client,
    /// Optional bearer token attached to every request.
    auth_token: Option<String>,
}

/// Wire payload for a send request.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: &'a str,
    body: &'a str,
}

impl SmsClient {
    /// Create a client for the given gateway with default timeout settings.
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
            auth_token: None,
        }
    }

    /// Attach a bearer token sent with every request.
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Messenger for SmsClient {
    /// `POST {base_url}/v1/messages` with the message payload.
    async fn send(&self, message: &NotificationMessage) -> Result<(), NotifyError> {
        let url = format!("{}/v1/messages", self.base_url);
        let payload = SendRequest {
            from: &message.from,
            to: &message.to,
            body: &message.body,
        };

        let mut request = self.http_client.post(&url).json(&payload);
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                NotifyError::Unreachable(format!("request timed out: {e}"))
            } else if e.is_connect() {
                NotifyError::Unreachable(format!("connection failed: {e}"))
            } else {
                NotifyError::Delivery(e.to_string())
            }
        })?;

        if !response.status().is_success() {
            return Err(NotifyError::Delivery(format!(
                "HTTP status {}",
                response.status()
            )));
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "sms-gateway"
    }
}
