use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use tracing::error;

use crate::email::application::ports::outgoing::{EmailRelay, EmailRelayError, OutgoingEmail};

pub const RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Request body of `POST /emails`.
#[derive(Debug, Serialize, PartialEq)]
struct ResendPayload<'a> {
    from: &'a str,
    to: [&'a str; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
    subject: &'a str,
    text: &'a str,
    html: &'a str,
}

impl<'a> From<&'a OutgoingEmail> for ResendPayload<'a> {
    fn from(email: &'a OutgoingEmail) -> Self {
        Self {
            from: &email.from,
            to: [&email.to],
            reply_to: email.reply_to.as_deref(),
            subject: &email.subject,
            text: &email.text,
            html: &email.html,
        }
    }
}

/// Resend HTTP API relay.
#[derive(Clone)]
pub struct ResendRelay {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl ResendRelay {
    pub fn new(api_key: &str) -> Self {
        Self::with_endpoint(api_key, RESEND_API_URL)
    }

    pub fn with_endpoint(api_key: &str, endpoint: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.to_string(),
            endpoint: endpoint.to_string(),
        }
    }
}

#[async_trait]
impl EmailRelay for ResendRelay {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailRelayError> {
        let body = serde_json::to_vec(&ResendPayload::from(email))
            .map_err(|e| EmailRelayError::InvalidMessage(e.to_string()))?;

        let resp = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| EmailRelayError::SendFailed(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            error!(status = status.as_u16(), %message, "Resend rejected the message");
            return Err(EmailRelayError::SendFailed(format!(
                "status {}: {}",
                status.as_u16(),
                message
            )));
        }

        Ok(())
    }
}
