use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::future::Future;

use super::message::{EmailMessage, Recipients};
use crate::config::Config;

#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error("email provider returned {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Provider { status: u16, message: Option<String> },

    #[error("email provider unreachable: {0}")]
    Network(#[from] reqwest::Error),
}

impl SendError {
    /// The message to surface to callers verbatim, when the provider sent one.
    pub fn provider_message(&self) -> Option<&str> {
        match self {
            Self::Provider { message, .. } => message.as_deref(),
            Self::Network(_) => None,
        }
    }
}

/// Delivers a validated message through an external provider.
pub trait EmailSender: Clone + Send + Sync + 'static {
    /// Returns the provider's response payload on success.
    fn send(&self, message: &EmailMessage) -> impl Future<Output = Result<Value, SendError>> + Send;
}

/// [Resend](https://resend.com) HTTP API.
#[derive(Debug, Clone)]
pub struct ResendSender {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    from: String,
}

#[derive(Serialize)]
struct ResendEmail<'a> {
    from: &'a str,
    to: &'a Recipients,
    subject: &'a str,
    html: &'a str,
}

#[derive(Deserialize)]
struct ResendErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl ResendSender {
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        from: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.into(),
            api_key: api_key.into(),
            from: from.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.resend_api_url(),
            config.resend_api_key(),
            config.email_from(),
        )
    }
}

impl EmailSender for ResendSender {
    async fn send(&self, message: &EmailMessage) -> Result<Value, SendError> {
        let payload = ResendEmail {
            from: &self.from,
            to: &message.to,
            subject: &message.subject,
            html: &message.html,
        };

        let response = self
            .http
            .post(format!("{}/emails", self.api_url))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            tracing::info!(to = %message.to, "Email accepted by provider");
            return Ok(serde_json::from_slice(&bytes).unwrap_or(Value::Null));
        }

        let message = serde_json::from_slice::<ResendErrorBody>(&bytes)
            .ok()
            .and_then(|body| body.message.or(body.error));
        Err(SendError::Provider {
            status: status.as_u16(),
            message,
        })
    }
}
