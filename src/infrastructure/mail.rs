// src/infrastructure/mail.rs
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::mailer::{EmailMessage, TransactionalMailer},
};

#[derive(Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

/// Sends mail through an HTTP transactional email API.
pub struct HttpMailer {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    from: String,
}

impl HttpMailer {
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        from: impl Into<String>,
    ) -> ApplicationResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(Self {
            http,
            api_url: api_url.into(),
            api_key: api_key.into(),
            from: from.into(),
        })
    }
}

#[async_trait]
impl TransactionalMailer for HttpMailer {
    async fn send(&self, message: EmailMessage) -> ApplicationResult<()> {
        let body = SendRequest {
            from: &self.from,
            to: &message.to,
            subject: &message.subject,
            html: &message.html,
        };

        let resp = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                ApplicationError::infrastructure(format!("mail api unreachable: {err}"))
            })?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            let excerpt: String = text.chars().take(200).collect();
            return Err(ApplicationError::infrastructure(format!(
                "mail api returned {status}: {excerpt}"
            )));
        }

        tracing::debug!(to = %message.to, "email sent");
        Ok(())
    }
}

/// Used when no mail API is configured: messages are only logged.
#[derive(Default, Clone)]
pub struct LogMailer;

#[async_trait]
impl TransactionalMailer for LogMailer {
    async fn send(&self, message: EmailMessage) -> ApplicationResult<()> {
        tracing::info!(
            to = %message.to,
            subject = %message.subject,
            "email not sent: no mail api configured"
        );
        Ok(())
    }
}
