// src/application/ports/mailer.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html: String,
}

#[async_trait]
pub trait TransactionalMailer: Send + Sync {
    async fn send(&self, message: EmailMessage) -> ApplicationResult<()>;
}
