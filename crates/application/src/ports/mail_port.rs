//! Mail delivery port

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// A plain-text message addressed to one recipient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// Sender address
    pub sender: String,
    /// Recipient address
    pub recipient: String,
    /// Subject line
    pub subject: String,
    /// Plain-text body
    pub body: String,
}

/// Port for sending email through a transactional mail service
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MailPort: Send + Sync {
    /// Send a message, returning the provider's message id
    async fn send_email(&self, message: &EmailMessage) -> Result<String, ApplicationError>;
}
