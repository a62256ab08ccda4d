//! Mail adapter - Implements MailPort using integration_mail

use application::error::ApplicationError;
use application::ports::{EmailMessage, MailPort};
use async_trait::async_trait;
use integration_mail::{MailConfig, MailError, OutgoingEmail, SmtpMailClient};
use tracing::{debug, instrument};

/// Adapter for SMTP submission (e.g. the SMTP interface of Amazon SES)
#[derive(Debug)]
pub struct SmtpMailAdapter {
    client: SmtpMailClient,
}

impl SmtpMailAdapter {
    /// Create a new adapter with the given configuration
    #[must_use]
    pub const fn new(config: MailConfig) -> Self {
        Self {
            client: SmtpMailClient::new(config),
        }
    }

    /// Map MailError to ApplicationError
    fn map_error(e: MailError) -> ApplicationError {
        match e {
            MailError::InvalidAddress(addr) => {
                ApplicationError::Configuration(format!("Invalid mail address: {addr}"))
            },
            other => ApplicationError::ExternalService(format!("Mail delivery failed: {other}")),
        }
    }
}

#[async_trait]
impl MailPort for SmtpMailAdapter {
    #[instrument(skip(self, message), fields(to = %message.recipient))]
    async fn send_email(&self, message: &EmailMessage) -> Result<String, ApplicationError> {
        let email = OutgoingEmail::new(
            &message.sender,
            &message.recipient,
            &message.subject,
            &message.body,
        );

        let message_id = self
            .client
            .send_email(&email)
            .await
            .map_err(Self::map_error)?;

        debug!(%message_id, "Mail accepted by SMTP server");
        Ok(message_id)
    }
}
