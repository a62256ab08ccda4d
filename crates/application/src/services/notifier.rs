//! Notifier service
//!
//! Renders a trip summary into plain-text sentences and hands the text to the
//! mail port exactly once. Delivery failures are logged, never propagated.

use std::sync::Arc;

use domain::TripSummary;
use tracing::{error, info, instrument};

use crate::ports::{EmailMessage, MailPort};

/// Body sent when no transit option could be determined
pub const NO_OPTIONS_MESSAGE: &str = "Could not determine any transit options.";

/// Subject of every notification
pub const DEFAULT_SUBJECT: &str = "Daily Transit Notification";

/// Addressing for notifications
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifierConfig {
    /// Sender address
    pub sender: String,
    /// Recipient address
    pub recipient: String,
    /// Subject line
    pub subject: String,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            sender: "sender@example.com".to_string(),
            recipient: "recipient@example.com".to_string(),
            subject: DEFAULT_SUBJECT.to_string(),
        }
    }
}

/// Renders and sends transit notifications
pub struct Notifier {
    mail: Arc<dyn MailPort>,
    config: NotifierConfig,
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Notifier {
    /// Create a new notifier
    #[must_use]
    pub fn new(mail: Arc<dyn MailPort>, config: NotifierConfig) -> Self {
        Self { mail, config }
    }

    /// Render the notification body
    ///
    /// One sentence per option in order, newline separated; the fixed
    /// fallback message when there is nothing to report.
    #[must_use]
    pub fn render(summary: Option<&TripSummary>) -> String {
        match summary {
            Some(summary) if !summary.is_empty() => summary.render(),
            _ => NO_OPTIONS_MESSAGE.to_string(),
        }
    }

    /// Render the body, send it once, and return it
    #[instrument(skip(self, summary))]
    pub async fn notify(&self, summary: Option<&TripSummary>) -> String {
        let body = Self::render(summary);
        info!(body = %body, "Rendered transit notification");

        let message = EmailMessage {
            sender: self.config.sender.clone(),
            recipient: self.config.recipient.clone(),
            subject: self.config.subject.clone(),
            body: body.clone(),
        };

        match self.mail.send_email(&message).await {
            Ok(message_id) => info!(%message_id, "Email sent"),
            Err(e) => error!(error = %e, "Error sending notification email"),
        }

        body
    }
}
