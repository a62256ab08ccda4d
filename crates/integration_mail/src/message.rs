//! Outgoing message model

use crate::error::MailError;

/// A plain-text email with a single recipient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    /// Envelope and header sender
    pub from: String,
    /// Single recipient
    pub to: String,
    /// Subject line
    pub subject: String,
    /// Plain-text body
    pub body: String,
}

impl OutgoingEmail {
    /// Create a new message
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Reject header values that could inject extra SMTP commands or headers
    pub(crate) fn validate(&self) -> Result<(), MailError> {
        for address in [&self.from, &self.to] {
            if address.is_empty() || address.contains(['\r', '\n', '<', '>']) {
                return Err(MailError::InvalidAddress(address.clone()));
            }
        }
        if self.subject.contains(['\r', '\n']) {
            return Err(MailError::SmtpError(
                "Subject must not contain line breaks".to_string(),
            ));
        }
        Ok(())
    }

    /// Body with bare `\n` normalised to `\r\n`
    pub(crate) fn crlf_body(&self) -> String {
        self.body.replace("\r\n", "\n").replace('\n', "\r\n")
    }
}
