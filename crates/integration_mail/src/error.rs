//! Mail delivery errors

use thiserror::Error;

/// Errors that can occur while delivering mail
#[derive(Debug, Error)]
pub enum MailError {
    /// TCP or TLS connection could not be established
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Server rejected the credentials
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// Unexpected SMTP reply or I/O failure mid-session
    #[error("SMTP error: {0}")]
    SmtpError(String),

    /// Address contains characters that would break the SMTP envelope
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Whole session exceeded the configured timeout
    #[error("SMTP session timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}
