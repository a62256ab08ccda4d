//! SMTP connection configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// TLS settings for the SMTP connection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TlsConfig {
    /// Whether to verify server certificates
    #[serde(default = "default_true")]
    pub verify_certificates: bool,

    /// Path to a custom CA certificate file (PEM format)
    #[serde(default)]
    pub ca_cert_path: Option<PathBuf>,

    /// Minimum TLS version to accept (default: "1.2")
    #[serde(default = "default_min_tls_version")]
    pub min_tls_version: String,
}

const fn default_true() -> bool {
    true
}

fn default_min_tls_version() -> String {
    "1.2".to_string()
}

impl Default for TlsConfig {
    fn default() -> Self {
        Self {
            verify_certificates: true,
            ca_cert_path: None,
            min_tls_version: default_min_tls_version(),
        }
    }
}

/// SMTP submission settings
#[derive(Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// SMTP server host
    pub smtp_host: String,
    /// SMTP server port (587 = STARTTLS, 465 = implicit TLS)
    pub smtp_port: u16,
    /// SMTP username; authentication is skipped when empty
    pub username: String,
    /// SMTP password
    #[serde(skip_serializing)]
    pub password: String,
    /// Timeout for the whole SMTP session in seconds
    pub timeout_secs: u64,
    /// TLS configuration
    #[serde(default)]
    pub tls: TlsConfig,
}

impl std::fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailConfig")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .field("tls", &self.tls)
            .finish()
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            smtp_host: "email-smtp.us-east-1.amazonaws.com".to_string(),
            smtp_port: 587,
            username: String::new(),
            password: String::new(),
            timeout_secs: 30,
            tls: TlsConfig::default(),
        }
    }
}

impl MailConfig {
    /// Creates a configuration with the given SMTP credentials
    pub fn with_credentials(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    /// Sets the SMTP endpoint
    #[must_use]
    pub fn with_server(mut self, host: impl Into<String>, port: u16) -> Self {
        self.smtp_host = host.into();
        self.smtp_port = port;
        self
    }

    /// Whether `AUTH` should be attempted
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty()
    }

    /// Whether the port expects TLS from the first byte
    #[must_use]
    pub const fn uses_implicit_tls(&self) -> bool {
        self.smtp_port == 465
    }
}
