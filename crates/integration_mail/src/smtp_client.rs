//! SMTP client implementation
//!
//! Lightweight async SMTP submission using tokio and tokio-native-tls.

use std::{fs, time::Duration};

use base64::Engine;
use native_tls::Certificate;
use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader},
    net::TcpStream,
};
use tokio_native_tls::TlsConnector;
use tracing::{debug, error, instrument, trace, warn};

use crate::{MailConfig, MailError, OutgoingEmail, TlsConfig};

/// SMTP submission client
///
/// Opens one connection per message. Supports STARTTLS and implicit TLS,
/// with optional PLAIN authentication.
#[derive(Debug, Clone)]
pub struct SmtpMailClient {
    config: MailConfig,
}

impl SmtpMailClient {
    /// Creates a new SMTP client with the given configuration
    pub const fn new(config: MailConfig) -> Self {
        Self { config }
    }

    /// Builds a TLS connector based on the TLS configuration
    fn build_tls_connector(tls_config: &TlsConfig) -> Result<TlsConnector, MailError> {
        let mut builder = native_tls::TlsConnector::builder();

        if !tls_config.verify_certificates {
            warn!("TLS certificate verification disabled for SMTP");
            builder.danger_accept_invalid_certs(true);
        } else if let Some(ca_cert_path) = &tls_config.ca_cert_path {
            debug!(path = %ca_cert_path.display(), "Loading custom CA certificate");
            let cert_data = fs::read(ca_cert_path).map_err(|e| {
                MailError::ConnectionFailed(format!(
                    "Failed to read CA certificate at {}: {e}",
                    ca_cert_path.display()
                ))
            })?;
            let cert = Certificate::from_pem(&cert_data).map_err(|e| {
                MailError::ConnectionFailed(format!("Failed to parse CA certificate: {e}"))
            })?;
            builder.add_root_certificate(cert);
        }

        let min_protocol = match tls_config.min_tls_version.as_str() {
            "1.0" => native_tls::Protocol::Tlsv10,
            "1.1" => native_tls::Protocol::Tlsv11,
            _ => native_tls::Protocol::Tlsv12,
        };
        builder.min_protocol_version(Some(min_protocol));

        let native_connector = builder
            .build()
            .map_err(|e| MailError::ConnectionFailed(format!("TLS builder failed: {e}")))?;

        Ok(TlsConnector::from(native_connector))
    }

    /// Sends an email and returns the generated Message-ID
    #[instrument(skip(self, email), fields(to = %email.to, subject = %email.subject))]
    pub async fn send_email(&self, email: &OutgoingEmail) -> Result<String, MailError> {
        email.validate()?;

        let message_id = format!(
            "<{}.{}@{}>",
            chrono::Utc::now().timestamp_millis(),
            uuid::Uuid::new_v4(),
            Self::extract_domain(&email.from)
        );

        let content = Self::build_email_content(email, &message_id);

        let timeout_secs = self.config.timeout_secs;
        tokio::time::timeout(
            Duration::from_secs(timeout_secs),
            self.send_smtp(email, &content),
        )
        .await
        .map_err(|_| MailError::Timeout { timeout_secs })??;

        debug!(message_id = %message_id, "Email sent successfully");
        Ok(message_id)
    }

    /// Builds the email content in RFC 5322 format
    fn build_email_content(email: &OutgoingEmail, message_id: &str) -> String {
        let date = chrono::Utc::now().format("%a, %d %b %Y %H:%M:%S +0000");

        let headers = format!(
            "From: {}\r\n\
             To: {}\r\n\
             Subject: {}\r\n\
             Date: {}\r\n\
             Message-ID: {}\r\n\
             MIME-Version: 1.0\r\n\
             Content-Type: text/plain; charset=utf-8\r\n\
             Content-Transfer-Encoding: 8bit\r\n",
            email.from, email.to, email.subject, date, message_id
        );

        format!("{headers}\r\n{}", email.crlf_body())
    }

    /// Connects and runs the SMTP dialogue
    async fn send_smtp(&self, email: &OutgoingEmail, content: &str) -> Result<(), MailError> {
        let addr = format!("{}:{}", self.config.smtp_host, self.config.smtp_port);

        let stream = TcpStream::connect(&addr).await.map_err(|e| {
            error!(error = %e, "Failed to connect to SMTP server");
            MailError::ConnectionFailed(format!("SMTP connection failed: {e}"))
        })?;

        let tls = Self::build_tls_connector(&self.config.tls)?;

        if self.config.uses_implicit_tls() {
            let tls_stream = tls
                .connect(&self.config.smtp_host, stream)
                .await
                .map_err(|e| MailError::ConnectionFailed(format!("TLS handshake failed: {e}")))?;

            self.smtp_session(tls_stream, email, content, true).await
        } else {
            self.smtp_starttls_session(stream, tls, email, content)
                .await
        }
    }

    /// Plain-text greeting and EHLO, then upgrade with STARTTLS
    async fn smtp_starttls_session<S>(
        &self,
        stream: S,
        tls: TlsConnector,
        email: &OutgoingEmail,
        content: &str,
    ) -> Result<(), MailError>
    where
        S: tokio::io::AsyncRead + tokio::io::AsyncWrite + Unpin,
    {
        let (reader, mut writer) = tokio::io::split(stream);
        let mut reader = BufReader::new(reader);

        Self::expect_response(&mut reader, "220").await?;

        Self::send_command(&mut writer, &format!("EHLO {}", Self::local_hostname())).await?;
        Self::expect_response(&mut reader, "250").await?;

        Self::send_command(&mut writer, "STARTTLS").await?;
        Self::expect_response(&mut reader, "220").await?;

        let stream = reader.into_inner().unsplit(writer);
        let tls_stream = tls
            .connect(&self.config.smtp_host, stream)
            .await
            .map_err(|e| MailError::ConnectionFailed(format!("STARTTLS upgrade failed: {e}")))?;

        // No new greeting after STARTTLS; the session restarts at EHLO
        self.smtp_session(tls_stream, email, content, false).await
    }

    /// Runs the mail transaction over an established (TLS) stream
    async fn smtp_session<S>(
        &self,
        stream: S,
        email: &OutgoingEmail,
        content: &str,
        read_greeting: bool,
    ) -> Result<(), MailError>
    where
        S: tokio::io::AsyncRead + tokio::io::AsyncWrite + Unpin,
    {
        let (reader, mut writer) = tokio::io::split(stream);
        let mut reader = BufReader::new(reader);

        if read_greeting {
            Self::expect_response(&mut reader, "220").await?;
        }

        Self::send_command(&mut writer, &format!("EHLO {}", Self::local_hostname())).await?;
        Self::expect_response(&mut reader, "250").await?;

        if self.config.has_credentials() {
            let auth_string = format!("\0{}\0{}", self.config.username, self.config.password);
            let auth_b64 = base64::engine::general_purpose::STANDARD.encode(auth_string);

            Self::send_command(&mut writer, &format!("AUTH PLAIN {auth_b64}")).await?;
            let auth_response = Self::read_response(&mut reader).await?;
            if !auth_response.starts_with("235") {
                return Err(MailError::AuthenticationFailed);
            }
        }

        Self::send_command(&mut writer, &format!("MAIL FROM:<{}>", email.from)).await?;
        Self::expect_response(&mut reader, "250").await?;

        // 250 and 251 (forwarded) both accept the recipient
        Self::send_command(&mut writer, &format!("RCPT TO:<{}>", email.to)).await?;
        Self::expect_response(&mut reader, "25").await?;

        Self::send_command(&mut writer, "DATA").await?;
        Self::expect_response(&mut reader, "354").await?;

        // Dot-stuff lines starting with '.'
        let mut escaped_content = content.replace("\r\n.", "\r\n..");
        if escaped_content.starts_with('.') {
            escaped_content.insert(0, '.');
        }
        writer
            .write_all(escaped_content.as_bytes())
            .await
            .map_err(|e| MailError::SmtpError(format!("Failed to send content: {e}")))?;

        writer
            .write_all(b"\r\n.\r\n")
            .await
            .map_err(|e| MailError::SmtpError(format!("Failed to end DATA: {e}")))?;
        writer.flush().await.ok();

        Self::expect_response(&mut reader, "250").await?;

        Self::send_command(&mut writer, "QUIT").await?;
        // Don't wait for QUIT response, server may close connection

        Ok(())
    }

    /// Sends an SMTP command
    async fn send_command<W>(writer: &mut W, command: &str) -> Result<(), MailError>
    where
        W: tokio::io::AsyncWrite + Unpin,
    {
        trace!(command = %command.split(' ').next().unwrap_or(command), "Sending SMTP command");
        writer
            .write_all(format!("{command}\r\n").as_bytes())
            .await
            .map_err(|e| MailError::SmtpError(format!("Failed to send command: {e}")))?;
        writer.flush().await.ok();
        Ok(())
    }

    /// Reads a (possibly multi-line) SMTP response
    async fn read_response<R>(reader: &mut BufReader<R>) -> Result<String, MailError>
    where
        R: tokio::io::AsyncRead + Unpin,
    {
        let mut response = String::new();
        loop {
            let mut line = String::new();
            let read = reader
                .read_line(&mut line)
                .await
                .map_err(|e| MailError::SmtpError(format!("Failed to read response: {e}")))?;
            if read == 0 {
                return Err(MailError::SmtpError(
                    "Connection closed by server".to_string(),
                ));
            }

            trace!(line = %line.trim(), "SMTP response");
            response.push_str(&line);

            // Last line has a space (not a hyphen) after the code
            if line.len() >= 4 && line.as_bytes()[3] != b'-' {
                break;
            }
        }
        Ok(response)
    }

    /// Expects a specific response code
    async fn expect_response<R>(
        reader: &mut BufReader<R>,
        expected_code: &str,
    ) -> Result<(), MailError>
    where
        R: tokio::io::AsyncRead + Unpin,
    {
        let response = Self::read_response(reader).await?;
        if !response.starts_with(expected_code) {
            return Err(MailError::SmtpError(format!(
                "Expected {expected_code}, got: {}",
                response.trim_end()
            )));
        }
        Ok(())
    }

    fn local_hostname() -> String {
        hostname::get().map_or_else(
            |_| "localhost".to_string(),
            |h| h.to_string_lossy().to_string(),
        )
    }

    /// Extracts domain from an email address
    fn extract_domain(email: &str) -> &str {
        email
            .split_once('@')
            .map(|(_, domain)| domain)
            .filter(|d| !d.is_empty())
            .unwrap_or("transit-notifier.local")
    }
}
