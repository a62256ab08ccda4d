//! SMTP mail delivery
//!
//! Sends plain-text notifications through an SMTP submission endpoint such as
//! the SMTP interface of a transactional mail service. Supports STARTTLS
//! (port 587) and implicit TLS (port 465) with `AUTH PLAIN`.

mod config;
mod error;
mod message;
mod smtp_client;

pub use config::{MailConfig, TlsConfig};
pub use error::MailError;
pub use message::OutgoingEmail;
pub use smtp_client::SmtpMailClient;
