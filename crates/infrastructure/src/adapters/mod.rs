//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod directions_adapter;
mod mail_adapter;

pub use directions_adapter::DirectionsAdapter;
pub use mail_adapter::SmtpMailAdapter;
