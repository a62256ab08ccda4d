//! Application layer - Use cases and orchestration
//!
//! Defines the ports to the directions provider and the mail service, and the
//! services that fetch transit options, render them and deliver the result.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
