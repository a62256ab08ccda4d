//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod directions_port;
mod mail_port;

#[cfg(test)]
pub use directions_port::MockDirectionsPort;
pub use directions_port::DirectionsPort;
#[cfg(test)]
pub use mail_port::MockMailPort;
pub use mail_port::{EmailMessage, MailPort};
