//! Domain layer for the transit notifier
//!
//! Contains the route query, the derived transit options and the trip summary
//! that ties them together. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
