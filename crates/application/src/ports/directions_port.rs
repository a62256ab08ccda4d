//! Directions service port
//!
//! Adapters in the infrastructure layer implement this port on top of a
//! routing provider and perform the leg-to-summary extraction.

use async_trait::async_trait;
use domain::{RouteQuery, TripSummary};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for fetching the next transit options of a trip
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DirectionsPort: Send + Sync {
    /// Fetch and extract transit options departing now
    ///
    /// `Ok(None)` means the provider answered but offered no usable route
    /// (no routes, no leg, or no overall departure time).
    async fn fetch_trip(&self, query: &RouteQuery) -> Result<Option<TripSummary>, ApplicationError>;
}
