//! Transit directions integration for the transit notifier
//!
//! Queries the [Google Directions API](https://developers.google.com/maps/documentation/directions)
//! in transit mode and turns the first route's first leg into a
//! [`TripSummary`](domain::TripSummary) of boarding opportunities.
//!
//! # Architecture
//!
//! [`DirectionsClient`] defines the interface for fetching a route, implemented
//! by [`GoogleDirectionsClient`]. Wire types live in [`models`]; the
//! leg-to-summary conversion is [`extract_trip_summary`].
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::LocalTimezone;
//! use integration_directions::{
//!     DirectionsClient, DirectionsConfig, GoogleDirectionsClient, extract_trip_summary,
//! };
//!
//! let client = GoogleDirectionsClient::new(&DirectionsConfig::default())?;
//! let response = client.directions("Union Station, Toronto", "Yonge & Eglinton", "api-key").await?;
//! let summary = extract_trip_summary(&response, LocalTimezone::default());
//! ```

mod client;
mod config;
mod error;
mod extract;
pub mod models;

pub use client::{DirectionsClient, GoogleDirectionsClient};
pub use config::DirectionsConfig;
pub use error::DirectionsError;
pub use extract::extract_trip_summary;
pub use models::{DirectionsResponse, TravelMode};
