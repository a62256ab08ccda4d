//! Domain entities

mod transit_option;
mod trip_summary;

pub use transit_option::{TransitOption, UNKNOWN_LINE, UNKNOWN_STATION};
pub use trip_summary::{TripSummary, TripSummaryBuilder, UNKNOWN_DURATION};
