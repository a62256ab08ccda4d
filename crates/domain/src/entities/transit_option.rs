//! A single boarding opportunity derived from one transit step

use serde::{Deserialize, Serialize};

/// Line label used when the provider gives neither a short nor a full line name
pub const UNKNOWN_LINE: &str = "Unknown line";

/// Station label used when the provider omits the departure stop name
pub const UNKNOWN_STATION: &str = "Unknown station";

/// One actionable departure suggestion
///
/// `leave_from_time` is the overall trip departure and is identical across
/// all options of a [`TripSummary`](crate::TripSummary).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitOption {
    /// When to leave the origin, local wall-clock time
    pub leave_from_time: String,
    /// Line short name, full name, or [`UNKNOWN_LINE`]
    pub transit_line: String,
    /// Boarding stop name, or [`UNKNOWN_STATION`]
    pub station_name: String,
    /// Scheduled boarding time, local wall-clock time
    pub transit_departure: String,
    /// Scheduled boarding time, Unix epoch seconds
    pub transit_departure_timestamp: i64,
}

impl TransitOption {
    /// Render the option as a single notification sentence
    #[must_use]
    pub fn sentence(&self, trip_duration: &str) -> String {
        format!(
            "You can leave at {} to catch the {} at the {} station, which leaves at {}. \
             Your commute will take {trip_duration}.",
            self.leave_from_time, self.transit_line, self.station_name, self.transit_departure
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option() -> TransitOption {
        TransitOption {
            leave_from_time: "9:05 AM".to_string(),
            transit_line: "512".to_string(),
            station_name: "Main St".to_string(),
            transit_departure: "9:12 AM".to_string(),
            transit_departure_timestamp: 1000,
        }
    }

    #[test]
    fn sentence_follows_template() {
        assert_eq!(
            option().sentence("35 mins"),
            "You can leave at 9:05 AM to catch the 512 at the Main St station, \
             which leaves at 9:12 AM. Your commute will take 35 mins."
        );
    }

    #[test]
    fn serializes_with_snake_case_fields() {
        let json = serde_json::to_value(option()).unwrap();
        assert_eq!(json["leave_from_time"], "9:05 AM");
        assert_eq!(json["transit_departure_timestamp"], 1000);
    }
}
