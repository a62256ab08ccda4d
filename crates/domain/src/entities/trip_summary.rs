//! Trip summary entity
//!
//! A trip summary bundles the overall commute duration with the ordered list
//! of boarding opportunities extracted from one route leg.

use serde::{Deserialize, Serialize};

use super::transit_option::TransitOption;
use crate::errors::DomainError;

/// Duration label used when the provider omits the leg duration
pub const UNKNOWN_DURATION: &str = "Unknown duration";

/// Commute duration plus transit options sorted by boarding time
///
/// Deserialization goes through [`TripSummary::new`], so decoded summaries
/// are sorted and share one leave time like constructed ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TripSummaryRecord")]
pub struct TripSummary {
    trip_duration: String,
    options: Vec<TransitOption>,
}

/// Unchecked wire form of [`TripSummary`]
#[derive(Deserialize)]
struct TripSummaryRecord {
    trip_duration: String,
    options: Vec<TransitOption>,
}

impl TryFrom<TripSummaryRecord> for TripSummary {
    type Error = DomainError;

    fn try_from(record: TripSummaryRecord) -> Result<Self, Self::Error> {
        Self::new(record.trip_duration, record.options)
    }
}

impl TripSummary {
    /// Start a summary whose options all share `leave_from_time`
    pub fn builder(
        trip_duration: impl Into<String>,
        leave_from_time: impl Into<String>,
    ) -> TripSummaryBuilder {
        TripSummaryBuilder {
            trip_duration: trip_duration.into(),
            leave_from_time: leave_from_time.into(),
            options: Vec::new(),
        }
    }

    /// Build a summary from pre-made options
    ///
    /// Options are stably sorted by `transit_departure_timestamp`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ValidationError`] if the options disagree on
    /// `leave_from_time`.
    pub fn new(
        trip_duration: impl Into<String>,
        mut options: Vec<TransitOption>,
    ) -> Result<Self, DomainError> {
        if let Some(first) = options.first() {
            let leave = &first.leave_from_time;
            if let Some(other) = options.iter().find(|o| &o.leave_from_time != leave) {
                return Err(DomainError::ValidationError(format!(
                    "options disagree on leave_from_time: {leave} vs {}",
                    other.leave_from_time
                )));
            }
        }

        options.sort_by_key(|o| o.transit_departure_timestamp);
        Ok(Self {
            trip_duration: trip_duration.into(),
            options,
        })
    }

    /// Human-readable commute duration, e.g. `"35 mins"`
    #[must_use]
    pub fn trip_duration(&self) -> &str {
        &self.trip_duration
    }

    /// Options in ascending boarding-time order
    #[must_use]
    pub fn options(&self) -> &[TransitOption] {
        &self.options
    }

    /// Whether no transit step qualified
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Render one sentence per option, newline separated
    #[must_use]
    pub fn render(&self) -> String {
        self.options
            .iter()
            .map(|o| o.sentence(&self.trip_duration))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Incrementally collects transit options for one leg
#[derive(Debug, Clone)]
pub struct TripSummaryBuilder {
    trip_duration: String,
    leave_from_time: String,
    options: Vec<TransitOption>,
}

impl TripSummaryBuilder {
    /// Add a boarding opportunity
    pub fn push(
        &mut self,
        transit_line: impl Into<String>,
        station_name: impl Into<String>,
        transit_departure: impl Into<String>,
        transit_departure_timestamp: i64,
    ) -> &mut Self {
        self.options.push(TransitOption {
            leave_from_time: self.leave_from_time.clone(),
            transit_line: transit_line.into(),
            station_name: station_name.into(),
            transit_departure: transit_departure.into(),
            transit_departure_timestamp,
        });
        self
    }

    /// Finish the summary, sorting options by boarding time (stable on ties)
    #[must_use]
    pub fn build(self) -> TripSummary {
        let mut options = self.options;
        options.sort_by_key(|o| o.transit_departure_timestamp);
        TripSummary {
            trip_duration: self.trip_duration,
            options,
        }
    }
}
