//! Directions API wire models
//!
//! Typed view of the subset of the Google Directions JSON response this crate
//! reads. Every field is optional or defaulted so that partial responses still
//! deserialize; missing data is handled during extraction.

use serde::Deserialize;

/// Top-level directions response
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct DirectionsResponse {
    /// Provider status, e.g. `OK`, `ZERO_RESULTS`, `REQUEST_DENIED`
    #[serde(default)]
    pub status: Option<String>,
    /// Human-readable error detail accompanying a non-OK status
    #[serde(default)]
    pub error_message: Option<String>,
    /// Candidate routes, best first
    #[serde(default)]
    pub routes: Vec<Route>,
}

impl DirectionsResponse {
    /// Whether the provider status signals a request-level failure
    ///
    /// `OK` and `ZERO_RESULTS` are normal answers; a missing status is tolerated.
    #[must_use]
    pub fn is_error_status(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| s != "OK" && s != "ZERO_RESULTS")
    }

    /// First leg of the first route, if any
    #[must_use]
    pub fn primary_leg(&self) -> Option<&Leg> {
        self.routes.first()?.legs.first()
    }
}

/// One route between origin and destination
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Route {
    /// Legs of the route (a single leg without waypoints)
    #[serde(default)]
    pub legs: Vec<Leg>,
}

/// Origin-to-destination travel within a route
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Leg {
    /// When the traveller must leave the origin
    #[serde(default)]
    pub departure_time: Option<TimeValue>,
    /// Total leg duration
    #[serde(default)]
    pub duration: Option<TextValue>,
    /// Sub-segments in travel order
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// A sub-segment of a leg
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Step {
    /// Travel mode of this step
    #[serde(default)]
    pub travel_mode: Option<TravelMode>,
    /// Transit specifics, present on `TRANSIT` steps
    #[serde(default)]
    pub transit_details: Option<TransitDetails>,
}

/// Travel mode of a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelMode {
    /// Public transit
    Transit,
    /// Walking
    Walking,
    /// Driving
    Driving,
    /// Bicycling
    Bicycling,
    /// Any mode not listed above
    #[serde(other)]
    Other,
}

/// Transit-specific details of a step
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct TransitDetails {
    /// Scheduled boarding time
    #[serde(default)]
    pub departure_time: Option<TimeValue>,
    /// Boarding stop
    #[serde(default)]
    pub departure_stop: Option<TransitStop>,
    /// Line operated on this step
    #[serde(default)]
    pub line: Option<TransitLine>,
}

/// Transit stop
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct TransitStop {
    /// Stop name
    #[serde(default)]
    pub name: Option<String>,
}

/// Transit line
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct TransitLine {
    /// Short label such as `"512"`
    #[serde(default)]
    pub short_name: Option<String>,
    /// Full name such as `"St Clair"`
    #[serde(default)]
    pub name: Option<String>,
}

/// Timestamp; the provider's display text is ignored in favour of the epoch
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct TimeValue {
    /// Unix epoch seconds
    #[serde(default)]
    pub value: Option<i64>,
}

/// Quantity with display text (durations)
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct TextValue {
    /// Human-readable value, e.g. `"35 mins"`
    #[serde(default)]
    pub text: Option<String>,
}
