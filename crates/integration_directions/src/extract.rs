//! Leg-to-summary extraction
//!
//! Flattens the first route's first leg into the boarding opportunities a
//! commuter can act on.

use domain::{LocalTimezone, TripSummary, UNKNOWN_DURATION, UNKNOWN_LINE, UNKNOWN_STATION};
use tracing::debug;

use crate::models::{DirectionsResponse, Step, TransitDetails, TravelMode};

/// Build a [`TripSummary`] from a directions response
///
/// Returns `None` when there is no route, no leg, or the leg has no overall
/// departure time. A leg without qualifying transit steps yields an empty
/// summary. Transit steps lacking a departure time are skipped.
#[must_use]
pub fn extract_trip_summary(
    response: &DirectionsResponse,
    timezone: LocalTimezone,
) -> Option<TripSummary> {
    let Some(leg) = response.primary_leg() else {
        debug!("Response contains no route leg");
        return None;
    };

    let Some(departure) = leg.departure_time.as_ref().and_then(|t| present(t.value)) else {
        debug!("Leg has no overall departure time");
        return None;
    };
    let leave_from_time = timezone.format_clock_time(departure)?;

    let trip_duration = leg
        .duration
        .as_ref()
        .and_then(|d| d.text.as_deref())
        .unwrap_or(UNKNOWN_DURATION);

    let mut builder = TripSummary::builder(trip_duration, leave_from_time);

    for details in leg.steps.iter().filter_map(transit_details) {
        let Some(timestamp) = details.departure_time.as_ref().and_then(|t| present(t.value))
        else {
            continue;
        };
        let Some(transit_departure) = timezone.format_clock_time(timestamp) else {
            continue;
        };

        builder.push(
            line_label(details),
            station_label(details),
            transit_departure,
            timestamp,
        );
    }

    Some(builder.build())
}

/// Transit details of a `TRANSIT` step
fn transit_details(step: &Step) -> Option<&TransitDetails> {
    if step.travel_mode != Some(TravelMode::Transit) {
        return None;
    }
    step.transit_details.as_ref()
}

/// Non-empty line short name, else full name, else [`UNKNOWN_LINE`]
///
/// Only an empty short name falls through; an empty full name is kept.
fn line_label(details: &TransitDetails) -> &str {
    details
        .line
        .as_ref()
        .and_then(|line| {
            line.short_name
                .as_deref()
                .filter(|s| !s.is_empty())
                .or(line.name.as_deref())
        })
        .unwrap_or(UNKNOWN_LINE)
}

/// Departure stop name as given, else [`UNKNOWN_STATION`]
fn station_label(details: &TransitDetails) -> &str {
    details
        .departure_stop
        .as_ref()
        .and_then(|stop| stop.name.as_deref())
        .unwrap_or(UNKNOWN_STATION)
}

// A zero epoch is the provider's way of saying "no time"
fn present(value: Option<i64>) -> Option<i64> {
    value.filter(|v| *v != 0)
}
