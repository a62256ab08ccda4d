//! Local timezone used to present departure times
//!
//! Departure timestamps arrive as Unix epoch seconds and are shown to the
//! commuter as 12-hour wall-clock times in a single fixed zone.
//!
//! # Examples
//!
//! ```
//! use domain::LocalTimezone;
//!
//! let tz = LocalTimezone::default();
//! assert_eq!(tz.name(), "America/Toronto");
//! // 2024-07-01 13:05:00 UTC is 9:05 AM in Toronto (EDT)
//! assert_eq!(tz.format_clock_time(1_719_839_100).as_deref(), Some("9:05 AM"));
//! ```

use std::fmt;

use chrono::DateTime;
use chrono_tz::Tz;

use crate::errors::DomainError;

/// Clock format: 12-hour, no leading zero on the hour, AM/PM suffix
const CLOCK_FORMAT: &str = "%-I:%M %p";

/// A validated IANA timezone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalTimezone(Tz);

impl LocalTimezone {
    /// Default zone for commute notifications
    pub const TORONTO: Self = Self(chrono_tz::America::Toronto);

    /// Wrap an already-resolved timezone
    #[must_use]
    pub const fn new(tz: Tz) -> Self {
        Self(tz)
    }

    /// Parse an IANA timezone name such as `America/Toronto`
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidTimezone`] if the name is not in the tz database.
    pub fn parse(name: &str) -> Result<Self, DomainError> {
        name.trim()
            .parse::<Tz>()
            .map(Self)
            .map_err(|_| DomainError::InvalidTimezone(name.to_string()))
    }

    /// IANA name of the zone
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Format epoch seconds as local wall-clock time, e.g. `"9:05 AM"`
    ///
    /// Returns `None` when the timestamp is outside chrono's representable range.
    #[must_use]
    pub fn format_clock_time(&self, epoch_secs: i64) -> Option<String> {
        let utc = DateTime::from_timestamp(epoch_secs, 0)?;
        Some(utc.with_timezone(&self.0).format(CLOCK_FORMAT).to_string())
    }
}

impl Default for LocalTimezone {
    fn default() -> Self {
        Self::TORONTO
    }
}

impl fmt::Display for LocalTimezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for LocalTimezone {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
