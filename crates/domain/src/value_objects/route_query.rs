//! Route query value object

use std::fmt;

/// Origin/destination pair plus the credential used to query the directions provider
///
/// Built once per invocation from configuration. The API key is redacted
/// from `Debug` output so the query can be logged safely.
#[derive(Clone, PartialEq, Eq)]
pub struct RouteQuery {
    origin: String,
    destination: String,
    api_key: String,
}

impl RouteQuery {
    /// Create a new route query
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            api_key: api_key.into(),
        }
    }

    /// Free-form origin (address, place name or `lat,lng`)
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Free-form destination
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Provider API key
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Whether both endpoints are non-blank
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.origin.trim().is_empty() && !self.destination.trim().is_empty()
    }
}

impl fmt::Debug for RouteQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteQuery")
            .field("origin", &self.origin)
            .field("destination", &self.destination)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let query = RouteQuery::new("Union Station", "Yonge & Eglinton", "key-123");
        assert_eq!(query.origin(), "Union Station");
        assert_eq!(query.destination(), "Yonge & Eglinton");
        assert_eq!(query.api_key(), "key-123");
    }

    #[test]
    fn debug_redacts_api_key() {
        let query = RouteQuery::new("A", "B", "super-secret");
        let debug = format!("{query:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
        assert!(debug.contains("origin"));
    }

    #[test]
    fn completeness() {
        assert!(RouteQuery::new("A", "B", "").is_complete());
        assert!(!RouteQuery::new("", "B", "k").is_complete());
        assert!(!RouteQuery::new("A", "   ", "k").is_complete());
    }
}
