//! Route fetcher service
//!
//! Wraps the directions port so that every failure degrades to "no options":
//! callers only ever see `Some(summary)` or `None`.

use std::sync::Arc;

use domain::{RouteQuery, TripSummary};
use tracing::{error, info, instrument, warn};

use crate::ports::DirectionsPort;

/// Fetches the next transit options for a route query
pub struct RouteFetcher {
    directions: Arc<dyn DirectionsPort>,
}

impl std::fmt::Debug for RouteFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteFetcher").finish_non_exhaustive()
    }
}

impl RouteFetcher {
    /// Create a new route fetcher
    #[must_use]
    pub fn new(directions: Arc<dyn DirectionsPort>) -> Self {
        Self { directions }
    }

    /// Fetch a trip summary, logging and swallowing any failure
    #[instrument(skip(self))]
    pub async fn fetch(&self, query: &RouteQuery) -> Option<TripSummary> {
        if !query.is_complete() {
            warn!("Origin or destination is empty; the provider will likely reject the query");
        }

        match self.directions.fetch_trip(query).await {
            Ok(Some(summary)) => {
                info!(
                    options = summary.options().len(),
                    duration = %summary.trip_duration(),
                    "Transit options extracted"
                );
                Some(summary)
            },
            Ok(None) => {
                warn!("Directions response contained no usable route");
                None
            },
            Err(e) => {
                error!(error = %e, "Failed to fetch transit options");
                None
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApplicationError;
    use crate::ports::MockDirectionsPort;

    fn query() -> RouteQuery {
        RouteQuery::new("Union Station", "Yonge & Eglinton", "key")
    }

    fn summary() -> TripSummary {
        let mut builder = TripSummary::builder("35 mins", "9:05 AM");
        builder.push("512", "Main St", "9:12 AM", 1000);
        builder.build()
    }

    #[tokio::test]
    async fn returns_summary_on_success() {
        let mut port = MockDirectionsPort::new();
        port.expect_fetch_trip()
            .times(1)
            .returning(|_| Ok(Some(summary())));

        let fetcher = RouteFetcher::new(Arc::new(port));
        let result = fetcher.fetch(&query()).await.unwrap();
        assert_eq!(result.options().len(), 1);
    }

    #[tokio::test]
    async fn passes_query_through() {
        let mut port = MockDirectionsPort::new();
        port.expect_fetch_trip()
            .withf(|q| q.origin() == "Union Station" && q.api_key() == "key")
            .returning(|_| Ok(None));

        let fetcher = RouteFetcher::new(Arc::new(port));
        assert!(fetcher.fetch(&query()).await.is_none());
    }

    #[tokio::test]
    async fn swallows_port_errors() {
        let mut port = MockDirectionsPort::new();
        port.expect_fetch_trip().returning(|_| {
            Err(ApplicationError::ExternalService(
                "connection refused".to_string(),
            ))
        });

        let fetcher = RouteFetcher::new(Arc::new(port));
        assert!(fetcher.fetch(&query()).await.is_none());
    }

    #[tokio::test]
    async fn incomplete_query_still_fetches() {
        let mut port = MockDirectionsPort::new();
        port.expect_fetch_trip().times(1).returning(|_| Ok(None));

        let fetcher = RouteFetcher::new(Arc::new(port));
        let result = fetcher.fetch(&RouteQuery::new("", "", "")).await;
        assert!(result.is_none());
    }
}
