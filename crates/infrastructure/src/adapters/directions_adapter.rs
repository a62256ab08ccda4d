//! Directions adapter - Implements DirectionsPort using integration_directions

use application::error::ApplicationError;
use application::ports::DirectionsPort;
use async_trait::async_trait;
use domain::{LocalTimezone, RouteQuery, TripSummary};
use integration_directions::{
    DirectionsClient, DirectionsConfig, DirectionsError, GoogleDirectionsClient,
    extract_trip_summary,
};
use tracing::{debug, instrument};

/// Adapter for the Google Directions web service
#[derive(Debug)]
pub struct DirectionsAdapter {
    client: GoogleDirectionsClient,
    timezone: LocalTimezone,
}

impl DirectionsAdapter {
    /// Create a new directions adapter
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(
        config: &DirectionsConfig,
        timezone: LocalTimezone,
    ) -> Result<Self, ApplicationError> {
        let client = GoogleDirectionsClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client, timezone })
    }

    /// Map DirectionsError to ApplicationError
    fn map_error(e: DirectionsError) -> ApplicationError {
        match e {
            DirectionsError::ConfigurationError(msg) => ApplicationError::Configuration(msg),
            other => {
                ApplicationError::ExternalService(format!("Directions request failed: {other}"))
            },
        }
    }
}

#[async_trait]
impl DirectionsPort for DirectionsAdapter {
    #[instrument(skip(self))]
    async fn fetch_trip(
        &self,
        query: &RouteQuery,
    ) -> Result<Option<TripSummary>, ApplicationError> {
        let response = self
            .client
            .directions(query.origin(), query.destination(), query.api_key())
            .await
            .map_err(Self::map_error)?;

        let summary = extract_trip_summary(&response, self.timezone);
        debug!(
            found = summary.is_some(),
            timezone = %self.timezone,
            "Extracted trip summary"
        );
        Ok(summary)
    }
}
