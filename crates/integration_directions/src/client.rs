//! Google Directions client
//!
//! Fetches transit-mode directions departing now from the
//! [Directions API](https://developers.google.com/maps/documentation/directions/get-directions).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::config::DirectionsConfig;
use crate::error::DirectionsError;
use crate::models::DirectionsResponse;

/// Trait for directions service clients
#[async_trait]
pub trait DirectionsClient: Send + Sync {
    /// Request transit directions from `origin` to `destination`, departing now
    async fn directions(
        &self,
        origin: &str,
        destination: &str,
        api_key: &str,
    ) -> Result<DirectionsResponse, DirectionsError>;
}

/// Directions client backed by the Google Maps web service
#[derive(Debug)]
pub struct GoogleDirectionsClient {
    client: Client,
    config: DirectionsConfig,
}

impl GoogleDirectionsClient {
    /// Create a new directions client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &DirectionsConfig) -> Result<Self, DirectionsError> {
        config
            .validate()
            .map_err(DirectionsError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("transit-notifier/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DirectionsError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Parse a raw directions body and reject provider-level error statuses
    fn parse_directions_response(body: &str) -> Result<DirectionsResponse, DirectionsError> {
        let response: DirectionsResponse =
            serde_json::from_str(body).map_err(|e| DirectionsError::ParseError(e.to_string()))?;

        if response.is_error_status() {
            return Err(DirectionsError::ProviderStatus {
                status: response.status.clone().unwrap_or_default(),
                message: response.error_message.clone().unwrap_or_default(),
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl DirectionsClient for GoogleDirectionsClient {
    #[instrument(skip(self, api_key))]
    async fn directions(
        &self,
        origin: &str,
        destination: &str,
        api_key: &str,
    ) -> Result<DirectionsResponse, DirectionsError> {
        let url = self.config.endpoint();

        let params = [
            ("origin", origin),
            ("destination", destination),
            ("mode", "transit"),
            ("departure_time", "now"),
            ("key", api_key),
        ];

        debug!(%url, "Requesting transit directions");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DirectionsError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    DirectionsError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DirectionsError::RateLimitExceeded {
                retry_after_secs: response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok()),
            });
        }

        if !status.is_success() {
            return Err(DirectionsError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DirectionsError::ParseError(e.to_string()))?;

        let result = Self::parse_directions_response(&body)?;

        if result.routes.is_empty() {
            warn!(status = ?result.status, "No routes found");
        }

        debug!(count = result.routes.len(), "Routes found");
        Ok(result)
    }
}
