//! Directions service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the directions provider HTTP client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionsConfig {
    /// Base URL of the Maps API host
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://maps.googleapis.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for DirectionsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl DirectionsConfig {
    /// Create a configuration pointing at a custom host (mock servers, proxies)
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Full URL of the JSON directions endpoint
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "{}/maps/api/directions/json",
            self.base_url.trim_end_matches('/')
        )
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DirectionsConfig::default();
        assert_eq!(config.base_url, "https://maps.googleapis.com");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_endpoint() {
        let config = DirectionsConfig::default();
        assert_eq!(
            config.endpoint(),
            "https://maps.googleapis.com/maps/api/directions/json"
        );
    }

    #[test]
    fn test_endpoint_trailing_slash() {
        let config = DirectionsConfig::with_base_url("http://127.0.0.1:8080/");
        assert_eq!(
            config.endpoint(),
            "http://127.0.0.1:8080/maps/api/directions/json"
        );
    }

    #[test]
    fn test_validation_success() {
        assert!(DirectionsConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validation_empty_base_url() {
        let config = DirectionsConfig {
            base_url: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = DirectionsConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: DirectionsConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.base_url, "https://maps.googleapis.com");
    }
}
