//! Application configuration
//!
//! Layered, lowest precedence first: built-in defaults, an optional TOML file,
//! `TRANSIT_NOTIFIER__SECTION__KEY` environment variables, and finally the
//! plain deployment variable names (`GOOGLE_API_KEY`,
//! `ORIGIN`, `DESTINATION`, `SES_SENDER`, `SES_RECIPIENT`, `SMTP_USERNAME`,
//! `SMTP_PASSWORD`).

use std::collections::HashMap;
use std::path::Path;

use application::{ApplicationError, NotifierConfig, services::DEFAULT_SUBJECT};
use domain::{LocalTimezone, RouteQuery};
use integration_directions::DirectionsConfig;
use integration_mail::{MailConfig, TlsConfig};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "transit-notifier";

/// Prefix of structured environment overrides
pub const ENV_PREFIX: &str = "TRANSIT_NOTIFIER";

/// Plain environment variables mapped onto config keys
const LEGACY_ENV_VARS: &[(&str, &str)] = &[
    ("GOOGLE_API_KEY", "directions.api_key"),
    ("ORIGIN", "directions.origin"),
    ("DESTINATION", "directions.destination"),
    ("SES_SENDER", "mail.sender"),
    ("SES_RECIPIENT", "mail.recipient"),
    ("SMTP_USERNAME", "mail.username"),
    ("SMTP_PASSWORD", "mail.password"),
];

fn empty_secret() -> SecretString {
    SecretString::from(String::new())
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directions provider and route
    #[serde(default)]
    pub directions: DirectionsAppConfig,

    /// Mail delivery
    #[serde(default)]
    pub mail: MailAppConfig,

    /// Notification content and schedule
    #[serde(default)]
    pub notifier: NotifierAppConfig,

    /// Logging
    #[serde(default)]
    pub log: LogConfig,
}

/// Directions provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionsAppConfig {
    /// Base URL of the Maps API host
    #[serde(default = "default_directions_base_url")]
    pub base_url: String,

    /// Provider API key (sensitive)
    #[serde(default = "empty_secret", skip_serializing)]
    pub api_key: SecretString,

    /// Trip origin
    #[serde(default)]
    pub origin: String,

    /// Trip destination
    #[serde(default)]
    pub destination: String,

    /// Request timeout in seconds
    #[serde(default = "default_directions_timeout")]
    pub timeout_secs: u64,
}

fn default_directions_base_url() -> String {
    DirectionsConfig::default().base_url
}

fn default_directions_timeout() -> u64 {
    DirectionsConfig::default().timeout_secs
}

impl Default for DirectionsAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_directions_base_url(),
            api_key: empty_secret(),
            origin: String::new(),
            destination: String::new(),
            timeout_secs: default_directions_timeout(),
        }
    }
}

impl DirectionsAppConfig {
    /// HTTP client settings for the directions integration
    #[must_use]
    pub fn client_config(&self) -> DirectionsConfig {
        DirectionsConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }

    /// Route query for one invocation
    #[must_use]
    pub fn route_query(&self) -> RouteQuery {
        RouteQuery::new(
            self.origin.clone(),
            self.destination.clone(),
            self.api_key.expose_secret(),
        )
    }
}

/// Mail delivery configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailAppConfig {
    /// SMTP host
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,

    /// SMTP port (587 = STARTTLS, 465 = implicit TLS)
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    /// SMTP username; empty disables AUTH
    #[serde(default)]
    pub username: String,

    /// SMTP password (sensitive)
    #[serde(default = "empty_secret", skip_serializing)]
    pub password: SecretString,

    /// Sender address
    #[serde(default = "default_sender")]
    pub sender: String,

    /// Recipient address
    #[serde(default = "default_recipient")]
    pub recipient: String,

    /// SMTP session timeout in seconds
    #[serde(default = "default_mail_timeout")]
    pub timeout_secs: u64,

    /// TLS configuration
    #[serde(default)]
    pub tls: TlsConfig,
}

fn default_smtp_host() -> String {
    MailConfig::default().smtp_host
}

fn default_smtp_port() -> u16 {
    MailConfig::default().smtp_port
}

fn default_mail_timeout() -> u64 {
    MailConfig::default().timeout_secs
}

fn default_sender() -> String {
    NotifierConfig::default().sender
}

fn default_recipient() -> String {
    NotifierConfig::default().recipient
}

impl Default for MailAppConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            username: String::new(),
            password: empty_secret(),
            sender: default_sender(),
            recipient: default_recipient(),
            timeout_secs: default_mail_timeout(),
            tls: TlsConfig::default(),
        }
    }
}

impl MailAppConfig {
    /// SMTP client settings for the mail integration
    #[must_use]
    pub fn client_config(&self) -> MailConfig {
        MailConfig {
            smtp_host: self.smtp_host.clone(),
            smtp_port: self.smtp_port,
            username: self.username.clone(),
            password: self.password.expose_secret().to_string(),
            timeout_secs: self.timeout_secs,
            tls: self.tls.clone(),
        }
    }
}

/// Notification content and schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifierAppConfig {
    /// IANA timezone used to format departure times
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Mail subject
    #[serde(default = "default_subject")]
    pub subject: String,

    /// Cron expression (with seconds field, evaluated in UTC) for `schedule` mode
    #[serde(default = "default_schedule")]
    pub schedule: String,
}

fn default_timezone() -> String {
    LocalTimezone::default().name().to_string()
}

fn default_subject() -> String {
    DEFAULT_SUBJECT.to_string()
}

fn default_schedule() -> String {
    // 11:00 UTC is 7:00 in Toronto during daylight saving time
    "0 0 11 * * Mon-Fri".to_string()
}

impl Default for NotifierAppConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            subject: default_subject(),
            schedule: default_schedule(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub filter: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment and an optional file
    ///
    /// With `path = None`, `transit-notifier.toml` in the working directory is
    /// used if present.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_with_env(path, std::env::vars().collect())
    }

    /// Load configuration against an explicit set of environment variables
    pub fn load_with_env(
        path: Option<&Path>,
        env: HashMap<String, String>,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        builder = match path {
            Some(path) => builder.add_source(config::File::from(path).required(true)),
            None => builder.add_source(config::File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        // e.g. TRANSIT_NOTIFIER__MAIL__SMTP_PORT=465
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .source(Some(env.clone())),
        );

        for (var, key) in LEGACY_ENV_VARS {
            builder = builder.set_override_option(*key, env.get(*var).cloned())?;
        }

        builder.build()?.try_deserialize()
    }

    /// Resolved display timezone
    pub fn timezone(&self) -> Result<LocalTimezone, ApplicationError> {
        Ok(LocalTimezone::parse(&self.notifier.timezone)?)
    }

    /// Addressing for the notifier service
    #[must_use]
    pub fn notifier_config(&self) -> NotifierConfig {
        NotifierConfig {
            sender: self.mail.sender.clone(),
            recipient: self.mail.recipient.clone(),
            subject: self.notifier.subject.clone(),
        }
    }

    /// Validate the configuration
    ///
    /// Missing route data only produces warnings: the job still runs and
    /// sends the fallback message.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        self.timezone()?;

        self.directions
            .client_config()
            .validate()
            .map_err(ApplicationError::Configuration)?;

        if self.mail.smtp_port == 0 {
            return Err(ApplicationError::Configuration(
                "mail.smtp_port must be greater than 0".to_string(),
            ));
        }

        if self.mail.timeout_secs == 0 {
            return Err(ApplicationError::Configuration(
                "mail.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.directions.api_key.expose_secret().is_empty() {
            warn!("directions.api_key is empty");
        }
        if self.directions.origin.is_empty() || self.directions.destination.is_empty() {
            warn!("directions.origin or directions.destination is empty");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.directions.base_url, "https://maps.googleapis.com");
        assert!(config.directions.api_key.expose_secret().is_empty());
        assert!(config.directions.origin.is_empty());
        assert_eq!(config.mail.sender, "sender@example.com");
        assert_eq!(config.mail.recipient, "recipient@example.com");
        assert_eq!(config.mail.smtp_port, 587);
        assert_eq!(config.notifier.timezone, "America/Toronto");
        assert_eq!(config.notifier.subject, "Daily Transit Notification");
        assert_eq!(config.log.filter, "info");
    }

    #[test]
    fn test_load_without_sources_uses_defaults() {
        let config = AppConfig::load_with_env(None, HashMap::new()).unwrap();
        assert_eq!(config.mail.sender, "sender@example.com");
        assert_eq!(config.notifier.schedule, "0 0 11 * * Mon-Fri");
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(AppConfig::load_with_env(Some(&missing), HashMap::new()).is_err());
    }

    #[test]
    fn test_legacy_env_vars() {
        let config = AppConfig::load_with_env(
            None,
            env(&[
                ("GOOGLE_API_KEY", "abc123"),
                ("ORIGIN", "Union Station, Toronto"),
                ("DESTINATION", "Yonge & Eglinton"),
                ("SES_SENDER", "bot@example.org"),
                ("SES_RECIPIENT", "me@example.org"),
            ]),
        )
        .unwrap();

        let query = config.directions.route_query();
        assert_eq!(query.api_key(), "abc123");
        assert_eq!(query.origin(), "Union Station, Toronto");
        assert_eq!(query.destination(), "Yonge & Eglinton");
        assert_eq!(config.mail.sender, "bot@example.org");
        assert_eq!(config.mail.recipient, "me@example.org");
    }

    #[test]
    fn test_prefixed_env_vars() {
        let config = AppConfig::load_with_env(
            None,
            env(&[
                ("TRANSIT_NOTIFIER__MAIL__SMTP_HOST", "smtp.example.org"),
                ("TRANSIT_NOTIFIER__NOTIFIER__TIMEZONE", "Europe/Berlin"),
            ]),
        )
        .unwrap();

        assert_eq!(config.mail.smtp_host, "smtp.example.org");
        assert_eq!(config.notifier.timezone, "Europe/Berlin");
    }

    #[test]
    fn test_file_then_legacy_override() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[directions]
origin = "From File"
destination = "Also From File"
timeout_secs = 3

[mail]
smtp_port = 465
recipient = "file@example.org"
"#
        )
        .unwrap();

        let config =
            AppConfig::load_with_env(Some(file.path()), env(&[("ORIGIN", "From Env")])).unwrap();

        assert_eq!(config.directions.origin, "From Env");
        assert_eq!(config.directions.destination, "Also From File");
        assert_eq!(config.directions.timeout_secs, 3);
        assert_eq!(config.mail.smtp_port, 465);
        assert_eq!(config.mail.recipient, "file@example.org");
        assert_eq!(config.mail.sender, "sender@example.com");
    }

    #[test]
    fn test_validate_defaults() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_timezone() {
        let mut config = AppConfig::default();
        config.notifier.timezone = "Mars/Olympus_Mons".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_port() {
        let mut config = AppConfig::default();
        config.mail.smtp_port = 0;
        assert!(matches!(
            config.validate(),
            Err(ApplicationError::Configuration(_))
        ));
    }

    #[test]
    fn test_mail_client_config_exposes_password() {
        let mut config = AppConfig::default();
        config.mail.password = SecretString::from("pw".to_string());
        assert_eq!(config.mail.client_config().password, "pw");
    }

    #[test]
    fn test_debug_hides_secrets() {
        let mut config = AppConfig::default();
        config.directions.api_key = SecretString::from("very-secret-key".to_string());
        let debug = format!("{config:?}");
        assert!(!debug.contains("very-secret-key"));
    }

    #[test]
    fn test_notifier_config() {
        let config = AppConfig::default();
        let notifier = config.notifier_config();
        assert_eq!(notifier.subject, "Daily Transit Notification");
        assert_eq!(notifier.recipient, "recipient@example.com");
    }
}
