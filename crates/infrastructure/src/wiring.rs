//! Assembles the notification job from configuration

use std::sync::Arc;

use application::{ApplicationError, NotificationJob, Notifier, RouteFetcher};
use tracing::info;

use crate::adapters::{DirectionsAdapter, SmtpMailAdapter};
use crate::config::AppConfig;

/// Build a ready-to-run job with the Google Directions and SMTP adapters
///
/// # Errors
///
/// Returns an error if the configuration is invalid or an HTTP client cannot
/// be created.
pub fn build_notification_job(config: &AppConfig) -> Result<NotificationJob, ApplicationError> {
    config.validate()?;
    let timezone = config.timezone()?;

    let directions = DirectionsAdapter::new(&config.directions.client_config(), timezone)?;
    let mail = SmtpMailAdapter::new(config.mail.client_config());

    info!(
        timezone = %timezone,
        smtp_host = %config.mail.smtp_host,
        smtp_port = config.mail.smtp_port,
        "Notification job configured"
    );

    Ok(NotificationJob::new(
        RouteFetcher::new(Arc::new(directions)),
        Notifier::new(Arc::new(mail), config.notifier_config()),
        config.directions.route_query(),
    ))
}
