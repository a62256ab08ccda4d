//! Application services - Use case implementations

mod notification_job;
mod notifier;
mod route_fetcher;

pub use notification_job::{InvocationResult, NotificationJob};
pub use notifier::{DEFAULT_SUBJECT, NO_OPTIONS_MESSAGE, Notifier, NotifierConfig};
pub use route_fetcher::RouteFetcher;
