//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports on top of the directions and mail
//! integrations, and provides configuration loading, logging setup, job
//! wiring and cron scheduling.

pub mod adapters;
pub mod config;
pub mod scheduler;
pub mod telemetry;
pub mod wiring;

pub use adapters::*;
pub use config::{AppConfig, DirectionsAppConfig, LogConfig, MailAppConfig, NotifierAppConfig};
pub use scheduler::{SchedulerError, TaskScheduler, run_on_schedule};
pub use telemetry::{TelemetryError, init_tracing};
pub use wiring::build_notification_job;
