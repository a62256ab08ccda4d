//! Cron-based scheduling of the notification job
//!
//! Uses `tokio-cron-scheduler`. Expressions have six fields
//! (sec min hour day month weekday) and are evaluated in UTC.

use std::{future::Future, sync::Arc};

use application::NotificationJob;
use thiserror::Error;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};
use tracing::{debug, info, instrument};

/// Scheduler errors
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// Invalid cron expression
    #[error("Invalid cron expression: {0}")]
    InvalidCronExpression(String),

    /// Internal scheduler error
    #[error("Internal scheduler error: {0}")]
    Internal(String),
}

impl From<JobSchedulerError> for SchedulerError {
    fn from(err: JobSchedulerError) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Thin wrapper over [`JobScheduler`] for recurring async tasks
pub struct TaskScheduler {
    scheduler: JobScheduler,
}

impl std::fmt::Debug for TaskScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskScheduler").finish_non_exhaustive()
    }
}

impl TaskScheduler {
    /// Create a stopped scheduler
    pub async fn new() -> Result<Self, SchedulerError> {
        let scheduler = JobScheduler::new().await?;
        Ok(Self { scheduler })
    }

    /// Add a task that runs on every match of `cron_expression`
    #[instrument(skip(self, task))]
    pub async fn add_task<F, Fut>(
        &self,
        name: &str,
        cron_expression: &str,
        task: F,
    ) -> Result<(), SchedulerError>
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let task_name = name.to_string();
        let job = Job::new_async(cron_expression, move |_uuid, _lock| {
            let name = task_name.clone();
            let task_future = task();
            Box::pin(async move {
                debug!(task = %name, "Starting scheduled task");
                task_future.await;
            })
        })
        .map_err(|e| SchedulerError::InvalidCronExpression(format!("{cron_expression}: {e}")))?;

        self.scheduler.add(job).await?;
        info!(task = %name, cron = %cron_expression, "Task scheduled");
        Ok(())
    }

    /// Start firing tasks
    pub async fn start(&self) -> Result<(), SchedulerError> {
        self.scheduler.start().await?;
        info!("Task scheduler started");
        Ok(())
    }

    /// Stop the scheduler
    pub async fn shutdown(mut self) -> Result<(), SchedulerError> {
        self.scheduler.shutdown().await?;
        info!("Task scheduler stopped");
        Ok(())
    }
}

/// Run `job` on `cron_expression` until `shutdown` resolves
///
/// # Errors
///
/// Fails on an invalid expression or if the scheduler cannot start or stop.
pub async fn run_on_schedule<S>(
    job: Arc<NotificationJob>,
    cron_expression: &str,
    shutdown: S,
) -> Result<(), SchedulerError>
where
    S: Future<Output = ()>,
{
    let scheduler = TaskScheduler::new().await?;
    scheduler
        .add_task("transit-notification", cron_expression, move || {
            let job = Arc::clone(&job);
            async move {
                let result = job.run().await;
                info!(
                    status = result.status_code,
                    body = %result.body,
                    "Scheduled invocation finished"
                );
            }
        })
        .await?;
    scheduler.start().await?;

    shutdown.await;
    info!("Shutdown requested");
    scheduler.shutdown().await
}
