//! Daily notification job
//!
//! One invocation fetches the route, renders the notification, sends it and
//! reports a success result. Failures inside the invocation only change the
//! message text; the reported status is always 200.

use domain::RouteQuery;
use serde::Serialize;
use tracing::{info, instrument};

use super::notifier::Notifier;
use super::route_fetcher::RouteFetcher;

/// Result handed back to the trigger
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvocationResult {
    /// HTTP-style status code, always 200
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// JSON-encoded `{"message": <rendered text>}`
    pub body: String,
}

impl InvocationResult {
    /// Successful result carrying the rendered message
    #[must_use]
    pub fn ok(message: &str) -> Self {
        Self {
            status_code: 200,
            body: serde_json::json!({ "message": message }).to_string(),
        }
    }
}

/// Fetch-render-send pipeline for one route
#[derive(Debug)]
pub struct NotificationJob {
    fetcher: RouteFetcher,
    notifier: Notifier,
    query: RouteQuery,
}

impl NotificationJob {
    /// Create a job for the configured route
    #[must_use]
    pub fn new(fetcher: RouteFetcher, notifier: Notifier, query: RouteQuery) -> Self {
        Self {
            fetcher,
            notifier,
            query,
        }
    }

    /// Trigger entry point; event and context are accepted and ignored
    pub async fn handle(
        &self,
        _event: &serde_json::Value,
        _context: &serde_json::Value,
    ) -> InvocationResult {
        self.run().await
    }

    /// Run one invocation: fetch, render, send
    #[instrument(skip(self))]
    pub async fn run(&self) -> InvocationResult {
        let summary = self.fetcher.fetch(&self.query).await;
        let message = self.notifier.notify(summary.as_ref()).await;
        info!(found = summary.is_some(), "Invocation finished");
        InvocationResult::ok(&message)
    }

    /// Fetch and render without sending mail
    pub async fn preview(&self) -> String {
        let summary = self.fetcher.fetch(&self.query).await;
        Notifier::render(summary.as_ref())
    }
}
