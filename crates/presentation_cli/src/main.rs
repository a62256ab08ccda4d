//! Transit notifier CLI
//!
//! Runs the daily transit notification once, previews it, or keeps it on a
//! cron schedule.

#![allow(clippy::print_stdout)]

use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::{Parser, Subcommand};
use infrastructure::{AppConfig, build_notification_job, init_tracing, run_on_schedule};
use tracing::{error, info};

/// Transit notifier CLI
#[derive(Parser)]
#[command(name = "transit-notifier")]
#[command(author, version, long_about = None)]
#[command(about = "Emails the next transit departures for a commute")]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true, env = "TRANSIT_NOTIFIER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one invocation and print the result as JSON
    Run {
        /// Trigger event payload (JSON); accepted and ignored
        #[arg(long)]
        event: Option<String>,
    },

    /// Fetch and render the notification without sending it
    Preview,

    /// Run the invocation on a cron schedule until Ctrl-C
    ///
    /// Example: transit-notifier schedule --cron "0 30 11 * * Mon-Fri"
    Schedule {
        /// Six-field cron expression evaluated in UTC (defaults to `notifier.schedule`)
        #[arg(long)]
        cron: Option<String>,
    },
}

/// Parse an optional event payload, defaulting to `null`
fn parse_event(event: Option<&str>) -> anyhow::Result<serde_json::Value> {
    event.map_or(Ok(serde_json::Value::Null), |raw| {
        serde_json::from_str(raw).context("--event is not valid JSON")
    })
}

async fn wait_for_ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for Ctrl-C");
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    init_tracing(&config.log, cli.verbose)?;

    let job = build_notification_job(&config).context("Invalid configuration")?;

    match cli.command {
        Commands::Run { event } => {
            let event = parse_event(event.as_deref())?;
            let result = job.handle(&event, &serde_json::Value::Null).await;
            println!("{}", serde_json::to_string(&result)?);
        },

        Commands::Preview => {
            println!("{}", job.preview().await);
        },

        Commands::Schedule { cron } => {
            let cron = cron.unwrap_or_else(|| config.notifier.schedule.clone());
            info!(cron = %cron, "Running on schedule, press Ctrl-C to stop");
            run_on_schedule(Arc::new(job), &cron, wait_for_ctrl_c()).await?;
        },
    }

    Ok(())
}
