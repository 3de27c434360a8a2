// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Timeline-Activities batch job
//!
//! Builds the consolidated activities CSV from monthly location history
//! exports, as configured through `TIMELINE_*` environment variables.

use anyhow::Context;
use timeline_activities::{config::Config, services};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        output = %config.output_path.display(),
        hour_offset = config.hour_offset,
        time_zone = %config.time_zone,
        "Building activities dataset"
    );

    let stats = match services::run(&config) {
        Ok(stats) => stats,
        Err(err) => {
            tracing::error!(kind = err.kind(), error = %err, "Dataset build failed");
            return Err(err).context("Failed to build activities dataset");
        }
    };

    let summary = serde_json::to_string(&stats).context("Failed to serialize run summary")?;
    tracing::info!(
        files = stats.files_processed,
        activities = stats.total_activities,
        kilometers = stats.total_kilometers,
        summary = %summary,
        "Activities dataset complete"
    );
    Ok(())
}

/// Initialize structured JSON logging on stderr.
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("timeline_activities=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
