// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Month aggregation and dataset building.
//!
//! Handles the core workflow:
//! 1. Load and flatten each monthly export
//! 2. Filter, map and enrich every activity type
//! 3. Concatenate months in chronological order
//! 4. Write the CSV and summarize the run

use crate::config::Config;
use crate::error::Result;
use crate::models::{ActivityRow, ActivityType, DatasetStats, RawTable};
use crate::services::{enricher, export, filter, loader, mapper};
use std::path::{Path, PathBuf};

/// Run Filter, Map and Enrich for every activity type of one loaded month.
pub fn process_table(table: &RawTable, config: &Config) -> Result<Vec<ActivityRow>> {
    let enrich_config = config.enrich_config();
    let mut rows = Vec::new();

    for activity_type in ActivityType::ALL {
        let filtered =
            filter::filter_activity(table, activity_type, false, &config.column_prefix);
        let mapped =
            mapper::map_fields(&filtered, activity_type, &config.mapping_for(activity_type))?;
        let enriched = enricher::enrich(&mapped, &enrich_config)?;

        tracing::debug!(
            activity_type = %activity_type,
            rows = enriched.len(),
            "Processed activity type"
        );
        rows.extend(enriched);
    }

    Ok(rows)
}

/// Load one monthly export and process it.
pub fn process_month<P: AsRef<Path>>(path: P, config: &Config) -> Result<Vec<ActivityRow>> {
    let path = path.as_ref();
    let table = loader::load_file(path)?;
    let rows = process_table(&table, config)?;

    tracing::info!(
        path = %path.display(),
        raw_rows = table.len(),
        activities = rows.len(),
        "Processed monthly export"
    );
    Ok(rows)
}

/// Process every monthly export in order and concatenate the results.
///
/// The first failing file aborts the whole build.
pub fn build_dataset(paths: &[PathBuf], config: &Config) -> Result<Vec<ActivityRow>> {
    let mut dataset = Vec::new();
    for path in paths {
        dataset.extend(process_month(path, config)?);
    }
    Ok(dataset)
}

/// Build the dataset from the configured inputs and write it out.
pub fn run(config: &Config) -> Result<DatasetStats> {
    let paths = config.resolve_input_files()?;
    if paths.is_empty() {
        tracing::warn!("No monthly exports to process");
    }

    let dataset = build_dataset(&paths, config)?;
    export::write_csv(&config.output_path, &dataset)?;

    Ok(DatasetStats::from_rows(&dataset, paths.len()))
}
