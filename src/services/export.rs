// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! CSV export of the activities dataset.

use crate::error::{PipelineError, Result};
use crate::models::ActivityRow;
use csv::Writer;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Output columns, in order.
pub const HEADER: [&str; 10] = [
    "activityType",
    "startTimestamp",
    "endTimestamp",
    "kilometers",
    "hours",
    "speed",
    "timeOfDay",
    "weekday",
    "weekOfYear",
    "month",
];

/// Render rows as CSV text, header included even when there are no rows.
pub fn render_csv(rows: &[ActivityRow]) -> Result<String> {
    let mut wtr = Writer::from_writer(vec![]);
    write_rows(&mut wtr, rows)?;

    let data = wtr
        .into_inner()
        .map_err(|e| PipelineError::Export(e.to_string()))?;
    String::from_utf8(data).map_err(|e| PipelineError::Export(e.to_string()))
}

/// Write rows to `path`, creating parent directories as needed.
pub fn write_csv<P: AsRef<Path>>(path: P, rows: &[ActivityRow]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            PipelineError::Export(format!("{}: {}", parent.display(), e))
        })?;
    }

    let mut wtr = Writer::from_path(path)?;
    write_rows(&mut wtr, rows)?;
    wtr.flush()
        .map_err(|e| PipelineError::Export(format!("{}: {}", path.display(), e)))?;

    tracing::info!(path = %path.display(), rows = rows.len(), "Wrote activities dataset");
    Ok(())
}

fn write_rows<W: Write>(wtr: &mut Writer<W>, rows: &[ActivityRow]) -> Result<()> {
    // Serialized structs only emit a header alongside the first row.
    if rows.is_empty() {
        wtr.write_record(HEADER)?;
    }
    for row in rows {
        wtr.serialize(row)?;
    }
    Ok(())
}
