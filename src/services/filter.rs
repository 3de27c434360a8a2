// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity-type row selection and column prefix stripping.

use crate::models::mapping::ACTIVITY_TYPE;
use crate::models::{ActivityType, RawRecord, RawTable};
use serde_json::Value;
use std::collections::HashSet;

/// Default segment prefix stripped from column names.
pub const SEGMENT_PREFIX: &str = "timelineObjects.activitySegment.";

/// Select rows of one activity type and strip `prefix` from column names.
///
/// With `drop_empty`, columns that are null or `""` in every selected row are
/// removed. Zero matching rows leave the column set untouched.
pub fn filter_activity(
    table: &RawTable,
    activity_type: ActivityType,
    drop_empty: bool,
    prefix: &str,
) -> RawTable {
    let type_column = format!("{}{}", prefix, ACTIVITY_TYPE);
    let tag = activity_type.as_str();

    let rows: Vec<&RawRecord> = table
        .rows()
        .iter()
        .filter(|row| matches!(row.get(&type_column), Some(Value::String(t)) if t == tag))
        .collect();

    let columns: Vec<&String> = if drop_empty && !rows.is_empty() {
        table
            .columns()
            .iter()
            .filter(|column| !rows.iter().all(|row| row.is_empty_at(column)))
            .collect()
    } else {
        table.columns().iter().collect()
    };

    let keep: HashSet<&str> = columns.iter().map(|c| c.as_str()).collect();
    let renamed_columns: Vec<String> = columns.iter().map(|c| strip(c, prefix)).collect();
    let renamed_rows: Vec<RawRecord> = rows
        .into_iter()
        .map(|row| {
            let values = row
                .clone()
                .into_values()
                .into_iter()
                .filter(|(column, _)| keep.contains(column.as_str()))
                .map(|(column, value)| (strip(&column, prefix), value))
                .collect();
            RawRecord::new(values)
        })
        .collect();

    tracing::debug!(
        activity_type = tag,
        rows = renamed_rows.len(),
        "Filtered activity rows"
    );
    RawTable::new(renamed_columns, renamed_rows)
}

fn strip(column: &str, prefix: &str) -> String {
    column.strip_prefix(prefix).unwrap_or(column).to_string()
}
