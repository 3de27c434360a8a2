// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Field mapping: filtered raw rows to uniform typed activities.

use crate::error::{PipelineError, Result};
use crate::models::mapping::{
    ACTIVITY_TYPE, END_TIMESTAMP, FALLBACK_DISTANCE, KILOMETERS, OUTPUT_FIELDS, START_TIMESTAMP,
};
use crate::models::{ActivityType, FieldMapping, MappedActivity, RawRecord, RawTable};
use serde_json::Value;

/// Apply `mapping` to an activity-filtered table.
///
/// The coarse `distance` column is captured per row before renaming. A table
/// with no rows maps to nothing, even when declared source columns are absent.
pub fn map_fields(
    table: &RawTable,
    activity_type: ActivityType,
    mapping: &FieldMapping,
) -> Result<Vec<MappedActivity>> {
    validate_outputs(activity_type, mapping)?;

    if table.is_empty() {
        return Ok(Vec::new());
    }

    for (output, source) in mapping.pairs() {
        if !table.has_column(source) {
            return Err(PipelineError::Mapping(format!(
                "{} mapping needs column {:?} for {}, which is not in the export",
                activity_type, source, output
            )));
        }
    }

    let type_source = source_of(mapping, ACTIVITY_TYPE);
    let start_source = source_of(mapping, START_TIMESTAMP);
    let end_source = source_of(mapping, END_TIMESTAMP);
    let distance_source = source_of(mapping, KILOMETERS);

    table
        .rows()
        .iter()
        .map(|row| -> Result<MappedActivity> {
            Ok(MappedActivity {
                activity_type: type_cell(row, type_source)?,
                start_timestamp: timestamp_cell(row, start_source)?,
                end_timestamp: timestamp_cell(row, end_source)?,
                distance_meters: distance_cell(row, distance_source)?,
                fallback_distance_meters: distance_cell(row, FALLBACK_DISTANCE)?,
            })
        })
        .collect()
}

/// Every output field must be declared exactly once, and nothing else.
fn validate_outputs(activity_type: ActivityType, mapping: &FieldMapping) -> Result<()> {
    for (output, _) in mapping.pairs() {
        if !OUTPUT_FIELDS.contains(&output.as_str()) {
            return Err(PipelineError::Mapping(format!(
                "{} mapping declares unknown output field {:?}",
                activity_type, output
            )));
        }
    }

    for field in OUTPUT_FIELDS {
        let declared = mapping.pairs().iter().filter(|(o, _)| o == field).count();
        if declared != 1 {
            return Err(PipelineError::Mapping(format!(
                "{} mapping declares output field {:?} {} times, expected once",
                activity_type, field, declared
            )));
        }
    }

    Ok(())
}

fn source_of<'a>(mapping: &'a FieldMapping, output: &'a str) -> &'a str {
    mapping.source_for(output).unwrap_or(output)
}

fn type_cell(row: &RawRecord, column: &str) -> Result<ActivityType> {
    match row.get(column) {
        Some(Value::String(tag)) => tag.parse().map_err(PipelineError::Mapping),
        Some(other) => Err(PipelineError::Mapping(format!(
            "Column {:?} holds {} instead of an activity type",
            column, other
        ))),
        None => Err(PipelineError::Mapping(format!(
            "Column {:?} is null",
            column
        ))),
    }
}

fn timestamp_cell(row: &RawRecord, column: &str) -> Result<Option<String>> {
    match row.get(column) {
        None => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        // Older exports store epoch milliseconds as numbers.
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(PipelineError::Mapping(format!(
            "Column {:?} holds {} instead of a timestamp",
            column, other
        ))),
    }
}

fn distance_cell(row: &RawRecord, column: &str) -> Result<Option<f64>> {
    match row.get(column) {
        None => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => s.trim().parse().map(Some).map_err(|_| {
            PipelineError::Mapping(format!("Column {:?} holds non-numeric {:?}", column, s))
        }),
        Some(other) => Err(PipelineError::Mapping(format!(
            "Column {:?} holds {} instead of a distance",
            column, other
        ))),
    }
}
