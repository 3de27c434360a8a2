// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Monthly export loading, flattening and discovery.

use crate::error::{PipelineError, Result};
use crate::models::RawTable;
use crate::time_utils::month_from_name;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level array holding one entry per timeline segment or visit.
pub const RECORD_PATH: &str = "timelineObjects";

/// Load and flatten a monthly export file.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<RawTable> {
    let path = path.as_ref();
    let json_data = fs::read_to_string(path).map_err(|e| PipelineError::load(path, e))?;
    let document: Value =
        serde_json::from_str(&json_data).map_err(|e| PipelineError::load(path, e))?;

    let table = flatten_document(&document);
    tracing::debug!(
        path = %path.display(),
        rows = table.len(),
        columns = table.columns().len(),
        "Loaded timeline export"
    );
    Ok(table)
}

/// Load and flatten an export from a JSON string.
pub fn load_from_json(json_data: &str) -> Result<RawTable> {
    let document: Value =
        serde_json::from_str(json_data).map_err(|e| PipelineError::load("<inline>", e))?;
    Ok(flatten_document(&document))
}

/// Flatten a parsed document into one row per timeline entry.
///
/// An object holding a `timelineObjects` array yields one row per element,
/// with columns prefixed `timelineObjects.`. A top-level array yields one
/// row per element with no prefix. Anything else is a single row.
pub fn flatten_document(document: &Value) -> RawTable {
    let rows = match document {
        Value::Object(map) => match map.get(RECORD_PATH) {
            Some(Value::Array(entries)) => entries
                .iter()
                .map(|entry| flatten_entry(entry, RECORD_PATH))
                .collect(),
            _ => vec![flatten_entry(document, "")],
        },
        Value::Array(entries) => entries.iter().map(|e| flatten_entry(e, "")).collect(),
        other => vec![flatten_entry(other, "")],
    };

    RawTable::from_flattened(rows)
}

fn flatten_entry(entry: &Value, prefix: &str) -> Vec<(String, Value)> {
    let mut out = Vec::new();
    match entry {
        Value::Object(map) => flatten_object(map, prefix, &mut out),
        scalar => {
            let key = if prefix.is_empty() { "value" } else { prefix };
            out.push((key.to_string(), scalar.clone()));
        }
    }
    out
}

fn flatten_object(map: &Map<String, Value>, prefix: &str, out: &mut Vec<(String, Value)>) {
    for (key, value) in map {
        let column = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        match value {
            Value::Object(nested) => flatten_object(nested, &column, out),
            // Arrays inside a record stay a single cell.
            other => out.push((column, other.clone())),
        }
    }
}

/// Find `<YYYY>_<MONTH>.json` export files under `dir` and one level of
/// subdirectories, ordered chronologically.
pub fn discover_monthly_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut found = Vec::new();

    for entry in fs::read_dir(dir).map_err(|e| PipelineError::load(dir, e))? {
        let path = entry.map_err(|e| PipelineError::load(dir, e))?.path();
        if path.is_dir() {
            for nested in fs::read_dir(&path).map_err(|e| PipelineError::load(&path, e))? {
                let nested = nested.map_err(|e| PipelineError::load(&path, e))?.path();
                push_if_monthly(nested, &mut found);
            }
        } else {
            push_if_monthly(path, &mut found);
        }
    }

    found.sort();
    tracing::info!(
        dir = %dir.display(),
        files = found.len(),
        "Discovered monthly exports"
    );
    Ok(found.into_iter().map(|(_, _, path)| path).collect())
}

fn push_if_monthly(path: PathBuf, found: &mut Vec<(i32, u32, PathBuf)>) {
    match path.file_name().and_then(|n| n.to_str()).and_then(parse_month_file_name) {
        Some((year, month)) => found.push((year, month, path)),
        None => tracing::debug!(path = %path.display(), "Skipping non-export file"),
    }
}

/// Parse `2022_APRIL.json` into `(2022, 4)`.
pub fn parse_month_file_name(name: &str) -> Option<(i32, u32)> {
    let stem = name.strip_suffix(".json")?;
    let (year, month) = stem.split_once('_')?;
    if year.len() != 4 {
        return None;
    }
    Some((year.parse().ok()?, month_from_name(month)?))
}
