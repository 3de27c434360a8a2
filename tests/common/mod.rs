// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use timeline_activities::config::{Config, InputSource};

/// Checked-in monthly exports, in chronological order.
#[allow(dead_code)]
pub fn fixture_files() -> Vec<PathBuf> {
    vec![
        PathBuf::from("tests/fixtures/2022_APRIL.json"),
        PathBuf::from("tests/fixtures/2022_MAY.json"),
    ]
}

/// Build an activity segment entry the way Takeout nests it.
#[allow(dead_code)]
pub fn segment(activity_type: &str, start: &str, end: &str, path_meters: Option<f64>) -> Value {
    let mut segment = json!({
        "activitySegment": {
            "activityType": activity_type,
            "duration": {"startTimestamp": start, "endTimestamp": end},
            "confidence": "HIGH"
        }
    });
    if let Some(meters) = path_meters {
        let path_key = match activity_type {
            "IN_TRAIN" | "IN_BUS" => "transitPath",
            _ => "waypointPath",
        };
        segment["activitySegment"][path_key] = json!({ "distanceMeters": meters });
    }
    segment
}

/// A place visit entry, which never matches an activity type.
#[allow(dead_code)]
pub fn place_visit(name: &str) -> Value {
    json!({"placeVisit": {"location": {"name": name}}})
}

/// Write a monthly export holding `entries` to `dir/name`.
#[allow(dead_code)]
pub fn write_export(dir: &Path, name: &str, entries: Vec<Value>) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create export directory");
    }
    let document = json!({ "timelineObjects": entries });
    fs::write(&path, serde_json::to_string_pretty(&document).unwrap())
        .expect("Failed to write export");
    path
}

/// Config reading `inputs` and writing to `output`, otherwise default.
#[allow(dead_code)]
pub fn test_config(inputs: Vec<PathBuf>, output: PathBuf) -> Config {
    Config {
        input: InputSource::Files(inputs),
        output_path: output,
        ..Config::default()
    }
}
