// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use timeline_activities::config::ConfigError;
use timeline_activities::error::PipelineError;

#[test]
fn test_error_kinds_are_stable() {
    let err = PipelineError::Load {
        path: "2022_APRIL.json".to_string(),
        message: "expected value at line 1 column 1".to_string(),
    };
    assert_eq!(err.kind(), "load");

    let err = PipelineError::Mapping("IN_TRAIN mapping needs column".to_string());
    assert_eq!(err.kind(), "mapping");

    let err = PipelineError::TimestampParse {
        value: "soon".to_string(),
        message: "unrecognized".to_string(),
    };
    assert_eq!(err.kind(), "timestamp_parse");

    let err = PipelineError::Export("disk full".to_string());
    assert_eq!(err.kind(), "export");
}

#[test]
fn test_error_messages() {
    let err = PipelineError::Mapping("Column \"activityType\" is null".to_string());
    assert_eq!(
        err.to_string(),
        "Field mapping error: Column \"activityType\" is null"
    );

    let err = PipelineError::Export("permission denied".to_string());
    assert_eq!(err.to_string(), "Failed to write dataset: permission denied");

    let err = ConfigError::Invalid {
        var: "TIMELINE_HOUR_OFFSET",
        message: "invalid digit found in string".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Invalid value for TIMELINE_HOUR_OFFSET: invalid digit found in string"
    );
}
