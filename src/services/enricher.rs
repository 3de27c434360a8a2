// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Derived features: distance units, local timestamps, duration, speed and
//! calendar buckets.

use crate::error::{PipelineError, Result};
use crate::models::{ActivityRow, MappedActivity, TimeOfDay};
use crate::time_utils::{month_name, weekday_name};
use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDateTime, Offset, TimeDelta, TimeZone, Timelike, Utc,
};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Time zone handling for the enricher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrichConfig {
    /// Zone naive export timestamps are interpreted in
    pub time_zone: FixedOffset,
    /// Flat correction added to every timestamp, regardless of date
    pub hour_offset: i64,
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            time_zone: Utc.fix(),
            hour_offset: 2,
        }
    }
}

/// Enrich a batch of mapped activities.
pub fn enrich(mapped: &[MappedActivity], config: &EnrichConfig) -> Result<Vec<ActivityRow>> {
    mapped.iter().map(|m| enrich_one(m, config)).collect()
}

/// Enrich one mapped activity into an output row.
pub fn enrich_one(mapped: &MappedActivity, config: &EnrichConfig) -> Result<ActivityRow> {
    let distance_meters = mapped.distance_meters.or(mapped.fallback_distance_meters);

    let start_timestamp = local_timestamp(mapped.start_timestamp.as_deref(), config)?;
    let end_timestamp = local_timestamp(mapped.end_timestamp.as_deref(), config)?;

    let kilometers = distance_meters.map(|meters| meters / 1000.0);
    let hours = (end_timestamp - start_timestamp).num_milliseconds() as f64 / MILLIS_PER_HOUR;
    let speed = kilometers.map(|km| km / hours);

    Ok(ActivityRow {
        activity_type: mapped.activity_type,
        start_timestamp,
        end_timestamp,
        kilometers,
        hours,
        speed,
        time_of_day: TimeOfDay::from_hour(start_timestamp.hour()),
        weekday: weekday_name(start_timestamp.weekday()).to_string(),
        week_of_year: start_timestamp.iso_week().week(),
        month: month_name(&start_timestamp).to_string(),
    })
}

fn local_timestamp(value: Option<&str>, config: &EnrichConfig) -> Result<DateTime<FixedOffset>> {
    let value = value.ok_or_else(|| PipelineError::timestamp("", "timestamp is missing"))?;
    let parsed = parse_timestamp(value, &config.time_zone)?;
    TimeDelta::try_hours(config.hour_offset)
        .and_then(|offset| parsed.checked_add_signed(offset))
        .ok_or_else(|| PipelineError::timestamp(value, "hour offset out of range"))
}

/// Parse an export timestamp into `time_zone`.
///
/// Naive wall-clock strings are taken as `time_zone` local time, RFC 3339
/// strings are converted into it, and all-digit strings are epoch
/// milliseconds.
pub fn parse_timestamp(value: &str, time_zone: &FixedOffset) -> Result<DateTime<FixedOffset>> {
    let trimmed = value.trim();

    if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        let millis: i64 = trimmed
            .parse()
            .map_err(|e| PipelineError::timestamp(value, e))?;
        return DateTime::from_timestamp_millis(millis)
            .map(|utc| utc.with_timezone(time_zone))
            .ok_or_else(|| PipelineError::timestamp(value, "epoch milliseconds out of range"));
    }

    if let Ok(aware) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(aware.with_timezone(time_zone));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return time_zone
                .from_local_datetime(&naive)
                .single()
                .ok_or_else(|| PipelineError::timestamp(value, "ambiguous local time"));
        }
    }

    Err(PipelineError::timestamp(
        value,
        "expected ISO-8601 date-time or epoch milliseconds",
    ))
}
