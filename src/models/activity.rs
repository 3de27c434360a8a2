// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity models for the mapping and enrichment stages.

use chrono::{DateTime, FixedOffset};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::time_utils::format_local_timestamp;

/// Activity segment type recognized by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    Cycling,
    Walking,
    InTrain,
    InBus,
}

impl ActivityType {
    /// All supported types, in processing order.
    pub const ALL: [ActivityType; 4] = [
        ActivityType::Cycling,
        ActivityType::Walking,
        ActivityType::InTrain,
        ActivityType::InBus,
    ];

    /// Tag as it appears in the export.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Cycling => "CYCLING",
            ActivityType::Walking => "WALKING",
            ActivityType::InTrain => "IN_TRAIN",
            ActivityType::InBus => "IN_BUS",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown activity type: {}", s))
    }
}

/// Four-way bucket of the local start hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimeOfDay {
    Night,
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    /// Bucket an hour of day (0-23): [0,6) [6,12) [12,18) [18,24).
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            0..=5 => TimeOfDay::Night,
            6..=11 => TimeOfDay::Morning,
            12..=17 => TimeOfDay::Afternoon,
            _ => TimeOfDay::Evening,
        }
    }
}

/// Activity after field mapping, before enrichment.
#[derive(Debug, Clone, PartialEq)]
pub struct MappedActivity {
    pub activity_type: ActivityType,
    /// Raw start timestamp as exported
    pub start_timestamp: Option<String>,
    /// Raw end timestamp as exported
    pub end_timestamp: Option<String>,
    /// Precise distance in meters (path-based)
    pub distance_meters: Option<f64>,
    /// Coarse segment distance in meters, used when the precise one is absent
    pub fallback_distance_meters: Option<f64>,
}

/// Fully enriched activity, one CSV row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRow {
    pub activity_type: ActivityType,
    #[serde(serialize_with = "serialize_timestamp")]
    pub start_timestamp: DateTime<FixedOffset>,
    #[serde(serialize_with = "serialize_timestamp")]
    pub end_timestamp: DateTime<FixedOffset>,
    pub kilometers: Option<f64>,
    pub hours: f64,
    /// Kilometers per hour; may be infinite or NaN for degenerate durations
    pub speed: Option<f64>,
    pub time_of_day: TimeOfDay,
    pub weekday: String,
    pub week_of_year: u32,
    pub month: String,
}

fn serialize_timestamp<S: Serializer>(
    date: &DateTime<FixedOffset>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_local_timestamp(date))
}
