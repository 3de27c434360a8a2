//! Pipeline configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local runs.

use chrono::{FixedOffset, Offset, Utc};
use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;

use crate::models::{ActivityType, FieldMapping};
use crate::services::enricher::EnrichConfig;
use crate::services::filter::SEGMENT_PREFIX;
use crate::services::loader::discover_monthly_files;
use crate::time_utils::parse_time_zone;

pub const DEFAULT_INPUT_DIR: &str = "data/Semantic Location History";
pub const DEFAULT_OUTPUT: &str = "activities.csv";
pub const DEFAULT_HOUR_OFFSET: i64 = 2;
/// Largest accepted `TIMELINE_HOUR_OFFSET` magnitude, in hours.
pub const MAX_HOUR_OFFSET: i64 = 24;

/// Where the monthly export files come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Explicit files, processed in the given order
    Files(Vec<PathBuf>),
    /// Directory scanned for `YYYY_MONTH.json` exports, processed chronologically
    Directory(PathBuf),
}

/// Pipeline configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Monthly export inputs
    pub input: InputSource,
    /// Output CSV path
    pub output_path: PathBuf,
    /// Column prefix stripped by the activity filter
    pub column_prefix: String,
    /// Zone naive export timestamps are interpreted in
    pub time_zone: FixedOffset,
    /// Flat hour correction applied to every timestamp
    pub hour_offset: i64,
    /// Field mapping per activity type
    pub mappings: BTreeMap<ActivityType, FieldMapping>,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            input: InputSource::Files(Vec::new()),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            column_prefix: SEGMENT_PREFIX.to_string(),
            time_zone: Utc.fix(),
            hour_offset: DEFAULT_HOUR_OFFSET,
            mappings: default_mappings(),
        }
    }
}

/// Built-in field mapping for every activity type.
pub fn default_mappings() -> BTreeMap<ActivityType, FieldMapping> {
    ActivityType::ALL
        .into_iter()
        .map(|t| (t, FieldMapping::default_for(t)))
        .collect()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let input = match var("TIMELINE_INPUT_FILES") {
            Some(list) => InputSource::Files(
                list.split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(PathBuf::from)
                    .collect(),
            ),
            None => InputSource::Directory(PathBuf::from(
                var("TIMELINE_INPUT_DIR").unwrap_or_else(|| DEFAULT_INPUT_DIR.to_string()),
            )),
        };

        let time_zone = match var("TIMELINE_TIME_ZONE") {
            Some(tz) => parse_time_zone(&tz).ok_or_else(|| ConfigError::Invalid {
                var: "TIMELINE_TIME_ZONE",
                message: format!("{:?} is not UTC or a +HH:MM offset", tz),
            })?,
            None => Utc.fix(),
        };

        let hour_offset = match var("TIMELINE_HOUR_OFFSET") {
            Some(offset) => {
                let hours: i64 = offset.trim().parse().map_err(|e| ConfigError::Invalid {
                    var: "TIMELINE_HOUR_OFFSET",
                    message: format!("{:?}: {}", offset, e),
                })?;
                if !(-MAX_HOUR_OFFSET..=MAX_HOUR_OFFSET).contains(&hours) {
                    return Err(ConfigError::Invalid {
                        var: "TIMELINE_HOUR_OFFSET",
                        message: format!(
                            "{} is outside -{}..={} hours",
                            hours, MAX_HOUR_OFFSET, MAX_HOUR_OFFSET
                        ),
                    });
                }
                hours
            }
            None => DEFAULT_HOUR_OFFSET,
        };

        Ok(Self {
            input,
            output_path: PathBuf::from(
                var("TIMELINE_OUTPUT").unwrap_or_else(|| DEFAULT_OUTPUT.to_string()),
            ),
            column_prefix: var("TIMELINE_COLUMN_PREFIX")
                .unwrap_or_else(|| SEGMENT_PREFIX.to_string()),
            time_zone,
            hour_offset,
            mappings: default_mappings(),
        })
    }

    /// Time zone settings for the enricher.
    pub fn enrich_config(&self) -> EnrichConfig {
        EnrichConfig {
            time_zone: self.time_zone,
            hour_offset: self.hour_offset,
        }
    }

    /// Field mapping for an activity type, falling back to the built-in one.
    pub fn mapping_for(&self, activity_type: ActivityType) -> FieldMapping {
        self.mappings
            .get(&activity_type)
            .cloned()
            .unwrap_or_else(|| FieldMapping::default_for(activity_type))
    }

    /// Monthly files to process, in processing order.
    pub fn resolve_input_files(&self) -> crate::error::Result<Vec<PathBuf>> {
        match &self.input {
            InputSource::Files(files) => Ok(files.clone()),
            InputSource::Directory(dir) => discover_monthly_files(dir),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    Invalid { var: &'static str, message: String },
}
