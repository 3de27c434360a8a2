//! Dataset summary aggregates, logged once a run completes.

use chrono::Datelike;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::ActivityRow;

/// Summary of a built activities dataset.
///
/// Ordered maps keep the logged summary stable between runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatasetStats {
    // ─── Inputs ──────────────────────────────────────────────────
    /// Monthly files processed
    pub files_processed: usize,

    // ─── Totals ──────────────────────────────────────────────────
    /// Total activity rows
    pub total_activities: u32,
    /// Total distance (rows without a distance count as zero)
    pub total_kilometers: f64,

    // ─── By Activity Type ────────────────────────────────────────
    /// Row count per activity type tag
    pub activities_by_type: BTreeMap<String, u32>,
    /// Total distance per activity type tag
    pub kilometers_by_type: BTreeMap<String, f64>,

    // ─── Time Series ─────────────────────────────────────────────
    /// Row count per local start month ("YYYY-MM" format)
    pub activities_by_month: BTreeMap<String, u32>,
}

impl DatasetStats {
    /// Summarize a finished dataset.
    pub fn from_rows(rows: &[ActivityRow], files_processed: usize) -> Self {
        let mut stats = Self {
            files_processed,
            ..Self::default()
        };
        for row in rows {
            stats.update_from_row(row);
        }
        stats
    }

    /// Fold one activity row into the totals.
    pub fn update_from_row(&mut self, row: &ActivityRow) {
        let kilometers = row.kilometers.unwrap_or(0.0);
        let tag = row.activity_type.as_str().to_string();

        self.total_activities += 1;
        self.total_kilometers += kilometers;

        *self.activities_by_type.entry(tag.clone()).or_insert(0) += 1;
        *self.kilometers_by_type.entry(tag).or_insert(0.0) += kilometers;

        let month_key = format!(
            "{:04}-{:02}",
            row.start_timestamp.year(),
            row.start_timestamp.month()
        );
        *self.activities_by_month.entry(month_key).or_insert(0) += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityType, TimeOfDay};
    use chrono::{FixedOffset, TimeZone};

    fn make_row(activity_type: ActivityType, month: u32, kilometers: Option<f64>) -> ActivityRow {
        let tz = FixedOffset::east_opt(0).unwrap();
        let start = tz.with_ymd_and_hms(2022, month, 1, 10, 0, 0).unwrap();
        ActivityRow {
            activity_type,
            start_timestamp: start,
            end_timestamp: start + chrono::Duration::hours(1),
            kilometers,
            hours: 1.0,
            speed: kilometers,
            time_of_day: TimeOfDay::Morning,
            weekday: "Friday".to_string(),
            week_of_year: 13,
            month: "April".to_string(),
        }
    }

    #[test]
    fn test_from_rows_basic() {
        let rows = vec![
            make_row(ActivityType::Cycling, 4, Some(12.5)),
            make_row(ActivityType::Cycling, 4, Some(7.5)),
            make_row(ActivityType::InTrain, 5, Some(40.0)),
        ];

        let stats = DatasetStats::from_rows(&rows, 2);

        assert_eq!(stats.files_processed, 2);
        assert_eq!(stats.total_activities, 3);
        assert_eq!(stats.total_kilometers, 60.0);
        assert_eq!(stats.activities_by_type.get("CYCLING"), Some(&2));
        assert_eq!(stats.kilometers_by_type.get("CYCLING"), Some(&20.0));
        assert_eq!(stats.activities_by_type.get("IN_TRAIN"), Some(&1));
        assert_eq!(stats.activities_by_month.get("2022-04"), Some(&2));
        assert_eq!(stats.activities_by_month.get("2022-05"), Some(&1));
    }

    #[test]
    fn test_missing_distance_counts_as_zero() {
        let mut stats = DatasetStats::default();
        stats.update_from_row(&make_row(ActivityType::InBus, 6, None));

        assert_eq!(stats.total_activities, 1);
        assert_eq!(stats.total_kilometers, 0.0);
        assert_eq!(stats.kilometers_by_type.get("IN_BUS"), Some(&0.0));
    }

    #[test]
    fn test_summary_serializes_in_key_order() {
        let rows = vec![
            make_row(ActivityType::Walking, 5, Some(2.0)),
            make_row(ActivityType::Cycling, 4, Some(10.0)),
        ];
        let stats = DatasetStats::from_rows(&rows, 2);

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["files_processed"], 2);
        assert_eq!(json["total_kilometers"], 12.0);
        assert_eq!(
            serde_json::to_string(&json["activities_by_month"]).unwrap(),
            r#"{"2022-04":1,"2022-05":1}"#
        );
        assert_eq!(
            serde_json::to_string(&json["activities_by_type"]).unwrap(),
            r#"{"CYCLING":1,"WALKING":1}"#
        );
    }
}
