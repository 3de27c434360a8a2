// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Per-activity-type field mappings.
//!
//! A mapping lists `(output field, source column)` pairs, where the source
//! column is named after the filter has stripped the segment prefix.

use crate::models::ActivityType;

pub const ACTIVITY_TYPE: &str = "activityType";
pub const START_TIMESTAMP: &str = "startTimestamp";
pub const END_TIMESTAMP: &str = "endTimestamp";
pub const KILOMETERS: &str = "kilometers";

/// Output fields every mapping must declare.
pub const OUTPUT_FIELDS: [&str; 4] = [ACTIVITY_TYPE, START_TIMESTAMP, END_TIMESTAMP, KILOMETERS];

/// Coarse distance column captured before renaming.
pub const FALLBACK_DISTANCE: &str = "distance";

const START_SOURCE: &str = "duration.startTimestamp";
const END_SOURCE: &str = "duration.endTimestamp";
const WAYPOINT_DISTANCE: &str = "waypointPath.distanceMeters";
const TRANSIT_DISTANCE: &str = "transitPath.distanceMeters";

/// Ordered output-field to source-column pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMapping {
    pairs: Vec<(String, String)>,
}

impl FieldMapping {
    pub fn new<O, S>(pairs: impl IntoIterator<Item = (O, S)>) -> Self
    where
        O: Into<String>,
        S: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(output, source)| (output.into(), source.into()))
                .collect(),
        }
    }

    /// Built-in mapping for an activity type.
    ///
    /// Cycling and walking carry a recorded waypoint path; train and bus
    /// segments carry a transit path.
    pub fn default_for(activity_type: ActivityType) -> Self {
        let distance = match activity_type {
            ActivityType::Cycling | ActivityType::Walking => WAYPOINT_DISTANCE,
            ActivityType::InTrain | ActivityType::InBus => TRANSIT_DISTANCE,
        };

        Self::new([
            (ACTIVITY_TYPE, ACTIVITY_TYPE),
            (START_TIMESTAMP, START_SOURCE),
            (END_TIMESTAMP, END_SOURCE),
            (KILOMETERS, distance),
        ])
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Source column declared for an output field.
    pub fn source_for(&self, output: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(o, _)| o == output)
            .map(|(_, s)| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mappings_declare_all_outputs_in_order() {
        for activity_type in ActivityType::ALL {
            let mapping = FieldMapping::default_for(activity_type);
            let outputs: Vec<&str> = mapping.pairs().iter().map(|(o, _)| o.as_str()).collect();
            assert_eq!(outputs, OUTPUT_FIELDS);
        }
    }

    #[test]
    fn test_distance_source_per_type() {
        assert_eq!(
            FieldMapping::default_for(ActivityType::Cycling).source_for(KILOMETERS),
            Some("waypointPath.distanceMeters")
        );
        assert_eq!(
            FieldMapping::default_for(ActivityType::InBus).source_for(KILOMETERS),
            Some("transitPath.distanceMeters")
        );
        assert_eq!(
            FieldMapping::default_for(ActivityType::Walking).source_for("speed"),
            None
        );
    }
}
