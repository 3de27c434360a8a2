// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for each pipeline stage.

pub mod activity;
pub mod mapping;
pub mod record;
pub mod stats;

pub use activity::{ActivityRow, ActivityType, MappedActivity, TimeOfDay};
pub use mapping::FieldMapping;
pub use record::{RawRecord, RawTable};
pub use stats::DatasetStats;
