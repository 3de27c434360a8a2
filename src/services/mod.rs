// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Pipeline stages.

pub mod enricher;
pub mod export;
pub mod filter;
pub mod loader;
pub mod mapper;
pub mod pipeline;

pub use pipeline::{build_dataset, process_month, run};
