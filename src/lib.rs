// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Timeline-Activities: turn location history exports into an activities CSV
//!
//! This crate flattens monthly timeline exports, keeps cycling, walking,
//! train and bus segments, and derives distance, duration, speed and
//! calendar features for each one.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;
