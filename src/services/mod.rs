// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - statistics and record orchestration.

pub mod records;
pub mod stats;

pub use records::{load_dashboard, load_progress, Progress, RecordSource};
