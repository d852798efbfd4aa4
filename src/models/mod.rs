// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod nutrition;
pub mod stats;
pub mod workout;

pub use nutrition::{NutritionEntry, NutritionInput};
pub use stats::{DatedRecord, DayBucket, DerivedStats, Timeframe};
pub use workout::{Intensity, WorkoutEntry, WorkoutInput};
