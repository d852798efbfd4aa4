// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fetch-then-compute orchestration for the dashboard and progress views.
//!
//! Both fetches must succeed before any statistic is computed; a failed fetch
//! is returned as-is and the calculator never sees partial input.

use std::future::Future;

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::{DayBucket, DerivedStats, NutritionEntry, Timeframe, WorkoutEntry};
use crate::services::stats;

/// Supplies one owner's records, newest first.
pub trait RecordSource {
    /// All workouts for `owner`.
    fn workouts_for_owner(
        &self,
        owner: &str,
    ) -> impl Future<Output = Result<Vec<WorkoutEntry>>> + Send;

    /// All nutrition entries for `owner`.
    fn nutrition_for_owner(
        &self,
        owner: &str,
    ) -> impl Future<Output = Result<Vec<NutritionEntry>>> + Send;

    /// The `limit` most recent nutrition entries for `owner`.
    fn recent_nutrition_for_owner(
        &self,
        owner: &str,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<NutritionEntry>>> + Send;
}

/// Chart series for one timeframe.
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    pub timeframe: Timeframe,
    pub workouts: Vec<DayBucket>,
    pub nutrition: Vec<DayBucket>,
}

/// Load an owner's records and compute the dashboard figures.
pub async fn load_dashboard<S: RecordSource>(
    source: &S,
    owner: &str,
    now: DateTime<Utc>,
    calorie_window: usize,
) -> Result<DerivedStats> {
    let (workouts, nutrition) = tokio::try_join!(
        source.workouts_for_owner(owner),
        source.recent_nutrition_for_owner(owner, calorie_window),
    )?;

    tracing::debug!(
        owner,
        workouts = workouts.len(),
        meals = nutrition.len(),
        "Computing dashboard stats"
    );

    Ok(stats::derive_stats_at(
        &workouts,
        &nutrition,
        calorie_window,
        now,
    ))
}

/// Load an owner's records and bucket them per day for the chosen timeframe.
pub async fn load_progress<S: RecordSource>(
    source: &S,
    owner: &str,
    timeframe: Timeframe,
    now: DateTime<Utc>,
) -> Result<Progress> {
    let (workouts, nutrition) = tokio::try_join!(
        source.workouts_for_owner(owner),
        source.nutrition_for_owner(owner),
    )?;

    let start = timeframe.start(now);
    let workouts = stats::workout_duration_buckets(&workouts, start);
    let nutrition = stats::nutrition_calorie_buckets(&nutrition, start);

    tracing::debug!(
        owner,
        timeframe = ?timeframe,
        workout_days = workouts.len(),
        nutrition_days = nutrition.len(),
        "Computed progress buckets"
    );

    Ok(Progress {
        timeframe,
        workouts: workouts.into_values().collect(),
        nutrition: nutrition.into_values().collect(),
    })
}
