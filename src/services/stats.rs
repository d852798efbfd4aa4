// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Derived statistics over an owner's workout and nutrition records.
//!
//! Every function here is pure: inputs are borrowed immutably, dates are
//! normalized into new `NaiveDate` values, and nothing is cached between
//! calls. Callers hand in records already filtered to a single owner.
//!
//! Records without a usable date are skipped rather than treated as errors.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::models::{DatedRecord, DayBucket, DerivedStats, NutritionEntry, WorkoutEntry};
use crate::time_utils::{date_key, utc_day};

/// Trailing window for the "this week" workout count.
const WEEK_DAYS: i64 = 7;

// ─── Streak ──────────────────────────────────────────────────

/// Current workout streak as of today (UTC).
pub fn compute_streak<R: DatedRecord>(records: &[R]) -> u32 {
    compute_streak_at(records, utc_day(Utc::now()))
}

/// Number of consecutive days, counting back from `today`, with a record.
///
/// `records` must be ordered newest first. The scan stops at the first dated
/// record whose day offset from `today` differs from the running count, so a
/// missing today, a gap, or a future-dated record all end it.
///
/// Two records on the same day end the scan as well: the second one has the
/// offset of the day already counted, not the next one expected.
pub fn compute_streak_at<R: DatedRecord>(records: &[R], today: NaiveDate) -> u32 {
    let mut streak: u32 = 0;

    for day in records.iter().filter_map(|record| record.occurred_at()).map(utc_day) {
        let diff_days = (today - day).num_days();
        if diff_days != i64::from(streak) {
            break;
        }
        streak += 1;
    }

    streak
}

// ─── Counts & Sums ───────────────────────────────────────────

/// Records dated strictly after `reference - 7 days`.
pub fn weekly_workout_count<R: DatedRecord>(records: &[R], reference: DateTime<Utc>) -> u32 {
    let cutoff = reference - Duration::days(WEEK_DAYS);
    let count = records
        .iter()
        .filter_map(|record| record.occurred_at())
        .filter(|date| *date > cutoff)
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Calories over the first `limit` entries in the order given.
///
/// The window is positional, not date-based: it covers whatever the caller
/// fetched, dated or not.
pub fn aggregate_calories(entries: &[NutritionEntry], limit: usize) -> u64 {
    entries
        .iter()
        .take(limit)
        .map(|entry| u64::from(entry.calories))
        .sum()
}

/// Calories logged on a single calendar day.
pub fn calories_on(entries: &[NutritionEntry], day: NaiveDate) -> u64 {
    entries
        .iter()
        .filter(|entry| entry.occurred_at().map(utc_day) == Some(day))
        .map(|entry| u64::from(entry.calories))
        .sum()
}

// ─── Chart Buckets ───────────────────────────────────────────

/// Group records dated at or after `start` into one bucket per calendar day.
///
/// Only days with at least one record appear; missing days are not filled
/// with zeros. Keys are `YYYY-MM-DD`, so iteration order is chronological.
pub fn bucket_by_date<R, F>(
    records: &[R],
    start: DateTime<Utc>,
    value: F,
) -> BTreeMap<String, DayBucket>
where
    R: DatedRecord,
    F: Fn(&R) -> u64,
{
    let mut buckets: BTreeMap<String, DayBucket> = BTreeMap::new();

    for record in records {
        let Some(date) = record.occurred_at() else {
            continue;
        };
        if date < start {
            continue;
        }

        let key = date_key(utc_day(date));
        let bucket = buckets.entry(key.clone()).or_insert_with(|| DayBucket {
            date: key,
            ..DayBucket::default()
        });
        bucket.count += 1;
        bucket.total += value(record);
    }

    buckets
}

/// Workout minutes per day since `start`.
pub fn workout_duration_buckets(
    workouts: &[WorkoutEntry],
    start: DateTime<Utc>,
) -> BTreeMap<String, DayBucket> {
    bucket_by_date(workouts, start, |w| u64::from(w.duration))
}

/// Calories per day since `start`.
pub fn nutrition_calorie_buckets(
    entries: &[NutritionEntry],
    start: DateTime<Utc>,
) -> BTreeMap<String, DayBucket> {
    bucket_by_date(entries, start, |n| u64::from(n.calories))
}

// ─── Dashboard ───────────────────────────────────────────────

/// Dashboard figures as of now.
pub fn derive_stats(
    workouts: &[WorkoutEntry],
    nutrition: &[NutritionEntry],
    calorie_window: usize,
) -> DerivedStats {
    derive_stats_at(workouts, nutrition, calorie_window, Utc::now())
}

/// Dashboard figures as of `now`.
///
/// `workouts` must be newest first; `total_workouts` counts every record
/// supplied, including ones without a date.
pub fn derive_stats_at(
    workouts: &[WorkoutEntry],
    nutrition: &[NutritionEntry],
    calorie_window: usize,
    now: DateTime<Utc>,
) -> DerivedStats {
    DerivedStats {
        current_streak: compute_streak_at(workouts, utc_day(now)),
        workouts_this_week: weekly_workout_count(workouts, now),
        calories_logged: aggregate_calories(nutrition, calorie_window),
        total_workouts: u32::try_from(workouts.len()).unwrap_or(u32::MAX),
    }
}
