// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout log model for storage and API input.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::stats::DatedRecord;
use crate::time_utils::parse_date_key;

/// Longest workout accepted from the API (one full day, in minutes).
pub const MAX_DURATION_MINUTES: u32 = 24 * 60;

/// Perceived effort of a workout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    #[default]
    Medium,
    High,
}

/// Stored workout record in Firestore.
///
/// Field names follow the camelCase document shape written by the web client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutEntry {
    /// Firestore document ID (populated on reads, never written)
    #[serde(default, alias = "_firestore_id", skip_serializing)]
    pub id: Option<String>,
    /// Owner identifier
    pub user_id: String,
    /// Free-text activity type (Running, Yoga, ...)
    #[serde(rename = "type")]
    pub workout_type: String,
    /// Duration in minutes
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub intensity: Intensity,
    /// Occurrence date (UTC midnight); `None` for malformed documents
    #[serde(default, with = "firestore::serialize_as_optional_timestamp")]
    pub date: Option<DateTime<Utc>>,
}

impl DatedRecord for WorkoutEntry {
    fn occurred_at(&self) -> Option<DateTime<Utc>> {
        self.date
    }
}

/// Workout as submitted by the client for create/update.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WorkoutInput {
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 100))]
    pub workout_type: String,
    #[validate(range(min = 1, max = 1440))]
    pub duration: u32,
    #[serde(default)]
    pub intensity: Intensity,
    /// Calendar date as `YYYY-MM-DD`
    pub date: String,
}

impl WorkoutInput {
    /// Validate the input and build the record owned by `owner`.
    pub fn into_entry(self, owner: &str) -> Result<WorkoutEntry> {
        self.validate()
            .map_err(|e| AppError::invalid_fields(&e, &[("workout_type", "type")]))?;

        let workout_type = self.workout_type.trim().to_string();
        if workout_type.is_empty() {
            return Err(AppError::BadRequest("Workout type is required".to_string()));
        }

        let date = parse_date_key(&self.date).ok_or_else(|| {
            AppError::BadRequest("Invalid 'date': must be YYYY-MM-DD".to_string())
        })?;

        Ok(WorkoutEntry {
            id: None,
            user_id: owner.to_string(),
            workout_type,
            duration: self.duration,
            intensity: self.intensity,
            date: Some(date),
        })
    }
}
