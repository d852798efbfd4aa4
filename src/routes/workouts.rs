// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout log routes.

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::{Intensity, WorkoutEntry, WorkoutInput};
use crate::routes::validate_document_id;
use crate::time_utils::{date_key, utc_day};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Extension, Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/workouts", get(list_workouts).post(create_workout))
        .route(
            "/api/workouts/{id}",
            put(update_workout).delete(delete_workout),
        )
}

#[derive(Serialize, Clone, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutSummary {
    pub id: String,
    #[serde(rename = "type")]
    pub workout_type: String,
    pub duration: u32,
    pub intensity: Intensity,
    /// `YYYY-MM-DD`, absent for records without a date
    pub date: Option<String>,
}

impl From<WorkoutEntry> for WorkoutSummary {
    fn from(entry: WorkoutEntry) -> Self {
        Self {
            id: entry.id.unwrap_or_default(),
            workout_type: entry.workout_type,
            duration: entry.duration,
            intensity: entry.intensity,
            date: entry.date.map(|d| date_key(utc_day(d))),
        }
    }
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutsResponse {
    pub workouts: Vec<WorkoutSummary>,
}

/// List the current user's workouts, newest first.
async fn list_workouts(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<WorkoutsResponse>> {
    let workouts = state.db.list_workouts(&user.user_id).await?;

    tracing::debug!(owner = %user.user_id, count = workouts.len(), "Listed workouts");

    Ok(Json(WorkoutsResponse {
        workouts: workouts.into_iter().map(Into::into).collect(),
    }))
}

/// Log a new workout.
async fn create_workout(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(input): Json<WorkoutInput>,
) -> Result<(StatusCode, Json<WorkoutSummary>)> {
    let entry = input.into_entry(&user.user_id)?;
    let created = state.db.create_workout(&entry).await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Replace one of the current user's workouts.
async fn update_workout(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(input): Json<WorkoutInput>,
) -> Result<Json<WorkoutSummary>> {
    validate_document_id(&id)?;
    let entry = input.into_entry(&user.user_id)?;
    let updated = state.db.update_workout(&user.user_id, &id, &entry).await?;

    Ok(Json(updated.into()))
}

/// Delete one of the current user's workouts.
async fn delete_workout(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    validate_document_id(&id)?;
    state.db.delete_workout(&user.user_id, &id).await?;

    Ok(StatusCode::NO_CONTENT)
}
