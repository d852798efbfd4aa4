// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard and progress routes for authenticated users.

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::{DayBucket, DerivedStats, Timeframe};
use crate::services::records::{self, Progress};
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Stats routes (require authentication via JWT).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/progress", get(get_progress))
}

// ─── Dashboard ───────────────────────────────────────────────

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DashboardResponse {
    pub current_streak: u32,
    pub workouts_this_week: u32,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub calories_logged: u64,
    pub total_workouts: u32,
}

impl From<DerivedStats> for DashboardResponse {
    fn from(stats: DerivedStats) -> Self {
        Self {
            current_streak: stats.current_streak,
            workouts_this_week: stats.workouts_this_week,
            calories_logged: stats.calories_logged,
            total_workouts: stats.total_workouts,
        }
    }
}

/// Get dashboard figures for the current user.
async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<DashboardResponse>> {
    tracing::debug!(owner = %user.user_id, "Fetching dashboard");

    let stats = records::load_dashboard(
        &state.db,
        &user.user_id,
        chrono::Utc::now(),
        state.config.calorie_window,
    )
    .await?;

    Ok(Json(stats.into()))
}

// ─── Progress ────────────────────────────────────────────────

#[derive(Deserialize)]
struct ProgressQuery {
    /// `week` (default) or `month`
    #[serde(default)]
    timeframe: Timeframe,
}

#[derive(Serialize, Clone, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutPoint {
    pub date: String,
    pub count: u32,
    /// Minutes
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub duration: u64,
}

impl From<DayBucket> for WorkoutPoint {
    fn from(bucket: DayBucket) -> Self {
        Self {
            date: bucket.date,
            count: bucket.count,
            duration: bucket.total,
        }
    }
}

#[derive(Serialize, Clone, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct NutritionPoint {
    pub date: String,
    pub count: u32,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub calories: u64,
}

impl From<DayBucket> for NutritionPoint {
    fn from(bucket: DayBucket) -> Self {
        Self {
            date: bucket.date,
            count: bucket.count,
            calories: bucket.total,
        }
    }
}

/// Progress chart series. Days without records are absent, not zero.
#[derive(Serialize, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ProgressResponse {
    pub timeframe: Timeframe,
    pub workouts: Vec<WorkoutPoint>,
    pub nutrition: Vec<NutritionPoint>,
}

impl From<Progress> for ProgressResponse {
    fn from(progress: Progress) -> Self {
        Self {
            timeframe: progress.timeframe,
            workouts: progress.workouts.into_iter().map(Into::into).collect(),
            nutrition: progress.nutrition.into_iter().map(Into::into).collect(),
        }
    }
}

/// Get per-day workout and calorie series for the current user.
async fn get_progress(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<ProgressQuery>,
) -> Result<Json<ProgressResponse>> {
    tracing::debug!(
        owner = %user.user_id,
        timeframe = ?params.timeframe,
        "Fetching progress"
    );

    let progress = records::load_progress(
        &state.db,
        &user.user_id,
        params.timeframe,
        chrono::Utc::now(),
    )
    .await?;

    Ok(Json(progress.into()))
}
