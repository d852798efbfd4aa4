// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Nutrition log routes.

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::{NutritionEntry, NutritionInput};
use crate::routes::validate_document_id;
use crate::services::stats::calories_on;
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
        .route("/api/nutrition", get(list_nutrition).post(create_nutrition))
        .route(
            "/api/nutrition/{id}",
            put(update_nutrition).delete(delete_nutrition),
        )
}

#[derive(Serialize, Clone, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct NutritionSummary {
    pub id: String,
    pub meal_name: String,
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fats: u32,
    pub date: Option<String>,
}

impl From<NutritionEntry> for NutritionSummary {
    fn from(entry: NutritionEntry) -> Self {
        Self {
            id: entry.id.unwrap_or_default(),
            meal_name: entry.meal_name,
            calories: entry.calories,
            protein: entry.protein,
            carbs: entry.carbs,
            fats: entry.fats,
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
pub struct NutritionResponse {
    pub entries: Vec<NutritionSummary>,
    /// Calories logged today (UTC)
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub today_calories: u64,
}

/// List the current user's meals, newest first, with today's calorie total.
async fn list_nutrition(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<NutritionResponse>> {
    let entries = state.db.list_nutrition(&user.user_id).await?;
    let today_calories = calories_on(&entries, utc_day(chrono::Utc::now()));

    tracing::debug!(
        owner = %user.user_id,
        count = entries.len(),
        today_calories,
        "Listed nutrition entries"
    );

    Ok(Json(NutritionResponse {
        entries: entries.into_iter().map(Into::into).collect(),
        today_calories,
    }))
}

/// Log a new meal.
async fn create_nutrition(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(input): Json<NutritionInput>,
) -> Result<(StatusCode, Json<NutritionSummary>)> {
    let entry = input.into_entry(&user.user_id)?;
    let created = state.db.create_nutrition(&entry).await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Replace one of the current user's meals.
async fn update_nutrition(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(input): Json<NutritionInput>,
) -> Result<Json<NutritionSummary>> {
    validate_document_id(&id)?;
    let entry = input.into_entry(&user.user_id)?;
    let updated = state.db.update_nutrition(&user.user_id, &id, &entry).await?;

    Ok(Json(updated.into()))
}

/// Delete one of the current user's meals.
async fn delete_nutrition(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    validate_document_id(&id)?;
    state.db.delete_nutrition(&user.user_id, &id).await?;

    Ok(StatusCode::NO_CONTENT)
}
