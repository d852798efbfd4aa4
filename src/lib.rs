// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fitness tracker API: workout and meal logs with derived statistics
//!
//! Records live in Firestore; the dashboard streak, weekly counts, calorie
//! totals and progress chart series are computed on request from the
//! authenticated owner's records.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::FirestoreDb;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
}
