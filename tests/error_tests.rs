// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::StatusCode;
use axum::response::IntoResponse;
use fitness_tracker::error::AppError;
use fitness_tracker::models::WorkoutInput;
use serde_json::Value;
use validator::Validate;

async fn body_json(err: AppError) -> (StatusCode, Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_status_mapping() {
    let (status, body) = body_json(AppError::Unauthorized).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "unauthorized");
    assert!(body.get("details").is_none());

    let (status, body) = body_json(AppError::NotFound("Workout abc not found".into())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["details"], "Workout abc not found");

    let (status, body) = body_json(AppError::BadRequest("nope".into())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_server_errors_hide_details() {
    let (status, body) = body_json(AppError::Database("connection reset".into())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "database_error");
    assert!(body.get("details").is_none());

    let (status, body) = body_json(anyhow::anyhow!("secret internals").into()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "internal_error");
    assert!(body.get("details").is_none());
}

#[test]
fn test_validation_errors_list_fields_sorted() {
    let input = WorkoutInput {
        workout_type: String::new(),
        duration: 0,
        intensity: Default::default(),
        date: "2026-10-17".to_string(),
    };

    match input.into_entry("uid-1") {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Invalid fields: duration, type"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_validation_errors_without_renames_use_field_names() {
    let input = WorkoutInput {
        workout_type: String::new(),
        duration: 0,
        intensity: Default::default(),
        date: "2026-10-17".to_string(),
    };

    let err: AppError = input.validate().unwrap_err().into();
    match err {
        AppError::BadRequest(msg) => {
            assert_eq!(msg, "Invalid fields: duration, workout_type")
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
