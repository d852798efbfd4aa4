// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Nutrition (meal) log model for storage and API input.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::stats::DatedRecord;
use crate::time_utils::parse_date_key;

/// Stored meal record in Firestore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionEntry {
    /// Firestore document ID (populated on reads, never written)
    #[serde(default, alias = "_firestore_id", skip_serializing)]
    pub id: Option<String>,
    /// Owner identifier
    pub user_id: String,
    pub meal_name: String,
    #[serde(default)]
    pub calories: u32,
    /// Macros in grams
    #[serde(default)]
    pub protein: u32,
    #[serde(default)]
    pub carbs: u32,
    #[serde(default)]
    pub fats: u32,
    /// Occurrence date (UTC midnight); `None` for malformed documents
    #[serde(default, with = "firestore::serialize_as_optional_timestamp")]
    pub date: Option<DateTime<Utc>>,
}

impl DatedRecord for NutritionEntry {
    fn occurred_at(&self) -> Option<DateTime<Utc>> {
        self.date
    }
}

/// Meal as submitted by the client for create/update.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NutritionInput {
    #[validate(length(min = 1, max = 100))]
    pub meal_name: String,
    #[validate(range(max = 20000))]
    pub calories: u32,
    #[serde(default)]
    #[validate(range(max = 2000))]
    pub protein: u32,
    #[serde(default)]
    #[validate(range(max = 2000))]
    pub carbs: u32,
    #[serde(default)]
    #[validate(range(max = 2000))]
    pub fats: u32,
    /// Calendar date as `YYYY-MM-DD`
    pub date: String,
}

impl NutritionInput {
    /// Validate the input and build the record owned by `owner`.
    pub fn into_entry(self, owner: &str) -> Result<NutritionEntry> {
        self.validate()?;

        let meal_name = self.meal_name.trim().to_string();
        if meal_name.is_empty() {
            return Err(AppError::BadRequest("Meal name is required".to_string()));
        }

        let date = parse_date_key(&self.date).ok_or_else(|| {
            AppError::BadRequest("Invalid 'date': must be YYYY-MM-DD".to_string())
        })?;

        Ok(NutritionEntry {
            id: None,
            user_id: owner.to_string(),
            meal_name,
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fats: self.fats,
            date: Some(date),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macros_default_to_zero() {
        let parsed: NutritionInput = serde_json::from_value(serde_json::json!({
            "meal_name": "Lunch",
            "calories": 650,
            "date": "2026-10-17"
        }))
        .unwrap();

        let entry = parsed.into_entry("uid-7").unwrap();
        assert_eq!(entry.user_id, "uid-7");
        assert_eq!(entry.calories, 650);
        assert_eq!((entry.protein, entry.carbs, entry.fats), (0, 0, 0));
        assert!(entry.date.is_some());
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let too_many = NutritionInput {
            meal_name: "Feast".to_string(),
            calories: 20001,
            protein: 0,
            carbs: 0,
            fats: 0,
            date: "2026-10-17".to_string(),
        };
        let err = too_many.into_entry("uid").unwrap_err();
        match err {
            AppError::BadRequest(msg) => assert!(msg.contains("calories")),
            other => panic!("unexpected error: {other:?}"),
        }

        let no_name = NutritionInput {
            meal_name: " ".to_string(),
            calories: 100,
            protein: 0,
            carbs: 0,
            fats: 0,
            date: "2026-10-17".to_string(),
        };
        assert!(matches!(
            no_name.into_entry("uid"),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_document_defaults() {
        let entry: NutritionEntry = serde_json::from_value(serde_json::json!({
            "userId": "uid-1",
            "mealName": "Snack"
        }))
        .unwrap();

        assert_eq!(entry.calories, 0);
        assert!(entry.date.is_none());
    }
}
