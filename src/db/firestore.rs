// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Provides owner-scoped operations for:
//! - Workouts (`workouts` collection)
//! - Nutrition entries (`nutrition` collection)
//!
//! Listing queries filter on `userId` and order by `date` descending, which
//! needs the matching composite index on each collection.

use crate::db::collections;
use crate::error::AppError;
use crate::models::{NutritionEntry, WorkoutEntry};
use crate::services::records::RecordSource;
use serde::{de::DeserializeOwned, Serialize};

/// A document that belongs to exactly one owner.
trait OwnedDocument: Serialize + DeserializeOwned + Send + Sync {
    const COLLECTION: &'static str;
    const KIND: &'static str;

    fn owner(&self) -> &str;
}

impl OwnedDocument for WorkoutEntry {
    const COLLECTION: &'static str = collections::WORKOUTS;
    const KIND: &'static str = "Workout";

    fn owner(&self) -> &str {
        &self.user_id
    }
}

impl OwnedDocument for NutritionEntry {
    const COLLECTION: &'static str = collections::NUTRITION;
    const KIND: &'static str = "Nutrition entry";

    fn owner(&self) -> &str {
        &self.user_id
    }
}

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    // ─── Workout Operations ──────────────────────────────────────

    /// All workouts for an owner, newest first.
    pub async fn list_workouts(&self, owner: &str) -> Result<Vec<WorkoutEntry>, AppError> {
        self.list_for_owner(owner, None).await
    }

    /// Store a new workout and return it with its document ID.
    pub async fn create_workout(&self, entry: &WorkoutEntry) -> Result<WorkoutEntry, AppError> {
        self.insert(entry).await
    }

    /// Replace a workout owned by `owner`.
    pub async fn update_workout(
        &self,
        owner: &str,
        id: &str,
        entry: &WorkoutEntry,
    ) -> Result<WorkoutEntry, AppError> {
        self.replace_owned(owner, id, entry).await
    }

    /// Delete a workout owned by `owner`.
    pub async fn delete_workout(&self, owner: &str, id: &str) -> Result<(), AppError> {
        self.delete_owned::<WorkoutEntry>(owner, id).await
    }

    // ─── Nutrition Operations ────────────────────────────────────

    /// All nutrition entries for an owner, newest first.
    pub async fn list_nutrition(&self, owner: &str) -> Result<Vec<NutritionEntry>, AppError> {
        self.list_for_owner(owner, None).await
    }

    /// The `limit` most recent nutrition entries for an owner.
    pub async fn list_recent_nutrition(
        &self,
        owner: &str,
        limit: usize,
    ) -> Result<Vec<NutritionEntry>, AppError> {
        let limit = u32::try_from(limit).unwrap_or(u32::MAX);
        self.list_for_owner(owner, Some(limit)).await
    }

    /// Store a new nutrition entry and return it with its document ID.
    pub async fn create_nutrition(
        &self,
        entry: &NutritionEntry,
    ) -> Result<NutritionEntry, AppError> {
        self.insert(entry).await
    }

    /// Replace a nutrition entry owned by `owner`.
    pub async fn update_nutrition(
        &self,
        owner: &str,
        id: &str,
        entry: &NutritionEntry,
    ) -> Result<NutritionEntry, AppError> {
        self.replace_owned(owner, id, entry).await
    }

    /// Delete a nutrition entry owned by `owner`.
    pub async fn delete_nutrition(&self, owner: &str, id: &str) -> Result<(), AppError> {
        self.delete_owned::<NutritionEntry>(owner, id).await
    }

    // ─── Helper Methods ────────────────────────────────────────────

    async fn list_for_owner<T: OwnedDocument>(
        &self,
        owner: &str,
        limit: Option<u32>,
    ) -> Result<Vec<T>, AppError> {
        let query = self
            .get_client()?
            .fluent()
            .select()
            .from(T::COLLECTION)
            .filter(|q| q.field("userId").eq(owner))
            .order_by([("date", firestore::FirestoreQueryDirection::Descending)]);

        let query = match limit {
            Some(limit) => query.limit(limit),
            None => query,
        };

        let docs = query
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(decode_documents(docs))
    }

    async fn get_by_id<T: OwnedDocument>(&self, id: &str) -> Result<Option<T>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(T::COLLECTION)
            .obj()
            .one(id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Load a document and confirm it belongs to `owner`.
    ///
    /// Another owner's document is reported as missing.
    async fn require_owned<T: OwnedDocument>(&self, owner: &str, id: &str) -> Result<T, AppError> {
        match self.get_by_id::<T>(id).await? {
            Some(doc) if doc.owner() == owner => Ok(doc),
            Some(_) => {
                tracing::warn!(
                    owner,
                    id,
                    kind = T::KIND,
                    "Rejected access to another owner's document"
                );
                Err(AppError::NotFound(format!("{} {} not found", T::KIND, id)))
            }
            None => Err(AppError::NotFound(format!("{} {} not found", T::KIND, id))),
        }
    }

    async fn insert<T: OwnedDocument>(&self, entry: &T) -> Result<T, AppError> {
        let created: T = self
            .get_client()?
            .fluent()
            .insert()
            .into(T::COLLECTION)
            .generate_document_id()
            .object(entry)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        tracing::info!(owner = entry.owner(), kind = T::KIND, "Document created");
        Ok(created)
    }

    async fn replace_owned<T: OwnedDocument>(
        &self,
        owner: &str,
        id: &str,
        entry: &T,
    ) -> Result<T, AppError> {
        self.require_owned::<T>(owner, id).await?;

        let updated: T = self
            .get_client()?
            .fluent()
            .update()
            .in_col(T::COLLECTION)
            .precondition(firestore::FirestoreWritePrecondition::Exists(true))
            .document_id(id)
            .object(entry)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        tracing::info!(owner, id, kind = T::KIND, "Document updated");
        Ok(updated)
    }

    async fn delete_owned<T: OwnedDocument>(&self, owner: &str, id: &str) -> Result<(), AppError> {
        self.require_owned::<T>(owner, id).await?;

        self.get_client()?
            .fluent()
            .delete()
            .from(T::COLLECTION)
            .document_id(id)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        tracing::info!(owner, id, kind = T::KIND, "Document deleted");
        Ok(())
    }
}

/// Decode listed documents one at a time.
///
/// A document that does not fit the model (a string date, a negative count)
/// is logged and left out instead of failing the whole listing.
fn decode_documents<T: OwnedDocument>(docs: Vec<firestore::FirestoreDocument>) -> Vec<T> {
    docs.iter()
        .filter_map(
            |doc| match firestore::FirestoreDb::deserialize_doc_to::<T>(doc) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!(
                        document = %doc.name,
                        kind = T::KIND,
                        error = %e,
                        "Skipping malformed document"
                    );
                    None
                }
            },
        )
        .collect()
}

impl RecordSource for FirestoreDb {
    async fn workouts_for_owner(&self, owner: &str) -> Result<Vec<WorkoutEntry>, AppError> {
        self.list_workouts(owner).await
    }

    async fn nutrition_for_owner(&self, owner: &str) -> Result<Vec<NutritionEntry>, AppError> {
        self.list_nutrition(owner).await
    }

    async fn recent_nutrition_for_owner(
        &self,
        owner: &str,
        limit: usize,
    ) -> Result<Vec<NutritionEntry>, AppError> {
        self.list_recent_nutrition(owner, limit).await
    }
}
