// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for user documents, which carry the
//! reading history and social counters the engagement stats are built from.

use crate::db::collections;
use crate::error::AppError;
use crate::models::{ReadingHistoryEntry, User};
use firestore::errors::{BackoffError, FirestoreError};

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
        // The emulator rejects real credentials, so skip the ADC lookup entirely.
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

    // ─── User Operations ─────────────────────────────────────────

    /// Get a user document by ID.
    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::USERS)
            .obj()
            .one(user_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create or replace a user document.
    pub async fn upsert_user(&self, user: &User) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::USERS)
            .document_id(&user.user_id)
            .object(user)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Delete a user document.
    pub async fn delete_user(&self, user_id: &str) -> Result<(), AppError> {
        self.get_client()?
            .fluent()
            .delete()
            .from(collections::USERS)
            .document_id(user_id)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    // ─── Reading History ─────────────────────────────────────────

    /// Prepend a reading event to a user's history.
    ///
    /// The read and the write share one transaction, so a concurrent event
    /// for the same user makes the commit conflict and the whole closure is
    /// retried with backoff instead of overwriting the other event.
    ///
    /// Returns `false` if the user does not exist (nothing is written).
    pub async fn record_reading(
        &self,
        user_id: &str,
        entry: &ReadingHistoryEntry,
    ) -> Result<bool, AppError> {
        let client = self.get_client()?;
        let owned_user_id = user_id.to_string();
        let owned_entry = entry.clone();

        let history_len = client
            .run_transaction(move |db, transaction| {
                let user_id = owned_user_id.clone();
                let entry = owned_entry.clone();

                Box::pin(async move {
                    let current: Option<User> = db
                        .fluent()
                        .select()
                        .by_id_in(collections::USERS)
                        .obj()
                        .one(&user_id)
                        .await?;

                    let Some(mut user) = current else {
                        return Ok::<_, BackoffError<FirestoreError>>(None);
                    };

                    user.record_reading(entry);

                    db.fluent()
                        .update()
                        .in_col(collections::USERS)
                        .document_id(&user_id)
                        .object(&user)
                        .add_to_transaction(transaction)?;

                    Ok(Some(user.reading_history.len()))
                })
            })
            .await
            .map_err(|e| {
                AppError::Database(format!("Reading history transaction failed: {}", e))
            })?;

        let Some(history_len) = history_len else {
            tracing::debug!(user_id, "User not found, skipping history write");
            return Ok(false);
        };

        tracing::info!(
            user_id,
            manga_id = %entry.manga_id,
            history_len,
            "Reading event recorded"
        );

        Ok(true)
    }
}
