// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for reader profiles and engagement stats.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{ReadingHistoryEntry, Role, User, UserStats};
use crate::services::EngagementEvaluator;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::{Validate, ValidationError};

/// Routes readable without a session.
pub fn public_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/users/{user_id}/stats", get(get_user_stats))
}

/// Routes acting on the session user.
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn session_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/me", get(get_me))
        .route("/api/me/stats", get(get_my_stats))
        .route("/api/me/history", post(record_reading))
}

/// Reject IDs that could not have been minted by the platform.
fn validate_id_chars(id: &str) -> std::result::Result<(), ValidationError> {
    if id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_id_chars"))
    }
}

// ─── Stats ───────────────────────────────────────────────────

#[derive(Deserialize, Validate)]
struct UserPath {
    #[validate(length(min = 1, max = 64), custom(function = "validate_id_chars"))]
    user_id: String,
}

/// Stats response body.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct StatsResponse {
    pub stats: UserStats,
}

/// Get engagement stats for any user.
async fn get_user_stats(
    State(state): State<Arc<AppState>>,
    Path(path): Path<UserPath>,
) -> Result<Json<StatsResponse>> {
    path.validate()?;

    let stats = load_stats(&state, &path.user_id).await?;
    Ok(Json(StatsResponse { stats }))
}

/// Get engagement stats for the session user.
async fn get_my_stats(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<StatsResponse>> {
    let stats = load_stats(&state, &user.user_id).await?;
    Ok(Json(StatsResponse { stats }))
}

/// Fetch the user document and evaluate it against the current time.
async fn load_stats(state: &AppState, user_id: &str) -> Result<UserStats> {
    let user = state.db.get_user(user_id).await?;
    build_stats(&state.evaluator, user_id, user, chrono::Utc::now())
}

/// Turn a fetched user document into the stats payload.
fn build_stats(
    evaluator: &EngagementEvaluator,
    user_id: &str,
    user: Option<User>,
    now: chrono::DateTime<chrono::Utc>,
) -> Result<UserStats> {
    let user = user.ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

    let engagement = evaluator.evaluate(&user.activity_record(), now);

    tracing::debug!(
        user_id,
        streak = engagement.reading_streak_days,
        achievements = ?engagement
            .achievements
            .iter()
            .map(|a| a.id())
            .collect::<Vec<_>>(),
        "Computed engagement stats"
    );

    Ok(UserStats::new(&user, engagement))
}

// ─── User Profile ────────────────────────────────────────────

/// Current user response.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UserResponse {
    pub user_id: String,
    pub username: String,
    pub role: Role,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub coins: u64,
}

/// Get current user profile.
async fn get_me(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<UserResponse>> {
    let profile = state
        .db
        .get_user(&user.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user.user_id)))?;

    Ok(Json(UserResponse {
        user_id: profile.user_id,
        username: profile.username,
        role: profile.role,
        coins: profile.coins,
    }))
}

// ─── Reading History ─────────────────────────────────────────

/// A reading event reported by the client.
#[derive(Debug, Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RecordReadingRequest {
    #[validate(length(min = 1, max = 64), custom(function = "validate_id_chars"))]
    pub manga_id: String,
    #[validate(length(min = 1, max = 64), custom(function = "validate_id_chars"))]
    pub chapter_id: Option<String>,
    #[validate(length(max = 200))]
    pub manga_title: Option<String>,
    #[validate(range(min = 0.0))]
    pub chapter_number: Option<f64>,
}

impl RecordReadingRequest {
    /// Stamp the event with the server clock.
    fn into_entry(self, timestamp: chrono::DateTime<chrono::Utc>) -> ReadingHistoryEntry {
        ReadingHistoryEntry {
            timestamp,
            manga_id: self.manga_id,
            chapter_id: self.chapter_id,
            manga_title: self.manga_title,
            chapter_number: self.chapter_number,
        }
    }
}

/// Append a reading event to the session user's history.
async fn record_reading(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<RecordReadingRequest>,
) -> Result<(StatusCode, Json<ReadingHistoryEntry>)> {
    request.validate()?;

    let entry = request.into_entry(chrono::Utc::now());

    if !state
        .db
        .record_reading(&user.user_id, &entry)
        .await?
    {
        return Err(AppError::NotFound(format!(
            "User {} not found",
            user.user_id
        )));
    }

    Ok((StatusCode::CREATED, Json(entry)))
}
