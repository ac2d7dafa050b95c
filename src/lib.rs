// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Engagement service: reading streaks and achievements for manga readers
//!
//! This crate provides the backend API that turns a reader's stored
//! activity (reading history, bookmarks, likes, follows, coins) into a
//! reading streak, unlocked achievements, and a recent-activity feed.

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
use services::EngagementEvaluator;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
    pub evaluator: EngagementEvaluator,
}
