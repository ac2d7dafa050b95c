// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod engagement;
pub mod stats;
pub mod user;

pub use engagement::{
    Achievement, ActivityKind, ActivityRecord, EngagementResult, RecentActivity,
};
pub use stats::UserStats;
pub use user::{ReadingHistoryEntry, Role, User};
