//! Per-user stats payload combining raw counters with derived engagement.
//!
//! Nothing here is persisted: stats are rebuilt from the user document on
//! every request.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{Achievement, EngagementResult, RecentActivity, User};

/// Stats shown on a reader's profile.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UserStats {
    // ─── Raw Counts ──────────────────────────────────────────────
    /// Length of the reading history
    pub total_reads: usize,
    pub bookmarks: usize,
    pub likes: usize,
    pub comments: usize,
    pub followers: usize,
    pub following: usize,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub coins: u64,

    // ─── Engagement ──────────────────────────────────────────────
    /// Consecutive days with reading activity
    pub reading_streak: u32,
    pub achievements: Vec<Achievement>,
    pub recent_activity: Vec<RecentActivity>,
}

impl UserStats {
    /// Combine a user's raw counters with an evaluation of the same user.
    pub fn new(user: &User, engagement: EngagementResult) -> Self {
        Self {
            total_reads: user.reading_history.len(),
            bookmarks: user.bookmarks.len(),
            likes: user.likes.len(),
            comments: user.comments.len(),
            followers: user.followers.len(),
            following: user.following.len(),
            coins: user.coins,
            reading_streak: engagement.reading_streak_days,
            achievements: engagement.achievements,
            recent_activity: engagement.recent_activity,
        }
    }
}
