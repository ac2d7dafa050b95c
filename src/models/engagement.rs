// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Engagement evaluator input and output types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{ReadingHistoryEntry, Role};

/// Read-only view of the counters that drive engagement.
#[derive(Debug, Clone, Copy)]
pub struct ActivityRecord<'a> {
    /// Reading history, most recent first
    pub reading_history: &'a [ReadingHistoryEntry],
    pub bookmark_count: usize,
    pub following_count: usize,
    pub like_count: usize,
    pub comment_count: usize,
    pub coin_balance: u64,
    pub role: Role,
}

/// Badge unlocked by crossing an activity threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "snake_case")]
pub enum Achievement {
    FirstRead,
    FirstLike,
    FirstComment,
    ReadingStreak,
    BookmarkMaster,
    SocialButterfly,
    TopReader,
    PremiumMember,
}

impl Achievement {
    /// Stable identifier, identical to the serialized form.
    pub fn id(self) -> &'static str {
        match self {
            Achievement::FirstRead => "first_read",
            Achievement::FirstLike => "first_like",
            Achievement::FirstComment => "first_comment",
            Achievement::ReadingStreak => "reading_streak",
            Achievement::BookmarkMaster => "bookmark_master",
            Achievement::SocialButterfly => "social_butterfly",
            Achievement::TopReader => "top_reader",
            Achievement::PremiumMember => "premium_member",
        }
    }
}

/// Whether a history entry opened a chapter or only the series page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Read,
    View,
}

/// Display-ready summary of one history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RecentActivity {
    pub kind: ActivityKind,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub manga_id: String,
    pub chapter_id: Option<String>,
}

/// Everything the evaluator derives from an [`ActivityRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementResult {
    /// Consecutive calendar days with reading, ending today or yesterday
    pub reading_streak_days: u32,
    /// Unlocked achievements in evaluation order, each at most once
    pub achievements: Vec<Achievement>,
    /// Up to ten most recent history entries
    pub recent_activity: Vec<RecentActivity>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_achievement_id_matches_wire_format() {
        for achievement in [
            Achievement::FirstRead,
            Achievement::FirstLike,
            Achievement::FirstComment,
            Achievement::ReadingStreak,
            Achievement::BookmarkMaster,
            Achievement::SocialButterfly,
            Achievement::TopReader,
            Achievement::PremiumMember,
        ] {
            let json = serde_json::to_string(&achievement).unwrap();
            assert_eq!(json, format!("\"{}\"", achievement.id()));
        }
    }

    #[test]
    fn test_activity_kind_wire_format() {
        assert_eq!(serde_json::to_string(&ActivityKind::Read).unwrap(), r#""read""#);
        assert_eq!(serde_json::to_string(&ActivityKind::View).unwrap(), r#""view""#);
    }
}
