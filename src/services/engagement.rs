// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reading-streak, achievement and recent-activity evaluation.
//!
//! Everything here is a pure function of the [`ActivityRecord`] and the
//! caller-supplied `now`, so results are reproducible in tests and safe
//! to compute concurrently from any number of handlers.

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};

use crate::models::{
    Achievement, ActivityKind, ActivityRecord, EngagementResult, ReadingHistoryEntry,
    RecentActivity,
};
use crate::time_utils::{calendar_date, days_between};

/// Streak length that unlocks [`Achievement::ReadingStreak`].
pub const STREAK_ACHIEVEMENT_DAYS: u32 = 7;
/// Bookmarks needed for [`Achievement::BookmarkMaster`].
pub const BOOKMARK_MASTER_COUNT: usize = 50;
/// Follows needed for [`Achievement::SocialButterfly`].
pub const SOCIAL_BUTTERFLY_COUNT: usize = 10;
/// History entries needed for [`Achievement::TopReader`].
pub const TOP_READER_COUNT: usize = 100;
/// Number of history entries projected into the recent-activity feed.
pub const RECENT_ACTIVITY_LIMIT: usize = 10;

const UNKNOWN_TITLE: &str = "Unknown";
const UNKNOWN_CHAPTER: &str = "N/A";

/// Computes engagement stats against a fixed calendar offset.
#[derive(Debug, Clone, Copy)]
pub struct EngagementEvaluator {
    offset: FixedOffset,
}

impl Default for EngagementEvaluator {
    fn default() -> Self {
        Self::new(Utc.fix())
    }
}

impl EngagementEvaluator {
    /// `offset` decides where one reading day ends and the next begins.
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Evaluate streak, achievements and recent activity for one user.
    pub fn evaluate(&self, record: &ActivityRecord<'_>, now: DateTime<Utc>) -> EngagementResult {
        let reading_streak_days = self.reading_streak(
            record.reading_history.iter().map(|entry| entry.timestamp),
            now,
        );

        EngagementResult {
            reading_streak_days,
            achievements: evaluate_achievements(record, reading_streak_days),
            recent_activity: project_recent_activity(record.reading_history),
        }
    }

    /// Count consecutive reading days ending today or yesterday.
    ///
    /// Timestamps may arrive in any order and with several per day. The walk
    /// starts at today's date and accepts each older date while it is at most
    /// one day before the previously accepted one. Dates after today (clock
    /// skew) are ignored.
    pub fn reading_streak<I>(&self, timestamps: I, now: DateTime<Utc>) -> u32
    where
        I: IntoIterator<Item = DateTime<Utc>>,
    {
        let today = calendar_date(now, self.offset);

        let mut dates: Vec<NaiveDate> = timestamps
            .into_iter()
            .map(|ts| calendar_date(ts, self.offset))
            .filter(|date| *date <= today)
            .collect();
        dates.sort_unstable_by(|a, b| b.cmp(a));
        dates.dedup();

        let mut cursor = today;
        let mut streak = 0;

        for date in dates {
            if days_between(cursor, date) > 1 {
                break;
            }
            streak += 1;
            cursor = date;
        }

        streak
    }
}

/// Collect every achievement whose threshold the record meets.
///
/// Rules are independent; the result lists them in a fixed order.
pub fn evaluate_achievements(record: &ActivityRecord<'_>, streak_days: u32) -> Vec<Achievement> {
    let history_len = record.reading_history.len();

    let rules = [
        (Achievement::FirstRead, history_len > 0),
        (Achievement::FirstLike, record.like_count > 0),
        (Achievement::FirstComment, record.comment_count > 0),
        (
            Achievement::ReadingStreak,
            streak_days >= STREAK_ACHIEVEMENT_DAYS,
        ),
        (
            Achievement::BookmarkMaster,
            record.bookmark_count >= BOOKMARK_MASTER_COUNT,
        ),
        (
            Achievement::SocialButterfly,
            record.following_count >= SOCIAL_BUTTERFLY_COUNT,
        ),
        (Achievement::TopReader, history_len >= TOP_READER_COUNT),
        (
            Achievement::PremiumMember,
            record.coin_balance > 0 || record.role.is_privileged(),
        ),
    ];

    rules
        .into_iter()
        .filter_map(|(achievement, unlocked)| unlocked.then_some(achievement))
        .collect()
}

/// Summarize the newest history entries for display.
pub fn project_recent_activity(history: &[ReadingHistoryEntry]) -> Vec<RecentActivity> {
    history
        .iter()
        .take(RECENT_ACTIVITY_LIMIT)
        .map(|entry| {
            let title = entry.manga_title.as_deref().unwrap_or(UNKNOWN_TITLE);

            let (kind, description) = if entry.chapter_id.is_some() {
                let chapter = entry
                    .chapter_number
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| UNKNOWN_CHAPTER.to_string());
                (
                    ActivityKind::Read,
                    format!("Read chapter {chapter} of {title}"),
                )
            } else {
                (ActivityKind::View, format!("Viewed {title}"))
            };

            RecentActivity {
                kind,
                description,
                timestamp: entry.timestamp,
                manga_id: entry.manga_id.clone(),
                chapter_id: entry.chapter_id.clone(),
            }
        })
        .collect()
}
