//! User model for storage and API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::ActivityRecord;

/// Account role on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Viewer,
    Creator,
    Admin,
}

impl Role {
    /// Creators and admins get premium perks without holding coins.
    pub fn is_privileged(self) -> bool {
        matches!(self, Role::Creator | Role::Admin)
    }
}

/// One entry in a reader's history, newest entries first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ReadingHistoryEntry {
    /// When the series or chapter was opened
    pub timestamp: DateTime<Utc>,
    /// Series ID
    pub manga_id: String,
    /// Chapter ID (None if only the series page was viewed)
    #[serde(default)]
    pub chapter_id: Option<String>,
    /// Series title at the time of reading
    #[serde(default)]
    pub manga_title: Option<String>,
    /// Chapter number (may be fractional, e.g. 10.5)
    #[serde(default)]
    pub chapter_number: Option<f64>,
}

/// User document stored in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User ID (also used as document ID)
    pub user_id: String,
    /// Display name
    pub username: String,
    #[serde(default)]
    pub role: Role,
    /// Reading history, most recent first
    #[serde(default)]
    pub reading_history: Vec<ReadingHistoryEntry>,
    /// Bookmarked series IDs
    #[serde(default)]
    pub bookmarks: Vec<String>,
    /// IDs of users following this user
    #[serde(default)]
    pub followers: Vec<String>,
    /// IDs of users this user follows
    #[serde(default)]
    pub following: Vec<String>,
    /// Liked chapter/series IDs
    #[serde(default)]
    pub likes: Vec<String>,
    /// Comment IDs authored by this user
    #[serde(default)]
    pub comments: Vec<String>,
    /// Coin balance used for tipping creators
    #[serde(default)]
    pub coins: u64,
    /// When the account was created (ISO 8601)
    #[serde(default)]
    pub created_at: String,
}

impl User {
    /// Borrow the counters the engagement evaluator needs.
    pub fn activity_record(&self) -> ActivityRecord<'_> {
        ActivityRecord {
            reading_history: &self.reading_history,
            bookmark_count: self.bookmarks.len(),
            following_count: self.following.len(),
            like_count: self.likes.len(),
            comment_count: self.comments.len(),
            coin_balance: self.coins,
            role: self.role,
        }
    }

    /// Record a reading event, keeping history newest-first.
    ///
    /// History is not capped. It lives inside the user document, which
    /// Firestore limits to 1 MiB, so writes for an extremely heavy reader
    /// eventually fail with a database error.
    pub fn record_reading(&mut self, entry: ReadingHistoryEntry) {
        self.reading_history.insert(0, entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_sparse_document_uses_defaults() {
        let user: User =
            serde_json::from_str(r#"{"user_id": "u1", "username": "reader"}"#).unwrap();

        assert_eq!(user.role, Role::Viewer);
        assert_eq!(user.coins, 0);
        assert!(user.reading_history.is_empty());
        assert!(user.likes.is_empty());
    }

    #[test]
    fn test_role_wire_format() {
        let role: Role = serde_json::from_str(r#""creator""#).unwrap();
        assert_eq!(role, Role::Creator);
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""admin""#);
        assert!(Role::Admin.is_privileged());
        assert!(!Role::Viewer.is_privileged());
    }

    #[test]
    fn test_record_reading_prepends() {
        let mut user: User =
            serde_json::from_str(r#"{"user_id": "u1", "username": "reader"}"#).unwrap();
        let entry = |manga: &str, day: u32| ReadingHistoryEntry {
            timestamp: Utc.with_ymd_and_hms(2024, 5, day, 12, 0, 0).unwrap(),
            manga_id: manga.to_string(),
            chapter_id: None,
            manga_title: None,
            chapter_number: None,
        };

        user.record_reading(entry("older", 1));
        user.record_reading(entry("newer", 2));

        assert_eq!(user.reading_history[0].manga_id, "newer");
        assert_eq!(user.reading_history[1].manga_id, "older");
        assert_eq!(user.activity_record().reading_history.len(), 2);
    }
}
