//! Domain model structs persisted in the local SQLite database.
//!
//! Every struct derives `Serialize` and `Deserialize` so it can be handed
//! directly to the HTTP layer.

use chrono::{DateTime, Utc};
use moodmash_core::VibeRecord;
use serde::{Deserialize, Serialize};

/// A stored vibe. The store assigns `id`, `likes`, and `created_at`; the
/// record inside is immutable once inserted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VibeEntry {
    /// Row id assigned by SQLite.
    pub id: i64,
    /// Normalized handle the vibe was generated for.
    pub twitter_handle: String,
    /// The generated record.
    pub vibe: VibeRecord,
    /// Like count, starts at 0.
    pub likes: i64,
    /// When the vibe was stored.
    pub created_at: DateTime<Utc>,
}

/// Ordering for leaderboard queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Newest first.
    Recent,
    /// Most liked first.
    Likes,
}

impl SortOrder {
    /// Parse the HTTP-facing sort parameter. Unknown values fall back to
    /// recency, matching the query layer's default branch.
    pub fn from_param(param: &str) -> Self {
        match param {
            "likes" => SortOrder::Likes,
            _ => SortOrder::Recent,
        }
    }
}
