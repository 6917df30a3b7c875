//! v001 -- Initial schema creation.
//!
//! Creates the `vibes` table: one row per generated vibe, with the full
//! record stored as JSON text and a like counter owned by the store.

use rusqlite::Connection;

/// SQL executed when upgrading from version 0 to version 1.
const UP_SQL: &str = r#"
-- ----------------------------------------------------------------
-- Vibes
-- ----------------------------------------------------------------
CREATE TABLE IF NOT EXISTS vibes (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    twitter_handle TEXT NOT NULL,
    vibe_data      TEXT NOT NULL,               -- VibeRecord as JSON
    likes          INTEGER NOT NULL DEFAULT 0,
    created_at     TEXT NOT NULL                -- ISO-8601 / RFC-3339
);

CREATE INDEX IF NOT EXISTS idx_vibes_twitter_handle ON vibes(twitter_handle);
CREATE INDEX IF NOT EXISTS idx_vibes_likes ON vibes(likes DESC);
CREATE INDEX IF NOT EXISTS idx_vibes_created_at ON vibes(created_at DESC);
"#;

/// Apply the initial migration.
pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(UP_SQL)
}
