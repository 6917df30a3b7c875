use chrono::{DateTime, Utc};
use moodmash_core::VibeRecord;
use rusqlite::params;

use crate::database::Database;
use crate::error::{Result, StoreError};
use crate::models::{SortOrder, VibeEntry};

impl Database {
    /// Insert a freshly generated vibe. The store assigns the id, a zero
    /// like count, and the creation timestamp.
    pub fn insert_vibe(&self, handle: &str, record: &VibeRecord) -> Result<VibeEntry> {
        let now = Utc::now();
        let vibe_data = serde_json::to_string(record)?;

        self.conn().execute(
            "INSERT INTO vibes (twitter_handle, vibe_data, likes, created_at)
             VALUES (?1, ?2, 0, ?3)",
            params![handle, vibe_data, now.to_rfc3339()],
        )?;

        Ok(VibeEntry {
            id: self.conn().last_insert_rowid(),
            twitter_handle: handle.to_string(),
            vibe: record.clone(),
            likes: 0,
            created_at: now,
        })
    }

    /// Atomically increment the like count for a stored vibe.
    ///
    /// Returns `false` when no row has that id. A single UPDATE avoids
    /// the read-increment-write race on concurrent likes.
    pub fn like_vibe(&self, id: i64) -> Result<bool> {
        let affected = self.conn().execute(
            "UPDATE vibes SET likes = likes + 1 WHERE id = ?1",
            params![id],
        )?;
        Ok(affected > 0)
    }

    pub fn get_vibe(&self, id: i64) -> Result<VibeEntry> {
        self.conn()
            .query_row(
                "SELECT id, twitter_handle, vibe_data, likes, created_at
                 FROM vibes WHERE id = ?1",
                params![id],
                row_to_entry,
            )
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => StoreError::NotFound,
                other => StoreError::Sqlite(other),
            })
    }

    /// Leaderboard query: the top `limit` vibes, newest or most liked
    /// first.
    pub fn top_vibes(&self, limit: u32, order: SortOrder) -> Result<Vec<VibeEntry>> {
        let sql = match order {
            SortOrder::Recent => {
                "SELECT id, twitter_handle, vibe_data, likes, created_at
                 FROM vibes ORDER BY created_at DESC LIMIT ?1"
            }
            SortOrder::Likes => {
                "SELECT id, twitter_handle, vibe_data, likes, created_at
                 FROM vibes ORDER BY likes DESC, created_at DESC LIMIT ?1"
            }
        };

        let mut stmt = self.conn().prepare(sql)?;
        let rows = stmt.query_map(params![limit], row_to_entry)?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }

    /// Recent vibes previously generated for one handle.
    pub fn vibes_for_handle(&self, handle: &str, limit: u32) -> Result<Vec<VibeEntry>> {
        let mut stmt = self.conn().prepare(
            "SELECT id, twitter_handle, vibe_data, likes, created_at
             FROM vibes
             WHERE twitter_handle = ?1
             ORDER BY created_at DESC
             LIMIT ?2",
        )?;

        let rows = stmt.query_map(params![handle, limit], row_to_entry)?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }

    /// Total number of stored vibes.
    pub fn count_vibes(&self) -> Result<i64> {
        let count =
            self.conn()
                .query_row("SELECT COUNT(*) FROM vibes", [], |row| row.get::<_, i64>(0))?;
        Ok(count)
    }
}

fn row_to_entry(row: &rusqlite::Row<'_>) -> rusqlite::Result<VibeEntry> {
    let id: i64 = row.get(0)?;
    let twitter_handle: String = row.get(1)?;
    let vibe_data: String = row.get(2)?;
    let likes: i64 = row.get(3)?;
    let ts_str: String = row.get(4)?;

    let vibe: VibeRecord = serde_json::from_str(&vibe_data).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
    })?;

    let created_at: DateTime<Utc> = DateTime::parse_from_rfc3339(&ts_str)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
        })?;

    Ok(VibeEntry {
        id,
        twitter_handle,
        vibe,
        likes,
        created_at,
    })
}

#[cfg(test)]
mod tests {
    use moodmash_core::{assemble_vibe, NormalizedHandle, VibeType};

    use super::*;

    fn open_db(dir: &tempfile::TempDir) -> Database {
        Database::open_at(&dir.path().join("test.db")).unwrap()
    }

    fn record_for(raw: &str, vibe: VibeType) -> VibeRecord {
        let handle = NormalizedHandle::parse(raw).unwrap();
        assemble_vibe(&handle, vibe)
    }

    #[test]
    fn insert_and_get_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let db = open_db(&dir);

        let record = record_for("owl99", VibeType::Chill);
        let entry = db.insert_vibe("owl99", &record).unwrap();
        assert_eq!(entry.likes, 0);

        let fetched = db.get_vibe(entry.id).unwrap();
        assert_eq!(fetched.twitter_handle, "owl99");
        assert_eq!(fetched.vibe, record);
    }

    #[test]
    fn get_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let db = open_db(&dir);

        assert!(matches!(db.get_vibe(9999), Err(StoreError::NotFound)));
    }

    #[test]
    fn like_increments_atomically() {
        let dir = tempfile::tempdir().unwrap();
        let db = open_db(&dir);

        let entry = db
            .insert_vibe("owl99", &record_for("owl99", VibeType::Goth))
            .unwrap();

        assert!(db.like_vibe(entry.id).unwrap());
        assert!(db.like_vibe(entry.id).unwrap());
        assert_eq!(db.get_vibe(entry.id).unwrap().likes, 2);

        // Unknown ids do not error, they just report no row.
        assert!(!db.like_vibe(entry.id + 1).unwrap());
    }

    #[test]
    fn top_vibes_orders_by_likes() {
        let dir = tempfile::tempdir().unwrap();
        let db = open_db(&dir);

        let first = db
            .insert_vibe("aaa", &record_for("aaa", VibeType::Chill))
            .unwrap();
        let second = db
            .insert_vibe("bbb", &record_for("bbb", VibeType::Retro))
            .unwrap();

        for _ in 0..3 {
            db.like_vibe(second.id).unwrap();
        }
        db.like_vibe(first.id).unwrap();

        let by_likes = db.top_vibes(10, SortOrder::Likes).unwrap();
        assert_eq!(by_likes[0].id, second.id);
        assert_eq!(by_likes[0].likes, 3);
        assert_eq!(by_likes[1].id, first.id);
    }

    #[test]
    fn top_vibes_respects_limit() {
        let dir = tempfile::tempdir().unwrap();
        let db = open_db(&dir);

        for handle in ["aaa", "bbb", "ccc"] {
            db.insert_vibe(handle, &record_for(handle, VibeType::Cosmic))
                .unwrap();
        }

        assert_eq!(db.top_vibes(2, SortOrder::Recent).unwrap().len(), 2);
    }

    #[test]
    fn vibes_for_handle_filters() {
        let dir = tempfile::tempdir().unwrap();
        let db = open_db(&dir);

        db.insert_vibe("owl99", &record_for("owl99", VibeType::Chill))
            .unwrap();
        db.insert_vibe("owl99", &record_for("owl99", VibeType::Goth))
            .unwrap();
        db.insert_vibe("other", &record_for("other", VibeType::Retro))
            .unwrap();

        let entries = db.vibes_for_handle("owl99", 10).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.twitter_handle == "owl99"));
    }

    #[test]
    fn count_tracks_inserts() {
        let dir = tempfile::tempdir().unwrap();
        let db = open_db(&dir);

        assert_eq!(db.count_vibes().unwrap(), 0);
        db.insert_vibe("owl99", &record_for("owl99", VibeType::Chill))
            .unwrap();
        assert_eq!(db.count_vibes().unwrap(), 1);
    }
}
