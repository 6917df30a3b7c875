//! # moodmash-store
//!
//! Local SQLite storage for generated vibes, backed by `rusqlite`.
//!
//! The crate exposes a synchronous [`Database`] handle that wraps a
//! `rusqlite::Connection` and provides typed helpers for inserting vibes,
//! incrementing like counts, and querying the leaderboard. The store owns
//! `id`, `likes`, and `created_at`; the derivation engine owns everything
//! inside the record.

pub mod database;
pub mod migrations;
pub mod models;
pub mod vibes;

mod error;

pub use database::Database;
pub use error::StoreError;
pub use models::*;
