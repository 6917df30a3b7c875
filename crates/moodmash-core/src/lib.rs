//! # moodmash-core
//!
//! Handle-to-vibe derivation engine for Mood Mash.
//!
//! Given a normalized social-media handle, the engine derives a "vibe":
//! an aesthetic category plus themed content (quote, music suggestion,
//! emoji set, background description) and a perturbed 3-color palette.
//! The crate is pure and synchronous: it performs no I/O, holds no locks,
//! and its only shared resource is the process-wide random source.
//!
//! Selection is deliberately split in two strategies:
//! - the category itself is drawn from a feature-weighted random
//!   distribution, so regenerating a handle can land on a fresh category;
//! - the themed content is picked by a hash of the handle, so the flavor
//!   text for a handle stays stable across regenerations.

pub mod classify;
pub mod color;
pub mod content;
pub mod features;
pub mod handle;
pub mod record;
pub mod select;
pub mod types;

mod error;

pub use classify::{derive_vibe_type, ScoreTable};
pub use error::HandleError;
pub use handle::NormalizedHandle;
pub use record::{assemble_vibe, derive_fallback_vibe, reconcile, GeneratedVibe, VibeRecord};
pub use types::VibeType;
