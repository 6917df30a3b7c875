use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::HandleError;

/// Maximum length of a normalized handle.
pub const MAX_HANDLE_LEN: usize = 15;

/// A handle that passed normalization.
///
/// Invariant: the inner string always matches `^[A-Za-z0-9_]{1,15}$`.
/// All engine entry points take this type, so validation happens exactly
/// once, at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NormalizedHandle(String);

impl NormalizedHandle {
    /// Normalize raw user input into a handle.
    ///
    /// Strips one leading `@`, removes every character outside
    /// `[A-Za-z0-9_]`, then rejects empty or over-length results.
    pub fn parse(raw: &str) -> Result<Self, HandleError> {
        let trimmed = raw.trim();
        let stripped = trimmed.strip_prefix('@').unwrap_or(trimmed);

        let cleaned: String = stripped
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect();

        if cleaned.is_empty() {
            return Err(HandleError::Empty);
        }
        if cleaned.len() > MAX_HANDLE_LEN {
            return Err(HandleError::TooLong {
                len: cleaned.len(),
                max: MAX_HANDLE_LEN,
            });
        }

        Ok(Self(cleaned))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
