use thiserror::Error;

/// Rejections produced by handle normalization.
///
/// The derivation engine itself has no fatal error paths: once a handle
/// passes normalization, every operation yields a complete record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandleError {
    /// Nothing left after stripping the `@` and disallowed characters.
    #[error("Handle is empty after normalization")]
    Empty,

    /// Normalized handle exceeds the maximum length.
    #[error("Handle is too long: {len} characters (max {max})")]
    TooLong { len: usize, max: usize },
}
