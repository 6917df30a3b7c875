//! Lexical feature extraction.
//!
//! The classifier never looks at the handle directly; it only sees this
//! small feature set. Extraction is pure and total over valid handles.

use crate::handle::NormalizedHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthBucket {
    /// 5 characters or fewer.
    Short,
    /// 6 to 10 characters.
    Mid,
    /// More than 10 characters.
    Long,
}

/// Contiguous a-z range of the handle's first character, case-insensitive.
/// `Other` catches digits and underscores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstLetterBucket {
    AToE,
    FToJ,
    KToO,
    PToT,
    UToZ,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features {
    pub length_bucket: LengthBucket,
    pub has_uppercase: bool,
    pub has_digit: bool,
    pub has_underscore: bool,
    pub first_letter_bucket: FirstLetterBucket,
}

impl Features {
    pub fn extract(handle: &NormalizedHandle) -> Self {
        let s = handle.as_str();

        let length_bucket = match s.len() {
            0..=5 => LengthBucket::Short,
            6..=10 => LengthBucket::Mid,
            _ => LengthBucket::Long,
        };

        let first_letter_bucket = match s.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('a'..='e') => FirstLetterBucket::AToE,
            Some('f'..='j') => FirstLetterBucket::FToJ,
            Some('k'..='o') => FirstLetterBucket::KToO,
            Some('p'..='t') => FirstLetterBucket::PToT,
            Some('u'..='z') => FirstLetterBucket::UToZ,
            _ => FirstLetterBucket::Other,
        };

        Self {
            length_bucket,
            has_uppercase: s.chars().any(|c| c.is_ascii_uppercase()),
            has_digit: s.chars().any(|c| c.is_ascii_digit()),
            has_underscore: s.contains('_'),
            first_letter_bucket,
        }
    }
}
