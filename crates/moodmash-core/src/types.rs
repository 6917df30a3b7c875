use std::fmt;

use serde::{Deserialize, Serialize};

/// Aesthetic category assigned to a generated vibe.
///
/// Exactly one category is assigned per derivation call, and once chosen
/// for a request it is never overwritten: downstream generation is
/// corrected to match it, not the other way around.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum VibeType {
    Chaotic,
    Chill,
    Retro,
    Cyberpunk,
    Vaporwave,
    Cottagecore,
    HyperDigital,
    Cosmic,
    Goth,
    Dreamcore,
    Ethereal,
    Absurdist,
}

impl VibeType {
    pub const COUNT: usize = 12;

    /// Every category, in the stable order the classifier walks.
    pub const ALL: [VibeType; Self::COUNT] = [
        VibeType::Chaotic,
        VibeType::Chill,
        VibeType::Retro,
        VibeType::Cyberpunk,
        VibeType::Vaporwave,
        VibeType::Cottagecore,
        VibeType::HyperDigital,
        VibeType::Cosmic,
        VibeType::Goth,
        VibeType::Dreamcore,
        VibeType::Ethereal,
        VibeType::Absurdist,
    ];

    /// Wire name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            VibeType::Chaotic => "chaotic",
            VibeType::Chill => "chill",
            VibeType::Retro => "retro",
            VibeType::Cyberpunk => "cyberpunk",
            VibeType::Vaporwave => "vaporwave",
            VibeType::Cottagecore => "cottagecore",
            VibeType::HyperDigital => "hyper-digital",
            VibeType::Cosmic => "cosmic",
            VibeType::Goth => "goth",
            VibeType::Dreamcore => "dreamcore",
            VibeType::Ethereal => "ethereal",
            VibeType::Absurdist => "absurdist",
        }
    }
}

impl fmt::Display for VibeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_complete_and_ordered() {
        assert_eq!(VibeType::ALL.len(), VibeType::COUNT);
        // Discriminants double as indexes into weight tables.
        for (i, vibe) in VibeType::ALL.iter().enumerate() {
            assert_eq!(*vibe as usize, i);
        }
    }

    #[test]
    fn serde_names_match_as_str() {
        for vibe in VibeType::ALL {
            let json = serde_json::to_string(&vibe).unwrap();
            assert_eq!(json, format!("\"{}\"", vibe.as_str()));

            let back: VibeType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, vibe);
        }
    }
}
