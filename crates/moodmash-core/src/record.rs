//! Vibe record assembly and reconciliation of generated output.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::classify::derive_vibe_type;
use crate::color;
use crate::content::pool_or_default;
use crate::handle::NormalizedHandle;
use crate::select::select_content;
use crate::types::VibeType;

/// The generated persona for one handle.
///
/// Constructed fresh per derivation call and never mutated afterwards.
/// Wire names are camelCase to match the public JSON contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VibeRecord {
    pub quote: String,
    pub vibe_type: VibeType,
    pub color_palette: [String; 3],
    pub music: String,
    pub emoji_set: [String; 5],
    pub background: String,
}

/// Untrusted output of the generative-text collaborator, before the
/// category cross-check and format validation. Missing fields default to
/// empty and are repaired by [`reconcile`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratedVibe {
    pub quote: String,
    pub vibe_type: String,
    pub color_palette: Vec<String>,
    pub music: String,
    pub emoji_set: Vec<String>,
    pub background: String,
}

/// Assemble a record for an already-chosen category, with an explicit
/// random source for the color perturbation.
pub fn assemble_with_rng(
    handle: &NormalizedHandle,
    vibe_type: VibeType,
    rng: &mut impl Rng,
) -> VibeRecord {
    let selection = select_content(handle, vibe_type);
    let pool = pool_or_default(vibe_type);

    VibeRecord {
        quote: selection.quote.to_string(),
        vibe_type,
        color_palette: pool.base_palette.map(|base| color::perturb(base, rng)),
        music: selection.music.to_string(),
        emoji_set: selection.emoji_set.map(str::to_string),
        background: selection.background.to_string(),
    }
}

/// Assemble a record for an already-chosen category.
///
/// Pure composition over the selector, content table, and color
/// perturbation; content-table gaps resolve to the default pool, never
/// an error.
pub fn assemble_vibe(handle: &NormalizedHandle, vibe_type: VibeType) -> VibeRecord {
    assemble_with_rng(handle, vibe_type, &mut rand::thread_rng())
}

/// Full fallback derivation: classify, then assemble.
///
/// Never fails for a valid normalized handle and never performs I/O.
pub fn derive_fallback_vibe(handle: &NormalizedHandle) -> VibeRecord {
    assemble_vibe(handle, derive_vibe_type(handle))
}

/// Correct a generated record against the locally derived category.
///
/// The category is always forced to `expected` — downstream generation
/// never overrides the classifier. Structural violations (palette not
/// exactly 3 well-formed hex colors, emoji set not exactly 5 non-empty
/// entries, empty text fields) are repaired from the fallback record.
pub fn reconcile(generated: GeneratedVibe, expected: VibeType, fallback: &VibeRecord) -> VibeRecord {
    let color_palette = match <[String; 3]>::try_from(generated.color_palette) {
        Ok(palette) if palette.iter().all(|c| color::is_hex_color(c)) => palette,
        _ => fallback.color_palette.clone(),
    };

    let emoji_set = match <[String; 5]>::try_from(generated.emoji_set) {
        Ok(set) if set.iter().all(|e| !e.trim().is_empty()) => set,
        _ => fallback.emoji_set.clone(),
    };

    let or_fallback = |value: String, fallback: &str| {
        if value.trim().is_empty() {
            fallback.to_string()
        } else {
            value
        }
    };

    VibeRecord {
        quote: or_fallback(generated.quote, &fallback.quote),
        vibe_type: expected,
        color_palette,
        music: or_fallback(generated.music, &fallback.music),
        emoji_set,
        background: or_fallback(generated.background, &fallback.background),
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::content::DEFAULT_POOL;

    use super::*;

    fn handle(raw: &str) -> NormalizedHandle {
        NormalizedHandle::parse(raw).unwrap()
    }

    fn sample_record() -> VibeRecord {
        assemble_vibe(&handle("owl99"), VibeType::Chill)
    }

    #[test]
    fn fallback_record_shape() {
        for raw in ["a", "owl99", "Night_Owl", "abcdefghijklmno"] {
            let record = derive_fallback_vibe(&handle(raw));

            assert_eq!(record.color_palette.len(), 3);
            for c in &record.color_palette {
                assert!(color::is_hex_color(c), "bad palette entry {c}");
            }

            assert_eq!(record.emoji_set.len(), 5);
            for e in &record.emoji_set {
                assert!(!e.is_empty());
            }

            assert!(!record.quote.is_empty());
            assert!(!record.music.is_empty());
            assert!(!record.background.is_empty());
        }
    }

    #[test]
    fn non_color_content_is_stable_per_category() {
        let h = handle("owl99");
        for vibe in VibeType::ALL {
            let first = assemble_vibe(&h, vibe);
            let second = assemble_vibe(&h, vibe);
            assert_eq!(first.quote, second.quote);
            assert_eq!(first.music, second.music);
            assert_eq!(first.emoji_set, second.emoji_set);
            assert_eq!(first.background, second.background);
        }
    }

    #[test]
    fn absurdist_uses_default_pool_content() {
        let record = assemble_vibe(&handle("owl99"), VibeType::Absurdist);
        assert!(DEFAULT_POOL.quotes.contains(&record.quote.as_str()));
        assert!(DEFAULT_POOL.music.contains(&record.music.as_str()));
    }

    #[test]
    fn assembly_palette_derives_from_base() {
        let mut rng = StdRng::seed_from_u64(5);
        let record = assemble_with_rng(&handle("owl99"), VibeType::Goth, &mut rng);
        let base = pool_or_default(VibeType::Goth).base_palette;

        for (out, base) in record.color_palette.iter().zip(base) {
            let out = color::parse_hex_color(out).unwrap();
            let base = color::parse_hex_color(base).unwrap();
            let differing = out.iter().zip(base).filter(|(a, b)| **a != *b).count();
            assert!(differing <= 1);
        }
    }

    #[test]
    fn reconcile_forces_category() {
        let generated = GeneratedVibe {
            quote: "generated quote".into(),
            vibe_type: "goth".into(),
            color_palette: vec!["#112233".into(), "#445566".into(), "#778899".into()],
            music: "generated music".into(),
            emoji_set: vec!["✨".into(); 5],
            background: "generated background".into(),
        };

        let record = reconcile(generated, VibeType::Chill, &sample_record());
        assert_eq!(record.vibe_type, VibeType::Chill);
        assert_eq!(record.quote, "generated quote");
        assert_eq!(record.color_palette[0], "#112233");
    }

    #[test]
    fn reconcile_repairs_malformed_palette() {
        let fallback = sample_record();

        for palette in [
            vec![],
            vec!["#112233".into()],
            vec!["#112233".into(), "#445566".into(), "oops".into()],
            vec!["#112233".into(); 4],
        ] {
            let generated = GeneratedVibe {
                color_palette: palette,
                ..GeneratedVibe::default()
            };
            let record = reconcile(generated, fallback.vibe_type, &fallback);
            assert_eq!(record.color_palette, fallback.color_palette);
        }
    }

    #[test]
    fn reconcile_repairs_bad_emoji_set() {
        let fallback = sample_record();

        for set in [vec![], vec!["✨".into(); 4], vec!["".into(); 5]] {
            let generated = GeneratedVibe {
                emoji_set: set,
                ..GeneratedVibe::default()
            };
            let record = reconcile(generated, fallback.vibe_type, &fallback);
            assert_eq!(record.emoji_set, fallback.emoji_set);
        }
    }

    #[test]
    fn reconcile_fills_empty_text_fields() {
        let fallback = sample_record();
        let record = reconcile(GeneratedVibe::default(), fallback.vibe_type, &fallback);

        assert_eq!(record.quote, fallback.quote);
        assert_eq!(record.music, fallback.music);
        assert_eq!(record.background, fallback.background);
    }

    #[test]
    fn wire_names_are_camel_case() {
        let json = serde_json::to_value(sample_record()).unwrap();
        let object = json.as_object().unwrap();

        for key in ["quote", "vibeType", "colorPalette", "music", "emojiSet", "background"] {
            assert!(object.contains_key(key), "missing {key}");
        }

        let parsed: GeneratedVibe = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.vibe_type, "chill");
    }
}
