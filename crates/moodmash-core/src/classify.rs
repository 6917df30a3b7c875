//! Vibe-type classification.
//!
//! A weighted random categorical sampler, not a hash-deterministic
//! function: two calls with the same handle may land on different
//! categories. The feature-conditioned score table is built separately
//! from the random boost and draw so the bonus placement stays testable.

use rand::Rng;

use crate::features::{Features, FirstLetterBucket, LengthBucket};
use crate::handle::NormalizedHandle;
use crate::types::VibeType;

/// Fixed additive increment applied per matched lexical feature.
const FEATURE_BONUS: u32 = 2;

/// Inclusive bounds of the per-category random boost.
const BOOST_MIN: u32 = 1;
const BOOST_MAX: u32 = 5;

/// Per-category weights, indexed by `VibeType` discriminant.
///
/// Invariant: every weight starts at 1 and only ever grows, so the table
/// always sums to a positive total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTable {
    weights: [u32; VibeType::COUNT],
}

impl ScoreTable {
    /// Build the pre-random table: baseline 1 everywhere, plus cumulative
    /// bonuses for each matched feature. A handle can trigger several.
    pub fn from_features(features: &Features) -> Self {
        let mut table = Self {
            weights: [1; VibeType::COUNT],
        };

        match features.length_bucket {
            LengthBucket::Short => {
                table.bump(VibeType::Chill);
                table.bump(VibeType::Retro);
            }
            LengthBucket::Long => {
                table.bump(VibeType::Chaotic);
                table.bump(VibeType::HyperDigital);
            }
            LengthBucket::Mid => {}
        }

        if features.has_uppercase {
            table.bump(VibeType::Vaporwave);
            table.bump(VibeType::Cyberpunk);
        }
        if features.has_digit {
            table.bump(VibeType::Cyberpunk);
            table.bump(VibeType::HyperDigital);
        }
        if features.has_underscore {
            table.bump(VibeType::Goth);
            table.bump(VibeType::Dreamcore);
        }

        let favored = match features.first_letter_bucket {
            FirstLetterBucket::AToE => VibeType::Ethereal,
            FirstLetterBucket::FToJ => VibeType::Cottagecore,
            FirstLetterBucket::PToT => VibeType::Retro,
            FirstLetterBucket::UToZ => VibeType::Vaporwave,
            // Catch-all bucket maps to cosmic.
            FirstLetterBucket::KToO | FirstLetterBucket::Other => VibeType::Cosmic,
        };
        table.bump(favored);

        table
    }

    pub fn weight(&self, vibe: VibeType) -> u32 {
        self.weights[vibe as usize]
    }

    fn bump(&mut self, vibe: VibeType) {
        self.weights[vibe as usize] += FEATURE_BONUS;
    }

    /// Add an independent bounded random boost to every category, so the
    /// classifier is never perfectly deterministic.
    fn boost(&mut self, rng: &mut impl Rng) {
        for weight in &mut self.weights {
            *weight += rng.gen_range(BOOST_MIN..=BOOST_MAX);
        }
    }

    /// One weighted draw over the categories.
    ///
    /// Normalizes weights into a probability distribution, draws a uniform
    /// number in [0,1), and walks `ALL` in order accumulating mass until
    /// the draw is covered.
    fn sample(&self, rng: &mut impl Rng) -> VibeType {
        let total: f64 = self.weights.iter().map(|w| f64::from(*w)).sum();
        let draw: f64 = rng.gen_range(0.0..1.0);

        let mut cumulative = 0.0;
        for vibe in VibeType::ALL {
            cumulative += f64::from(self.weight(vibe)) / total;
            if cumulative >= draw {
                return vibe;
            }
        }

        // Floating-point accumulation fell short of 1.0. Uniform pick
        // instead of failing.
        VibeType::ALL[rng.gen_range(0..VibeType::COUNT)]
    }
}

/// Classify with an explicit random source. Tests pass a seeded rng.
pub fn classify_with_rng(features: &Features, rng: &mut impl Rng) -> VibeType {
    let mut table = ScoreTable::from_features(features);
    table.boost(rng);
    table.sample(rng)
}

/// Assign a vibe category to a handle. Never fails for a valid handle.
pub fn derive_vibe_type(handle: &NormalizedHandle) -> VibeType {
    classify_with_rng(&Features::extract(handle), &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn table_for(raw: &str) -> ScoreTable {
        let handle = NormalizedHandle::parse(raw).unwrap();
        ScoreTable::from_features(&Features::extract(&handle))
    }

    #[test]
    fn owl99_bonus_placement() {
        let table = table_for("owl99");

        // Short length and the digit each place their bonuses...
        let bonused = [
            VibeType::Chill,
            VibeType::Retro,
            VibeType::Cyberpunk,
            VibeType::HyperDigital,
        ];
        // ...while these receive nothing for "owl99".
        let unbonused = [
            VibeType::Chaotic,
            VibeType::Vaporwave,
            VibeType::Cottagecore,
            VibeType::Goth,
            VibeType::Dreamcore,
            VibeType::Ethereal,
            VibeType::Absurdist,
        ];

        for favored in bonused {
            for other in unbonused {
                assert!(
                    table.weight(favored) > table.weight(other),
                    "{favored} should outweigh {other}"
                );
            }
        }
    }

    #[test]
    fn bonuses_are_cumulative() {
        // Digit and uppercase both favor cyberpunk.
        let table = table_for("Agent007xyzzy99");
        assert_eq!(table.weight(VibeType::Cyberpunk), 1 + 2 * FEATURE_BONUS);
    }

    #[test]
    fn baseline_is_positive_everywhere() {
        let table = table_for("midhandle");
        for vibe in VibeType::ALL {
            assert!(table.weight(vibe) >= 1);
        }
    }

    #[test]
    fn boost_stays_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let mut table = table_for("a");
            let before: Vec<u32> = VibeType::ALL.iter().map(|v| table.weight(*v)).collect();
            table.boost(&mut rng);
            for (vibe, before) in VibeType::ALL.iter().zip(before) {
                let delta = table.weight(*vibe) - before;
                assert!((BOOST_MIN..=BOOST_MAX).contains(&delta));
            }
        }
    }

    #[test]
    fn classification_is_total() {
        let mut rng = StdRng::seed_from_u64(42);
        for raw in ["a", "owl99", "Night_Owl", "abcdefghijk1234"] {
            let handle = NormalizedHandle::parse(raw).unwrap();
            let features = Features::extract(&handle);
            for _ in 0..200 {
                let vibe = classify_with_rng(&features, &mut rng);
                assert!(VibeType::ALL.contains(&vibe));
            }
        }
    }

    #[test]
    fn heavy_weight_dominates_sampling() {
        let mut table = table_for("a");
        // Pile weight onto one category and check it wins most draws.
        for _ in 0..500 {
            table.bump(VibeType::Goth);
        }
        let mut rng = StdRng::seed_from_u64(1);
        let goth_hits = (0..200)
            .filter(|_| table.sample(&mut rng) == VibeType::Goth)
            .count();
        assert!(goth_hits > 180);
    }
}
