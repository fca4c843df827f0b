//! Untrained prior for histories with no purchases.

use basket_core::models::{FeatureVector, Score};

/// Deterministic pseudo-random score in `[0, ceiling)`.
///
/// Hashes the seed and the feature bits with blake3, so the same features
/// always receive the same prior for a given seed.
pub fn untrained(seed: u64, features: &FeatureVector, ceiling: f64) -> Score {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&seed.to_le_bytes());
    for value in features.values() {
        hasher.update(&value.to_bits().to_le_bytes());
    }
    let hash = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[..8]);
    // 53 high bits give a uniform value in [0, 1).
    let unit = (u64::from_le_bytes(bytes) >> 11) as f64 / (1u64 << 53) as f64;
    Score::new(unit * ceiling)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prior_is_below_ceiling_and_repeatable() {
        for i in 0..200 {
            let features = FeatureVector::new(vec![i as f64, 0.5, 1.0]);
            let a = untrained(7, &features, 0.3);
            assert!(a.value() < 0.3);
            assert_eq!(a, untrained(7, &features, 0.3));
        }
    }

    #[test]
    fn seed_changes_the_prior() {
        let features = FeatureVector::new(vec![1.0, 0.0, 0.25]);
        assert_ne!(untrained(1, &features, 0.3), untrained(2, &features, 0.3));
    }
}
