//! Similarity score value type

use std::fmt;

/// A similarity measure between two artifacts or attributes.
///
/// Scores live in [0, 100]: 100 means identical, 0 means no similarity
/// detected (or one of the inputs was empty). Self-comparison of an
/// artifact scores 0 by convention, since a connection to oneself is never
/// valid. The constructor clamps out-of-range and non-finite input so a
/// stored or computed score can always be trusted to be in bounds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SimilarityScore(f64);

impl SimilarityScore {
    /// The minimum score (no similarity)
    pub const MIN: SimilarityScore = SimilarityScore(0.0);

    /// The maximum score (identical)
    pub const MAX: SimilarityScore = SimilarityScore(100.0);

    /// Create a score, clamping to [0, 100]. Non-finite input becomes 0.
    pub fn new(value: f64) -> Self {
        if !value.is_finite() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 100.0))
    }

    /// The zero score
    pub fn zero() -> Self {
        Self::MIN
    }

    /// Get the raw value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Whether this score meets the given acceptance threshold
    pub fn meets(&self, threshold: f64) -> bool {
        self.0 >= threshold
    }

    /// Total ordering over scores (NaN cannot occur by construction)
    pub fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for SimilarityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamping() {
        assert_eq!(SimilarityScore::new(-5.0).value(), 0.0);
        assert_eq!(SimilarityScore::new(150.0).value(), 100.0);
        assert_eq!(SimilarityScore::new(33.33).value(), 33.33);
    }

    #[test]
    fn test_non_finite_becomes_zero() {
        assert_eq!(SimilarityScore::new(f64::NAN).value(), 0.0);
        assert_eq!(SimilarityScore::new(f64::INFINITY).value(), 0.0);
    }

    #[test]
    fn test_meets_threshold() {
        let score = SimilarityScore::new(70.0);
        assert!(score.meets(70.0));
        assert!(score.meets(69.9));
        assert!(!score.meets(70.1));
    }

    #[test]
    fn test_display() {
        assert_eq!(SimilarityScore::new(33.333333).to_string(), "33.33");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: constructed scores are always within [0, 100]
        #[test]
        fn test_score_bounds(value in proptest::num::f64::ANY) {
            let score = SimilarityScore::new(value);
            prop_assert!(score.value() >= 0.0 && score.value() <= 100.0);
        }

        /// Property: total_cmp is consistent with the raw values
        #[test]
        fn test_score_ordering(a in 0.0f64..=100.0, b in 0.0f64..=100.0) {
            let sa = SimilarityScore::new(a);
            let sb = SimilarityScore::new(b);
            prop_assert_eq!(sa.total_cmp(&sb), a.total_cmp(&b));
        }
    }
}
