//! Tag-set similarity scoring

use cortex_domain::SimilarityScore;
use std::collections::HashSet;

/// Score the overlap of two tag label sets on a 0-100 scale.
///
/// Comparison is case-insensitive: both sides are lowercased before
/// comparing, so `{"Alpha"}` and `{"alpha"}` are the same label. Either
/// side empty scores 0. Otherwise the score is the Jaccard index
/// (intersection size over union size) scaled to 0-100. The union cannot
/// be empty once the empty-side check has passed, but the division is
/// guarded anyway.
pub fn tag_score(a: &[String], b: &[String]) -> SimilarityScore {
    if a.is_empty() || b.is_empty() {
        return SimilarityScore::zero();
    }

    let set_a: HashSet<String> = a.iter().map(|t| t.to_lowercase()).collect();
    let set_b: HashSet<String> = b.iter().map(|t| t.to_lowercase()).collect();

    let union = set_a.union(&set_b).count();
    if union == 0 {
        return SimilarityScore::zero();
    }
    let common = set_a.intersection(&set_b).count();

    SimilarityScore::new(common as f64 / union as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_empty_side_scores_0() {
        assert_eq!(tag_score(&[], &labels(&["alpha"])).value(), 0.0);
        assert_eq!(tag_score(&labels(&["alpha"]), &[]).value(), 0.0);
        assert_eq!(tag_score(&[], &[]).value(), 0.0);
    }

    #[test]
    fn test_identical_sets_score_100() {
        let tags = labels(&["alpha", "beta"]);
        assert_eq!(tag_score(&tags, &tags).value(), 100.0);
    }

    #[test]
    fn test_disjoint_sets_score_0() {
        let a = labels(&["alpha"]);
        let b = labels(&["beta"]);
        assert_eq!(tag_score(&a, &b).value(), 0.0);
    }

    #[test]
    fn test_jaccard_case_insensitive() {
        // {alpha, beta} vs {alpha, gamma}: intersection {alpha}, union
        // {alpha, beta, gamma} -> 1/3.
        let a = labels(&["Alpha", "Beta"]);
        let b = labels(&["alpha", "Gamma"]);
        let score = tag_score(&a, &b);
        assert!((score.value() - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_duplicate_labels_collapse() {
        // Repeated labels count once; casing differences collapse too.
        let a = labels(&["alpha", "ALPHA", "alpha"]);
        let b = labels(&["Alpha"]);
        assert_eq!(tag_score(&a, &b).value(), 100.0);
    }

    #[test]
    fn test_symmetry() {
        let a = labels(&["one", "two", "three"]);
        let b = labels(&["two", "four"]);
        assert_eq!(tag_score(&a, &b), tag_score(&b, &a));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: tag scores always land in [0, 100]
        #[test]
        fn test_score_bounds(
            a in proptest::collection::vec("[a-zA-Z]{1,8}", 0..8),
            b in proptest::collection::vec("[a-zA-Z]{1,8}", 0..8),
        ) {
            let score = tag_score(&a, &b);
            prop_assert!(score.value() >= 0.0 && score.value() <= 100.0);
        }

        /// Property: tag scoring is symmetric
        #[test]
        fn test_symmetric(
            a in proptest::collection::vec("[a-z]{1,8}", 0..8),
            b in proptest::collection::vec("[a-z]{1,8}", 0..8),
        ) {
            prop_assert_eq!(tag_score(&a, &b), tag_score(&b, &a));
        }
    }
}
