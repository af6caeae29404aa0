//! Fuzzy partial-alignment scoring for text attributes

use cortex_domain::SimilarityScore;

/// Score the fuzzy overlap of two text attributes on a 0-100 scale.
///
/// Returns 0 when either input is empty. Otherwise the shorter string is
/// the needle and is slid across every same-length window of the longer
/// string; the best window's Levenshtein distance, normalized by needle
/// length, becomes the score. An exact substring therefore scores 100, and
/// each edit inside the best alignment of an n-character needle costs
/// 100/n.
///
/// Convention (deterministic, documented, not symmetric): the shorter
/// argument is always the needle; when lengths tie, the first argument is.
/// Callers must not assume `attribute_score(a, b) == attribute_score(b, a)`.
pub fn attribute_score(a: &str, b: &str) -> SimilarityScore {
    if a.is_empty() || b.is_empty() {
        return SimilarityScore::zero();
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (needle, haystack) = if b_chars.len() < a_chars.len() {
        (&b_chars, &a_chars)
    } else {
        (&a_chars, &b_chars)
    };

    let n = needle.len();
    // Worst case replaces every needle character.
    let mut best = n;
    for window in haystack.windows(n) {
        if best == 0 {
            break;
        }
        let distance = levenshtein_capped(needle, window, best - 1);
        if distance < best {
            best = distance;
        }
    }

    SimilarityScore::new((1.0 - best as f64 / n as f64) * 100.0)
}

/// Levenshtein distance with an early-exit cap.
///
/// Returns the true distance when it is within `cap`; otherwise returns
/// `cap + 1`. Standard two-row dynamic programming with a row-minimum
/// bound, which is cheap given that the window sweep shrinks the cap as
/// better alignments are found.
fn levenshtein_capped(a: &[char], b: &[char], cap: usize) -> usize {
    let n = b.len();
    if n == 0 {
        return if a.len() <= cap { a.len() } else { cap + 1 };
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr: Vec<usize> = vec![0; n + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        let mut row_min = curr[0];

        for j in 1..=n {
            let cost = usize::from(*ca != b[j - 1]);
            let deletion = prev[j] + 1;
            let insertion = curr[j - 1] + 1;
            let substitution = prev[j - 1] + cost;
            let d = deletion.min(insertion).min(substitution);
            curr[j] = d;
            row_min = row_min.min(d);
        }

        if row_min > cap {
            return cap + 1;
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n].min(cap + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings_score_100() {
        assert_eq!(attribute_score("quarterly report", "quarterly report").value(), 100.0);
    }

    #[test]
    fn test_empty_input_scores_0() {
        assert_eq!(attribute_score("", "anything").value(), 0.0);
        assert_eq!(attribute_score("anything", "").value(), 0.0);
        assert_eq!(attribute_score("", "").value(), 0.0);
    }

    #[test]
    fn test_exact_substring_scores_100() {
        assert_eq!(attribute_score("hello", "say hello world").value(), 100.0);
        // Needle selection ignores argument order.
        assert_eq!(attribute_score("say hello world", "hello").value(), 100.0);
    }

    #[test]
    fn test_one_edit_in_best_window() {
        // Needle "hullo" (5 chars) aligns against "hello" at distance 1.
        let score = attribute_score("hullo", "say hello world");
        assert!((score.value() - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_equal_length_single_window() {
        // Same length means one window: plain normalized distance.
        let score = attribute_score("abcd", "abcx");
        assert!((score.value() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_overlap_scores_0() {
        assert_eq!(attribute_score("aaaa", "bbbbbbbb").value(), 0.0);
    }

    #[test]
    fn test_deterministic() {
        let a = "fuzzy matching of artifact descriptions";
        let b = "artifact description matching";
        assert_eq!(attribute_score(a, b), attribute_score(a, b));
    }

    #[test]
    fn test_levenshtein_capped_exact() {
        let a: Vec<char> = "kitten".chars().collect();
        let b: Vec<char> = "sitting".chars().collect();
        assert_eq!(levenshtein_capped(&a, &b, 10), 3);
    }

    #[test]
    fn test_levenshtein_capped_early_exit() {
        let a: Vec<char> = "abcdef".chars().collect();
        let b: Vec<char> = "uvwxyz".chars().collect();
        assert_eq!(levenshtein_capped(&a, &b, 2), 3);
    }

    #[test]
    fn test_levenshtein_empty_window() {
        let a: Vec<char> = "ab".chars().collect();
        assert_eq!(levenshtein_capped(&a, &[], 5), 2);
        assert_eq!(levenshtein_capped(&a, &[], 1), 2);
    }
}
