//! Levenshtein edit distance.

use rapidfuzz::distance::levenshtein;

/// Minimum number of single-character insertions, deletions and
/// substitutions turning `a` into `b`.
///
/// Comparison is by `char` and case-sensitive; fold case first (see
/// [`FoldedName`](crate::FoldedName)) for case-insensitive matching.
pub fn distance(a: &str, b: &str) -> usize {
    levenshtein::distance(a.chars(), b.chars())
}

/// Edit distance over character slices. Working memory is linear in the
/// input lengths.
pub(crate) fn char_distance(a: &[char], b: &[char]) -> usize {
    levenshtein::distance(a.iter().copied(), b.iter().copied())
}

/// Similarity ratio `1 - distance / max(len_a, len_b)`.
///
/// Two empty inputs are identical and score 1.0.
pub fn similarity(distance: usize, len_a: usize, len_b: usize) -> f64 {
    let max_len = len_a.max(len_b);
    if max_len == 0 {
        return 1.0;
    }
    1.0 - distance as f64 / max_len as f64
}

/// `distance / max(len_a, len_b)`, the complement of [`similarity`].
///
/// Divides directly so that thresholds compare exactly at their boundary.
pub(crate) fn normalized_distance(distance: usize, len_a: usize, len_b: usize) -> f64 {
    let max_len = len_a.max(len_b);
    if max_len == 0 {
        return 0.0;
    }
    distance as f64 / max_len as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kitten_sitting() {
        assert_eq!(distance("kitten", "sitting"), 3);
        assert_eq!(distance("sitting", "kitten"), 3);
    }

    #[test]
    fn empty_inputs_degenerate_to_length() {
        assert_eq!(distance("", ""), 0);
        assert_eq!(distance("", "abc"), 3);
        assert_eq!(distance("abcd", ""), 4);
    }

    #[test]
    fn is_case_sensitive() {
        assert_eq!(distance("Tylenol", "tylenol"), 1);
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(distance("café", "cafe"), 1);
        assert_eq!(distance("naïve", "naive"), 1);
    }

    #[test]
    fn similarity_ratio() {
        assert!((similarity(1, 6, 7) - (1.0 - 1.0 / 7.0)).abs() < 1e-12);
        assert_eq!(similarity(0, 0, 0), 1.0);
        assert_eq!(similarity(5, 0, 5), 0.0);
        assert_eq!(normalized_distance(3, 5, 8), 0.375);
        assert_eq!(normalized_distance(7, 20, 5), 0.35);
        assert_eq!(normalized_distance(0, 0, 0), 0.0);
    }

    #[test]
    fn slices_and_strings_agree() {
        let a: Vec<char> = "warfarinn".chars().collect();
        let b: Vec<char> = "warfarin".chars().collect();
        assert_eq!(char_distance(&a, &b), distance("warfarinn", "warfarin"));
        assert_eq!(char_distance(&a, &b), 1);
    }
}
