//! Bounded string similarity.
//!
//! The default score blends three signals:
//!
//! | signal | weight |
//! |---|---|
//! | sequence alignment `2·LCS / (|a| + |b|)` | 0.60 |
//! | character-set Jaccard | 0.25 |
//! | length similarity `1 − |Δlen| / max len` | 0.15 |
//!
//! Every signal is symmetric, so `similarity(a, b) == similarity(b, a)`
//! exactly. Lengths are counted in `char`s.
//!
//! ```rust
//! use matcher::similarity;
//!
//! assert_eq!(similarity("beijing", "beijing"), 1.0);
//! assert_eq!(similarity("", ""), 1.0);
//! assert_eq!(similarity("beijing", ""), 0.0);
//! assert!(similarity("beijing", "peking") > 0.4);
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::types::MatchError;

/// Default weight of the prefix term in prefix-biased scoring.
pub const DEFAULT_PREFIX_WEIGHT: f64 = 0.7;

/// Normalized weights for the three similarity signals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityWeights {
    sequence: f64,
    char_overlap: f64,
    length: f64,
}

impl SimilarityWeights {
    pub const DEFAULT: SimilarityWeights = SimilarityWeights {
        sequence: 0.6,
        char_overlap: 0.25,
        length: 0.15,
    };

    /// Validates and re-normalizes the weights so they sum to 1.
    pub fn new(sequence: f64, char_overlap: f64, length: f64) -> Result<Self, MatchError> {
        for (name, value) in [
            ("sequence", sequence),
            ("char_overlap", char_overlap),
            ("length", length),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(MatchError::InvalidConfig(format!(
                    "similarity weight `{name}` must be a finite value >= 0 (got {value})"
                )));
            }
        }
        let sum = sequence + char_overlap + length;
        if sum <= 0.0 {
            return Err(MatchError::InvalidConfig(
                "similarity weights must not all be zero".into(),
            ));
        }
        Ok(Self {
            sequence: sequence / sum,
            char_overlap: char_overlap / sum,
            length: length / sum,
        })
    }

    pub fn sequence(&self) -> f64 {
        self.sequence
    }

    pub fn char_overlap(&self) -> f64 {
        self.char_overlap
    }

    pub fn length(&self) -> f64 {
        self.length
    }
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Weighted similarity scorer shared by the fuzzy matchers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimilarityCalculator {
    weights: SimilarityWeights,
}

impl SimilarityCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: SimilarityWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> SimilarityWeights {
        self.weights
    }

    /// Score in `[0, 1]`; 1.0 for identical strings (including two empty
    /// ones), 0.0 when exactly one side is empty.
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        if a == b {
            return 1.0;
        }
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();

        let score = self.weights.sequence * sequence_ratio(&a, &b)
            + self.weights.char_overlap * char_overlap(&a, &b)
            + self.weights.length * length_similarity(a.len(), b.len());
        score.clamp(0.0, 1.0)
    }

    /// Returns `(prefix, overall)`: similarity of the shared-length prefixes
    /// and of the full strings.
    pub fn prefix_similarity(&self, a: &str, b: &str) -> (f64, f64) {
        if a.is_empty() || b.is_empty() {
            let overall = self.similarity(a, b);
            return (overall, overall);
        }
        let shared = a.chars().count().min(b.chars().count());
        let prefix_a = char_prefix(a, shared);
        let prefix_b = char_prefix(b, shared);
        (self.similarity(prefix_a, prefix_b), self.similarity(a, b))
    }

    /// `prefix · w + overall · (1 − w)`, with `w` clamped to `[0, 1]`.
    pub fn prefix_biased(&self, a: &str, b: &str, prefix_weight: f64) -> f64 {
        let w = if prefix_weight.is_nan() {
            DEFAULT_PREFIX_WEIGHT
        } else {
            prefix_weight.clamp(0.0, 1.0)
        };
        let (prefix, overall) = self.prefix_similarity(a, b);
        prefix * w + overall * (1.0 - w)
    }
}

/// Similarity with the default weights.
pub fn similarity(a: &str, b: &str) -> f64 {
    SimilarityCalculator::default().similarity(a, b)
}

/// `1 − levenshtein / max len`, in `[0, 1]`. Two empty strings score 1.0.
pub fn edit_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    let distance = strsim::levenshtein(a, b);
    (1.0 - distance as f64 / max_len as f64).clamp(0.0, 1.0)
}

/// `2·LCS / (|a| + |b|)`; symmetric. Two empty slices score 1.0.
pub fn sequence_ratio(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * lcs_len(a, b) as f64 / total as f64
}

fn lcs_len(a: &[char], b: &[char]) -> usize {
    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut prev = vec![0usize; inner.len() + 1];
    let mut curr = vec![0usize; inner.len() + 1];
    for &x in outer {
        for (j, &y) in inner.iter().enumerate() {
            curr[j + 1] = if x == y {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[inner.len()]
}

/// Jaccard index of the two character sets.
pub fn char_overlap(a: &[char], b: &[char]) -> f64 {
    let set_a: HashSet<char> = a.iter().copied().collect();
    let set_b: HashSet<char> = b.iter().copied().collect();
    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 1.0;
    }
    set_a.intersection(&set_b).count() as f64 / union as f64
}

/// `1 − |len_a − len_b| / max(len_a, len_b)`.
pub fn length_similarity(len_a: usize, len_b: usize) -> f64 {
    let max_len = len_a.max(len_b);
    if max_len == 0 {
        return 1.0;
    }
    1.0 - len_a.abs_diff(len_b) as f64 / max_len as f64
}

fn char_prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_and_empty_rules() {
        assert_eq!(similarity("tokyo", "tokyo"), 1.0);
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("tokyo", ""), 0.0);
        assert_eq!(similarity("", "tokyo"), 0.0);
    }

    #[test]
    fn similarity_is_symmetric_and_bounded() {
        let pairs = [
            ("beijing", "peking"),
            ("finished_points", "finished points and tracks"),
            ("abc", "cba"),
            ("東京", "とうきょう"),
            ("a", "aaaaaaaaaa"),
        ];
        for (a, b) in pairs {
            let ab = similarity(a, b);
            let ba = similarity(b, a);
            assert_eq!(ab, ba, "asymmetric for {a:?} / {b:?}");
            assert!((0.0..=1.0).contains(&ab));
        }
    }

    #[test]
    fn components_add_up() {
        // "abcd" vs "abce": LCS 3, Jaccard 3/5, length 1.0
        let expected = 0.6 * (6.0 / 8.0) + 0.25 * (3.0 / 5.0) + 0.15;
        assert!((similarity("abcd", "abce") - expected).abs() < 1e-12);
    }

    #[test]
    fn lcs_is_not_greedy() {
        let a: Vec<char> = "axbycz".chars().collect();
        let b: Vec<char> = "abc".chars().collect();
        assert_eq!(lcs_len(&a, &b), 3);
        assert!((sequence_ratio(&a, &b) - 6.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn weights_are_validated_and_normalized() {
        let weights = SimilarityWeights::new(2.0, 1.0, 1.0).expect("valid weights");
        assert!((weights.sequence() - 0.5).abs() < 1e-12);
        assert!((weights.char_overlap() - 0.25).abs() < 1e-12);

        assert!(SimilarityWeights::new(-1.0, 1.0, 1.0).is_err());
        assert!(SimilarityWeights::new(0.0, 0.0, 0.0).is_err());
        assert!(SimilarityWeights::new(f64::INFINITY, 1.0, 1.0).is_err());
    }

    #[test]
    fn custom_weights_change_the_score() {
        let sequence_only =
            SimilarityCalculator::with_weights(SimilarityWeights::new(1.0, 0.0, 0.0).expect("valid"));
        assert!((sequence_only.similarity("abcd", "abce") - 0.75).abs() < 1e-12);
    }

    #[test]
    fn prefix_similarity_uses_shared_length() {
        let calc = SimilarityCalculator::new();
        let (prefix, overall) = calc.prefix_similarity("finished", "finished_points_and_tracks");
        assert_eq!(prefix, 1.0);
        assert!(overall < 1.0);
        let biased = calc.prefix_biased("finished", "finished_points_and_tracks", 0.7);
        assert!((biased - (0.7 + 0.3 * overall)).abs() < 1e-12);
    }

    #[test]
    fn prefix_similarity_with_empty_side() {
        let calc = SimilarityCalculator::new();
        assert_eq!(calc.prefix_similarity("", "abc"), (0.0, 0.0));
        assert_eq!(calc.prefix_similarity("", ""), (1.0, 1.0));
    }

    #[test]
    fn edit_similarity_counts_chars() {
        assert_eq!(edit_similarity("", ""), 1.0);
        assert!((edit_similarity("pekin", "peking") - 5.0 / 6.0).abs() < 1e-12);
        assert!((edit_similarity("東京", "東") - 0.5).abs() < 1e-12);
    }
}
