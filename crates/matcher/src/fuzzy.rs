use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::similarity::SimilarityCalculator;
use crate::traits::StringMatcher;
use crate::types::{validate_unit, MatchError, MatchResult};

pub const DEFAULT_THRESHOLD: f64 = 0.65;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzyConfig {
    /// Minimum similarity in `[0, 1]` for a candidate to be returned.
    pub threshold: f64,
    pub debug: bool,
}

impl Default for FuzzyConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            debug: false,
        }
    }
}

impl FuzzyConfig {
    pub fn validate(&self) -> Result<(), MatchError> {
        validate_unit("threshold", self.threshold)
    }
}

/// Similarity matcher over lowercased strings.
///
/// Ties keep the earliest candidate. The best candidate is returned only when
/// its score reaches the threshold; otherwise the caller gets `None` and the
/// best score seen.
#[derive(Debug, Clone)]
pub struct FuzzyStringMatcher {
    config: FuzzyConfig,
    calculator: SimilarityCalculator,
}

impl FuzzyStringMatcher {
    pub fn new(config: FuzzyConfig) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self {
            config,
            calculator: SimilarityCalculator::default(),
        })
    }

    pub fn with_threshold(threshold: f64) -> Result<Self, MatchError> {
        Self::new(FuzzyConfig {
            threshold,
            ..Default::default()
        })
    }

    pub fn with_calculator(mut self, calculator: SimilarityCalculator) -> Self {
        self.calculator = calculator;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.config.threshold
    }

    /// Replaces the threshold; values outside `[0, 1]` are rejected and leave
    /// the matcher unchanged.
    pub fn set_threshold(&mut self, threshold: f64) -> Result<(), MatchError> {
        validate_unit("threshold", threshold)?;
        self.config.threshold = threshold;
        Ok(())
    }

    pub fn calculator(&self) -> &SimilarityCalculator {
        &self.calculator
    }

    /// Similarity of the lowercased pair.
    pub fn score(&self, target: &str, candidate: &str) -> f64 {
        self.calculator
            .similarity(&target.to_lowercase(), &candidate.to_lowercase())
    }

    /// Best candidate regardless of threshold. Strictly greater scores
    /// replace the current best, so the first maximum wins.
    pub(crate) fn best_by<'c, F>(&self, candidates: &[&'c str], score: F) -> (Option<&'c str>, f64)
    where
        F: Fn(&str) -> f64,
    {
        let mut best: Option<&'c str> = None;
        let mut best_score = 0.0;
        for &candidate in candidates {
            let s = score(candidate);
            if self.config.debug {
                debug!(candidate, score = s, "fuzzy_candidate");
            }
            if s > best_score {
                best = Some(candidate);
                best_score = s;
            }
        }
        (best, best_score)
    }

    fn accept<'c>(&self, best: (Option<&'c str>, f64), threshold: f64) -> (Option<&'c str>, f64) {
        match best {
            (Some(candidate), score) if score >= threshold => (Some(candidate), score),
            (_, score) => (None, score),
        }
    }

    /// Best candidate judged against `threshold` instead of the configured
    /// one. Used by hybrid fallback without mutating the matcher.
    pub(crate) fn find_with_threshold<'c>(
        &self,
        target: &str,
        candidates: &[&'c str],
        threshold: f64,
    ) -> (Option<&'c str>, f64) {
        if target.is_empty() || candidates.is_empty() {
            return (None, 0.0);
        }
        let target = target.to_lowercase();
        let best = self.best_by(candidates, |candidate| {
            self.calculator.similarity(&target, &candidate.to_lowercase())
        });
        self.accept(best, threshold)
    }

    /// Like [`StringMatcher::find_match_with_score`] but scores each pair with
    /// [`SimilarityCalculator::prefix_biased`].
    pub fn find_match_with_prefix_bias<'c>(
        &self,
        target: &str,
        candidates: &[&'c str],
        prefix_weight: f64,
    ) -> (Option<&'c str>, f64) {
        if target.is_empty() || candidates.is_empty() {
            return (None, 0.0);
        }
        let target = target.to_lowercase();
        let best = self.best_by(candidates, |candidate| {
            self.calculator
                .prefix_biased(&target, &candidate.to_lowercase(), prefix_weight)
        });
        self.accept(best, self.config.threshold)
    }

    /// Every candidate scoring at or above the threshold, best first. Equal
    /// scores keep input order.
    pub fn matches_above_threshold<'c>(
        &self,
        target: &str,
        candidates: &[&'c str],
    ) -> Vec<(&'c str, f64)> {
        if target.is_empty() {
            return Vec::new();
        }
        let target = target.to_lowercase();
        let mut hits: Vec<(&'c str, f64)> = candidates
            .iter()
            .map(|&candidate| {
                let s = self.calculator.similarity(&target, &candidate.to_lowercase());
                (candidate, s)
            })
            .filter(|(_, s)| *s >= self.config.threshold)
            .collect();
        hits.sort_by(|a, b| b.1.total_cmp(&a.1));
        hits
    }
}

impl Default for FuzzyStringMatcher {
    fn default() -> Self {
        Self {
            config: FuzzyConfig::default(),
            calculator: SimilarityCalculator::default(),
        }
    }
}

impl StringMatcher for FuzzyStringMatcher {
    fn name(&self) -> &'static str {
        "fuzzy"
    }

    fn find_match_with_score<'c>(
        &self,
        target: &str,
        candidates: &[&'c str],
    ) -> (Option<&'c str>, f64) {
        self.find_with_threshold(target, candidates, self.config.threshold)
    }

    fn match_with_result(&self, target: &str, candidates: &[&str]) -> MatchResult {
        match self.find_match_with_score(target, candidates) {
            (Some(hit), score) => MatchResult::fuzzy(hit, score),
            (None, score) => MatchResult::no_match(score),
        }
    }
}
