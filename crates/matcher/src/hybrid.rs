use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::exact::{ExactConfig, ExactStringMatcher};
use crate::fuzzy::{FuzzyConfig, FuzzyStringMatcher, DEFAULT_THRESHOLD};
use crate::traits::StringMatcher;
use crate::types::{validate_unit, MatchError, MatchResult};

/// Threshold used by [`HybridStringMatcher::find_match_with_fallback`] when
/// callers have no better value.
pub const DEFAULT_FALLBACK_THRESHOLD: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HybridConfig {
    pub threshold: f64,
    /// Applies to the exact stage only; fuzzy scoring always lowercases.
    pub case_sensitive: bool,
    pub debug: bool,
}

impl Default for HybridConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            case_sensitive: false,
            debug: false,
        }
    }
}

/// Which stage of the hybrid matcher produced the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    Exact,
    Fuzzy,
    None,
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MatchStrategy::Exact => "exact",
            MatchStrategy::Fuzzy => "fuzzy",
            MatchStrategy::None => "none",
        })
    }
}

/// Exact containment first, similarity only when containment finds nothing.
#[derive(Debug, Clone)]
pub struct HybridStringMatcher {
    exact: ExactStringMatcher,
    fuzzy: FuzzyStringMatcher,
    debug: bool,
}

impl HybridStringMatcher {
    pub fn new(config: HybridConfig) -> Result<Self, MatchError> {
        let fuzzy = FuzzyStringMatcher::new(FuzzyConfig {
            threshold: config.threshold,
            debug: config.debug,
        })?;
        let exact = ExactStringMatcher::new(ExactConfig {
            case_sensitive: config.case_sensitive,
            debug: config.debug,
        });
        Ok(Self {
            exact,
            fuzzy,
            debug: config.debug,
        })
    }

    pub fn with_threshold(threshold: f64) -> Result<Self, MatchError> {
        Self::new(HybridConfig {
            threshold,
            ..Default::default()
        })
    }

    pub fn exact_matcher(&self) -> &ExactStringMatcher {
        &self.exact
    }

    pub fn fuzzy_matcher(&self) -> &FuzzyStringMatcher {
        &self.fuzzy
    }

    pub fn threshold(&self) -> f64 {
        self.fuzzy.threshold()
    }

    pub fn set_threshold(&mut self, threshold: f64) -> Result<(), MatchError> {
        self.fuzzy.set_threshold(threshold)
    }

    /// Same search as [`StringMatcher::find_match_with_score`], also naming
    /// the stage that answered.
    pub fn find_match_with_strategy<'c>(
        &self,
        target: &str,
        candidates: &[&'c str],
    ) -> (Option<&'c str>, f64, MatchStrategy) {
        if let (Some(hit), score) = self.exact.find_match_with_score(target, candidates) {
            return (Some(hit), score, MatchStrategy::Exact);
        }
        let (hit, score) = self.fuzzy.find_match_with_score(target, candidates);
        let strategy = if hit.is_some() {
            MatchStrategy::Fuzzy
        } else {
            MatchStrategy::None
        };
        if self.debug {
            debug!(input = target, score, strategy = %strategy, "hybrid_match");
        }
        (hit, score, strategy)
    }

    /// Regular search, then one more fuzzy pass judged against
    /// `fallback_threshold` when nothing was found. The configured threshold
    /// is not touched.
    pub fn find_match_with_fallback<'c>(
        &self,
        target: &str,
        candidates: &[&'c str],
        fallback_threshold: f64,
    ) -> Result<(Option<&'c str>, f64), MatchError> {
        validate_unit("fallback_threshold", fallback_threshold)?;
        let (hit, score) = self.find_match_with_score(target, candidates);
        if hit.is_some() {
            return Ok((hit, score));
        }
        Ok(self
            .fuzzy
            .find_with_threshold(target, candidates, fallback_threshold))
    }
}

impl Default for HybridStringMatcher {
    fn default() -> Self {
        Self {
            exact: ExactStringMatcher::default(),
            fuzzy: FuzzyStringMatcher::default(),
            debug: false,
        }
    }
}

impl StringMatcher for HybridStringMatcher {
    fn name(&self) -> &'static str {
        "hybrid"
    }

    fn find_match_with_score<'c>(
        &self,
        target: &str,
        candidates: &[&'c str],
    ) -> (Option<&'c str>, f64) {
        let (hit, score, _) = self.find_match_with_strategy(target, candidates);
        (hit, score)
    }

    fn match_with_result(&self, target: &str, candidates: &[&str]) -> MatchResult {
        match self.find_match_with_strategy(target, candidates) {
            (Some(hit), _, MatchStrategy::Exact) => MatchResult::exact(hit),
            (Some(hit), score, _) => MatchResult::fuzzy(hit, score),
            (None, score, _) => MatchResult::no_match(score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MatchKind;

    #[test]
    fn exact_stage_wins_first() {
        let matcher = HybridStringMatcher::default();
        let (hit, score, strategy) =
            matcher.find_match_with_strategy("TEST", &["test_file", "test"]);
        assert_eq!(hit, Some("test_file"));
        assert_eq!(score, 1.0);
        assert_eq!(strategy, MatchStrategy::Exact);
    }

    #[test]
    fn falls_through_to_fuzzy() {
        let matcher = HybridStringMatcher::default();
        let (hit, _, strategy) = matcher.find_match_with_strategy("Shanghia", &["Shanghai"]);
        assert_eq!(hit, Some("Shanghai"));
        assert_eq!(strategy, MatchStrategy::Fuzzy);
        assert_eq!(
            matcher.match_with_result("Shanghia", &["Shanghai"]).kind,
            MatchKind::Fuzzy
        );
    }

    #[test]
    fn hybrid_finds_whatever_exact_finds() {
        let hybrid = HybridStringMatcher::default();
        let exact = ExactStringMatcher::default();
        let candidates = ["alpha_site", "bravo", "charlie"];
        for target in ["ALPHA", "bravo_20240101", "delta", ""] {
            if let Some(hit) = exact.find_match(target, &candidates) {
                assert_eq!(hybrid.find_match(target, &candidates), Some(hit));
            }
        }
    }

    #[test]
    fn fallback_retries_with_lower_threshold() {
        let matcher = HybridStringMatcher::with_threshold(0.95).expect("valid threshold");
        let (hit, _) = matcher.find_match_with_score("Shanghia", &["Shanghai"]);
        assert!(hit.is_none());

        let (hit, score) = matcher
            .find_match_with_fallback("Shanghia", &["Shanghai"], DEFAULT_FALLBACK_THRESHOLD)
            .expect("valid fallback");
        assert_eq!(hit, Some("Shanghai"));
        assert!(score >= DEFAULT_FALLBACK_THRESHOLD);
        assert_eq!(matcher.threshold(), 0.95);

        assert!(matcher
            .find_match_with_fallback("Shanghia", &["Shanghai"], 2.0)
            .is_err());
    }

    #[test]
    fn threshold_setter_delegates_to_fuzzy_stage() {
        let mut matcher = HybridStringMatcher::default();
        matcher.set_threshold(0.9).expect("valid threshold");
        assert_eq!(matcher.fuzzy_matcher().threshold(), 0.9);
        assert!(matcher.set_threshold(-1.0).is_err());
    }
}
