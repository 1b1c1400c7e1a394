use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::traits::StringMatcher;
use crate::types::MatchResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExactConfig {
    pub case_sensitive: bool,
    /// Emits one `debug` event per decision.
    pub debug: bool,
}

/// Containment matcher: a candidate matches when either string contains the
/// other. The first qualifying candidate wins and always scores 1.0.
#[derive(Debug, Clone, Default)]
pub struct ExactStringMatcher {
    config: ExactConfig,
}

impl ExactStringMatcher {
    pub fn new(config: ExactConfig) -> Self {
        Self { config }
    }

    pub fn case_sensitive() -> Self {
        Self::new(ExactConfig {
            case_sensitive: true,
            ..Default::default()
        })
    }

    pub fn config(&self) -> &ExactConfig {
        &self.config
    }

    fn fold<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.config.case_sensitive {
            Cow::Borrowed(text)
        } else {
            Cow::Owned(text.to_lowercase())
        }
    }

    fn first_where<'c, F>(&self, target: &str, candidates: &[&'c str], accept: F) -> Option<&'c str>
    where
        F: Fn(&str, &str) -> bool,
    {
        if target.is_empty() {
            return None;
        }
        let folded_target = self.fold(target);
        let hit = candidates
            .iter()
            .copied()
            .filter(|candidate| !candidate.is_empty())
            .find(|candidate| accept(folded_target.as_ref(), self.fold(candidate).as_ref()));
        if self.config.debug {
            debug!(input = target, matched = ?hit, "exact_match");
        }
        hit
    }

    /// First candidate equal to the target (after case folding when
    /// case-insensitive).
    pub fn find_equal<'c>(&self, target: &str, candidates: &[&'c str]) -> Option<&'c str> {
        self.first_where(target, candidates, |t, c| t == c)
    }

    /// First candidate that contains the target.
    pub fn find_substring<'c>(&self, target: &str, candidates: &[&'c str]) -> Option<&'c str> {
        self.first_where(target, candidates, |t, c| c.contains(t))
    }
}

impl StringMatcher for ExactStringMatcher {
    fn name(&self) -> &'static str {
        "exact"
    }

    fn find_match_with_score<'c>(
        &self,
        target: &str,
        candidates: &[&'c str],
    ) -> (Option<&'c str>, f64) {
        match self.first_where(target, candidates, |t, c| t.contains(c) || c.contains(t)) {
            Some(hit) => (Some(hit), 1.0),
            None => (None, 0.0),
        }
    }

    fn match_with_result(&self, target: &str, candidates: &[&str]) -> MatchResult {
        match self.find_match(target, candidates) {
            Some(hit) => MatchResult::exact(hit),
            None => MatchResult::no_match(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MatchKind;

    #[test]
    fn containment_works_both_ways() {
        let matcher = ExactStringMatcher::default();
        assert_eq!(matcher.find_match("TEST", &["test_file", "other"]), Some("test_file"));
        assert_eq!(
            matcher.find_match("finished_points_20240101", &["points", "finished"]),
            Some("points")
        );
    }

    #[test]
    fn case_sensitive_mode_respects_case() {
        let matcher = ExactStringMatcher::case_sensitive();
        assert_eq!(matcher.find_match("TEST", &["test_file"]), None);
        assert_eq!(matcher.find_match("test", &["test_file"]), Some("test_file"));
    }

    #[test]
    fn empty_inputs_never_match() {
        let matcher = ExactStringMatcher::default();
        assert_eq!(matcher.find_match_with_score("", &["alpha"]), (None, 0.0));
        assert_eq!(matcher.find_match_with_score("alpha", &[]), (None, 0.0));
        // An empty entry would be contained in everything; it is skipped.
        assert_eq!(matcher.find_match("alpha", &["", "alp"]), Some("alp"));
    }

    #[test]
    fn equal_and_substring_are_separate_questions() {
        let matcher = ExactStringMatcher::default();
        let candidates = ["beijing shi", "Beijing"];
        assert_eq!(matcher.find_equal("BEIJING", &candidates), Some("Beijing"));
        assert_eq!(matcher.find_substring("beijing", &candidates), Some("beijing shi"));
        assert_eq!(matcher.find_substring("beijing shi district", &candidates), None);
    }

    #[test]
    fn result_is_exact_with_full_confidence() {
        let matcher = ExactStringMatcher::default();
        let result = matcher.match_with_result("alpha", &["alpha_v2"]);
        assert_eq!(result.kind, MatchKind::Exact);
        assert_eq!(result.matched.as_deref(), Some("alpha_v2"));
        assert_eq!(result.confidence, 1.0);

        let miss = matcher.match_with_result("alpha", &["bravo"]);
        assert_eq!(miss.kind, MatchKind::None);
        assert!(miss.matched.is_none());
    }
}
