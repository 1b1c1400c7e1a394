//! Filename-oriented matchers.
//!
//! Two questions are asked of a filename: which known *name* does it
//! contain, and which descriptive *pattern* (like `finished_points_and_tracks`)
//! does it follow. Underscores and spaces are interchangeable in patterns.

use canonical::split_separators;
use tracing::debug;

use crate::fuzzy::{FuzzyConfig, FuzzyStringMatcher};
use crate::similarity::{SimilarityCalculator, DEFAULT_PREFIX_WEIGHT};
use crate::types::{MatchError, MatchKind, MatchResult};

/// Weight of the prefix-biased similarity in fuzzy pattern scoring; the
/// keyword-overlap ratio gets the rest.
const PATTERN_SIMILARITY_WEIGHT: f64 = 0.4;
/// A pattern word counts as present when some filename word scores above this.
const WORD_MATCH_FLOOR: f64 = 0.7;

pub trait NameMatcher: Send + Sync {
    fn match_name_with_score<'c>(&self, filename: &str, names: &[&'c str]) -> (Option<&'c str>, f64);

    fn match_pattern_with_score<'c>(
        &self,
        filename: &str,
        patterns: &[&'c str],
    ) -> (Option<&'c str>, f64);

    fn match_name<'c>(&self, filename: &str, names: &[&'c str]) -> Option<&'c str> {
        self.match_name_with_score(filename, names).0
    }

    fn match_pattern<'c>(&self, filename: &str, patterns: &[&'c str]) -> Option<&'c str> {
        self.match_pattern_with_score(filename, patterns).0
    }

    fn match_name_result(&self, filename: &str, names: &[&str]) -> MatchResult {
        scored_result(self.match_name_with_score(filename, names))
    }
}

fn scored_result((hit, score): (Option<&str>, f64)) -> MatchResult {
    match hit {
        Some(value) => {
            let kind = if score >= 1.0 {
                MatchKind::Exact
            } else {
                MatchKind::Fuzzy
            };
            MatchResult::matched(value, score, kind).with_source_pattern(value)
        }
        None => MatchResult::no_match(score),
    }
}

fn pattern_form(text: &str) -> String {
    text.replace('_', " ").trim().to_lowercase()
}

/// Case-insensitive containment.
#[derive(Debug, Clone, Default)]
pub struct ExactNameMatcher {
    debug: bool,
}

impl ExactNameMatcher {
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// First name contained in the filename, with the byte span of the hit.
    /// The span is omitted when lowercasing changes the filename's byte
    /// length, since offsets would no longer line up.
    pub fn locate<'c>(&self, filename: &str, names: &[&'c str]) -> Option<(&'c str, Option<(usize, usize)>)> {
        let lowered = filename.to_lowercase();
        let hit = names.iter().copied().find_map(|name| {
            let needle = name.to_lowercase();
            if needle.is_empty() {
                return None;
            }
            lowered.find(&needle).map(|start| {
                let span = (lowered.len() == filename.len()).then(|| (start, start + needle.len()));
                (name, span)
            })
        });
        if self.debug {
            debug!(filename, matched = ?hit.map(|(name, _)| name), "exact_name_match");
        }
        hit
    }
}

impl NameMatcher for ExactNameMatcher {
    fn match_name_with_score<'c>(&self, filename: &str, names: &[&'c str]) -> (Option<&'c str>, f64) {
        match self.locate(filename, names) {
            Some((name, _)) => (Some(name), 1.0),
            None => (None, 0.0),
        }
    }

    fn match_pattern_with_score<'c>(
        &self,
        filename: &str,
        patterns: &[&'c str],
    ) -> (Option<&'c str>, f64) {
        let file = pattern_form(filename);
        let hit = patterns.iter().copied().find(|pattern| {
            let pattern = pattern_form(pattern);
            !pattern.is_empty() && file.contains(&pattern)
        });
        if self.debug {
            debug!(filename, matched = ?hit, "exact_pattern_match");
        }
        match hit {
            Some(pattern) => (Some(pattern), 1.0),
            None => (None, 0.0),
        }
    }

    fn match_name_result(&self, filename: &str, names: &[&str]) -> MatchResult {
        match self.locate(filename, names) {
            Some((name, span)) => {
                let result = MatchResult::exact(name).with_source_pattern(name);
                match span {
                    Some(span) => result.with_span(span),
                    None => result,
                }
            }
            None => MatchResult::no_match(0.0),
        }
    }
}

/// Prefix-biased similarity for names; similarity plus keyword overlap for
/// patterns.
#[derive(Debug, Clone)]
pub struct FuzzyNameMatcher {
    fuzzy: FuzzyStringMatcher,
    prefix_weight: f64,
    debug: bool,
}

impl FuzzyNameMatcher {
    pub fn new(config: FuzzyConfig) -> Result<Self, MatchError> {
        Ok(Self {
            fuzzy: FuzzyStringMatcher::new(config)?,
            prefix_weight: DEFAULT_PREFIX_WEIGHT,
            debug: config.debug,
        })
    }

    pub fn with_threshold(threshold: f64) -> Result<Self, MatchError> {
        Self::new(FuzzyConfig {
            threshold,
            ..Default::default()
        })
    }

    pub fn threshold(&self) -> f64 {
        self.fuzzy.threshold()
    }

    fn calculator(&self) -> &SimilarityCalculator {
        self.fuzzy.calculator()
    }

    /// `0.4 · prefix-biased similarity + 0.6 · keyword overlap` for one
    /// pattern against an already normalized filename.
    pub fn pattern_score(&self, filename: &str, pattern: &str) -> f64 {
        let file = pattern_form(filename);
        let pattern = pattern_form(pattern);
        self.pattern_score_normalized(&file, &pattern)
    }

    fn pattern_score_normalized(&self, file: &str, pattern: &str) -> f64 {
        let calc = self.calculator();
        let similarity = calc.prefix_biased(file, pattern, self.prefix_weight);

        let file_words = split_separators(file);
        let pattern_words = split_separators(pattern);
        let overlap = if pattern_words.is_empty() {
            0.0
        } else {
            let matched = pattern_words
                .iter()
                .filter(|word| {
                    file_words
                        .iter()
                        .any(|file_word| calc.similarity(&word.text, &file_word.text) > WORD_MATCH_FLOOR)
                })
                .count();
            matched as f64 / pattern_words.len() as f64
        };

        PATTERN_SIMILARITY_WEIGHT * similarity + (1.0 - PATTERN_SIMILARITY_WEIGHT) * overlap
    }
}

impl Default for FuzzyNameMatcher {
    fn default() -> Self {
        Self {
            fuzzy: FuzzyStringMatcher::default(),
            prefix_weight: DEFAULT_PREFIX_WEIGHT,
            debug: false,
        }
    }
}

impl NameMatcher for FuzzyNameMatcher {
    fn match_name_with_score<'c>(&self, filename: &str, names: &[&'c str]) -> (Option<&'c str>, f64) {
        self.fuzzy
            .find_match_with_prefix_bias(filename, names, self.prefix_weight)
    }

    fn match_pattern_with_score<'c>(
        &self,
        filename: &str,
        patterns: &[&'c str],
    ) -> (Option<&'c str>, f64) {
        if filename.is_empty() || patterns.is_empty() {
            return (None, 0.0);
        }
        let file = pattern_form(filename);
        let (best, score) = self.fuzzy.best_by(patterns, |pattern| {
            self.pattern_score_normalized(&file, &pattern_form(pattern))
        });
        if self.debug {
            debug!(filename, matched = ?best, score, "fuzzy_pattern_match");
        }
        match best {
            Some(pattern) if score >= self.threshold() => (Some(pattern), score),
            _ => (None, score),
        }
    }
}

/// Exact first, fuzzy when exact finds nothing; for both questions.
#[derive(Debug, Clone, Default)]
pub struct HybridNameMatcher {
    exact: ExactNameMatcher,
    fuzzy: FuzzyNameMatcher,
}

impl HybridNameMatcher {
    pub fn new(config: FuzzyConfig) -> Result<Self, MatchError> {
        Ok(Self {
            exact: ExactNameMatcher::new(config.debug),
            fuzzy: FuzzyNameMatcher::new(config)?,
        })
    }

    pub fn with_threshold(threshold: f64) -> Result<Self, MatchError> {
        Self::new(FuzzyConfig {
            threshold,
            ..Default::default()
        })
    }

    pub fn threshold(&self) -> f64 {
        self.fuzzy.threshold()
    }
}

impl NameMatcher for HybridNameMatcher {
    fn match_name_with_score<'c>(&self, filename: &str, names: &[&'c str]) -> (Option<&'c str>, f64) {
        match self.exact.match_name_with_score(filename, names) {
            (Some(hit), score) => (Some(hit), score),
            (None, _) => self.fuzzy.match_name_with_score(filename, names),
        }
    }

    fn match_pattern_with_score<'c>(
        &self,
        filename: &str,
        patterns: &[&'c str],
    ) -> (Option<&'c str>, f64) {
        match self.exact.match_pattern_with_score(filename, patterns) {
            (Some(hit), score) => (Some(hit), score),
            (None, _) => self.fuzzy.match_pattern_with_score(filename, patterns),
        }
    }

    fn match_name_result(&self, filename: &str, names: &[&str]) -> MatchResult {
        let exact = self.exact.match_name_result(filename, names);
        if exact.is_matched() {
            return exact;
        }
        self.fuzzy.match_name_result(filename, names)
    }
}
