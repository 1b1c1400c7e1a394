use std::error::Error as StdError;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type returned by caller-supplied pre-processors and validators.
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// How a value was matched.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// Containment or equality; score is always 1.0.
    Exact,
    /// Similarity at or above the configured threshold.
    Fuzzy,
    /// Regex extraction accepted by the target's validator.
    Pattern,
    #[default]
    None,
}

impl MatchKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchKind::Exact => "exact",
            MatchKind::Fuzzy => "fuzzy",
            MatchKind::Pattern => "pattern",
            MatchKind::None => "none",
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse bucket for a confidence value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl ConfidenceLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.9 {
            ConfidenceLevel::VeryHigh
        } else if score >= 0.7 {
            ConfidenceLevel::High
        } else if score >= 0.5 {
            ConfidenceLevel::Medium
        } else if score >= 0.3 {
            ConfidenceLevel::Low
        } else {
            ConfidenceLevel::VeryLow
        }
    }
}

/// Outcome of matching one input against one candidate set.
///
/// The constructors keep `matched`, `score` and `kind` consistent: a result
/// carries a value exactly when its score is positive and its kind is not
/// [`MatchKind::None`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    pub matched: Option<String>,
    pub score: f64,
    pub kind: MatchKind,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_pattern: Option<String>,
    /// Byte offsets of the matched region inside the input, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<(usize, usize)>,
}

impl MatchResult {
    /// No value; `best_score` is kept for diagnostics only.
    pub fn no_match(best_score: f64) -> Self {
        Self {
            matched: None,
            score: clamp_unit(best_score),
            kind: MatchKind::None,
            confidence: 0.0,
            source_pattern: None,
            span: None,
        }
    }

    /// Builds a positive result, degrading to [`MatchResult::no_match`] when
    /// the score is not positive or the kind is `None`.
    pub fn matched(value: impl Into<String>, score: f64, kind: MatchKind) -> Self {
        let score = clamp_unit(score);
        if score <= 0.0 || kind == MatchKind::None {
            return Self::no_match(score);
        }
        Self {
            matched: Some(value.into()),
            score,
            kind,
            confidence: score,
            source_pattern: None,
            span: None,
        }
    }

    pub fn exact(value: impl Into<String>) -> Self {
        Self::matched(value, 1.0, MatchKind::Exact)
    }

    pub fn fuzzy(value: impl Into<String>, score: f64) -> Self {
        Self::matched(value, score, MatchKind::Fuzzy)
    }

    /// Regex extraction hit: score 1.0, confidence 0.9.
    pub fn pattern(value: impl Into<String>, span: (usize, usize)) -> Self {
        Self::matched(value, 1.0, MatchKind::Pattern)
            .with_confidence(0.9)
            .with_span(span)
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        if self.is_matched() {
            self.confidence = clamp_unit(confidence);
        }
        self
    }

    pub fn with_source_pattern(mut self, pattern: impl Into<String>) -> Self {
        if self.is_matched() {
            self.source_pattern = Some(pattern.into());
        }
        self
    }

    pub fn with_span(mut self, span: (usize, usize)) -> Self {
        if self.is_matched() {
            self.span = Some(span);
        }
        self
    }

    pub fn is_matched(&self) -> bool {
        self.matched.is_some()
    }

    pub fn confidence_level(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_score(self.confidence)
    }
}

/// Errors raised while configuring matchers or registering targets.
///
/// Matching itself never fails: an unmatched input is `None` plus the best
/// score seen.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    #[error("unknown matcher kind `{0}` (expected exact, fuzzy or hybrid)")]
    UnknownMatcherKind(String),
    #[error("unknown target kind `{0}` (expected name, date, file_extension, number or custom)")]
    UnknownTargetKind(String),
    #[error("unknown preset `{0}` (expected strict, relaxed or default)")]
    UnknownPreset(String),
    #[error("invalid regex `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Rejects values outside `[0, 1]` (including NaN).
pub(crate) fn validate_unit(field: &str, value: f64) -> Result<(), MatchError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(MatchError::InvalidConfig(format!(
            "{field} must be between 0.0 and 1.0 (got {value})"
        )));
    }
    Ok(())
}

pub(crate) fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
