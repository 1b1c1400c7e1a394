use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::factory::MatcherKind;
use crate::fuzzy::DEFAULT_THRESHOLD;
use crate::types::{validate_unit, BoxError, MatchError};

/// Rewrites the input before a target looks at it.
pub type Preprocessor = Arc<dyn Fn(&str) -> Result<String, BoxError> + Send + Sync>;
/// Accepts or rejects a candidate value found for a target.
pub type Validator = Arc<dyn Fn(&str) -> Result<bool, BoxError> + Send + Sync>;

static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{4}[-/]?\d{2}[-/]?\d{2}|\d{2}[-/]?\d{2}[-/]?\d{4})")
        .expect("date pattern compiles")
});
static EXTENSION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.([a-zA-Z0-9]+)$").expect("extension pattern compiles"));
static NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(?:[.,]\d+)*)").expect("number pattern compiles"));

/// Formats accepted by [`is_valid_date`], tried in order.
pub const DATE_FORMATS: [&str; 8] = [
    "%Y%m%d", "%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y", "%d/%m/%Y", "%m/%d/%Y", "%d.%m.%Y", "%Y.%m.%d",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    Name,
    Date,
    FileExtension,
    Number,
    Custom,
}

impl TargetKind {
    pub const ALL: [TargetKind; 5] = [
        TargetKind::Name,
        TargetKind::Date,
        TargetKind::FileExtension,
        TargetKind::Number,
        TargetKind::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TargetKind::Name => "name",
            TargetKind::Date => "date",
            TargetKind::FileExtension => "file_extension",
            TargetKind::Number => "number",
            TargetKind::Custom => "custom",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetKind {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| MatchError::UnknownTargetKind(s.to_string()))
    }
}

/// How one named target is recognized inside an input string.
///
/// Evaluation order: preprocessor, length guard, regex extraction (validated),
/// then the configured matcher over `patterns` (validated).
#[derive(Clone)]
pub struct TargetConfig {
    pub kind: TargetKind,
    pub patterns: Vec<String>,
    pub strategy: MatcherKind,
    pub threshold: f64,
    pub case_sensitive: bool,
    pub required: bool,
    pub weight: f64,
    /// Pattern-path scores below this are discarded.
    pub min_score: f64,
    /// Inputs longer than this many chars are not evaluated.
    pub max_length: Option<usize>,
    pub regex: Option<Regex>,
    pub preprocessor: Option<Preprocessor>,
    pub validator: Option<Validator>,
}

impl fmt::Debug for TargetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetConfig")
            .field("kind", &self.kind)
            .field("patterns", &self.patterns)
            .field("strategy", &self.strategy)
            .field("threshold", &self.threshold)
            .field("case_sensitive", &self.case_sensitive)
            .field("required", &self.required)
            .field("weight", &self.weight)
            .field("min_score", &self.min_score)
            .field("max_length", &self.max_length)
            .field("regex", &self.regex.as_ref().map(Regex::as_str))
            .field("preprocessor", &self.preprocessor.is_some())
            .field("validator", &self.validator.is_some())
            .finish()
    }
}

impl TargetConfig {
    fn base(kind: TargetKind, patterns: Vec<String>) -> Self {
        Self {
            kind,
            patterns,
            strategy: MatcherKind::Hybrid,
            threshold: DEFAULT_THRESHOLD,
            case_sensitive: false,
            required: true,
            weight: 1.0,
            min_score: 0.0,
            max_length: None,
            regex: None,
            preprocessor: None,
            validator: None,
        }
    }

    /// Hybrid matcher, threshold 0.65, required, weight 1.0.
    pub fn name<S: AsRef<str>>(names: &[S]) -> Self {
        Self::base(TargetKind::Name, to_owned(names))
    }

    /// Date regex plus calendar validation; fuzzy 0.8, required.
    pub fn date() -> Self {
        let mut cfg = Self::base(TargetKind::Date, Vec::new());
        cfg.strategy = MatcherKind::Fuzzy;
        cfg.threshold = 0.8;
        cfg.regex = Some(DATE_PATTERN.clone());
        cfg.validator = Some(Arc::new(date_validator));
        cfg
    }

    /// Trailing extension restricted to `extensions` (leading dot optional);
    /// exact, optional, weight 0.5.
    pub fn extension<S: AsRef<str>>(extensions: &[S]) -> Self {
        let normalized: Vec<String> = extensions
            .iter()
            .map(|ext| normalize_extension(ext.as_ref()))
            .collect();
        let allowed: HashSet<String> = normalized.iter().map(|ext| ext.to_lowercase()).collect();

        let mut cfg = Self::base(TargetKind::FileExtension, normalized);
        cfg.strategy = MatcherKind::Exact;
        cfg.required = false;
        cfg.weight = 0.5;
        cfg.regex = Some(EXTENSION_PATTERN.clone());
        cfg.validator = Some(Arc::new(move |value: &str| -> Result<bool, BoxError> {
            Ok(allowed.contains(&normalize_extension(value).to_lowercase()))
        }));
        cfg
    }

    /// Digit runs with optional `.`/`,` groups; fuzzy 0.9, optional, weight 0.8.
    pub fn number() -> Self {
        let mut cfg = Self::base(TargetKind::Number, Vec::new());
        cfg.strategy = MatcherKind::Fuzzy;
        cfg.threshold = 0.9;
        cfg.required = false;
        cfg.weight = 0.8;
        cfg.regex = Some(NUMBER_PATTERN.clone());
        cfg.validator = Some(Arc::new(number_validator));
        cfg
    }

    /// Hybrid 0.65, required, weight 1.0; add a regex or validator with the
    /// builder methods.
    pub fn custom<S: AsRef<str>>(patterns: &[S]) -> Self {
        Self::base(TargetKind::Custom, to_owned(patterns))
    }

    pub fn with_strategy(mut self, strategy: MatcherKind) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_regex(mut self, pattern: &str) -> Result<Self, MatchError> {
        let regex = Regex::new(pattern).map_err(|source| MatchError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        self.regex = Some(regex);
        Ok(self)
    }

    pub fn with_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&str) -> Result<bool, BoxError> + Send + Sync + 'static,
    {
        self.validator = Some(Arc::new(validator));
        self
    }

    pub fn with_preprocessor<F>(mut self, preprocessor: F) -> Self
    where
        F: Fn(&str) -> Result<String, BoxError> + Send + Sync + 'static,
    {
        self.preprocessor = Some(Arc::new(preprocessor));
        self
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        validate_unit("threshold", self.threshold)?;
        validate_unit("min_score", self.min_score)?;
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(MatchError::InvalidConfig(format!(
                "weight must be a finite value >= 0 (got {})",
                self.weight
            )));
        }
        if self.max_length == Some(0) {
            return Err(MatchError::InvalidConfig(
                "max_length must be > 0 when set".into(),
            ));
        }
        if self.patterns.is_empty() && self.regex.is_none() {
            return Err(MatchError::InvalidConfig(format!(
                "{} target needs at least one pattern or a regex",
                self.kind
            )));
        }
        Ok(())
    }
}

fn to_owned<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    values.iter().map(|v| v.as_ref().to_string()).collect()
}

/// `"kmz"` and `".kmz"` both become `".kmz"`.
pub fn normalize_extension(ext: &str) -> String {
    let trimmed = ext.trim();
    if trimmed.starts_with('.') {
        trimmed.to_string()
    } else {
        format!(".{trimmed}")
    }
}

/// True when `value` parses as a calendar date in one of [`DATE_FORMATS`].
pub fn is_valid_date(value: &str) -> bool {
    let value = value.trim();
    // chrono's %Y accepts a variable digit count, so the compact form is
    // split by hand to keep `20240101` from being read as year 20240101.
    if value.len() == 8 && value.bytes().all(|b| b.is_ascii_digit()) {
        let field = |range: std::ops::Range<usize>| value[range].parse::<u32>().ok();
        return match (field(0..4), field(4..6), field(6..8)) {
            (Some(year), Some(month), Some(day)) => {
                NaiveDate::from_ymd_opt(year as i32, month, day).is_some()
            }
            _ => false,
        };
    }
    DATE_FORMATS
        .iter()
        .skip(1)
        .any(|format| NaiveDate::parse_from_str(value, format).is_ok())
}

fn date_validator(value: &str) -> Result<bool, BoxError> {
    Ok(is_valid_date(value))
}

fn number_validator(value: &str) -> Result<bool, BoxError> {
    Ok(is_valid_number(value))
}

/// True when `value` parses as a number once `,` separators are removed.
pub fn is_valid_number(value: &str) -> bool {
    value.replace(',', "").parse::<f64>().is_ok()
}
