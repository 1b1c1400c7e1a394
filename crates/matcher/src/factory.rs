//! Builds configured matchers from a kind name and options.
//!
//! Kind names are parsed strictly: `exact`, `fuzzy` and `hybrid`, lowercase,
//! with no synonyms.
//!
//! ```rust
//! use matcher::{create_string_matcher, MatcherOptions, StringMatcher};
//!
//! let matcher = create_string_matcher("hybrid", &MatcherOptions::default()).unwrap();
//! assert_eq!(matcher.find_match("TEST", &["test_file"]), Some("test_file"));
//! assert!(create_string_matcher("Hybrid", &MatcherOptions::default()).is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::exact::{ExactConfig, ExactStringMatcher};
use crate::fuzzy::{FuzzyConfig, FuzzyStringMatcher, DEFAULT_THRESHOLD};
use crate::hybrid::{HybridConfig, HybridStringMatcher};
use crate::name::{ExactNameMatcher, FuzzyNameMatcher, HybridNameMatcher, NameMatcher};
use crate::traits::StringMatcher;
use crate::types::{validate_unit, MatchError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatcherKind {
    Exact,
    Fuzzy,
    Hybrid,
}

impl MatcherKind {
    pub const ALL: [MatcherKind; 3] = [MatcherKind::Exact, MatcherKind::Fuzzy, MatcherKind::Hybrid];

    pub fn as_str(self) -> &'static str {
        match self {
            MatcherKind::Exact => "exact",
            MatcherKind::Fuzzy => "fuzzy",
            MatcherKind::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for MatcherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatcherKind {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MatcherKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| MatchError::UnknownMatcherKind(s.to_string()))
    }
}

/// Options shared by every matcher kind. Fields a kind does not use are
/// ignored (exact matchers have no threshold).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherOptions {
    pub threshold: f64,
    pub case_sensitive: bool,
    pub debug: bool,
}

impl Default for MatcherOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            case_sensitive: false,
            debug: false,
        }
    }
}

impl MatcherOptions {
    pub fn validate(&self) -> Result<(), MatchError> {
        validate_unit("threshold", self.threshold)
    }
}

/// Named option bundles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Threshold 0.8, case-sensitive.
    Strict,
    /// Threshold 0.5.
    Relaxed,
    /// Threshold 0.65.
    Default,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Strict, Preset::Relaxed, Preset::Default];

    pub fn as_str(self) -> &'static str {
        match self {
            Preset::Strict => "strict",
            Preset::Relaxed => "relaxed",
            Preset::Default => "default",
        }
    }

    pub fn options(self) -> MatcherOptions {
        match self {
            Preset::Strict => MatcherOptions {
                threshold: 0.8,
                case_sensitive: true,
                debug: false,
            },
            Preset::Relaxed => MatcherOptions {
                threshold: 0.5,
                ..Default::default()
            },
            Preset::Default => MatcherOptions::default(),
        }
    }
}

impl FromStr for Preset {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.as_str() == s)
            .ok_or_else(|| MatchError::UnknownPreset(s.to_string()))
    }
}

/// Supported kinds and presets, for help output and config validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionsCatalog {
    pub kinds: Vec<&'static str>,
    pub presets: Vec<(&'static str, MatcherOptions)>,
    pub threshold_range: (f64, f64),
    pub default_threshold: f64,
}

pub fn build_string_matcher(
    kind: MatcherKind,
    options: &MatcherOptions,
) -> Result<Box<dyn StringMatcher>, MatchError> {
    options.validate()?;
    let matcher: Box<dyn StringMatcher> = match kind {
        MatcherKind::Exact => Box::new(ExactStringMatcher::new(ExactConfig {
            case_sensitive: options.case_sensitive,
            debug: options.debug,
        })),
        MatcherKind::Fuzzy => Box::new(FuzzyStringMatcher::new(FuzzyConfig {
            threshold: options.threshold,
            debug: options.debug,
        })?),
        MatcherKind::Hybrid => Box::new(HybridStringMatcher::new(HybridConfig {
            threshold: options.threshold,
            case_sensitive: options.case_sensitive,
            debug: options.debug,
        })?),
    };
    Ok(matcher)
}

pub fn create_string_matcher(
    kind: &str,
    options: &MatcherOptions,
) -> Result<Box<dyn StringMatcher>, MatchError> {
    build_string_matcher(kind.parse()?, options)
}

/// Name matchers are always case-insensitive; `case_sensitive` is ignored.
pub fn build_name_matcher(
    kind: MatcherKind,
    options: &MatcherOptions,
) -> Result<Box<dyn NameMatcher>, MatchError> {
    options.validate()?;
    let fuzzy = FuzzyConfig {
        threshold: options.threshold,
        debug: options.debug,
    };
    let matcher: Box<dyn NameMatcher> = match kind {
        MatcherKind::Exact => Box::new(ExactNameMatcher::new(options.debug)),
        MatcherKind::Fuzzy => Box::new(FuzzyNameMatcher::new(fuzzy)?),
        MatcherKind::Hybrid => Box::new(HybridNameMatcher::new(fuzzy)?),
    };
    Ok(matcher)
}

pub fn create_name_matcher(
    kind: &str,
    options: &MatcherOptions,
) -> Result<Box<dyn NameMatcher>, MatchError> {
    build_name_matcher(kind.parse()?, options)
}

/// Preset-driven constructors.
pub struct MatcherFactory;

impl MatcherFactory {
    pub fn preset(kind: MatcherKind, preset: Preset) -> Result<Box<dyn StringMatcher>, MatchError> {
        build_string_matcher(kind, &preset.options())
    }

    pub fn strict(kind: MatcherKind) -> Result<Box<dyn StringMatcher>, MatchError> {
        Self::preset(kind, Preset::Strict)
    }

    pub fn relaxed(kind: MatcherKind) -> Result<Box<dyn StringMatcher>, MatchError> {
        Self::preset(kind, Preset::Relaxed)
    }

    /// Matcher with per-candidate `debug` events enabled.
    pub fn debug(kind: MatcherKind, threshold: f64) -> Result<Box<dyn StringMatcher>, MatchError> {
        build_string_matcher(
            kind,
            &MatcherOptions {
                threshold,
                debug: true,
                ..Default::default()
            },
        )
    }

    /// Hybrid name matcher tuned for filenames.
    pub fn file_name_matcher(threshold: f64, debug: bool) -> Result<HybridNameMatcher, MatchError> {
        HybridNameMatcher::new(FuzzyConfig { threshold, debug })
    }

    pub fn options_catalog() -> OptionsCatalog {
        OptionsCatalog {
            kinds: MatcherKind::ALL.iter().map(|kind| kind.as_str()).collect(),
            presets: Preset::ALL
                .iter()
                .map(|preset| (preset.as_str(), preset.options()))
                .collect(),
            threshold_range: (0.0, 1.0),
            default_threshold: DEFAULT_THRESHOLD,
        }
    }
}
