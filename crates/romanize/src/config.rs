use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{validate_unit, RomanizeError};
use crate::language::Language;

pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// Score ceilings below which each cascade stage still runs. A stage is
/// skipped once an earlier stage has produced a score at or above its gate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageGates {
    pub phonetic: f64,
    pub arabic: f64,
    pub syllable: f64,
    pub sound_change: f64,
    pub cross_language: f64,
    pub character: f64,
}

impl Default for StageGates {
    fn default() -> Self {
        Self {
            phonetic: 0.85,
            arabic: 0.85,
            syllable: 0.8,
            sound_change: 0.75,
            cross_language: 0.7,
            character: 0.65,
        }
    }
}

impl StageGates {
    pub fn validate(&self) -> Result<(), RomanizeError> {
        validate_unit("gates.phonetic", self.phonetic)?;
        validate_unit("gates.arabic", self.arabic)?;
        validate_unit("gates.syllable", self.syllable)?;
        validate_unit("gates.sound_change", self.sound_change)?;
        validate_unit("gates.cross_language", self.cross_language)?;
        validate_unit("gates.character", self.character)
    }
}

/// When a repeatedly accepted pair becomes a learned mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningPolicy {
    /// Accepted matches of the same pair needed for promotion.
    pub min_occurrences: u32,
    /// Minimum score of the promoting match.
    pub min_score: f64,
    /// Upper bound on the confidence of promoted mappings. A mapping takes
    /// the score of the match that promoted it when that is lower.
    pub confidence: f64,
}

impl Default for LearningPolicy {
    fn default() -> Self {
        Self {
            min_occurrences: 3,
            min_score: 0.8,
            confidence: 0.95,
        }
    }
}

impl LearningPolicy {
    pub fn validate(&self) -> Result<(), RomanizeError> {
        if self.min_occurrences == 0 {
            return Err(RomanizeError::InvalidConfig(
                "learning.min_occurrences must be at least 1".into(),
            ));
        }
        validate_unit("learning.min_score", self.min_score)?;
        validate_unit("learning.confidence", self.confidence)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RomanizerConfig {
    /// Minimum score for a candidate to be returned, in `[0, 1]`.
    pub threshold: f64,
    pub enable_phonetic: bool,
    pub enable_cross_language: bool,
    pub enable_adaptive_learning: bool,
    /// Multipliers for mapping scores per language. Languages not listed
    /// weigh 1.0.
    pub language_weights: BTreeMap<Language, f64>,
    pub gates: StageGates,
    pub learning: LearningPolicy,
    /// Log every candidate score at `debug`.
    pub debug: bool,
}

impl Default for RomanizerConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            enable_phonetic: true,
            enable_cross_language: false,
            enable_adaptive_learning: true,
            language_weights: BTreeMap::new(),
            gates: StageGates::default(),
            learning: LearningPolicy::default(),
            debug: false,
        }
    }
}

impl RomanizerConfig {
    pub fn validate(&self) -> Result<(), RomanizeError> {
        validate_unit("threshold", self.threshold)?;
        for (language, weight) in &self.language_weights {
            validate_weight(*language, *weight)?;
        }
        self.gates.validate()?;
        self.learning.validate()
    }

    pub fn language_weight(&self, language: Language) -> f64 {
        self.language_weights.get(&language).copied().unwrap_or(1.0)
    }
}

pub(crate) fn validate_weight(language: Language, weight: f64) -> Result<(), RomanizeError> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(RomanizeError::InvalidConfig(format!(
            "language weight for {language} must be a non-negative number (got {weight})"
        )));
    }
    Ok(())
}
