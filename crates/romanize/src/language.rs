//! Language tags and script-based language detection.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use canonical::{Script, ScriptProfile};
use serde::{Deserialize, Serialize};

use crate::error::RomanizeError;

/// Prior given to every language when either string contains Latin letters.
const LATIN_PRIOR: f64 = 0.1;
/// Weight added for each non-Latin script present.
const SCRIPT_WEIGHT: f64 = 0.8;
/// Weight added per mapping whose original or romanized form equals an input.
pub(crate) const MAPPING_HIT_WEIGHT: f64 = 0.3;

/// Pinyin and Vietnamese tone marks; their presence points a Latin string at
/// Chinese syllable patterns.
const TONE_MARKS: &str = "āēīōūǖàèìòùǜáéíóúǘǎěǐǒǔǚâêîôûäëïöü";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Chinese,
    Japanese,
    Korean,
    Arabic,
    Russian,
    Greek,
    Thai,
    Vietnamese,
    Hindi,
    Persian,
    /// Rules and phonemes that apply regardless of language, and the tag for
    /// learned mappings whose language could not be told from the script.
    Universal,
}

impl Language {
    /// Languages that detection can assign weight to.
    pub const DETECTABLE: [Language; 10] = [
        Language::Chinese,
        Language::Japanese,
        Language::Korean,
        Language::Arabic,
        Language::Russian,
        Language::Greek,
        Language::Thai,
        Language::Vietnamese,
        Language::Hindi,
        Language::Persian,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Language::Chinese => "chinese",
            Language::Japanese => "japanese",
            Language::Korean => "korean",
            Language::Arabic => "arabic",
            Language::Russian => "russian",
            Language::Greek => "greek",
            Language::Thai => "thai",
            Language::Vietnamese => "vietnamese",
            Language::Hindi => "hindi",
            Language::Persian => "persian",
            Language::Universal => "universal",
        }
    }

    /// Language implied by a non-Latin script.
    pub fn from_script(script: Script) -> Option<Language> {
        match script {
            Script::Han => Some(Language::Chinese),
            Script::Hiragana | Script::Katakana => Some(Language::Japanese),
            Script::Hangul => Some(Language::Korean),
            Script::Arabic => Some(Language::Arabic),
            Script::Cyrillic => Some(Language::Russian),
            Script::Greek => Some(Language::Greek),
            Script::Thai => Some(Language::Thai),
            Script::Latin | Script::Unknown => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = RomanizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let language = match s {
            "chinese" => Language::Chinese,
            "japanese" => Language::Japanese,
            "korean" => Language::Korean,
            "arabic" => Language::Arabic,
            "russian" => Language::Russian,
            "greek" => Language::Greek,
            "thai" => Language::Thai,
            "vietnamese" => Language::Vietnamese,
            "hindi" => Language::Hindi,
            "persian" => Language::Persian,
            "universal" => Language::Universal,
            other => return Err(RomanizeError::UnknownLanguage(other.to_string())),
        };
        Ok(language)
    }
}

/// Normalized language weights for one (target, candidate) pair. Weights sum
/// to 1 unless nothing was detected, in which case the map is empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LanguageScores(BTreeMap<Language, f64>);

impl LanguageScores {
    /// Scores from the scripts present in either string plus `mapping_hits`,
    /// the languages of table entries that name either string.
    pub fn detect(target: &str, candidate: &str, mapping_hits: &[Language]) -> Self {
        let mut raw: BTreeMap<Language, f64> = BTreeMap::new();
        let target_profile = ScriptProfile::of(target);
        let candidate_profile = ScriptProfile::of(candidate);

        let mut scripts: Vec<Script> = target_profile.scripts().collect();
        for script in candidate_profile.scripts() {
            if !scripts.contains(&script) {
                scripts.push(script);
            }
        }

        for script in scripts {
            if script == Script::Latin {
                for language in Language::DETECTABLE {
                    *raw.entry(language).or_insert(0.0) += LATIN_PRIOR;
                }
            } else if let Some(language) = Language::from_script(script) {
                *raw.entry(language).or_insert(0.0) += SCRIPT_WEIGHT;
            }
        }
        for &language in mapping_hits {
            *raw.entry(language).or_insert(0.0) += MAPPING_HIT_WEIGHT;
        }

        let total: f64 = raw.values().sum();
        if total > 0.0 {
            for weight in raw.values_mut() {
                *weight /= total;
            }
        }
        LanguageScores(raw)
    }

    pub fn weight(&self, language: Language) -> f64 {
        self.0.get(&language).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, language: Language) -> bool {
        self.0.contains_key(&language)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Language, f64)> + '_ {
        self.0.iter().map(|(language, weight)| (*language, *weight))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Language whose syllable patterns fit `text`: the dominant script decides,
/// Latin with tone marks reads as pinyin, anything else is universal.
pub fn language_of_text(text: &str) -> Language {
    match ScriptProfile::of(text).dominant() {
        Some(Script::Latin) if text.chars().any(|ch| TONE_MARKS.contains(ch)) => {
            Language::Chinese
        }
        Some(script) => Language::from_script(script).unwrap_or(Language::Universal),
        None => Language::Universal,
    }
}

/// Language shared by a pair, judged by the first non-Latin script found in
/// either string. Used to tag learned mappings.
pub fn language_of_pair(target: &str, candidate: &str) -> Language {
    ScriptProfile::of(target)
        .scripts()
        .chain(ScriptProfile::of(candidate).scripts())
        .find_map(Language::from_script)
        .unwrap_or(Language::Universal)
}

/// True when the dominant script of `text` is something other than Latin.
pub fn is_original_script(text: &str) -> bool {
    matches!(ScriptProfile::of(text).dominant(), Some(script) if script != Script::Latin)
}
