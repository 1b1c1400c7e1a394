//! Syllable parsing and structure comparison.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::language::{language_of_text, Language};
use crate::phonetic::char_similarity;

/// Syllable counts differing by more than this never match.
const MAX_COUNT_DIFFERENCE: usize = 2;
const COUNT_PENALTY: f64 = 0.1;

const ONSET_WEIGHT: f64 = 0.3;
const NUCLEUS_WEIGHT: f64 = 0.5;
const CODA_WEIGHT: f64 = 0.2;
const ONSET_PARTIAL: f64 = 0.2;
const NUCLEUS_PARTIAL: f64 = 0.3;
const CODA_PARTIAL: f64 = 0.1;

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("static syllable pattern"))
        .collect()
}

static CHINESE: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"^(?P<onset>zh|ch|sh|[bpmfdtnlgkhjqxrzcsyw])?(?P<nucleus>[aeiouüvāáǎàēéěèīíǐìōóǒòūúǔùǖǘǚǜ]+)(?P<coda>ng|n|r)?(?P<tone>[1-5])?$",
    ])
});

static JAPANESE: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"^(?P<onset>[kgsztdnhbpmyrwfvjc]?[yh]?)(?P<nucleus>[aiueoāīūēō])$",
        r"^(?P<coda>n)$",
        r"^(?P<onset>[kgsztdnhbpmyrwc]+[yh]?)(?P<nucleus>[aiueoāīūēō]+)(?P<coda>n)?$",
    ])
});

static KOREAN: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"^(?P<onset>[bcdfghjklmnpqrstvwxyz]{0,2})(?P<nucleus>[aeiouyw]+)(?P<coda>ng|[ngtklmp])?$",
    ])
});

static ARABIC: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"^(?P<onset>[bcdfghjklmnpqrstvwxyz']+)(?P<nucleus>[aeiou]+)(?P<coda>[bcdfghjklmnpqrstvwxyz']*)$",
    ])
});

static UNIVERSAL: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[r"^(?P<onset>[^aeiouy]*)(?P<nucleus>[aeiouy]+)(?P<coda>[^aeiouy]*)$"])
});

fn patterns_for(language: Language) -> &'static [Regex] {
    match language {
        Language::Chinese => CHINESE.as_slice(),
        Language::Japanese => JAPANESE.as_slice(),
        Language::Korean => KOREAN.as_slice(),
        Language::Arabic => ARABIC.as_slice(),
        _ => UNIVERSAL.as_slice(),
    }
}

/// One syllable split into its parts. Parts are empty when the syllable did
/// not fit any pattern; `full` always holds the original text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyllableInfo {
    pub onset: String,
    pub nucleus: String,
    pub coda: String,
    pub tone: String,
    pub full: String,
}

impl SyllableInfo {
    pub fn parse(syllable: &str, language: Language) -> Self {
        for pattern in patterns_for(language) {
            if let Some(caps) = pattern.captures(syllable) {
                let part = |name: &str| {
                    caps.name(name)
                        .map(|m| m.as_str().to_string())
                        .unwrap_or_default()
                };
                return SyllableInfo {
                    onset: part("onset"),
                    nucleus: part("nucleus"),
                    coda: part("coda"),
                    tone: part("tone"),
                    full: syllable.to_string(),
                };
            }
        }
        SyllableInfo {
            full: syllable.to_string(),
            ..Default::default()
        }
    }

    /// Structural similarity in `[0, 1]`: identical syllables score 1, others
    /// collect onset 0.3, nucleus 0.5 and coda 0.2 for equal parts and
    /// smaller partial credit for related letters.
    pub fn similarity(&self, other: &SyllableInfo) -> f64 {
        if self.full == other.full {
            return 1.0;
        }
        let score = part_score(&self.onset, &other.onset, ONSET_WEIGHT, ONSET_PARTIAL)
            + part_score(&self.nucleus, &other.nucleus, NUCLEUS_WEIGHT, NUCLEUS_PARTIAL)
            + part_score(&self.coda, &other.coda, CODA_WEIGHT, CODA_PARTIAL);
        score.min(1.0)
    }
}

fn part_score(a: &str, b: &str, equal: f64, partial: f64) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return equal;
    }
    match (single(a), single(b)) {
        (Some(x), Some(y)) => char_similarity(x, y) * partial,
        _ => 0.0,
    }
}

fn single(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

/// Splits lowercase text on whitespace, `-` and `_` and parses each piece with
/// the patterns of the language the text looks like.
pub fn extract_syllables(text: &str) -> Vec<SyllableInfo> {
    let lower = text.to_lowercase();
    let language = language_of_text(&lower);
    canonical::split_separators(&lower)
        .iter()
        .map(|token| SyllableInfo::parse(&token.text, language))
        .collect()
}

/// Compares syllable sequences position by position.
///
/// Sequences whose lengths differ by more than two score 0. Otherwise the
/// mean over the longer sequence is reduced by 0.1 per syllable of
/// difference.
pub fn structure_similarity(a: &str, b: &str) -> f64 {
    let left = extract_syllables(a);
    let right = extract_syllables(b);
    if left.is_empty() || right.is_empty() {
        return 0.0;
    }
    let difference = left.len().abs_diff(right.len());
    if difference > MAX_COUNT_DIFFERENCE {
        return 0.0;
    }
    let total: f64 = left.iter().zip(&right).map(|(x, y)| x.similarity(y)).sum();
    let mean = total / left.len().max(right.len()) as f64;
    mean * (1.0 - COUNT_PENALTY * difference as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinyin_syllable_parts() {
        let s = SyllableInfo::parse("zhang3", Language::Chinese);
        assert_eq!(
            (s.onset.as_str(), s.nucleus.as_str(), s.coda.as_str(), s.tone.as_str()),
            ("zh", "a", "ng", "3")
        );
        let bare = SyllableInfo::parse("北京", Language::Chinese);
        assert_eq!(bare.full, "北京");
        assert!(bare.nucleus.is_empty());
    }

    #[test]
    fn universal_pattern_needs_one_vowel_group() {
        let s = SyllableInfo::parse("wei", Language::Universal);
        assert_eq!((s.onset.as_str(), s.nucleus.as_str()), ("w", "ei"));
        assert!(SyllableInfo::parse("pekin", Language::Universal).nucleus.is_empty());
    }

    #[test]
    fn syllable_similarity_gives_partial_credit() {
        let zhang = SyllableInfo::parse("zhang", Language::Universal);
        let chang = SyllableInfo::parse("chang", Language::Universal);
        assert!((zhang.similarity(&chang) - 0.7).abs() < 1e-12);

        let ta = SyllableInfo::parse("ta", Language::Japanese);
        let da = SyllableInfo::parse("da", Language::Japanese);
        // 0.7 * 0.2 for t~d plus 0.5 for the shared vowel.
        assert!((ta.similarity(&da) - 0.64).abs() < 1e-12);
    }

    #[test]
    fn sequence_scores() {
        assert!((structure_similarity("Zhang Wei", "Chang Wei") - 0.85).abs() < 1e-12);
        assert_eq!(structure_similarity("a b c d", "a"), 0.0);
        // One of two syllables matches; one syllable short.
        assert!((structure_similarity("li na", "li") - 0.45).abs() < 1e-12);
        assert_eq!(structure_similarity("", "li"), 0.0);
    }
}
