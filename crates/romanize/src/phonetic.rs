//! Phoneme extraction and phoneme-sequence alignment.

use crate::language::{Language, LanguageScores};
use crate::tables::{PhoneticMapping, KNOWN_PHONEMES, PHONETIC_MAPPINGS};

/// Cost of leaving a phoneme unaligned.
const GAP_PENALTY: f64 = 0.1;
/// Share of a mapping's weight granted to two spellings of the same sound.
const CO_MEMBER_FACTOR: f64 = 0.9;
const VOWEL_GROUP_SCORE: f64 = 0.8;
const CONSONANT_GROUP_SCORE: f64 = 0.7;

const VOWEL_GROUPS: &[&[char]] = &[
    &['a', 'ā', 'à', 'á', 'â', 'ă'],
    &['e', 'ē', 'è', 'é', 'ê', 'ë'],
    &['i', 'ī', 'ì', 'í', 'î', 'ï', 'y'],
    &['o', 'ō', 'ò', 'ó', 'ô', 'ö'],
    &['u', 'ū', 'ù', 'ú', 'û', 'ü'],
];

const CONSONANT_GROUPS: &[&[char]] = &[
    &['p', 'b', 'f', 'v'],
    &['t', 'd'],
    &['k', 'g', 'c', 'q'],
    &['s', 'z', 'c'],
    &['n', 'm'],
    &['r', 'l'],
];

/// Splits lowercase `text` into phonemes: the longest known multi-letter
/// phoneme at each position, otherwise a single letter. Non-letters are
/// skipped.
pub fn extract_phonemes(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut phonemes = Vec::new();
    let mut i = 0;
    'outer: while i < chars.len() {
        for len in [3usize, 2] {
            if i + len <= chars.len() {
                let window: String = chars[i..i + len].iter().collect();
                if KNOWN_PHONEMES.contains(&window.as_str()) {
                    phonemes.push(window);
                    i += len;
                    continue 'outer;
                }
            }
        }
        if chars[i].is_alphabetic() {
            phonemes.push(chars[i].to_string());
        }
        i += 1;
    }
    phonemes
}

/// Similarity of two single letters by articulation group.
pub fn char_similarity(a: char, b: char) -> f64 {
    let (a, b) = (lower(a), lower(b));
    if a == b {
        return 1.0;
    }
    let shared = |groups: &[&[char]]| groups.iter().any(|g| g.contains(&a) && g.contains(&b));
    if shared(VOWEL_GROUPS) {
        VOWEL_GROUP_SCORE
    } else if shared(CONSONANT_GROUPS) {
        CONSONANT_GROUP_SCORE
    } else {
        0.0
    }
}

fn lower(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

/// Phoneme comparison restricted to the mappings of a set of languages.
pub struct PhonemeScorer<'a> {
    mappings: Vec<&'a PhoneticMapping>,
}

impl PhonemeScorer<'static> {
    /// Scorer over the universal mappings plus those of every language that
    /// detection assigned weight to.
    pub fn for_languages(languages: &LanguageScores) -> Self {
        Self::from_mappings(PHONETIC_MAPPINGS, |language| {
            language == Language::Universal || languages.contains(language)
        })
    }
}

impl<'a> PhonemeScorer<'a> {
    pub fn from_mappings<F>(mappings: &'a [PhoneticMapping], keep: F) -> Self
    where
        F: Fn(Language) -> bool,
    {
        Self {
            mappings: mappings.iter().filter(|m| keep(m.language)).collect(),
        }
    }

    pub fn phoneme_similarity(&self, a: &str, b: &str) -> f64 {
        if a == b {
            return 1.0;
        }
        if let Some(mapping) = self
            .mappings
            .iter()
            .find(|m| m.spellings.contains(&a) && m.spellings.contains(&b))
        {
            return mapping.weight * CO_MEMBER_FACTOR;
        }
        match (single_char(a), single_char(b)) {
            (Some(x), Some(y)) => char_similarity(x, y),
            _ => 0.0,
        }
    }

    /// Best alignment of two phoneme sequences, normalized by the longer one
    /// and clamped to `[0, 1]`. Either side empty scores 0.
    pub fn sequence_similarity(&self, a: &[String], b: &[String]) -> f64 {
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }
        let mut prev = vec![0.0_f64; b.len() + 1];
        let mut curr = vec![0.0_f64; b.len() + 1];
        for pa in a {
            curr[0] = 0.0;
            for (j, pb) in b.iter().enumerate() {
                let aligned = prev[j] + self.phoneme_similarity(pa, pb);
                let skip_b = curr[j] - GAP_PENALTY;
                let skip_a = prev[j + 1] - GAP_PENALTY;
                curr[j + 1] = aligned.max(skip_b).max(skip_a);
            }
            std::mem::swap(&mut prev, &mut curr);
        }
        let longest = a.len().max(b.len()) as f64;
        (prev[b.len()] / longest).clamp(0.0, 1.0)
    }

    /// Phonetic similarity of two strings, compared lowercase.
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        let a = extract_phonemes(&a.to_lowercase());
        let b = extract_phonemes(&b.to_lowercase());
        self.sequence_similarity(&a, &b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn universal() -> PhonemeScorer<'static> {
        PhonemeScorer::from_mappings(PHONETIC_MAPPINGS, |l| l == Language::Universal)
    }

    #[test]
    fn extraction_prefers_longest_known_phoneme() {
        assert_eq!(extract_phonemes("tsunami"), vec!["tsu", "n", "a", "m", "i"]);
        assert_eq!(extract_phonemes("peking"), vec!["p", "e", "k", "i", "ng"]);
        assert_eq!(extract_phonemes("zhang-wei"), vec!["zh", "a", "ng", "w", "ei"]);
        assert!(extract_phonemes("2024").is_empty());
    }

    #[test]
    fn phoneme_similarity_layers() {
        let scorer = universal();
        assert_eq!(scorer.phoneme_similarity("ng", "ng"), 1.0);
        assert!((scorer.phoneme_similarity("n", "ng") - 0.9).abs() < 1e-12);
        assert!((scorer.phoneme_similarity("r", "l") - 0.81).abs() < 1e-12);
        assert_eq!(scorer.phoneme_similarity("e", "i"), 0.0);
        assert_eq!(scorer.phoneme_similarity("ē", "e"), 0.9);
        assert_eq!(scorer.phoneme_similarity("v", "b"), 0.7);
        assert_eq!(scorer.phoneme_similarity("zh", "j"), 0.0);
    }

    #[test]
    fn language_specific_mappings_need_detection() {
        let chinese = PhonemeScorer::from_mappings(PHONETIC_MAPPINGS, |l| {
            matches!(l, Language::Universal | Language::Chinese)
        });
        assert!((chinese.phoneme_similarity("zh", "j") - 0.9).abs() < 1e-12);
    }

    #[test]
    fn alignment_scores() {
        let scorer = universal();
        assert_eq!(scorer.similarity("Tokyo", "tokyo"), 1.0);
        // Four identical phonemes plus n~ng at 0.9.
        assert!((scorer.similarity("pekin", "peking") - 0.98).abs() < 1e-12);
        assert_eq!(scorer.similarity("", "tokyo"), 0.0);
        let s = scorer.similarity("abc", "xyzxyzxyz");
        assert!((0.0..=1.0).contains(&s));
    }

    #[test]
    fn char_groups() {
        assert_eq!(char_similarity('A', 'á'), 0.8);
        assert_eq!(char_similarity('k', 'q'), 0.7);
        assert_eq!(char_similarity('k', 'm'), 0.0);
    }
}
