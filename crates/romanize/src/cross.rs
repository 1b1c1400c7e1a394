//! Coarse sound-shape comparison for pairs written in different scripts.

use canonical::dominant_script;

const VOWELS: &str = "aeiouāēīōūàèìòùáéíóúâêîôûäëïöü";
const TONE_MARKS: &str = "āēīōūàèìòùáéíóúâêîôûäëïöü";

const VOWEL_WEIGHT: f64 = 0.3;
const SYLLABLE_WEIGHT: f64 = 0.4;
const LENGTH_WEIGHT: f64 = 0.2;
const TONE_WEIGHT: f64 = 0.1;
/// Cross-script evidence is weak; scores are discounted by this factor.
const CROSS_SCRIPT_FACTOR: f64 = 0.6;

/// Shape of a string as far as cross-script comparison can see it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhoneticFeatures {
    pub vowel_ratio: f64,
    pub syllable_count: usize,
    pub length: usize,
    pub has_tones: bool,
}

impl PhoneticFeatures {
    pub fn of(text: &str) -> Self {
        let length = text.chars().count();
        let vowels = text
            .to_lowercase()
            .chars()
            .filter(|ch| VOWELS.contains(*ch))
            .count();
        PhoneticFeatures {
            vowel_ratio: if length == 0 {
                0.0
            } else {
                vowels as f64 / length as f64
            },
            syllable_count: vowels.max(1),
            length,
            has_tones: text.chars().any(|ch| TONE_MARKS.contains(ch)),
        }
    }

    pub fn similarity(&self, other: &PhoneticFeatures) -> f64 {
        let vowel = (1.0 - (self.vowel_ratio - other.vowel_ratio).abs() * 2.0).max(0.0);
        let syllables = ratio_term(self.syllable_count, other.syllable_count);
        let length = ratio_term(self.length, other.length);
        let tones = if self.has_tones == other.has_tones {
            TONE_WEIGHT
        } else {
            0.0
        };
        vowel * VOWEL_WEIGHT + syllables * SYLLABLE_WEIGHT + length * LENGTH_WEIGHT + tones
    }
}

/// `1 - |a - b| / max(a, b)`, or 0 when both are zero.
fn ratio_term(a: usize, b: usize) -> f64 {
    let max = a.max(b);
    if max == 0 {
        return 0.0;
    }
    1.0 - a.abs_diff(b) as f64 / max as f64
}

/// Feature similarity × 0.6 for pairs whose dominant scripts differ; 0 for
/// pairs in the same script and when either side has no letters.
pub fn cross_language_similarity(target: &str, candidate: &str) -> f64 {
    let has_letters = |text: &str| text.chars().any(char::is_alphabetic);
    if !has_letters(target) || !has_letters(candidate) {
        return 0.0;
    }
    if dominant_script(target) == dominant_script(candidate) {
        return 0.0;
    }
    PhoneticFeatures::of(target).similarity(&PhoneticFeatures::of(candidate)) * CROSS_SCRIPT_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn features() {
        let f = PhoneticFeatures::of("Tokyo");
        assert_eq!(f.length, 5);
        assert_eq!(f.syllable_count, 2);
        assert!((f.vowel_ratio - 0.4).abs() < 1e-12);
        assert!(!f.has_tones);
        assert!(PhoneticFeatures::of("Běijīng").has_tones);

        let han = PhoneticFeatures::of("東京");
        assert_eq!((han.syllable_count, han.length), (1, 2));
        assert_eq!(han.vowel_ratio, 0.0);
    }

    #[test]
    fn same_script_is_skipped() {
        assert_eq!(cross_language_similarity("Tokyo", "Kyoto"), 0.0);
    }

    #[test]
    fn letterless_sides_score_zero() {
        assert_eq!(cross_language_similarity("x", ""), 0.0);
        assert_eq!(cross_language_similarity("", "東京"), 0.0);
        assert_eq!(cross_language_similarity("Tokyo", "  123 "), 0.0);
    }

    #[test]
    fn different_scripts_are_discounted() {
        // vowel 0.2·0.3, syllables 0.5·0.4, length 0.4·0.2, tones 0.1.
        let score = cross_language_similarity("Tokyo", "東京");
        assert!((score - 0.44 * 0.6).abs() < 1e-12);
        assert!(score <= 0.6);
    }
}
