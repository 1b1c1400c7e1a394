//! Arabic-family romanization: chat numerals, letter folding and a scoring
//! pass tuned for the heavy spelling variation of Arabic names.

use matcher::edit_similarity;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::tables::CHAT_PATTERNS;

const CHAT_EXACT_SCORE: f64 = 1.0;
const CHAT_NEAR_SCORE: f64 = 0.95;
const CHAT_NEAR_SIMILARITY: f64 = 0.8;
const BONUS_FLOOR: f64 = 0.6;
const SUBSTRING_BONUS: f64 = 0.2;
const AFFIX_BONUS: f64 = 0.3;
const CONFIDENT_FLOOR: f64 = 0.7;
const WEAK_FACTOR: f64 = 0.8;

static ARABIC_LETTERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\x{0600}-\x{06FF}\x{0750}-\x{077F}\x{08A0}-\x{08FF}\x{FB50}-\x{FDFF}\x{FE70}-\x{FEFF}]")
        .expect("static arabic range")
});

/// Digraphs and marks typical of romanized Arabic.
const ROMANIZATION_MARKERS: &[&str] = &["kh", "gh", "sh", "th", "dh", "'", "aa", "ii", "uu"];

const CHAT_DIGITS: &[(char, &str)] = &[
    ('0', "o"),
    ('1', "i"),
    ('2', "'"),
    ('3', "'"),
    ('4', "th"),
    ('5', "kh"),
    ('6', "t"),
    ('7', "h"),
    ('8', "gh"),
    ('9', ""),
];

fn arabic_letter(ch: char) -> Option<&'static str> {
    let latin = match ch {
        'ا' | 'أ' | 'إ' | 'ع' => "a",
        'آ' => "aa",
        'ب' => "b",
        'ت' | 'ط' => "t",
        'ث' => "th",
        'ج' => "j",
        'ح' | 'ه' | 'ة' => "h",
        'خ' => "kh",
        'د' | 'ض' => "d",
        'ذ' => "dh",
        'ر' => "r",
        'ز' | 'ظ' => "z",
        'س' | 'ص' => "s",
        'ش' => "sh",
        'غ' => "gh",
        'ف' => "f",
        'ق' => "q",
        'ك' => "k",
        'ل' => "l",
        'م' => "m",
        'ن' => "n",
        'و' | 'ؤ' => "w",
        'ي' => "y",
        'ء' | 'ئ' => "",
        _ => return None,
    };
    Some(latin)
}

/// Latin-side reductions, applied in order after letters are transliterated.
const REDUCTIONS: &[(&str, &str)] = &[
    ("'", ""), ("\u{2019}", ""), ("`", ""), ("ʾ", ""), ("ʿ", ""), ("ʼ", ""), ("´", ""),
    ("aa", "a"), ("ii", "i"), ("uu", "u"), ("oo", "o"), ("ee", "e"),
    ("ā", "a"), ("ī", "i"), ("ū", "u"), ("ō", "o"), ("ē", "e"),
    ("ay", "ai"), ("aw", "au"), ("ey", "ei"), ("ow", "ou"),
    ("kh", "h"), ("gh", "g"), ("sh", "s"), ("th", "t"), ("dh", "d"), ("ph", "f"), ("ch", "c"),
    ("ḥ", "h"), ("ḫ", "h"), ("ḍ", "d"), ("ṣ", "s"), ("ṭ", "t"), ("ẓ", "z"),
    ("ḏ", "d"), ("ṯ", "t"), ("ġ", "g"), ("š", "s"), ("ğ", "g"), ("ţ", "t"),
    ("j", "g"), ("q", "k"), ("x", "h"),
    ("bb", "b"), ("dd", "d"), ("ff", "f"), ("gg", "g"), ("hh", "h"), ("kk", "k"),
    ("ll", "l"), ("mm", "m"), ("nn", "n"), ("pp", "p"), ("rr", "r"), ("ss", "s"),
    ("tt", "t"), ("vv", "v"), ("ww", "w"), ("yy", "y"), ("zz", "z"),
    ("al-", ""), ("el-", ""), ("ar-", ""), ("as-", ""), ("at-", ""), ("an-", ""),
    ("ad-", ""), ("az-", ""), ("ash-", ""),
];

/// Semivowels, folded after word endings are trimmed.
const SEMIVOWELS: &[(&str, &str)] = &[("w", "u"), ("y", "i")];

/// A final `h` after a vowel, as in `-ah` or `-eh`.
static SILENT_FINAL_H: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([aeiou])h\b").expect("static ending pattern"));

fn has_arabic_letters(text: &str) -> bool {
    ARABIC_LETTERS.is_match(text)
}

fn has_digits(text: &str) -> bool {
    text.chars().any(|ch| ch.is_ascii_digit())
}

fn has_markers(text: &str) -> bool {
    let lower = text.to_lowercase();
    ROMANIZATION_MARKERS.iter().any(|m| lower.contains(m))
}

/// Whether the pair looks Arabic enough for [`arabic_similarity`] to run.
pub fn applies_to(target: &str, candidate: &str) -> bool {
    [target, candidate]
        .iter()
        .any(|text| has_arabic_letters(text) || has_markers(text) || has_digits(text))
}

/// Folds Arabic script and romanized Arabic onto one lowercase ASCII form.
///
/// Chat digits become letters, Arabic letters are transliterated, then
/// diacritics, long vowels, digraphs, geminates, definite articles and
/// final `h` are reduced. Anything left that is not ASCII alphanumeric is
/// dropped.
pub fn normalize_arabic(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for ch in text.to_lowercase().chars() {
        if let Some((_, latin)) = CHAT_DIGITS.iter().find(|(digit, _)| *digit == ch) {
            folded.push_str(latin);
        } else if let Some(latin) = arabic_letter(ch) {
            folded.push_str(latin);
        } else {
            folded.push(ch);
        }
    }
    let reduced = REDUCTIONS
        .iter()
        .fold(folded, |acc, (from, to)| acc.replace(from, to));
    let trimmed = SILENT_FINAL_H.replace_all(&reduced, "$1");
    SEMIVOWELS
        .iter()
        .fold(trimmed.into_owned(), |acc, (from, to)| acc.replace(from, to))
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric())
        .collect()
}

/// Score for a chat spelling such as `mo7amed` against `candidate`: 1.0 when
/// the chat form is listed for the candidate, 0.95 when a listed chat form
/// is within 0.8 edit similarity, otherwise 0.
pub fn chat_score(chat: &str, candidate: &str) -> f64 {
    if !has_digits(chat) {
        return 0.0;
    }
    let chat = chat.to_lowercase();
    let candidate = candidate.to_lowercase();
    let lists = |forms: &[&str]| forms.contains(&candidate.as_str());

    if CHAT_PATTERNS
        .iter()
        .any(|(pattern, forms)| *pattern == chat && lists(forms))
    {
        return CHAT_EXACT_SCORE;
    }
    if CHAT_PATTERNS.iter().any(|(pattern, forms)| {
        edit_similarity(&chat, pattern) >= CHAT_NEAR_SIMILARITY && lists(forms)
    }) {
        return CHAT_NEAR_SCORE;
    }
    0.0
}

/// Similarity of two spellings of an Arabic name, in `[0, 1]`.
///
/// Returns 0 for pairs with no Arabic letters, romanization digraphs or
/// digits. Chat spellings are tried first; otherwise both sides are folded
/// with [`normalize_arabic`] and compared by edit similarity. Close pairs
/// (≥ 0.6) gain a substring bonus and a shared prefix/suffix bonus; pairs
/// still below 0.7 are scaled down by 0.8.
pub fn arabic_similarity(target: &str, candidate: &str) -> f64 {
    if !applies_to(target, candidate) {
        return 0.0;
    }
    let chat = chat_score(target, candidate);
    if chat > 0.0 {
        return chat;
    }

    let left = normalize_arabic(target);
    let right = normalize_arabic(candidate);
    if left.is_empty() || right.is_empty() {
        return 0.0;
    }
    if left == right {
        return 1.0;
    }

    let mut score = edit_similarity(&left, &right);
    if score >= BONUS_FLOOR {
        let substring = if left.contains(&right) || right.contains(&left) {
            SUBSTRING_BONUS
        } else {
            0.0
        };
        // Normalized forms are ASCII, so bytes are characters.
        let (l, r) = (left.as_bytes(), right.as_bytes());
        let prefix = l.iter().zip(r).take_while(|(a, b)| a == b).count();
        let suffix = l
            .iter()
            .rev()
            .zip(r.iter().rev())
            .take_while(|(a, b)| a == b)
            .count();
        let longest = l.len().max(r.len()) as f64;
        let affix = (prefix + suffix) as f64 / longest * AFFIX_BONUS;
        score = (score + substring + affix).min(1.0);
    }

    if score >= CONFIDENT_FLOOR {
        score
    } else {
        score * WEAK_FACTOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_needs_arabic_evidence() {
        assert!(!applies_to("pekin", "peking"));
        assert!(applies_to("Khalid", "Halid"));
        assert!(applies_to("3ali", "Ali"));
        assert!(applies_to("محمد", "Muhammad"));
        assert_eq!(arabic_similarity("pekin", "peking"), 0.0);
    }

    #[test]
    fn normalization_folds_spelling_variants() {
        assert_eq!(normalize_arabic("Mohammed"), normalize_arabic("Mohamed"));
        assert_eq!(normalize_arabic("Khalid"), normalize_arabic("Halid"));
        assert_eq!(normalize_arabic("Al-Qāhirah"), "kahira");
        assert_eq!(normalize_arabic("Faysal"), normalize_arabic("Faisal"));
        assert_eq!(normalize_arabic("5alid"), normalize_arabic("Khalid"));
    }

    #[test]
    fn chat_spellings() {
        assert_eq!(chat_score("mo7amed", "Muhammad"), 1.0);
        assert_eq!(chat_score("mo7amad", "Mohamed"), 0.95);
        assert_eq!(chat_score("mo7amed", "Ahmed"), 0.0);
        assert_eq!(chat_score("mohamed", "Muhammad"), 0.0);
        assert_eq!(arabic_similarity("3ali", "Ali"), 1.0);
    }

    #[test]
    fn folded_equality_and_bonuses() {
        assert_eq!(arabic_similarity("Shaddad", "Shadad"), 1.0);
        // halid vs haled: 0.8 edit similarity plus the shared affixes.
        assert_eq!(arabic_similarity("Khalid", "Khaled"), 1.0);
        assert_eq!(arabic_similarity("Hussein", "Husein"), 0.0);
        let far = arabic_similarity("Khalid", "Zainab");
        assert!(far < 0.7 * 0.8 + 1e-12);
    }
}
