//! Canonical key layer for name matching.
//!
//! Everything the matchers compare goes through this crate first. It turns a
//! free-form name into a deterministic comparison form and answers "which
//! writing system is this?".
//!
//! ## What we do
//!
//! - Unicode decomposition (NFD) with nonspacing marks removed
//! - Locale-free lowercasing
//! - Separator handling (`-`, `_`, whitespace) with byte-offset tokens
//! - Script detection by code-point range (Latin, Han, kana, Hangul, Arabic,
//!   Cyrillic, Greek, Thai)
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence. The same text and config
//! produce the same key on any machine, and [`comparison_key`] is idempotent.

mod config;
mod error;
mod pipeline;
mod script;
mod token;
mod whitespace;

pub use crate::config::KeyConfig;
pub use crate::error::CanonicalError;
pub use crate::pipeline::{canonicalize, comparison_key, strip_diacritics, CanonicalName};
pub use crate::script::{dominant_script, Script, ScriptProfile};
pub use crate::token::{is_separator, split_separators, Token};
pub use crate::whitespace::collapse_whitespace;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_key_folds_case_marks_and_separators() {
        assert_eq!(comparison_key("Tōkyō"), "tokyo");
        assert_eq!(comparison_key("Shang Hai"), "shanghai");
        assert_eq!(comparison_key("Hang-chou"), "hangchou");
        assert_eq!(comparison_key("sa'd"), "sad");
        assert_eq!(comparison_key("St. Petersburg"), "stpetersburg");
        assert_eq!(comparison_key("finished_points"), "finishedpoints");
    }

    #[test]
    fn comparison_key_keeps_non_latin_letters() {
        assert_eq!(comparison_key("北京"), "北京");
        assert_eq!(comparison_key("Москва"), "москва");
        assert!(!comparison_key("محمد").is_empty());
    }

    #[test]
    fn comparison_key_is_idempotent() {
        let samples = [
            "Xi'an",
            "Hà Nội",
            "Thành phố Hồ Chí Minh",
            "Al-Qāhirah",
            "İstanbul",
            "서울",
            "Αθήνα",
            "  mixed__SEPARATORS--here ",
            "",
        ];
        for sample in samples {
            let once = comparison_key(sample);
            assert_eq!(comparison_key(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn canonicalize_default_matches_comparison_key() {
        let cfg = KeyConfig::default();
        for sample in ["Xi'an", "Al-Qāhirah", "Hà Nội", "Nizhny  Novgorod", "東京"] {
            let out = canonicalize(sample, &cfg).expect("canonicalization succeeds");
            assert_eq!(out.key, comparison_key(sample));
            assert_eq!(out.version, cfg.version);
        }
    }

    #[test]
    fn canonicalize_tokens_carry_offsets() {
        let out = canonicalize("  Ho_Chi-Minh  City ", &KeyConfig::default())
            .expect("canonicalization succeeds");

        assert_eq!(out.display, "ho chi minh city");
        let expected = vec![("ho", 0usize, 2usize), ("chi", 3, 6), ("minh", 7, 11), ("city", 12, 16)];
        assert_eq!(out.tokens.len(), expected.len());
        for (token, (text, start, end)) in out.tokens.iter().zip(expected) {
            assert_eq!(token.text, text);
            assert_eq!(token.start, start);
            assert_eq!(token.end, end);
            assert_eq!(&out.display[token.start..token.end], text);
        }
    }

    #[test]
    fn canonicalize_can_keep_diacritics() {
        let cfg = KeyConfig {
            strip_diacritics: false,
            ..Default::default()
        };
        let out = canonicalize("Tōkyō", &cfg).expect("canonicalization succeeds");
        assert_eq!(out.display, "tōkyō");
        assert_eq!(out.key, "tōkyō");
    }

    #[test]
    fn canonicalize_keeps_punctuation_in_display_when_asked() {
        let cfg = KeyConfig {
            strip_punctuation: false,
            ..Default::default()
        };
        let out = canonicalize("Xi'an", &cfg).expect("canonicalization succeeds");
        assert_eq!(out.display, "xi'an");
        assert_eq!(out.key, "xian");
    }

    #[test]
    fn canonicalize_empty_input_yields_empty_key() {
        let out = canonicalize(" - _ ", &KeyConfig::default()).expect("canonicalization succeeds");
        assert!(out.key.is_empty());
        assert!(out.tokens.is_empty());
    }

    #[test]
    fn invalid_config_version_rejected() {
        let cfg = KeyConfig {
            version: 0,
            ..Default::default()
        };
        let err = canonicalize("Beijing", &cfg).expect_err("version 0 must be rejected");
        assert!(matches!(err, CanonicalError::InvalidConfig(_)));
    }

    #[test]
    fn key_config_serde_defaults_fill_missing_fields() {
        let cfg: KeyConfig =
            serde_json::from_str(r#"{"strip_diacritics": false}"#).expect("valid json");
        assert_eq!(cfg.version, 1);
        assert!(cfg.lowercase);
        assert!(!cfg.strip_diacritics);
    }

    #[test]
    fn split_separators_handles_runs() {
        let tokens = split_separators("finished__points-and tracks");
        let words: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, vec!["finished", "points", "and", "tracks"]);
        assert_eq!(tokens[1].start, 10);
        assert!(split_separators("--__  ").is_empty());
    }

    #[test]
    fn collapse_whitespace_trims_and_joins() {
        assert_eq!(collapse_whitespace("  Ho   Chi\tMinh\n"), "Ho Chi Minh");
        assert_eq!(collapse_whitespace("   "), "");
    }

    #[test]
    fn script_classification_by_block() {
        assert_eq!(Script::of('a'), Script::Latin);
        assert_eq!(Script::of('ō'), Script::Latin);
        assert_eq!(Script::of('北'), Script::Han);
        assert_eq!(Script::of('た'), Script::Hiragana);
        assert_eq!(Script::of('タ'), Script::Katakana);
        assert_eq!(Script::of('서'), Script::Hangul);
        assert_eq!(Script::of('م'), Script::Arabic);
        assert_eq!(Script::of('М'), Script::Cyrillic);
        assert_eq!(Script::of('Α'), Script::Greek);
        assert_eq!(Script::of('ก'), Script::Thai);
        assert_eq!(Script::of('ש'), Script::Unknown);
    }

    #[test]
    fn script_profile_ignores_non_letters() {
        let profile = ScriptProfile::of("東京 2024 Tower");
        assert_eq!(profile.total(), 7);
        assert!(profile.contains(Script::Han));
        assert!(profile.contains(Script::Latin));
        assert_eq!(profile.dominant(), Some(Script::Latin));
        assert!((profile.ratio(Script::Han) - 2.0 / 7.0).abs() < 1e-12);
        assert_eq!(dominant_script("123 --"), None);
    }

    #[test]
    fn dominant_script_tie_goes_to_first_seen() {
        assert_eq!(dominant_script("ab北京"), Some(Script::Latin));
        assert_eq!(dominant_script("北京ab"), Some(Script::Han));
    }
}
