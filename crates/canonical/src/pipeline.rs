use serde::{Deserialize, Serialize};
use unicode_categories::UnicodeCategories;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::KeyConfig;
use crate::error::CanonicalError;
use crate::token::{is_separator, Token};

/// A name folded into its comparison form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanonicalName {
    /// Folded text with separators collapsed to single spaces.
    pub display: String,
    /// Separator-free key; two names are "the same" when their keys match.
    pub key: String,
    /// Tokens of `display` with byte offsets into `display`.
    pub tokens: Vec<Token>,
    /// Version of the [`KeyConfig`] that produced this value.
    pub version: u32,
}

/// Builds the comparison key used across the matchers.
///
/// Lowercases, decomposes (NFD), drops nonspacing marks, then keeps only
/// alphanumeric characters. Whitespace, `-`, `_`, apostrophes, backticks and
/// any other punctuation disappear. The result is stable under a second
/// application.
///
/// ```rust
/// use canonical::comparison_key;
///
/// assert_eq!(comparison_key("Xi'an"), "xian");
/// assert_eq!(comparison_key("Hà Nội"), "hanoi");
/// assert_eq!(comparison_key(&comparison_key("Al-Qāhirah")), "alqahirah");
/// ```
pub fn comparison_key(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|ch| !ch.is_mark_nonspacing())
        .filter(|ch| ch.is_alphanumeric())
        .collect()
}

/// Strips nonspacing marks after canonical decomposition without touching
/// case or separators.
pub fn strip_diacritics(text: &str) -> String {
    text.nfd().filter(|ch| !ch.is_mark_nonspacing()).collect()
}

/// Configurable version of [`comparison_key`] that also keeps a display form
/// and separator tokens.
pub fn canonicalize(input: &str, cfg: &KeyConfig) -> Result<CanonicalName, CanonicalError> {
    cfg.validate()?;

    let normalized: String = if cfg.strip_diacritics {
        strip_diacritics(input)
    } else {
        input.nfc().collect()
    };

    let mut display = String::with_capacity(normalized.len());
    let mut tokens: Vec<Token> = Vec::with_capacity((normalized.len() / 4).saturating_add(1));
    let mut pending_space = false;
    let mut current_token_start: Option<usize> = None;

    for grapheme in normalized.graphemes(true) {
        // Lowercasing can expand one character into several.
        if cfg.lowercase {
            for lower in grapheme.to_lowercase().chars() {
                dispatch_char(
                    lower,
                    cfg,
                    &mut display,
                    &mut tokens,
                    &mut pending_space,
                    &mut current_token_start,
                );
            }
        } else {
            for ch in grapheme.chars() {
                dispatch_char(
                    ch,
                    cfg,
                    &mut display,
                    &mut tokens,
                    &mut pending_space,
                    &mut current_token_start,
                );
            }
        }
    }
    finalize_token(&mut tokens, &display, &mut current_token_start);

    let key = display.chars().filter(|ch| ch.is_alphanumeric()).collect();

    Ok(CanonicalName {
        display,
        key,
        tokens,
        version: cfg.version,
    })
}

fn dispatch_char(
    ch: char,
    cfg: &KeyConfig,
    display: &mut String,
    tokens: &mut Vec<Token>,
    pending_space: &mut bool,
    current_token_start: &mut Option<usize>,
) {
    let is_delim = is_separator(ch) || (cfg.strip_punctuation && ch.is_punctuation());
    if is_delim {
        finalize_token(tokens, display, current_token_start);
        if !display.is_empty() {
            *pending_space = true;
        }
        return;
    }

    if *pending_space {
        display.push(' ');
        *pending_space = false;
        *current_token_start = Some(display.len());
    } else if current_token_start.is_none() {
        *current_token_start = Some(display.len());
    }
    display.push(ch);
}

fn finalize_token(tokens: &mut Vec<Token>, display: &str, current_token_start: &mut Option<usize>) {
    if let Some(start) = current_token_start.take() {
        if start < display.len() {
            let end = display.len();
            tokens.push(Token {
                text: display[start..end].to_string(),
                start,
                end,
            });
        }
    }
}
