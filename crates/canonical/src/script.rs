//! Writing-system detection by code-point range.
//!
//! Only alphabetic characters are counted, so digits, punctuation and
//! separators never influence the verdict. Letters outside the listed blocks
//! are reported as [`Script::Unknown`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Writing system of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Latin,
    Han,
    Hiragana,
    Katakana,
    Hangul,
    Arabic,
    Cyrillic,
    Greek,
    Thai,
    Unknown,
}

impl Script {
    /// Classifies one character. Non-alphabetic input is still classified by
    /// range; callers that only care about letters should filter first.
    pub fn of(ch: char) -> Script {
        match ch as u32 {
            0x4E00..=0x9FFF => Script::Han,
            0x3040..=0x309F => Script::Hiragana,
            0x30A0..=0x30FF => Script::Katakana,
            0xAC00..=0xD7AF => Script::Hangul,
            0x0600..=0x06FF => Script::Arabic,
            0x0400..=0x04FF => Script::Cyrillic,
            0x0370..=0x03FF => Script::Greek,
            0x0E00..=0x0E7F => Script::Thai,
            0x0041..=0x005A | 0x0061..=0x007A => Script::Latin,
            // Latin-1 Supplement letters, Extended-A/B, Extended Additional.
            0x00C0..=0x024F | 0x1E00..=0x1EFF if ch.is_alphabetic() => Script::Latin,
            _ => Script::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Script::Latin => "latin",
            Script::Han => "han",
            Script::Hiragana => "hiragana",
            Script::Katakana => "katakana",
            Script::Hangul => "hangul",
            Script::Arabic => "arabic",
            Script::Cyrillic => "cyrillic",
            Script::Greek => "greek",
            Script::Thai => "thai",
            Script::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Letter counts per script for one string, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptProfile {
    counts: Vec<(Script, usize)>,
    total: usize,
}

impl ScriptProfile {
    pub fn of(text: &str) -> Self {
        let mut profile = ScriptProfile::default();
        for ch in text.chars().filter(|ch| ch.is_alphabetic()) {
            let script = Script::of(ch);
            profile.total += 1;
            match profile.counts.iter_mut().find(|(s, _)| *s == script) {
                Some((_, count)) => *count += 1,
                None => profile.counts.push((script, 1)),
            }
        }
        profile
    }

    /// Number of alphabetic characters seen.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn contains(&self, script: Script) -> bool {
        self.counts.iter().any(|(s, _)| *s == script)
    }

    /// Share of alphabetic characters written in `script`, in `[0, 1]`.
    pub fn ratio(&self, script: Script) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.counts
            .iter()
            .find(|(s, _)| *s == script)
            .map(|(_, count)| *count as f64 / self.total as f64)
            .unwrap_or(0.0)
    }

    /// Scripts present, in order of first appearance.
    pub fn scripts(&self) -> impl Iterator<Item = Script> + '_ {
        self.counts.iter().map(|(s, _)| *s)
    }

    /// Script with the most letters; ties go to the one seen first.
    pub fn dominant(&self) -> Option<Script> {
        let mut best: Option<(Script, usize)> = None;
        for &(script, count) in &self.counts {
            if best.map_or(true, |(_, top)| count > top) {
                best = Some((script, count));
            }
        }
        best.map(|(script, _)| script)
    }
}

/// Shorthand for `ScriptProfile::of(text).dominant()`.
pub fn dominant_script(text: &str) -> Option<Script> {
    ScriptProfile::of(text).dominant()
}
