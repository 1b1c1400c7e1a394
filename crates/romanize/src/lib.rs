//! Romanization-aware name matching.
//!
//! Matches a name against candidates written in other scripts or other
//! romanization systems: `Peking` finds `北京`, `mo7amed` finds `Muhammad`,
//! `Toukyou` finds `Tokyo`.
//!
//! ## How a match is decided
//!
//! [`RomanizationMatcher`] runs a cascade of scorers over every candidate and
//! keeps the best score. Later stages only run while the best score is below
//! their gate ([`StageGates`]):
//!
//! 1. exact equality
//! 2. mapping tables (built-in, custom and learned), weighted per language
//! 3. phoneme alignment ([`phonetic`])
//! 4. Arabic normalization and chat numerals ([`arabic`])
//! 5. syllable structure ([`syllable`])
//! 6. sound-change rules ([`rules`])
//! 7. cross-script features, when enabled ([`cross`])
//! 8. character-level edit similarity
//! 9. fuzzy similarity from the `matcher` crate
//!
//! A candidate is returned when its score reaches the threshold. Accepted
//! pairs are counted; with adaptive learning on, a pair seen often enough
//! becomes a mapping that stage 2 uses from then on.
//!
//! ```rust
//! use romanize::{RomanizationMatcher, RomanizerConfig, RomanizeError, Stage};
//!
//! fn main() -> Result<(), RomanizeError> {
//!     let matcher = RomanizationMatcher::new(RomanizerConfig::default())?;
//!     let outcome = matcher.match_with_details("Peking", &["北京", "上海"]);
//!     assert_eq!(outcome.matched, Some("北京"));
//!     assert_eq!(outcome.stage, Stage::Mapping);
//!     Ok(())
//! }
//! ```

pub mod arabic;
mod config;
pub mod cross;
mod engine;
mod error;
mod language;
mod learning;
mod mapping;
pub mod phonetic;
pub mod rules;
pub mod syllable;
mod tables;

pub use crate::config::{LearningPolicy, RomanizerConfig, StageGates, DEFAULT_THRESHOLD};
pub use crate::engine::{RomanizationMatch, RomanizationMatcher, Stage};
pub use crate::error::RomanizeError;
pub use crate::language::{
    is_original_script, language_of_pair, language_of_text, Language, LanguageScores,
};
pub use crate::mapping::{MappingTable, RomanizationMapping};
pub use crate::rules::{Rewrite, SoundRules};
pub use crate::tables::{PhoneticMapping, PHONETIC_MAPPINGS};
