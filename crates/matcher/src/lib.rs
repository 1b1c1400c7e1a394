//! # Name matchers (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` answers "which of these known strings is this noisy input
//! talking about?". It sits on top of the canonical key layer (`canonical`)
//! and is used directly by the romanization engine (`romanize`), which
//! reuses its similarity scoring and fuzzy fallback.
//!
//! ## Core Types
//!
//! - [`SimilarityCalculator`]: bounded `[0, 1]` similarity from sequence
//!   alignment, character overlap and length.
//! - [`StringMatcher`]: the shared contract, implemented by
//!   - [`ExactStringMatcher`]: containment in either direction, score 1.0;
//!   - [`FuzzyStringMatcher`]: best similarity at or above a threshold;
//!   - [`HybridStringMatcher`]: exact first, fuzzy when exact finds nothing.
//! - [`NameMatcher`]: filename questions ("which name?", "which pattern?")
//!   with exact, fuzzy and hybrid implementations.
//! - [`MultiTargetMatcher`]: several named targets (name, date, extension,
//!   number, custom regex) combined into a weighted score and a completeness
//!   verdict.
//! - [`MatcherFactory`] and [`create_string_matcher`]: kind name + options →
//!   configured matcher, plus presets.
//!
//! ## Example Usage
//!
//! ```rust
//! use matcher::{MultiTargetMatcher, MatchError};
//!
//! fn main() -> Result<(), MatchError> {
//!     let mut matcher = MultiTargetMatcher::new();
//!     matcher
//!         .add_name_target("name", &["alpha", "bravo"])?
//!         .add_date_target("date")?
//!         .add_extension_target("extension", &[".kmz"])?;
//!
//!     let result = matcher.match_string("bravo_20240101.kmz");
//!     assert_eq!(result.matched_value("name"), Some("bravo"));
//!     assert_eq!(result.matched_value("date"), Some("20240101"));
//!     assert!(result.is_complete);
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! Matching never fails: a miss is `None` plus the best score seen.
//! Construction and registration return [`MatchError`] for thresholds
//! outside `[0, 1]`, unknown kind names and regexes that do not compile.
//!
//! ## Observability
//!
//! Every crate-level decision point emits `tracing` events; matchers built
//! with `debug: true` also log each candidate at `debug`. Pass a
//! [`MatchMetrics`] implementation to
//! [`MultiTargetMatcher::with_metrics`] to record per-call latency and
//! outcome.

pub mod exact;
pub mod factory;
pub mod fuzzy;
pub mod hybrid;
pub mod metrics;
pub mod multi;
pub mod name;
pub mod similarity;
pub mod traits;
pub mod types;

pub use crate::exact::{ExactConfig, ExactStringMatcher};
pub use crate::factory::{
    build_name_matcher, build_string_matcher, create_name_matcher, create_string_matcher,
    MatcherFactory, MatcherKind, MatcherOptions, OptionsCatalog, Preset,
};
pub use crate::fuzzy::{FuzzyConfig, FuzzyStringMatcher, DEFAULT_THRESHOLD};
pub use crate::hybrid::{
    HybridConfig, HybridStringMatcher, MatchStrategy, DEFAULT_FALLBACK_THRESHOLD,
};
pub use crate::metrics::{MatchMetrics, MatchTimer, MetricsHandle};
pub use crate::multi::{
    BatchAnalysis, MultiMatchResult, MultiTargetMatcher, TargetConfig, TargetKind,
    TargetStatistics, DEFAULT_MIN_OVERALL,
};
pub use crate::name::{ExactNameMatcher, FuzzyNameMatcher, HybridNameMatcher, NameMatcher};
pub use crate::similarity::{
    edit_similarity, similarity, SimilarityCalculator, SimilarityWeights, DEFAULT_PREFIX_WEIGHT,
};
pub use crate::traits::StringMatcher;
pub use crate::types::{BoxError, ConfidenceLevel, MatchError, MatchKind, MatchResult};
