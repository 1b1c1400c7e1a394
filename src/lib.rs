//! Workspace umbrella crate for namematch.
//!
//! Re-exports the comparison-key, matcher and romanization crates and adds a
//! [`NameResolver`] that stacks them into one entry point: free-form input in,
//! one of a fixed set of canonical names out.
//!
//! ```rust
//! use namematch::{KeyConfig, MatcherKind, MatcherOptions, NameResolver, ResolvedBy};
//! use namematch::build_name_matcher;
//!
//! # fn main() -> Result<(), namematch::ResolveError> {
//! let matcher = build_name_matcher(MatcherKind::Hybrid, &MatcherOptions::default())?;
//! let resolver = NameResolver::new(&["Ho Chi Minh", "Hanoi"], matcher, KeyConfig::default())?;
//!
//! let resolution = resolver.resolve("HO-CHI-MINH")?;
//! assert_eq!(resolution.name, Some("Ho Chi Minh"));
//! assert_eq!(resolution.resolved_by, ResolvedBy::Key);
//! # Ok(())
//! # }
//! ```
//!
//! A resolver can also be described in YAML and built with
//! [`NameMatchConfig::build_resolver`].

pub mod config;
mod resolver;

pub use canonical::{
    CanonicalError, CanonicalName, KeyConfig, Script, canonicalize, collapse_whitespace,
    comparison_key, dominant_script,
};
pub use matcher::{
    BoxError, ConfidenceLevel, MatchError, MatchKind, MatchMetrics, MatchResult, MatcherFactory,
    MatcherKind, MatcherOptions, MultiTargetMatcher, NameMatcher, Preset, StringMatcher,
    TargetConfig, TargetKind, build_name_matcher, build_string_matcher, create_name_matcher,
    create_string_matcher,
};
pub use romanize::{
    Language, RomanizationMapping, RomanizationMatch, RomanizationMatcher, RomanizeError,
    RomanizerConfig, Stage,
};

pub use crate::config::{ConfigLoadError, NameMatchConfig};
pub use crate::resolver::{NameResolver, ResolveError, ResolvedBy, Resolution};
