use std::fmt;
use std::sync::Arc;

use canonical::{CanonicalError, KeyConfig, canonicalize};
use matcher::{MatchError, MatchMetrics, MatchTimer, MetricsHandle, NameMatcher};
use romanize::{RomanizationMatcher, RomanizeError, Stage};
use serde::Serialize;
use thiserror::Error;
use tracing::{Level, debug, info};

/// Errors raised while building or running a [`NameResolver`].
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("resolver needs at least one canonical name")]
    NoNames,

    #[error(transparent)]
    Canonical(#[from] CanonicalError),

    #[error(transparent)]
    Match(#[from] MatchError),

    #[error(transparent)]
    Romanize(#[from] RomanizeError),
}

/// Layer that settled a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolvedBy {
    /// Input and name share a comparison key.
    Key,
    /// The configured name matcher found the name in the input.
    NameMatcher,
    /// The romanization cascade matched; carries the deciding stage.
    Romanization(Stage),
    Unresolved,
}

impl fmt::Display for ResolvedBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedBy::Key => f.write_str("key"),
            ResolvedBy::NameMatcher => f.write_str("name_matcher"),
            ResolvedBy::Romanization(stage) => write!(f, "romanization/{stage}"),
            ResolvedBy::Unresolved => f.write_str("unresolved"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Resolution<'r> {
    pub name: Option<&'r str>,
    pub score: f64,
    pub resolved_by: ResolvedBy,
}

impl Resolution<'_> {
    pub fn is_resolved(&self) -> bool {
        self.name.is_some()
    }
}

/// Maps free-form input onto one of a fixed set of canonical names.
///
/// Layers are tried in order and the first hit wins:
///
/// 1. comparison-key equality (`"Ho-Chi Minh"` is `"ho chi minh"`);
/// 2. the name matcher (containment, then prefix-biased fuzzy);
/// 3. the romanization cascade, when one is attached.
///
/// Build one resolver per name set and share it; resolving takes `&self`.
pub struct NameResolver {
    names: Vec<String>,
    keys: Vec<String>,
    key_config: KeyConfig,
    name_matcher: Box<dyn NameMatcher>,
    romanizer: Option<RomanizationMatcher>,
    metrics: MetricsHandle,
}

impl fmt::Debug for NameResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameResolver")
            .field("names", &self.names)
            .field("key_config", &self.key_config)
            .field("romanizer", &self.romanizer.is_some())
            .finish()
    }
}

impl NameResolver {
    pub fn new<S: AsRef<str>>(
        names: &[S],
        name_matcher: Box<dyn NameMatcher>,
        key_config: KeyConfig,
    ) -> Result<Self, ResolveError> {
        if names.is_empty() {
            return Err(ResolveError::NoNames);
        }
        let names: Vec<String> = names.iter().map(|n| n.as_ref().to_string()).collect();
        let keys = names
            .iter()
            .map(|name| canonicalize(name, &key_config).map(|c| c.key))
            .collect::<Result<Vec<_>, _>>()?;
        info!(names = names.len(), "resolver_initialized");
        Ok(Self {
            names,
            keys,
            key_config,
            name_matcher,
            romanizer: None,
            metrics: None,
        })
    }

    pub fn with_romanizer(mut self, romanizer: RomanizationMatcher) -> Self {
        self.romanizer = Some(romanizer);
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<dyn MatchMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn romanizer(&self) -> Option<&RomanizationMatcher> {
        self.romanizer.as_ref()
    }

    /// Mutable access for registering mappings and rules after construction.
    pub fn romanizer_mut(&mut self) -> Option<&mut RomanizationMatcher> {
        self.romanizer.as_mut()
    }

    pub fn resolve(&self, input: &str) -> Result<Resolution<'_>, ResolveError> {
        let span = tracing::span!(Level::DEBUG, "resolver.resolve", names = self.names.len());
        let _guard = span.enter();
        let timer = MatchTimer::start(&self.metrics, "resolver");

        let resolution = self.layers(input)?;
        debug!(
            input,
            name = ?resolution.name,
            score = resolution.score,
            resolved_by = %resolution.resolved_by,
            "name_resolved"
        );
        let stage = match resolution.resolved_by {
            ResolvedBy::Romanization(stage) => stage.as_str(),
            ResolvedBy::Key => "key",
            ResolvedBy::NameMatcher => "name_matcher",
            ResolvedBy::Unresolved => "none",
        };
        timer.finish(stage, resolution.is_resolved());
        Ok(resolution)
    }

    /// Resolves each input in order.
    pub fn resolve_all(&self, inputs: &[&str]) -> Result<Vec<Resolution<'_>>, ResolveError> {
        inputs.iter().map(|input| self.resolve(input)).collect()
    }

    fn layers(&self, input: &str) -> Result<Resolution<'_>, ResolveError> {
        let key = canonicalize(input, &self.key_config)?.key;
        if !key.is_empty() {
            if let Some(slot) = self.keys.iter().position(|k| *k == key) {
                return Ok(Resolution {
                    name: Some(self.names[slot].as_str()),
                    score: 1.0,
                    resolved_by: ResolvedBy::Key,
                });
            }
        }

        let names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        let (hit, name_score) = self.name_matcher.match_name_with_score(input, &names);
        if let Some(name) = hit {
            return Ok(Resolution {
                name: Some(name),
                score: name_score,
                resolved_by: ResolvedBy::NameMatcher,
            });
        }

        let mut best = name_score;
        if let Some(romanizer) = &self.romanizer {
            let outcome = romanizer.match_with_details(input, &names);
            if let Some(name) = outcome.matched {
                return Ok(Resolution {
                    name: Some(name),
                    score: outcome.score,
                    resolved_by: ResolvedBy::Romanization(outcome.stage),
                });
            }
            best = best.max(outcome.score);
        }

        Ok(Resolution {
            name: None,
            score: best,
            resolved_by: ResolvedBy::Unresolved,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matcher::{MatcherKind, MatcherOptions, build_name_matcher};
    use romanize::RomanizerConfig;

    fn resolver(names: &[&str]) -> NameResolver {
        let matcher = build_name_matcher(MatcherKind::Hybrid, &MatcherOptions::default())
            .expect("default options");
        NameResolver::new(names, matcher, KeyConfig::default()).expect("non-empty names")
    }

    #[test]
    fn key_layer_ignores_case_accents_and_separators() {
        let r = resolver(&["Ho Chi Minh", "Hanoi"]);
        let resolution = r.resolve("hồ-chí_minh").expect("resolve");
        assert_eq!(resolution.name, Some("Ho Chi Minh"));
        assert_eq!(resolution.resolved_by, ResolvedBy::Key);
        assert_eq!(resolution.score, 1.0);
    }

    #[test]
    fn name_matcher_finds_names_inside_filenames() {
        let r = resolver(&["alpha", "bravo"]);
        let resolution = r.resolve("bravo_20240101.kmz").expect("resolve");
        assert_eq!(resolution.name, Some("bravo"));
        assert_eq!(resolution.resolved_by, ResolvedBy::NameMatcher);
    }

    #[test]
    fn romanizer_resolves_other_scripts() {
        let romanizer =
            RomanizationMatcher::new(RomanizerConfig::default()).expect("default config");
        let r = resolver(&["北京", "上海"]).with_romanizer(romanizer);
        let resolution = r.resolve("Peking").expect("resolve");
        assert_eq!(resolution.name, Some("北京"));
        assert_eq!(resolution.resolved_by, ResolvedBy::Romanization(Stage::Mapping));
        assert_eq!(resolution.resolved_by.to_string(), "romanization/mapping");
    }

    #[test]
    fn unresolved_without_romanizer() {
        let r = resolver(&["北京", "上海"]);
        let resolution = r.resolve("Peking").expect("resolve");
        assert!(!resolution.is_resolved());
        assert_eq!(resolution.resolved_by, ResolvedBy::Unresolved);
    }

    #[test]
    fn empty_name_set_is_rejected() {
        let matcher = build_name_matcher(MatcherKind::Exact, &MatcherOptions::default())
            .expect("default options");
        let names: [&str; 0] = [];
        match NameResolver::new(&names, matcher, KeyConfig::default()) {
            Err(ResolveError::NoNames) => {}
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
