use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn, Level};

use crate::factory::{build_string_matcher, MatcherOptions};
use crate::metrics::{MatchMetrics, MatchTimer, MetricsHandle};
use crate::multi::result::MultiMatchResult;
use crate::multi::target::{TargetConfig, TargetKind};
use crate::traits::StringMatcher;
use crate::types::{BoxError, MatchError, MatchKind, MatchResult};

/// Cut-off used by callers of [`MultiTargetMatcher::find_best_matches`] that
/// have no better value.
pub const DEFAULT_MIN_OVERALL: f64 = 0.5;
/// Pattern-path scores at or above this are reported as exact.
const EXACT_SCORE_FLOOR: f64 = 0.95;

struct RegisteredTarget {
    name: String,
    config: TargetConfig,
    matcher: Box<dyn StringMatcher>,
}

/// Counts over the registered targets.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TargetStatistics {
    pub total: usize,
    pub required: usize,
    pub optional: usize,
    pub total_weight: f64,
    pub by_kind: BTreeMap<TargetKind, usize>,
}

/// Evaluates several named targets against one input and combines them into
/// a weighted score and a completeness verdict.
///
/// Targets are evaluated in registration order. Each target owns its own
/// matcher, built from its [`TargetConfig`] when the target is added.
pub struct MultiTargetMatcher {
    targets: Vec<RegisteredTarget>,
    debug: bool,
    metrics: MetricsHandle,
}

impl Default for MultiTargetMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiTargetMatcher {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            debug: false,
            metrics: None,
        }
    }

    /// Turns on per-candidate `debug` events in every target matcher added
    /// afterwards.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<dyn MatchMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Registers `config` under `name`. A target with the same name is
    /// replaced in place, keeping its position.
    pub fn add_target(
        &mut self,
        name: impl Into<String>,
        config: TargetConfig,
    ) -> Result<&mut Self, MatchError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MatchError::InvalidConfig("target name must not be empty".into()));
        }
        config.validate()?;
        let matcher = build_string_matcher(
            config.strategy,
            &MatcherOptions {
                threshold: config.threshold,
                case_sensitive: config.case_sensitive,
                debug: self.debug,
            },
        )?;
        info!(
            target_name = %name,
            kind = %config.kind,
            strategy = %config.strategy,
            required = config.required,
            "target_registered"
        );
        let entry = RegisteredTarget {
            name,
            config,
            matcher,
        };
        match self.targets.iter_mut().find(|t| t.name == entry.name) {
            Some(existing) => *existing = entry,
            None => self.targets.push(entry),
        }
        Ok(self)
    }

    pub fn add_name_target(
        &mut self,
        name: impl Into<String>,
        names: &[&str],
    ) -> Result<&mut Self, MatchError> {
        self.add_target(name, TargetConfig::name(names))
    }

    pub fn add_date_target(&mut self, name: impl Into<String>) -> Result<&mut Self, MatchError> {
        self.add_target(name, TargetConfig::date())
    }

    pub fn add_extension_target(
        &mut self,
        name: impl Into<String>,
        extensions: &[&str],
    ) -> Result<&mut Self, MatchError> {
        self.add_target(name, TargetConfig::extension(extensions))
    }

    pub fn add_number_target(&mut self, name: impl Into<String>) -> Result<&mut Self, MatchError> {
        self.add_target(name, TargetConfig::number())
    }

    pub fn add_custom_target(
        &mut self,
        name: impl Into<String>,
        patterns: &[&str],
        regex: Option<&str>,
    ) -> Result<&mut Self, MatchError> {
        let mut config = TargetConfig::custom(patterns);
        if let Some(regex) = regex {
            config = config.with_regex(regex)?;
        }
        self.add_target(name, config)
    }

    /// Registers a target with the defaults of the kind named by `kind`
    /// (`name`, `date`, `file_extension`, `number` or `custom`).
    pub fn add_target_by_kind(
        &mut self,
        name: impl Into<String>,
        kind: &str,
        patterns: &[&str],
    ) -> Result<&mut Self, MatchError> {
        let config = match kind.parse::<TargetKind>()? {
            TargetKind::Name => TargetConfig::name(patterns),
            TargetKind::Date => TargetConfig::date(),
            TargetKind::FileExtension => TargetConfig::extension(patterns),
            TargetKind::Number => TargetConfig::number(),
            TargetKind::Custom => TargetConfig::custom(patterns),
        };
        self.add_target(name, config)
    }

    pub fn remove_target(&mut self, name: &str) -> bool {
        let before = self.targets.len();
        self.targets.retain(|t| t.name != name);
        before != self.targets.len()
    }

    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    pub fn target_names(&self) -> Vec<&str> {
        self.targets.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn target_config(&self, name: &str) -> Option<&TargetConfig> {
        self.targets
            .iter()
            .find(|t| t.name == name)
            .map(|t| &t.config)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn statistics(&self) -> TargetStatistics {
        let mut stats = TargetStatistics::default();
        for target in &self.targets {
            stats.total += 1;
            if target.config.required {
                stats.required += 1;
            } else {
                stats.optional += 1;
            }
            stats.total_weight += target.config.weight;
            *stats.by_kind.entry(target.config.kind).or_insert(0) += 1;
        }
        stats
    }

    /// Evaluates every target against `text`.
    ///
    /// A failing preprocessor or validator only affects its own target: the
    /// target is reported unmatched and the error text lands in
    /// [`MultiMatchResult::errors`].
    pub fn match_string(&self, text: &str) -> MultiMatchResult {
        let span = tracing::span!(Level::DEBUG, "multi_target.match", targets = self.targets.len());
        let _guard = span.enter();
        let timer = MatchTimer::start(&self.metrics, "multi_target");

        let mut results = BTreeMap::new();
        let mut errors = BTreeMap::new();
        let mut missing_required = Vec::new();
        let mut weighted = 0.0;
        let mut total_weight = 0.0;

        for target in &self.targets {
            let result = match self.evaluate(target, text) {
                Ok(result) => result,
                Err(err) => {
                    warn!(target_name = %target.name, error = %err, "target_evaluation_failed");
                    errors.insert(target.name.clone(), err.to_string());
                    MatchResult::no_match(0.0)
                }
            };

            total_weight += target.config.weight;
            if result.is_matched() {
                weighted += result.score * target.config.weight;
            } else if target.config.required {
                missing_required.push(target.name.clone());
            }
            if self.debug {
                debug!(
                    target_name = %target.name,
                    kind = %result.kind,
                    score = result.score,
                    "target_evaluated"
                );
            }
            results.insert(target.name.clone(), result);
        }

        let overall_score = if total_weight > 0.0 {
            weighted / total_weight
        } else {
            0.0
        };
        let is_complete = missing_required.is_empty();
        let matched_any = results.values().any(MatchResult::is_matched);
        timer.finish(if is_complete { "complete" } else { "incomplete" }, matched_any);

        MultiMatchResult {
            source: text.to_string(),
            results,
            overall_score,
            is_complete,
            missing_required,
            errors,
        }
    }

    pub fn match_multiple(&self, texts: &[&str]) -> Vec<MultiMatchResult> {
        texts.iter().map(|text| self.match_string(text)).collect()
    }

    /// Results with `overall_score >= min_overall`, best first; ties keep
    /// input order.
    pub fn find_best_matches(&self, texts: &[&str], min_overall: f64) -> Vec<MultiMatchResult> {
        let mut hits: Vec<MultiMatchResult> = self
            .match_multiple(texts)
            .into_iter()
            .filter(|result| result.overall_score >= min_overall)
            .collect();
        hits.sort_by(|a, b| b.overall_score.total_cmp(&a.overall_score));
        hits
    }

    fn evaluate(&self, target: &RegisteredTarget, text: &str) -> Result<MatchResult, BoxError> {
        let cfg = &target.config;

        let input: Cow<'_, str> = match &cfg.preprocessor {
            Some(preprocess) => Cow::Owned(preprocess(text)?),
            None => Cow::Borrowed(text),
        };
        if let Some(max_length) = cfg.max_length {
            if input.chars().count() > max_length {
                return Ok(MatchResult::no_match(0.0));
            }
        }

        // Spans are offsets into the preprocessed input.
        if let Some(regex) = &cfg.regex {
            if let Some(found) = regex
                .captures(&input)
                .and_then(|caps| caps.get(1).or_else(|| caps.get(0)))
            {
                let value = found.as_str();
                let accepted = match &cfg.validator {
                    Some(validate) => validate(value)?,
                    None => true,
                };
                if accepted {
                    return Ok(MatchResult::pattern(value, (found.start(), found.end()))
                        .with_source_pattern(regex.as_str()));
                }
            }
        }

        if cfg.patterns.is_empty() {
            return Ok(MatchResult::no_match(0.0));
        }
        let patterns: Vec<&str> = cfg.patterns.iter().map(String::as_str).collect();
        let (hit, score) = target.matcher.find_match_with_score(&input, &patterns);
        let Some(hit) = hit else {
            return Ok(MatchResult::no_match(score));
        };
        if score < cfg.min_score {
            return Ok(MatchResult::no_match(0.0));
        }
        if let Some(validate) = &cfg.validator {
            if !validate(hit)? {
                return Ok(MatchResult::no_match(0.0));
            }
        }

        let kind = if score >= EXACT_SCORE_FLOOR {
            MatchKind::Exact
        } else {
            MatchKind::Fuzzy
        };
        Ok(MatchResult::matched(hit, score, kind)
            .with_confidence(0.8 * score + 0.2)
            .with_source_pattern(hit))
    }
}

#[cfg(test)]
mod tests;
