use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use canonical::{collapse_whitespace, comparison_key};
use matcher::{
    edit_similarity, FuzzyConfig, FuzzyStringMatcher, MatchMetrics, MatchResult, MatchTimer,
    MetricsHandle, StringMatcher,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::{debug, info, Level};

use crate::arabic::arabic_similarity;
use crate::config::{validate_weight, RomanizerConfig};
use crate::cross::cross_language_similarity;
use crate::error::{validate_unit, RomanizeError};
use crate::language::{Language, LanguageScores};
use crate::learning::LearnedStore;
use crate::mapping::{Forms, MappingEntry, MappingTable, RomanizationMapping};
use crate::phonetic::PhonemeScorer;
use crate::rules::{Rewrite, SoundRules};
use crate::syllable::structure_similarity;
use crate::tables::MAPPINGS;

const CUSTOM_TAG: &str = "custom";
/// Keys this short or shorter have their character-level score squared.
const SHORT_KEY_LEN: usize = 3;

static NON_NAME_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s'-]").expect("static name character class"));

/// Cascade stage that produced a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Exact,
    Mapping,
    Phonetic,
    Arabic,
    Syllable,
    SoundChange,
    CrossLanguage,
    CharacterLevel,
    Fuzzy,
    None,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Exact => "exact",
            Stage::Mapping => "mapping",
            Stage::Phonetic => "phonetic",
            Stage::Arabic => "arabic",
            Stage::Syllable => "syllable",
            Stage::SoundChange => "sound_change",
            Stage::CrossLanguage => "cross_language",
            Stage::CharacterLevel => "character_level",
            Stage::Fuzzy => "fuzzy",
            Stage::None => "none",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one cascade run.
///
/// `matched` is set when `score` reached the threshold; `stage` is then the
/// stage that produced it. On a miss `stage` is [`Stage::None`] and `score`
/// is the best score seen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RomanizationMatch<'c> {
    pub matched: Option<&'c str>,
    pub score: f64,
    pub stage: Stage,
}

impl<'c> RomanizationMatch<'c> {
    fn miss(score: f64) -> Self {
        Self {
            matched: None,
            score,
            stage: Stage::None,
        }
    }

    pub fn is_matched(&self) -> bool {
        self.matched.is_some()
    }
}

/// Running best of the cascade. Only a strictly greater score replaces the
/// current best, so the earliest stage and candidate win ties.
struct Best<'c> {
    candidate: Option<&'c str>,
    score: f64,
    stage: Stage,
}

impl<'c> Best<'c> {
    fn new() -> Self {
        Self {
            candidate: None,
            score: 0.0,
            stage: Stage::None,
        }
    }

    fn offer(&mut self, candidate: &'c str, score: f64, stage: Stage) {
        if score > self.score {
            self.candidate = Some(candidate);
            self.score = score;
            self.stage = stage;
        }
    }
}

/// Matches names across scripts and romanization systems.
///
/// Each call runs a cascade of scorers over every candidate. Cheap, precise
/// stages run first; later stages only run while the best score is still
/// below their gate (see [`crate::StageGates`]). The mapping table holds the
/// built-in romanizations plus anything added with
/// [`RomanizationMatcher::add_custom_mapping`]. With adaptive learning on,
/// pairs accepted often enough become learned mappings that the mapping
/// stage uses on later calls.
///
/// Matching takes `&self`; the learned store sits behind a mutex, so one
/// matcher can be shared across threads in an `Arc`.
pub struct RomanizationMatcher {
    config: RomanizerConfig,
    table: MappingTable,
    rules: SoundRules,
    fuzzy: FuzzyStringMatcher,
    learned: Mutex<LearnedStore>,
    metrics: MetricsHandle,
}

impl fmt::Debug for RomanizationMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RomanizationMatcher")
            .field("config", &self.config)
            .field("mappings", &self.table.len())
            .field("metrics", &self.metrics.is_some())
            .finish()
    }
}

impl RomanizationMatcher {
    /// Builds a matcher with the built-in mapping and rule tables.
    pub fn new(config: RomanizerConfig) -> Result<Self, RomanizeError> {
        config.validate()?;
        let fuzzy = FuzzyStringMatcher::new(FuzzyConfig {
            threshold: config.threshold,
            debug: config.debug,
        })?;
        let mut table = MappingTable::new();
        for row in MAPPINGS {
            table.push(row.to_mapping());
        }
        info!(
            threshold = config.threshold,
            mappings = table.len(),
            phonetic = config.enable_phonetic,
            cross_language = config.enable_cross_language,
            adaptive = config.enable_adaptive_learning,
            "romanizer_initialized"
        );
        Ok(Self {
            config,
            table,
            rules: SoundRules::default(),
            fuzzy,
            learned: Mutex::new(LearnedStore::default()),
            metrics: None,
        })
    }

    pub fn with_metrics(mut self, metrics: Arc<dyn MatchMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn config(&self) -> &RomanizerConfig {
        &self.config
    }

    pub fn threshold(&self) -> f64 {
        self.config.threshold
    }

    /// Replaces the acceptance threshold, for the cascade and the fuzzy
    /// fallback alike. Out-of-range values leave the matcher unchanged.
    pub fn set_threshold(&mut self, threshold: f64) -> Result<(), RomanizeError> {
        validate_unit("threshold", threshold)?;
        self.fuzzy.set_threshold(threshold)?;
        self.config.threshold = threshold;
        Ok(())
    }

    pub fn set_language_weight(
        &mut self,
        language: Language,
        weight: f64,
    ) -> Result<(), RomanizeError> {
        validate_weight(language, weight)?;
        self.config.language_weights.insert(language, weight);
        Ok(())
    }

    /// Adds a mapping tagged `custom`. It takes part in matching from the
    /// next call on.
    pub fn add_custom_mapping(
        &mut self,
        original: &str,
        romanized: &str,
        language: Language,
        confidence: f64,
    ) -> Result<(), RomanizeError> {
        self.add_mapping(
            RomanizationMapping::new(original, romanized, language, confidence)
                .with_region(CUSTOM_TAG)
                .with_source(CUSTOM_TAG),
        )
    }

    /// Adds a fully described mapping, variants included.
    pub fn add_mapping(&mut self, mapping: RomanizationMapping) -> Result<(), RomanizeError> {
        if mapping.original.trim().is_empty() || mapping.romanized.trim().is_empty() {
            return Err(RomanizeError::InvalidConfig(
                "mapping original and romanized forms must not be empty".into(),
            ));
        }
        validate_unit("confidence", mapping.confidence)?;
        info!(
            original = %mapping.original,
            romanized = %mapping.romanized,
            language = %mapping.language,
            confidence = mapping.confidence,
            "custom_mapping_added"
        );
        self.table.push(mapping);
        Ok(())
    }

    /// Appends a `from → to` rewrite to the rules of `language`.
    pub fn add_sound_rule(
        &mut self,
        language: Language,
        from: &str,
        to: &str,
    ) -> Result<(), RomanizeError> {
        let rule = Rewrite::replace(from, to)?;
        info!(language = %language, from, to, "sound_rule_added");
        self.rules.push(language, rule);
        Ok(())
    }

    pub fn sound_rules(&self) -> &SoundRules {
        &self.rules
    }

    pub fn mappings(&self) -> &MappingTable {
        &self.table
    }

    /// Known romanizations of `original`, table entries first, then learned.
    pub fn romanizations_of(&self, original: &str) -> Vec<String> {
        let mut found = self.table.romanizations_of(original);
        let lower = original.to_lowercase();
        found.extend(
            self.lock_learned()
                .entries()
                .iter()
                .map(MappingEntry::mapping)
                .filter(|m| m.original.to_lowercase() == lower)
                .map(|m| m.romanized.clone()),
        );
        found
    }

    /// Known original-script forms of `romanized`, table entries first, then
    /// learned.
    pub fn originals_of(&self, romanized: &str) -> Vec<String> {
        let mut found = self.table.originals_of(romanized);
        let lower = romanized.to_lowercase();
        found.extend(
            self.lock_learned()
                .entries()
                .iter()
                .map(MappingEntry::mapping)
                .filter(|m| m.romanized.to_lowercase() == lower)
                .map(|m| m.original.clone()),
        );
        found
    }

    /// Every mapping naming `text` as original or romanized form, highest
    /// confidence first. Equal confidences keep table order.
    pub fn suggestions(&self, text: &str) -> Vec<RomanizationMapping> {
        let lower = text.to_lowercase();
        let mut found: Vec<RomanizationMapping> =
            self.table.search(text).into_iter().cloned().collect();
        found.extend(
            self.lock_learned()
                .entries()
                .iter()
                .filter(|e| e.names(&lower))
                .map(|e| e.mapping().clone()),
        );
        found.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        found
    }

    /// Lowercases, trims and collapses whitespace, then drops everything but
    /// word characters, spaces, `'` and `-`. With a language, that
    /// language's sound rules are applied to the result.
    pub fn normalize_romanization(&self, text: &str, language: Option<Language>) -> String {
        let collapsed = collapse_whitespace(&text.to_lowercase());
        let cleaned = NON_NAME_CHARS.replace_all(&collapsed, "").into_owned();
        match language {
            Some(language) => self.rules.apply(&cleaned, language),
            None => cleaned,
        }
    }

    /// Snapshot of the mappings promoted by adaptive learning so far.
    pub fn learned_mappings(&self) -> Vec<RomanizationMapping> {
        self.lock_learned().mappings()
    }

    /// How often `target` has been accepted as `matched`.
    pub fn match_count(&self, target: &str, matched: &str) -> u32 {
        self.lock_learned().count(target, matched)
    }

    /// A panic in another thread while it held the lock leaves the store
    /// usable; counts are plain integers and promotion is a single push.
    fn lock_learned(&self) -> std::sync::MutexGuard<'_, LearnedStore> {
        self.learned.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs the cascade and reports which stage decided the result.
    pub fn match_with_details<'c>(&self, target: &str, candidates: &[&'c str]) -> RomanizationMatch<'c> {
        let span = tracing::span!(Level::DEBUG, "romanize.match", candidates = candidates.len());
        let _guard = span.enter();
        let timer = MatchTimer::start(&self.metrics, "romanize");

        if target.is_empty() || candidates.is_empty() {
            timer.finish(Stage::None.as_str(), false);
            return RomanizationMatch::miss(0.0);
        }
        if let Some(&hit) = candidates.iter().find(|&&candidate| candidate == target) {
            debug!(input = target, matched = hit, score = 1.0, stage = %Stage::Exact, "romanize_match");
            timer.finish(Stage::Exact.as_str(), true);
            return RomanizationMatch {
                matched: Some(hit),
                score: 1.0,
                stage: Stage::Exact,
            };
        }

        let best = self.cascade(target, candidates);
        let accepted = best.candidate.filter(|_| best.score >= self.config.threshold);

        if let Some(hit) = accepted {
            if self.config.enable_adaptive_learning {
                self.lock_learned()
                    .record(target, hit, best.score, &self.config.learning);
            }
        }

        let outcome = match accepted {
            Some(hit) => RomanizationMatch {
                matched: Some(hit),
                score: best.score,
                stage: best.stage,
            },
            None => RomanizationMatch::miss(best.score),
        };
        debug!(
            input = target,
            matched = ?outcome.matched,
            score = outcome.score,
            stage = %outcome.stage,
            "romanize_match"
        );
        timer.finish(outcome.stage.as_str(), outcome.is_matched());
        outcome
    }

    fn cascade<'c>(&self, target: &str, candidates: &[&'c str]) -> Best<'c> {
        let gates = &self.config.gates;
        let target_forms = Forms::of(target);
        let mut best = Best::new();

        {
            let learned = self.lock_learned();
            self.run_stage(&mut best, candidates, Stage::Mapping, |candidate| {
                self.mapping_score(&target_forms, &Forms::of(candidate), learned.entries())
            });
        }

        let languages = |candidate: &str| {
            let hits = self.table.hit_languages(&target_forms, &Forms::of(candidate));
            LanguageScores::detect(target, candidate, &hits)
        };

        if self.config.enable_phonetic && best.score < gates.phonetic {
            self.run_stage(&mut best, candidates, Stage::Phonetic, |candidate| {
                PhonemeScorer::for_languages(&languages(candidate)).similarity(target, candidate)
            });
        }
        if best.score < gates.arabic {
            self.run_stage(&mut best, candidates, Stage::Arabic, |candidate| {
                arabic_similarity(target, candidate)
            });
        }
        if best.score < gates.syllable {
            self.run_stage(&mut best, candidates, Stage::Syllable, |candidate| {
                structure_similarity(target, candidate)
            });
        }
        if best.score < gates.sound_change {
            self.run_stage(&mut best, candidates, Stage::SoundChange, |candidate| {
                self.rules.score(target, candidate, &languages(candidate))
            });
        }
        if self.config.enable_cross_language && best.score < gates.cross_language {
            self.run_stage(&mut best, candidates, Stage::CrossLanguage, |candidate| {
                cross_language_similarity(target, candidate)
            });
        }
        if best.score < gates.character {
            self.run_stage(&mut best, candidates, Stage::CharacterLevel, |candidate| {
                character_similarity(target, candidate)
            });
        }
        if best.score < self.config.threshold {
            self.run_stage(&mut best, candidates, Stage::Fuzzy, |candidate| {
                self.fuzzy.score(target, candidate)
            });
        }
        best
    }

    /// Blank candidates are never scored, so they can neither win nor be
    /// learned.
    fn run_stage<'c, F>(&self, best: &mut Best<'c>, candidates: &[&'c str], stage: Stage, score: F)
    where
        F: Fn(&str) -> f64,
    {
        for &candidate in candidates.iter().filter(|c| !c.trim().is_empty()) {
            let s = score(candidate);
            if self.config.debug {
                debug!(candidate, score = s, stage = %stage, "romanize_candidate");
            }
            best.offer(candidate, s, stage);
        }
    }

    /// Best weighted score over built-in, custom and learned mappings.
    fn mapping_score(&self, target: &Forms, candidate: &Forms, learned: &[MappingEntry]) -> f64 {
        self.table
            .entries()
            .iter()
            .chain(learned)
            .map(|entry| {
                let weight = self.config.language_weight(entry.mapping().language);
                entry.pair_score(target, candidate) * weight
            })
            .fold(0.0, f64::max)
    }
}

/// Edit similarity of the comparison keys, squared for very short keys.
/// Two empty keys score 0.
fn character_similarity(target: &str, candidate: &str) -> f64 {
    let left = comparison_key(target);
    let right = comparison_key(candidate);
    let longest = left.chars().count().max(right.chars().count());
    if longest == 0 {
        return 0.0;
    }
    let similarity = edit_similarity(&left, &right);
    if longest <= SHORT_KEY_LEN {
        similarity * similarity
    } else {
        similarity
    }
}

impl StringMatcher for RomanizationMatcher {
    fn name(&self) -> &'static str {
        "romanize"
    }

    fn find_match_with_score<'c>(
        &self,
        target: &str,
        candidates: &[&'c str],
    ) -> (Option<&'c str>, f64) {
        let outcome = self.match_with_details(target, candidates);
        (outcome.matched, outcome.score)
    }

    fn match_with_result(&self, target: &str, candidates: &[&str]) -> MatchResult {
        let outcome = self.match_with_details(target, candidates);
        match (outcome.matched, outcome.stage) {
            (Some(hit), Stage::Exact) => MatchResult::exact(hit),
            (Some(hit), _) => MatchResult::fuzzy(hit, outcome.score),
            (None, _) => MatchResult::no_match(outcome.score),
        }
    }
}
