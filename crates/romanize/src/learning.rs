use std::collections::{HashMap, HashSet};

use tracing::info;

use crate::config::LearningPolicy;
use crate::language::{is_original_script, language_of_pair};
use crate::mapping::{MappingEntry, RomanizationMapping};

pub(crate) const LEARNED_REGION: &str = "learned";
pub(crate) const LEARNED_SOURCE: &str = "adaptive";

/// Occurrence counts of accepted `(target, matched)` pairs and the mappings
/// promoted from them. Lives for the lifetime of one matcher.
#[derive(Debug, Default)]
pub(crate) struct LearnedStore {
    counts: HashMap<(String, String), u32>,
    promoted: HashSet<(String, String)>,
    entries: Vec<MappingEntry>,
}

impl LearnedStore {
    /// Counts one accepted match. Returns the new mapping when this match
    /// promotes the pair; a pair is promoted at most once.
    pub(crate) fn record(
        &mut self,
        target: &str,
        matched: &str,
        score: f64,
        policy: &LearningPolicy,
    ) -> Option<RomanizationMapping> {
        let key = (target.to_string(), matched.to_string());
        let count = self.counts.entry(key.clone()).or_insert(0);
        *count += 1;
        if *count < policy.min_occurrences
            || score < policy.min_score
            || self.promoted.contains(&key)
        {
            return None;
        }

        let (original, romanized) = if is_original_script(target) {
            (target, matched)
        } else {
            (matched, target)
        };
        let language = language_of_pair(target, matched);
        let confidence = policy.confidence.min(score);
        let mapping = RomanizationMapping::new(original, romanized, language, confidence)
            .with_region(LEARNED_REGION)
            .with_source(LEARNED_SOURCE);
        info!(
            original = %mapping.original,
            romanized = %mapping.romanized,
            language = %language,
            "learned_mapping_promoted"
        );
        self.promoted.insert(key);
        self.entries.push(MappingEntry::new(mapping.clone()));
        Some(mapping)
    }

    pub(crate) fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    pub(crate) fn count(&self, target: &str, matched: &str) -> u32 {
        self.counts
            .get(&(target.to_string(), matched.to_string()))
            .copied()
            .unwrap_or(0)
    }

    pub(crate) fn mappings(&self) -> Vec<RomanizationMapping> {
        self.entries.iter().map(|e| e.mapping().clone()).collect()
    }
}
