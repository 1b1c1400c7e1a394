use std::collections::HashMap;

use canonical::comparison_key;
use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Score factor for a variant paired with the original form.
const VARIANT_ORIGINAL_FACTOR: f64 = 0.95;
/// Score factor for a variant paired with the standard romanization.
const VARIANT_ROMANIZED_FACTOR: f64 = 0.9;

/// One known spelling of a name in its original script and in Latin letters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RomanizationMapping {
    pub original: String,
    pub romanized: String,
    pub language: Language,
    pub confidence: f64,
    /// Alternate romanizations, in the order they were listed.
    #[serde(default)]
    pub variants: Vec<String>,
    #[serde(default)]
    pub region: String,
    /// Romanization system (`pinyin`, `hepburn`, ...) or `custom` / `adaptive`.
    #[serde(default)]
    pub source: String,
}

impl RomanizationMapping {
    pub fn new(
        original: impl Into<String>,
        romanized: impl Into<String>,
        language: Language,
        confidence: f64,
    ) -> Self {
        Self {
            original: original.into(),
            romanized: romanized.into(),
            language,
            confidence,
            variants: Vec::new(),
            region: String::new(),
            source: String::new(),
        }
    }

    pub fn with_variants<S: AsRef<str>>(mut self, variants: &[S]) -> Self {
        self.variants = variants.iter().map(|v| v.as_ref().to_string()).collect();
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }
}

/// Lowercase and comparison-key forms of one string. Two forms are equal when
/// either representation matches; an empty key never matches.
#[derive(Debug, Clone)]
pub(crate) struct Forms {
    lower: String,
    key: String,
}

impl Forms {
    pub(crate) fn of(text: &str) -> Self {
        Self {
            lower: text.to_lowercase(),
            key: comparison_key(text),
        }
    }

    pub(crate) fn lower(&self) -> &str {
        &self.lower
    }

    fn same(&self, other: &Forms) -> bool {
        self.lower == other.lower || (!self.key.is_empty() && self.key == other.key)
    }
}

/// A mapping with its comparison forms computed once.
#[derive(Debug, Clone)]
pub(crate) struct MappingEntry {
    mapping: RomanizationMapping,
    original: Forms,
    romanized: Forms,
    variants: Vec<Forms>,
}

impl MappingEntry {
    pub(crate) fn new(mapping: RomanizationMapping) -> Self {
        let original = Forms::of(&mapping.original);
        let romanized = Forms::of(&mapping.romanized);
        let variants = mapping.variants.iter().map(|v| Forms::of(v)).collect();
        Self {
            mapping,
            original,
            romanized,
            variants,
        }
    }

    pub(crate) fn mapping(&self) -> &RomanizationMapping {
        &self.mapping
    }

    /// True when `text` (lowercased) is this entry's original or romanized form.
    pub(crate) fn names(&self, lower: &str) -> bool {
        self.original.lower == lower || self.romanized.lower == lower
    }

    /// Score of `target` → `candidate` through this entry, before the
    /// language weight is applied.
    ///
    /// Original and romanized forms pair at full confidence in either
    /// direction. Variants pair with the original at 0.95 and with the
    /// romanized form at 0.9.
    pub(crate) fn pair_score(&self, target: &Forms, candidate: &Forms) -> f64 {
        let confidence = self.mapping.confidence;
        if (self.original.same(candidate) && self.romanized.same(target))
            || (self.romanized.same(candidate) && self.original.same(target))
        {
            return confidence;
        }

        let mut best: f64 = 0.0;
        for variant in &self.variants {
            let factor = if (variant.same(target) && self.original.same(candidate))
                || (self.original.same(target) && variant.same(candidate))
            {
                VARIANT_ORIGINAL_FACTOR
            } else if (variant.same(target) && self.romanized.same(candidate))
                || (self.romanized.same(target) && variant.same(candidate))
            {
                VARIANT_ROMANIZED_FACTOR
            } else {
                continue;
            };
            best = best.max(confidence * factor);
        }
        best
    }
}

/// Mappings plus a lowercase index over original and romanized forms.
#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    entries: Vec<MappingEntry>,
    index: HashMap<String, Vec<usize>>,
}

impl MappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mapping: RomanizationMapping) {
        let entry = MappingEntry::new(mapping);
        let slot = self.entries.len();
        self.index
            .entry(entry.original.lower.clone())
            .or_default()
            .push(slot);
        if entry.romanized.lower != entry.original.lower {
            self.index
                .entry(entry.romanized.lower.clone())
                .or_default()
                .push(slot);
        }
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RomanizationMapping> + '_ {
        self.entries.iter().map(MappingEntry::mapping)
    }

    pub(crate) fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    /// Mappings whose original or romanized form equals `query`, ignoring
    /// case, in insertion order.
    pub fn search(&self, query: &str) -> Vec<&RomanizationMapping> {
        self.index
            .get(&query.to_lowercase())
            .map(|slots| slots.iter().map(|&i| self.entries[i].mapping()).collect())
            .unwrap_or_default()
    }

    pub fn romanizations_of(&self, original: &str) -> Vec<String> {
        let lower = original.to_lowercase();
        self.search(original)
            .into_iter()
            .filter(|m| m.original.to_lowercase() == lower)
            .map(|m| m.romanized.clone())
            .collect()
    }

    pub fn originals_of(&self, romanized: &str) -> Vec<String> {
        let lower = romanized.to_lowercase();
        self.search(romanized)
            .into_iter()
            .filter(|m| m.romanized.to_lowercase() == lower)
            .map(|m| m.original.clone())
            .collect()
    }

    /// Languages of the entries naming `target` or `candidate`, one per hit.
    pub(crate) fn hit_languages(&self, target: &Forms, candidate: &Forms) -> Vec<Language> {
        self.entries
            .iter()
            .filter(|e| e.names(target.lower()) || e.names(candidate.lower()))
            .map(|e| e.mapping.language)
            .collect()
    }
}
