use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::MatchResult;

/// Per-target outcomes for one input string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MultiMatchResult {
    pub source: String,
    /// One entry per registered target, matched or not.
    pub results: BTreeMap<String, MatchResult>,
    /// Weighted mean of matched scores over the weights of all targets.
    pub overall_score: f64,
    /// True when every required target matched.
    pub is_complete: bool,
    /// Required targets without a match, in registration order.
    pub missing_required: Vec<String>,
    /// Targets whose preprocessor or validator failed, with the error text.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, String>,
}

impl MultiMatchResult {
    pub fn get(&self, target: &str) -> Option<&MatchResult> {
        self.results.get(target)
    }

    pub fn matched_value(&self, target: &str) -> Option<&str> {
        self.get(target).and_then(|result| result.matched.as_deref())
    }

    pub fn has_match(&self, target: &str) -> bool {
        self.matched_value(target).is_some()
    }

    pub fn match_count(&self) -> usize {
        self.results.values().filter(|r| r.is_matched()).count()
    }

    pub fn matched_targets(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter(|(_, result)| result.is_matched())
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// One-line human summary, e.g. `2/3 targets matched, overall 0.83, missing: date`.
    pub fn summary(&self) -> String {
        let mut line = format!(
            "{}/{} targets matched, overall {:.2}",
            self.match_count(),
            self.results.len(),
            self.overall_score
        );
        if self.is_complete {
            line.push_str(", complete");
        } else {
            line.push_str(", missing: ");
            line.push_str(&self.missing_required.join(", "));
        }
        line
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
