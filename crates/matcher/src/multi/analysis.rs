use std::collections::BTreeMap;

use serde::Serialize;

use crate::multi::result::MultiMatchResult;

/// Overall-score buckets: high ≥ 0.7, medium ≥ 0.4, low otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreDistribution {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TargetSummary {
    pub evaluated: usize,
    pub matched: usize,
    pub match_rate: f64,
    /// Mean score over matched results only.
    pub average_score: f64,
}

/// Aggregate view over a batch of [`MultiMatchResult`]s.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchAnalysis {
    pub total: usize,
    pub complete: usize,
    pub incomplete: usize,
    pub average_score: f64,
    pub min_score: f64,
    pub max_score: f64,
    pub distribution: ScoreDistribution,
    pub per_target: BTreeMap<String, TargetSummary>,
}

impl BatchAnalysis {
    pub fn from_results(results: &[MultiMatchResult]) -> Self {
        if results.is_empty() {
            return Self::default();
        }

        let mut analysis = BatchAnalysis {
            total: results.len(),
            min_score: f64::INFINITY,
            max_score: f64::NEG_INFINITY,
            ..Default::default()
        };
        let mut score_sum = 0.0;
        let mut matched_sums: BTreeMap<&str, f64> = BTreeMap::new();

        for result in results {
            if result.is_complete {
                analysis.complete += 1;
            } else {
                analysis.incomplete += 1;
            }
            score_sum += result.overall_score;
            analysis.min_score = analysis.min_score.min(result.overall_score);
            analysis.max_score = analysis.max_score.max(result.overall_score);

            match result.overall_score {
                s if s >= 0.7 => analysis.distribution.high += 1,
                s if s >= 0.4 => analysis.distribution.medium += 1,
                _ => analysis.distribution.low += 1,
            }

            for (name, target) in &result.results {
                let summary = analysis.per_target.entry(name.clone()).or_default();
                summary.evaluated += 1;
                if target.is_matched() {
                    summary.matched += 1;
                    *matched_sums.entry(name.as_str()).or_insert(0.0) += target.score;
                }
            }
        }

        analysis.average_score = score_sum / results.len() as f64;
        for (name, summary) in analysis.per_target.iter_mut() {
            summary.match_rate = summary.matched as f64 / summary.evaluated as f64;
            if summary.matched > 0 {
                let sum = matched_sums.get(name.as_str()).copied().unwrap_or(0.0);
                summary.average_score = sum / summary.matched as f64;
            }
        }
        analysis
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::multi::engine::MultiTargetMatcher;
    use crate::types::MatchError;

    #[test]
    fn summarizes_a_batch() -> Result<(), MatchError> {
        let mut matcher = MultiTargetMatcher::new();
        matcher
            .add_name_target("name", &["alpha", "bravo"])?
            .add_extension_target("extension", &["kmz"])?;

        let results = matcher.match_multiple(&["alpha.kmz", "bravo.txt", "zulu.doc"]);
        let analysis = BatchAnalysis::from_results(&results);

        assert_eq!(analysis.total, 3);
        assert_eq!(analysis.complete, 2);
        assert_eq!(analysis.incomplete, 1);
        assert_eq!(analysis.max_score, 1.0);
        assert_eq!(analysis.min_score, 0.0);
        assert_eq!(
            analysis.distribution,
            ScoreDistribution {
                high: 1,
                medium: 1,
                low: 1
            }
        );
        let name = &analysis.per_target["name"];
        assert_eq!(name.matched, 2);
        assert!((name.match_rate - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(name.average_score, 1.0);
        assert_eq!(analysis.per_target["extension"].matched, 1);
        Ok(())
    }

    #[test]
    fn empty_batch_is_all_zero() {
        assert_eq!(BatchAnalysis::from_results(&[]), BatchAnalysis::default());
    }
}
