use crate::types::MatchResult;

/// Picks the best candidate for a target string.
///
/// Returned values borrow from `candidates`, so callers get their own
/// spelling back. Implementations are immutable once built and safe to share
/// across threads behind an `Arc`.
pub trait StringMatcher: Send + Sync {
    /// Short identifier used in logs and metrics.
    fn name(&self) -> &'static str;

    /// Best candidate and its score; `(None, best_score)` when nothing
    /// qualifies.
    fn find_match_with_score<'c>(&self, target: &str, candidates: &[&'c str])
        -> (Option<&'c str>, f64);

    fn find_match<'c>(&self, target: &str, candidates: &[&'c str]) -> Option<&'c str> {
        self.find_match_with_score(target, candidates).0
    }

    /// Same search as [`StringMatcher::find_match_with_score`], packaged with
    /// kind and confidence.
    fn match_with_result(&self, target: &str, candidates: &[&str]) -> MatchResult;

    /// Runs [`StringMatcher::find_match`] for each target, preserving order.
    fn match_multiple<'c>(&self, targets: &[&str], candidates: &[&'c str]) -> Vec<Option<&'c str>> {
        targets
            .iter()
            .map(|target| self.find_match(target, candidates))
            .collect()
    }
}
