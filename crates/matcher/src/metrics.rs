// Metrics hooks for the matchers.
//
// Each engine takes an optional `Arc<dyn MatchMetrics>` at construction
// (`with_metrics`) and reports one event per top-level match call. Nothing is
// registered globally, so two engines in one process can report to different
// backends.
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics observer for match operations.
pub trait MatchMetrics: Send + Sync {
    /// Record the outcome of a match.
    ///
    /// `matcher` names the engine (`multi_target`, `romanize`, ...), `stage`
    /// is the component that decided the outcome, `latency` is wall-clock time
    /// for the whole call and `matched` tells whether a value was returned.
    fn record_match(&self, matcher: &str, stage: &str, latency: Duration, matched: bool);
}

/// Shared handle stored by engines.
pub type MetricsHandle = Option<Arc<dyn MatchMetrics>>;

/// Times one match call and reports it on [`MatchTimer::finish`].
pub struct MatchTimer<'a> {
    metrics: Option<&'a Arc<dyn MatchMetrics>>,
    matcher: &'static str,
    started: Instant,
}

impl<'a> MatchTimer<'a> {
    pub fn start(metrics: &'a MetricsHandle, matcher: &'static str) -> Self {
        Self {
            metrics: metrics.as_ref(),
            matcher,
            started: Instant::now(),
        }
    }

    pub fn finish(self, stage: &str, matched: bool) {
        if let Some(metrics) = self.metrics {
            metrics.record_match(self.matcher, stage, self.started.elapsed(), matched);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recording {
        events: Mutex<Vec<(String, String, bool)>>,
    }

    impl MatchMetrics for Recording {
        fn record_match(&self, matcher: &str, stage: &str, _latency: Duration, matched: bool) {
            self.events
                .lock()
                .unwrap()
                .push((matcher.to_string(), stage.to_string(), matched));
        }
    }

    #[test]
    fn timer_reports_once_per_finish() {
        let recording = Arc::new(Recording::default());
        let handle: MetricsHandle = Some(recording.clone());

        MatchTimer::start(&handle, "romanize").finish("mapping", true);
        MatchTimer::start(&None, "romanize").finish("none", false);

        let events = recording.events.lock().unwrap().clone();
        assert_eq!(events, vec![("romanize".to_string(), "mapping".to_string(), true)]);
    }
}
