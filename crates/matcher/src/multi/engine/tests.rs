use super::*;
use std::sync::RwLock;
use std::time::Duration;

use crate::factory::MatcherKind;

fn file_matcher() -> Result<MultiTargetMatcher, MatchError> {
    let mut matcher = MultiTargetMatcher::new();
    matcher
        .add_name_target("name", &["alpha", "bravo"])?
        .add_date_target("date")?
        .add_extension_target("extension", &[".kmz", "gpx"])?;
    Ok(matcher)
}

#[test]
fn optional_extension_does_not_block_completeness() -> Result<(), MatchError> {
    let mut matcher = MultiTargetMatcher::new();
    matcher
        .add_name_target("name", &["alpha", "bravo"])?
        .add_extension_target("extension", &[".kmz"])?;

    let result = matcher.match_string("alpha_20240101.txt");

    assert_eq!(result.matched_value("name"), Some("alpha"));
    assert_eq!(result.get("name").map(|r| r.kind), Some(MatchKind::Exact));
    assert!(!result.has_match("extension"));
    assert!(result.is_complete);
    assert!(result.missing_required.is_empty());
    assert!((result.overall_score - 1.0 / 1.5).abs() < 1e-12);
    Ok(())
}

#[test]
fn all_targets_hit_with_pattern_spans() -> Result<(), MatchError> {
    let matcher = file_matcher()?;
    let result = matcher.match_string("bravo_2024-03-15.kmz");

    assert_eq!(result.matched_value("name"), Some("bravo"));
    let date = result.get("date").expect("date target evaluated");
    assert_eq!(date.kind, MatchKind::Pattern);
    assert_eq!(date.matched.as_deref(), Some("2024-03-15"));
    assert_eq!(date.span, Some((6, 16)));
    assert_eq!(date.confidence, 0.9);
    assert_eq!(result.matched_value("extension"), Some("kmz"));
    assert!(result.is_complete);
    assert!((result.overall_score - 1.0).abs() < 1e-12);
    Ok(())
}

#[test]
fn invalid_calendar_date_leaves_required_target_missing() -> Result<(), MatchError> {
    let matcher = file_matcher()?;
    let result = matcher.match_string("bravo_20241399.gpx");

    assert!(!result.has_match("date"));
    assert_eq!(result.missing_required, vec!["date".to_string()]);
    assert!(!result.is_complete);
    assert_eq!(result.matched_value("extension"), Some("gpx"));
    Ok(())
}

#[test]
fn fuzzy_pattern_hit_scales_confidence() -> Result<(), MatchError> {
    let mut matcher = MultiTargetMatcher::new();
    matcher.add_name_target("city", &["Beijing", "Shanghai"])?;

    let result = matcher.match_string("shanghia");
    let city = result.get("city").expect("city target evaluated");
    assert_eq!(city.matched.as_deref(), Some("Shanghai"));
    assert_eq!(city.kind, MatchKind::Fuzzy);
    assert!((city.confidence - (0.8 * city.score + 0.2)).abs() < 1e-12);
    assert_eq!(city.source_pattern.as_deref(), Some("Shanghai"));
    Ok(())
}

#[test]
fn failing_validator_only_affects_its_target() -> Result<(), MatchError> {
    let mut matcher = MultiTargetMatcher::new();
    matcher.add_name_target("name", &["alpha"])?;
    matcher.add_target(
        "revision",
        TargetConfig::custom(&["rev"])
            .with_regex(r"v(\d+)")?
            .with_validator(|_value: &str| -> Result<bool, BoxError> {
                Err("revision service unavailable".into())
            }),
    )?;

    let result = matcher.match_string("alpha_v12");

    assert_eq!(result.matched_value("name"), Some("alpha"));
    assert!(!result.has_match("revision"));
    assert_eq!(
        result.errors.get("revision").map(String::as_str),
        Some("revision service unavailable")
    );
    assert_eq!(result.missing_required, vec!["revision".to_string()]);
    Ok(())
}

#[test]
fn preprocessor_runs_before_matching() -> Result<(), MatchError> {
    let mut matcher = MultiTargetMatcher::new();
    matcher.add_target(
        "site",
        TargetConfig::name(&["north ridge"])
            .with_strategy(MatcherKind::Exact)
            .with_preprocessor(|text: &str| -> Result<String, BoxError> {
                Ok(text.replace('_', " "))
            }),
    )?;
    matcher.add_target(
        "broken",
        TargetConfig::name(&["x"]).with_preprocessor(|_text: &str| -> Result<String, BoxError> {
            Err("cannot decode".into())
        }),
    )?;

    let result = matcher.match_string("North_Ridge_survey");
    assert_eq!(result.matched_value("site"), Some("north ridge"));
    assert!(result.errors.contains_key("broken"));
    assert!(!result.errors.contains_key("site"));
    Ok(())
}

#[test]
fn max_length_and_min_score_guards() -> Result<(), MatchError> {
    let mut matcher = MultiTargetMatcher::new();
    matcher.add_target(
        "short",
        TargetConfig::name(&["alpha"]).with_max_length(8),
    )?;
    matcher.add_target(
        "picky",
        TargetConfig::name(&["alpha"])
            .with_strategy(MatcherKind::Fuzzy)
            .with_threshold(0.3)
            .with_min_score(0.95),
    )?;

    let long = matcher.match_string("alpha_with_a_long_suffix");
    assert!(!long.has_match("short"));

    let typo = matcher.match_string("alpah");
    assert!(typo.has_match("short"));
    assert!(!typo.has_match("picky"));
    Ok(())
}

#[test]
fn number_target_accepts_grouped_digits() -> Result<(), MatchError> {
    let mut matcher = MultiTargetMatcher::new();
    matcher.add_number_target("count")?;
    let result = matcher.match_string("track 1,234 points");
    assert_eq!(result.matched_value("count"), Some("1,234"));
    assert_eq!(result.get("count").and_then(|r| r.span), Some((6, 11)));
    Ok(())
}

#[test]
fn registration_bookkeeping() -> Result<(), MatchError> {
    let mut matcher = file_matcher()?;
    assert_eq!(matcher.target_names(), vec!["name", "date", "extension"]);

    // Re-registering keeps the slot.
    matcher.add_name_target("date", &["today"])?;
    assert_eq!(matcher.target_names(), vec!["name", "date", "extension"]);
    assert_eq!(
        matcher.target_config("date").map(|c| c.kind),
        Some(TargetKind::Name)
    );

    let stats = matcher.statistics();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.required, 2);
    assert_eq!(stats.optional, 1);
    assert_eq!(stats.by_kind.get(&TargetKind::Name), Some(&2));

    assert!(matcher.remove_target("date"));
    assert!(!matcher.remove_target("date"));
    assert_eq!(matcher.len(), 2);
    matcher.clear_targets();
    assert!(matcher.is_empty());
    Ok(())
}

#[test]
fn registration_rejects_unknown_kind_and_bad_config() {
    let mut matcher = MultiTargetMatcher::new();
    let err = matcher
        .add_target_by_kind("when", "timestamp", &[])
        .err()
        .expect("unknown kind should be rejected");
    assert!(matches!(err, MatchError::UnknownTargetKind(ref kind) if kind == "timestamp"));

    assert!(matcher
        .add_target("empty", TargetConfig::name::<&str>(&[]))
        .is_err());
    assert!(matcher
        .add_custom_target("rev", &["rev"], Some("v(\\d+"))
        .is_err());
    assert!(matcher.is_empty());

    matcher
        .add_target_by_kind("when", "date", &[])
        .expect("date kind is known");
    assert_eq!(matcher.target_names(), vec!["when"]);
}

#[test]
fn best_matches_filtered_and_sorted() -> Result<(), MatchError> {
    let matcher = file_matcher()?;
    let inputs = [
        "zulu_notes.doc",
        "alpha_20240101.txt",
        "bravo_2024-03-15.kmz",
    ];
    let best = matcher.find_best_matches(&inputs, DEFAULT_MIN_OVERALL);

    let sources: Vec<&str> = best.iter().map(|r| r.source.as_str()).collect();
    assert_eq!(sources, vec!["bravo_2024-03-15.kmz", "alpha_20240101.txt"]);
    assert!(best[0].overall_score >= best[1].overall_score);
    assert_eq!(matcher.match_multiple(&inputs).len(), 3);
    Ok(())
}

#[test]
fn zero_weight_targets_yield_zero_overall() -> Result<(), MatchError> {
    let mut matcher = MultiTargetMatcher::new();
    matcher.add_target("name", TargetConfig::name(&["alpha"]).with_weight(0.0))?;
    let result = matcher.match_string("alpha");
    assert!(result.has_match("name"));
    assert_eq!(result.overall_score, 0.0);
    Ok(())
}

struct RecordingMetrics {
    events: RwLock<Vec<(String, String, bool)>>,
}

impl MatchMetrics for RecordingMetrics {
    fn record_match(&self, matcher: &str, stage: &str, _latency: Duration, matched: bool) {
        self.events
            .write()
            .unwrap()
            .push((matcher.to_string(), stage.to_string(), matched));
    }
}

#[test]
fn metrics_recorder_observes_matches() -> Result<(), MatchError> {
    let metrics = Arc::new(RecordingMetrics {
        events: RwLock::new(Vec::new()),
    });
    let mut matcher = MultiTargetMatcher::new().with_metrics(metrics.clone());
    matcher.add_name_target("name", &["alpha"])?;

    matcher.match_string("alpha.txt");
    matcher.match_string("zulu.txt");

    let events = metrics.events.read().unwrap().clone();
    assert_eq!(
        events,
        vec![
            ("multi_target".to_string(), "complete".to_string(), true),
            ("multi_target".to_string(), "incomplete".to_string(), false),
        ]
    );
    Ok(())
}
