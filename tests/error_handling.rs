use namematch::{
    ConfigLoadError, KeyConfig, Language, MatchError, MatcherKind, MatcherOptions,
    MultiTargetMatcher, NameMatchConfig, NameResolver, ResolveError, RomanizationMatcher,
    RomanizeError, RomanizerConfig, TargetConfig, build_name_matcher, create_name_matcher,
    create_string_matcher,
};

#[test]
fn unknown_matcher_kind_is_rejected() {
    let options = MatcherOptions::default();
    for kind in ["phonetic", "Exact", " fuzzy", ""] {
        match create_string_matcher(kind, &options) {
            Err(MatchError::UnknownMatcherKind(name)) => assert_eq!(name, kind),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("{kind:?} should not parse"),
        }
    }
    assert!(create_name_matcher("semantic", &options).is_err());
}

#[test]
fn out_of_range_threshold_is_invalid_config() {
    let options = MatcherOptions {
        threshold: 1.2,
        ..Default::default()
    };
    assert!(matches!(
        create_string_matcher("fuzzy", &options),
        Err(MatchError::InvalidConfig(_))
    ));
}

#[test]
fn romanizer_rejects_bad_configuration() {
    let config = RomanizerConfig {
        threshold: -0.1,
        ..Default::default()
    };
    assert!(matches!(
        RomanizationMatcher::new(config),
        Err(RomanizeError::InvalidConfig(_))
    ));

    let mut matcher = RomanizationMatcher::new(RomanizerConfig::default()).expect("default config");
    assert!(matcher.add_custom_mapping("", "x", Language::Greek, 1.0).is_err());
    assert!(matcher.add_custom_mapping("Αθήνα", "Athina", Language::Greek, 1.5).is_err());
    assert!(matcher.set_language_weight(Language::Thai, -1.0).is_err());
}

#[test]
fn invalid_key_config_surfaces_from_resolver() {
    let matcher = build_name_matcher(MatcherKind::Exact, &MatcherOptions::default())
        .expect("default options");
    let config = KeyConfig {
        version: 0,
        ..Default::default()
    };
    match NameResolver::new(&["alpha"], matcher, config) {
        Err(ResolveError::Canonical(_)) => {}
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn target_registration_errors_leave_matcher_unchanged() {
    let mut matcher = MultiTargetMatcher::new();
    assert!(matches!(
        matcher.add_target_by_kind("when", "timestamp", &[]),
        Err(MatchError::UnknownTargetKind(_))
    ));
    assert!(matches!(
        matcher.add_target("rev", TargetConfig::custom(&["v1"]).with_threshold(3.0)),
        Err(MatchError::InvalidConfig(_))
    ));
    assert!(matches!(
        TargetConfig::custom(&["v1"]).with_regex("(unclosed"),
        Err(MatchError::InvalidPattern { .. })
    ));
    assert!(matcher.is_empty());
}

#[test]
fn config_errors_are_typed() {
    assert!(matches!(
        NameMatchConfig::from_yaml("version: [unterminated"),
        Err(ConfigLoadError::YamlParse(_))
    ));
    assert!(matches!(
        NameMatchConfig::from_yaml("version: \"0.9\"\n"),
        Err(ConfigLoadError::UnsupportedVersion(_))
    ));
    let no_names = NameMatchConfig::from_yaml("version: \"1.0\"\n").expect("valid config");
    assert!(matches!(
        no_names.build_resolver(),
        Err(ConfigLoadError::MissingField(_))
    ));
}
