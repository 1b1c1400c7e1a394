use namematch::{
    KeyConfig, MatcherOptions, RomanizationMatcher, RomanizerConfig, canonicalize,
    comparison_key, create_string_matcher,
};

const NAMES: &[&str] = &["北京", "서울", "Muhammad", "Tokyo", "Ho Chi Minh", "Αθήνα"];

fn frozen_romanizer() -> RomanizationMatcher {
    RomanizationMatcher::new(RomanizerConfig {
        enable_adaptive_learning: false,
        ..Default::default()
    })
    .expect("valid config")
}

#[test]
fn equivalent_spellings_share_a_key() {
    let config = KeyConfig::default();
    let a = canonicalize("  Hồ   Chí-Minh ", &config).expect("canonicalize");
    let b = canonicalize("ho_chi_minh", &config).expect("canonicalize");
    assert_eq!(a.key, b.key);
    assert_eq!(a.key, comparison_key("HO CHI MINH"));
    assert_eq!(a.display, "ho chi minh");
}

#[test]
fn repeated_matching_gives_identical_outcomes() {
    let romanizer = frozen_romanizer();
    for input in ["Peking", "Seoul", "mo7amed", "Toukyou", "zzzz"] {
        let first = romanizer.match_with_details(input, NAMES);
        for _ in 0..5 {
            assert_eq!(romanizer.match_with_details(input, NAMES), first, "{input}");
        }
    }
}

#[test]
fn separate_instances_agree() {
    let left = frozen_romanizer();
    let right = frozen_romanizer();
    for input in ["Peking", "Seoul", "mo7amed", "Toukyou", "Athina"] {
        assert_eq!(
            left.match_with_details(input, NAMES),
            right.match_with_details(input, NAMES),
            "{input}"
        );
    }
}

#[test]
fn ties_go_to_the_earliest_candidate() {
    let fuzzy = create_string_matcher("fuzzy", &MatcherOptions::default()).expect("fuzzy");
    let (hit, _) = fuzzy.find_match_with_score("pekin", &["peking", "peking"]);
    assert_eq!(hit, Some("peking"));

    let romanizer = frozen_romanizer();
    let outcome = romanizer.match_with_details("Peking", &["北京", "北京"]);
    assert_eq!(outcome.matched, Some("北京"));
}

#[test]
fn normalization_is_stable_under_reapplication() {
    let romanizer = frozen_romanizer();
    for input in ["  Xi'an!!   City? ", "Sai-gon", "Raam"] {
        let once = romanizer.normalize_romanization(input, None);
        assert_eq!(romanizer.normalize_romanization(&once, None), once);
    }
}
