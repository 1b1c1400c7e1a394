//! YAML configuration for a [`NameResolver`].
//!
//! One file describes the name set and every layer the resolver stacks on
//! top of it: the comparison-key rules, the name matcher, and the
//! romanization matcher with its custom mappings and sound rules.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "capitals"
//!
//! canonical_names:
//!   - "北京"
//!   - "東京"
//!   - "Muhammad"
//!
//! canonical:
//!   version: 1
//!   strip_diacritics: true
//!
//! matcher:
//!   kind: hybrid
//!   threshold: 0.65
//!
//! romanization:
//!   threshold: 0.7
//!   enable_cross_language: false
//!   language_weights:
//!     chinese: 1.0
//!
//! custom_mappings:
//!   - original: "東京"
//!     romanized: "Tokio"
//!     language: japanese
//!     variants: ["Tokjo"]
//!
//! sound_rules:
//!   - language: hindi
//!     from: "aa"
//!     to: "a"
//! ```

use std::fs;
use std::path::Path;

use canonical::KeyConfig;
use matcher::{MatcherKind, MatcherOptions, build_name_matcher};
use romanize::{Language, RomanizationMapping, RomanizationMatcher, RomanizerConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::resolver::{NameResolver, ResolveError};

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("failed to build resolver: {0}")]
    Build(#[from] ResolveError),
}

/// Top-level YAML configuration for a name resolver.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NameMatchConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Names that inputs resolve to
    #[serde(default)]
    pub canonical_names: Vec<String>,

    #[serde(default)]
    pub canonical: KeyConfig,

    #[serde(default)]
    pub matcher: MatcherYamlConfig,

    /// Attach a romanization matcher as the last layer
    #[serde(default = "true_value")]
    pub use_romanization: bool,

    #[serde(default)]
    pub romanization: RomanizerConfig,

    #[serde(default)]
    pub custom_mappings: Vec<CustomMappingYaml>,

    #[serde(default)]
    pub sound_rules: Vec<SoundRuleYaml>,
}

impl NameMatchConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: NameMatchConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.canonical
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("canonical: {err}")))?;
        self.matcher.validate()?;
        self.romanization
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("romanization: {err}")))?;

        if self.canonical_names.iter().any(|name| name.trim().is_empty()) {
            return Err(ConfigLoadError::Validation(
                "canonical_names must not contain blank entries".to_string(),
            ));
        }
        for (slot, mapping) in self.custom_mappings.iter().enumerate() {
            mapping.validate(slot)?;
        }
        for (slot, rule) in self.sound_rules.iter().enumerate() {
            if rule.from.is_empty() {
                return Err(ConfigLoadError::Validation(format!(
                    "sound_rules[{slot}].from must not be empty"
                )));
            }
        }
        Ok(())
    }

    /// Builds the romanization layer with every configured mapping and rule
    /// registered.
    pub fn build_romanizer(&self) -> Result<RomanizationMatcher, ConfigLoadError> {
        let mut romanizer =
            RomanizationMatcher::new(self.romanization.clone()).map_err(ResolveError::from)?;
        for mapping in &self.custom_mappings {
            romanizer
                .add_mapping(mapping.to_mapping())
                .map_err(ResolveError::from)?;
        }
        for rule in &self.sound_rules {
            romanizer
                .add_sound_rule(rule.language, &rule.from, &rule.to)
                .map_err(ResolveError::from)?;
        }
        Ok(romanizer)
    }

    pub fn build_resolver(&self) -> Result<NameResolver, ConfigLoadError> {
        if self.canonical_names.is_empty() {
            return Err(ConfigLoadError::MissingField("canonical_names".to_string()));
        }
        let name_matcher = build_name_matcher(self.matcher.kind, &self.matcher.options())
            .map_err(ResolveError::from)?;
        let mut resolver =
            NameResolver::new(&self.canonical_names, name_matcher, self.canonical.clone())?;
        if self.use_romanization {
            resolver = resolver.with_romanizer(self.build_romanizer()?);
        }
        info!(
            config = self.name.as_deref().unwrap_or("unnamed"),
            names = self.canonical_names.len(),
            custom_mappings = self.custom_mappings.len(),
            sound_rules = self.sound_rules.len(),
            romanization = self.use_romanization,
            "resolver_built_from_config"
        );
        Ok(resolver)
    }
}

impl Default for NameMatchConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            canonical_names: Vec::new(),
            canonical: KeyConfig::default(),
            matcher: MatcherYamlConfig::default(),
            use_romanization: true,
            romanization: RomanizerConfig::default(),
            custom_mappings: Vec::new(),
            sound_rules: Vec::new(),
        }
    }
}

/// Name matcher YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatcherYamlConfig {
    #[serde(default = "default_kind")]
    pub kind: MatcherKind,

    #[serde(default = "default_threshold")]
    pub threshold: f64,

    #[serde(default)]
    pub case_sensitive: bool,

    #[serde(default)]
    pub debug: bool,
}

impl MatcherYamlConfig {
    pub fn options(&self) -> MatcherOptions {
        MatcherOptions {
            threshold: self.threshold,
            case_sensitive: self.case_sensitive,
            debug: self.debug,
        }
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigLoadError::Validation(
                "matcher.threshold must be between 0.0 and 1.0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for MatcherYamlConfig {
    fn default() -> Self {
        Self {
            kind: default_kind(),
            threshold: default_threshold(),
            case_sensitive: false,
            debug: false,
        }
    }
}

/// One entry of `custom_mappings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomMappingYaml {
    pub original: String,
    pub romanized: String,
    pub language: Language,

    #[serde(default = "default_confidence")]
    pub confidence: f64,

    #[serde(default)]
    pub variants: Vec<String>,
}

impl CustomMappingYaml {
    fn validate(&self, slot: usize) -> Result<(), ConfigLoadError> {
        if self.original.trim().is_empty() || self.romanized.trim().is_empty() {
            return Err(ConfigLoadError::Validation(format!(
                "custom_mappings[{slot}] needs both original and romanized forms"
            )));
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(ConfigLoadError::Validation(format!(
                "custom_mappings[{slot}].confidence must be between 0.0 and 1.0"
            )));
        }
        Ok(())
    }

    fn to_mapping(&self) -> RomanizationMapping {
        RomanizationMapping::new(&self.original, &self.romanized, self.language, self.confidence)
            .with_variants(&self.variants)
            .with_region("custom")
            .with_source("config")
    }
}

/// One entry of `sound_rules`: a literal rewrite applied to both sides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundRuleYaml {
    pub language: Language,
    pub from: String,
    #[serde(default)]
    pub to: String,
}

// Helper functions for serde defaults
fn true_value() -> bool {
    true
}
fn default_kind() -> MatcherKind {
    MatcherKind::Hybrid
}
fn default_threshold() -> f64 {
    MatcherOptions::default().threshold
}
fn default_confidence() -> f64 {
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"
version: "1.0"
name: "capitals"
canonical_names: ["北京", "東京", "Muhammad"]
matcher:
  kind: hybrid
  threshold: 0.7
romanization:
  threshold: 0.7
  language_weights:
    chinese: 1.0
custom_mappings:
  - original: "東京"
    romanized: "Tokio"
    language: japanese
    variants: ["Tokjo"]
sound_rules:
  - language: hindi
    from: "aa"
    to: "a"
"#;

    #[test]
    fn parses_full_document() {
        let config = NameMatchConfig::from_yaml(SAMPLE).expect("valid config");
        assert_eq!(config.name.as_deref(), Some("capitals"));
        assert_eq!(config.canonical_names.len(), 3);
        assert_eq!(config.matcher.kind, MatcherKind::Hybrid);
        assert_eq!(config.matcher.threshold, 0.7);
        assert!(config.use_romanization);
        assert_eq!(config.custom_mappings[0].language, Language::Japanese);
        assert_eq!(config.custom_mappings[0].confidence, 1.0);
        assert_eq!(config.sound_rules[0].language, Language::Hindi);
    }

    #[test]
    fn minimal_document_uses_defaults() {
        let config = NameMatchConfig::from_yaml("version: \"1\"\n").expect("valid config");
        assert_eq!(config.matcher.kind, MatcherKind::Hybrid);
        assert_eq!(config.matcher.threshold, MatcherOptions::default().threshold);
        assert_eq!(config.canonical, KeyConfig::default());
        assert_eq!(config.romanization, RomanizerConfig::default());
        assert!(config.canonical_names.is_empty());
    }

    #[test]
    fn rejects_unknown_version() {
        match NameMatchConfig::from_yaml("version: \"2.0\"\n") {
            Err(ConfigLoadError::UnsupportedVersion(v)) => assert_eq!(v, "2.0"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn rejects_out_of_range_values() {
        let yaml = "version: \"1.0\"\nmatcher:\n  threshold: 1.5\n";
        assert!(matches!(
            NameMatchConfig::from_yaml(yaml),
            Err(ConfigLoadError::Validation(_))
        ));

        let yaml = "version: \"1.0\"\ncustom_mappings:\n  - original: \"x\"\n    romanized: \"y\"\n    language: greek\n    confidence: 2.0\n";
        match NameMatchConfig::from_yaml(yaml) {
            Err(ConfigLoadError::Validation(msg)) => {
                assert!(msg.contains("custom_mappings[0]"), "{msg}")
            }
            other => panic!("unexpected result: {other:?}"),
        }

        let yaml = "version: \"1.0\"\nsound_rules:\n  - language: thai\n    from: \"\"\n";
        assert!(matches!(
            NameMatchConfig::from_yaml(yaml),
            Err(ConfigLoadError::Validation(_))
        ));
    }

    #[test]
    fn rejects_unknown_matcher_kind_and_language() {
        let yaml = "version: \"1.0\"\nmatcher:\n  kind: phonetic\n";
        assert!(matches!(
            NameMatchConfig::from_yaml(yaml),
            Err(ConfigLoadError::YamlParse(_))
        ));

        let yaml = "version: \"1.0\"\nsound_rules:\n  - language: klingon\n    from: \"a\"\n";
        assert!(matches!(
            NameMatchConfig::from_yaml(yaml),
            Err(ConfigLoadError::YamlParse(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(SAMPLE.as_bytes()).expect("write config");
        let config = NameMatchConfig::from_file(file.path()).expect("valid config");
        assert_eq!(config.canonical_names[0], "北京");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        assert!(matches!(
            NameMatchConfig::from_file("/nonexistent/namematch.yaml"),
            Err(ConfigLoadError::FileRead(_))
        ));
    }

    #[test]
    fn build_resolver_requires_names() {
        let config = NameMatchConfig::default();
        match config.build_resolver() {
            Err(ConfigLoadError::MissingField(field)) => assert_eq!(field, "canonical_names"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn built_resolver_uses_custom_mappings() {
        let config = NameMatchConfig::from_yaml(SAMPLE).expect("valid config");
        let resolver = config.build_resolver().expect("resolver");
        let resolution = resolver.resolve("Tokjo").expect("resolve");
        assert_eq!(resolution.name, Some("東京"));

        let romanizer = resolver.romanizer().expect("romanization enabled");
        let hindi = romanizer.sound_rules().rules_for(Language::Hindi);
        let added = romanize::Rewrite::replace("aa", "a").expect("valid rule");
        assert_eq!(hindi.last(), Some(&added));
        assert_eq!(romanizer.romanizations_of("東京").last().map(String::as_str), Some("Tokio"));
    }
}
