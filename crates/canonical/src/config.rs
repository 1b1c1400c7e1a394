//! Configuration for the comparison-key pipeline.
//!
//! [`KeyConfig`] controls how [`canonicalize`](crate::canonicalize) folds a
//! name before it is compared. The defaults reproduce
//! [`comparison_key`](crate::comparison_key) exactly, so callers only need a
//! custom config when they want, for example, accents to survive.
//!
//! # Versioning
//!
//! `version` is recorded on every [`CanonicalName`](crate::CanonicalName).
//! Keys produced under different versions must not be compared with each
//! other. Version 0 is reserved.
//!
//! ```rust
//! use canonical::KeyConfig;
//!
//! let config = KeyConfig {
//!     strip_diacritics: false,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;

/// Configuration for [`canonicalize`](crate::canonicalize).
///
/// Serializes as:
///
/// ```json
/// {
///   "version": 1,
///   "lowercase": true,
///   "strip_diacritics": true,
///   "strip_punctuation": true
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyConfig {
    /// Behaviour version of the key pipeline. Must be >= 1.
    pub version: u32,

    /// Apply locale-free Unicode lowercasing.
    ///
    /// `"Beijing"` and `"BEIJING"` share a key only when this is enabled.
    pub lowercase: bool,

    /// Decompose (NFD) and drop nonspacing marks.
    ///
    /// ```text
    /// "Tōkyō" → "tokyo"
    /// "Hà Nội" → "ha noi"
    /// ```
    ///
    /// When disabled the text is composed (NFC) instead, so precomposed and
    /// combining spellings of the same letter still agree.
    pub strip_diacritics: bool,

    /// Treat Unicode punctuation as a token delimiter in the display form.
    ///
    /// Punctuation never reaches the key either way; this only affects
    /// [`CanonicalName::display`](crate::CanonicalName::display) and tokens.
    pub strip_punctuation: bool,
}

impl KeyConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), CanonicalError> {
        if self.version == 0 {
            return Err(CanonicalError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            version: 1,
            lowercase: true,
            strip_diacritics: true,
            strip_punctuation: true,
        }
    }
}
