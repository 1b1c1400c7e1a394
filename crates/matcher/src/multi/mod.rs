//! Multi-target matching: several named targets (name, date, extension,
//! number, custom) evaluated against one input string.

mod analysis;
mod engine;
mod result;
mod target;

pub use analysis::{BatchAnalysis, ScoreDistribution, TargetSummary};
pub use engine::{MultiTargetMatcher, TargetStatistics, DEFAULT_MIN_OVERALL};
pub use result::MultiMatchResult;
pub use target::{
    is_valid_date, is_valid_number, normalize_extension, Preprocessor, TargetConfig, TargetKind,
    Validator, DATE_FORMATS,
};
