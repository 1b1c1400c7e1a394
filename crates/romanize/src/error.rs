use matcher::MatchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RomanizeError {
    #[error("invalid romanizer configuration: {0}")]
    InvalidConfig(String),
    #[error("unknown language: {0}")]
    UnknownLanguage(String),
    #[error(transparent)]
    Match(#[from] MatchError),
}

pub(crate) fn validate_unit(field: &str, value: f64) -> Result<(), RomanizeError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(RomanizeError::InvalidConfig(format!(
            "{field} must be between 0.0 and 1.0 (got {value})"
        )));
    }
    Ok(())
}
