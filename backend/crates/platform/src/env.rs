//! Environment Variable Parsing
//!
//! Optional typed overrides read from the process environment.
//! An unset or empty variable means "use the default".

use std::env::{self, VarError};
use std::fmt::Display;
use std::str::FromStr;

/// Error when reading an environment override
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("Environment variable {0} is not valid unicode")]
    NotUnicode(String),
}

/// Read and parse an optional environment variable
///
/// ## Returns
/// * `Ok(None)` - variable unset or blank
/// * `Ok(Some(v))` - parsed value
/// * `Err(EnvError)` - present but unparsable
pub fn parse_optional<T>(key: &str) -> Result<Option<T>, EnvError>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(EnvError::NotUnicode(key.to_string())),
    }
}

/// Parse a raw override value. Digit-group underscores are accepted
/// (`20_000_000_000`).
pub fn parse_value<T>(key: &str, raw: &str) -> Result<Option<T>, EnvError>
where
    T: FromStr,
    T::Err: Display,
{
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let cleaned: String = trimmed.chars().filter(|&c| c != '_').collect();
    cleaned
        .parse::<T>()
        .map(Some)
        .map_err(|e| EnvError::InvalidValue {
            key: key.to_string(),
            value: raw.to_string(),
            reason: e.to_string(),
        })
}
