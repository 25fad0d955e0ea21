//! Runtime settings read from the environment.
//!
//! The command line is the data being classified, so the binary owns no flags
//! of its own. Everything configurable comes from `OPTEXTRACT_*` variables.

use std::path::PathBuf;

use thiserror::Error;

use crate::output::{OutputFormat, UnknownFormat};

/// Output layout: `pretty` (default) or `compact`.
pub const OUTPUT_ENV: &str = "OPTEXTRACT_OUTPUT";

/// Log file path prefix. Logging is off when unset or empty.
pub const LOG_ENV: &str = "OPTEXTRACT_LOG";

/// Errors that can occur when reading settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Invalid value '{value}' for {var} (expected one of: {expected})")]
    InvalidValue {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub output: OutputFormat,
    pub log_path: Option<PathBuf>,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let output = match lookup(OUTPUT_ENV) {
            Some(raw) => raw
                .parse::<OutputFormat>()
                .map_err(|UnknownFormat(value)| SettingsError::InvalidValue {
                    var: OUTPUT_ENV,
                    value,
                    expected: OutputFormat::VARIANTS,
                })?,
            None => OutputFormat::default(),
        };

        let log_path = lookup(LOG_ENV)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self { output, log_path })
    }
}
