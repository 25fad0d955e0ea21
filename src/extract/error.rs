//! Errors produced while classifying arguments.

use thiserror::Error;

/// The first malformed construct found in the input.
///
/// Every variant carries the offending token. Extraction stops at the first
/// error; there is no partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The input did not begin with an option key.
    #[error("Unexpected operand found '{0}'")]
    UnexpectedOperand(String),

    /// An option key followed a plain value that ended option parsing.
    #[error("Unexpected option found '{0}'")]
    UnexpectedOption(String),

    /// The same key was used both as a flag and with a value.
    #[error("Ambiguous usage of option '{0}'")]
    AmbiguousOption(String),
}

impl ExtractError {
    /// The token that triggered the error.
    pub fn token(&self) -> &str {
        match self {
            ExtractError::UnexpectedOperand(token)
            | ExtractError::UnexpectedOption(token)
            | ExtractError::AmbiguousOption(token) => token,
        }
    }
}
