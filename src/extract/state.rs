//! Option-parsing state machine.
//!
//! ```text
//! NotStarted ──key──→ Parsing ──value──→ ImplicitlyDisabled
//!                        │                      │
//!                        └──── "--" ────→ ExplicitlyDisabled ←── "--"
//! ```
//!
//! [`transition`] is pure: it looks at the current token and, for option
//! keys, the one after it. The driver owns the cursor and the records.

use crate::extract::error::ExtractError;
use crate::extract::token::{self, TokenKind};

/// Where the extractor is within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    /// Nothing consumed yet. The first token must be an option key.
    #[default]
    NotStarted,
    /// Reading option keys and their values.
    Parsing,
    /// A plain value appeared where a key was expected. Further keys are errors.
    ImplicitlyDisabled,
    /// The disable marker was seen. Every remaining token is trailing.
    ExplicitlyDisabled,
    /// All tokens consumed.
    Finished,
}

/// What the driver does with the tokens after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect<'a> {
    /// Consume nothing; look at the same token again in the new state.
    Reexamine,
    /// Consume the disable marker without recording it.
    Skip,
    /// Consume one token and record it as a flag.
    Flag(&'a str),
    /// Consume a key and its value.
    Valued { key: &'a str, value: &'a str },
    /// Consume one token into the trailing list.
    Trailing(&'a str),
    /// Input exhausted; nothing left to consume.
    Halt,
}

impl Effect<'_> {
    /// Number of tokens this effect consumes.
    pub fn advance(&self) -> usize {
        match self {
            Effect::Reexamine | Effect::Halt => 0,
            Effect::Skip | Effect::Flag(_) | Effect::Trailing(_) => 1,
            Effect::Valued { .. } => 2,
        }
    }
}

impl State {
    pub fn is_terminal(&self) -> bool {
        matches!(self, State::Finished)
    }
}

/// Compute the next state and effect for `token`.
///
/// `token` is `None` once the input is exhausted, which finishes the run from
/// any state. `lookahead` is the token after `token`, if any. It only matters
/// when `token` is an option key read in [`State::Parsing`].
pub fn transition<'a>(
    state: State,
    token: Option<&'a str>,
    lookahead: Option<&'a str>,
) -> Result<(State, Effect<'a>), ExtractError> {
    let Some(token) = token else {
        return Ok((State::Finished, Effect::Halt));
    };
    let kind = token::classify(token);

    match state {
        State::NotStarted => match kind {
            TokenKind::OptionKey => Ok((State::Parsing, Effect::Reexamine)),
            TokenKind::DisableMarker | TokenKind::PlainValue => {
                Err(ExtractError::UnexpectedOperand(token.to_string()))
            }
        },

        State::Parsing => match kind {
            TokenKind::DisableMarker => Ok((State::ExplicitlyDisabled, Effect::Skip)),
            TokenKind::PlainValue => Ok((State::ImplicitlyDisabled, Effect::Reexamine)),
            TokenKind::OptionKey => match lookahead {
                Some(next) if !token::is_option_key(next) => Ok((
                    State::Parsing,
                    Effect::Valued {
                        key: token,
                        value: next,
                    },
                )),
                _ => Ok((State::Parsing, Effect::Flag(token))),
            },
        },

        State::ImplicitlyDisabled => match kind {
            TokenKind::DisableMarker => Ok((State::ExplicitlyDisabled, Effect::Skip)),
            TokenKind::OptionKey => Err(ExtractError::UnexpectedOption(token.to_string())),
            TokenKind::PlainValue => Ok((State::ImplicitlyDisabled, Effect::Trailing(token))),
        },

        // Once explicitly disabled, tokens are never inspected, including a second "--".
        State::ExplicitlyDisabled => Ok((State::ExplicitlyDisabled, Effect::Trailing(token))),

        State::Finished => Ok((State::Finished, Effect::Halt)),
    }
}
