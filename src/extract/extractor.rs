//! Single-pass extractor driving the state machine over a token list.

use crate::extract::error::ExtractError;
use crate::extract::record::Extraction;
use crate::extract::state::{transition, Effect, State};

/// Anything that can split argument tokens into options and trailing operands.
pub trait Extract {
    fn extract(&self, tokens: &[String]) -> Result<Extraction, ExtractError>;
}

/// The standard extractor: `-`/`--` prefixed keys, `--` disables parsing.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionExtractor;

impl OptionExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Extract for OptionExtractor {
    fn extract(&self, tokens: &[String]) -> Result<Extraction, ExtractError> {
        let mut extraction = Extraction::default();
        let mut state = State::default();
        let mut cursor = 0;

        while !state.is_terminal() {
            let token = tokens.get(cursor).map(String::as_str);
            let lookahead = tokens.get(cursor + 1).map(String::as_str);

            let (next, effect) = match transition(state, token, lookahead) {
                Ok(step) => step,
                Err(err) => {
                    tracing::debug!(
                        position = cursor,
                        token = err.token(),
                        "Extraction failed: {}",
                        err
                    );
                    return Err(err);
                }
            };
            tracing::trace!(
                position = cursor,
                from = ?state,
                to = ?next,
                ?effect,
                "transition"
            );

            if let Err(err) = apply(&mut extraction, effect) {
                tracing::debug!(
                    position = cursor,
                    token = err.token(),
                    "Extraction failed: {}",
                    err
                );
                return Err(err);
            }

            cursor += effect.advance();
            state = next;
        }

        tracing::debug!(
            tokens = tokens.len(),
            options = extraction.len(),
            trailing = extraction.trailing().len(),
            "Extraction finished"
        );
        Ok(extraction)
    }
}

fn apply(extraction: &mut Extraction, effect: Effect<'_>) -> Result<(), ExtractError> {
    match effect {
        Effect::Flag(key) => extraction.record_flag(key),
        Effect::Valued { key, value } => extraction.record_value(key, value),
        Effect::Trailing(token) => {
            extraction.push_trailing(token);
            Ok(())
        }
        Effect::Reexamine | Effect::Skip | Effect::Halt => Ok(()),
    }
}

/// Extract with the standard [`OptionExtractor`].
pub fn extract(tokens: &[String]) -> Result<Extraction, ExtractError> {
    OptionExtractor::new().extract(tokens)
}
