//! Option extraction: raw argument tokens → options and trailing operands.
//!
//! ```text
//! tokens → classify → transition → record → Extraction
//! ```

mod error;
mod extractor;
mod record;
mod state;
mod token;

pub use error::ExtractError;
pub use extractor::{extract, Extract, OptionExtractor};
pub use record::{Extraction, OptionKind, OptionRecord};
pub use state::{transition, Effect, State};
pub use token::{
    classify, is_disable_marker, is_option_key, TokenKind, DISABLE_MARKER, FLAG_VALUE,
    OPTION_KEY_PREFIXES,
};
