//! Token classification predicates.

/// Prefixes that introduce an option key, longest first.
pub const OPTION_KEY_PREFIXES: [&str; 2] = ["--", "-"];

/// The token that turns off option parsing for everything after it.
pub const DISABLE_MARKER: &str = "--";

/// Value recorded for an option that appears without a value.
pub const FLAG_VALUE: &str = "true";

/// How a single token reads in isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `--name` or `-n`.
    OptionKey,
    /// The bare `--`.
    DisableMarker,
    /// Anything else, including a bare `-`.
    PlainValue,
}

/// True if `token` starts with an option prefix and is not itself any prefix.
///
/// `"--"` starts with `"-"` but is still excluded, so the marker never reads
/// as a key.
pub fn is_option_key(token: &str) -> bool {
    OPTION_KEY_PREFIXES.iter().all(|prefix| token != *prefix)
        && OPTION_KEY_PREFIXES
            .iter()
            .any(|prefix| token.starts_with(prefix))
}

/// True if `token` is exactly the disable marker.
pub fn is_disable_marker(token: &str) -> bool {
    token == DISABLE_MARKER
}

/// Classify a token. The disable marker wins over the option-key check.
pub fn classify(token: &str) -> TokenKind {
    if is_disable_marker(token) {
        TokenKind::DisableMarker
    } else if is_option_key(token) {
        TokenKind::OptionKey
    } else {
        TokenKind::PlainValue
    }
}
