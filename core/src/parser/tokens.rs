//! Extraction of the command name and brace-delimited tokens.

use super::PATTERNS;

/// Returns the first run of non-whitespace characters, if any.
pub fn command_name(signature: &str) -> Option<&str> {
    signature.split_whitespace().next()
}

/// Returns every `{...}` body in order, trimmed of inner whitespace.
///
/// Matching is non-greedy, so a segment ends at the first `}`. Nested or
/// unbalanced braces are not supported and produce no token.
pub fn extract_tokens(signature: &str) -> Vec<&str> {
    PATTERNS
        .token
        .captures_iter(signature)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Marker-based classification of a token body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind<'a> {
    /// Positional argument; the body is passed through unchanged.
    Argument(&'a str),
    /// Option; every leading dash has been stripped.
    Option(&'a str),
}

/// Classifies a token: two or more leading dashes mark an option.
pub fn classify(token: &str) -> TokenKind<'_> {
    let stripped = token.trim_start_matches('-');
    if token.len() - stripped.len() >= 2 {
        TokenKind::Option(stripped)
    } else {
        TokenKind::Argument(token)
    }
}
