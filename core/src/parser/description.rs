//! Splits a token into its payload and trailing description.

use regex::Regex;
use std::sync::LazyLock;

static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+:\s+").expect("static regex must compile"));

/// Splits `token` on the first ` : ` separator (whitespace on both sides).
///
/// The token is trimmed first. Without a separator the whole trimmed token
/// is the body and the description is empty. Only the first separator
/// counts, so descriptions may contain colons of their own.
pub fn split_description(token: &str) -> (&str, &str) {
    let trimmed = token.trim();
    let mut parts = SEPARATOR_RE.splitn(trimmed, 2);
    let body = parts.next().unwrap_or_default();
    match parts.next() {
        Some(description) => (body, description),
        None => (trimmed, ""),
    }
}
