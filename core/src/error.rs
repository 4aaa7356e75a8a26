//! Error type for signature parsing.

use thiserror::Error;

/// Errors that can occur while parsing a signature.
///
/// Everything other than a missing command name is accepted permissively:
/// stray braces are ignored and ambiguous suffixes are resolved by rule
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// The signature is empty or whitespace-only.
    #[error("unable to determine command name from signature")]
    MalformedSignature,
}

/// Convenience alias for results with [`SignatureError`].
pub type Result<T> = std::result::Result<T, SignatureError>;
