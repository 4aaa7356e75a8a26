//! Signature expression parser.
//!
//! A signature is a command name followed by brace-delimited tokens:
//!
//! ```text
//! mail:send {user : The user id} {--Q|queue= : Queue name} {--tag=*a,b}
//! ```
//!
//! Parsing runs in four steps:
//!
//! 1. the first run of non-whitespace characters is the command name;
//! 2. every `{...}` segment is extracted in order ([`tokens`]);
//! 3. tokens with two or more leading dashes are options, anything else is a
//!    positional argument ([`tokens::classify`]);
//! 4. each token is handed to the [`argument`] or [`option`] builder, which
//!    split off the description ([`description`]) and resolve suffix markers
//!    through an ordered rule table.
//!
//! The parser never validates cross-argument constraints such as "only the
//! last argument may be an array"; see [`validate_definition`] for that.
//!
//! [`validate_definition`]: crate::validate_definition

pub mod argument;
pub mod description;
pub mod option;
pub mod tokens;

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::CommandDefinition;
use crate::error::{Result, SignatureError};
use argument::build_argument;
use option::build_option;
use tokens::{TokenKind, classify, command_name, extract_tokens};

/// Regex patterns shared by the token extractor and the builders.
static PATTERNS: LazyLock<SignaturePatterns> = LazyLock::new(SignaturePatterns::new);

struct SignaturePatterns {
    // {token} segments, non-greedy
    token: Regex,
    // name=*a,b
    array_default: Regex,
    // name=value
    scalar_default: Regex,
    // separator inside an array default
    list_separator: Regex,
}

impl SignaturePatterns {
    fn new() -> Self {
        // All regexes here are compile-time constants. An expect() failure indicates
        // a programmer error in the pattern, not a runtime condition.
        Self {
            token: Regex::new(r"\{\s*(.*?)\s*\}").expect("static regex must compile"),
            array_default: Regex::new(r"(.+)=\*(.+)").expect("static regex must compile"),
            scalar_default: Regex::new(r"(.+)=(.+)").expect("static regex must compile"),
            list_separator: Regex::new(r",\s?").expect("static regex must compile"),
        }
    }
}

/// Splits an array default on commas, dropping at most one whitespace
/// character after each comma. Commas cannot be escaped.
fn split_default_list(raw: &str) -> Vec<String> {
    PATTERNS
        .list_separator
        .split(raw)
        .map(String::from)
        .collect()
}

/// Parses a signature into a [`CommandDefinition`].
///
/// # Errors
///
/// Returns [`SignatureError::MalformedSignature`] when the signature is
/// empty or whitespace-only. Any other input is accepted; unmatched braces
/// are ignored.
///
/// # Examples
///
/// ```
/// use signature_core::{parse_signature, DefaultValue, ValueMode};
///
/// let definition = parse_signature("mail:send {user} {--Q|queue=default}").unwrap();
/// assert_eq!(definition.name, "mail:send");
/// assert_eq!(definition.arguments[0].name, "user");
/// assert!(definition.arguments[0].required);
///
/// let queue = &definition.options[0];
/// assert_eq!(queue.shortcut.as_deref(), Some("Q"));
/// assert_eq!(queue.value_mode, ValueMode::OptionalScalar);
/// assert_eq!(queue.default, Some(DefaultValue::Scalar("default".into())));
///
/// assert!(parse_signature("   ").is_err());
/// ```
pub fn parse_signature(signature: &str) -> Result<CommandDefinition> {
    let name = command_name(signature).ok_or(SignatureError::MalformedSignature)?;
    let mut definition = CommandDefinition::new(name);

    for token in extract_tokens(signature) {
        match classify(token) {
            TokenKind::Option(body) => definition.options.push(build_option(body)),
            TokenKind::Argument(body) => definition.arguments.push(build_argument(body)),
        }
    }

    debug!(
        command = %definition.name,
        arguments = definition.arguments.len(),
        options = definition.options.len(),
        "Parsed command signature"
    );

    Ok(definition)
}
