//! Compact command signature parsing.
//!
//! This crate turns a one-line signature expression into a structured
//! command definition:
//!
//! - [`CommandDefinition`]: command name plus ordered arguments and options.
//! - [`ArgumentDefinition`]: a positional argument with requiredness,
//!   array-ness, description and default.
//! - [`OptionDefinition`]: a `--name` option with shortcut, [`ValueMode`],
//!   description and default.
//!
//! Parsing ([`parse`], an alias of [`parse_signature`]) is a pure function
//! from the signature string to a fresh definition. Validation
//! ([`validate_definition`]) catches cross-token problems such as duplicate
//! names or an argument declared after an array argument.
//!
//! # Signature grammar
//!
//! | Token | Meaning |
//! |---|---|
//! | `{name}` | required argument |
//! | `{name?}` | optional argument |
//! | `{name*}` / `{name?*}` | required / optional array argument |
//! | `{name=value}` / `{name=*a,b}` | optional argument with default |
//! | `{--name}` | boolean option |
//! | `{--name=}` / `{--name=*}` | option taking a value / values |
//! | `{--name=value}` / `{--name=*a,b}` | option with default |
//! | `{--N\|name}` | option with shortcut `N` |
//! | `{token : text}` | description |
//!
//! # Example
//!
//! ```
//! use signature_core::*;
//!
//! let definition = parse("mail:send {user : The user id} {--Q|queue= : Queue name}").unwrap();
//!
//! assert_eq!(definition.name, "mail:send");
//! assert_eq!(definition.arguments[0].description, "The user id");
//! assert_eq!(definition.options[0].shortcut.as_deref(), Some("Q"));
//! assert_eq!(definition.options[0].value_mode, ValueMode::OptionalScalar);
//! assert!(validate_definition(&definition).is_empty());
//! ```

mod error;
pub mod parser;
mod types;
mod validate;

pub use error::{Result, SignatureError};
pub use parser::parse_signature;
pub use types::*;
pub use validate::{DefinitionError, validate_definition};

/// Parses a signature into a [`CommandDefinition`].
///
/// Shorthand for [`parse_signature`].
pub fn parse(signature: &str) -> Result<CommandDefinition> {
    parse_signature(signature)
}
