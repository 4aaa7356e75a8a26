//! Definition validation.
//!
//! The parser accepts any signature with a command name. Constraints that
//! span several tokens are checked here instead, before a definition is
//! registered with a runtime: unique names and shortcuts, at most one array
//! argument placed last, and no required argument after an optional one.
//!
//! # Examples
//!
//! ```
//! use signature_core::*;
//!
//! let definition = parse("copy {source} {targets*}").unwrap();
//! assert!(validate_definition(&definition).is_empty());
//!
//! // Invalid: an argument declared after an array argument
//! let bad = parse("copy {sources*} {target}").unwrap();
//! assert!(!validate_definition(&bad).is_empty());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::CommandDefinition;

/// Definition validation errors.
///
/// Each variant describes a structural problem that a command-registration
/// runtime would reject.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    /// Command name is empty or whitespace-only.
    #[error("command name cannot be empty")]
    EmptyCommandName,
    /// An argument token produced an empty name (e.g. `{?}`).
    #[error("argument name cannot be empty")]
    EmptyArgumentName,
    /// An option token produced an empty name (e.g. `{--=}`).
    #[error("option name cannot be empty")]
    EmptyOptionName,
    /// Option name starts with a dash or contains whitespace (e.g. `{--x|-}`).
    #[error("invalid option name: {0:?}")]
    InvalidOptionName(String),
    /// Two arguments share a name.
    #[error("duplicate argument: {0}")]
    DuplicateArgument(String),
    /// Two options share a name.
    #[error("duplicate option: {0}")]
    DuplicateOption(String),
    /// Two options share a shortcut.
    #[error("duplicate shortcut: {0}")]
    DuplicateShortcut(String),
    /// Shortcut is empty or contains whitespace or dashes.
    #[error("invalid shortcut: {0:?}")]
    InvalidShortcut(String),
    /// An argument follows an array argument.
    #[error("argument {argument} cannot follow array argument {array}")]
    ArgumentAfterArray { argument: String, array: String },
    /// A required argument follows an optional one.
    #[error("required argument {required} cannot follow optional argument {optional}")]
    RequiredAfterOptional { required: String, optional: String },
}

/// Validates a parsed definition and returns every problem found.
///
/// # Examples
///
/// ```
/// use signature_core::*;
///
/// let definition = parse("cmd {name?} {other}").unwrap();
/// let errors = validate_definition(&definition);
/// assert_eq!(
///     errors,
///     vec![DefinitionError::RequiredAfterOptional {
///         required: "other".into(),
///         optional: "name".into(),
///     }]
/// );
/// ```
pub fn validate_definition(definition: &CommandDefinition) -> Vec<DefinitionError> {
    let mut errors = Vec::new();

    if definition.name.trim().is_empty() {
        errors.push(DefinitionError::EmptyCommandName);
    }

    errors.extend(validate_arguments(definition));
    errors.extend(validate_options(definition));

    errors
}

fn validate_arguments(definition: &CommandDefinition) -> Vec<DefinitionError> {
    let mut errors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut last_array: Option<&str> = None;
    let mut last_optional: Option<&str> = None;

    for argument in &definition.arguments {
        let name = argument.name.as_str();
        if name.trim().is_empty() {
            errors.push(DefinitionError::EmptyArgumentName);
            continue;
        }
        if !seen.insert(name) {
            errors.push(DefinitionError::DuplicateArgument(name.to_string()));
        }

        if let Some(array) = last_array {
            errors.push(DefinitionError::ArgumentAfterArray {
                argument: name.to_string(),
                array: array.to_string(),
            });
        }
        if argument.required {
            if let Some(optional) = last_optional {
                errors.push(DefinitionError::RequiredAfterOptional {
                    required: name.to_string(),
                    optional: optional.to_string(),
                });
            }
        } else {
            last_optional = Some(name);
        }
        if argument.is_array {
            last_array = Some(name);
        }
    }

    errors
}

fn validate_options(definition: &CommandDefinition) -> Vec<DefinitionError> {
    let mut errors = Vec::new();
    let mut names: HashSet<&str> = HashSet::new();
    let mut shortcuts: HashSet<&str> = HashSet::new();

    for option in &definition.options {
        let name = option.name.as_str();
        if name.trim().is_empty() {
            errors.push(DefinitionError::EmptyOptionName);
        } else if name.starts_with('-') || name.chars().any(char::is_whitespace) {
            errors.push(DefinitionError::InvalidOptionName(name.to_string()));
        } else if !names.insert(name) {
            errors.push(DefinitionError::DuplicateOption(name.to_string()));
        }

        if let Some(shortcut) = option.shortcut.as_deref() {
            if shortcut.is_empty() || shortcut.chars().any(|c| c.is_whitespace() || c == '-') {
                errors.push(DefinitionError::InvalidShortcut(shortcut.to_string()));
            } else if !shortcuts.insert(shortcut) {
                errors.push(DefinitionError::DuplicateShortcut(shortcut.to_string()));
            }
        }
    }

    errors
}
