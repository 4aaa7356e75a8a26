//! Error types for the console layer.
//!
//! Provides a unified error type covering every failure mode between a raw
//! signature and a finished command: parsing, definition validation, input
//! binding, prompts and configuration loading.

use signature_core::{DefinitionError, SignatureError};
use thiserror::Error;

/// Errors that can occur while configuring or running a command.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The command signature has no name.
    #[error("invalid signature: {0}")]
    Signature(#[from] SignatureError),

    /// The parsed definition violates a structural constraint.
    #[error("invalid command definition: {}", join_errors(.0))]
    InvalidDefinition(Vec<DefinitionError>),

    /// An argument or option uses a name owned by the runtime.
    #[error("{0:?} is reserved by the console runtime")]
    ReservedName(String),

    /// An argument and an option share the same name.
    #[error("argument and option share the name {0:?}")]
    AmbiguousName(String),

    /// User input did not match the definition (includes help requests).
    #[error(transparent)]
    Input(#[from] clap::Error),

    /// The command overrides neither `execute` nor `handle`.
    #[error("command {command} must implement either execute or handle")]
    MissingHandler { command: String },

    /// A terminal prompt failed.
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// A buffered prompt ran out of scripted answers.
    #[error("no answer available for question: {0}")]
    MissingAnswer(String),

    /// A choice answer matched none of the offered choices.
    #[error("value {answer:?} is not one of the offered choices")]
    InvalidChoice { answer: String },

    /// An answer was rejected by the prompt's validator and no retry was
    /// possible.
    #[error("invalid answer: {0}")]
    InvalidAnswer(String),

    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing or serialization failure.
    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),
}

fn join_errors(errors: &[DefinitionError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convenience alias for results with [`ConsoleError`].
pub type Result<T> = std::result::Result<T, ConsoleError>;
