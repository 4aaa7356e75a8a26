//! Values bound from user input.

use std::fmt;

use clap::ArgMatches;
use serde::Serialize;
use signature_core::{CommandDefinition, ValueMode};

use crate::verbosity::Verbosity;

/// A bound argument or option value.
///
/// # Examples
///
/// ```
/// use signature_console::Value;
///
/// assert!(Value::Null.is_null());
/// assert_eq!(Value::String("x".into()).as_str(), Some("x"));
/// assert_eq!(Value::Bool(true).as_bool(), Some(true));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Nothing supplied and no default.
    Null,
    /// Boolean flag state.
    Bool(bool),
    /// Scalar value.
    String(String),
    /// Array value (possibly empty).
    List(Vec<String>),
}

impl Value {
    /// `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The scalar value, if this is a [`Value::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    /// The flag state, if this is a [`Value::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// The values, if this is a [`Value::List`].
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(values) => Some(values),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::String(value) => f.write_str(value),
            Self::List(values) => write!(f, "[{}]", values.join(", ")),
        }
    }
}

/// Argument and option values bound against a definition.
///
/// Entries keep the declaration order of the definition. Runtime flags
/// (`--quiet`, `--verbose`, `--no-interaction`) are not listed among the
/// options; they surface as [`verbosity`](Input::verbosity) and
/// [`is_interactive`](Input::is_interactive).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Input {
    command: String,
    arguments: Vec<(String, Value)>,
    options: Vec<(String, Value)>,
    #[serde(skip)]
    verbosity: Option<Verbosity>,
    #[serde(skip)]
    interactive: bool,
}

impl Input {
    /// Creates an input from already-bound values.
    pub fn new(
        command: &str,
        arguments: Vec<(String, Value)>,
        options: Vec<(String, Value)>,
    ) -> Self {
        Self {
            command: command.to_string(),
            arguments,
            options,
            verbosity: None,
            interactive: true,
        }
    }

    /// Reads the values for `definition` out of clap matches.
    pub(crate) fn from_matches(definition: &CommandDefinition, matches: &ArgMatches) -> Self {
        let arguments = definition
            .arguments
            .iter()
            .map(|argument| {
                let value = if argument.is_array {
                    many(matches, &argument.name)
                } else {
                    one(matches, &argument.name)
                };
                (argument.name.clone(), value)
            })
            .collect();

        let options = definition
            .options
            .iter()
            .map(|option| {
                let value = match option.value_mode {
                    ValueMode::None => Value::Bool(matches.get_flag(&option.name)),
                    ValueMode::OptionalScalar => one(matches, &option.name),
                    ValueMode::OptionalArray => many(matches, &option.name),
                };
                (option.name.clone(), value)
            })
            .collect();

        let mut input = Self::new(&definition.name, arguments, options);
        let quiet = matches.get_flag("quiet");
        let verbose = matches.get_count("verbose");
        if quiet || verbose > 0 {
            input.verbosity = Some(Verbosity::from_flags(quiet, verbose));
        }
        input.interactive = !matches.get_flag("no-interaction");
        input
    }

    /// Name of the command this input was bound for.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Value of an argument, or `None` when no such argument is defined.
    pub fn argument(&self, name: &str) -> Option<&Value> {
        lookup(&self.arguments, name)
    }

    /// All argument values in declaration order.
    pub fn arguments(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.arguments.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Whether the argument is defined and holds a non-null value.
    pub fn has_argument(&self, name: &str) -> bool {
        self.argument(name).is_some_and(|value| !value.is_null())
    }

    /// Value of an option, or `None` when no such option is defined.
    pub fn option(&self, name: &str) -> Option<&Value> {
        lookup(&self.options, name)
    }

    /// All option values in declaration order.
    pub fn options(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.options.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Whether the option is defined and holds a non-null value.
    ///
    /// Boolean flags always hold `true` or `false`, so they are present even
    /// when not given on the command line.
    pub fn has_option(&self, name: &str) -> bool {
        self.option(name).is_some_and(|value| !value.is_null())
    }

    /// Verbosity requested with `--quiet` / `-v`, or `None` when neither
    /// flag was given.
    pub fn verbosity(&self) -> Option<Verbosity> {
        self.verbosity
    }

    /// `false` when `--no-interaction` was given.
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }
}

fn lookup<'a>(entries: &'a [(String, Value)], name: &str) -> Option<&'a Value> {
    entries
        .iter()
        .find(|(entry, _)| entry == name)
        .map(|(_, value)| value)
}

fn one(matches: &ArgMatches, id: &str) -> Value {
    matches
        .get_one::<String>(id)
        .map_or(Value::Null, |value| Value::String(value.clone()))
}

fn many(matches: &ArgMatches, id: &str) -> Value {
    Value::List(
        matches
            .get_many::<String>(id)
            .map(|values| values.cloned().collect())
            .unwrap_or_default(),
    )
}
