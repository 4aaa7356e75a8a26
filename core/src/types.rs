//! Definition types produced by the signature parser.
//!
//! This module defines the data model handed to a command-registration
//! runtime after a signature has been parsed. The types are designed for
//! serialization with [`serde`] so a parsed definition can be printed as
//! JSON or YAML and compared structurally in tests.

use serde::{Deserialize, Serialize};

/// Default value attached to an argument or option.
///
/// Array arguments and options carry a [`List`](DefaultValue::List); scalar
/// ones carry a [`Scalar`](DefaultValue::Scalar). An absent default is
/// modeled as `Option::<DefaultValue>::None` on the owning definition.
///
/// # Examples
///
/// ```
/// use signature_core::DefaultValue;
///
/// let scalar = DefaultValue::Scalar("default".into());
/// assert_eq!(scalar.as_scalar(), Some("default"));
///
/// let list = DefaultValue::List(vec!["a".into(), "b".into()]);
/// assert!(list.is_list());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    /// A single string value.
    Scalar(String),
    /// An ordered list of string values.
    List(Vec<String>),
}

impl DefaultValue {
    /// Returns the scalar value, or `None` for a list.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(value) => Some(value),
            Self::List(_) => None,
        }
    }

    /// Returns the list values, or `None` for a scalar.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::Scalar(_) => None,
            Self::List(values) => Some(values),
        }
    }

    /// Returns `true` for a list default.
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }
}

/// Schema for a positional argument.
///
/// Positional arguments are matched by declaration order when real input is
/// bound, so the order of definitions inside a [`CommandDefinition`] is
/// significant.
///
/// # Examples
///
/// ```
/// use signature_core::ArgumentDefinition;
///
/// let user = ArgumentDefinition::required("user").with_description("The user id");
/// assert!(user.required);
/// assert!(!user.is_array);
///
/// let files = ArgumentDefinition::array("files", false);
/// assert!(files.is_array);
/// assert!(!files.required);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentDefinition {
    /// Name of the argument (unique within a command)
    pub name: String,
    /// Must a value be supplied?
    pub required: bool,
    /// Does the argument collect every remaining value?
    pub is_array: bool,
    /// Human-readable description (possibly empty)
    pub description: String,
    /// Value used when nothing is supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultValue>,
}

impl ArgumentDefinition {
    /// Creates a required scalar argument.
    pub fn required(name: &str) -> Self {
        Self {
            name: name.to_string(),
            required: true,
            is_array: false,
            description: String::new(),
            default: None,
        }
    }

    /// Creates an optional scalar argument without a default.
    pub fn optional(name: &str) -> Self {
        Self {
            required: false,
            ..Self::required(name)
        }
    }

    /// Creates an array argument.
    pub fn array(name: &str, required: bool) -> Self {
        Self {
            required,
            is_array: true,
            ..Self::required(name)
        }
    }

    /// Adds a description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Sets the default value.
    ///
    /// A default always makes the argument optional.
    pub fn with_default(mut self, default: DefaultValue) -> Self {
        self.required = false;
        self.default = Some(default);
        self
    }
}

/// How an option consumes values.
///
/// # Examples
///
/// ```
/// use signature_core::ValueMode;
///
/// assert!(!ValueMode::None.accepts_value());
/// assert!(ValueMode::OptionalScalar.accepts_value());
/// assert!(ValueMode::OptionalArray.is_array());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ValueMode {
    /// Boolean flag, takes no value (the default).
    #[default]
    None,
    /// Accepts at most one value.
    OptionalScalar,
    /// Accepts a value each time it is given.
    OptionalArray,
}

impl ValueMode {
    /// Returns `true` unless this is a boolean flag.
    pub fn accepts_value(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns `true` when values are collected into a list.
    pub fn is_array(self) -> bool {
        matches!(self, Self::OptionalArray)
    }
}

/// Schema for an option (a `--name` flag).
///
/// # Examples
///
/// ```
/// use signature_core::{OptionDefinition, ValueMode};
///
/// let queue = OptionDefinition::scalar("queue")
///     .with_shortcut("Q")
///     .with_description("Queue name");
/// assert_eq!(queue.value_mode, ValueMode::OptionalScalar);
/// assert_eq!(queue.shortcut.as_deref(), Some("Q"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDefinition {
    /// Long name without leading dashes (unique within a command)
    pub name: String,
    /// Short alias declared before `|`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<String>,
    /// Whether the option takes a value, and how many
    pub value_mode: ValueMode,
    /// Human-readable description (possibly empty)
    pub description: String,
    /// Value used when the option is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultValue>,
}

impl OptionDefinition {
    fn new(name: &str, value_mode: ValueMode) -> Self {
        Self {
            name: name.to_string(),
            shortcut: None,
            value_mode,
            description: String::new(),
            default: None,
        }
    }

    /// Creates a boolean flag.
    pub fn flag(name: &str) -> Self {
        Self::new(name, ValueMode::None)
    }

    /// Creates an option accepting an optional single value.
    pub fn scalar(name: &str) -> Self {
        Self::new(name, ValueMode::OptionalScalar)
    }

    /// Creates an option collecting values into a list.
    pub fn array(name: &str) -> Self {
        Self::new(name, ValueMode::OptionalArray)
    }

    /// Sets the shortcut.
    pub fn with_shortcut(mut self, shortcut: &str) -> Self {
        self.shortcut = Some(shortcut.to_string());
        self
    }

    /// Adds a description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Sets the default value.
    pub fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }
}

/// Complete definition parsed from one signature.
///
/// This is the primary type in the crate. Arguments and options keep the
/// order in which they were declared.
///
/// # Examples
///
/// ```
/// use signature_core::parse;
///
/// let definition = parse("mail:send {user} {--queue=}").unwrap();
/// assert_eq!(definition.name, "mail:send");
/// assert!(definition.argument("user").is_some());
/// assert!(definition.option("queue").is_some());
/// assert!(definition.option("user").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDefinition {
    /// The command name (e.g. "mail:send")
    pub name: String,
    /// Positional arguments in declaration order
    pub arguments: Vec<ArgumentDefinition>,
    /// Options in declaration order
    pub options: Vec<OptionDefinition>,
}

impl CommandDefinition {
    /// Creates an empty definition with the given name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Adds a positional argument.
    pub fn with_argument(mut self, argument: ArgumentDefinition) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Adds an option.
    pub fn with_option(mut self, option: OptionDefinition) -> Self {
        self.options.push(option);
        self
    }

    /// Finds an argument by name.
    pub fn argument(&self, name: &str) -> Option<&ArgumentDefinition> {
        self.arguments.iter().find(|a| a.name == name)
    }

    /// Finds an option by its long name.
    pub fn option(&self, name: &str) -> Option<&OptionDefinition> {
        self.options.iter().find(|o| o.name == name)
    }

    /// Finds an option by its shortcut.
    pub fn option_by_shortcut(&self, shortcut: &str) -> Option<&OptionDefinition> {
        self.options
            .iter()
            .find(|o| o.shortcut.as_deref() == Some(shortcut))
    }

    /// Returns `true` when no arguments or options were declared.
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty() && self.options.is_empty()
    }
}
