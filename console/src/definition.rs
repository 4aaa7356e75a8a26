//! Conversion of parsed definitions into clap commands.
//!
//! [`InputDefinition`] is the runtime side of a [`CommandDefinition`]: it
//! validates the definition, maps every argument and option onto a clap
//! [`Arg`], and binds argv against the result.

use std::collections::HashSet;
use std::ffi::OsString;

use clap::{Arg, ArgAction, Command};
use signature_core::{CommandDefinition, DefaultValue, ValueMode, validate_definition};
use tracing::debug;

use crate::error::{ConsoleError, Result};
use crate::input::Input;

/// Option names owned by the runtime.
pub const RESERVED_NAMES: &[&str] = &["help", "quiet", "verbose", "no-interaction"];

/// Shortcuts owned by the runtime.
pub const RESERVED_SHORTCUTS: &[&str] = &["h", "q", "v", "n"];

/// A validated definition bound to a clap command.
///
/// # Examples
///
/// ```
/// use signature_console::{InputDefinition, Value};
/// use signature_core::parse;
///
/// let definition = InputDefinition::new(parse("greet {name=world} {--yell}").unwrap()).unwrap();
/// let input = definition.bind(["--yell"]).unwrap();
///
/// assert_eq!(input.argument("name"), Some(&Value::String("world".into())));
/// assert_eq!(input.option("yell"), Some(&Value::Bool(true)));
/// ```
#[derive(Debug, Clone)]
pub struct InputDefinition {
    definition: CommandDefinition,
    command: Command,
}

impl InputDefinition {
    /// Validates `definition` and builds its clap command.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::InvalidDefinition`] for structural problems,
    /// [`ConsoleError::ReservedName`] when a runtime-owned name or shortcut
    /// is redeclared, and [`ConsoleError::AmbiguousName`] when an argument
    /// and an option share a name.
    pub fn new(definition: CommandDefinition) -> Result<Self> {
        let errors = validate_definition(&definition);
        if !errors.is_empty() {
            return Err(ConsoleError::InvalidDefinition(errors));
        }
        check_names(&definition)?;

        let command = build_command(&definition);
        debug!(
            command = %definition.name,
            arguments = definition.arguments.len(),
            options = definition.options.len(),
            "Built input definition"
        );

        Ok(Self {
            definition,
            command,
        })
    }

    /// Sets the description shown in help output.
    pub fn with_about(mut self, about: &str) -> Self {
        if !about.is_empty() {
            self.command = self.command.about(about.to_string());
        }
        self
    }

    /// The parsed definition.
    pub fn definition(&self) -> &CommandDefinition {
        &self.definition
    }

    /// The clap command built from the definition.
    pub fn command(&self) -> &Command {
        &self.command
    }

    /// Binds command-line arguments (without the program name).
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Input`] when the arguments do not match the
    /// definition. Help requests (`--help`) also surface as
    /// [`ConsoleError::Input`] with [`clap::error::ErrorKind::DisplayHelp`].
    pub fn bind<I, T>(&self, args: I) -> Result<Input>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv = std::iter::once(OsString::from(&self.definition.name))
            .chain(args.into_iter().map(Into::into));
        let matches = self.command.clone().try_get_matches_from(argv)?;
        Ok(Input::from_matches(&self.definition, &matches))
    }

    /// Renders the help text.
    pub fn render_help(&self) -> String {
        self.command.clone().render_help().to_string()
    }
}

fn check_names(definition: &CommandDefinition) -> Result<()> {
    for option in &definition.options {
        if RESERVED_NAMES.contains(&option.name.as_str()) {
            return Err(ConsoleError::ReservedName(option.name.clone()));
        }
        if let Some(shortcut) = option.shortcut.as_deref() {
            if RESERVED_SHORTCUTS.contains(&shortcut) || RESERVED_NAMES.contains(&shortcut) {
                return Err(ConsoleError::ReservedName(shortcut.to_string()));
            }
        }
    }

    let mut ids: HashSet<&str> = RESERVED_NAMES.iter().copied().collect();
    for argument in &definition.arguments {
        if !ids.insert(argument.name.as_str()) {
            return Err(ConsoleError::ReservedName(argument.name.clone()));
        }
    }
    for option in &definition.options {
        if !ids.insert(option.name.as_str()) {
            return Err(ConsoleError::AmbiguousName(option.name.clone()));
        }
        // Long shortcuts become long aliases and must not shadow option names.
        if let Some(shortcut) = option.shortcut.as_deref().filter(|s| s.chars().count() > 1) {
            if definition.option(shortcut).is_some() {
                return Err(ConsoleError::AmbiguousName(shortcut.to_string()));
            }
        }
    }

    Ok(())
}

fn build_command(definition: &CommandDefinition) -> Command {
    let mut command = Command::new(definition.name.clone()).args_override_self(true);

    for argument in &definition.arguments {
        let mut arg = Arg::new(argument.name.clone())
            .value_name(argument.name.clone())
            .required(argument.required && argument.default.is_none());
        arg = if argument.is_array {
            arg.num_args(1..).action(ArgAction::Append)
        } else {
            arg.num_args(1).action(ArgAction::Set)
        };
        arg = with_default(arg, argument.default.as_ref());
        if !argument.description.is_empty() {
            arg = arg.help(argument.description.clone());
        }
        command = command.arg(arg);
    }

    for option in &definition.options {
        let mut arg = Arg::new(option.name.clone()).long(option.name.clone());
        arg = match option.value_mode {
            ValueMode::None => arg.action(ArgAction::SetTrue),
            ValueMode::OptionalScalar => arg.num_args(0..=1).action(ArgAction::Set),
            ValueMode::OptionalArray => arg.num_args(1).action(ArgAction::Append),
        };
        if option.value_mode.accepts_value() {
            arg = with_default(arg, option.default.as_ref());
        }
        if let Some(shortcut) = option.shortcut.as_deref() {
            let mut chars = shortcut.chars();
            arg = match (chars.next(), chars.next()) {
                (Some(short), None) => arg.short(short),
                _ => arg.alias(shortcut.to_string()),
            };
        }
        if !option.description.is_empty() {
            arg = arg.help(option.description.clone());
        }
        command = command.arg(arg);
    }

    command
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Do not output any message"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Increase the verbosity of messages: -v, -vv or -vvv"),
        )
        .arg(
            Arg::new("no-interaction")
                .short('n')
                .long("no-interaction")
                .action(ArgAction::SetTrue)
                .help("Do not ask any interactive question"),
        )
}

fn with_default(arg: Arg, default: Option<&DefaultValue>) -> Arg {
    match default {
        Some(DefaultValue::Scalar(value)) => arg.default_value(value.clone()),
        Some(DefaultValue::List(values)) => arg.default_values(values.clone()),
        None => arg,
    }
}
