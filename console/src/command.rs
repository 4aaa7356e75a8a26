//! Signature-driven commands and their lifecycle.

use std::ffi::OsString;

use clap::error::ErrorKind;
use signature_core::parse_signature;
use tracing::debug;

use crate::definition::InputDefinition;
use crate::error::{ConsoleError, Result};
use crate::input::{Input, Value};
use crate::output::{MessageStyle, Output};
use crate::verbosity::Verbosity;

/// Exit code for a successful run.
pub const SUCCESS: i32 = 0;
/// Exit code for a failed run.
pub const FAILURE: i32 = 1;
/// Exit code for invalid usage.
pub const INVALID: i32 = 2;

/// A console command declared by its signature.
///
/// Implementors provide the signature and override either
/// [`execute`](Command::execute) or [`handle`](Command::handle). Overriding
/// neither is a runtime error ([`ConsoleError::MissingHandler`]).
///
/// # Examples
///
/// ```
/// use signature_console::{BufferedOutput, Command, Io, Result, run_command};
///
/// struct SendEmail;
///
/// impl Command for SendEmail {
///     fn signature(&self) -> &str {
///         "mail:send {user} {--queue=}"
///     }
///
///     fn handle(&mut self, io: &mut Io<'_>) -> Result<i32> {
///         let user = io.argument("user").and_then(|v| v.as_str()).unwrap_or_default().to_string();
///         io.output().info(&format!("Sending to {user}"));
///         Ok(0)
///     }
/// }
///
/// let mut output = BufferedOutput::new();
/// let code = run_command(&mut SendEmail, ["42"], &mut output).unwrap();
/// assert_eq!(code, 0);
/// assert_eq!(output.contents(), "Sending to 42\n");
/// ```
pub trait Command {
    /// The command signature, e.g. `mail:send {user} {--queue=}`.
    fn signature(&self) -> &str;

    /// One-line description shown in help output.
    fn description(&self) -> &str {
        ""
    }

    /// Runs the command. Delegates to [`handle`](Command::handle) unless
    /// overridden.
    fn execute(&mut self, io: &mut Io<'_>) -> Result<i32> {
        self.handle(io)
    }

    /// Command body used by the default [`execute`](Command::execute).
    fn handle(&mut self, io: &mut Io<'_>) -> Result<i32> {
        Err(ConsoleError::MissingHandler {
            command: io.command_name().to_string(),
        })
    }
}

/// Bound input plus the output a command writes to.
pub struct Io<'a> {
    input: Input,
    output: &'a mut dyn Output,
}

impl<'a> Io<'a> {
    /// Pairs bound input with the output the command writes to.
    pub fn new(input: Input, output: &'a mut dyn Output) -> Self {
        Self { input, output }
    }

    /// Name of the running command.
    pub fn command_name(&self) -> &str {
        self.input.command()
    }

    /// The bound input.
    pub fn input(&self) -> &Input {
        &self.input
    }

    /// The output backend.
    pub fn output(&mut self) -> &mut dyn Output {
        &mut *self.output
    }

    /// See [`Input::argument`].
    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.input.argument(name)
    }

    /// See [`Input::arguments`].
    pub fn arguments(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.input.arguments()
    }

    /// See [`Input::has_argument`].
    pub fn has_argument(&self, name: &str) -> bool {
        self.input.has_argument(name)
    }

    /// See [`Input::option`].
    pub fn option(&self, name: &str) -> Option<&Value> {
        self.input.option(name)
    }

    /// See [`Input::options`].
    pub fn options(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.input.options()
    }

    /// See [`Input::has_option`]. Boolean flags always count as present.
    pub fn has_option(&self, name: &str) -> bool {
        self.input.has_option(name)
    }

    /// Writes a line gated by a symbolic verbosity (`v`, `vv`, `vvv`,
    /// `quiet`, anything else means normal).
    pub fn line(&mut self, message: &str, style: Option<MessageStyle>, verbosity: &str) {
        self.output
            .line(message, style, Verbosity::from_symbol(verbosity));
    }
}

/// Parses the command's signature and builds its input definition.
pub fn configure<C: Command + ?Sized>(command: &C) -> Result<InputDefinition> {
    let definition = parse_signature(command.signature())?;
    Ok(InputDefinition::new(definition)?.with_about(command.description()))
}

/// Configures `command`, binds `args` and executes it against `output`.
///
/// `--help` writes the rendered help and returns [`SUCCESS`]. The runtime
/// flags (`-q`, `-v`, `-n`) are applied to `output` before execution; when
/// neither `-q` nor `-v` is given the output keeps its own verbosity.
///
/// # Errors
///
/// Returns configuration and binding errors, and whatever the command
/// itself returns.
pub fn run_command<C, I, T>(command: &mut C, args: I, output: &mut dyn Output) -> Result<i32>
where
    C: Command + ?Sized,
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let definition = configure(command)?;
    let input = match definition.bind(args) {
        Ok(input) => input,
        Err(ConsoleError::Input(err))
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) =>
        {
            for line in definition.render_help().lines() {
                output.write_line(line, None);
            }
            return Ok(SUCCESS);
        }
        Err(err) => return Err(err),
    };

    if let Some(verbosity) = input.verbosity() {
        output.set_verbosity(verbosity);
    }
    if !input.is_interactive() {
        output.set_interactive(false);
    }
    debug!(
        command = %input.command(),
        verbosity = output.verbosity().symbol(),
        interactive = output.is_interactive(),
        "Executing command"
    );

    let mut io = Io::new(input, output);
    command.execute(&mut io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BufferedOutput;

    struct Unhandled;

    impl Command for Unhandled {
        fn signature(&self) -> &str {
            "acme:unhandled"
        }
    }

    struct Echo;

    impl Command for Echo {
        fn signature(&self) -> &str {
            "echo {words*}"
        }

        fn execute(&mut self, io: &mut Io<'_>) -> Result<i32> {
            let words = io
                .argument("words")
                .and_then(Value::as_list)
                .map(|words| words.join(" "))
                .unwrap_or_default();
            io.line(&words, None, "normal");
            io.line("debug detail", None, "vvv");
            Ok(SUCCESS)
        }
    }

    #[test]
    fn test_missing_handler() {
        let mut output = BufferedOutput::new();
        let err = run_command(&mut Unhandled, Vec::<String>::new(), &mut output).unwrap_err();
        assert_eq!(
            err.to_string(),
            "command acme:unhandled must implement either execute or handle"
        );
    }

    #[test]
    fn test_execute_override() {
        let mut output = BufferedOutput::new();
        let code = run_command(&mut Echo, ["hello", "world"], &mut output).unwrap();
        assert_eq!(code, SUCCESS);
        assert_eq!(output.contents(), "hello world\n");
    }

    #[test]
    fn test_verbose_flag_reaches_output() {
        let mut output = BufferedOutput::new();
        run_command(&mut Echo, ["-vvv", "hi"], &mut output).unwrap();
        assert_eq!(output.contents(), "hi\ndebug detail\n");
    }

    #[test]
    fn test_usage_error_is_returned() {
        let mut output = BufferedOutput::new();
        let err = run_command(&mut Echo, Vec::<String>::new(), &mut output).unwrap_err();
        assert!(matches!(err, ConsoleError::Input(_)));
    }
}
