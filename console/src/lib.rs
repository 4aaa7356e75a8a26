//! Console runtime for signature-driven commands.
//!
//! A command declares itself with a one-line signature (parsed by
//! [`signature_core`]). This crate turns that definition into a clap
//! command, binds argv into an [`Input`], and hands the command an [`Io`]
//! pairing the input with an [`Output`] backend.
//!
//! ```
//! use signature_console::{BufferedOutput, Command, Io, Result, Value, run_command};
//!
//! struct Greet;
//!
//! impl Command for Greet {
//!     fn signature(&self) -> &str {
//!         "greet {name=world} {--Y|yell}"
//!     }
//!
//!     fn handle(&mut self, io: &mut Io<'_>) -> Result<i32> {
//!         let name = io.argument("name").and_then(Value::as_str).unwrap_or_default();
//!         let mut message = format!("Hello {name}");
//!         if io.option("yell") == Some(&Value::Bool(true)) {
//!             message = message.to_uppercase();
//!         }
//!         io.output().success(&message);
//!         Ok(0)
//!     }
//! }
//!
//! let mut output = BufferedOutput::new();
//! assert_eq!(run_command(&mut Greet, ["-Y"], &mut output).unwrap(), 0);
//! assert_eq!(output.contents(), " [OK] HELLO WORLD\n");
//! ```

pub mod command;
mod config;
mod definition;
mod error;
mod input;
pub mod output;
mod verbosity;

pub use command::{Command, Io, configure, run_command};
pub use config::ConsoleConfig;
pub use definition::{InputDefinition, RESERVED_NAMES, RESERVED_SHORTCUTS};
pub use error::{ConsoleError, Result};
pub use input::{Input, Value};
pub use output::{BufferedOutput, MessageStyle, Output, OutputKind, TerminalOutput, Validator};
pub use verbosity::Verbosity;
