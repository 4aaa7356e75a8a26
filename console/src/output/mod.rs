//! Output capability shared by every console backend.
//!
//! [`Output`] enumerates everything a command may do with the console:
//! message-level writers, structured output (titles, listings, tables,
//! definition lists), prompts and progress reporting. Adapters implement a
//! small set of primitives; the message and structured writers are provided
//! methods built on top of them, so every backend formats them the same way.
//!
//! Two adapters exist, chosen once when the output is constructed (see
//! [`ConsoleConfig::build_output`](crate::ConsoleConfig::build_output)):
//!
//! - [`TerminalOutput`]: styled terminal output with interactive prompts
//!   and a live progress bar.
//! - [`BufferedOutput`]: undecorated text captured in memory with scripted
//!   prompt answers, for tests and non-TTY runs.

mod buffered;
mod terminal;

use comfy_table::{Table, presets};
use serde::{Deserialize, Serialize};

use crate::error::{ConsoleError, Result};
use crate::verbosity::Verbosity;

pub use buffered::BufferedOutput;
pub use terminal::TerminalOutput;

/// Checks a prompt answer. `Err` carries the message shown before the
/// question is asked again.
pub type Validator<'a> = &'a dyn Fn(&str) -> std::result::Result<(), String>;

/// Which [`Output`] adapter to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    /// Styled terminal output (the default).
    #[default]
    Terminal,
    /// In-memory capture.
    Buffered,
}

/// Visual style of a written line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Comment,
    Question,
    Error,
    Warning,
    Success,
    Note,
    Caution,
    Title,
    Section,
}

impl MessageStyle {
    /// Tag name used when rendering styles as markup.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Comment => "comment",
            Self::Question => "question",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Note => "note",
            Self::Caution => "caution",
            Self::Title => "title",
            Self::Section => "section",
        }
    }
}

/// Console output capability.
pub trait Output {
    /// Current verbosity.
    fn verbosity(&self) -> Verbosity;

    /// Changes the verbosity.
    fn set_verbosity(&mut self, verbosity: Verbosity);

    /// Whether styles are rendered.
    fn is_decorated(&self) -> bool;

    /// Whether prompts may wait for an answer. Non-interactive prompts
    /// return their default.
    fn is_interactive(&self) -> bool;

    /// Enables or disables prompting.
    fn set_interactive(&mut self, interactive: bool);

    /// Writes one line unconditionally.
    fn write_line(&mut self, text: &str, style: Option<MessageStyle>);

    /// Asks for free text, returning `default` on an empty answer. With a
    /// validator the question repeats until the answer passes; a
    /// non-interactive default that fails is [`ConsoleError::InvalidAnswer`].
    fn ask_with(
        &mut self,
        question: &str,
        default: Option<&str>,
        validator: Option<Validator<'_>>,
    ) -> Result<String>;

    /// Asks for text without echoing it, validated like
    /// [`ask_with`](Output::ask_with).
    fn ask_hidden_with(&mut self, question: &str, validator: Option<Validator<'_>>)
    -> Result<String>;

    /// Asks a yes/no question.
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool>;

    /// Asks to pick one of `choices`; `default` is an index into `choices`.
    fn choice(&mut self, question: &str, choices: &[&str], default: Option<usize>)
    -> Result<String>;

    /// Asks to pick any number of `choices`; `defaults` are indexes into
    /// `choices` and are returned for an empty or non-interactive answer.
    fn multi_choice(
        &mut self,
        question: &str,
        choices: &[&str],
        defaults: &[usize],
    ) -> Result<Vec<String>>;

    /// Starts a progress report; `max` of zero means unknown length.
    fn progress_start(&mut self, max: u64);

    /// Advances the current progress report.
    fn progress_advance(&mut self, step: u64);

    /// Completes the current progress report.
    fn progress_finish(&mut self);

    fn ask(&mut self, question: &str, default: Option<&str>) -> Result<String> {
        self.ask_with(question, default, None)
    }

    fn ask_hidden(&mut self, question: &str) -> Result<String> {
        self.ask_hidden_with(question, None)
    }

    /// Writes `message` when the current verbosity is at least `verbosity`.
    fn line(&mut self, message: &str, style: Option<MessageStyle>, verbosity: Verbosity) {
        if verbosity <= self.verbosity() {
            self.write_line(message, style);
        }
    }

    fn info(&mut self, message: &str) {
        self.line(message, Some(MessageStyle::Info), Verbosity::Normal);
    }

    fn comment(&mut self, message: &str) {
        self.line(message, Some(MessageStyle::Comment), Verbosity::Normal);
    }

    fn question(&mut self, message: &str) {
        self.line(message, Some(MessageStyle::Question), Verbosity::Normal);
    }

    /// Writes an error block. Errors are shown even when quiet.
    fn error(&mut self, message: &str) {
        self.block("[ERROR]", message, MessageStyle::Error, Verbosity::Quiet);
    }

    fn warning(&mut self, message: &str) {
        self.block("[WARNING]", message, MessageStyle::Warning, Verbosity::Normal);
    }

    fn success(&mut self, message: &str) {
        self.block("[OK]", message, MessageStyle::Success, Verbosity::Normal);
    }

    fn note(&mut self, message: &str) {
        self.block("! [NOTE]", message, MessageStyle::Note, Verbosity::Normal);
    }

    fn caution(&mut self, message: &str) {
        self.block("! [CAUTION]", message, MessageStyle::Caution, Verbosity::Normal);
    }

    /// Writes `label message` as one styled line.
    fn block(&mut self, label: &str, message: &str, style: MessageStyle, verbosity: Verbosity) {
        self.line(&format!(" {label} {message}"), Some(style), verbosity);
    }

    /// Writes a title underlined with `=`.
    fn title(&mut self, message: &str) {
        let underline = "=".repeat(message.chars().count());
        self.line(message, Some(MessageStyle::Title), Verbosity::Normal);
        self.line(&underline, Some(MessageStyle::Title), Verbosity::Normal);
    }

    /// Writes a section header underlined with `-`.
    fn section(&mut self, message: &str) {
        let underline = "-".repeat(message.chars().count());
        self.line(message, Some(MessageStyle::Section), Verbosity::Normal);
        self.line(&underline, Some(MessageStyle::Section), Verbosity::Normal);
    }

    /// Writes indented plain text.
    fn text(&mut self, message: &str) {
        self.line(&format!(" {message}"), None, Verbosity::Normal);
    }

    /// Writes a bulleted list.
    fn listing(&mut self, items: &[&str]) {
        for item in items {
            self.line(&format!(" * {item}"), None, Verbosity::Normal);
        }
    }

    /// Writes a table with a header row.
    fn table(&mut self, headers: &[&str], rows: &[Vec<String>]) {
        let mut table = self.new_table();
        table.set_header(headers.to_vec());
        for row in rows {
            table.add_row(row.clone());
        }
        self.write_table(&table);
    }

    /// Writes a table whose headers form the first column.
    fn horizontal_table(&mut self, headers: &[&str], rows: &[Vec<String>]) {
        let mut table = self.new_table();
        for (index, header) in headers.iter().enumerate() {
            let mut cells = vec![header.to_string()];
            cells.extend(rows.iter().map(|row| row.get(index).cloned().unwrap_or_default()));
            table.add_row(cells);
        }
        self.write_table(&table);
    }

    /// Writes `term: definition` pairs as a two-column table.
    fn definition_list(&mut self, items: &[(&str, &str)]) {
        let mut table = self.new_table();
        for (term, definition) in items {
            table.add_row(vec![term.to_string(), definition.to_string()]);
        }
        self.write_table(&table);
    }

    /// Writes `count` empty lines.
    fn new_line(&mut self, count: usize) {
        for _ in 0..count {
            self.line("", None, Verbosity::Normal);
        }
    }

    #[doc(hidden)]
    fn new_table(&self) -> Table {
        let mut table = Table::new();
        if self.is_decorated() {
            table.load_preset(presets::UTF8_FULL);
        } else {
            table.load_preset(presets::ASCII_FULL);
        }
        table
    }

    #[doc(hidden)]
    fn write_table(&mut self, table: &Table) {
        for line in table.to_string().lines() {
            self.line(line, None, Verbosity::Normal);
        }
    }
}

/// Answer used when prompting is disabled: the default, checked against
/// `validator`.
fn unattended_answer(default: Option<&str>, validator: Option<Validator<'_>>) -> Result<String> {
    let answer = default.unwrap_or_default().to_string();
    match validator {
        Some(validate) => validate(&answer)
            .map(|()| answer)
            .map_err(ConsoleError::InvalidAnswer),
        None => Ok(answer),
    }
}

/// Values of `choices` at the in-range `indexes`.
fn selected(choices: &[&str], indexes: &[usize]) -> Vec<String> {
    indexes
        .iter()
        .filter_map(|index| choices.get(*index))
        .map(|choice| choice.to_string())
        .collect()
}
