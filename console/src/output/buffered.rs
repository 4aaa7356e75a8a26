//! In-memory output adapter.

use std::collections::VecDeque;

use super::{MessageStyle, Output, Validator, selected, unattended_answer};
use crate::error::{ConsoleError, Result};
use crate::verbosity::Verbosity;

/// Captures output as text and answers prompts from a script.
///
/// Undecorated output is plain text. Decorated output wraps styled lines in
/// `<tag>...</tag>` markup so tests can assert on styles without terminal
/// escape codes.
///
/// # Examples
///
/// ```
/// use signature_console::{BufferedOutput, Output};
///
/// let mut output = BufferedOutput::new().with_answers(["alice", "y"]);
/// assert_eq!(output.ask("Name?", None).unwrap(), "alice");
/// assert!(output.confirm("Continue?", false).unwrap());
///
/// output.info("Hello alice");
/// assert!(output.contents().ends_with("Hello alice\n"));
/// ```
#[derive(Debug, Default)]
pub struct BufferedOutput {
    buffer: String,
    answers: VecDeque<String>,
    verbosity: Verbosity,
    decorated: bool,
    interactive: bool,
    progress: Option<Progress>,
}

#[derive(Debug, Clone, Copy)]
struct Progress {
    current: u64,
    max: u64,
}

impl BufferedOutput {
    /// Creates an undecorated, interactive buffer at normal verbosity.
    pub fn new() -> Self {
        Self {
            interactive: true,
            ..Default::default()
        }
    }

    /// Sets the verbosity.
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Renders styles as `<tag>` markup.
    pub fn decorated(mut self, decorated: bool) -> Self {
        self.decorated = decorated;
        self
    }

    /// Queues scripted prompt answers, consumed in order.
    pub fn with_answers<I, S>(mut self, answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.answers.extend(answers.into_iter().map(Into::into));
        self
    }

    /// Queues one more prompt answer.
    pub fn push_answer(&mut self, answer: &str) {
        self.answers.push_back(answer.to_string());
    }

    /// Returns everything written so far.
    pub fn contents(&self) -> &str {
        &self.buffer
    }

    /// Returns and clears everything written so far.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }

    fn next_answer(&mut self, question: &str) -> Result<String> {
        let answer = self.pop_answer(question)?;
        self.buffer.push_str(&format!(" {question}\n > {answer}\n"));
        Ok(answer)
    }

    fn next_hidden_answer(&mut self, question: &str) -> Result<String> {
        let answer = self.pop_answer(question)?;
        self.buffer.push_str(&format!(" {question}\n > \n"));
        Ok(answer)
    }

    fn pop_answer(&mut self, question: &str) -> Result<String> {
        self.answers
            .pop_front()
            .ok_or_else(|| ConsoleError::MissingAnswer(question.to_string()))
    }

    fn write_progress(&mut self) {
        if let Some(progress) = self.progress {
            let line = if progress.max == 0 {
                format!(" {}", progress.current)
            } else {
                format!(" {}/{}", progress.current, progress.max)
            };
            self.line(&line, None, Verbosity::Normal);
        }
    }
}

impl Output for BufferedOutput {
    fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.verbosity = verbosity;
    }

    fn is_decorated(&self) -> bool {
        self.decorated
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    fn write_line(&mut self, text: &str, style: Option<MessageStyle>) {
        match style {
            Some(style) if self.decorated => {
                let tag = style.tag();
                self.buffer.push_str(&format!("<{tag}>{text}</{tag}>\n"));
            }
            _ => {
                self.buffer.push_str(text);
                self.buffer.push('\n');
            }
        }
    }

    fn ask_with(
        &mut self,
        question: &str,
        default: Option<&str>,
        validator: Option<Validator<'_>>,
    ) -> Result<String> {
        if !self.interactive {
            return unattended_answer(default, validator);
        }
        loop {
            let answer = self.next_answer(question)?;
            let answer = match (answer.is_empty(), default) {
                (true, Some(default)) => default.to_string(),
                _ => answer,
            };
            match validator.map_or(Ok(()), |validate| validate(&answer)) {
                Ok(()) => return Ok(answer),
                Err(message) => self.error(&message),
            }
        }
    }

    fn ask_hidden_with(
        &mut self,
        question: &str,
        validator: Option<Validator<'_>>,
    ) -> Result<String> {
        if !self.interactive {
            return unattended_answer(None, validator);
        }
        loop {
            let answer = self.next_hidden_answer(question)?;
            match validator.map_or(Ok(()), |validate| validate(&answer)) {
                Ok(()) => return Ok(answer),
                Err(message) => self.error(&message),
            }
        }
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        if !self.interactive {
            return Ok(default);
        }
        let answer = self.next_answer(question)?;
        Ok(confirmation(&answer, default))
    }

    fn choice(
        &mut self,
        question: &str,
        choices: &[&str],
        default: Option<usize>,
    ) -> Result<String> {
        let fallback = default.and_then(|index| choices.get(index)).copied();
        if !self.interactive {
            return fallback
                .map(String::from)
                .ok_or_else(|| ConsoleError::MissingAnswer(question.to_string()));
        }

        let answer = self.next_answer(question)?;
        if answer.is_empty() {
            if let Some(choice) = fallback {
                return Ok(choice.to_string());
            }
        }
        match_choice(choices, &answer)
            .map(str::to_string)
            .ok_or(ConsoleError::InvalidChoice { answer })
    }

    fn multi_choice(
        &mut self,
        question: &str,
        choices: &[&str],
        defaults: &[usize],
    ) -> Result<Vec<String>> {
        if !self.interactive {
            return Ok(selected(choices, defaults));
        }

        let answer = self.next_answer(question)?;
        if answer.trim().is_empty() {
            return Ok(selected(choices, defaults));
        }
        let mut picked: Vec<String> = Vec::new();
        for token in answer.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let choice = match_choice(choices, token).ok_or_else(|| ConsoleError::InvalidChoice {
                answer: token.to_string(),
            })?;
            if !picked.iter().any(|p| p == choice) {
                picked.push(choice.to_string());
            }
        }
        Ok(picked)
    }

    fn progress_start(&mut self, max: u64) {
        self.progress = Some(Progress { current: 0, max });
        self.write_progress();
    }

    fn progress_advance(&mut self, step: u64) {
        if let Some(progress) = self.progress.as_mut() {
            progress.current += step;
        }
        self.write_progress();
    }

    fn progress_finish(&mut self) {
        if let Some(progress) = self.progress.as_mut() {
            if progress.max > 0 {
                progress.current = progress.max;
            }
        }
        self.write_progress();
        self.progress = None;
    }
}

/// Finds a choice by value, then by index.
fn match_choice<'c>(choices: &[&'c str], answer: &str) -> Option<&'c str> {
    choices.iter().copied().find(|c| *c == answer).or_else(|| {
        answer
            .parse::<usize>()
            .ok()
            .and_then(|index| choices.get(index).copied())
    })
}

/// Interprets a yes/no answer: anything starting with `y` is yes. An empty
/// answer takes the default; with a `true` default, any other answer is no.
pub(super) fn confirmation(answer: &str, default: bool) -> bool {
    let answer = answer.trim();
    let is_yes = answer
        .chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&'y'));
    if default {
        answer.is_empty() || is_yes
    } else {
        is_yes
    }
}
