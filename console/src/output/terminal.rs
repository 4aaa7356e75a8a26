//! Styled terminal output adapter.

use console::Style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, MultiSelect, Password, Select};
use indicatif::{ProgressBar, ProgressStyle};

use super::{MessageStyle, Output, Validator, selected, unattended_answer};
use crate::error::{ConsoleError, Result};
use crate::verbosity::Verbosity;

/// Writes to the terminal with `console` styles, prompts through
/// `dialoguer` and reports progress with an `indicatif` bar.
///
/// Error lines go to stderr, everything else to stdout.
pub struct TerminalOutput {
    verbosity: Verbosity,
    decorated: bool,
    interactive: bool,
    theme: ColorfulTheme,
    progress: Option<ProgressBar>,
}

impl TerminalOutput {
    /// Creates a terminal output.
    pub fn new(verbosity: Verbosity, decorated: bool, interactive: bool) -> Self {
        Self {
            verbosity,
            decorated,
            interactive,
            theme: ColorfulTheme::default(),
            progress: None,
        }
    }

    fn style_for(style: MessageStyle) -> Style {
        let base = Style::new().force_styling(true);
        match style {
            MessageStyle::Info => base.green(),
            MessageStyle::Comment => base.yellow(),
            MessageStyle::Question => base.black().on_cyan(),
            MessageStyle::Error => base.white().on_red(),
            MessageStyle::Warning => base.black().on_yellow(),
            MessageStyle::Success => base.black().on_green(),
            MessageStyle::Note => base.yellow(),
            MessageStyle::Caution => base.white().on_red(),
            MessageStyle::Title => base.green().bold(),
            MessageStyle::Section => base.yellow().bold(),
        }
    }

    fn progress_style(max: u64) -> ProgressStyle {
        if max == 0 {
            return ProgressStyle::default_spinner();
        }
        ProgressStyle::default_bar()
            .template(" {pos}/{len} [{bar:28.green/white}] {percent:>3}% {elapsed_precise}")
            .map(|style| style.progress_chars("=> "))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new(Verbosity::Normal, true, true)
    }
}

impl Output for TerminalOutput {
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
        let rendered = match style {
            Some(style) if self.decorated => Self::style_for(style).apply_to(text).to_string(),
            _ => text.to_string(),
        };
        match (&self.progress, style) {
            (Some(bar), _) => bar.println(rendered),
            (None, Some(MessageStyle::Error)) => eprintln!("{rendered}"),
            (None, _) => println!("{rendered}"),
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
        let mut prompt = Input::<String>::with_theme(&self.theme)
            .with_prompt(question)
            .allow_empty(true);
        if let Some(default) = default {
            prompt = prompt.default(default.to_string());
        }
        if let Some(validate) = validator {
            prompt = prompt.validate_with(move |answer: &String| validate(answer.as_str()));
        }
        Ok(prompt.interact_text()?)
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
            let answer = Password::with_theme(&self.theme)
                .with_prompt(question)
                .allow_empty_password(true)
                .interact()?;
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
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(question)
            .default(default)
            .interact()?)
    }

    fn choice(
        &mut self,
        question: &str,
        choices: &[&str],
        default: Option<usize>,
    ) -> Result<String> {
        if choices.is_empty() {
            return Err(ConsoleError::MissingAnswer(question.to_string()));
        }
        let fallback = default.filter(|index| *index < choices.len());
        if !self.interactive {
            return fallback
                .map(|index| choices[index].to_string())
                .ok_or_else(|| ConsoleError::MissingAnswer(question.to_string()));
        }
        let selection = Select::with_theme(&self.theme)
            .with_prompt(question)
            .items(choices)
            .default(fallback.unwrap_or(0))
            .interact()?;
        Ok(choices[selection].to_string())
    }

    fn multi_choice(
        &mut self,
        question: &str,
        choices: &[&str],
        defaults: &[usize],
    ) -> Result<Vec<String>> {
        if !self.interactive || choices.is_empty() {
            return Ok(selected(choices, defaults));
        }
        let checked: Vec<bool> = (0..choices.len()).map(|i| defaults.contains(&i)).collect();
        let selection = MultiSelect::with_theme(&self.theme)
            .with_prompt(question)
            .items(choices)
            .defaults(&checked)
            .interact()?;
        Ok(selected(choices, &selection))
    }

    fn progress_start(&mut self, max: u64) {
        if self.verbosity == Verbosity::Quiet {
            return;
        }
        let bar = if max == 0 {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::new(max)
        };
        bar.set_style(Self::progress_style(max));
        self.progress = Some(bar);
    }

    fn progress_advance(&mut self, step: u64) {
        if let Some(bar) = &self.progress {
            bar.inc(step);
        }
    }

    fn progress_finish(&mut self) {
        if let Some(bar) = self.progress.take() {
            if let Some(len) = bar.length() {
                bar.set_position(len);
            }
            bar.finish();
        }
    }
}
