//! Terminal prompter backed by dialoguer.

use console::Term;
use dialoguer::{Confirm, Input, MultiSelect, Select, theme::ColorfulTheme};

use wayfarer_core::{
    application::{ApplicationError, ports::Prompter},
    error::{WayfarerError, WayfarerResult},
};

/// Production prompter: dialoguer questions on the user's terminal.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
    term: Term,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            term: Term::stdout(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&self, message: &str, default: bool) -> WayfarerResult<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(default)
            .interact()
            .map_err(map_dialoguer_error)
    }

    fn input(
        &self,
        message: &str,
        default: Option<&str>,
        validate: &dyn Fn(&str) -> Result<(), String>,
    ) -> WayfarerResult<String> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .allow_empty(true)
            .validate_with(|value: &String| validate(value));
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        input.interact_text().map_err(map_dialoguer_error)
    }

    fn select(&self, message: &str, items: &[String], default: usize) -> WayfarerResult<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(items)
            .default(default)
            .interact()
            .map_err(map_dialoguer_error)
    }

    fn multi_select(&self, message: &str, items: &[String]) -> WayfarerResult<Vec<usize>> {
        MultiSelect::with_theme(&self.theme)
            .with_prompt(message)
            .items(items)
            .interact()
            .map_err(map_dialoguer_error)
    }

    fn report(&self, message: &str) {
        // Session output is cosmetic; a failed write must not kill the
        // session.
        let _ = self.term.write_line(message);
    }
}

fn map_dialoguer_error(e: dialoguer::Error) -> WayfarerError {
    match e {
        dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::Interrupted => {
            ApplicationError::PromptCancelled.into()
        }
        other => ApplicationError::PromptFailed {
            reason: other.to_string(),
        }
        .into(),
    }
}
