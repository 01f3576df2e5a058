use dialoguer::Confirm;

use crate::domain::AppError;
use crate::ports::Prompter;

/// Terminal prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&mut self, question: &str) -> Result<bool, AppError> {
        Confirm::new()
            .with_prompt(question)
            .default(false)
            .interact()
            .map_err(|err| AppError::Prompt(err.to_string()))
    }
}

/// Prompter that answers every question the same way (`--yes`).
#[derive(Debug, Clone, Copy)]
pub struct AutoPrompter {
    answer: bool,
}

impl AutoPrompter {
    pub fn new(answer: bool) -> Self {
        Self { answer }
    }
}

impl Prompter for AutoPrompter {
    fn confirm(&mut self, question: &str) -> Result<bool, AppError> {
        log::debug!("auto-answering {:?} with {}", question, self.answer);
        Ok(self.answer)
    }
}
