use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::Prompter;

/// Scripted prompter for testing; records every question asked.
#[derive(Default)]
pub struct MockPrompter {
    answers: VecDeque<bool>,
    pub questions: Vec<String>,
    should_fail: bool,
}

impl MockPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue answers returned in order; an exhausted queue answers `false`.
    pub fn with_answers(answers: &[bool]) -> Self {
        Self { answers: answers.iter().copied().collect(), ..Self::default() }
    }

    pub fn failing() -> Self {
        Self { should_fail: true, ..Self::default() }
    }
}

impl Prompter for MockPrompter {
    fn confirm(&mut self, question: &str) -> Result<bool, AppError> {
        self.questions.push(question.to_string());
        if self.should_fail {
            return Err(AppError::Prompt("Mock prompter error".to_string()));
        }
        Ok(self.answers.pop_front().unwrap_or(false))
    }
}
