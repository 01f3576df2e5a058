use crate::domain::AppError;

/// Port for yes/no questions asked before destructive actions.
pub trait Prompter {
    /// Ask `question`; `true` means the user agreed.
    fn confirm(&mut self, question: &str) -> Result<bool, AppError>;
}

impl<P: Prompter + ?Sized> Prompter for Box<P> {
    fn confirm(&mut self, question: &str) -> Result<bool, AppError> {
        (**self).confirm(question)
    }
}
