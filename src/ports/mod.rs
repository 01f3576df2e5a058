mod launcher;
mod prompter;

pub use launcher::Launcher;
pub use prompter::Prompter;
