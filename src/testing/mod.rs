mod mock_launcher;
mod mock_prompter;

pub use mock_launcher::MockLauncher;
pub use mock_prompter::MockPrompter;
