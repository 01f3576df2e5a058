pub mod directory_reader;
mod launcher_system;
pub mod path_ops;
mod prompter_dialoguer;

pub use directory_reader::read_listing;
pub use launcher_system::SystemLauncher;
pub use prompter_dialoguer::{AutoPrompter, DialoguerPrompter};
