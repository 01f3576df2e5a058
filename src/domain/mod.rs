pub mod clipboard;
pub mod configuration;
pub mod error;
pub mod listing;
pub mod shell_command;

pub use clipboard::{ClipMode, Clipboard, ClipboardEntry};
pub use configuration::{BrowserConfig, ConfirmConfig, FilenavConfig, OpenConfig};
pub use error::{AppError, PathErrorKind, PathOpError};
pub use listing::{EntryKind, Listing, ListingRow};
pub use shell_command::{ShellCommand, Target};
