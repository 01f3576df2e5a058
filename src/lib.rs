//! filenav: browse a directory and copy, move, rename, or delete its entries.
//!
//! The path operations in [`services::path_ops`] are usable on their own;
//! [`app::Session`] adds navigation, a clipboard, and confirmation prompts.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::{ActionOutcome, AppContext, Session};
pub use domain::{
    AppError, ClipMode, Clipboard, ClipboardEntry, FilenavConfig, Listing, PathErrorKind,
    PathOpError, Target,
};
pub use services::path_ops;
