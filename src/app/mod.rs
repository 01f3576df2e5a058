pub mod cli;
pub mod config;
mod context;
pub mod session;

pub use context::AppContext;
pub use session::{ActionOutcome, Session};
