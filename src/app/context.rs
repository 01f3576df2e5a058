use crate::domain::FilenavConfig;
use crate::ports::{Launcher, Prompter};

/// Application context holding dependencies for session actions.
pub struct AppContext<P: Prompter, L: Launcher> {
    config: FilenavConfig,
    prompter: P,
    launcher: L,
}

impl<P: Prompter, L: Launcher> AppContext<P, L> {
    /// Create a new application context.
    pub fn new(config: FilenavConfig, prompter: P, launcher: L) -> Self {
        Self { config, prompter, launcher }
    }

    pub fn config(&self) -> &FilenavConfig {
        &self.config
    }

    /// Get a reference to the prompter.
    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Get a mutable reference to the prompter.
    pub fn prompter_mut(&mut self) -> &mut P {
        &mut self.prompter
    }

    /// Get a reference to the launcher.
    pub fn launcher(&self) -> &L {
        &self.launcher
    }
}
