use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::Launcher;

/// Mock launcher for testing.
#[derive(Default)]
pub struct MockLauncher {
    pub opened: RefCell<Vec<PathBuf>>,
    pub should_fail: RefCell<bool>,
}

impl MockLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.borrow_mut() = fail;
    }

    pub fn opened_paths(&self) -> Vec<PathBuf> {
        self.opened.borrow().clone()
    }
}

impl Launcher for MockLauncher {
    fn open(&self, path: &Path) -> Result<(), AppError> {
        if *self.should_fail.borrow() {
            return Err(AppError::Launch {
                path: path.to_path_buf(),
                details: "Mock launcher error".to_string(),
            });
        }
        self.opened.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}
