use std::path::Path;

use crate::domain::AppError;

/// Port for handing a file to the desktop's default application.
pub trait Launcher {
    fn open(&self, path: &Path) -> Result<(), AppError>;
}
