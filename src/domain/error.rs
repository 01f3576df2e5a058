use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

/// Coarse classification of a failed path operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathErrorKind {
    /// Target absent when presence was required.
    NotFound,
    /// Target present when absence or explicit overwrite was required.
    AlreadyExists,
    PermissionDenied,
    /// Rename across filesystems/volumes.
    CrossDevice,
    /// Any other OS-level failure (disk full, name too long, invalid input).
    Other,
}

impl PathErrorKind {
    pub fn from_io(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => PathErrorKind::NotFound,
            io::ErrorKind::AlreadyExists => PathErrorKind::AlreadyExists,
            io::ErrorKind::PermissionDenied => PathErrorKind::PermissionDenied,
            io::ErrorKind::CrossesDevices => PathErrorKind::CrossDevice,
            _ => PathErrorKind::Other,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PathErrorKind::NotFound => "not found",
            PathErrorKind::AlreadyExists => "already exists",
            PathErrorKind::PermissionDenied => "permission denied",
            PathErrorKind::CrossDevice => "cross-device",
            PathErrorKind::Other => "i/o failure",
        }
    }
}

impl fmt::Display for PathErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Failure of a single path operation.
///
/// Carries the classified kind, the path the failing step acted on, and the
/// OS error whose message is surfaced to the user unchanged.
#[derive(Debug, Error)]
#[error("{}: {source}", .path.display())]
pub struct PathOpError {
    kind: PathErrorKind,
    path: PathBuf,
    #[source]
    source: io::Error,
}

impl PathOpError {
    pub fn new(path: &Path, source: io::Error) -> Self {
        Self { kind: PathErrorKind::from_io(&source), path: path.to_path_buf(), source }
    }

    pub fn already_exists(path: &Path) -> Self {
        Self::new(
            path,
            io::Error::new(io::ErrorKind::AlreadyExists, "destination already exists"),
        )
    }

    pub fn not_found(path: &Path) -> Self {
        Self::new(path, io::Error::new(io::ErrorKind::NotFound, "no such file or directory"))
    }

    pub fn invalid(path: &Path, message: &str) -> Self {
        Self::new(path, io::Error::new(io::ErrorKind::InvalidInput, message.to_string()))
    }

    pub fn kind(&self) -> PathErrorKind {
        self.kind
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn io_error(&self) -> &io::Error {
        &self.source
    }
}

/// Library-wide error type for filenav operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure outside a path operation.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A path operation failed.
    #[error(transparent)]
    PathOp(#[from] PathOpError),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration file parsed but holds an invalid value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Navigation target is missing or not a directory.
    #[error("Invalid directory:\n{}", .0.display())]
    InvalidDirectory(PathBuf),

    /// Listing a directory failed partway through.
    #[error("Failed to list directory:\n{}\n{source}", .path.display())]
    Listing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A row index or entry name did not resolve to a path.
    #[error("No file or directory selected to {0}.")]
    NoSelection(String),

    /// A new entry name is empty or contains a path separator.
    #[error("Invalid name '{0}': must be a single path component")]
    InvalidName(String),

    /// Paste was requested with nothing marked.
    #[error("Clipboard is empty.")]
    ClipboardEmpty,

    /// Interactive prompt failed (usually no terminal attached).
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Opening a file with the default application failed.
    #[error("Failed to open file:\n{}\n{details}", .path.display())]
    Launch { path: PathBuf, details: String },

    /// Browse-loop input could not be parsed.
    #[error("{0}")]
    Command(String),

    /// JSON rendering error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Structured kind of the underlying path failure, if this is one.
    pub fn path_kind(&self) -> Option<PathErrorKind> {
        match self {
            AppError::PathOp(err) => Some(err.kind()),
            _ => None,
        }
    }

    /// Provide an `io::ErrorKind` view for callers that report by kind.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) | AppError::Listing { source: err, .. } => err.kind(),
            AppError::PathOp(err) => err.io_error().kind(),
            AppError::Configuration(_)
            | AppError::InvalidConfig(_)
            | AppError::TomlParse(_)
            | AppError::Command(_)
            | AppError::InvalidName(_)
            | AppError::Json(_) => io::ErrorKind::InvalidInput,
            AppError::InvalidDirectory(_) | AppError::NoSelection(_) | AppError::ClipboardEmpty => {
                io::ErrorKind::NotFound
            }
            AppError::Prompt(_) | AppError::Launch { .. } => io::ErrorKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_common_io_kinds() {
        let cases = [
            (io::ErrorKind::NotFound, PathErrorKind::NotFound),
            (io::ErrorKind::AlreadyExists, PathErrorKind::AlreadyExists),
            (io::ErrorKind::PermissionDenied, PathErrorKind::PermissionDenied),
            (io::ErrorKind::CrossesDevices, PathErrorKind::CrossDevice),
            (io::ErrorKind::StorageFull, PathErrorKind::Other),
        ];
        for (io_kind, expected) in cases {
            assert_eq!(PathErrorKind::from_io(&io::Error::from(io_kind)), expected);
        }
    }

    #[test]
    fn path_op_error_message_names_path_and_cause() {
        let err = PathOpError::already_exists(Path::new("/tmp/a"));
        assert_eq!(err.kind(), PathErrorKind::AlreadyExists);
        assert_eq!(err.to_string(), "/tmp/a: destination already exists");
    }

    #[test]
    fn app_error_exposes_path_kind() {
        let err: AppError = PathOpError::not_found(Path::new("x")).into();
        assert_eq!(err.path_kind(), Some(PathErrorKind::NotFound));
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert_eq!(AppError::ClipboardEmpty.path_kind(), None);
    }
}
