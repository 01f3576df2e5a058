use std::fmt;
use std::path::{Path, PathBuf};

/// What a pending paste will do with the marked path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipMode {
    Copy,
    Cut,
}

impl fmt::Display for ClipMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipMode::Copy => f.write_str("copy"),
            ClipMode::Cut => f.write_str("cut"),
        }
    }
}

/// A single marked path plus the paste mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardEntry {
    path: PathBuf,
    mode: ClipMode,
}

impl ClipboardEntry {
    pub fn new(path: impl Into<PathBuf>, mode: ClipMode) -> Self {
        Self { path: path.into(), mode }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> ClipMode {
        self.mode
    }
}

/// Session-owned clipboard holding at most one pending copy or cut.
///
/// Setting a new entry replaces the old one silently. The owner clears it
/// after a successful paste; a failed or cancelled paste leaves it in place.
#[derive(Debug, Default, Clone)]
pub struct Clipboard {
    entry: Option<ClipboardEntry>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `entry` for the next paste, returning whatever was pending.
    pub fn set(&mut self, entry: ClipboardEntry) -> Option<ClipboardEntry> {
        self.entry.replace(entry)
    }

    pub fn peek(&self) -> Option<&ClipboardEntry> {
        self.entry.as_ref()
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }
}
