//! Browser session: the state behind the interactive shell.
//!
//! Holds the current directory, the last listing (row index to path), the
//! clipboard, and a status line. Each public method is one user action.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::app::AppContext;
use crate::domain::{AppError, ClipMode, Clipboard, ClipboardEntry, Listing, Target};
use crate::ports::{Launcher, Prompter};
use crate::services::{path_ops, read_listing};

/// Whether a confirmable action went ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Done,
    Cancelled,
}

pub struct Session<P: Prompter, L: Launcher> {
    ctx: AppContext<P, L>,
    current_dir: PathBuf,
    listing: Listing,
    clipboard: Clipboard,
    status: String,
}

impl<P: Prompter, L: Launcher> Session<P, L> {
    /// Open a session showing `start_dir`.
    pub fn open(ctx: AppContext<P, L>, start_dir: &Path) -> Result<Self, AppError> {
        let current_dir = canonical_dir(start_dir)?;
        let listing = read_listing(&current_dir, ctx.config().browser.show_hidden)?;
        let status = current_dir.display().to_string();
        Ok(Self { ctx, current_dir, listing, clipboard: Clipboard::new(), status })
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn context(&self) -> &AppContext<P, L> {
        &self.ctx
    }

    /// Change directory. Relative paths resolve against the current one.
    ///
    /// On failure the session keeps showing the previous directory.
    pub fn navigate(&mut self, path: &Path) -> Result<(), AppError> {
        let target = canonical_dir(&self.current_dir.join(path))?;
        let listing = read_listing(&target, self.show_hidden())?;
        log::debug!("navigated to {}", target.display());
        self.current_dir = target;
        self.listing = listing;
        self.status = self.current_dir.display().to_string();
        Ok(())
    }

    /// Re-enumerate the current directory.
    pub fn refresh(&mut self) -> Result<(), AppError> {
        self.listing = read_listing(&self.current_dir, self.show_hidden())?;
        Ok(())
    }

    /// Go to the parent directory; no-op at a filesystem root.
    pub fn up(&mut self) -> Result<(), AppError> {
        match self.current_dir.parent().map(Path::to_path_buf) {
            Some(parent) => self.navigate(&parent),
            None => Ok(()),
        }
    }

    /// Enter a directory or hand a file to the launcher.
    pub fn activate(&mut self, target: &Target) -> Result<(), AppError> {
        let path = self.resolve(target, "open", true)?;
        if path_ops::is_dir(&path)? {
            return self.navigate(&path);
        }
        self.ctx.launcher().open(&path)?;
        log::info!("opened {}", path.display());
        self.status = format!("Opened: {}", path.display());
        Ok(())
    }

    pub fn new_dir(&mut self, name: &str) -> Result<(), AppError> {
        validate_name(name)?;
        let path = self.current_dir.join(name);
        path_ops::create_dir(&path)?;
        log::info!("created directory {}", path.display());
        self.status = format!("Created directory: {}", path.display());
        self.refresh()
    }

    /// Rename an entry within its own directory.
    pub fn rename(&mut self, target: &Target, new_name: &str) -> Result<ActionOutcome, AppError> {
        let source = self.resolve(target, "rename", false)?;
        validate_name(new_name)?;
        let parent = source.parent().unwrap_or(&self.current_dir).to_path_buf();
        let dest = parent.join(new_name);

        let Some(overwrite) = self.overwrite_decision(&dest)? else {
            self.status = "Rename cancelled.".to_string();
            return Ok(ActionOutcome::Cancelled);
        };
        path_ops::rename_path(&source, &dest, overwrite)?;
        log::info!("renamed {} -> {}", source.display(), dest.display());
        self.status = format!("Renamed to: {}", dest.display());
        self.refresh()?;
        Ok(ActionOutcome::Done)
    }

    pub fn delete(&mut self, target: &Target) -> Result<ActionOutcome, AppError> {
        let path = self.resolve(target, "delete", false)?;
        if self.ctx.config().confirm.delete {
            let question = format!("Are you sure you want to delete:\n{}?", path.display());
            if !self.ctx.prompter_mut().confirm(&question)? {
                self.status = "Delete cancelled.".to_string();
                return Ok(ActionOutcome::Cancelled);
            }
        }
        path_ops::delete_path(&path)?;
        log::info!("deleted {}", path.display());
        self.status = format!("Deleted: {}", path.display());
        self.refresh()?;
        Ok(ActionOutcome::Done)
    }

    pub fn copy(&mut self, target: &Target) -> Result<(), AppError> {
        self.mark(target, ClipMode::Copy)
    }

    pub fn cut(&mut self, target: &Target) -> Result<(), AppError> {
        self.mark(target, ClipMode::Cut)
    }

    /// Copy or move the marked entry into the current directory.
    ///
    /// The clipboard is cleared only when the paste succeeds.
    pub fn paste(&mut self) -> Result<ActionOutcome, AppError> {
        let Some(entry) = self.clipboard.peek().cloned() else {
            return Err(AppError::ClipboardEmpty);
        };
        let Some(name) = entry.path().file_name() else {
            return Err(AppError::InvalidName(entry.path().display().to_string()));
        };
        let dest = self.current_dir.join(name);

        let Some(overwrite) = self.overwrite_decision(&dest)? else {
            self.status = "Paste cancelled.".to_string();
            return Ok(ActionOutcome::Cancelled);
        };
        match entry.mode() {
            ClipMode::Copy => path_ops::copy_path(entry.path(), &dest, overwrite)?,
            ClipMode::Cut => path_ops::move_path(entry.path(), &dest, overwrite)?,
        }
        log::info!("pasted ({}) {} -> {}", entry.mode(), entry.path().display(), dest.display());

        self.clipboard.clear();
        self.status = "Paste complete. Clipboard is now empty.".to_string();
        self.refresh()?;
        Ok(ActionOutcome::Done)
    }

    fn mark(&mut self, target: &Target, mode: ClipMode) -> Result<(), AppError> {
        let action = match mode {
            ClipMode::Copy => "copy",
            ClipMode::Cut => "cut",
        };
        let path = self.resolve(target, action, false)?;
        if let Some(previous) = self.clipboard.set(ClipboardEntry::new(path.clone(), mode)) {
            log::debug!("discarded pending {} of {}", previous.mode(), previous.path().display());
        }
        self.status = match mode {
            ClipMode::Copy => format!("Marked for copy: {}", path.display()),
            ClipMode::Cut => format!("Cut: {}", path.display()),
        };
        Ok(())
    }

    /// `Some(overwrite)` to proceed, `None` when the user declined.
    fn overwrite_decision(&mut self, dest: &Path) -> Result<Option<bool>, AppError> {
        if !path_ops::is_present(dest)? {
            return Ok(Some(false));
        }
        if self.ctx.config().confirm.overwrite {
            let name =
                dest.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
            let question = format!(
                "The file or directory \"{}\" already exists. Do you want to overwrite it?",
                name
            );
            if !self.ctx.prompter_mut().confirm(&question)? {
                return Ok(None);
            }
        }
        Ok(Some(true))
    }

    /// Resolve a row index or entry name. The `..` row is only accepted
    /// when `allow_parent` is set.
    fn resolve(
        &self,
        target: &Target,
        action: &str,
        allow_parent: bool,
    ) -> Result<PathBuf, AppError> {
        let no_selection = || AppError::NoSelection(action.to_string());
        match target {
            Target::Index(index) => {
                let row = self.listing.row(*index).ok_or_else(no_selection)?;
                if row.is_parent && !allow_parent {
                    return Err(no_selection());
                }
                Ok(row.path.clone())
            }
            Target::Name(name) if name == ".." => {
                let parent = self.current_dir.parent().filter(|_| allow_parent);
                parent.map(Path::to_path_buf).ok_or_else(no_selection)
            }
            Target::Name(name) => {
                validate_name(name).map_err(|_| no_selection())?;
                let path = self.current_dir.join(name);
                if fs::symlink_metadata(&path).is_err() {
                    return Err(no_selection());
                }
                Ok(path)
            }
        }
    }

    fn show_hidden(&self) -> bool {
        self.ctx.config().browser.show_hidden
    }
}

fn canonical_dir(path: &Path) -> Result<PathBuf, AppError> {
    if !path_ops::is_dir(path)? {
        return Err(AppError::InvalidDirectory(path.to_path_buf()));
    }
    Ok(fs::canonicalize(path)?)
}

/// A name must be exactly one normal path component.
fn validate_name(name: &str) -> Result<(), AppError> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(part)), None) if part == name => Ok(()),
        _ => Err(AppError::InvalidName(name.to_string())),
    }
}
