//! Filesystem path operations with a uniform overwrite and recursion policy.
//!
//! Every function reports failure as a [`PathOpError`] value. Nothing here
//! logs, retries, or swallows an error; callers decide what to show.
//!
//! Overwrite means "delete the destination, then write". A failure between
//! the two steps leaves the destination absent.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::PathOpError;

/// Whether `path` resolves to an existing file or directory.
///
/// Absence is `Ok(false)`; only unexpected OS failures are errors.
pub fn exists(path: &Path) -> Result<bool, PathOpError> {
    match fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(err) if is_absent(&err) => Ok(false),
        Err(err) => Err(PathOpError::new(path, err)),
    }
}

/// Whether an entry named `path` is present, without following a final
/// symlink. A dangling link counts as present.
pub fn is_present(path: &Path) -> Result<bool, PathOpError> {
    match fs::symlink_metadata(path) {
        Ok(_) => Ok(true),
        Err(err) if is_absent(&err) => Ok(false),
        Err(err) => Err(PathOpError::new(path, err)),
    }
}

/// Whether `path` exists and is a directory.
pub fn is_dir(path: &Path) -> Result<bool, PathOpError> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.is_dir()),
        Err(err) if is_absent(&err) => Ok(false),
        Err(err) => Err(PathOpError::new(path, err)),
    }
}

/// Create a single directory level. Parents are not created.
pub fn create_dir(path: &Path) -> Result<(), PathOpError> {
    fs::create_dir(path).map_err(|err| PathOpError::new(path, err))
}

/// Rename `old` to `new`.
///
/// An existing `new` is deleted first when `overwrite` is set; otherwise the
/// call fails with `AlreadyExists` and nothing is touched.
pub fn rename_path(old: &Path, new: &Path, overwrite: bool) -> Result<(), PathOpError> {
    require_source(old)?;
    reject_same_target(old, new)?;
    clear_destination(new, overwrite)?;
    fs::rename(old, new).map_err(|err| PathOpError::new(old, err))
}

/// Recursively delete `path`. An already-absent path is success.
pub fn delete_path(path: &Path) -> Result<(), PathOpError> {
    remove_if_exists(path)
}

/// Copy a file, or a directory tree, from `src` to `dest`.
pub fn copy_path(src: &Path, dest: &Path, overwrite: bool) -> Result<(), PathOpError> {
    require_source(src)?;
    reject_same_target(src, dest)?;

    let src_is_dir = is_dir(src)?;
    if src_is_dir && is_nested_in(src, dest)? {
        return Err(PathOpError::invalid(dest, "cannot copy a directory into itself"));
    }

    clear_destination(dest, overwrite)?;

    if src_is_dir {
        copy_tree(src, dest)
    } else {
        copy_file(src, dest)
    }
}

/// Move `src` to `dest` by renaming.
///
/// Only works within one filesystem; a cross-volume move fails with
/// `CrossDevice` and is not retried as copy plus delete.
pub fn move_path(src: &Path, dest: &Path, overwrite: bool) -> Result<(), PathOpError> {
    require_source(src)?;
    reject_same_target(src, dest)?;
    clear_destination(dest, overwrite)?;
    fs::rename(src, dest).map_err(|err| PathOpError::new(src, err))
}

fn remove_if_exists(path: &Path) -> Result<(), PathOpError> {
    // symlink_metadata so a link is removed rather than its target.
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(err) if is_absent(&err) => return Ok(()),
        Err(err) => return Err(PathOpError::new(path, err)),
    };

    let result =
        if meta.is_dir() { fs::remove_dir_all(path) } else { fs::remove_file(path) };
    match result {
        Ok(()) => Ok(()),
        Err(err) if is_absent(&err) => Ok(()),
        Err(err) => Err(PathOpError::new(path, err)),
    }
}

/// ENOENT, or ENOTDIR from a path running through a regular file.
fn is_absent(err: &io::Error) -> bool {
    matches!(err.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory)
}

fn require_source(src: &Path) -> Result<(), PathOpError> {
    if is_present(src)? { Ok(()) } else { Err(PathOpError::not_found(src)) }
}

fn clear_destination(dest: &Path, overwrite: bool) -> Result<(), PathOpError> {
    let present = is_present(dest)?;
    match (present, overwrite) {
        (false, _) => Ok(()),
        (true, true) => remove_if_exists(dest),
        (true, false) => Err(PathOpError::already_exists(dest)),
    }
}

fn reject_same_target(src: &Path, dest: &Path) -> Result<(), PathOpError> {
    if let (Ok(a), Ok(b)) = (fs::canonicalize(src), fs::canonicalize(dest))
        && a == b
    {
        return Err(PathOpError::invalid(dest, "source and destination are the same"));
    }
    Ok(())
}

/// Whether `dest` would land inside the directory `src`.
fn is_nested_in(src: &Path, dest: &Path) -> Result<bool, PathOpError> {
    let src = fs::canonicalize(src).map_err(|err| PathOpError::new(src, err))?;
    let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) else {
        let cwd = std::env::current_dir().map_err(|err| PathOpError::new(dest, err))?;
        return Ok(cwd.starts_with(&src));
    };
    match fs::canonicalize(parent) {
        Ok(parent) => Ok(parent.starts_with(&src)),
        // Missing parent: the copy itself will report it.
        Err(_) => Ok(false),
    }
}

fn copy_file(src: &Path, dest: &Path) -> Result<(), PathOpError> {
    fs::copy(src, dest).map(|_| ()).map_err(|err| PathOpError::new(dest, err))
}

fn copy_tree(src: &Path, dest: &Path) -> Result<(), PathOpError> {
    fs::create_dir(dest).map_err(|err| PathOpError::new(dest, err))?;

    let entries = fs::read_dir(src).map_err(|err| PathOpError::new(src, err))?;
    for entry in entries {
        let entry = entry.map_err(|err| PathOpError::new(src, err))?;
        let from = entry.path();
        let to = dest.join(entry.file_name());
        let file_type = entry.file_type().map_err(|err| PathOpError::new(&from, err))?;

        if file_type.is_symlink() {
            copy_symlink(&from, &to)?;
        } else if file_type.is_dir() {
            copy_tree(&from, &to)?;
        } else {
            copy_file(&from, &to)?;
        }
    }
    Ok(())
}

#[cfg(unix)]
fn copy_symlink(from: &Path, to: &Path) -> Result<(), PathOpError> {
    let target = fs::read_link(from).map_err(|err| PathOpError::new(from, err))?;
    std::os::unix::fs::symlink(target, to).map_err(|err| PathOpError::new(to, err))
}

#[cfg(not(unix))]
fn copy_symlink(from: &Path, to: &Path) -> Result<(), PathOpError> {
    if is_dir(from)? { copy_tree(from, to) } else { copy_file(from, to) }
}
