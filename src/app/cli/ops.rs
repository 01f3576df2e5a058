//! One-shot subcommands: each maps to a single path operation.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, FilenavConfig};
use crate::ports::Prompter;
use crate::services::{path_ops, read_listing};

pub fn run_ls(config: &FilenavConfig, dir: &Path, json: bool) -> Result<(), AppError> {
    if !path_ops::is_dir(dir)? {
        return Err(AppError::InvalidDirectory(dir.to_path_buf()));
    }
    let dir = fs::canonicalize(dir)?;
    let listing = read_listing(&dir, config.browser.show_hidden)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&listing.rows)?);
    } else {
        print!("{}", listing.render());
    }
    Ok(())
}

pub fn run_mkdir(path: &Path) -> Result<(), AppError> {
    path_ops::create_dir(path)?;
    println!("✅ Created directory {}", path.display());
    Ok(())
}

pub fn run_rename(old: &Path, new: &Path, force: bool) -> Result<(), AppError> {
    path_ops::rename_path(old, new, force)?;
    println!("✅ Renamed {} to {}", old.display(), new.display());
    Ok(())
}

pub fn run_rm<P: Prompter>(
    config: &FilenavConfig,
    prompter: &mut P,
    path: &Path,
) -> Result<(), AppError> {
    if config.confirm.delete {
        let question = format!("Are you sure you want to delete:\n{}?", path.display());
        if !prompter.confirm(&question)? {
            println!("Delete cancelled.");
            return Ok(());
        }
    }
    path_ops::delete_path(path)?;
    println!("✅ Deleted {}", path.display());
    Ok(())
}

pub fn run_cp(src: &Path, dest: &Path, force: bool) -> Result<(), AppError> {
    path_ops::copy_path(src, dest, force)?;
    println!("✅ Copied {} to {}", src.display(), dest.display());
    Ok(())
}

pub fn run_mv(src: &Path, dest: &Path, force: bool) -> Result<(), AppError> {
    path_ops::move_path(src, dest, force)?;
    println!("✅ Moved {} to {}", src.display(), dest.display());
    Ok(())
}
