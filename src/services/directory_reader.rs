use std::fs::{self, DirEntry};
use std::path::Path;

use chrono::{DateTime, Local};

use crate::domain::{AppError, EntryKind, Listing, ListingRow};

/// Enumerate one level of `dir`, non-recursively.
///
/// Entries whose type or metadata cannot be read still get a row with the
/// unknown columns left empty.
pub fn read_listing(dir: &Path, show_hidden: bool) -> Result<Listing, AppError> {
    let listing_error = |source| AppError::Listing { path: dir.to_path_buf(), source };

    let mut rows = Vec::new();
    for entry in fs::read_dir(dir).map_err(listing_error)? {
        let entry = entry.map_err(listing_error)?;
        let row = read_row(&entry);
        if !show_hidden && row.is_hidden() {
            continue;
        }
        rows.push(row);
    }

    Ok(Listing::new(dir, rows))
}

fn read_row(entry: &DirEntry) -> ListingRow {
    let path = entry.path();
    let name = entry.file_name().to_string_lossy().into_owned();
    let mut row = ListingRow {
        name,
        path,
        kind: EntryKind::Unknown,
        size: None,
        modified: None,
        is_parent: false,
    };

    // fs::metadata follows links, so a link to a directory lists as Dir.
    let meta = match fs::metadata(&row.path).or_else(|_| entry.metadata()) {
        Ok(meta) => meta,
        Err(err) => {
            log::warn!("cannot read metadata for {}: {}", row.path.display(), err);
            return row;
        }
    };

    if meta.is_dir() {
        row.kind = EntryKind::Dir;
    } else {
        row.kind = EntryKind::File;
        row.size = Some(meta.len());
    }
    row.modified = meta.modified().ok().map(DateTime::<Local>::from);
    row
}
