//! Directory listing rows and their column formatting.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::{Serialize, Serializer};

/// Display format for the modification column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Name shown for the parent-directory row.
pub const PARENT_ROW_NAME: &str = "..";

const UNKNOWN: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Dir,
    File,
    /// The entry type could not be determined.
    Unknown,
}

impl EntryKind {
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Dir => "Dir",
            EntryKind::File => "File",
            EntryKind::Unknown => UNKNOWN,
        }
    }
}

/// One row of a directory listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingRow {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
    /// Byte size for files; `None` for directories or when unreadable.
    pub size: Option<u64>,
    #[serde(serialize_with = "serialize_timestamp")]
    pub modified: Option<DateTime<Local>>,
    #[serde(skip)]
    pub is_parent: bool,
}

impl ListingRow {
    pub fn parent(path: PathBuf) -> Self {
        Self {
            name: PARENT_ROW_NAME.to_string(),
            path,
            kind: EntryKind::Dir,
            size: None,
            modified: None,
            is_parent: true,
        }
    }

    pub fn kind_column(&self) -> &'static str {
        self.kind.label()
    }

    pub fn size_column(&self) -> String {
        match (self.kind, self.size) {
            (EntryKind::Dir, _) => String::new(),
            (_, Some(bytes)) => format!("{} bytes", bytes),
            (_, None) => UNKNOWN.to_string(),
        }
    }

    pub fn modified_column(&self) -> String {
        if self.is_parent {
            return String::new();
        }
        self.modified.map(format_timestamp).unwrap_or_else(|| UNKNOWN.to_string())
    }

    pub fn is_hidden(&self) -> bool {
        !self.is_parent && self.name.starts_with('.')
    }
}

pub fn format_timestamp(time: DateTime<Local>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

fn serialize_timestamp<S: Serializer>(
    value: &Option<DateTime<Local>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(time) => serializer.serialize_some(&format_timestamp(*time)),
        None => serializer.serialize_none(),
    }
}

/// Snapshot of one directory level.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Listing {
    pub dir: PathBuf,
    pub rows: Vec<ListingRow>,
}

impl Listing {
    /// Build a listing for `dir`, prepending a parent row unless `dir` is a root.
    pub fn new(dir: &Path, mut entries: Vec<ListingRow>) -> Self {
        entries.sort_by(compare_rows);
        let mut rows = Vec::with_capacity(entries.len() + 1);
        if let Some(parent) = dir.parent().filter(|p| !p.as_os_str().is_empty()) {
            rows.push(ListingRow::parent(parent.to_path_buf()));
        }
        rows.extend(entries);
        Self { dir: dir.to_path_buf(), rows }
    }

    pub fn row(&self, index: usize) -> Option<&ListingRow> {
        self.rows.get(index)
    }

    pub fn find(&self, name: &str) -> Option<&ListingRow> {
        self.rows.iter().find(|row| row.name == name)
    }

    /// Render as fixed-width text columns with row indices.
    pub fn render(&self) -> String {
        let name_width =
            self.rows.iter().map(|row| row.name.chars().count()).max().unwrap_or(4).max(4);
        let mut out = format!(
            "{:>4}  {:<name_width$}  {:<4}  {:>14}  {}\n",
            "#", "Name", "Type", "Size", "Date Modified"
        );
        for (index, row) in self.rows.iter().enumerate() {
            out.push_str(&format!(
                "{:>4}  {:<name_width$}  {:<4}  {:>14}  {}\n",
                index,
                row.name,
                row.kind_column(),
                row.size_column(),
                row.modified_column()
            ));
        }
        out
    }
}

/// Directories first, then by name.
fn compare_rows(a: &ListingRow, b: &ListingRow) -> Ordering {
    let rank = |row: &ListingRow| if row.kind == EntryKind::Dir { 0 } else { 1 };
    rank(a).cmp(&rank(b)).then_with(|| a.name.cmp(&b.name))
}
