use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A single cut item. `original_path` never changes; `current_path` follows the
/// item across copy-pastes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub original_path: PathBuf,
    pub current_path: PathBuf,
    pub timestamp: DateTime<Utc>,
}

impl Entry {
    pub fn new(path: PathBuf) -> Self {
        Self {
            original_path: path.clone(),
            current_path: path,
            timestamp: Utc::now(),
        }
    }
}

/// The whole clipboard, oldest entry first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clipboard {
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl Clipboard {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Index of the most recently cut entry.
    pub fn last_index(&self) -> Option<usize> {
        self.entries.len().checked_sub(1)
    }
}

/// Size and modification time of a listed path, taken without following links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDetails {
    pub size: u64,
    pub modified: Option<DateTime<Utc>>,
}

impl FileDetails {
    pub fn from_metadata(meta: &std::fs::Metadata) -> Self {
        Self {
            size: meta.len(),
            modified: meta.modified().ok().map(DateTime::<Utc>::from),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryStatus {
    Missing,
    Directory(FileDetails),
    Symlink {
        /// `None` when the link itself could not be read.
        target: Option<PathBuf>,
        details: FileDetails,
    },
    File(FileDetails),
}

impl EntryStatus {
    pub fn details(&self) -> Option<&FileDetails> {
        match self {
            EntryStatus::Missing => None,
            EntryStatus::Directory(details)
            | EntryStatus::File(details)
            | EntryStatus::Symlink { details, .. } => Some(details),
        }
    }
}

/// An entry as shown by `list`, with its position and what is on disk now.
#[derive(Debug, Clone)]
pub struct ListedEntry {
    pub index: usize,
    pub entry: Entry,
    pub status: EntryStatus,
}

impl ListedEntry {
    pub fn path(&self) -> &Path {
        &self.entry.original_path
    }

    pub fn display_path(&self) -> String {
        let path = self.path().display();
        match &self.status {
            EntryStatus::Symlink {
                target: Some(target),
                ..
            } => format!("{} -> {}", path, target.display()),
            EntryStatus::Symlink { target: None, .. } => format!("{} -> (broken)", path),
            _ => path.to_string(),
        }
    }
}
