use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Entry, EntryStatus, FileDetails, ListedEntry};
use crate::store::ClipboardStore;
use std::fs;

pub fn run<S: ClipboardStore>(store: &S) -> Result<CmdResult> {
    let clipboard = store.load()?;
    if clipboard.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("Clipboard is empty"));
        return Ok(result);
    }

    let listed = clipboard
        .entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let status = status_of(&entry);
            ListedEntry {
                index,
                entry,
                status,
            }
        })
        .collect();

    Ok(CmdResult::default().with_listed_entries(listed))
}

/// What is at the entry's original path right now.
fn status_of(entry: &Entry) -> EntryStatus {
    let path = &entry.original_path;
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(_) => return EntryStatus::Missing,
    };
    let details = FileDetails::from_metadata(&meta);

    if meta.is_dir() {
        EntryStatus::Directory(details)
    } else if meta.file_type().is_symlink() {
        EntryStatus::Symlink {
            target: fs::read_link(path).ok(),
            details,
        }
    } else {
        EntryStatus::File(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{clear, MessageLevel};
    use crate::store::memory::InMemoryStore;
    use tempfile::TempDir;

    #[test]
    fn empty_clipboard_reports_message() {
        let store = InMemoryStore::new();

        let result = run(&store).unwrap();

        assert!(result.listed_entries.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(result.messages[0].content, "Clipboard is empty");
    }

    #[test]
    fn lists_entries_in_cut_order_with_status() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("file1.txt");
        let sub = dir.path().join("config");
        fs::write(&file, "12345").unwrap();
        fs::create_dir(&sub).unwrap();
        let gone = dir.path().join("gone.txt");
        let store = InMemoryStore::with_entries(vec![
            Entry::new(file.clone()),
            Entry::new(sub.clone()),
            Entry::new(gone.clone()),
        ]);

        let result = run(&store).unwrap();

        let listed = &result.listed_entries;
        assert_eq!(listed.len(), 3);
        assert_eq!(listed[0].index, 0);
        assert!(matches!(&listed[0].status, EntryStatus::File(d) if d.size == 5));
        assert!(listed[0].status.details().unwrap().modified.is_some());
        assert!(matches!(listed[1].status, EntryStatus::Directory(_)));
        assert_eq!(listed[2].status, EntryStatus::Missing);
        assert_eq!(listed[2].path(), gone.as_path());
        assert!(result.messages.is_empty());
    }

    #[test]
    fn status_follows_original_path() {
        let dir = TempDir::new().unwrap();
        let original = dir.path().join("a.txt");
        fs::write(&original, "a").unwrap();
        let mut entry = Entry::new(original.clone());
        entry.current_path = dir.path().join("elsewhere.txt");
        let store = InMemoryStore::with_entries(vec![entry]);

        let result = run(&store).unwrap();

        assert!(matches!(result.listed_entries[0].status, EntryStatus::File(_)));
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_report_their_target() {
        let dir = TempDir::new().unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink("missing-target", &link).unwrap();
        let store = InMemoryStore::with_entries(vec![Entry::new(link.clone())]);

        let result = run(&store).unwrap();

        let listed = &result.listed_entries[0];
        assert_eq!(
            listed.display_path(),
            format!("{} -> missing-target", link.display())
        );
    }

    #[test]
    fn list_does_not_write() {
        let dir = TempDir::new().unwrap();
        let mut store = InMemoryStore::with_entries(vec![Entry::new(dir.path().to_path_buf())]);
        clear::run(&mut store).unwrap();
        let saves = store.saves();

        run(&store).unwrap();

        assert_eq!(store.saves(), saves);
    }
}
