use super::ClipboardStore;
use crate::error::Result;
use crate::model::{Clipboard, Entry};
use std::cell::Cell;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    clipboard: Clipboard,
    loads: Cell<usize>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<Entry>) -> Self {
        Self {
            clipboard: Clipboard { entries },
            ..Self::default()
        }
    }

    /// Number of times the clipboard has been read.
    pub fn loads(&self) -> usize {
        self.loads.get()
    }

    /// Number of times the clipboard has been written.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl ClipboardStore for InMemoryStore {
    fn load(&self) -> Result<Clipboard> {
        self.loads.set(self.loads.get() + 1);
        Ok(self.clipboard.clone())
    }

    fn save(&mut self, clipboard: &Clipboard) -> Result<()> {
        self.clipboard = clipboard.clone();
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn save_replaces_clipboard() {
        let mut store = InMemoryStore::with_entries(vec![Entry::new(PathBuf::from("/a"))]);
        store.save(&Clipboard::default()).unwrap();

        assert!(store.load().unwrap().is_empty());
        assert_eq!(store.saves(), 1);
        assert_eq!(store.loads(), 1);
    }
}
