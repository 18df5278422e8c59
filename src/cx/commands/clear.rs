use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ClipboardStore;
use tracing::debug;

pub fn run<S: ClipboardStore>(store: &mut S) -> Result<CmdResult> {
    let mut clipboard = store.load()?;
    let removed = std::mem::take(&mut clipboard.entries);
    store.save(&clipboard)?;
    debug!(removed = removed.len(), "cleared clipboard");

    let mut result = CmdResult::default().with_affected_entries(removed);
    result.add_message(CmdMessage::success("Clipboard cleared"));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entry;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    #[test]
    fn removes_all_entries() {
        let mut store = InMemoryStore::with_entries(vec![
            Entry::new(PathBuf::from("/a")),
            Entry::new(PathBuf::from("/b")),
        ]);

        let result = run(&mut store).unwrap();

        assert!(store.load().unwrap().is_empty());
        assert_eq!(result.affected_entries.len(), 2);
        assert_eq!(result.messages[0].content, "Clipboard cleared");
    }

    #[test]
    fn is_idempotent() {
        let mut store = InMemoryStore::new();

        run(&mut store).unwrap();
        run(&mut store).unwrap();

        assert!(store.load().unwrap().is_empty());
        assert_eq!(store.saves(), 2);
    }
}
