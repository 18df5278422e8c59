//! # API Facade
//!
//! The single entry point for clipboard operations, whatever UI drives them.
//! It owns the store and the working directory (relative cut paths resolve
//! against it, pastes land in it) and dispatches to `commands/*.rs`, returning
//! `Result<CmdResult>`. It holds no business logic and does no terminal I/O.
//!
//! `CxApi<S: ClipboardStore>` is generic over the storage backend:
//! - Production: `CxApi<FileStore>`
//! - Testing: `CxApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::store::ClipboardStore;
use std::path::{Path, PathBuf};

pub struct CxApi<S: ClipboardStore> {
    store: S,
    cwd: PathBuf,
}

impl<S: ClipboardStore> CxApi<S> {
    pub fn new(store: S, cwd: PathBuf) -> Self {
        Self { store, cwd }
    }

    pub fn cut(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::cut::run(&mut self.store, &self.cwd, path)
    }

    /// Move (or with `persist`, copy) the most recent entry into the working directory.
    pub fn paste(&mut self, persist: bool) -> Result<commands::CmdResult> {
        commands::paste::run(&mut self.store, &self.cwd, persist)
    }

    pub fn paste_at(&mut self, index: usize, persist: bool) -> Result<commands::CmdResult> {
        commands::paste::run_at(&mut self.store, index, &self.cwd, persist)
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn clear(&mut self) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.store)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
pub use crate::transfer::{Transfer, TransferMode};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CxError;
    use crate::store::memory::InMemoryStore;
    use std::fs;
    use tempfile::TempDir;

    fn api_in(dir: &Path) -> CxApi<InMemoryStore> {
        CxApi::new(InMemoryStore::new(), dir.to_path_buf())
    }

    #[test]
    fn cut_resolves_against_cwd() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        let mut api = api_in(dir.path());

        api.cut(Path::new("a.txt")).unwrap();

        let listed = api.list().unwrap().listed_entries;
        assert_eq!(listed[0].path(), dir.path().join("a.txt").as_path());
    }

    #[test]
    fn paste_lands_in_cwd() {
        let src = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        fs::write(src.path().join("a.txt"), "a").unwrap();
        let mut api = api_in(work.path());
        api.cut(&src.path().join("a.txt")).unwrap();

        let result = api.paste(false).unwrap();

        let transfer = result.transfer.unwrap();
        assert_eq!(transfer.destination, work.path().join("a.txt"));
        assert_eq!(transfer.mode, TransferMode::Move);
        assert!(api.store().load().unwrap().is_empty());
    }

    #[test]
    fn paste_at_dispatches_index() {
        let work = TempDir::new().unwrap();
        let mut api = api_in(work.path());

        let err = api.paste_at(0, false).unwrap_err();
        assert!(matches!(err, CxError::InvalidIndex(0)));
    }

    #[test]
    fn clear_empties_clipboard() {
        let dir = TempDir::new().unwrap();
        let mut api = api_in(dir.path());
        api.cut(dir.path()).unwrap();

        api.clear().unwrap();

        assert_eq!(
            api.list().unwrap().messages[0].content,
            "Clipboard is empty"
        );
    }
}
