use super::ClipboardStore;
use crate::error::{CxError, Result};
use crate::model::Clipboard;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the store location, writing an empty clipboard there first if
    /// nothing exists yet.
    pub fn ensure_store_path(&self) -> Result<PathBuf> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "initializing empty clipboard");
            self.ensure_parent()?;
            self.write_file(&Clipboard::default())?;
        }
        Ok(self.path.clone())
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(CxError::Io)?;
            }
        }
        Ok(())
    }

    pub fn read(&self) -> Result<Clipboard> {
        let path = self.ensure_store_path()?;
        let content = fs::read_to_string(&path).map_err(CxError::Io)?;
        let clipboard: Clipboard =
            serde_json::from_str(&content).map_err(|source| CxError::Deserialization {
                path: path.clone(),
                source,
            })?;
        debug!(path = %path.display(), entries = clipboard.len(), "read clipboard");
        Ok(clipboard)
    }

    pub fn write(&self, clipboard: &Clipboard) -> Result<()> {
        self.ensure_parent()?;
        self.write_file(clipboard)?;
        debug!(path = %self.path.display(), entries = clipboard.len(), "wrote clipboard");
        Ok(())
    }

    fn write_file(&self, clipboard: &Clipboard) -> Result<()> {
        let content = serde_json::to_string_pretty(clipboard).map_err(CxError::Serialization)?;
        fs::write(&self.path, content).map_err(CxError::Io)?;
        Ok(())
    }
}

impl ClipboardStore for FileStore {
    fn load(&self) -> Result<Clipboard> {
        self.read()
    }

    fn save(&mut self, clipboard: &Clipboard) -> Result<()> {
        self.write(clipboard)
    }
}
