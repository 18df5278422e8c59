//! # Storage Layer
//!
//! The [`ClipboardStore`] trait is the only thing commands know about persistence.
//! Every operation loads the whole clipboard, mutates it in memory and saves it
//! back in full; there is no incremental update.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, a single pretty-printed JSON file
//!   (by default `~/.cx_clipboard.json`)
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "entries": [
//!     {
//!       "original_path": "/home/me/notes.txt",
//!       "current_path": "/home/me/notes.txt",
//!       "timestamp": "2024-05-01T09:30:00Z"
//!     }
//!   ]
//! }
//! ```
//!
//! ## Concurrency
//!
//! cx assumes a single user running one invocation at a time. The store is not
//! locked, so two processes racing on the same file can lose an update (the
//! last write wins), and a crash mid-write can leave a truncated file behind.

use crate::error::Result;
use crate::model::Clipboard;

pub mod fs;
pub mod memory;

/// Abstract interface for clipboard persistence.
pub trait ClipboardStore {
    /// Load the full clipboard, creating an empty one if none exists yet
    fn load(&self) -> Result<Clipboard>;

    /// Replace the persisted clipboard with `clipboard`
    fn save(&mut self, clipboard: &Clipboard) -> Result<()>;
}
