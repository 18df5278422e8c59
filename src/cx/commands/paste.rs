use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CxError, Result};
use crate::model::Clipboard;
use crate::store::ClipboardStore;
use crate::transfer::{self, TransferMode};
use std::path::Path;
use tracing::debug;

use super::helpers::live_entry;

/// Pastes the most recent entry into `dest_dir`.
pub fn run<S: ClipboardStore>(store: &mut S, dest_dir: &Path, persist: bool) -> Result<CmdResult> {
    let clipboard = store.load()?;
    let index = clipboard.last_index().ok_or(CxError::EmptyClipboard)?;
    paste_entry(store, clipboard, index, dest_dir, persist)
}

/// Pastes the entry at `index` into `dest_dir`.
///
/// A move removes the entry; a copy (`persist`) keeps it in place and points
/// its `current_path` at the new copy, so the same item can be pasted again.
/// The clipboard is only written once the filesystem side succeeded.
pub fn run_at<S: ClipboardStore>(
    store: &mut S,
    index: usize,
    dest_dir: &Path,
    persist: bool,
) -> Result<CmdResult> {
    let clipboard = store.load()?;
    paste_entry(store, clipboard, index, dest_dir, persist)
}

fn paste_entry<S: ClipboardStore>(
    store: &mut S,
    mut clipboard: Clipboard,
    index: usize,
    dest_dir: &Path,
    persist: bool,
) -> Result<CmdResult> {
    let source = live_entry(&clipboard, index)?.current_path.clone();
    let destination = transfer::destination_for(&source, dest_dir)?;
    let mode = TransferMode::from_persist(persist);

    let done = transfer::transfer(&source, &destination, mode)?;

    let affected = match mode {
        TransferMode::Move => clipboard.entries.remove(index),
        TransferMode::Copy => {
            let entry = &mut clipboard.entries[index];
            entry.current_path = destination.clone();
            entry.clone()
        }
    };
    store.save(&clipboard)?;
    debug!(index, ?mode, entries = clipboard.len(), "pasted");

    let verb = match mode {
        TransferMode::Move => "Moved",
        TransferMode::Copy => "Copied",
    };
    let mut result = CmdResult::default()
        .with_affected_entries(vec![affected])
        .with_transfer(done);
    result.add_message(CmdMessage::success(format!(
        "{}: {} -> {}",
        verb,
        source.display(),
        destination.display()
    )));
    Ok(result)
}
