use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CxError, Result};
use crate::model::Entry;
use crate::store::ClipboardStore;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

use super::helpers::{absolutize, check_readable};

/// Records `path` (resolved against `cwd`) as the newest clipboard entry.
/// Nothing on disk is touched besides the store.
pub fn run<S: ClipboardStore>(store: &mut S, cwd: &Path, path: &Path) -> Result<CmdResult> {
    let abs_path = absolutize(cwd, path);

    let meta = match fs::symlink_metadata(&abs_path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == ErrorKind::NotFound => return Err(CxError::NotFound(abs_path)),
        Err(e) => return Err(CxError::Io(e)),
    };

    // Links are recorded as-is, even when they dangle.
    if !meta.file_type().is_symlink() {
        check_readable(&abs_path)?;
    }

    let mut clipboard = store.load()?;
    let entry = Entry::new(abs_path);
    clipboard.push(entry.clone());
    store.save(&clipboard)?;
    debug!(path = %entry.original_path.display(), entries = clipboard.len(), "cut");

    let mut result = CmdResult::default().with_affected_entries(vec![entry.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Cut: {}",
        entry.original_path.display()
    )));
    Ok(result)
}
