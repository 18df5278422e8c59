use crate::error::{CxError, Result};
use crate::model::{Clipboard, Entry};
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Resolves `path` against `base` and folds `.` and `..` lexically.
/// Symlinks are left alone so a cut link names the link, not its target.
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut cleaned = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                if !matches!(cleaned.components().next_back(), Some(Component::RootDir) | None) {
                    cleaned.pop();
                }
            }
            other => cleaned.push(other.as_os_str()),
        }
    }
    cleaned
}

/// True if something (including a dangling symlink) exists at `path`.
pub fn path_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Checks read access with `access(2)`, which never opens the path, so
/// FIFOs and sockets are checked without blocking.
#[cfg(unix)]
pub fn check_readable(path: &Path) -> Result<()> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|e| CxError::Io(std::io::Error::new(ErrorKind::InvalidInput, e)))?;
    // SAFETY: `c_path` is a valid NUL-terminated string for the whole call.
    let rc = unsafe { libc::access(c_path.as_ptr(), libc::R_OK) };
    if rc == 0 {
        return Ok(());
    }
    readable_error(path, std::io::Error::last_os_error())
}

#[cfg(not(unix))]
pub fn check_readable(path: &Path) -> Result<()> {
    let opened = if path.is_dir() {
        fs::read_dir(path).map(|_| ())
    } else {
        fs::File::open(path).map(|_| ())
    };
    opened.or_else(|e| readable_error(path, e))
}

fn readable_error(path: &Path, e: std::io::Error) -> Result<()> {
    match e.kind() {
        ErrorKind::PermissionDenied => Err(CxError::PermissionDenied(path.to_path_buf())),
        ErrorKind::NotFound => Err(CxError::NotFound(path.to_path_buf())),
        _ => Err(CxError::Io(e)),
    }
}

/// The entry at `index`, provided its `current_path` still exists.
pub fn live_entry(clipboard: &Clipboard, index: usize) -> Result<&Entry> {
    let entry = clipboard
        .entries
        .get(index)
        .ok_or(CxError::InvalidIndex(index))?;
    if !path_exists(&entry.current_path) {
        return Err(CxError::StaleEntry(entry.current_path.clone()));
    }
    Ok(entry)
}
