//! Moving and copying pasted items.
//!
//! Moves are a single `rename`, so they only succeed within one filesystem and
//! fail (rather than falling back to copy + delete) across devices. Copies walk
//! the source without following links: files keep their permission bits,
//! symlinks are recreated with the same target string, and directories are
//! recreated with their permission bits applied once their contents are in
//! place. Existing destination files are overwritten and existing directories
//! are merged into. A copy that fails midway is not rolled back.

use crate::error::{CxError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferMode {
    Move,
    Copy,
}

impl TransferMode {
    pub fn from_persist(persist: bool) -> Self {
        if persist {
            TransferMode::Copy
        } else {
            TransferMode::Move
        }
    }
}

/// A completed paste.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub mode: TransferMode,
}

/// Where `source` lands when pasted into `dest_dir`.
pub fn destination_for(source: &Path, dest_dir: &Path) -> Result<PathBuf> {
    let name = source
        .file_name()
        .ok_or_else(|| CxError::NoFileName(source.to_path_buf()))?;
    Ok(dest_dir.join(name))
}

pub fn transfer(source: &Path, destination: &Path, mode: TransferMode) -> Result<Transfer> {
    let outcome = match mode {
        TransferMode::Move => move_path(source, destination),
        TransferMode::Copy => copy_path(source, destination),
    };
    outcome.map_err(|err| stale_if_vanished(source, err))?;
    Ok(Transfer {
        source: source.to_path_buf(),
        destination: destination.to_path_buf(),
        mode,
    })
}

/// A source that disappeared before the transfer reached it is a stale
/// entry, not an I/O failure.
fn stale_if_vanished(source: &Path, err: CxError) -> CxError {
    match err {
        CxError::Io(ref e)
            if e.kind() == io::ErrorKind::NotFound && fs::symlink_metadata(source).is_err() =>
        {
            CxError::StaleEntry(source.to_path_buf())
        }
        other => other,
    }
}

pub fn move_path(source: &Path, destination: &Path) -> Result<()> {
    debug!(from = %source.display(), to = %destination.display(), "moving");
    fs::rename(source, destination).map_err(CxError::Io)
}

pub fn copy_path(source: &Path, destination: &Path) -> Result<()> {
    let meta = fs::symlink_metadata(source).map_err(CxError::Io)?;
    let file_type = meta.file_type();

    if is_into_self(source, destination, file_type.is_dir()) {
        return Err(CxError::PasteIntoSelf {
            path: source.to_path_buf(),
            destination: destination.to_path_buf(),
        });
    }

    debug!(from = %source.display(), to = %destination.display(), "copying");
    if file_type.is_symlink() {
        copy_symlink(source, destination)
    } else if file_type.is_dir() {
        copy_dir(source, destination)
    } else {
        copy_file(source, destination)
    }
}

/// True when `destination` is `source` itself (through symlinked parents or a
/// hard link) or, for a directory, lies somewhere inside it.
fn is_into_self(source: &Path, destination: &Path, is_dir: bool) -> bool {
    let source = resolve_parent(source);
    let destination = resolve_parent(destination);
    destination == source
        || (is_dir && destination.starts_with(&source))
        || same_inode(&source, &destination)
}

/// `path` with its parent directory canonicalized. The last component is
/// kept as is, so a symlink still names the link.
fn resolve_parent(path: &Path) -> PathBuf {
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => fs::canonicalize(parent)
            .map(|parent| parent.join(name))
            .unwrap_or_else(|_| path.to_path_buf()),
        _ => path.to_path_buf(),
    }
}

/// The destination is followed, since writing through a link lands on its target.
#[cfg(unix)]
fn same_inode(source: &Path, destination: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::symlink_metadata(source), fs::metadata(destination)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn same_inode(_source: &Path, _destination: &Path) -> bool {
    false
}

fn copy_file(source: &Path, destination: &Path) -> Result<()> {
    trace!(from = %source.display(), to = %destination.display(), "copy file");
    // fs::copy carries the permission bits over on unix
    fs::copy(source, destination).map_err(CxError::Io)?;
    Ok(())
}

fn copy_dir(source: &Path, destination: &Path) -> Result<()> {
    let mut dir_permissions = Vec::new();

    for entry in WalkDir::new(source).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(|e| CxError::Io(io::Error::from(e)))?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| CxError::Io(io::Error::other(e)))?;
        let target = destination.join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            trace!(dir = %target.display(), "create dir");
            fs::create_dir_all(&target).map_err(CxError::Io)?;
            let meta = entry.metadata().map_err(|e| CxError::Io(io::Error::from(e)))?;
            dir_permissions.push((target, meta.permissions()));
        } else if file_type.is_symlink() {
            copy_symlink(entry.path(), &target)?;
        } else {
            copy_file(entry.path(), &target)?;
        }
    }

    // Deepest first, so a read-only parent never blocks its children.
    for (dir, permissions) in dir_permissions.into_iter().rev() {
        fs::set_permissions(&dir, permissions).map_err(CxError::Io)?;
    }
    Ok(())
}

fn copy_symlink(source: &Path, destination: &Path) -> Result<()> {
    let target = fs::read_link(source).map_err(CxError::Io)?;
    trace!(link = %destination.display(), target = %target.display(), "recreate symlink");
    create_symlink(&target, destination)
}

#[cfg(unix)]
fn create_symlink(target: &Path, link: &Path) -> Result<()> {
    std::os::unix::fs::symlink(target, link).map_err(CxError::Io)
}

#[cfg(not(unix))]
fn create_symlink(_target: &Path, link: &Path) -> Result<()> {
    Err(CxError::Io(io::Error::new(
        io::ErrorKind::Unsupported,
        format!("cannot recreate symlink {}", link.display()),
    )))
}
