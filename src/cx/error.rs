use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CxError {
    #[error("no such file or directory: {}", .0.display())]
    NotFound(PathBuf),

    #[error("no read permission for {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("clipboard is empty")]
    EmptyClipboard,

    #[error("source path no longer exists: {}", .0.display())]
    StaleEntry(PathBuf),

    #[error("invalid clipboard index: {0}")]
    InvalidIndex(usize),

    #[error("cannot determine a file name for {}", .0.display())]
    NoFileName(PathBuf),

    #[error("cannot paste {} into itself ({})", .path.display(), .destination.display())]
    PasteIntoSelf { path: PathBuf, destination: PathBuf },

    #[error("clipboard file {} is corrupt: {source}", .path.display())]
    Deserialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CxError>;
