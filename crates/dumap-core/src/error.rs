/// Error type shared by the scanner and the exporter.
///
/// Every filesystem failure is fatal: the walk stops at the first error and
/// no partial tree is returned. Variants keep the offending path so the CLI
/// can tell the user exactly where the walk broke.
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The root, or an entry that vanished mid-walk, does not exist.
    #[error("path not found: {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Metadata or a directory listing could not be read.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other I/O failure (symlink loops, broken media, ...).
    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Serialising the finished tree failed.
    #[error("failed to serialise tree")]
    Json(#[source] serde_json::Error),

    /// The output sink rejected the document.
    #[error("failed to write document")]
    Write(#[source] io::Error),
}

impl From<serde_json::Error> for Error {
    /// Writer failures surfacing through the serializer are reported as
    /// [`Error::Write`], everything else as [`Error::Json`].
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Self::Write(io::Error::from(err))
        } else {
            Self::Json(err)
        }
    }
}

impl Error {
    /// Classify an `io::Error` raised while touching `path`.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path, source },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            _ => Self::Io { path, source },
        }
    }

    /// The path the error occurred on, if it came from the filesystem.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::NotFound { path, .. }
            | Self::PermissionDenied { path, .. }
            | Self::Io { path, .. } => Some(path),
            Self::Json(_) | Self::Write(_) => None,
        }
    }
}
