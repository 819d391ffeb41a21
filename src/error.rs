use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a mapping or rewriting files.
#[derive(Debug, Error)]
pub enum RenameError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Failed to {action} {}", path.display())]
    FileAccess {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RenameError {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileAccess { action: "read", path: path.into(), source }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileAccess { action: "write", path: path.into(), source }
    }
}
