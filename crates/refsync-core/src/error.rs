//! Error types for refsync-core

use std::path::PathBuf;

/// Result type for refsync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while synchronizing the references block
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// README read/write or config loading failure
    #[error(transparent)]
    Fs(#[from] refsync_fs::Error),

    /// Malformed README (markers missing or reversed)
    #[error(transparent)]
    Block(#[from] refsync_blocks::Error),

    #[error("References directory {path} could not be listed")]
    ReferencesUnreadable {
        path: PathBuf,
        #[source]
        source: refsync_fs::Error,
    },
}

impl Error {
    /// Whether the README itself is malformed.
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::Block(e) if e.is_structural())
    }
}
