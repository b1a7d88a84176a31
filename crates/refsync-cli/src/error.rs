//! Error types for refsync-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from refsync-core
    #[error(transparent)]
    Core(#[from] refsync_core::Error),

    /// Error from refsync-fs
    #[error(transparent)]
    Fs(#[from] refsync_fs::Error),

    /// `--check` found a README that needs regenerating
    #[error("{path} is out of date; run `refsync` to update it")]
    Stale { path: String },

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
