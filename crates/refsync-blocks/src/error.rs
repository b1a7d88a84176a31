//! Error types for refsync-blocks

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Reference structure marker not found: {marker}")]
    MissingMarker { marker: String },

    #[error("Reference structure markers out of order: {end} appears before {start}")]
    MarkersOutOfOrder { start: String, end: String },

    #[error("Invalid description pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl Error {
    /// Whether this error describes a malformed README rather than a bad setup.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::MissingMarker { .. } | Self::MarkersOutOfOrder { .. }
        )
    }
}
