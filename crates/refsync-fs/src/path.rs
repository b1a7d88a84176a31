//! Normalized path handling for cross-platform compatibility

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// A path normalized to use forward slashes internally.
///
/// README and references locations are configured with forward slashes;
/// conversion to the platform-native form only happens at I/O boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self {
            inner: path_str.replace('\\', "/"),
        }
    }

    /// Resolve an existing directory or file to its canonical absolute form.
    ///
    /// Uses `dunce` so Windows paths do not come back in `\\?\` form.
    pub fn canonicalize(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        dunce::canonicalize(path)
            .map(Self::new)
            .map_err(|e| Error::io(path, e))
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a relative segment.
    ///
    /// An absolute segment replaces the base entirely, mirroring
    /// [`Path::join`].
    pub fn join(&self, segment: &str) -> Self {
        let segment = segment.replace('\\', "/");
        if Path::new(&segment).is_absolute() || segment.starts_with('/') {
            return Self { inner: segment };
        }
        let segment = segment.trim_start_matches("./");
        let joined = if self.inner.is_empty() || self.inner == "." {
            segment.to_string()
        } else if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment)
        } else {
            format!("{}/{}", self.inner, segment)
        };
        Self { inner: joined }
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        trimmed.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 {
                None
            } else {
                Some(&name[idx + 1..])
            }
        })
    }

    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}
