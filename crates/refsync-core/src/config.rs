//! Synchronizer configuration

use serde::{Deserialize, Serialize};

use refsync_blocks::{BlockLayout, Markers};
use refsync_fs::{ConfigStore, NormalizedPath};

use crate::Result;

/// Default README location, relative to the repository root.
pub const DEFAULT_README: &str = "README.md";

/// Default references directory, relative to the repository root.
pub const DEFAULT_REFERENCES: &str = "swift-testing-expert/references";

/// Suffix a directory entry must carry to be listed.
pub const DEFAULT_SUFFIX: &str = ".md";

/// Everything the synchronizer needs besides the filesystem.
///
/// Every field has a default, so a config file only needs to name what it
/// overrides:
///
/// ```toml
/// readme = "docs/README.md"
/// references = "skill/references"
///
/// [layout]
/// root_label = "skill/"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// README path, relative to the root unless absolute.
    pub readme: String,
    /// References directory, relative to the root unless absolute.
    pub references: String,
    /// File name suffix of reference files.
    pub suffix: String,
    pub markers: Markers,
    pub layout: BlockLayout,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            readme: DEFAULT_README.to_string(),
            references: DEFAULT_REFERENCES.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
            markers: Markers::default(),
            layout: BlockLayout::default(),
        }
    }
}

impl SyncConfig {
    /// Load a config file (`.toml`, `.json`, `.yaml` or `.yml`).
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        Ok(ConfigStore::new().load(path)?)
    }

    pub fn readme_path(&self, root: &NormalizedPath) -> NormalizedPath {
        root.join(&self.readme)
    }

    pub fn references_path(&self, root: &NormalizedPath) -> NormalizedPath {
        root.join(&self.references)
    }
}
