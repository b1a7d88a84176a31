//! Format-agnostic configuration loading

use serde::de::DeserializeOwned;

use crate::{Error, NormalizedPath, Result, io};

/// Format-agnostic configuration store.
///
/// Detects the format from the file extension and deserializes
/// transparently.
#[derive(Debug, Default)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let extension = path.extension().unwrap_or("").to_lowercase();
        if !matches!(extension.as_str(), "toml" | "json" | "yaml" | "yml") {
            return Err(Error::UnsupportedFormat { extension });
        }

        let content = io::read_text(path)?;
        tracing::debug!(path = %path, format = %extension, "loading config");

        match extension.as_str() {
            "toml" => toml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_native(),
                format: "TOML".into(),
                message: e.to_string(),
            }),
            "json" => serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_native(),
                format: "JSON".into(),
                message: e.to_string(),
            }),
            _ => serde_yaml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_native(),
                format: "YAML".into(),
                message: e.to_string(),
            }),
        }
    }
}
