//! Format-agnostic loading of declarative configuration files

use crate::{Error, NormalizedPath, Result, io};
use serde::de::DeserializeOwned;

/// File extensions [`ConfigStore`] knows how to parse, in probing order.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["json", "toml", "yaml", "yml"];

/// Format-agnostic configuration store.
///
/// Detects the format from the file extension and deserializes into any
/// `DeserializeOwned` type, usually `serde_json::Value`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Whether the extension of `path` is one this store can parse.
    pub fn supports(path: &NormalizedPath) -> bool {
        path.extension()
            .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
            .unwrap_or(false)
    }

    /// Load configuration from a file.
    ///
    /// Format is detected from file extension:
    /// - `.json` -> JSON
    /// - `.toml` -> TOML
    /// - `.yaml`, `.yml` -> YAML
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let extension = path.extension().unwrap_or("").to_lowercase();
        if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(Error::UnsupportedFormat { extension });
        }

        let content = io::read_text(path)?;
        tracing::trace!(path = %path, format = %extension, "parsing config file");

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
