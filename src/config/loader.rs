//! Document format detection and loading

use crate::constants::DOCUMENT_EXTENSIONS;
use crate::error::{Error, Result};
use crate::ext::PathExt;
use anyhow::Context;
use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;

/// Structural formats a document may be stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Picks the format from the file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path.extension_lowercase().unwrap_or_default();
        match extension.as_str() {
            "json" => Ok(DocumentFormat::Json),
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            _ => Err(Error::UnsupportedFormat {
                extension,
                expected: DOCUMENT_EXTENSIONS.join(", "),
            }),
        }
    }

    pub fn parse<T: DeserializeOwned>(&self, content: &str) -> Result<T> {
        let value = match self {
            DocumentFormat::Json => serde_json::from_str(content)?,
            DocumentFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(value)
    }

    pub fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        let content = match self {
            DocumentFormat::Json => serde_json::to_string_pretty(value)?,
            DocumentFormat::Yaml => serde_yaml::to_string(value)?,
        };
        Ok(content)
    }
}

/// Reads and parses a JSON or YAML document, choosing the format by extension.
pub fn load_document<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let format = DocumentFormat::from_path(path)?;
    log::debug!("Loading {:?} document from {}", format, path.display());
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read document '{}'", path.display()))?;
    format.parse(&content)
}
