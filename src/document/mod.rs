//! Dataset document parsing (YAML and JSON)

pub mod diagnostics;

use serde::de::DeserializeOwned;
use std::path::Path;

pub use diagnostics::SyntaxError;

/// Serialization format of a dataset document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Detect the format from a file extension; anything but `.json` is YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentFormat::Yaml => write!(f, "YAML"),
            DocumentFormat::Json => write!(f, "JSON"),
        }
    }
}

/// Parse a document, mapping parser errors to a source-annotated diagnostic
pub fn parse_str<T: DeserializeOwned + 'static>(
    source: &str,
    filename: &str,
    format: DocumentFormat,
) -> Result<T, SyntaxError> {
    match format {
        DocumentFormat::Yaml => {
            serde_yml::from_str(source).map_err(|e| SyntaxError::from_yaml(&e, source, filename))
        }
        DocumentFormat::Json => {
            serde_json::from_str(source).map_err(|e| SyntaxError::from_json(&e, source, filename))
        }
    }
}
