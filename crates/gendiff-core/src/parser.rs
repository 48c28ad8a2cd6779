//! Document loading: extension sniffing, JSON/YAML deserialization, and
//! normalization into a top-level [`Mapping`].

use crate::error::{DiffError, ParseCause, Result};
use crate::tree::ROOT_KEY;
use crate::types::{GenericValue, Mapping};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Syntax of a source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    Json,
    Yaml,
}

impl SourceFormat {
    /// Match a bare name or extension (`json`, `yaml`, `yml`). Case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "json" => Some(SourceFormat::Json),
            "yaml" | "yml" => Some(SourceFormat::Yaml),
            _ => None,
        }
    }

    /// Pick the format from a file's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Self::from_name(extension).ok_or_else(|| DiffError::UnsupportedExtension {
            path: path.to_path_buf(),
            extension: if extension.is_empty() {
                String::new()
            } else {
                format!(".{}", extension)
            },
        })
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Json => f.write_str("json"),
            SourceFormat::Yaml => f.write_str("yaml"),
        }
    }
}

/// Read and parse a `.json`, `.yaml` or `.yml` file.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Mapping> {
    let path = path.as_ref();
    let format = SourceFormat::from_path(path)?;
    let failure = |source: ParseCause| DiffError::ParseFailure {
        path: path.to_path_buf(),
        source,
    };

    let content = fs::read_to_string(path).map_err(|e| failure(e.into()))?;
    let document = parse_str(&content, format).map_err(failure)?;

    debug!(path = %path.display(), %format, keys = document.len(), "parsed document");
    Ok(document)
}

/// Parse document text of a known format.
///
/// A document whose top level is not a mapping (an array, a scalar, or an
/// empty YAML stream) is wrapped as `{"root": <value>}`.
pub fn parse_str(content: &str, format: SourceFormat) -> std::result::Result<Mapping, ParseCause> {
    let value = match format {
        SourceFormat::Json => GenericValue::from(serde_json::from_str::<serde_json::Value>(content)?),
        SourceFormat::Yaml => GenericValue::from(serde_yaml::from_str::<serde_yaml::Value>(content)?),
    };
    Ok(into_document(value))
}

fn into_document(value: GenericValue) -> Mapping {
    match value {
        GenericValue::Mapping(map) => map,
        other => Mapping::from([(ROOT_KEY.to_string(), other)]),
    }
}
