//! Error types for reading and parsing source documents.
//!
//! Only the parsing stage can fail. Tree building, diffing and rendering are
//! total over any parsed document.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a comparison before any diff is produced.
#[derive(Error, Debug)]
pub enum DiffError {
    /// The file extension is not one of `.json`, `.yaml`, `.yml`.
    #[error("unsupported file extension '{extension}': {}", .path.display())]
    UnsupportedExtension { path: PathBuf, extension: String },

    /// The file could not be read or its content is malformed.
    #[error("failed to parse {}", .path.display())]
    ParseFailure {
        path: PathBuf,
        #[source]
        source: ParseCause,
    },
}

/// The underlying reason a document could not be parsed.
#[derive(Error, Debug)]
pub enum ParseCause {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Convenience alias used throughout gendiff-core.
pub type Result<T> = std::result::Result<T, DiffError>;
