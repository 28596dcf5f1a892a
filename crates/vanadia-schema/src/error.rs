//! Error types for schema loading
//!
//! Rendering itself is infallible; only turning text into a schema tree can fail.
//!
//! Copyright (c) 2025 Vanadia Team
//! Licensed under the Apache-2.0 license

use std::path::PathBuf;
use thiserror::Error;

/// Result type for schema loading operations
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Errors raised while decoding schema text at the crate boundary
#[derive(Error, Debug)]
pub enum SchemaError {
    /// File I/O errors
    #[error("Failed to read file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON parsing errors
    #[error("Failed to parse JSON schema: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// YAML parsing errors
    #[error("Failed to parse YAML schema: {source}")]
    Yaml {
        #[from]
        source: serde_yaml::Error,
    },

    /// Unsupported file format
    #[error("Unsupported file format for '{}'. Expected .yaml, .yml, or .json", path.display())]
    UnsupportedFormat { path: PathBuf },
}

impl SchemaError {
    /// Create an I/O error for the given file
    pub fn io_error(path: PathBuf, source: std::io::Error) -> Self {
        Self::Io { path, source }
    }

    /// Create an unsupported format error
    pub fn unsupported_format(path: PathBuf) -> Self {
        Self::UnsupportedFormat { path }
    }
}
