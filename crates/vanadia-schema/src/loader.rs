//! Schema text parsing for YAML and JSON sources
//!
//! Copyright (c) 2025 Vanadia Team
//! Licensed under the Apache-2.0 license

use crate::error::{Result, SchemaError};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Supported source formats for schema documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// YAML format (.yaml, .yml)
    Yaml,
    /// JSON format (.json)
    Json,
}

impl Format {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            _ => Err(SchemaError::unsupported_format(path.to_path_buf())),
        }
    }

    /// Get the primary file extension for this format
    pub fn primary_extension(&self) -> &'static str {
        match self {
            Format::Yaml => "yaml",
            Format::Json => "json",
        }
    }
}

/// Parser turning schema text into a `serde_json::Value` tree
#[derive(Debug, Default)]
pub struct SchemaParser;

impl SchemaParser {
    /// Create a new schema parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a schema file, detecting format from extension
    pub fn parse_file(&self, path: &Path) -> Result<Value> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| SchemaError::io_error(path.to_path_buf(), e))?;
        debug!(path = %path.display(), bytes = content.len(), "Read schema file");

        self.parse_content(&content, format)
    }

    /// Parse schema content with explicit format
    pub fn parse_content(&self, content: &str, format: Format) -> Result<Value> {
        match format {
            Format::Yaml => self.parse_yaml(content),
            Format::Json => self.parse_json(content),
        }
    }

    /// Parse YAML content
    pub fn parse_yaml(&self, content: &str) -> Result<Value> {
        // Go through serde_yaml's own value first so YAML errors keep their location
        let yaml_value: serde_yaml::Value = serde_yaml::from_str(content)?;
        Ok(serde_json::to_value(yaml_value)?)
    }

    /// Parse JSON content
    pub fn parse_json(&self, content: &str) -> Result<Value> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse content as JSON, falling back to YAML
    pub fn parse_with_fallback(&self, content: &str) -> Result<(Value, Format)> {
        match self.parse_json(content) {
            Ok(value) => Ok((value, Format::Json)),
            Err(json_err) => match self.parse_yaml(content) {
                Ok(value) => Ok((value, Format::Yaml)),
                Err(_) => Err(json_err),
            },
        }
    }
}
