//! Schema documentation rendering
//!
//! This module renders JSON Schema trees as nested HTML fragments: type
//! annotations, enum value lists, required-field markers and descriptions
//! with inline markdown.
//!
//! Copyright (c) 2025 Vanadia Team
//! Licensed under the Apache-2.0 license

pub mod generator;
pub mod markdown;
pub mod parser;
pub mod templates;

pub use generator::{RenderOptions, SchemaRenderer, DEFAULT_MAX_DEPTH};
pub use markdown::render_markdown;
pub use parser::{Items, SchemaNode, TypeDecl};
pub use templates::HtmlTemplate;

/// Create a schema renderer with default options
pub fn create_renderer() -> SchemaRenderer {
    SchemaRenderer::new()
}

/// Render a JSON Schema value as an outer-framed HTML fragment
pub fn generate_docs(schema: &serde_json::Value) -> String {
    create_renderer().render_value(schema)
}
