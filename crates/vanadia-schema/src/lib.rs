//! Vanadia Schema - JSON Schema to HTML documentation rendering
//!
//! This crate turns the JSON Schema trees attached to API request and response
//! payloads into compact, nested HTML fragments that can be embedded as help
//! text in generated API collections.
//!
//! ## Features
//!
//! - **Typed decoding**: raw schema values are decoded once into [`SchemaNode`]
//! - **Best-effort rendering**: malformed schema fragments are skipped, never fatal
//! - **Inline markdown**: descriptions support `` `code` ``, `**bold**` and `*italic*`
//! - **Bounded recursion**: nesting depth is capped by [`RenderOptions`]
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use vanadia_schema::describe_json_schema;
//!
//! let schema = json!({
//!     "type": "object",
//!     "properties": {
//!         "id": { "type": "integer", "description": "Unique `id`" }
//!     },
//!     "required": ["id"]
//! });
//!
//! let html = describe_json_schema(&schema);
//! assert!(html.contains("<code>id</code> *"));
//! ```
//!
//! ## Output Shape
//!
//! - Object schemas become a `<table>` with one row per property
//! - Scalar and array schemas rendered standalone are wrapped in a one-cell table
//! - Every non-root value carries a type line such as ` <em>string</em>`
//!
//! Copyright (c) 2025 Vanadia Team
//! Licensed under the Apache-2.0 license

pub mod documentation;
pub mod error;
pub mod loader;

pub use documentation::{
    render_markdown, HtmlTemplate, Items, RenderOptions, SchemaNode, SchemaRenderer, TypeDecl,
    DEFAULT_MAX_DEPTH,
};
pub use error::{Result, SchemaError};
pub use loader::{Format, SchemaParser};

use serde_json::Value;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Render a decoded JSON Schema value as an outer-framed HTML fragment
pub fn describe_json_schema(schema: &Value) -> String {
    documentation::generate_docs(schema)
}
