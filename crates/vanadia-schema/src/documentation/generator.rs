//! Schema documentation renderer
//!
//! Walks a [`SchemaNode`] tree and writes nested HTML tables. Object nodes
//! become a property table; scalar and array nodes become a type line, and when
//! rendered standalone they are wrapped in a one-cell "frame" table. Property
//! values are rendered inline inside their row, while array items are each
//! framed.
//!
//! Copyright (c) 2025 Vanadia Team
//! Licensed under the Apache-2.0 license

use crate::documentation::parser::{Items, SchemaNode, MAX_DECODE_DEPTH};
use crate::documentation::templates::HtmlTemplate;
use indexmap::IndexMap;
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Default bound on schema nesting depth during rendering. Equal to the
/// decode limit, so the default never drops a level the decoder kept.
pub const DEFAULT_MAX_DEPTH: usize = MAX_DECODE_DEPTH;

/// Renderer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Subtrees nested deeper than this are omitted
    pub max_depth: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Whether a node gets its own table frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    /// Top-level call or array item
    Outer,
    /// Property value inside the parent's table cell
    Inline,
}

/// Renders schema trees as HTML fragments
#[derive(Debug, Clone, Default)]
pub struct SchemaRenderer {
    options: RenderOptions,
}

impl SchemaRenderer {
    /// Create a renderer with default options
    pub fn new() -> Self {
        Self::with_options(RenderOptions::default())
    }

    /// Create a renderer with custom options
    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Get the current options
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render `node` as a standalone fragment
    pub fn render(&self, node: &SchemaNode) -> String {
        self.run(node, Frame::Outer)
    }

    /// Render `node` as it would appear inside a property cell
    pub fn render_inline(&self, node: &SchemaNode) -> String {
        self.run(node, Frame::Inline)
    }

    /// Decode a raw schema value and render it standalone
    pub fn render_value(&self, schema: &Value) -> String {
        self.render(&SchemaNode::from_value(schema))
    }

    fn run(&self, node: &SchemaNode, frame: Frame) -> String {
        let mut state = RenderState {
            out: String::new(),
            max_depth: self.options.max_depth,
            truncated: false,
        };
        state.describe(node, frame, 0);
        debug!(bytes = state.out.len(), truncated = state.truncated, "Rendered schema");
        state.out
    }
}

/// Output buffer owned by a single render call
struct RenderState {
    out: String,
    max_depth: usize,
    truncated: bool,
}

impl RenderState {
    fn describe(&mut self, node: &SchemaNode, frame: Frame, depth: usize) {
        if depth > self.max_depth {
            if !self.truncated {
                warn!(max_depth = self.max_depth, "Schema nesting exceeds max depth, omitting deeper levels");
                self.truncated = true;
            }
            return;
        }

        if let Some(properties) = &node.properties {
            if frame == Frame::Inline {
                HtmlTemplate::type_line(&mut self.out, node);
            }
            HtmlTemplate::description(&mut self.out, node);
            self.describe_object(properties, &node.required_set(), depth);
        } else {
            if frame == Frame::Outer {
                HtmlTemplate::open_frame(&mut self.out);
            }
            HtmlTemplate::type_line(&mut self.out, node);
            HtmlTemplate::description(&mut self.out, node);
            if let Some(items) = &node.items {
                self.describe_array(items, depth);
            }
            if frame == Frame::Outer {
                HtmlTemplate::close_frame(&mut self.out);
            }
        }
    }

    fn describe_object(
        &mut self,
        properties: &IndexMap<String, SchemaNode>,
        required: &HashSet<&str>,
        depth: usize,
    ) {
        HtmlTemplate::open_table(&mut self.out);
        for (name, child) in properties {
            HtmlTemplate::open_row(&mut self.out, name, required.contains(name.as_str()));
            self.describe(child, Frame::Inline, depth + 1);
            HtmlTemplate::close_row(&mut self.out);
        }
        HtmlTemplate::close_table(&mut self.out);
    }

    fn describe_array(&mut self, items: &Items, depth: usize) {
        match items {
            Items::Single(item) => self.describe(item, Frame::Outer, depth + 1),
            Items::Tuple(elems) => {
                for elem in elems {
                    self.describe(elem, Frame::Outer, depth + 1);
                }
            }
        }
    }
}
