//! HTML snippets for schema documentation
//!
//! Copyright (c) 2025 Vanadia Team
//! Licensed under the Apache-2.0 license

use crate::documentation::markdown::render_markdown;
use crate::documentation::parser::{SchemaNode, TypeDecl};
use std::collections::HashSet;

/// Token shown when a node declares no usable `type`
pub const ANY_TYPE: &str = "any";

/// HTML writers shared by the schema renderer. All of them append to `out`.
pub struct HtmlTemplate;

impl HtmlTemplate {
    /// Write the type annotation, the enum list if any, and a trailing newline
    pub fn type_line(out: &mut String, node: &SchemaNode) {
        out.push_str(" <em>");
        match &node.type_decl {
            Some(TypeDecl::Single(name)) => out.push_str(name),
            Some(TypeDecl::Union(names)) => out.push_str(&names.join(" ")),
            None => out.push_str(ANY_TYPE),
        }
        out.push_str("</em>");

        if let Some(values) = &node.enum_values {
            Self::enum_values(out, values);
        }

        out.push('\n');
    }

    /// Write `, one of:` followed by each distinct value in a `<code>` span
    pub fn enum_values(out: &mut String, values: &[String]) {
        out.push_str(", one of:");
        for (i, value) in Self::distinct_values(values).into_iter().enumerate() {
            out.push_str(if i == 0 { " <code>" } else { ", <code>" });
            out.push_str(value);
            out.push_str("</code>");
        }
    }

    /// Drop repeated values, keeping the first occurrence of each in order
    pub fn distinct_values(values: &[String]) -> Vec<&str> {
        let mut seen = HashSet::with_capacity(values.len());
        values
            .iter()
            .map(String::as_str)
            .filter(|value| seen.insert(*value))
            .collect()
    }

    /// Write the markdown-rendered description, if the node has one
    pub fn description(out: &mut String, node: &SchemaNode) {
        if let Some(text) = &node.description {
            out.push_str(&render_markdown(text));
        }
    }

    /// Open the one-cell table used for standalone values
    pub fn open_frame(out: &mut String) {
        out.push_str("<table><tr><td>");
    }

    pub fn close_frame(out: &mut String) {
        out.push_str("</td></tr></table>");
    }

    pub fn open_table(out: &mut String) {
        out.push_str("<table>");
    }

    pub fn close_table(out: &mut String) {
        out.push_str("</table>");
    }

    /// Write the name cell of a property row and open its value cell
    pub fn open_row(out: &mut String, name: &str, required: bool) {
        out.push_str("<tr><td><code>");
        out.push_str(name);
        if required {
            out.push_str("</code> *</td><td>");
        } else {
            out.push_str("</code></td><td>");
        }
    }

    pub fn close_row(out: &mut String) {
        out.push_str("</td></tr>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn type_line_of(schema: serde_json::Value) -> String {
        let mut out = String::new();
        HtmlTemplate::type_line(&mut out, &SchemaNode::from_value(&schema));
        out
    }

    #[test]
    fn test_single_type() {
        assert_eq!(type_line_of(json!({"type": "string"})), " <em>string</em>\n");
    }

    #[test]
    fn test_union_type() {
        assert_eq!(
            type_line_of(json!({"type": ["string", "null"]})),
            " <em>string null</em>\n"
        );
    }

    #[test]
    fn test_missing_type_is_any() {
        assert_eq!(type_line_of(json!({})), " <em>any</em>\n");
        assert_eq!(type_line_of(json!({"type": {"bad": true}})), " <em>any</em>\n");
    }

    #[test]
    fn test_enum_deduplicated_in_order() {
        assert_eq!(
            type_line_of(json!({"type": "string", "enum": ["b", "a", "b", "c", "a"]})),
            " <em>string</em>, one of: <code>b</code>, <code>a</code>, <code>c</code>\n"
        );
    }

    #[test]
    fn test_empty_enum() {
        assert_eq!(
            type_line_of(json!({"type": "string", "enum": []})),
            " <em>string</em>, one of:\n"
        );
    }

    #[test]
    fn test_distinct_values() {
        let values: Vec<String> = ["a", "a", "b"].iter().map(|s| s.to_string()).collect();
        assert_eq!(HtmlTemplate::distinct_values(&values), vec!["a", "b"]);
    }

    #[test]
    fn test_rows() {
        let mut out = String::new();
        HtmlTemplate::open_row(&mut out, "id", true);
        HtmlTemplate::close_row(&mut out);
        HtmlTemplate::open_row(&mut out, "name", false);
        HtmlTemplate::close_row(&mut out);
        assert_eq!(
            out,
            "<tr><td><code>id</code> *</td><td></td></tr><tr><td><code>name</code></td><td></td></tr>"
        );
    }

    #[test]
    fn test_description_markdown() {
        let mut out = String::new();
        HtmlTemplate::description(
            &mut out,
            &SchemaNode::from_value(&json!({"description": "The `id` is **stable**"})),
        );
        assert_eq!(out, "The <code>id</code> is <strong>stable</strong>");
    }
}
