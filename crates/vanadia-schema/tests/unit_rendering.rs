//! End-to-end rendering tests for schema documentation
//!
//! These tests render realistic request/response payload schemas and check the
//! exact HTML fragments, plus the documented edge-case policies.

use serde_json::json;
use vanadia_schema::{describe_json_schema, render_markdown, SchemaNode, SchemaRenderer};

#[cfg(test)]
mod payload_rendering {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_request_body_schema() {
        let schema = json!({
            "$schema": "http://json-schema.org/draft-04/schema#",
            "type": "object",
            "description": "Create a **new** order",
            "properties": {
                "sku": {"type": "string", "description": "Product `sku`"},
                "quantity": {"type": "integer"},
                "channel": {"type": "string", "enum": ["web", "store", "web"]},
                "tags": {"type": "array", "items": {"type": "string"}}
            },
            "required": ["sku", "quantity"]
        });

        let expected = concat!(
            "Create a <strong>new</strong> order",
            "<table>",
            "<tr><td><code>sku</code> *</td><td> <em>string</em>\nProduct <code>sku</code></td></tr>",
            "<tr><td><code>quantity</code> *</td><td> <em>integer</em>\n</td></tr>",
            "<tr><td><code>channel</code></td><td> <em>string</em>, one of: <code>web</code>, <code>store</code>\n</td></tr>",
            "<tr><td><code>tags</code></td><td> <em>array</em>\n",
            "<table><tr><td> <em>string</em>\n</td></tr></table>",
            "</td></tr>",
            "</table>",
        );

        assert_eq!(describe_json_schema(&schema), expected);
    }

    #[test]
    fn test_response_list_schema() {
        let schema = json!({
            "type": "array",
            "description": "All _active_ users",
            "items": {
                "type": "object",
                "properties": {
                    "id": {"type": "integer"},
                    "email": {"type": ["string", "null"]}
                },
                "required": ["id"]
            }
        });

        let expected = concat!(
            "<table><tr><td> <em>array</em>\nAll <em>active</em> users",
            "<table>",
            "<tr><td><code>id</code> *</td><td> <em>integer</em>\n</td></tr>",
            "<tr><td><code>email</code></td><td> <em>string null</em>\n</td></tr>",
            "</table>",
            "</td></tr></table>",
        );

        assert_eq!(describe_json_schema(&schema), expected);
    }

    #[test]
    fn test_deeply_nested_objects() {
        let schema = json!({
            "properties": {
                "a": {
                    "type": "object",
                    "properties": {
                        "b": {
                            "type": "object",
                            "properties": {"c": {"type": "boolean"}},
                            "required": ["c"]
                        }
                    }
                }
            }
        });

        let expected = concat!(
            "<table><tr><td><code>a</code></td><td> <em>object</em>\n",
            "<table><tr><td><code>b</code></td><td> <em>object</em>\n",
            "<table><tr><td><code>c</code> *</td><td> <em>boolean</em>\n</td></tr></table>",
            "</td></tr></table>",
            "</td></tr></table>",
        );

        assert_eq!(describe_json_schema(&schema), expected);
    }
}

#[cfg(test)]
mod documented_properties {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_string_type_single_segment() {
        let node = SchemaNode::from_value(&json!({"type": "string"}));
        let renderer = SchemaRenderer::new();

        let outer = renderer.render(&node);
        assert_eq!(outer.matches("<em>string</em>").count(), 1);

        let inline = renderer.render_inline(&node);
        assert_eq!(inline.matches("<em>string</em>").count(), 1);
        assert!(!inline.contains("<table"));
    }

    #[test]
    fn test_enum_dedup_first_occurrence() {
        let html = describe_json_schema(&json!({"enum": ["a", "a", "b"]}));
        assert!(html.contains(", one of: <code>a</code>, <code>b</code>\n"));
        assert_eq!(html.matches("<code>a</code>").count(), 1);
    }

    #[test]
    fn test_required_marker() {
        let html = describe_json_schema(&json!({
            "properties": {"x": {"type": "string"}, "y": {"type": "string"}},
            "required": ["x", "missing"]
        }));
        assert!(html.contains("<code>x</code> *"));
        assert!(html.contains("<code>y</code></td>"));
        assert!(!html.contains("<code>y</code> *"));
    }

    #[test]
    fn test_tuple_two_frames_in_order() {
        let html = describe_json_schema(&json!({
            "type": "array",
            "items": [{"type": "string"}, {"type": "number"}]
        }));

        let first = html.find("<table><tr><td> <em>string</em>\n</td></tr></table>").unwrap();
        let second = html.find("<table><tr><td> <em>number</em>\n</td></tr></table>").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_render_twice_identical() {
        let node = SchemaNode::from_value(&json!({
            "properties": {
                "a": {"enum": ["x", "y", "x"], "description": "*one*"},
                "b": {"items": [{"type": "string"}, {}]}
            },
            "required": ["b"]
        }));
        let renderer = SchemaRenderer::new();
        assert_eq!(renderer.render(&node), renderer.render(&node));
    }

    #[test]
    fn test_markdown_pass_ordering() {
        assert_eq!(render_markdown("`a` **b**"), "<code>a</code> <strong>b</strong>");
        assert_eq!(render_markdown("`**x**`"), "<code>**x**</code>");
    }

    #[test]
    fn test_emphasis_around_code_in_description() {
        assert_eq!(
            describe_json_schema(&json!({"type": "string", "description": "**`id`** must be set"})),
            "<table><tr><td> <em>string</em>\n<strong><code>id</code></strong> must be set</td></tr></table>"
        );
    }

    #[test]
    fn test_deep_item_chain_renders_leaf_by_default() {
        let mut schema = json!({"type": "string"});
        for _ in 0..70 {
            schema = json!({"type": "array", "items": schema});
        }

        let html = describe_json_schema(&schema);
        assert_eq!(html.matches("<em>string</em>").count(), 1);
        assert_eq!(html.matches("<em>array</em>").count(), 70);
    }

    #[test]
    fn test_missing_type_is_any() {
        assert_eq!(
            describe_json_schema(&json!({"description": "free form"})),
            "<table><tr><td> <em>any</em>\nfree form</td></tr></table>"
        );
    }
}

#[cfg(test)]
mod concurrency {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parallel_renders_share_nothing() {
        let node = SchemaNode::from_value(&json!({
            "properties": {
                "id": {"type": "integer"},
                "names": {"type": "array", "items": {"type": "string"}}
            },
            "required": ["id"]
        }));
        let renderer = SchemaRenderer::new();
        let expected = renderer.render(&node);

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| renderer.render(&node)))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
