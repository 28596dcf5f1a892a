//! JSON Schema decoding for documentation rendering
//!
//! Raw schema values are decoded once into [`SchemaNode`]. Every keyword the
//! renderer cares about is optional, and a keyword whose value has the wrong
//! shape decodes as absent instead of failing.
//!
//! Copyright (c) 2025 Vanadia Team
//! Licensed under the Apache-2.0 license

use crate::error::Result;
use crate::loader::SchemaParser;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::collections::HashSet;
use tracing::{trace, warn};

/// Decoding stops descending below this depth. Matches serde_json's own
/// recursion limit for parsed text.
pub const MAX_DECODE_DEPTH: usize = 128;

/// Declared `type` of a schema node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDecl {
    /// `"type": "string"`
    Single(String),
    /// `"type": ["string", "null"]`
    Union(Vec<String>),
}

/// Declared `items` of an array schema node
#[derive(Debug, Clone, PartialEq)]
pub enum Items {
    /// One schema applied to every element
    Single(Box<SchemaNode>),
    /// One schema per position
    Tuple(Vec<SchemaNode>),
}

/// One level of a JSON Schema tree, reduced to what documentation needs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaNode {
    pub type_decl: Option<TypeDecl>,
    /// Present only when `properties` was a JSON object; keeps declaration order.
    pub properties: Option<IndexMap<String, SchemaNode>>,
    pub required: Option<Vec<String>>,
    /// Enum values as display text, duplicates kept.
    pub enum_values: Option<Vec<String>>,
    pub items: Option<Items>,
    pub description: Option<String>,
}

impl SchemaNode {
    /// Decode a schema value. Never fails; mismatched keywords are dropped.
    pub fn from_value(schema: &Value) -> Self {
        Self::decode(schema, 0)
    }

    /// Parse and decode JSON schema text
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value = SchemaParser::new().parse_json(content)?;
        Ok(Self::from_value(&value))
    }

    /// Parse and decode YAML schema text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let value = SchemaParser::new().parse_yaml(content)?;
        Ok(Self::from_value(&value))
    }

    /// Whether the node renders as a property table
    pub fn is_object_shaped(&self) -> bool {
        self.properties.is_some()
    }

    /// Names listed in this node's own `required` keyword
    pub fn required_set(&self) -> HashSet<&str> {
        self.required
            .iter()
            .flatten()
            .map(String::as_str)
            .collect()
    }

    fn decode(schema: &Value, depth: usize) -> Self {
        let Some(obj) = schema.as_object() else {
            trace!(found = kind_of(schema), "Schema node is not an object, treating as empty");
            return Self::default();
        };

        let mut node = Self {
            type_decl: decode_type(obj),
            properties: None,
            required: decode_required(obj),
            enum_values: decode_enum(obj),
            items: None,
            description: decode_string(obj, "description"),
        };

        if depth >= MAX_DECODE_DEPTH {
            warn!(depth, "Schema nesting exceeds decode limit, dropping nested schemas");
            return node;
        }

        node.properties = match obj.get("properties") {
            Some(Value::Object(props)) => Some(
                props
                    .iter()
                    .map(|(name, child)| (name.clone(), Self::decode(child, depth + 1)))
                    .collect(),
            ),
            Some(other) => {
                mismatch("properties", other);
                None
            }
            None => None,
        };

        node.items = match obj.get("items") {
            Some(item @ Value::Object(_)) => {
                Some(Items::Single(Box::new(Self::decode(item, depth + 1))))
            }
            Some(Value::Array(elems)) => Some(Items::Tuple(
                elems.iter().map(|elem| Self::decode(elem, depth + 1)).collect(),
            )),
            Some(other) => {
                mismatch("items", other);
                None
            }
            None => None,
        };

        node
    }
}

fn decode_type(obj: &Map<String, Value>) -> Option<TypeDecl> {
    match obj.get("type")? {
        Value::String(name) => Some(TypeDecl::Single(name.clone())),
        Value::Array(names) => Some(TypeDecl::Union(
            names
                .iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect(),
        )),
        other => {
            mismatch("type", other);
            None
        }
    }
}

fn decode_required(obj: &Map<String, Value>) -> Option<Vec<String>> {
    match obj.get("required")? {
        Value::Array(names) => Some(
            names
                .iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect(),
        ),
        other => {
            mismatch("required", other);
            None
        }
    }
}

fn decode_enum(obj: &Map<String, Value>) -> Option<Vec<String>> {
    match obj.get("enum")? {
        Value::Array(values) => Some(values.iter().map(enum_literal).collect()),
        other => {
            mismatch("enum", other);
            None
        }
    }
}

fn decode_string(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::String(text) => Some(text.clone()),
        other => {
            mismatch(key, other);
            None
        }
    }
}

/// Strings are shown bare, everything else as compact JSON.
fn enum_literal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn mismatch(keyword: &str, found: &Value) {
    trace!(keyword, found = kind_of(found), "Ignoring schema keyword with unexpected shape");
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_and_union_types() {
        let node = SchemaNode::from_value(&json!({"type": "string"}));
        assert_eq!(node.type_decl, Some(TypeDecl::Single("string".to_string())));

        let node = SchemaNode::from_value(&json!({"type": ["string", "null"]}));
        assert_eq!(
            node.type_decl,
            Some(TypeDecl::Union(vec!["string".to_string(), "null".to_string()]))
        );
    }

    #[test]
    fn test_properties_keep_declaration_order() {
        let node = SchemaNode::from_json_str(
            r#"{"properties": {"zeta": {}, "alpha": {}, "mid": {}}}"#,
        )
        .unwrap();

        let names: Vec<_> = node.properties.as_ref().unwrap().keys().cloned().collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_empty_properties_is_object_shaped() {
        let node = SchemaNode::from_value(&json!({"type": "string", "properties": {}}));
        assert!(node.is_object_shaped());
    }

    #[test]
    fn test_required_set() {
        let node = SchemaNode::from_value(&json!({
            "properties": {"a": {}},
            "required": ["a", "ghost", 3]
        }));

        let required = node.required_set();
        assert!(required.contains("a"));
        assert!(required.contains("ghost"));
        assert_eq!(required.len(), 2);
    }

    #[test]
    fn test_items_single_and_tuple() {
        let node = SchemaNode::from_value(&json!({"items": {"type": "string"}}));
        assert!(matches!(node.items, Some(Items::Single(_))));

        let node = SchemaNode::from_value(&json!({"items": [{"type": "string"}, 7]}));
        match node.items {
            Some(Items::Tuple(elems)) => {
                assert_eq!(elems.len(), 2);
                assert_eq!(elems[1], SchemaNode::default());
            }
            other => panic!("expected tuple items, got {:?}", other),
        }
    }

    #[test]
    fn test_enum_literals() {
        let node = SchemaNode::from_value(&json!({"enum": ["a", 1, true, null, "a"]}));
        assert_eq!(
            node.enum_values,
            Some(vec![
                "a".to_string(),
                "1".to_string(),
                "true".to_string(),
                "null".to_string(),
                "a".to_string(),
            ])
        );
    }

    #[test]
    fn test_malformed_keywords_are_dropped() {
        let node = SchemaNode::from_value(&json!({
            "type": 5,
            "enum": "x",
            "properties": [1],
            "required": "id",
            "items": "nope",
            "description": 7
        }));

        assert_eq!(node, SchemaNode::default());
    }

    #[test]
    fn test_non_object_schema_is_empty() {
        assert_eq!(SchemaNode::from_value(&json!(true)), SchemaNode::default());
        assert_eq!(SchemaNode::from_value(&json!("string")), SchemaNode::default());
    }

    #[test]
    fn test_yaml_source() {
        let node = SchemaNode::from_yaml_str("type: array\nitems:\n  type: number\n").unwrap();
        assert_eq!(node.type_decl, Some(TypeDecl::Single("array".to_string())));
        assert!(matches!(node.items, Some(Items::Single(_))));
    }

    #[test]
    fn test_decode_depth_is_bounded() {
        let mut schema = json!({"type": "string"});
        for _ in 0..(MAX_DECODE_DEPTH + 10) {
            schema = json!({"type": "array", "items": schema});
        }

        let mut node = SchemaNode::from_value(&schema);
        let mut depth = 0;
        while let Some(Items::Single(item)) = node.items {
            node = *item;
            depth += 1;
        }
        assert_eq!(depth, MAX_DECODE_DEPTH);
    }
}
