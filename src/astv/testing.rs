//! Testing utilities for rendered trees
//!
//!     Two halves:
//!
//!         - [`ast`]: small factories building AST JSON the way the compiler
//!           serializes it, plus [`fixture`] for the curated dumps in
//!           `tests/fixtures/`.
//!         - [`assert_rendered`]: a fluent assertion API over [`RenderedNode`],
//!           so tests state what they expect of a render without walking
//!           body indexes by hand.
//!
//!     Usage:
//!
//!     ```rust,ignore
//!     let node = render(&ast::number("5", 2), false);
//!     assert_rendered(&node)
//!         .kind("NumberNode")
//!         .field("value", "5")
//!         .field("kind", "UNSIGNED_INTEGER (2)")
//!         .no_errors();
//!     ```

use crate::astv::render::FieldError;
use crate::astv::tree::{FieldValue, Item, Property, RenderedNode};
use serde_json::Value;
use std::path::PathBuf;

/// Directory holding the curated AST dumps
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// Load `tests/fixtures/<name>.json`
///
/// Panics when the fixture is missing or not JSON.
pub fn fixture(name: &str) -> Value {
    let path = fixtures_dir().join(format!("{}.json", name));
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("fixture {} unreadable: {}", path.display(), e));
    serde_json::from_str(&text).unwrap_or_else(|e| panic!("fixture {} invalid: {}", name, e))
}

/// AST JSON factories
pub mod ast {
    use serde_json::{json, Map, Value};

    /// A `pos` object from two `[index, row, column]` triples
    pub fn pos(start: [u64; 3], end: [u64; 3]) -> Value {
        json!({"start": start, "end": end})
    }

    /// A node with a tag, a dummy position and extra fields
    pub fn node(tag: &str, fields: Value) -> Value {
        let mut map = Map::new();
        map.insert("type".into(), Value::from(tag));
        map.insert("pos".into(), pos([0, 1, 1], [1, 1, 2]));
        if let Value::Object(extra) = fields {
            map.extend(extra);
        }
        Value::Object(map)
    }

    pub fn identifier(name: &str) -> Value {
        node("IdentifierNode", json!({"value": name}))
    }

    pub fn number(value: &str, kind: u64) -> Value {
        node("NumberNode", json!({"value": value, "kind": kind}))
    }

    pub fn entire_variable(name: &str) -> Value {
        node(
            "EntireVariableNode",
            json!({"kind": 2, "staticType": null, "value": name}),
        )
    }

    pub fn assignment(target: &str, value: Value) -> Value {
        node(
            "AssignmentStatementNode",
            json!({"_label": null, "key": entire_variable(target), "value": value}),
        )
    }

    pub fn compound(statements: Vec<Value>) -> Value {
        node(
            "CompoundStatementNode",
            json!({"_label": null, "value": statements}),
        )
    }
}

/// Start a fluent assertion on a rendered node
pub fn assert_rendered(node: &RenderedNode) -> NodeAssertion<'_> {
    NodeAssertion {
        node,
        context: node.kind.clone(),
    }
}

pub struct NodeAssertion<'t> {
    node: &'t RenderedNode,
    context: String,
}

impl<'t> NodeAssertion<'t> {
    pub fn kind(self, expected: &str) -> Self {
        assert_eq!(self.node.kind, expected, "{}: kind", self.context);
        self
    }

    pub fn nested(self, expected: bool) -> Self {
        assert_eq!(self.node.nested, expected, "{}: nested flag", self.context);
        self
    }

    /// A text field with this key exists and shows `expected`
    pub fn field(self, key: &str, expected: &str) -> Self {
        let field = self
            .node
            .field(key)
            .unwrap_or_else(|| panic!("{}: no field '{}'", self.context, key));
        assert_eq!(
            field.value,
            FieldValue::Text(expected.to_string()),
            "{}: field '{}'",
            self.context,
            key
        );
        self
    }

    pub fn field_list(self, key: &str, expected: &[&str]) -> Self {
        let field = self
            .node
            .field(key)
            .unwrap_or_else(|| panic!("{}: no field '{}'", self.context, key));
        let expected = expected.iter().map(|s| s.to_string()).collect();
        assert_eq!(field.value, FieldValue::List(expected), "{}: field '{}'", self.context, key);
        self
    }

    /// Neither a field nor a property uses this key
    pub fn absent(self, key: &str) -> Self {
        assert!(
            self.node.field(key).is_none() && self.node.property(key).is_none(),
            "{}: '{}' should not be rendered",
            self.context,
            key
        );
        self
    }

    /// Exactly these errors belong to this node, in order
    pub fn errors(self, expected: &[FieldError]) -> Self {
        let actual: Vec<FieldError> = self.node.own_errors().into_iter().cloned().collect();
        assert_eq!(actual, expected, "{}: errors", self.context);
        self
    }

    pub fn no_errors(self) -> Self {
        self.errors(&[])
    }

    /// Keys of the body items after the position block, in order
    pub fn keys(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self
            .node
            .body
            .iter()
            .skip(1)
            .map(|item| match item {
                Item::Field(field) => field.key.as_str(),
                Item::Property(prop) => prop.key.as_str(),
                Item::Node(node) => node.kind.as_str(),
            })
            .collect();
        assert_eq!(actual, expected, "{}: body keys", self.context);
        self
    }

    pub fn property<F>(self, key: &str, check: F) -> Self
    where
        F: FnOnce(PropertyAssertion<'t>),
    {
        let prop = self
            .node
            .property(key)
            .unwrap_or_else(|| panic!("{}: no property '{}'", self.context, key));
        check(PropertyAssertion {
            prop,
            context: format!("{}.{}", self.context, key),
        });
        self
    }
}

pub struct PropertyAssertion<'t> {
    prop: &'t Property,
    context: String,
}

impl<'t> PropertyAssertion<'t> {
    pub fn label(self, expected: &str) -> Self {
        assert_eq!(self.prop.label, expected, "{}: label", self.context);
        self
    }

    pub fn collapsed(self, expected: bool) -> Self {
        assert_eq!(self.prop.collapsed, expected, "{}: collapsed", self.context);
        self
    }

    pub fn node_count(self, expected: usize) -> Self {
        assert_eq!(self.prop.nodes().count(), expected, "{}: node count", self.context);
        self
    }

    /// Errors directly inside the property body, in order
    pub fn errors(self, expected: &[FieldError]) -> Self {
        let actual: Vec<FieldError> = self.prop.errors().cloned().collect();
        assert_eq!(actual, expected, "{}: errors", self.context);
        self
    }

    pub fn field(self, key: &str, expected: &str) -> Self {
        let field = self
            .prop
            .field(key)
            .unwrap_or_else(|| panic!("{}: no field '{}'", self.context, key));
        assert_eq!(field.as_text(), Some(expected), "{}: field '{}'", self.context, key);
        self
    }

    /// Assert on the `index`-th child node of the property
    pub fn node<F>(self, index: usize, check: F) -> Self
    where
        F: FnOnce(NodeAssertion<'t>),
    {
        let node = self
            .prop
            .nodes()
            .nth(index)
            .unwrap_or_else(|| panic!("{}: no child node {}", self.context, index));
        check(NodeAssertion {
            node,
            context: format!("{}[{}]", self.context, index),
        });
        self
    }

    /// Shape of the body: `node:<Kind>` or `error:<code>` or `field:<key>` per item
    pub fn shape(self, expected: &[&str]) -> Self {
        let actual: Vec<String> = self
            .prop
            .body
            .iter()
            .map(|item| match item {
                Item::Node(node) => format!("node:{}", node.kind),
                Item::Field(field) => match &field.error {
                    Some(error) => format!("error:{}", error.code()),
                    None => format!("field:{}", field.key),
                },
                Item::Property(prop) => format!("property:{}", prop.key),
            })
            .collect();
        assert_eq!(actual, expected, "{}: body shape", self.context);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astv::render::render;

    #[test]
    fn test_factories_render_cleanly() {
        let node = render(&ast::compound(vec![ast::assignment("x", ast::number("1", 2))]), false);
        assert_rendered(&node)
            .kind("CompoundStatementNode")
            .keys(&["_label", "value"])
            .field("_label", "null")
            .no_errors()
            .property("value", |prop| {
                prop.collapsed(true).node_count(1).node(0, |stmt| {
                    stmt.kind("AssignmentStatementNode").nested(false).no_errors();
                });
            });
    }
}
