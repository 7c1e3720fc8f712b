//! Borrowed node view
//!
//! [`AstNode`] wraps one JSON value in a node position. It never fails to
//! construct: a value that is not an object behaves as a node with no keys.

use super::kind::NodeKind;
use serde_json::Value;

/// Keys every node may carry regardless of its variant
pub const BASE_KEYS: [&str; 3] = ["type", "pos", "value"];

/// Label shown for a missing `type` tag
pub const UNDEFINED_TAG: &str = "undefined";

/// A read-only view over one serialized AST node
#[derive(Debug, Clone, Copy)]
pub struct AstNode<'a> {
    raw: &'a Value,
    value_inapplicable: bool,
}

impl<'a> AstNode<'a> {
    pub fn new(raw: &'a Value) -> Self {
        // A derived node that does not use `value` still serializes it as null.
        let value_inapplicable = match raw.as_object() {
            Some(map) => {
                matches!(map.get("value"), Some(Value::Null))
                    && map.keys().all(|key| BASE_KEYS.contains(&key.as_str()))
            }
            None => false,
        };
        AstNode {
            raw,
            value_inapplicable,
        }
    }

    /// The underlying JSON value
    pub fn raw(&self) -> &'a Value {
        self.raw
    }

    pub fn is_object(&self) -> bool {
        self.raw.is_object()
    }

    /// The `type` tag, when it is a string
    pub fn tag(&self) -> Option<&'a str> {
        self.get("type").and_then(Value::as_str)
    }

    /// The `type` tag as displayed in headers and error messages
    pub fn tag_label(&self) -> String {
        match self.get("type") {
            None | Some(Value::Null) => UNDEFINED_TAG.to_string(),
            Some(tag) => display_scalar(tag),
        }
    }

    /// The node kind, if the tag is known
    pub fn kind(&self) -> Option<NodeKind> {
        self.tag().and_then(NodeKind::from_tag)
    }

    /// Access to a key after normalization
    ///
    /// An inapplicable `value` reads as absent, so extractors still report it
    /// the way they report any other missing key.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        if self.value_inapplicable && key == "value" {
            return None;
        }
        self.raw.as_object().and_then(|map| map.get(key))
    }

    /// Whether the key is present and not `null`
    pub fn present(&self, key: &str) -> bool {
        !matches!(self.get(key), None | Some(Value::Null))
    }

    pub fn value_inapplicable(&self) -> bool {
        self.value_inapplicable
    }
}

/// JavaScript-style falsiness, used by optional extraction and list elements
pub fn is_falsy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64().map_or(false, |f| f == 0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => false,
    }
}

/// Render a scalar the way fields display it
///
/// Strings are shown verbatim (no quotes); everything else uses compact JSON.
pub fn display_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// One end of a source span: `[index, row, column]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourcePoint<'a> {
    pub index: &'a Value,
    pub row: &'a Value,
    pub column: &'a Value,
}

impl<'a> SourcePoint<'a> {
    /// Read a position triple, `None` if it is not an array of at least three items
    pub fn from_value(value: Option<&'a Value>) -> Option<Self> {
        match value? {
            Value::Array(items) if items.len() >= 3 => Some(SourcePoint {
                index: &items[0],
                row: &items[1],
                column: &items[2],
            }),
            _ => None,
        }
    }
}
