//! Node renderer
//!
//! Walks an untrusted AST and produces a [`RenderedNode`] per AST node. The
//! render itself cannot fail: malformed input becomes error fields embedded at
//! the point of the problem (see [`FieldError`]).
//!
//! Every node is laid out the same way:
//! 1. the `Pos` block
//! 2. either the fields of its variant schema, in schema order, or a single
//!    `Unknown node type` error when the tag is not recognized
//!
//! The `nested` flag only marks the node as chrome-suppressed; it never changes
//! what is extracted.

pub mod error;
pub mod extract;
pub mod schema;

pub use error::FieldError;
pub use schema::{fields_of, FieldSpec, OnMissing, Presence, Shape};

use crate::astv::ast::AstNode;
use crate::astv::tree::{Field, RenderedNode, RenderedTree};
use serde_json::Value;
use tracing::{debug, trace};

/// Render one AST node (and, recursively, its children)
pub fn render(value: &Value, nested: bool) -> RenderedNode {
    let node = AstNode::new(value);
    let tag = node.tag_label();
    trace!(tag = %tag, nested, "rendering node");

    let mut rendered = RenderedNode::new(tag, nested);
    rendered.push(extract::position_block(&node));

    match node.kind() {
        Some(kind) => {
            for field in fields_of(kind) {
                extract::extract(&node, field, &mut rendered);
            }
        }
        None => {
            debug!(tag = %rendered.kind, "unknown node type");
            let error = FieldError::UnknownNodeType(rendered.kind.clone());
            rendered.push(Field::error(error));
        }
    }
    rendered
}

/// Render an AST root into a fresh tree with its own identity
pub fn render_tree(root: &Value) -> RenderedTree {
    let tree = RenderedTree::new(render(root, false));
    debug!(tree = %tree.id, kind = %tree.root.kind, "rendered tree");
    tree
}
