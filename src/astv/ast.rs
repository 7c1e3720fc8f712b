//! Input model for serialized compiler ASTs
//!
//! The AST arrives as untrusted JSON. Nothing here deserializes it into owned
//! typed structs: a node's shape is decided solely by its `type` tag, and every
//! field has to be checked before use, so the renderer works over borrowed
//! [`AstNode`] views of `serde_json::Value`s.
//!
//! - [`kind`]: the closed set of node kinds the renderer knows about
//! - [`codes`]: integer code tables used purely for display
//! - [`node`]: the borrowed node view, positions and scalar display rules

pub mod codes;
pub mod kind;
pub mod node;

pub use codes::CodeTable;
pub use kind::{NodeCategory, NodeKind};
pub use node::{display_scalar, is_falsy, AstNode, SourcePoint, BASE_KEYS};
