//! # astv
//!
//! Renders serialized Pascal compiler ASTs as collapsible trees.
//!
//! The library is split in two layers:
//! - [`astv::render`] walks the untrusted AST JSON and builds a generic
//!   [`astv::tree::RenderedTree`], embedding error fields wherever the input is
//!   malformed instead of failing.
//! - [`astv::presentation`] registers the collapsible containers of a rendered
//!   tree, hands out header accents and implements the bulk toggles.
//!
//! Everything else (loading, exporters, the terminal viewer) consumes those two.

pub mod astv;
