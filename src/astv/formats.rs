//! Export formats for rendered trees
//!
//! Each format implements [`Formatter`] and is looked up by name through the
//! [`FormatRegistry`]:
//! - `treeviz`: one line per item, with box-drawing connectors
//! - `json` / `yaml`: the serde form of the [`RenderedTree`]
//! - `html`: a standalone page with collapsible `<details>` containers

pub mod data;
pub mod html;
pub mod registry;
pub mod treeviz;

pub use data::{JsonFormatter, YamlFormatter};
pub use html::{to_html_str, HtmlFormatter};
pub use registry::{ExportContext, FormatError, FormatRegistry, Formatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};

use crate::astv::config::ExportConfig;
use crate::astv::render::extract::POSITION_KEY;
use crate::astv::tree::{Item, RenderedNode, RenderedTree};
use std::borrow::Cow;

/// Options shared by all exporters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Skip the bodies of collapsed containers
    pub honor_collapse: bool,
    /// Keep the `Pos` block of every node
    pub show_positions: bool,
    /// Maximum characters of a field value in text output
    pub label_width: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            honor_collapse: false,
            show_positions: true,
            label_width: 30,
        }
    }
}

impl ExportOptions {
    pub fn from_config(config: &ExportConfig) -> Self {
        ExportOptions {
            honor_collapse: false,
            show_positions: config.show_positions,
            label_width: config.label_width,
        }
    }

    /// Whether an item is emitted at all
    pub(crate) fn includes(&self, item: &Item) -> bool {
        match item {
            Item::Property(prop) => self.show_positions || prop.key != POSITION_KEY,
            _ => true,
        }
    }

    /// The tree with position blocks removed, when they are hidden
    ///
    /// Only for formats that do not address containers by id.
    pub(crate) fn prune<'t>(&self, tree: &'t RenderedTree) -> Cow<'t, RenderedTree> {
        if self.show_positions {
            return Cow::Borrowed(tree);
        }
        let mut pruned = tree.clone();
        strip_positions(&mut pruned.root);
        Cow::Owned(pruned)
    }
}

fn strip_positions(node: &mut RenderedNode) {
    node.body
        .retain(|item| !matches!(item, Item::Property(prop) if prop.key == POSITION_KEY));
    for item in &mut node.body {
        strip_item(item);
    }
}

fn strip_item(item: &mut Item) {
    match item {
        Item::Node(node) => strip_positions(node),
        Item::Property(prop) => prop.body.iter_mut().for_each(strip_item),
        Item::Field(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astv::render::render_tree;
    use serde_json::json;

    #[test]
    fn test_prune_removes_every_position_block() {
        let tree = render_tree(&json!({
            "type": "UnsignedConstantNode",
            "value": {"type": "NumberNode", "value": "1", "kind": 2}
        }));
        let options = ExportOptions {
            show_positions: false,
            ..ExportOptions::default()
        };
        let pruned = options.prune(&tree);
        assert!(pruned.root.property("pos").is_none());
        let child = pruned.root.property("value").unwrap().nodes().next().unwrap();
        assert!(child.property("pos").is_none());
        assert!(child.field("kind").is_some());
    }

    #[test]
    fn test_prune_borrows_when_positions_shown() {
        let tree = render_tree(&json!({"type": "StringNode", "value": "s"}));
        assert!(matches!(ExportOptions::default().prune(&tree), Cow::Borrowed(_)));
    }
}
