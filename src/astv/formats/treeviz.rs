//! Treeviz formatter for rendered trees
//!
//! One line per item, nesting drawn with box connectors:
//!
//! <prefix><connector> <icon> <text>
//!
//! Icons
//!     Node: ◆
//!     Property: ▾ (expanded) / ▸ (collapsed)
//!     Field: ·
//!     Error field: ✗
//!
//! Field values longer than `label_width` characters are truncated.

use super::registry::{ExportContext, FormatError, Formatter};
use super::ExportOptions;
use crate::astv::tree::{Field, Item, RenderedNode, RenderedTree};

pub const NODE_ICON: &str = "◆";
pub const EXPANDED_ICON: &str = "▾";
pub const COLLAPSED_ICON: &str = "▸";
pub const FIELD_ICON: &str = "·";
pub const ERROR_ICON: &str = "✗";

pub(crate) fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub(crate) fn field_line(field: &Field, width: usize) -> String {
    format!("{}: {}", field.label, truncate(&field.value.to_string(), width))
}

fn header(item: &Item, options: &ExportOptions) -> String {
    match item {
        Item::Node(node) => format!("{} {}", NODE_ICON, node.kind),
        Item::Property(prop) => {
            let icon = if prop.collapsed { COLLAPSED_ICON } else { EXPANDED_ICON };
            format!("{} {}", icon, prop.label)
        }
        Item::Field(field) => {
            let icon = if field.is_error() { ERROR_ICON } else { FIELD_ICON };
            format!("{} {}", icon, field_line(field, options.label_width))
        }
    }
}

/// The children to print below an item, if any
fn visible_body<'t>(item: &'t Item, options: &ExportOptions) -> &'t [Item] {
    let (collapsed, body) = match item {
        Item::Node(node) => (node.collapsed, node.body.as_slice()),
        Item::Property(prop) => (prop.collapsed, prop.body.as_slice()),
        Item::Field(_) => return &[],
    };
    if collapsed && options.honor_collapse {
        &[]
    } else {
        body
    }
}

fn format_items(body: &[Item], prefix: &str, options: &ExportOptions, output: &mut String) {
    let items: Vec<&Item> = body.iter().filter(|item| options.includes(item)).collect();
    let count = items.len();

    for (index, item) in items.into_iter().enumerate() {
        let is_last = index == count - 1;
        let connector = if is_last { "└─" } else { "├─" };
        output.push_str(&format!("{}{} {}\n", prefix, connector, header(item, options)));

        let children = visible_body(item, options);
        if !children.is_empty() {
            let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
            format_items(children, &child_prefix, options, output);
        }
    }
}

fn format_root(root: &RenderedNode, options: &ExportOptions) -> String {
    let mut output = format!("{} {}\n", NODE_ICON, root.kind);
    if !(root.collapsed && options.honor_collapse) {
        format_items(&root.body, "", options, &mut output);
    }
    output
}

pub fn to_treeviz_str(tree: &RenderedTree, options: &ExportOptions) -> String {
    format_root(&tree.root, options)
}

/// Formatter implementation for treeviz format
pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, ctx: &ExportContext<'_>) -> Result<String, FormatError> {
        Ok(to_treeviz_str(ctx.tree, &ctx.options))
    }

    fn description(&self) -> &str {
        "Visual tree representation with box connectors and Unicode icons"
    }
}
