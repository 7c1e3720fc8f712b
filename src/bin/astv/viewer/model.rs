//! Viewer model
//!
//! Owns the rendered tree of the open file together with its presentation
//! state, and flattens the visible part of the tree into display lines.

use astv::astv::formats::treeviz::{
    COLLAPSED_ICON, ERROR_ICON, EXPANDED_ICON, FIELD_ICON, NODE_ICON,
};
use astv::astv::loader::{render_file, LoadError};
use astv::astv::presentation::{Accent, BulkState, Palette, PresentationState};
use astv::astv::tree::{ContainerId, Item, RenderedTree};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// What a display line shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Node,
    Property,
    Field,
    Error,
}

/// One visible row of the tree
///
/// `id` is the index path of the item. Fields are addressed the same way as
/// containers, so every line has a stable id while the tree is unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatLine {
    pub id: ContainerId,
    pub depth: usize,
    pub kind: LineKind,
    pub icon: &'static str,
    pub text: String,
    pub collapsed: bool,
    pub collapsible: bool,
    pub accent: Option<Accent>,
}

pub struct Model {
    source: PathBuf,
    tree: RenderedTree,
    presentation: PresentationState,
    last_error: Option<String>,
}

impl Model {
    pub fn new(source: PathBuf, tree: RenderedTree, palette: Palette) -> Self {
        let presentation = PresentationState::with_palette(palette, &tree);
        Model {
            source,
            tree,
            presentation,
            last_error: None,
        }
    }

    /// Load and render `path`
    pub fn load(path: impl AsRef<Path>, palette: Palette) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let tree = render_file(path)?;
        Ok(Model::new(path.to_path_buf(), tree, palette))
    }

    pub fn tree(&self) -> &RenderedTree {
        &self.tree
    }

    pub fn presentation(&self) -> &PresentationState {
        &self.presentation
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn file_name(&self) -> String {
        self.source
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string()
    }

    /// The message of the last failed reload, cleared by a successful one
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn bulk_state(&self) -> BulkState {
        self.presentation.bulk_state()
    }

    pub fn accent_color(&self, accent: Accent) -> &str {
        self.presentation.palette().color(accent)
    }

    pub fn toggle(&mut self, id: &ContainerId) -> bool {
        self.presentation.toggle(&mut self.tree, id)
    }

    pub fn toggle_all(&mut self) -> bool {
        self.presentation.toggle_all(&mut self.tree)
    }

    pub fn toggle_all_except_positions(&mut self) -> bool {
        self.presentation.toggle_all_except_positions(&mut self.tree)
    }

    /// Re-read the source file
    ///
    /// On failure the current tree stays mounted and the error is kept for
    /// the status line.
    pub fn reload(&mut self) -> bool {
        match render_file(&self.source) {
            Ok(tree) => {
                self.presentation.attach(&tree);
                self.tree = tree;
                self.last_error = None;
                debug!(tree = %self.tree.id, "reloaded");
                true
            }
            Err(err) => {
                warn!(path = %self.source.display(), "reload failed, keeping current tree");
                self.last_error = Some(err.to_string());
                true
            }
        }
    }

    /// Visible lines in document order
    pub fn flattened(&self) -> Vec<FlatLine> {
        let root = &self.tree.root;
        let id = ContainerId::root();
        let mut lines = vec![FlatLine {
            depth: 0,
            kind: LineKind::Node,
            icon: NODE_ICON,
            text: root.kind.clone(),
            collapsed: root.collapsed,
            collapsible: self.presentation.is_collapsible(&id),
            accent: self.presentation.accent(&id),
            id: id.clone(),
        }];
        if !root.collapsed {
            self.flatten_body(&root.body, &id, 1, &mut lines);
        }
        lines
    }

    fn flatten_body(&self, body: &[Item], parent: &ContainerId, depth: usize, lines: &mut Vec<FlatLine>) {
        for (index, item) in body.iter().enumerate() {
            let id = parent.child(index);
            let (line, children) = match item {
                Item::Node(node) => (
                    self.header_line(&id, depth, LineKind::Node, NODE_ICON, node.kind.clone(), node.collapsed),
                    (!node.collapsed).then_some(&node.body),
                ),
                Item::Property(prop) => {
                    let icon = if prop.collapsed { COLLAPSED_ICON } else { EXPANDED_ICON };
                    (
                        self.header_line(&id, depth, LineKind::Property, icon, prop.label.clone(), prop.collapsed),
                        (!prop.collapsed).then_some(&prop.body),
                    )
                }
                Item::Field(field) => {
                    let (kind, icon) = if field.is_error() {
                        (LineKind::Error, ERROR_ICON)
                    } else {
                        (LineKind::Field, FIELD_ICON)
                    };
                    let line = FlatLine {
                        id: id.clone(),
                        depth,
                        kind,
                        icon,
                        text: format!("{}: {}", field.label, field.value),
                        collapsed: false,
                        collapsible: false,
                        accent: None,
                    };
                    (line, None)
                }
            };
            lines.push(line);
            if let Some(children) = children {
                self.flatten_body(children, &id, depth + 1, lines);
            }
        }
    }

    fn header_line(
        &self,
        id: &ContainerId,
        depth: usize,
        kind: LineKind,
        icon: &'static str,
        text: String,
        collapsed: bool,
    ) -> FlatLine {
        FlatLine {
            id: id.clone(),
            depth,
            kind,
            icon,
            text,
            collapsed,
            collapsible: self.presentation.is_collapsible(id),
            accent: self.presentation.accent(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astv::astv::render::render_tree;
    use serde_json::json;

    fn model() -> Model {
        let tree = render_tree(&json!({
            "type": "UnsignedConstantNode",
            "pos": {"start": [0, 1, 1], "end": [1, 1, 2]},
            "value": {"type": "NumberNode", "value": "5", "kind": 2}
        }));
        Model::new(PathBuf::from("sample.json"), tree, Palette::default())
    }

    #[test]
    fn test_initial_lines() {
        let lines = model().flattened();
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "UnsignedConstantNode",
                "Pos",
                "Start",
                "Row: 1",
                "Column: 1",
                "Index: 0",
                "End",
                "Row: 1",
                "Column: 2",
                "Index: 1",
                "Value",
            ]
        );
        assert_eq!(lines[10].icon, COLLAPSED_ICON);
        assert_eq!(lines[3].depth, 3);
        assert_eq!(lines[0].accent, Some(Accent(0)));
    }

    #[test]
    fn test_toggle_reveals_children() {
        let mut model = model();
        assert!(model.toggle(&ContainerId::new(&[1])));
        let lines = model.flattened();
        let number = lines.iter().find(|l| l.text == "NumberNode").unwrap();
        assert_eq!(number.id, ContainerId::new(&[1, 0]));
        assert!(!number.collapsible);
        let error = lines.iter().find(|l| l.kind == LineKind::Error).unwrap();
        assert_eq!(error.text, "Error: Node Position is not defined.");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(model().file_name(), "sample.json");
    }
}
