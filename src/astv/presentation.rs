//! Tree presentation controller
//!
//! Holds the interaction state of one mounted [`RenderedTree`]:
//! - the registry of collapsible containers
//! - a rotating accent for every header
//! - the shared flag driving the bulk expand/collapse toggles
//!
//! A [`PresentationState`] belongs to exactly one tree at a time. Attaching a
//! new tree resets everything; operations carrying any other tree are
//! rejected.

use crate::astv::render::extract::POSITION_KEY;
use crate::astv::tree::{ContainerId, ContainerRef, RenderedTree, TreeId};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Accent colors assigned to headers, in rotation order
pub const DEFAULT_PALETTE: [&str; 5] = ["#f44336", "#4caf50", "#2196f3", "#ff9800", "#9c27b0"];

/// Fixed list of accent colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// Build a palette, falling back to the default one when `colors` is empty
    pub fn new(colors: Vec<String>) -> Self {
        if colors.is_empty() {
            return Palette::default();
        }
        Palette { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn color(&self, accent: Accent) -> &str {
        &self.colors[accent.0 % self.colors.len()]
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            colors: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Index of a palette color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Accent(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    /// The type tag heading a rendered node
    NodeType,
    /// The label heading a property
    Property,
}

/// One scanned header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub id: ContainerId,
    pub kind: HeaderKind,
    pub accent: Accent,
    /// Whether clicking this header toggles its container
    pub collapsible: bool,
}

/// State of the shared bulk-toggle flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BulkState {
    /// Next bulk toggle expands
    #[default]
    Collapsed,
    /// Next bulk toggle collapses
    Expanded,
}

impl BulkState {
    fn flipped(self) -> Self {
        match self {
            BulkState::Collapsed => BulkState::Expanded,
            BulkState::Expanded => BulkState::Collapsed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PresentationState {
    palette: Palette,
    tree: Option<TreeId>,
    headers: Vec<Header>,
    by_container: HashMap<ContainerId, usize>,
    collapsible: Vec<ContainerId>,
    bulk: BulkState,
}

impl PresentationState {
    /// A fresh state attached to `tree`, using the default palette
    pub fn new(tree: &RenderedTree) -> Self {
        Self::with_palette(Palette::default(), tree)
    }

    pub fn with_palette(palette: Palette, tree: &RenderedTree) -> Self {
        let mut state = Self::detached(palette);
        state.attach(tree);
        state
    }

    /// A state not attached to any tree yet; every operation is rejected until [`attach`](Self::attach)
    pub fn detached(palette: Palette) -> Self {
        PresentationState {
            palette,
            tree: None,
            headers: Vec::new(),
            by_container: HashMap::new(),
            collapsible: Vec::new(),
            bulk: BulkState::Collapsed,
        }
    }

    /// Scan `tree` and make it the attached tree
    ///
    /// Node-type headers are visited first, then property headers, both in
    /// document order. The accent cursor restarts at the first palette color
    /// on every call.
    pub fn attach(&mut self, tree: &RenderedTree) {
        self.tree = Some(tree.id);
        self.headers.clear();
        self.by_container.clear();
        self.collapsible.clear();
        self.bulk = BulkState::Collapsed;

        let containers = tree.containers();
        let nodes = containers.iter().filter(|(_, c)| c.is_node());
        let props = containers.iter().filter(|(_, c)| !c.is_node());

        for (cursor, (id, container)) in nodes.chain(props).enumerate() {
            let kind = match container {
                ContainerRef::Node(_) => HeaderKind::NodeType,
                ContainerRef::Property(_) => HeaderKind::Property,
            };
            let collapsible = !container.nested();
            if collapsible {
                self.collapsible.push(id.clone());
            }
            self.by_container.insert(id.clone(), self.headers.len());
            self.headers.push(Header {
                id: id.clone(),
                kind,
                accent: Accent(cursor % self.palette.len()),
                collapsible,
            });
        }

        debug!(
            tree = %tree.id,
            headers = self.headers.len(),
            collapsible = self.collapsible.len(),
            "attached presentation state"
        );
    }

    pub fn tree_id(&self) -> Option<TreeId> {
        self.tree
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Headers in scan order
    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    pub fn header(&self, id: &ContainerId) -> Option<&Header> {
        self.by_container.get(id).map(|&index| &self.headers[index])
    }

    pub fn accent(&self, id: &ContainerId) -> Option<Accent> {
        self.header(id).map(|header| header.accent)
    }

    /// The accent color of a container's header
    pub fn color(&self, id: &ContainerId) -> Option<&str> {
        self.accent(id).map(|accent| self.palette.color(accent))
    }

    pub fn is_collapsible(&self, id: &ContainerId) -> bool {
        self.header(id).map_or(false, |header| header.collapsible)
    }

    /// Registered collapsible containers, in scan order
    pub fn collapsible(&self) -> &[ContainerId] {
        &self.collapsible
    }

    pub fn bulk_state(&self) -> BulkState {
        self.bulk
    }

    /// Flip a single container's body
    pub fn toggle(&mut self, tree: &mut RenderedTree, id: &ContainerId) -> bool {
        if !self.accepts(tree, "toggle") {
            return false;
        }
        if !self.is_collapsible(id) {
            debug!(container = %id, "toggle ignored for non-collapsible container");
            return false;
        }
        match tree.is_collapsed(id) {
            Some(collapsed) => tree.set_collapsed(id, !collapsed),
            None => false,
        }
    }

    /// Expand or collapse every registered container
    pub fn toggle_all(&mut self, tree: &mut RenderedTree) -> bool {
        if !self.accepts(tree, "toggle_all") {
            return false;
        }
        let collapse = self.bulk == BulkState::Expanded;
        for id in &self.collapsible {
            tree.set_collapsed(id, collapse);
        }
        self.bulk = self.bulk.flipped();
        true
    }

    /// Like [`toggle_all`](Self::toggle_all), but position blocks stay collapsed when expanding
    pub fn toggle_all_except_positions(&mut self, tree: &mut RenderedTree) -> bool {
        if !self.accepts(tree, "toggle_all_except_positions") {
            return false;
        }
        let collapse = self.bulk == BulkState::Expanded;
        for id in &self.collapsible {
            let is_position = tree
                .container(id)
                .and_then(|container| container.key())
                .map_or(false, |key| key == POSITION_KEY);
            tree.set_collapsed(id, collapse || is_position);
        }
        self.bulk = self.bulk.flipped();
        true
    }

    fn accepts(&self, tree: &RenderedTree, operation: &str) -> bool {
        if self.tree == Some(tree.id) {
            return true;
        }
        warn!(
            operation,
            tree = %tree.id,
            attached = ?self.tree,
            "rejected presentation operation on a tree that is not attached"
        );
        false
    }
}
