//! Rendered tree model
//!
//! The output of the node renderer: a generic, display-agnostic tree of
//! labeled containers. Two kinds of container exist:
//! - a [`RenderedNode`], one per AST node, headed by its type tag
//! - a [`Property`], a labeled group of items (a child node, a list of child
//!   nodes, position fields, or an error)
//!
//! Leaves are [`Field`]s. Error fields are ordinary fields keyed `error` that
//! also carry the structured [`FieldError`].
//!
//! Containers are addressed by [`ContainerId`], the path of body indexes from
//! the root node. Ids stay valid for the lifetime of a tree since rendered
//! trees are never restructured, only their collapse bits change.

use crate::astv::render::FieldError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_TREE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one render result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TreeId(u64);

impl TreeId {
    /// Allocate a process-unique id
    pub fn next() -> Self {
        TreeId(NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for TreeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tree#{}", self.0)
    }
}

/// A rendered AST together with its identity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedTree {
    pub id: TreeId,
    pub root: RenderedNode,
}

/// One rendered AST node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedNode {
    /// The node's type tag, shown as its header
    pub kind: String,
    /// Chrome-suppressed: drawn without border or toggle
    pub nested: bool,
    pub collapsed: bool,
    pub body: Vec<Item>,
}

/// An entry in a container body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "item", rename_all = "snake_case")]
pub enum Item {
    Field(Field),
    Property(Property),
    Node(RenderedNode),
}

/// A leaf `label: value` row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub key: String,
    pub label: String,
    pub value: FieldValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<FieldError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

/// A labeled, collapsible group of items
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    pub key: String,
    pub label: String,
    pub nested: bool,
    pub collapsed: bool,
    pub body: Vec<Item>,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

impl Field {
    pub fn text(key: impl Into<String>, label: impl Into<String>, text: impl Into<String>) -> Self {
        Field {
            key: key.into(),
            label: label.into(),
            value: FieldValue::Text(text.into()),
            error: None,
        }
    }

    pub fn list(key: impl Into<String>, label: impl Into<String>, items: Vec<String>) -> Self {
        Field {
            key: key.into(),
            label: label.into(),
            value: FieldValue::List(items),
            error: None,
        }
    }

    /// An error field: key `error`, label `Error`, the message as its value
    pub fn error(error: FieldError) -> Self {
        Field {
            key: "error".to_string(),
            label: "Error".to_string(),
            value: FieldValue::Text(error.to_string()),
            error: Some(error),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// The value as text, if it is not a list
    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            FieldValue::Text(text) => Some(text),
            FieldValue::List(_) => None,
        }
    }
}

impl Property {
    pub fn new(key: impl Into<String>, label: impl Into<String>, collapsed: bool) -> Self {
        Property {
            key: key.into(),
            label: label.into(),
            nested: false,
            collapsed,
            body: Vec::new(),
        }
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.body.push(item);
        self
    }

    pub fn push(&mut self, item: impl Into<Item>) {
        self.body.push(item.into());
    }

    pub fn field(&self, key: &str) -> Option<&Field> {
        find_field(&self.body, key)
    }

    pub fn property(&self, key: &str) -> Option<&Property> {
        find_property(&self.body, key)
    }

    /// Child nodes directly in this property's body
    pub fn nodes(&self) -> impl Iterator<Item = &RenderedNode> {
        self.body.iter().filter_map(|item| match item {
            Item::Node(node) => Some(node),
            _ => None,
        })
    }

    /// Error fields directly in this property's body
    pub fn errors(&self) -> impl Iterator<Item = &FieldError> {
        self.body.iter().filter_map(|item| match item {
            Item::Field(field) => field.error.as_ref(),
            _ => None,
        })
    }
}

impl RenderedNode {
    pub fn new(kind: impl Into<String>, nested: bool) -> Self {
        RenderedNode {
            kind: kind.into(),
            nested,
            collapsed: false,
            body: Vec::new(),
        }
    }

    pub fn push(&mut self, item: impl Into<Item>) {
        self.body.push(item.into());
    }

    /// First field in the body with the given key
    pub fn field(&self, key: &str) -> Option<&Field> {
        find_field(&self.body, key)
    }

    /// First property in the body with the given key
    pub fn property(&self, key: &str) -> Option<&Property> {
        find_property(&self.body, key)
    }

    /// Errors that belong to this node
    ///
    /// Includes error fields in the body and inside its properties, but not
    /// errors of child nodes rendered within those properties.
    pub fn own_errors(&self) -> Vec<&FieldError> {
        let mut errors = Vec::new();
        collect_own_errors(&self.body, &mut errors);
        errors
    }
}

fn find_field<'t>(body: &'t [Item], key: &str) -> Option<&'t Field> {
    body.iter().find_map(|item| match item {
        Item::Field(field) if field.key == key => Some(field),
        _ => None,
    })
}

fn find_property<'t>(body: &'t [Item], key: &str) -> Option<&'t Property> {
    body.iter().find_map(|item| match item {
        Item::Property(prop) if prop.key == key => Some(prop),
        _ => None,
    })
}

fn collect_own_errors<'t>(body: &'t [Item], out: &mut Vec<&'t FieldError>) {
    for item in body {
        match item {
            Item::Field(field) => out.extend(field.error.as_ref()),
            Item::Property(prop) => collect_own_errors(&prop.body, out),
            Item::Node(_) => {}
        }
    }
}

impl From<Field> for Item {
    fn from(field: Field) -> Self {
        Item::Field(field)
    }
}

impl From<Property> for Item {
    fn from(prop: Property) -> Self {
        Item::Property(prop)
    }
}

impl From<RenderedNode> for Item {
    fn from(node: RenderedNode) -> Self {
        Item::Node(node)
    }
}

/// Path of body indexes from the root node to a container
///
/// The empty path is the root node itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(Vec<usize>);

impl ContainerId {
    pub fn root() -> Self {
        ContainerId(Vec::new())
    }

    pub fn new(path: &[usize]) -> Self {
        ContainerId(path.to_vec())
    }

    pub fn path(&self) -> &[usize] {
        &self.0
    }

    pub fn child(&self, index: usize) -> ContainerId {
        let mut path = self.0.clone();
        path.push(index);
        ContainerId(path)
    }

    pub fn parent(&self) -> Option<ContainerId> {
        let (_, rest) = self.0.split_last()?;
        Some(ContainerId(rest.to_vec()))
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("/");
        }
        for index in &self.0 {
            write!(f, "/{}", index)?;
        }
        Ok(())
    }
}

/// A borrowed container: either a node or a property
#[derive(Debug, Clone, Copy)]
pub enum ContainerRef<'t> {
    Node(&'t RenderedNode),
    Property(&'t Property),
}

impl<'t> ContainerRef<'t> {
    /// Header text: the type tag of a node, the label of a property
    pub fn label(&self) -> &'t str {
        match self {
            ContainerRef::Node(node) => &node.kind,
            ContainerRef::Property(prop) => &prop.label,
        }
    }

    /// The property key, `None` for nodes
    pub fn key(&self) -> Option<&'t str> {
        match self {
            ContainerRef::Node(_) => None,
            ContainerRef::Property(prop) => Some(&prop.key),
        }
    }

    pub fn nested(&self) -> bool {
        match self {
            ContainerRef::Node(node) => node.nested,
            ContainerRef::Property(prop) => prop.nested,
        }
    }

    pub fn collapsed(&self) -> bool {
        match self {
            ContainerRef::Node(node) => node.collapsed,
            ContainerRef::Property(prop) => prop.collapsed,
        }
    }

    pub fn body(&self) -> &'t [Item] {
        match self {
            ContainerRef::Node(node) => &node.body,
            ContainerRef::Property(prop) => &prop.body,
        }
    }

    pub fn is_node(&self) -> bool {
        matches!(self, ContainerRef::Node(_))
    }
}

/// Summary counts of a rendered tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    pub nodes: usize,
    pub properties: usize,
    pub fields: usize,
    /// Error fields per error code
    pub errors: BTreeMap<&'static str, usize>,
}

impl TreeStats {
    pub fn error_count(&self) -> usize {
        self.errors.values().sum()
    }
}

impl RenderedTree {
    pub fn new(root: RenderedNode) -> Self {
        RenderedTree {
            id: TreeId::next(),
            root,
        }
    }

    /// Resolve a container id
    pub fn container(&self, id: &ContainerId) -> Option<ContainerRef<'_>> {
        let Some((&last, parents)) = id.path().split_last() else {
            return Some(ContainerRef::Node(&self.root));
        };
        let mut body: &[Item] = &self.root.body;
        for &index in parents {
            body = match body.get(index)? {
                Item::Node(node) => &node.body,
                Item::Property(prop) => &prop.body,
                Item::Field(_) => return None,
            };
        }
        match body.get(last)? {
            Item::Node(node) => Some(ContainerRef::Node(node)),
            Item::Property(prop) => Some(ContainerRef::Property(prop)),
            Item::Field(_) => None,
        }
    }

    /// Set a container's collapse bit, `false` if the id does not name a container
    pub fn set_collapsed(&mut self, id: &ContainerId, collapsed: bool) -> bool {
        if id.is_root() {
            self.root.collapsed = collapsed;
            return true;
        }
        match item_at_mut(&mut self.root.body, id.path()) {
            Some(Item::Node(node)) => node.collapsed = collapsed,
            Some(Item::Property(prop)) => prop.collapsed = collapsed,
            Some(Item::Field(_)) | None => return false,
        }
        true
    }

    pub fn is_collapsed(&self, id: &ContainerId) -> Option<bool> {
        self.container(id).map(|container| container.collapsed())
    }

    /// Every container in document (pre-)order, the root first
    pub fn containers(&self) -> Vec<(ContainerId, ContainerRef<'_>)> {
        let mut out = vec![(ContainerId::root(), ContainerRef::Node(&self.root))];
        collect_containers(&self.root.body, &ContainerId::root(), &mut out);
        out
    }

    /// Every error field in the tree, with the container holding it
    pub fn errors(&self) -> Vec<(ContainerId, &FieldError)> {
        let mut out = Vec::new();
        for (id, container) in self.containers() {
            for item in container.body() {
                if let Item::Field(Field {
                    error: Some(error), ..
                }) = item
                {
                    out.push((id.clone(), error));
                }
            }
        }
        out
    }

    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        for (_, container) in self.containers() {
            match container {
                ContainerRef::Node(_) => stats.nodes += 1,
                ContainerRef::Property(_) => stats.properties += 1,
            }
            for item in container.body() {
                if let Item::Field(field) = item {
                    stats.fields += 1;
                    if let Some(error) = &field.error {
                        *stats.errors.entry(error.code()).or_default() += 1;
                    }
                }
            }
        }
        stats
    }
}

fn collect_containers<'t>(
    body: &'t [Item],
    parent: &ContainerId,
    out: &mut Vec<(ContainerId, ContainerRef<'t>)>,
) {
    for (index, item) in body.iter().enumerate() {
        let id = parent.child(index);
        match item {
            Item::Node(node) => {
                out.push((id.clone(), ContainerRef::Node(node)));
                collect_containers(&node.body, &id, out);
            }
            Item::Property(prop) => {
                out.push((id.clone(), ContainerRef::Property(prop)));
                collect_containers(&prop.body, &id, out);
            }
            Item::Field(_) => {}
        }
    }
}

fn item_at_mut<'t>(body: &'t mut [Item], path: &[usize]) -> Option<&'t mut Item> {
    let (first, rest) = path.split_first()?;
    let item = body.get_mut(*first)?;
    if rest.is_empty() {
        return Some(item);
    }
    match item {
        Item::Node(node) => item_at_mut(&mut node.body, rest),
        Item::Property(prop) => item_at_mut(&mut prop.body, rest),
        Item::Field(_) => None,
    }
}
