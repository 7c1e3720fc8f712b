//! HTML export
//!
//! Builds a standalone page mirroring the browser viewer's DOM: `ast-node`
//! blocks with a `type` header and a `body`, `prop` blocks with a `prop-name`
//! and a `prop-body`, and `field` rows. Collapsible containers are native
//! `<details>` elements so the page works without scripts. Header accents
//! come from the attached presentation state as `--border-color`.
//!
//! Pipeline: RenderedTree → element handles → HTML string → document wrapper

use super::registry::{ExportContext, FormatError, Formatter};
use crate::astv::presentation::PresentationState;
use crate::astv::tree::{ContainerId, Field, FieldValue, Item, Property, RenderedNode};
use html5ever::{
    ns, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute, LocalName,
    QualName,
};
use markup5ever_rcdom::{Handle, Node, NodeData, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::default::Default;
use std::rc::Rc;

const STYLESHEET: &str = include_str!("astv.css");

/// Serialize a rendered tree to a complete HTML page
pub fn to_html_str(ctx: &ExportContext<'_>, title: &str) -> Result<String, FormatError> {
    let builder = DomBuilder { ctx };
    let root = builder.node(&ctx.tree.root, &ContainerId::root());
    let body_html = serialize_handle(&root)?;
    Ok(wrap_in_document(&body_html, title))
}

struct DomBuilder<'c, 'a> {
    ctx: &'c ExportContext<'a>,
}

impl DomBuilder<'_, '_> {
    fn presentation(&self) -> &PresentationState {
        self.ctx.presentation
    }

    fn accent_style(&self, id: &ContainerId) -> Option<String> {
        self.presentation()
            .color(id)
            .map(|color| format!("--border-color: {}", color))
    }

    fn node(&self, node: &RenderedNode, id: &ContainerId) -> Handle {
        let class = if node.nested {
            "ast-node no-border no-chevron"
        } else {
            "ast-node"
        };
        let style = self.accent_style(id);
        let mut attrs = vec![("class", class)];
        if let Some(style) = style.as_deref() {
            attrs.push(("style", style));
        }
        let elem = create_element("div", attrs);

        let body_class = if node.collapsed { "body collapsed" } else { "body" };
        let body = create_element("div", vec![("class", body_class), ("name", "body")]);
        self.items(&node.body, id, &body);

        let collapsible = self.presentation().is_collapsible(id);
        let header = create_element(
            if collapsible { "summary" } else { "div" },
            vec![("class", "type"), ("name", "type")],
        );
        append(&header, create_text(&node.kind));
        self.mount(&elem, header, body, collapsible, node.collapsed);
        elem
    }

    fn property(&self, prop: &Property, id: &ContainerId) -> Handle {
        let class = if prop.nested {
            "prop no-border no-chevron"
        } else {
            "prop"
        };
        let style = self.accent_style(id);
        let mut attrs = vec![("class", class), ("name", prop.key.as_str())];
        if let Some(style) = style.as_deref() {
            attrs.push(("style", style));
        }
        let elem = create_element("div", attrs);

        let body_class = if prop.collapsed {
            "prop-body no-border collapsed"
        } else {
            "prop-body"
        };
        let body = create_element("div", vec![("class", body_class)]);
        self.items(&prop.body, id, &body);

        let collapsible = self.presentation().is_collapsible(id);
        let header = create_element(
            if collapsible { "summary" } else { "div" },
            vec![("class", "prop-name")],
        );
        append(&header, create_text(&format!("{}:", prop.label)));
        self.mount(&elem, header, body, collapsible, prop.collapsed);
        elem
    }

    /// Attach header and body, wrapped in `<details>` when collapsible
    fn mount(&self, elem: &Handle, header: Handle, body: Handle, collapsible: bool, collapsed: bool) {
        if !collapsible {
            append(elem, header);
            append(elem, body);
            return;
        }
        let mut attrs = Vec::new();
        if !collapsed || !self.ctx.options.honor_collapse {
            attrs.push(("open", ""));
        }
        let details = create_element("details", attrs);
        append(&details, header);
        append(&details, body);
        append(elem, details);
    }

    fn items(&self, body: &[Item], parent: &ContainerId, into: &Handle) {
        for (index, item) in body.iter().enumerate() {
            if !self.ctx.options.includes(item) {
                continue;
            }
            let id = parent.child(index);
            let child = match item {
                Item::Node(node) => self.node(node, &id),
                Item::Property(prop) => self.property(prop, &id),
                Item::Field(field) => field_element(field),
            };
            append(into, child);
        }
    }
}

fn field_element(field: &Field) -> Handle {
    let class = if field.is_error() { "field error" } else { "field" };
    let elem = create_element("div", vec![("class", class), ("name", field.key.as_str())]);

    let name = create_element("div", vec![("class", "field-name")]);
    append(&name, create_text(&format!("{}:", field.label)));

    let value = create_element("div", vec![("class", "field-value")]);
    match &field.value {
        FieldValue::Text(text) => append(&value, create_text(text)),
        FieldValue::List(items) => {
            let ul = create_element("ul", vec![]);
            for item in items {
                let li = create_element("li", vec![]);
                append(&li, create_text(item));
                append(&ul, li);
            }
            append(&value, ul);
        }
    }

    append(&elem, name);
    append(&elem, value);
    elem
}

fn append(parent: &Handle, child: Handle) {
    parent.children.borrow_mut().push(child);
}

/// Create an HTML element with attributes
fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a text node
fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

fn serialize_handle(handle: &Handle) -> Result<String, FormatError> {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };
    let serializable = SerializableHandle::from(handle.clone());
    serialize(&mut output, &serializable, opts).map_err(|e| {
        FormatError::SerializationError(format!("HTML serialization failed: {}", e))
    })?;

    String::from_utf8(output)
        .map_err(|e| FormatError::SerializationError(format!("UTF-8 conversion failed: {}", e)))
}

fn wrap_in_document(body_html: &str, title: &str) -> String {
    let title = title
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="astv">
  <title>{}</title>
  <style>
{}
  </style>
</head>
<body>
<div id="astTree">
{}
</div>
</body>
</html>"#,
        title, STYLESHEET, body_html
    )
}

/// Formatter implementation for HTML pages
pub struct HtmlFormatter;

impl Formatter for HtmlFormatter {
    fn name(&self) -> &str {
        "html"
    }

    fn serialize(&self, ctx: &ExportContext<'_>) -> Result<String, FormatError> {
        to_html_str(ctx, "AST Viewer")
    }

    fn description(&self) -> &str {
        "Standalone HTML page with collapsible containers"
    }
}
