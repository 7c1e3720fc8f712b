//! Extraction primitives
//!
//! Turn one [`FieldSpec`] of a node into rendered items. These are the only
//! places that read AST keys; they never fail and report bad input as error
//! fields.

use super::error::FieldError;
use super::render;
use super::schema::{FieldSpec, OnMissing, Presence, Shape};
use crate::astv::ast::{display_scalar, is_falsy, AstNode, SourcePoint};
use crate::astv::tree::{Field, Item, Property, RenderedNode};
use serde_json::Value;

/// Key and label of the position block
pub const POSITION_KEY: &str = "pos";
pub const POSITION_LABEL: &str = "Pos";

/// Emit the items for one field of `node` into `out`
pub(crate) fn extract(node: &AstNode<'_>, field: &FieldSpec, out: &mut RenderedNode) {
    match field.shape {
        Shape::Fixed(value) => out.push(Field::text(field.key, field.label, value.to_string())),
        Shape::Scalar | Shape::Code(_) => out.push(scalar_field(node, field)),
        Shape::Node { .. } | Shape::List { .. } => out.push(container_item(node, field)),
    }
}

fn scalar_field(node: &AstNode<'_>, field: &FieldSpec) -> Field {
    let value = match node.get(field.key) {
        None | Some(Value::Null) => {
            return match field.presence {
                Presence::Required => Field::error(FieldError::MissingProperty(field.key.to_string())),
                Presence::Optional => null_field(field),
            };
        }
        Some(value) => value,
    };

    match (field.shape, value) {
        (Shape::Code(table), value) => Field::text(field.key, field.label, table.describe(value)),
        (_, Value::Array(items)) => {
            Field::list(field.key, field.label, items.iter().map(display_scalar).collect())
        }
        (_, value) => Field::text(field.key, field.label, display_scalar(value)),
    }
}

fn container_item(node: &AstNode<'_>, field: &FieldSpec) -> Item {
    let value = node.get(field.key);
    let missing = match (field.presence, field.on_missing) {
        (Presence::Optional, _) => {
            if is_falsy(value) {
                return null_field(field).into();
            }
            None
        }
        (Presence::Required, OnMissing::ProgramHeading) if is_falsy(value) => {
            Some(FieldError::MissingProgramHeading)
        }
        (Presence::Required, _) => match value {
            None | Some(Value::Null) => Some(FieldError::MissingProperty(field.key.to_string())),
            Some(_) => None,
        },
    };

    let mut prop = Property::new(field.key, field.label, true);
    match (missing, value) {
        (Some(error), _) => prop.push(Field::error(error)),
        (None, Some(value)) => match field.shape {
            Shape::List { nested } => push_elements(&mut prop, value, nested),
            Shape::Node { nested } => prop.push(render(value, nested)),
            Shape::Scalar | Shape::Code(_) | Shape::Fixed(_) => {}
        },
        (None, None) => {}
    }
    prop.into()
}

/// Render each element of a list-valued field, in order
///
/// A value that is not an array is treated as a one-element list.
fn push_elements(prop: &mut Property, value: &Value, nested: bool) {
    let elements = match value {
        Value::Array(items) => items.as_slice(),
        single => std::slice::from_ref(single),
    };
    for element in elements {
        if is_falsy(Some(element)) {
            prop.push(Field::error(FieldError::EmptyListElement));
        } else {
            prop.push(render(element, nested));
        }
    }
}

fn null_field(field: &FieldSpec) -> Field {
    Field::text(field.key, field.label, "null")
}

/// The `Pos` block every node starts with
pub(crate) fn position_block(node: &AstNode<'_>) -> Property {
    let mut prop = Property::new(POSITION_KEY, POSITION_LABEL, false);
    let pos = match node.get(POSITION_KEY) {
        None | Some(Value::Null) => {
            prop.push(Field::error(FieldError::MissingPosition));
            return prop;
        }
        Some(pos) => pos,
    };

    for (key, label) in [("start", "Start"), ("end", "End")] {
        let mut point_prop = Property::new(key, label, false);
        match SourcePoint::from_value(pos.get(key)) {
            Some(point) => {
                point_prop.push(Field::text("1", "Row", display_scalar(point.row)));
                point_prop.push(Field::text("2", "Column", display_scalar(point.column)));
                point_prop.push(Field::text("0", "Index", display_scalar(point.index)));
            }
            None => point_prop.push(Field::error(FieldError::MissingProperty(key.to_string()))),
        }
        prop.push(point_prop);
    }
    prop
}
