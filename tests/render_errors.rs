//! Error fields embedded by the renderer

use astv::astv::render::{render, render_tree, FieldError};
use astv::astv::testing::{assert_rendered, ast, fixture};
use proptest::prelude::*;
use serde_json::{json, Value};

fn missing(key: &str) -> FieldError {
    FieldError::MissingProperty(key.to_string())
}

#[test]
fn scenario_missing_required_value() {
    let node = render(&ast::node("ConstantDefinitionNode", json!({"key": "x"})), false);
    assert_rendered(&node)
        .field("key", "x")
        .errors(&[missing("value")])
        .property("value", |prop| {
            prop.collapsed(true).shape(&["error:missing_property"]);
        });
}

#[test]
fn scenario_null_list_element() {
    let node = render(
        &ast::compound(vec![ast::assignment("x", ast::number("1", 2)), Value::Null]),
        false,
    );
    assert_rendered(&node).no_errors().property("value", |prop| {
        prop.shape(&["node:AssignmentStatementNode", "error:empty_list_element"])
            .errors(&[FieldError::EmptyListElement]);
    });
}

#[test]
fn scenario_unknown_node_type() {
    let node = render(&ast::node("FooBarNode", json!({"value": 1, "other": true})), false);
    assert_rendered(&node)
        .kind("FooBarNode")
        .errors(&[FieldError::UnknownNodeType("FooBarNode".to_string())]);
    assert_eq!(node.body.len(), 2);
    assert!(node.property("pos").is_some());
}

#[test]
fn missing_tag_is_undefined() {
    let node = render(&json!({"value": 1}), false);
    assert_rendered(&node).kind("undefined").errors(&[
        FieldError::MissingPosition,
        FieldError::UnknownNodeType("undefined".to_string()),
    ]);
}

#[test]
fn each_missing_required_key_reports_once() {
    let node = render(&ast::node("ForStatementNode", json!({})), false);
    assert_rendered(&node)
        .field("_label", "null")
        .errors(&[
            missing("controlVar"),
            missing("initial"),
            missing("traversalMode"),
            missing("final"),
            missing("body"),
        ]);
}

#[test]
fn missing_scalar_is_reported_in_the_body() {
    let node = render(&ast::node("IndexTypeSpecificationNode", json!({"name": "i", "hb": 9})), false);
    assert_rendered(&node)
        .keys(&["name", "error", "hb"])
        .errors(&[missing("lb")]);
}

#[test]
fn falsy_program_heading() {
    for heading in [Value::Null, json!(false), json!("")] {
        let node = render(
            &ast::node("ProgramNode", json!({"heading": heading, "body": ast::node("BlockNode", json!({}))})),
            false,
        );
        assert_rendered(&node)
            .errors(&[FieldError::MissingProgramHeading])
            .property("heading", |prop| {
                prop.shape(&["error:missing_program_heading"]);
            });
    }
}

#[test]
fn position_errors() {
    let node = render(&json!({"type": "StringNode", "value": "s"}), false);
    assert_rendered(&node).errors(&[FieldError::MissingPosition]);

    let node = render(
        &json!({"type": "StringNode", "pos": {"start": [0, 1], "end": "nope"}, "value": "s"}),
        false,
    );
    assert_rendered(&node)
        .errors(&[missing("start"), missing("end")])
        .property("pos", |pos| {
            pos.shape(&["property:start", "property:end"]);
        });
}

#[test]
fn non_object_child_is_an_empty_node() {
    let node = render(&ast::node("UnsignedConstantNode", json!({"value": 42})), false);
    assert_rendered(&node).no_errors().property("value", |prop| {
        prop.node(0, |child| {
            child.kind("undefined").errors(&[
                FieldError::MissingPosition,
                FieldError::UnknownNodeType("undefined".to_string()),
            ]);
        });
    });
}

#[test]
fn broken_fixture_error_census() {
    let tree = render_tree(&fixture("broken_program"));
    let stats = tree.stats();
    assert_eq!(stats.error_count(), 4);
    assert_eq!(stats.errors["missing_program_heading"], 1);
    assert_eq!(stats.errors["missing_property"], 1);
    assert_eq!(stats.errors["empty_list_element"], 1);
    assert_eq!(stats.errors["unknown_node_type"], 1);
}

#[test]
fn clean_fixture_has_no_errors() {
    let tree = render_tree(&fixture("program"));
    assert!(tree.errors().is_empty());
    assert_eq!(tree.root.kind, "ProgramNode");
}

fn statement_list(slots: &[bool]) -> Value {
    let statements = slots
        .iter()
        .enumerate()
        .map(|(i, present)| {
            if *present {
                ast::assignment(&format!("v{}", i), ast::number(&i.to_string(), 2))
            } else {
                Value::Null
            }
        })
        .collect();
    ast::compound(statements)
}

proptest! {
    #[test]
    fn list_nulls_become_local_errors(slots in prop::collection::vec(any::<bool>(), 0..12)) {
        let node = render(&statement_list(&slots), false);
        let prop = node.property("value").unwrap();

        prop_assert_eq!(prop.body.len(), slots.len());
        prop_assert_eq!(prop.nodes().count(), slots.iter().filter(|p| **p).count());
        prop_assert_eq!(prop.errors().count(), slots.iter().filter(|p| !**p).count());

        let shape: Vec<bool> = prop
            .body
            .iter()
            .map(|item| matches!(item, astv::astv::tree::Item::Node(_)))
            .collect();
        prop_assert_eq!(shape, slots);
    }
}
