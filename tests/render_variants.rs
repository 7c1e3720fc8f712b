//! Per-variant rendering: field order, labels and coded values

use astv::astv::render::{render, FieldError};
use astv::astv::testing::{assert_rendered, ast};
use rstest::rstest;
use serde_json::{json, Value};

fn type_identifier(name: &str) -> Value {
    ast::node(
        "TypeIdentifierNode",
        json!({"kind": 5, "value": ast::identifier(name)}),
    )
}

fn unsigned(value: &str) -> Value {
    ast::node("UnsignedConstantNode", json!({"value": ast::number(value, 2)}))
}

fn block() -> Value {
    ast::node(
        "BlockNode",
        json!({
            "labels": null,
            "consts": null,
            "types": null,
            "variables": null,
            "subfuncs": null,
            "stmt": ast::compound(vec![])
        }),
    )
}

fn record_section() -> Value {
    ast::node(
        "RecordSectionNode",
        json!({"basetype": type_identifier("integer"), "identifiers": [ast::identifier("x")]}),
    )
}

fn variant_case(variant: Value) -> Value {
    ast::node(
        "RecordVariantCaseNode",
        json!({"consts": [unsigned("1")], "fixedPart": [record_section()], "variantPart": variant}),
    )
}

fn record_variant() -> Value {
    ast::node(
        "RecordVariantNode",
        json!({
            "basetype": type_identifier("byte"),
            "identifier": "tag",
            "cases": [variant_case(Value::Null)]
        }),
    )
}

fn case_arm() -> Value {
    ast::node(
        "CaseNode",
        json!({"heading": [unsigned("1")], "body": ast::assignment("x", unsigned("2"))}),
    )
}

fn case_statement(label: Value) -> Value {
    ast::node(
        "CaseStatementNode",
        json!({"_label": label, "index": ast::entire_variable("i"), "cases": [case_arm()]}),
    )
}

fn constant_part() -> Value {
    let constant = ast::node("ConstantDefinitionNode", json!({"key": "n", "value": unsigned("3")}));
    ast::node("ConstantDefinitionPartNode", json!({"value": [constant]}))
}

fn type_part() -> Value {
    let definition = ast::node(
        "TypeDefinitionNode",
        json!({"key": "t", "value": type_identifier("integer")}),
    );
    ast::node("TypeDefinitionPartNode", json!({"value": [definition]}))
}

fn element(end: Value) -> Value {
    ast::node("ElementDescriptionNode", json!({"start": unsigned("1"), "end": end}))
}

fn field_designator() -> Value {
    ast::node(
        "FieldDesignatorNode",
        json!({
            "kind": 3,
            "staticType": null,
            "key": ast::entire_variable("r"),
            "value": ast::identifier("f")
        }),
    )
}

fn procedure_declaration() -> Value {
    let heading = ast::node("ProcedureHeadingNode", json!({"name": "p", "params": null}));
    ast::node("ProcedureDeclarationNode", json!({"heading": heading, "body": block()}))
}

fn function_declaration() -> Value {
    let heading = ast::node(
        "FunctionHeadingNode",
        json!({"name": "f", "params": null, "rettype": type_identifier("integer")}),
    );
    ast::node("FunctionDeclarationNode", json!({"heading": heading, "body": block()}))
}

fn function_designator(params: Value) -> Value {
    ast::node(
        "FunctionDesignatorNode",
        json!({"kind": 4, "staticType": null, "key": ast::identifier("f"), "params": params}),
    )
}

fn actual_params() -> Value {
    ast::node("ActualParameterListNode", json!({"value": [unsigned("1")]}))
}

fn goto_statement() -> Value {
    ast::node("GotoStatementNode", json!({"_label": null, "value": unsigned("10")}))
}

fn parameter_specification() -> Value {
    ast::node(
        "ParameterSpecificationNode",
        json!({"identifiers": ["a", "b"], "variable": true, "basetype": type_identifier("integer")}),
    )
}

fn routine_part() -> Value {
    ast::node(
        "ProcedureAndFunctionDeclarationPartNode",
        json!({"value": [procedure_declaration()]}),
    )
}

fn repeat_statement(body: Value) -> Value {
    ast::node(
        "RepeatStatementNode",
        json!({"_label": null, "cond": ast::entire_variable("done"), "body": body}),
    )
}

fn set_constructor(value: Value) -> Value {
    ast::node("SetConstructorNode", json!({"value": value}))
}

fn set_type() -> Value {
    ast::node(
        "SetTypeNode",
        json!({"kind": 3, "packed": false, "basetype": type_identifier("char")}),
    )
}

fn while_statement() -> Value {
    ast::node(
        "WhileStatementNode",
        json!({
            "_label": null,
            "cond": ast::entire_variable("ok"),
            "body": ast::assignment("x", unsigned("1"))
        }),
    )
}

fn with_statement() -> Value {
    ast::node(
        "WithStatementNode",
        json!({"_label": null, "recVars": [ast::entire_variable("r")], "body": ast::compound(vec![])}),
    )
}

#[rstest]
#[case::string(ast::node("StringNode", json!({"value": "abc"})), &["value"])]
#[case::number(ast::number("5", 2), &["value", "kind"])]
#[case::unsigned_constant(unsigned("1"), &["value"])]
#[case::special_symbol(ast::node("SpecialSymbolNode", json!({"value": 1})), &["value"])]
#[case::label_declaration(
    ast::node("LabelDeclarationNode", json!({"value": [ast::number("10", 2)]})),
    &["value"]
)]
#[case::constant_definition(
    ast::node("ConstantDefinitionNode", json!({"key": "n", "value": unsigned("3")})),
    &["type", "key", "value"]
)]
#[case::type_definition(
    ast::node("TypeDefinitionNode", json!({"key": "t", "value": type_identifier("integer")})),
    &["key", "value"]
)]
#[case::variable_declaration(
    ast::node(
        "VariableDeclarationNode",
        json!({"keys": [ast::identifier("x")], "value": type_identifier("integer")})
    ),
    &["keys", "value"]
)]
#[case::enumerated_type(
    ast::node("EnumeratedTypeNode", json!({"kind": 2, "value": [ast::identifier("red")]})),
    &["kind", "value"]
)]
#[case::subrange_type(
    ast::node(
        "SubrangeTypeNode",
        json!({"kind": 2, "start": unsigned("1"), "end": unsigned("9")})
    ),
    &["kind", "start", "end"]
)]
#[case::array_type(
    ast::node(
        "ArrayTypeNode",
        json!({"kind": 3, "packed": false, "basetype": type_identifier("char"), "value": []})
    ),
    &["kind", "packed", "basetype", "value"]
)]
#[case::record_type(
    ast::node(
        "RecordTypeNode",
        json!({"kind": 3, "packed": true, "fixedPart": null, "variantPart": null})
    ),
    &["kind", "packed", "fixedPart", "variantPart"]
)]
#[case::pointer_type(
    ast::node("PointerTypeNode", json!({"kind": 4, "basetype": type_identifier("node")})),
    &["kind", "basetype"]
)]
#[case::file_type(
    ast::node(
        "FileTypeNode",
        json!({"kind": 3, "packed": false, "basetype": type_identifier("char")})
    ),
    &["kind", "packed", "basetype"]
)]
#[case::procedure_heading(
    ast::node("ProcedureHeadingNode", json!({"name": "p", "params": null})),
    &["name", "params"]
)]
#[case::function_heading(
    ast::node(
        "FunctionHeadingNode",
        json!({"name": "f", "params": null, "rettype": type_identifier("integer")})
    ),
    &["name", "params", "rettype"]
)]
#[case::indexed_variable(
    ast::node(
        "IndexedVariableNode",
        json!({
            "kind": 3,
            "staticType": 2,
            "lbindex": unsigned("1"),
            "hbindex": null,
            "value": ast::entire_variable("a")
        })
    ),
    &["kind", "staticType", "lbindex", "hbindex", "value"]
)]
#[case::expression(
    ast::node(
        "ExpressionNode",
        json!({
            "kind": 2,
            "staticType": 3,
            "op": ast::node("OpNode", json!({"value": 1})),
            "lhs": ast::entire_variable("a"),
            "rhs": unsigned("1")
        })
    ),
    &["kind", "staticType", "op", "lhs", "rhs"]
)]
#[case::assignment(ast::assignment("x", unsigned("1")), &["_label", "key", "value"])]
#[case::conditional(
    ast::node(
        "ConditionalStatementNode",
        json!({
            "_label": null,
            "cond": ast::entire_variable("ok"),
            "ifStmt": ast::assignment("x", unsigned("1")),
            "elseStmt": null
        })
    ),
    &["_label", "cond", "ifStmt", "elseStmt"]
)]
#[case::for_statement(
    ast::node(
        "ForStatementNode",
        json!({
            "_label": null,
            "controlVar": ast::entire_variable("i"),
            "initial": unsigned("1"),
            "traversalMode": 1,
            "final": unsigned("10"),
            "body": ast::compound(vec![])
        })
    ),
    &["_label", "controlVar", "initial", "traversalMode", "final", "body"]
)]
#[case::block(
    ast::node(
        "BlockNode",
        json!({
            "labels": null,
            "consts": null,
            "types": null,
            "variables": null,
            "subfuncs": null,
            "stmt": ast::compound(vec![])
        })
    ),
    &["labels", "consts", "types", "variables", "subfuncs", "stmt"]
)]
#[case::packed_schema(
    ast::node(
        "PackedConformantArraySchemaNode",
        json!({
            "name": "a",
            "specification": ast::node(
                "IndexTypeSpecificationNode",
                json!({"name": "i", "lb": "lo", "hb": "hi"})
            )
        })
    ),
    &["packed", "name", "specification"]
)]
#[case::case_arm(case_arm(), &["heading", "body"])]
#[case::case_statement(case_statement(Value::Null), &["_label", "index", "cases"])]
#[case::constant_definition_part(constant_part(), &["value"])]
#[case::directive(ast::node("DirectiveNode", json!({"value": "forward"})), &["value"])]
#[case::element_description(element(unsigned("9")), &["start", "end"])]
#[case::field_designator(field_designator(), &["kind", "staticType", "key", "value"])]
#[case::function_declaration(function_declaration(), &["heading", "body"])]
#[case::function_designator(
    function_designator(actual_params()),
    &["kind", "staticType", "key", "params"]
)]
#[case::goto_statement(goto_statement(), &["_label", "value"])]
#[case::parameter_specification(
    parameter_specification(),
    &["identifiers", "variable", "basetype"]
)]
#[case::routine_part(routine_part(), &["value"])]
#[case::procedure_declaration(procedure_declaration(), &["heading", "body"])]
#[case::record_section(record_section(), &["basetype", "identifiers"])]
#[case::record_variant_case(
    variant_case(record_variant()),
    &["consts", "fixedPart", "variantPart"]
)]
#[case::record_variant(record_variant(), &["basetype", "identifier", "cases"])]
#[case::repeat_statement(
    repeat_statement(json!([ast::assignment("x", unsigned("1"))])),
    &["_label", "cond", "body"]
)]
#[case::set_constructor(set_constructor(json!([element(Value::Null)])), &["value"])]
#[case::set_type(set_type(), &["kind", "packed", "basetype"])]
#[case::type_definition_part(type_part(), &["value"])]
#[case::while_statement(while_statement(), &["_label", "cond", "body"])]
#[case::with_statement(with_statement(), &["_label", "recVars", "body"])]
fn renders_fields_in_declaration_order(#[case] raw: Value, #[case] keys: &[&str]) {
    let kind = raw["type"].as_str().unwrap().to_string();
    let node = render(&raw, false);
    assert_rendered(&node).kind(&kind).nested(false).keys(keys).no_errors();
}

#[rstest]
#[case::case_heading(case_arm(), "heading", "Heading", Some(false))]
#[case::case_body(case_arm(), "body", "Body", Some(true))]
#[case::case_label(case_statement(Value::Null), "_label", "Label", None)]
#[case::case_index(case_statement(Value::Null), "index", "Index", Some(true))]
#[case::case_cases(case_statement(Value::Null), "cases", "Cases", Some(false))]
#[case::constant_part(constant_part(), "value", "Value", Some(true))]
#[case::directive(ast::node("DirectiveNode", json!({"value": "forward"})), "value", "Value", None)]
#[case::element_start(element(unsigned("9")), "start", "Start", Some(false))]
#[case::element_end(element(unsigned("9")), "end", "End", Some(false))]
#[case::designator_kind(field_designator(), "kind", "Kind", None)]
#[case::designator_static_type(field_designator(), "staticType", "Static Type", None)]
#[case::designator_key(field_designator(), "key", "Key", Some(false))]
#[case::designator_value(field_designator(), "value", "Value", Some(false))]
#[case::function_heading(function_declaration(), "heading", "Heading", Some(true))]
#[case::function_body(function_declaration(), "body", "Body", Some(true))]
#[case::function_kind(function_designator(actual_params()), "kind", "Expression Kind", None)]
#[case::function_key(function_designator(actual_params()), "key", "Key", Some(true))]
#[case::function_params(function_designator(actual_params()), "params", "Params", Some(true))]
#[case::goto_label(goto_statement(), "value", "Label", Some(true))]
#[case::parameter_identifiers(parameter_specification(), "identifiers", "Identifiers", None)]
#[case::parameter_variable(parameter_specification(), "variable", "Variable", None)]
#[case::parameter_basetype(parameter_specification(), "basetype", "Base Type", Some(true))]
#[case::routine_part(routine_part(), "value", "Value", Some(false))]
#[case::procedure_heading(procedure_declaration(), "heading", "Heading", Some(true))]
#[case::procedure_body(procedure_declaration(), "body", "Body", Some(true))]
#[case::section_basetype(record_section(), "basetype", "Base Type", Some(true))]
#[case::section_identifiers(record_section(), "identifiers", "Identifiers", Some(false))]
#[case::variant_case_consts(variant_case(record_variant()), "consts", "Identifiers", Some(false))]
#[case::variant_case_fixed(variant_case(record_variant()), "fixedPart", "Fixed Fields", Some(false))]
#[case::variant_case_variant(
    variant_case(record_variant()),
    "variantPart",
    "Variant Field",
    Some(true)
)]
#[case::variant_basetype(record_variant(), "basetype", "Base Type", Some(true))]
#[case::variant_identifier(record_variant(), "identifier", "Identifier", None)]
#[case::variant_cases(record_variant(), "cases", "Cases", Some(false))]
#[case::repeat_cond(repeat_statement(json!([goto_statement()])), "cond", "Condition", Some(true))]
#[case::repeat_body(repeat_statement(json!([goto_statement()])), "body", "Body", Some(false))]
#[case::set_constructor(set_constructor(json!([element(Value::Null)])), "value", "Value", Some(true))]
#[case::set_kind(set_type(), "kind", "Type Root", None)]
#[case::set_packed(set_type(), "packed", "Packed", None)]
#[case::set_basetype(set_type(), "basetype", "Base Type", Some(true))]
#[case::type_part(type_part(), "value", "Value", Some(false))]
#[case::while_cond(while_statement(), "cond", "Condition", Some(true))]
#[case::while_body(while_statement(), "body", "Body", Some(true))]
#[case::with_records(with_statement(), "recVars", "Record Variables", Some(false))]
#[case::with_body(with_statement(), "body", "Body", Some(true))]
fn labels_and_child_nesting(
    #[case] raw: Value,
    #[case] key: &str,
    #[case] label: &str,
    #[case] child_nested: Option<bool>,
) {
    let node = render(&raw, false);
    match child_nested {
        Some(nested) => {
            assert_rendered(&node).property(key, |prop| {
                prop.label(label).collapsed(true).node(0, |child| {
                    child.nested(nested);
                });
            });
        }
        None => {
            let field = node.field(key).unwrap_or_else(|| panic!("no field '{}'", key));
            assert_eq!(field.label, label);
        }
    }
}

#[rstest]
#[case::case_label(case_statement(json!(false)), "_label")]
#[case::element_end(element(Value::Null), "end")]
#[case::designator_static_type(field_designator(), "staticType")]
#[case::function_params(function_designator(Value::Null), "params")]
#[case::variant_part(variant_case(Value::Null), "variantPart")]
#[case::repeat_body(repeat_statement(Value::Null), "body")]
#[case::set_constructor(set_constructor(Value::Null), "value")]
fn optional_fields_show_null(#[case] raw: Value, #[case] key: &str) {
    assert_rendered(&render(&raw, false)).field(key, "null").no_errors();
}

#[rstest]
#[case::number_kind(ast::number("2.5", 1), "kind", "UNSIGNED_REAL (1)")]
#[case::special_symbol(ast::node("SpecialSymbolNode", json!({"value": 1})), "value", "SS_NIL (1)")]
#[case::type_kind(type_identifier("integer"), "kind", "TYPE_IDENTIFIER (5)")]
#[case::variable_kind(ast::entire_variable("x"), "kind", "VARIABLE_ENTIRE (2)")]
#[case::op_kind(ast::node("OpNode", json!({"value": 11})), "value", "OP_LTE (11)")]
#[case::for_mode(
    ast::node(
        "ForStatementNode",
        json!({
            "_label": null,
            "controlVar": ast::entire_variable("i"),
            "initial": unsigned("10"),
            "traversalMode": 2,
            "final": unsigned("1"),
            "body": ast::compound(vec![])
        })
    ),
    "traversalMode",
    "FOR_DOWNTO (2)"
)]
#[case::unknown_code(ast::node("OpNode", json!({"value": 99})), "value", "undefined (99)")]
fn describes_coded_values(#[case] raw: Value, #[case] key: &str, #[case] expected: &str) {
    assert_rendered(&render(&raw, false)).field(key, expected);
}

#[test]
fn static_types_use_their_own_tables() {
    let variable = ast::node(
        "IdentifiedVariableNode",
        json!({"kind": 4, "staticType": 4, "value": ast::entire_variable("p")}),
    );
    assert_rendered(&render(&variable, false))
        .field("kind", "VARIABLE_IDENTIFIED (4)")
        .field("staticType", "VARIABLE_ST_POINTER (4)");

    let expression = ast::node(
        "ExpressionLikeNode",
        json!({"kind": 1, "staticType": 2, "value": ast::entire_variable("b")}),
    );
    assert_rendered(&render(&expression, false))
        .field("kind", "EXP_UNARY (1)")
        .field("staticType", "EXP_BOOLEAN (2)");
}

#[test]
fn scenario_number_node() {
    let node = render(
        &json!({
            "type": "NumberNode",
            "pos": {"start": [0, 1, 1], "end": [1, 1, 2]},
            "value": "5",
            "kind": 2
        }),
        false,
    );
    assert_rendered(&node)
        .kind("NumberNode")
        .field("value", "5")
        .field("kind", "UNSIGNED_INTEGER (2)")
        .no_errors()
        .property("pos", |pos| {
            pos.label("Pos").collapsed(false).shape(&["property:start", "property:end"]);
        });
    let start = node.property("pos").unwrap().property("start").unwrap();
    assert_eq!(start.field("1").unwrap().as_text(), Some("1"));
    assert_eq!(start.field("2").unwrap().as_text(), Some("1"));
    assert_eq!(start.field("0").unwrap().as_text(), Some("0"));
}

#[test]
fn list_scalars_become_list_fields() {
    let heading = ast::node(
        "ProgramHeadingNode",
        json!({"name": "p", "externals": ["input", "output"]}),
    );
    assert_rendered(&render(&heading, false))
        .field("name", "p")
        .field_list("externals", &["input", "output"]);
}

#[test]
fn fixed_packed_flags() {
    let unpacked = ast::node(
        "UnpackedConformantArraySchemaNode",
        json!({"name": "a", "specification": []}),
    );
    assert_rendered(&render(&unpacked, false))
        .field("packed", "false")
        .property("specification", |prop| {
            prop.label("Specification").node_count(0);
        });
}

#[test]
fn nested_children_carry_the_flag() {
    let node = render(&unsigned("7"), false);
    assert_rendered(&node).property("value", |prop| {
        prop.collapsed(true).node(0, |number| {
            number.kind("NumberNode").nested(true).field("value", "7");
        });
    });

    let indexed = ast::node(
        "IndexedVariableNode",
        json!({
            "kind": 3,
            "staticType": null,
            "lbindex": unsigned("1"),
            "value": ast::entire_variable("a")
        }),
    );
    assert_rendered(&render(&indexed, false))
        .field("hbindex", "null")
        .property("lbindex", |prop| {
            prop.label("Low Index").node(0, |child| {
                child.nested(false);
            });
        });
}

#[test]
fn null_value_reads_as_absent() {
    let pos = json!({"start": [0, 1, 1], "end": [0, 1, 1]});

    let string = render(&json!({"type": "StringNode", "pos": pos, "value": null}), false);
    assert_rendered(&string)
        .keys(&["error"])
        .errors(&[FieldError::MissingProperty("value".to_string())]);

    let labels = render(
        &json!({"type": "LabelDeclarationNode", "pos": pos, "value": null}),
        false,
    );
    assert_rendered(&labels)
        .keys(&["value"])
        .errors(&[FieldError::MissingProperty("value".to_string())])
        .property("value", |prop| {
            prop.collapsed(true).shape(&["error:missing_property"]);
        });

    let compound = render(
        &json!({"type": "CompoundStatementNode", "pos": pos, "value": null}),
        false,
    );
    assert_rendered(&compound)
        .keys(&["_label", "value"])
        .field("_label", "null")
        .field("value", "null")
        .no_errors();
}
