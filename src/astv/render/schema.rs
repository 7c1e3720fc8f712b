//! Per-variant field schemas
//!
//! Each node kind maps to a static, ordered list of [`FieldSpec`]s. The
//! extractor walks that list in order, so the order here is the display order.

use crate::astv::ast::codes::{
    CodeTable, EXPRESSION_KIND, EXPRESSION_STATIC_TYPE, FOR_TRAVERSAL_MODE, NUMBER_KIND, OP_KIND,
    SPECIAL_SYMBOL_KIND, TYPE_KIND, VARIABLE_KIND, VARIABLE_STATIC_TYPE,
};
use crate::astv::ast::NodeKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Absent or `null` yields a `Missing property` error
    Required,
    /// Absent or falsy yields a plain `null` field
    Optional,
}

/// How a key's value is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Shown as-is; arrays of scalars become list fields
    Scalar,
    /// Integer code shown as `NAME (code)`
    Code(CodeTable),
    /// A single child node inside a collapsed property
    Node { nested: bool },
    /// A list of child nodes inside a collapsed property
    List { nested: bool },
    /// A constant field that does not read the node at all
    Fixed(bool),
}

/// Error reported when a required container key is missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnMissing {
    Property,
    ProgramHeading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub presence: Presence,
    pub shape: Shape,
    pub on_missing: OnMissing,
}

impl FieldSpec {
    /// Whether the value renders inside a property rather than as a field
    pub fn is_container(&self) -> bool {
        matches!(self.shape, Shape::Node { .. } | Shape::List { .. })
    }
}

const fn req(key: &'static str, label: &'static str, shape: Shape) -> FieldSpec {
    FieldSpec {
        key,
        label,
        presence: Presence::Required,
        shape,
        on_missing: OnMissing::Property,
    }
}

const fn opt(key: &'static str, label: &'static str, shape: Shape) -> FieldSpec {
    FieldSpec {
        key,
        label,
        presence: Presence::Optional,
        shape,
        on_missing: OnMissing::Property,
    }
}

const SCALAR: Shape = Shape::Scalar;
const NODE: Shape = Shape::Node { nested: false };
const NODE_NESTED: Shape = Shape::Node { nested: true };
const LIST: Shape = Shape::List { nested: false };
const LIST_NESTED: Shape = Shape::List { nested: true };

const fn code(table: CodeTable) -> Shape {
    Shape::Code(table)
}

// Shared field groups

const VALUE: FieldSpec = req("value", "Value", SCALAR);
const STMT_LABEL: FieldSpec = opt("_label", "Label", NODE);
const TYPE_ROOT: FieldSpec = req("kind", "Type Root", code(TYPE_KIND));
const PACKED: FieldSpec = req("packed", "Packed", SCALAR);
const BASE_TYPE: FieldSpec = req("basetype", "Base Type", NODE_NESTED);
const FIXED_PART: FieldSpec = opt("fixedPart", "Fixed Fields", LIST);
const VARIANT_PART: FieldSpec = opt("variantPart", "Variant Field", NODE_NESTED);
const VARIABLE_KIND_FIELD: FieldSpec = req("kind", "Kind", code(VARIABLE_KIND));
const VARIABLE_STATIC_TYPE_FIELD: FieldSpec =
    opt("staticType", "Static Type", code(VARIABLE_STATIC_TYPE));
const EXPRESSION_KIND_FIELD: FieldSpec = req("kind", "Expression Kind", code(EXPRESSION_KIND));
const EXPRESSION_STATIC_TYPE_FIELD: FieldSpec =
    opt("staticType", "Static Type", code(EXPRESSION_STATIC_TYPE));
const HEADING: FieldSpec = req("heading", "Heading", NODE_NESTED);
const BODY: FieldSpec = req("body", "Body", NODE_NESTED);
const CONDITION: FieldSpec = req("cond", "Condition", NODE_NESTED);

// Literals

const SIMPLE_VALUE: &[FieldSpec] = &[VALUE];
const NUMBER: &[FieldSpec] = &[VALUE, req("kind", "Kind", code(NUMBER_KIND))];
const UNSIGNED_CONSTANT: &[FieldSpec] = &[req("value", "Value", NODE_NESTED)];
const SPECIAL_SYMBOL: &[FieldSpec] = &[req("value", "Value", code(SPECIAL_SYMBOL_KIND))];

// Declarations

const LABEL_DECLARATION: &[FieldSpec] = &[req("value", "Value", LIST)];
const CONSTANT_DEFINITION: &[FieldSpec] = &[
    req("type", "Type", SCALAR),
    req("key", "Key", SCALAR),
    req("value", "Value", NODE_NESTED),
];
const CONSTANT_DEFINITION_PART: &[FieldSpec] = &[req("value", "Value", LIST_NESTED)];
const TYPE_DEFINITION: &[FieldSpec] = &[req("key", "Key", SCALAR), req("value", "Value", NODE_NESTED)];
const TYPE_DEFINITION_PART: &[FieldSpec] = &[req("value", "Value", LIST)];
const VARIABLE_DECLARATION: &[FieldSpec] =
    &[req("keys", "Keys", LIST), req("value", "Type", NODE_NESTED)];
const VARIABLE_DECLARATION_PART: &[FieldSpec] = &[req("value", "Value", LIST_NESTED)];

// Types

const TYPE_IDENTIFIER: &[FieldSpec] = &[TYPE_ROOT, req("value", "Value", NODE_NESTED)];
const ENUMERATED_TYPE: &[FieldSpec] = &[TYPE_ROOT, req("value", "Fields", LIST)];
const SUBRANGE_TYPE: &[FieldSpec] = &[
    TYPE_ROOT,
    req("start", "Start", NODE_NESTED),
    req("end", "End", NODE_NESTED),
];
const ARRAY_TYPE: &[FieldSpec] = &[TYPE_ROOT, PACKED, BASE_TYPE, req("value", "Value", LIST)];
const RECORD_SECTION: &[FieldSpec] = &[BASE_TYPE, req("identifiers", "Identifiers", LIST)];
const RECORD_VARIANT_CASE: &[FieldSpec] =
    &[req("consts", "Identifiers", LIST), FIXED_PART, VARIANT_PART];
const RECORD_VARIANT: &[FieldSpec] = &[
    BASE_TYPE,
    req("identifier", "Identifier", SCALAR),
    req("cases", "Cases", LIST),
];
const RECORD_TYPE: &[FieldSpec] = &[TYPE_ROOT, PACKED, FIXED_PART, VARIANT_PART];
const SET_TYPE: &[FieldSpec] = &[TYPE_ROOT, PACKED, BASE_TYPE];
const FILE_TYPE: &[FieldSpec] = &[TYPE_ROOT, PACKED, BASE_TYPE];
const POINTER_TYPE: &[FieldSpec] = &[TYPE_ROOT, BASE_TYPE];

// Procedures and functions

const INDEX_TYPE_SPECIFICATION: &[FieldSpec] = &[
    req("name", "Key", SCALAR),
    req("lb", "Lower Bound", SCALAR),
    req("hb", "Higher Bound", SCALAR),
];
const PACKED_CONFORMANT_ARRAY_SCHEMA: &[FieldSpec] = &[
    req("packed", "Packed", Shape::Fixed(true)),
    req("name", "Name", SCALAR),
    req("specification", "Specification", NODE_NESTED),
];
const UNPACKED_CONFORMANT_ARRAY_SCHEMA: &[FieldSpec] = &[
    req("packed", "Packed", Shape::Fixed(false)),
    req("name", "Name", SCALAR),
    req("specification", "Specification", LIST_NESTED),
];
const PARAMETER_SPECIFICATION: &[FieldSpec] = &[
    req("identifiers", "Identifiers", SCALAR),
    req("variable", "Variable", SCALAR),
    BASE_TYPE,
];
const ACTUAL_PARAMETER_LIST: &[FieldSpec] = &[req("value", "Value", LIST_NESTED)];
const PROCEDURE_HEADING: &[FieldSpec] = &[
    req("name", "Name", SCALAR),
    opt("params", "Parameters", LIST_NESTED),
];
const FUNCTION_HEADING: &[FieldSpec] = &[
    req("name", "Name", SCALAR),
    opt("params", "Parameters", LIST_NESTED),
    opt("rettype", "Return Type", NODE_NESTED),
];
const ROUTINE_DECLARATION: &[FieldSpec] = &[HEADING, BODY];
const ROUTINE_DECLARATION_PART: &[FieldSpec] = &[req("value", "Value", LIST)];

// Variables

const ENTIRE_VARIABLE: &[FieldSpec] = &[VARIABLE_KIND_FIELD, VARIABLE_STATIC_TYPE_FIELD, VALUE];
const INDEXED_VARIABLE: &[FieldSpec] = &[
    VARIABLE_KIND_FIELD,
    VARIABLE_STATIC_TYPE_FIELD,
    req("lbindex", "Low Index", NODE),
    opt("hbindex", "High Index", NODE),
    req("value", "Value", NODE),
];
const FIELD_DESIGNATOR: &[FieldSpec] = &[
    VARIABLE_KIND_FIELD,
    VARIABLE_STATIC_TYPE_FIELD,
    req("key", "Key", NODE),
    req("value", "Value", NODE),
];
const IDENTIFIED_VARIABLE: &[FieldSpec] = &[
    VARIABLE_KIND_FIELD,
    VARIABLE_STATIC_TYPE_FIELD,
    req("value", "Value", NODE),
];

// Expressions

const OP: &[FieldSpec] = &[req("value", "Value", code(OP_KIND))];
const EXPRESSION_LIKE: &[FieldSpec] = &[
    EXPRESSION_KIND_FIELD,
    EXPRESSION_STATIC_TYPE_FIELD,
    req("value", "Value", NODE_NESTED),
];
const EXPRESSION: &[FieldSpec] = &[
    EXPRESSION_KIND_FIELD,
    EXPRESSION_STATIC_TYPE_FIELD,
    req("op", "Operation", NODE),
    opt("lhs", "Left-hand Side", NODE),
    opt("rhs", "Right-hand Side", NODE),
];
const ELEMENT_DESCRIPTION: &[FieldSpec] = &[req("start", "Start", NODE), opt("end", "End", NODE)];
const SET_CONSTRUCTOR: &[FieldSpec] = &[opt("value", "Value", LIST_NESTED)];
const FUNCTION_DESIGNATOR: &[FieldSpec] = &[
    EXPRESSION_KIND_FIELD,
    EXPRESSION_STATIC_TYPE_FIELD,
    opt("key", "Key", NODE_NESTED),
    opt("params", "Params", NODE_NESTED),
];

// Statements

const ASSIGNMENT_STATEMENT: &[FieldSpec] = &[
    STMT_LABEL,
    req("key", "Key", NODE_NESTED),
    req("value", "Value", NODE_NESTED),
];
const PROCEDURE_STATEMENT: &[FieldSpec] = &[
    STMT_LABEL,
    req("key", "Key", NODE_NESTED),
    opt("value", "Value", NODE_NESTED),
];
const GOTO_STATEMENT: &[FieldSpec] = &[STMT_LABEL, req("value", "Label", NODE_NESTED)];
const COMPOUND_STATEMENT: &[FieldSpec] = &[STMT_LABEL, opt("value", "Value", LIST)];
const CONDITIONAL_STATEMENT: &[FieldSpec] = &[
    STMT_LABEL,
    CONDITION,
    req("ifStmt", "True Branch", NODE_NESTED),
    opt("elseStmt", "False Branch", NODE_NESTED),
];
const CASE_STATEMENT: &[FieldSpec] = &[
    STMT_LABEL,
    req("index", "Index", NODE_NESTED),
    req("cases", "Cases", LIST),
];
const CASE: &[FieldSpec] = &[req("heading", "Heading", LIST), BODY];
const WHILE_STATEMENT: &[FieldSpec] = &[STMT_LABEL, CONDITION, BODY];
const REPEAT_STATEMENT: &[FieldSpec] = &[STMT_LABEL, CONDITION, opt("body", "Body", LIST)];
const FOR_STATEMENT: &[FieldSpec] = &[
    STMT_LABEL,
    req("controlVar", "Control Variable", NODE_NESTED),
    req("initial", "Initial Value", NODE_NESTED),
    req("traversalMode", "Traversal Mode", code(FOR_TRAVERSAL_MODE)),
    req("final", "Final Value", NODE_NESTED),
    BODY,
];
const WITH_STATEMENT: &[FieldSpec] = &[
    STMT_LABEL,
    req("recVars", "Record Variables", LIST),
    BODY,
];

// Program

const BLOCK: &[FieldSpec] = &[
    opt("labels", "Labels", NODE),
    opt("consts", "Constants", NODE),
    opt("types", "Types", NODE),
    opt("variables", "Variables", NODE),
    opt("subfuncs", "Procedures & Functions", NODE),
    opt("stmt", "Statements", NODE),
];
const PROGRAM_HEADING: &[FieldSpec] = &[
    req("name", "Program Name", SCALAR),
    req("externals", "Externals", SCALAR),
];
const PROGRAM: &[FieldSpec] = &[
    FieldSpec {
        on_missing: OnMissing::ProgramHeading,
        ..HEADING
    },
    BODY,
];

/// The ordered field schema of a node kind
pub fn fields_of(kind: NodeKind) -> &'static [FieldSpec] {
    use NodeKind::*;
    match kind {
        StringNode | IdentifierNode | DirectiveNode => SIMPLE_VALUE,
        NumberNode => NUMBER,
        UnsignedConstantNode => UNSIGNED_CONSTANT,
        SpecialSymbolNode => SPECIAL_SYMBOL,
        LabelDeclarationNode => LABEL_DECLARATION,
        ConstantDefinitionNode => CONSTANT_DEFINITION,
        ConstantDefinitionPartNode => CONSTANT_DEFINITION_PART,
        TypeIdentifierNode => TYPE_IDENTIFIER,
        EnumeratedTypeNode => ENUMERATED_TYPE,
        SubrangeTypeNode => SUBRANGE_TYPE,
        ArrayTypeNode => ARRAY_TYPE,
        RecordSectionNode => RECORD_SECTION,
        RecordVariantCaseNode => RECORD_VARIANT_CASE,
        RecordVariantNode => RECORD_VARIANT,
        RecordTypeNode => RECORD_TYPE,
        SetTypeNode => SET_TYPE,
        FileTypeNode => FILE_TYPE,
        PointerTypeNode => POINTER_TYPE,
        TypeDefinitionNode => TYPE_DEFINITION,
        TypeDefinitionPartNode => TYPE_DEFINITION_PART,
        VariableDeclarationNode => VARIABLE_DECLARATION,
        VariableDeclarationPartNode => VARIABLE_DECLARATION_PART,
        IndexTypeSpecificationNode => INDEX_TYPE_SPECIFICATION,
        PackedConformantArraySchemaNode => PACKED_CONFORMANT_ARRAY_SCHEMA,
        UnpackedConformantArraySchemaNode => UNPACKED_CONFORMANT_ARRAY_SCHEMA,
        ParameterSpecificationNode => PARAMETER_SPECIFICATION,
        ActualParameterListNode => ACTUAL_PARAMETER_LIST,
        ProcedureHeadingNode => PROCEDURE_HEADING,
        FunctionHeadingNode => FUNCTION_HEADING,
        ProcedureDeclarationNode | FunctionDeclarationNode => ROUTINE_DECLARATION,
        ProcedureAndFunctionDeclarationPartNode => ROUTINE_DECLARATION_PART,
        EntireVariableNode => ENTIRE_VARIABLE,
        IndexedVariableNode => INDEXED_VARIABLE,
        FieldDesignatorNode => FIELD_DESIGNATOR,
        IdentifiedVariableNode => IDENTIFIED_VARIABLE,
        OpNode => OP,
        ExpressionLikeNode => EXPRESSION_LIKE,
        ExpressionNode => EXPRESSION,
        ElementDescriptionNode => ELEMENT_DESCRIPTION,
        SetConstructorNode => SET_CONSTRUCTOR,
        FunctionDesignatorNode => FUNCTION_DESIGNATOR,
        AssignmentStatementNode => ASSIGNMENT_STATEMENT,
        ProcedureStatementNode => PROCEDURE_STATEMENT,
        GotoStatementNode => GOTO_STATEMENT,
        CompoundStatementNode => COMPOUND_STATEMENT,
        ConditionalStatementNode => CONDITIONAL_STATEMENT,
        CaseStatementNode => CASE_STATEMENT,
        CaseNode => CASE,
        WhileStatementNode => WHILE_STATEMENT,
        RepeatStatementNode => REPEAT_STATEMENT,
        ForStatementNode => FOR_STATEMENT,
        WithStatementNode => WITH_STATEMENT,
        BlockNode => BLOCK,
        ProgramHeadingNode => PROGRAM_HEADING,
        ProgramNode => PROGRAM,
    }
}
