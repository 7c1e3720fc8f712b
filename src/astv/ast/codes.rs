//! Variant enumeration tables
//!
//! Several node fields hold small integer codes (number kinds, operators,
//! traversal directions...). The compiler serializes the enum discriminant, so
//! the viewer keeps a copy of each table to show a readable name next to the
//! raw code. Unknown codes are displayed, never rejected.

use super::node::display_scalar;
use serde_json::Value;

/// Label used for codes missing from a table
pub const UNDEFINED_CODE: &str = "undefined";

/// A closed mapping from integer codes to display names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeTable {
    name: &'static str,
    entries: &'static [(i64, &'static str)],
}

impl CodeTable {
    pub const fn new(name: &'static str, entries: &'static [(i64, &'static str)]) -> Self {
        CodeTable { name, entries }
    }

    /// Name of the table (e.g. "OpKind")
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Look up the display name for a code
    pub fn lookup(&self, code: i64) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, name)| *name)
    }

    /// Format a raw JSON value as `NAME (code)`
    ///
    /// Integral floats (`2.0`) are looked up like integers but keep their
    /// original notation in the parenthesized part.
    pub fn describe(&self, value: &Value) -> String {
        let name = code_of(value)
            .and_then(|code| self.lookup(code))
            .unwrap_or(UNDEFINED_CODE);
        format!("{} ({})", name, display_scalar(value))
    }

    pub fn entries(&self) -> &'static [(i64, &'static str)] {
        self.entries
    }
}

fn code_of(value: &Value) -> Option<i64> {
    if let Some(code) = value.as_i64() {
        return Some(code);
    }
    value
        .as_f64()
        .filter(|f| f.fract() == 0.0 && f.is_finite())
        .map(|f| f as i64)
}

pub const NUMBER_KIND: CodeTable = CodeTable::new(
    "NumberKind",
    &[
        (1, "UNSIGNED_REAL"),
        (2, "UNSIGNED_INTEGER"),
        (3, "SIGNED_REAL"),
        (4, "SIGNED_INTEGER"),
    ],
);

pub const SPECIAL_SYMBOL_KIND: CodeTable = CodeTable::new("SpecialSymbolKind", &[(1, "SS_NIL")]);

pub const TYPE_KIND: CodeTable = CodeTable::new(
    "TypeKind",
    &[
        (1, "TYPE_UNKNOWN"),
        (2, "TYPE_SIMPLE"),
        (3, "TYPE_STRUCTURED"),
        (4, "TYPE_POINTER"),
        (5, "TYPE_IDENTIFIER"),
    ],
);

pub const VARIABLE_KIND: CodeTable = CodeTable::new(
    "VariableKind",
    &[
        (1, "VARIABLE_UNKNOWN"),
        (2, "VARIABLE_ENTIRE"),
        (3, "VARIABLE_COMPONENT"),
        (4, "VARIABLE_IDENTIFIED"),
    ],
);

pub const VARIABLE_STATIC_TYPE: CodeTable = CodeTable::new(
    "VariableStaticType",
    &[
        (1, "VARIABLE_ST_UNKNOWN"),
        (2, "VARIABLE_ST_ARRAY"),
        (3, "VARIABLE_ST_RECORD"),
        (4, "VARIABLE_ST_POINTER"),
    ],
);

pub const OP_KIND: CodeTable = CodeTable::new(
    "OpKind",
    &[
        // Arithmetic
        (1, "OP_ADD"),
        (2, "OP_SUB"),
        (3, "OP_MUL"),
        (4, "OP_DIV"),
        (5, "OP_MOD"),
        // Logical
        (6, "OP_OR"),
        (7, "OP_AND"),
        // Relational
        (8, "OP_EQ"),
        (9, "OP_NEQ"),
        (10, "OP_LT"),
        (11, "OP_LTE"),
        (12, "OP_GT"),
        (13, "OP_GTE"),
        (14, "OP_IN"),
    ],
);

pub const EXPRESSION_KIND: CodeTable =
    CodeTable::new("ExpressionKind", &[(1, "EXP_UNARY"), (2, "EXP_BINARY")]);

pub const EXPRESSION_STATIC_TYPE: CodeTable = CodeTable::new(
    "ExpressionStaticType",
    &[(1, "EXP_ORDINAL"), (2, "EXP_BOOLEAN"), (3, "EXP_INTEGER")],
);

pub const FOR_TRAVERSAL_MODE: CodeTable =
    CodeTable::new("ForTraversalMode", &[(1, "FOR_TO"), (2, "FOR_DOWNTO")]);
