//! Render-time errors
//!
//! None of these abort a render. Each one is embedded in the rendered tree as
//! an error field at the spot where the input was malformed.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "code", content = "detail", rename_all = "snake_case")]
pub enum FieldError {
    /// A required key is absent or `null`
    #[error("Missing property: {0}")]
    MissingProperty(String),

    /// A falsy element inside a list-valued field
    #[error("Empty element.")]
    EmptyListElement,

    /// The `type` tag is absent or not one the renderer knows
    #[error("Unknown node type: {0}")]
    UnknownNodeType(String),

    #[error("Node Position is not defined.")]
    MissingPosition,

    #[error("Program Heading is not defined.")]
    MissingProgramHeading,
}

impl FieldError {
    /// Stable machine-readable code, matching the serialized tag
    pub fn code(&self) -> &'static str {
        match self {
            FieldError::MissingProperty(_) => "missing_property",
            FieldError::EmptyListElement => "empty_list_element",
            FieldError::UnknownNodeType(_) => "unknown_node_type",
            FieldError::MissingPosition => "missing_position",
            FieldError::MissingProgramHeading => "missing_program_heading",
        }
    }
}
