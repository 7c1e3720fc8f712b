//! Input acquisition
//!
//! Reads an AST dump and parses it as JSON. This is the only fallible step of
//! the pipeline; once a [`Value`] is obtained, rendering always succeeds.

use crate::astv::render::render_tree;
use crate::astv::tree::RenderedTree;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid AST JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("AST root must be a JSON object, found {0}")]
    NotANode(&'static str),
}

/// Parse an AST document from a string
pub fn load_str(input: &str) -> Result<Value, LoadError> {
    let value: Value = serde_json::from_str(input)?;
    if !value.is_object() {
        return Err(LoadError::NotANode(json_type_name(&value)));
    }
    Ok(value)
}

/// Read and parse an AST dump from disk
pub fn load_file(path: impl AsRef<Path>) -> Result<Value, LoadError> {
    let path = path.as_ref();
    let input = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_str(&input)
}

/// Load a file and render it into a fresh tree
pub fn render_file(path: impl AsRef<Path>) -> Result<RenderedTree, LoadError> {
    let path = path.as_ref();
    match load_file(path) {
        Ok(value) => {
            let tree = render_tree(&value);
            info!(path = %path.display(), tree = %tree.id, root = %tree.root.kind, "loaded AST");
            Ok(tree)
        }
        Err(err) => {
            error!(path = %path.display(), "unable to process AST input: {}", err);
            Err(err)
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
