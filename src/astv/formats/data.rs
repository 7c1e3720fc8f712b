//! Data formats: the serde form of a rendered tree
//!
//! Collapse bits are part of the data, so `honor_collapse` has no effect here.

use super::registry::{ExportContext, FormatError, Formatter};

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, ctx: &ExportContext<'_>) -> Result<String, FormatError> {
        let tree = ctx.options.prune(ctx.tree);
        serde_json::to_string_pretty(tree.as_ref())
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Rendered tree as pretty-printed JSON"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, ctx: &ExportContext<'_>) -> Result<String, FormatError> {
        let tree = ctx.options.prune(ctx.tree);
        serde_yaml::to_string(tree.as_ref())
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Rendered tree as YAML"
    }
}
