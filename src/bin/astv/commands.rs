//! Non-interactive subcommands

use astv::astv::config::AstvConfig;
use astv::astv::formats::{ExportContext, ExportOptions, FormatError, FormatRegistry};
use astv::astv::loader::{render_file, LoadError};
use astv::astv::presentation::PresentationState;
use astv::astv::tree::RenderedTree;
use std::path::Path;
use thiserror::Error;

/// Exit status of `check` when the rendered tree carries errors
pub const EXIT_EMBEDDED_ERRORS: i32 = 2;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Format(#[from] FormatError),
}

/// What `export` should produce
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub format: String,
    pub options: ExportOptions,
}

impl ExportRequest {
    /// Start from the configured defaults
    pub fn from_config(config: &AstvConfig) -> Self {
        ExportRequest {
            format: config.export.format.clone(),
            options: ExportOptions::from_config(&config.export),
        }
    }
}

pub fn export(path: &Path, request: &ExportRequest, config: &AstvConfig) -> Result<String, CommandError> {
    let tree = render_file(path)?;
    export_tree(&tree, request, config)
}

pub fn export_tree(
    tree: &RenderedTree,
    request: &ExportRequest,
    config: &AstvConfig,
) -> Result<String, CommandError> {
    let presentation = PresentationState::with_palette(config.presentation.palette(), tree);
    let ctx = ExportContext {
        tree,
        presentation: &presentation,
        options: request.options,
    };
    Ok(FormatRegistry::with_defaults().serialize(&ctx, &request.format)?)
}

/// Result of `check`: a printable summary and the exit status
pub struct CheckReport {
    pub summary: String,
    pub status: i32,
}

pub fn check(path: &Path) -> Result<CheckReport, CommandError> {
    let tree = render_file(path)?;
    Ok(check_tree(&path.display().to_string(), &tree))
}

pub fn check_tree(name: &str, tree: &RenderedTree) -> CheckReport {
    let stats = tree.stats();
    let mut summary = format!(
        "{}: {} ({} nodes, {} properties, {} fields)\n",
        name, tree.root.kind, stats.nodes, stats.properties, stats.fields
    );

    if stats.error_count() == 0 {
        summary.push_str("no errors\n");
        return CheckReport { summary, status: 0 };
    }

    summary.push_str(&format!("{} errors\n", stats.error_count()));
    for (code, count) in &stats.errors {
        summary.push_str(&format!("  {}: {}\n", code, count));
    }
    for (container, error) in tree.errors() {
        let label = tree
            .container(&container)
            .map(|c| c.label())
            .unwrap_or_default();
        summary.push_str(&format!("  at {} ({}): {}\n", container, label, error));
    }
    CheckReport {
        summary,
        status: EXIT_EMBEDDED_ERRORS,
    }
}
