//! Command-line interface for astv
//!
//! Usage:
//!   astv view `<path>`                                   - Browse an AST dump in the terminal
//!   astv export `<path>` [--format `<format>`] [--collapsed] [--no-positions]
//!   astv check `<path>`                                  - Summarize embedded render errors
//!
//! Global options: `--config <file>`, `--log-file <file>`. Exit status is 1
//! when the input cannot be loaded and 2 when `check` finds errors.

#[path = "astv/cli.rs"]
mod cli;
#[path = "astv/commands.rs"]
mod commands;
#[path = "astv/logging.rs"]
mod logging;
#[path = "astv/viewer/mod.rs"]
mod viewer;

use astv::astv::config::{self, AstvConfig, ValueKind};
use clap::ArgMatches;
use commands::ExportRequest;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;
use viewer::app::App;
use viewer::model::Model;

fn main() {
    let matches = cli::build_cli().get_matches();

    let config_path = matches.get_one::<String>("config").map(PathBuf::from);
    let config = config::load(config_path.as_deref(), overrides(&matches)).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    });

    let interactive = matches!(matches.subcommand_name(), Some("view"));
    let log_file = matches.get_one::<String>("log-file").map(PathBuf::from);
    if let Err(e) = logging::init(&config.logging.level, log_file.as_deref(), interactive) {
        eprintln!("Logging error: {}", e);
        process::exit(1);
    }

    match matches.subcommand() {
        Some(("view", sub)) => handle_view_command(path_arg(sub), &config),
        Some(("export", sub)) => handle_export_command(path_arg(sub), sub, &config),
        Some(("check", sub)) => handle_check_command(path_arg(sub)),
        _ => unreachable!("clap requires a subcommand"),
    }
}

/// Export flags that map onto `[export]` config keys
fn overrides(matches: &ArgMatches) -> Vec<(&'static str, ValueKind)> {
    let mut overrides = Vec::new();
    if let Some(("export", sub)) = matches.subcommand() {
        if let Some(format) = sub.get_one::<String>("format") {
            overrides.push(("export.format", ValueKind::from(format.as_str())));
        }
        if let Some(&width) = sub.get_one::<usize>("label-width") {
            overrides.push(("export.label_width", ValueKind::from(width as u64)));
        }
        if sub.get_flag("no-positions") {
            overrides.push(("export.show_positions", ValueKind::from(false)));
        }
    }
    overrides
}

fn path_arg(matches: &ArgMatches) -> &Path {
    matches
        .get_one::<String>("path")
        .map(Path::new)
        .unwrap_or_else(|| Path::new(""))
}

fn handle_view_command(path: &Path, config: &AstvConfig) {
    let model = Model::load(path, config.presentation.palette()).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });
    let app = App::new(model, config.viewer.indent);
    let tick_rate = Duration::from_millis(config.viewer.tick_rate_ms);
    if let Err(e) = viewer::viewer_main::run_viewer(app, tick_rate) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn handle_export_command(path: &Path, matches: &ArgMatches, config: &AstvConfig) {
    let mut request = ExportRequest::from_config(config);
    if matches.get_flag("collapsed") {
        request.options.honor_collapse = true;
    }

    match commands::export(path, &request, config) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn handle_check_command(path: &Path) {
    match commands::check(path) {
        Ok(report) => {
            print!("{}", report.summary);
            process::exit(report.status);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
