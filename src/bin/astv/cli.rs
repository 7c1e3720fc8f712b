// Command-line definition, shared with build.rs for shell completions.
// Only depends on clap so it can be `include!`d from the build script.

use clap::{Arg, ArgAction, Command, ValueHint};

fn path_arg(help: &'static str) -> Arg {
    Arg::new("path")
        .help(help)
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

pub fn build_cli() -> Command {
    Command::new("astv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect serialized Pascal compiler ASTs as collapsible trees")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the defaults and ./astv.toml")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .global(true)
                .help("Write logs to this file instead of stderr")
                .value_hint(ValueHint::FilePath),
        )
        .subcommand(
            Command::new("view")
                .about("Open an AST dump in the interactive terminal viewer")
                .arg(path_arg("Path to the AST JSON dump")),
        )
        .subcommand(
            Command::new("export")
                .about("Render an AST dump and print it in a static format")
                .arg(path_arg("Path to the AST JSON dump"))
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .value_name("format")
                        .help("Output format: treeviz, json, yaml or html (default from config: treeviz)"),
                )
                .arg(
                    Arg::new("collapsed")
                        .long("collapsed")
                        .help("Leave out the bodies of containers that start collapsed")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("no-positions")
                        .long("no-positions")
                        .help("Drop the Pos block of every node")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("label-width")
                        .long("label-width")
                        .help("Truncate treeviz field values to this many characters")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Render an AST dump and summarize the errors embedded in it")
                .arg(path_arg("Path to the AST JSON dump")),
        )
}
