//! STK command line
//!
//! `stk` browses the catalog, prints pre-built templates, validates and
//! converts template files.

#![warn(unreachable_pub)]

mod commands;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::io::Write;
use std::path::{Path, PathBuf};
use stk_catalog::TypeCategory;
use stk_core::WorkbenchConfig;
use stk_exchange::ExportFormat;

/// Exit status for a run that found blocking validation errors
pub const EXIT_BLOCKED: u8 = 1;

/// Build the command tree
#[must_use]
pub fn build_cli() -> Command {
    Command::new("stk")
        .version(env!("CARGO_PKG_VERSION"))
        .about("SCADA Template Kit: data-type catalog, template validation and export")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)"),
        )
        .subcommand(
            Command::new("catalog")
                .about("List SCADA data types")
                .arg(
                    Arg::new("category")
                        .long("category")
                        .value_parser(|s: &str| s.parse::<TypeCategory>())
                        .help("Only this type category (analog, digital, string, system)"),
                )
                .arg(
                    Arg::new("search")
                        .long("search")
                        .help("Case-insensitive text to match in name, description or category"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("security")
                .about("List security classifications")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("prebuilt")
                .about("List pre-built templates, or print one")
                .arg(Arg::new("key").help("Template key (pump, valve, motor, tank, pid)"))
                .arg(format_arg("format").help("Output format [default: from config]")),
        )
        .subcommand(
            Command::new("validate")
                .about("Validate a template file")
                .arg(file_arg())
                .arg(
                    Arg::new("fix")
                        .long("fix")
                        .action(ArgAction::SetTrue)
                        .help("Apply automatic fixes before reporting"),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .value_name("PATH")
                        .value_parser(value_parser!(PathBuf))
                        .help("Write the (fixed) template here; format from extension"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output the report as JSON"),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a template file to another format")
                .arg(file_arg())
                .arg(format_arg("to").required(true).help("Target format"))
                .arg(
                    Arg::new("out")
                        .long("out")
                        .value_name("PATH")
                        .value_parser(value_parser!(PathBuf))
                        .help("Write here instead of stdout"),
                ),
        )
}

fn file_arg() -> Arg {
    Arg::new("file")
        .required(true)
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Template file (.json, .csv or .xml)")
}

fn format_arg(name: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .value_name("FORMAT")
        .value_parser(|s: &str| s.parse::<ExportFormat>())
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` wins over `-v` when set.
pub fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Load configuration, or defaults when no path is given
///
/// # Errors
/// Unreadable file or invalid TOML
pub async fn load_config(path: Option<&Path>) -> anyhow::Result<WorkbenchConfig> {
    let Some(path) = path else {
        return Ok(WorkbenchConfig::default());
    };
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading config {}", path.display()))?;
    WorkbenchConfig::from_toml_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

/// Run the parsed command, writing results to `out`
///
/// Returns the process exit status.
///
/// # Errors
/// Any failure that should abort the command
pub async fn run(matches: &ArgMatches, out: &mut dyn Write) -> anyhow::Result<u8> {
    let config = load_config(matches.get_one::<PathBuf>("config").map(PathBuf::as_path)).await?;

    match matches.subcommand() {
        Some(("catalog", args)) => commands::catalog(args, out),
        Some(("security", args)) => commands::security(args, out),
        Some(("prebuilt", args)) => commands::prebuilt(&config, args, out),
        Some(("validate", args)) => commands::validate(&config, args, out).await,
        Some(("convert", args)) => commands::convert(&config, args, out).await,
        _ => {
            write!(out, "{}", build_cli().render_help())?;
            Ok(0)
        }
    }
}
