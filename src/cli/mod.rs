//! Command-line interface for flow-config
//!
//! Provides `check`, `show`, `get` and `flow-id` subcommands for inspecting a
//! configuration root.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use flow_config::settings::{load_settings, Settings};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod check;
mod flow_id;
mod get;
mod show;
mod utils;

/// Inspect and resolve namespace-partitioned pipeline configuration
#[derive(Parser)]
#[command(name = "flow-config")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file (TOML or YAML)
    #[arg(short = 's', long, global = true, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Configuration root directory (overrides settings)
    #[arg(short = 'r', long, global = true, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Filesystem environment used to derive the default root
    #[arg(long, global = true, value_name = "ENV")]
    env: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Report on the configuration root and every configuration file in it
    Check,

    /// Load namespaces (and optionally a flow) and dump the merged result
    Show(show::ShowArgs),

    /// Resolve a `cm:` shortcut key and print its value
    Get(get::GetArgs),

    /// Print the flow ID derived from a filename
    FlowId(flow_id::FlowIdArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    if let Commands::FlowId(args) = cli.command {
        return flow_id::run(args);
    }

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let settings: Settings = load_settings(&cwd, cli.settings.as_deref())
        .context("Failed to load settings")?
        .with_overrides(cli.env, cli.root);

    match cli.command {
        Commands::Check => check::run(&settings),
        Commands::Show(args) => show::run(args, &settings),
        Commands::Get(args) => get::run(args, &settings),
        Commands::FlowId(args) => flow_id::run(args),
    }
}
