// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Repolist CLI - list and look up the git repositories under your directories

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use repolist::config::{config_file, LOG_LEVELS};
use repolist::Registry;
use std::process::ExitCode;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::Output;

#[derive(Parser)]
#[command(name = "repolist")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "REPOLIST_CONFIG", global = true)]
    config: Option<std::path::PathBuf>,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", global = true)]
    no_color: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan and list every repository
    List,

    /// Scan and list repositories by group
    Groups,

    /// Look up a repository by its param
    Find {
        /// Repository param (usually its directory name)
        param: String,
    },

    /// Show the effective configuration
    Config,

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = repolist::config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    // Flags win over the configured level, RUST_LOG over both
    let configured = config.level();
    let level = match cli.verbose {
        0 if cli.quiet => "error",
        0 => configured.unwrap_or("info"),
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if configured.is_none() {
        warn!(
            "Unknown log level '{}' in configuration, using info (expected one of: {})",
            config.log_level,
            LOG_LEVELS.join(", ")
        );
    }
    match config_file(cli.config.as_deref()) {
        Some(file) => debug!("Configuration read from {}", file.display()),
        None => debug!("No configuration file, using defaults"),
    }

    let output = Output {
        json: cli.json,
        color: !cli.no_color,
    };

    match cli.command {
        Commands::List => {
            let mut registry = Registry::new(config);
            commands::list::run(&mut registry, output)?;
        }
        Commands::Groups => {
            let mut registry = Registry::new(config);
            commands::groups::run(&mut registry, output)?;
        }
        Commands::Find { param } => {
            let mut registry = Registry::open(config).context("Initial scan failed")?;
            return commands::find::run(&mut registry, &param, output);
        }
        Commands::Config => commands::config::run(&config, output)?,
        Commands::Completions { shell } => commands::completions::run(shell, &mut Cli::command()),
    }

    Ok(ExitCode::SUCCESS)
}
