//! Command-line interface for hiden
//!
//! Provides `ls`, `mkdir`, `mv` and `version` subcommands.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{default_config_home, load_config};
use crate::domain::Config;

mod ls;
mod mkdir;
mod mv;

/// Search personal memo/script directories across ghq repositories
#[derive(Parser)]
#[command(name = "hiden")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (config.json, config.toml or config.yaml)
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Name of the stash directory inside each repository
    #[arg(long, global = true, env = "HIDEN_DIRNAME", value_name = "NAME")]
    dirname: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search and select files from the stash directories of all repositories
    Ls(ls::LsArgs),

    /// Create a date-based directory in the current repository's stash
    Mkdir,

    /// Move a file into the date-based stash directory of the current repository
    Mv(mv::MvArgs),

    /// Print version information
    Version,
}

pub fn run() -> Result<()> {
    let Cli { command, verbose, config, dirname } = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let load = || {
        let config = resolve_config(
            default_config_home().as_deref(),
            config.as_deref(),
            dirname.as_deref(),
        )
        .context("failed to load config")?;
        tracing::debug!("Using stash directory name {:?}", config.dirname);
        anyhow::Ok(config)
    };

    match command {
        Commands::Ls(args) => ls::run(args, &load()?),
        Commands::Mkdir => mkdir::run(&load()?),
        Commands::Mv(args) => mv::run(args, &load()?),
        Commands::Version => {
            println!("hiden version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// File settings overlaid with `--dirname` / `HIDEN_DIRNAME`.
fn resolve_config(
    config_home: Option<&Path>,
    config_path: Option<&Path>,
    dirname: Option<&str>,
) -> Result<Config> {
    let mut config = load_config(config_home, config_path)?;
    if let Some(dirname) = dirname.map(str::trim).filter(|d| !d.is_empty()) {
        config.dirname = dirname.to_string();
    }
    Ok(config)
}
