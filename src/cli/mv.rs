//! `mv`: file an existing file under today's stash directory

use anyhow::{Context, Result};
use chrono::Local;
use clap::Args;
use std::env;
use std::path::PathBuf;

use crate::domain::Config;
use crate::source::find_repo_root;
use crate::stash::move_into_stash;

#[derive(Args)]
pub struct MvArgs {
    /// File to move
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

pub fn run(args: MvArgs, config: &Config) -> Result<()> {
    let cwd = env::current_dir().context("failed to read current directory")?;
    let root = find_repo_root(&cwd)?;
    move_into_stash(&root, &config.dirname, &args.file, Local::now().date_naive())?;
    Ok(())
}
