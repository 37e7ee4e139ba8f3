//! `mkdir`: create today's stash directory

use anyhow::{Context, Result};
use chrono::Local;
use std::env;

use crate::domain::Config;
use crate::source::find_repo_root;
use crate::stash::ensure_dated_dir;

pub fn run(config: &Config) -> Result<()> {
    let cwd = env::current_dir().context("failed to read current directory")?;
    let root = find_repo_root(&cwd)?;
    let dir = ensure_dated_dir(&root, &config.dirname, Local::now().date_naive())?;
    println!("{}", dir.relative.display());
    Ok(())
}
