//! `ls`: pick a stashed file

use anyhow::Result;
use clap::Args;
use std::io::{self, Write};

use crate::domain::Config;
use crate::finder::{find, list};
use crate::select::TerminalPicker;
use crate::source::GhqSource;

#[derive(Args)]
pub struct LsArgs {
    /// Start with this query already typed (whitespace-separated AND terms)
    #[arg(short, long, value_name = "QUERY")]
    pub query: Option<String>,

    /// Print all matching files, most recent first, instead of prompting
    #[arg(short, long)]
    pub list: bool,
}

pub fn run(args: LsArgs, config: &Config) -> Result<()> {
    let source = GhqSource::default();
    let query = args.query.unwrap_or_default();

    if args.list {
        let candidates = list(config, &source, &query)?;
        let mut out = io::stdout().lock();
        for candidate in &candidates {
            writeln!(out, "{}", candidate.path.display())?;
        }
        return Ok(());
    }

    let mut picker = TerminalPicker::with_query(query);
    if let Some(path) = find(config, &source, &mut picker)? {
        println!("{}", path.display());
    }
    Ok(())
}
