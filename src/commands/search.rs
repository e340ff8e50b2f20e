//! tcd search コマンド
//!
//! ダイアログと同じ検索条件で国を絞り込んで一覧表示する。

use std::path::PathBuf;

use clap::Parser;

use crate::catalog;
use crate::error::Result;
use crate::output::{self, OutputFormat};
use crate::tui::local_search;

#[derive(Debug, Parser)]
#[command(after_help = "MATCHING:\n  \
    Case-insensitive substring match against the country display name.\n  \
    An empty QUERY lists every country.")]
pub struct Args {
    /// Text to search for in country names
    #[arg(default_value = "")]
    pub query: String,

    /// Country catalog file (.json, .yaml, .yml, .toml). Defaults to $TCD_COUNTRIES
    #[arg(long, short)]
    pub countries: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, conflicts_with = "simple")]
    pub json: bool,

    /// Output only country codes
    #[arg(long, conflicts_with = "json")]
    pub simple: bool,
}

pub fn run(args: Args) -> Result<()> {
    let path = catalog::resolve_path(args.countries)?;
    let countries = catalog::load(&path)?;

    let matched: Vec<_> = local_search(&countries, &args.query, |c| c.display_name())
        .into_iter()
        .cloned()
        .collect();
    tracing::info!(query = %args.query, matched = matched.len(), "search finished");

    let format = OutputFormat::from_flags(args.json, args.simple);
    if matched.is_empty() && format == OutputFormat::Table {
        println!("No countries matched");
        return Ok(());
    }

    println!("{}", output::render(&matched, format)?);
    Ok(())
}
