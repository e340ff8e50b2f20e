//! tcd pick コマンド
//!
//! カタログを読み込んで国選択ダイアログを開き、確定した国を出力する。

use std::path::PathBuf;

use clap::Parser;

use crate::catalog;
use crate::country::Country;
use crate::error::Result;
use crate::output::{self, OutputFormat, SelectionSummary};
use crate::tui::{run_country_dialog, Callbacks, Props};

#[derive(Debug, Parser)]
#[command(after_help = "KEYS:\n  \
    type        filter countries by name\n  \
    down/enter  move from the search bar to the list\n  \
    space       toggle the country under the cursor\n  \
    enter       confirm the selection (in the list, or when no rows match)\n  \
    ctrl+s      confirm the selection from anywhere\n  \
    esc/q       close without selecting")]
pub struct Args {
    /// Country catalog file (.json, .yaml, .yml, .toml). Defaults to $TCD_COUNTRIES
    #[arg(long, short)]
    pub countries: Option<PathBuf>,

    /// Country codes to check initially (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub preselect: Vec<String>,

    /// Output in JSON format
    #[arg(long, conflicts_with = "simple")]
    pub json: bool,

    /// Output only country codes
    #[arg(long, conflicts_with = "json")]
    pub simple: bool,
}

pub fn run(args: Args) -> Result<()> {
    let path = catalog::resolve_path(args.countries)?;
    let mut countries = catalog::load(&path)?;
    catalog::preselect(&mut countries, &args.preselect)?;
    let total = countries.len();

    let mut confirmed: Option<Vec<Country>> = None;
    let mut handler = Callbacks::new(
        |selection| confirmed = Some(selection),
        || tracing::debug!("country dialog closed"),
    );
    run_country_dialog(&Props::open(countries), &mut handler)?;

    let Some(selection) = confirmed else {
        tracing::info!("selection cancelled");
        eprintln!("Selection cancelled");
        return Ok(());
    };
    tracing::info!(count = selection.len(), "selection confirmed");

    let format = OutputFormat::from_flags(args.json, args.simple);
    match format {
        OutputFormat::Table => {
            if !selection.is_empty() {
                println!("{}", output::render(&selection, format)?);
            }
            println!("{}", SelectionSummary::format(selection.len(), total));
        }
        _ => println!("{}", output::render(&selection, format)?),
    }

    Ok(())
}
