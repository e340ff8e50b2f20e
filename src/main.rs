mod catalog;
mod cli;
mod commands;
mod country;
mod env;
mod error;
mod logging;
mod output;
mod tui;

use clap::Parser;

use crate::error::ErrorFormatter;

fn main() {
    let cli = cli::Cli::parse();
    logging::init();

    let verbose = cli.verbose;
    if let Err(err) = commands::dispatch(cli) {
        tracing::debug!(error = ?err, "command failed");
        eprintln!("{}", ErrorFormatter::new(verbose).format(&err));
        std::process::exit(1);
    }
}
