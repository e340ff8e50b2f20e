use crate::cli::Command;
use crate::error::Result;

pub mod pick;
pub mod search;

pub fn dispatch(cli: crate::cli::Cli) -> Result<()> {
    match cli.command {
        Command::Pick(args) => pick::run(args),
        Command::Search(args) => search::run(args),
    }
}
