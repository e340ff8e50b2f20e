use clap::{Parser, Subcommand};

use crate::commands::{pick, search};

#[derive(Debug, Parser)]
#[command(name = "tcd")]
#[command(about = "Tax country selection dialog", long_about = None)]
pub struct Cli {
    /// Show cause and remediation for errors
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 国選択ダイアログを開き、確定した国を出力
    Pick(pick::Args),

    /// 表示名で国を検索
    Search(search::Args),
}
