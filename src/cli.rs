use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{browse, list, show, tabs};

#[derive(Debug, Parser)]
#[command(name = "alib")]
#[command(about = "Asset Library CLI", long_about = None)]
pub struct Cli {
    /// Catalog file (.json or .toml). Defaults to the built-in sample catalog
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 対話的にアセットを閲覧
    Browse(browse::Args),

    /// アセット一覧を表示
    List(list::Args),

    /// アセットの詳細表示
    Show(show::Args),

    /// タブごとの件数を表示
    Tabs(tabs::Args),
}
