use clap::{Parser, Subcommand};

use crate::commands::{browse, config, list};

#[derive(Debug, Parser)]
#[command(name = "roomlist")]
#[command(about = "Filter a chat room list by direct, encrypted and unread tags", long_about = None)]
pub struct Cli {
    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// ルーム一覧をフィルタして表示
    List(list::Args),

    /// ルーム一覧を TUI で表示
    Browse(browse::Args),

    /// 設定ファイルの表示
    Config(config::Args),
}
