//! roomlist browse コマンド
//!
//! ルーム一覧を TUI で表示し、トリガーキーでフィルタを切り替える。

use crate::config::Config;
use crate::controller::FilterController;
use crate::error::Result;
use crate::room::load_rooms;
use crate::tui;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// Room file (.json, .toml, .yaml, .yml). Defaults to `rooms` in the config file
    #[arg(long, value_name = "FILE")]
    pub rooms: Option<PathBuf>,
}

pub fn run(args: Args) -> Result<()> {
    let config = Config::load()?;
    let bindings = config.bindings.to_bindings()?;
    let path = config.resolve_rooms(args.rooms)?;

    let mut rooms = load_rooms(&path)?;
    rooms.sort_by_display_names();

    tui::run(FilterController::new(rooms.into_rooms()), bindings)
}
