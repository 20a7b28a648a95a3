//! roomlist list コマンド
//!
//! ルームファイルを読み込み、フィルタを適用した一覧を表示する。

use crate::config::Config;
use crate::controller::FilterController;
use crate::error::Result;
use crate::filter::{FilterDimension, FilterState};
use crate::output::FilterSummary;
use crate::room::{load_rooms, RoomEntry};
use clap::{Parser, ValueEnum};
use comfy_table::{presets::UTF8_FULL, Table};
use std::path::PathBuf;

/// コマンドラインで指定できるフィルタ状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StateArg {
    /// Show only rooms with the tag
    Require,
    /// Show only rooms without the tag
    Exclude,
}

impl From<StateArg> for FilterState {
    fn from(arg: StateArg) -> Self {
        match arg {
            StateArg::Require => FilterState::Require,
            StateArg::Exclude => FilterState::Exclude,
        }
    }
}

#[derive(Debug, Parser)]
pub struct Args {
    /// Room file (.json, .toml, .yaml, .yml). Defaults to `rooms` in the config file
    #[arg(long, value_name = "FILE")]
    pub rooms: Option<PathBuf>,

    /// Filter by direct-message tag
    #[arg(long, value_enum, value_name = "STATE")]
    pub direct: Option<StateArg>,

    /// Filter by encryption tag
    #[arg(long, value_enum, value_name = "STATE")]
    pub encrypted: Option<StateArg>,

    /// Filter by unread tag
    #[arg(long, value_enum, value_name = "STATE")]
    pub unread: Option<StateArg>,

    /// Output in JSON format
    #[arg(long, conflicts_with = "simple")]
    pub json: bool,

    /// Output only room names
    #[arg(long, conflicts_with = "json")]
    pub simple: bool,
}

impl Args {
    fn requested(&self) -> [(FilterDimension, Option<StateArg>); FilterDimension::COUNT] {
        [
            (FilterDimension::Direct, self.direct),
            (FilterDimension::Encrypted, self.encrypted),
            (FilterDimension::Unread, self.unread),
        ]
    }
}

pub fn run(args: Args) -> Result<()> {
    // 1. ルームファイルを決定して読み込み
    let config = Config::load()?;
    let path = config.resolve_rooms(args.rooms.clone())?;
    let mut rooms = load_rooms(&path)?;

    // 2. ソート（表示名昇順）
    rooms.sort_by_display_names();

    // 3. フィルタリング
    let mut controller = FilterController::new(rooms.into_rooms());
    apply_requested(&mut controller, &args);

    // 4. 出力
    let visible: Vec<&RoomEntry> = controller.visible_cards().map(|c| c.room()).collect();
    let total_count = controller.len();

    if args.json {
        print_json(&visible)?;
    } else if args.simple {
        print_simple(&visible, total_count);
    } else {
        print_table(&visible, total_count);
        let summary = FilterSummary::format(visible.len(), total_count, controller.states());
        println!("{} {}", summary.prefix, summary.message);
    }

    Ok(())
}

/// 指定された状態になるまで各次元をトグルする
fn apply_requested(controller: &mut FilterController, args: &Args) {
    for (dimension, arg) in args.requested() {
        let Some(arg) = arg else { continue };
        for _ in 0..FilterState::from(arg).toggles_from_unset() {
            controller.toggle(dimension);
        }
    }
}

fn flag(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "-"
    }
}

fn print_table(rooms: &[&RoomEntry], total_count: usize) {
    if rooms.is_empty() {
        if total_count == 0 {
            println!("No rooms found");
        } else {
            println!("No rooms matched");
        }
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "Room ID", "Direct", "Encrypted", "Unread"]);

    for room in rooms {
        let unread = if room.has_unread() {
            room.unread_count.to_string()
        } else {
            "-".to_string()
        };
        table.add_row(vec![
            room.name.as_str(),
            room.id.as_str(),
            flag(room.is_direct),
            flag(room.is_encrypted),
            unread.as_str(),
        ]);
    }

    println!("{table}");
}

fn print_json(rooms: &[&RoomEntry]) -> Result<()> {
    // 空の場合も [] を出力
    let json = serde_json::to_string_pretty(rooms)?;
    println!("{json}");
    Ok(())
}

fn print_simple(rooms: &[&RoomEntry], total_count: usize) {
    if rooms.is_empty() {
        if total_count == 0 {
            println!("No rooms found");
        } else {
            println!("No rooms matched");
        }
        return;
    }
    for room in rooms {
        println!("{}", room.name);
    }
}

#[cfg(test)]
#[path = "list_test.rs"]
mod tests;
