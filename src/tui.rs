//! ルーム一覧 TUI
//!
//! ratatui/crossterm を使用して、フィルタトリガーとルーム一覧を表示する。
//!
//! ## モジュール構成
//!
//! - `app`: Model / Msg / update
//! - `view`: 画面描画

mod app;
mod view;

use crate::bindings::Bindings;
use crate::controller::FilterController;
use crate::error::{Result, RoomListError};
use app::Model;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use std::io::{self, stdout};
use tracing::debug;

/// TUI を実行
pub fn run(controller: FilterController, bindings: Bindings) -> Result<()> {
    let mut model = Model::new(controller, bindings);

    // ターミナル設定
    terminal::enable_raw_mode().map_err(RoomListError::Terminal)?;

    let result = event_loop(&mut model);

    // ループがエラーでもターミナルは復元する
    let restored = restore_terminal();
    result.and(restored).map_err(RoomListError::Terminal)
}

fn event_loop(model: &mut Model) -> io::Result<()> {
    stdout().execute(EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    // メインループ
    while !model.should_quit {
        terminal.draw(|f| view::view(f, model))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let msg = if key.modifiers.contains(KeyModifiers::CONTROL) {
                // raw mode では Ctrl-C がシグナルにならない
                (key.code == KeyCode::Char('c')).then_some(app::Msg::Quit)
            } else {
                model.key_to_msg(key.code)
            };
            if let Some(msg) = msg {
                debug!(?msg, "Key message");
                app::update(model, msg);
            }
        }
    }

    Ok(())
}

fn restore_terminal() -> io::Result<()> {
    terminal::disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
