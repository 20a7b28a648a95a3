//! ルーム一覧 TUI の Elm Architecture ベースのアプリケーション構造
//!
//! - `Model`: コントローラ + キー設定 + リストの選択状態
//! - `Msg`: アプリケーションへのメッセージ
//! - `update`: メッセージに応じた状態更新

use crate::bindings::Bindings;
use crate::controller::FilterController;
use crate::room::RoomEntry;
use crossterm::event::KeyCode;
use ratatui::widgets::ListState;

// ============================================================================
// Msg（アプリケーションへのメッセージ）
// ============================================================================

/// アプリケーションへのメッセージ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    /// 終了
    Quit,
    /// 選択を上へ
    Up,
    /// 選択を下へ
    Down,
    /// フィルタトリガー（登録済みキー）
    Trigger(char),
}

// ============================================================================
// Model（アプリケーション全体の状態）
// ============================================================================

/// アプリケーション全体の状態
pub struct Model {
    pub controller: FilterController,
    pub bindings: Bindings,
    /// 表示中カードに対する選択位置
    pub state: ListState,
    /// 選択中のルーム ID（フィルタ変更後の選択復元用）
    pub selected_id: Option<String>,
    /// 終了フラグ
    pub should_quit: bool,
}

impl Model {
    pub fn new(controller: FilterController, bindings: Bindings) -> Self {
        let mut model = Self {
            controller,
            bindings,
            state: ListState::default(),
            selected_id: None,
            should_quit: false,
        };
        clamp_selection(&mut model);
        model
    }

    /// キー入力をメッセージに変換
    ///
    /// 予約キー（q / j / k）が先に評価されるので、トリガーと衝突しない。
    pub fn key_to_msg(&self, key: KeyCode) -> Option<Msg> {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => Some(Msg::Quit),
            KeyCode::Up | KeyCode::Char('k') => Some(Msg::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(Msg::Down),
            KeyCode::Char(c) if self.bindings.resolve(c).is_some() => Some(Msg::Trigger(c)),
            _ => None,
        }
    }

    /// 選択中のルーム
    pub fn selected_room(&self) -> Option<&RoomEntry> {
        let index = self.state.selected()?;
        self.controller
            .visible_cards()
            .nth(index)
            .map(|card| card.room())
    }
}

// ============================================================================
// update（状態更新）
// ============================================================================

/// メッセージに応じて状態を更新
pub fn update(model: &mut Model, msg: Msg) {
    match msg {
        Msg::Quit => model.should_quit = true,
        Msg::Up => select_prev(model),
        Msg::Down => select_next(model),
        Msg::Trigger(key) => {
            if model.bindings.dispatch(key, &mut model.controller) {
                clamp_selection(model);
            }
        }
    }
}

fn select_prev(model: &mut Model) {
    if model.controller.visible_count() == 0 {
        return;
    }
    let current = model.state.selected().unwrap_or(0);
    model.state.select(Some(current.saturating_sub(1)));
    update_selected_id(model);
}

fn select_next(model: &mut Model) {
    let len = model.controller.visible_count();
    if len == 0 {
        return;
    }
    let current = model.state.selected().unwrap_or(0);
    model.state.select(Some((current + 1).min(len - 1)));
    update_selected_id(model);
}

fn update_selected_id(model: &mut Model) {
    model.selected_id = model.selected_room().map(|room| room.id.clone());
}

/// フィルタ変更後に選択状態を整合させる
///
/// 選択中のルームがまだ表示されていればその位置へ、消えていれば先頭へ。
fn clamp_selection(model: &mut Model) {
    let position = model.selected_id.as_ref().and_then(|id| {
        model
            .controller
            .visible_cards()
            .position(|card| &card.room().id == id)
    });

    match position {
        Some(index) => model.state.select(Some(index)),
        None if model.controller.visible_count() > 0 => {
            model.state.select(Some(0));
            update_selected_id(model);
        }
        None => {
            model.state.select(None);
            model.selected_id = None;
        }
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;
