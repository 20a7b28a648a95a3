//! ルーム一覧の view（描画）

use super::app::Model;
use crate::controller::FilterController;
use crate::filter::{FilterDimension, StyleMarker};
use crate::room::RoomEntry;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

/// 表示マーカー → スタイル
pub(super) fn marker_style(marker: StyleMarker) -> Style {
    match marker {
        StyleMarker::Neutral => Style::default().fg(Color::DarkGray),
        StyleMarker::Active => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        StyleMarker::Inverted => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD | Modifier::CROSSED_OUT),
    }
}

/// リスト 1 行分のテキスト
pub(super) fn row_text(room: &RoomEntry) -> String {
    let mut text = format!("  [{}] {}", room.name_initial(), room.name);
    if room.is_direct {
        text.push_str("  @dm");
    }
    if room.is_encrypted {
        text.push_str("  #e2e");
    }
    if room.has_unread() {
        text.push_str(&format!("  ({})", room.unread_count));
    }
    text
}

/// 表示中のカードが無いときのメッセージ
pub(super) fn empty_message(controller: &FilterController) -> &'static str {
    if controller.is_empty() {
        "  No rooms in the room file"
    } else {
        "  No rooms match the current filters"
    }
}

/// 画面を描画
pub fn view(f: &mut Frame, model: &Model) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // フィルタバー
            Constraint::Min(1),    // ルーム一覧
            Constraint::Length(1), // ヘルプ
        ])
        .split(f.area());

    view_filter_bar(f, model, chunks[0]);
    view_room_list(f, model, chunks[1]);

    let help = Paragraph::new(" up/down: move | trigger key: cycle filter | q: quit")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn view_filter_bar(f: &mut Frame, model: &Model, area: Rect) {
    let spans: Vec<Span> = FilterDimension::all()
        .iter()
        .map(|&dimension| {
            let key = model
                .bindings
                .key_for(dimension)
                .map(|k| k.to_string())
                .unwrap_or_else(|| "-".to_string());
            let label = format!(
                " [{}] {}: {} ",
                key,
                dimension.title(),
                model.controller.state(dimension).label()
            );
            Span::styled(label, marker_style(model.controller.marker(dimension)))
        })
        .collect();

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn view_room_list(f: &mut Frame, model: &Model, area: Rect) {
    let title = format!(
        " Rooms ({}/{}) ",
        model.controller.visible_count(),
        model.controller.len()
    );
    let block = Block::default().title(title).borders(Borders::ALL);

    if model.controller.visible_count() == 0 {
        let empty = Paragraph::new(empty_message(&model.controller))
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = model
        .controller
        .visible_cards()
        .map(|card| ListItem::new(row_text(card.room())))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Green),
        )
        .highlight_symbol("> ");

    let mut state = model.state.clone();
    f.render_stateful_widget(list, area, &mut state);
}
