//! フィルタコントローラ
//!
//! 次元ごとのフィルタ状態と、起動時に読み込んだカード集合を保持する。
//! トグルのたびに全カードの可視性を再計算する（部分更新はしない）。

use crate::filter::{self, FilterDimension, FilterState, FilterStates, StyleMarker, Tagged};
use crate::room::RoomEntry;
use tracing::debug;

// ============================================================================
// Card（表示状態付きのルーム）
// ============================================================================

/// 可視性フラグ付きのカード
///
/// タグは不変。`shown` は `apply_filters` だけが書き込む派生値。
#[derive(Debug, Clone)]
pub struct Card {
    room: RoomEntry,
    shown: bool,
}

impl Card {
    fn new(room: RoomEntry) -> Self {
        Self { room, shown: true }
    }

    pub fn room(&self) -> &RoomEntry {
        &self.room
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }
}

impl Tagged for Card {
    fn tag(&self, dimension: FilterDimension) -> bool {
        self.room.tag(dimension)
    }
}

// ============================================================================
// FilterController
// ============================================================================

/// フィルタコントローラ
#[derive(Debug, Clone)]
pub struct FilterController {
    states: FilterStates,
    markers: [StyleMarker; FilterDimension::COUNT],
    cards: Vec<Card>,
}

impl FilterController {
    /// 全次元 `Unset` で作成
    pub fn new(rooms: impl IntoIterator<Item = RoomEntry>) -> Self {
        let mut controller = Self {
            states: FilterStates::new(),
            markers: [StyleMarker::Neutral; FilterDimension::COUNT],
            cards: rooms.into_iter().map(Card::new).collect(),
        };
        controller.apply_filters();
        controller
    }

    /// 指定次元の状態を `Unset → Require → Exclude → Unset` の順に進める
    ///
    /// 全カードの可視性と、その次元の表示マーカーを再計算する。
    pub fn toggle(&mut self, dimension: FilterDimension) {
        let state = self.states.advance(dimension);
        self.markers[dimension.index()] = state.marker();
        debug!(%dimension, state = state.label(), "Toggled filter");
        self.apply_filters();
    }

    /// 現在の状態でカードが表示されるか
    pub fn is_visible<T: Tagged + ?Sized>(&self, card: &T) -> bool {
        filter::is_visible(&self.states, card)
    }

    /// 全カードの可視性を再計算して書き込む
    pub fn apply_filters(&mut self) {
        let shown: Vec<bool> = self.cards().iter().map(|c| self.is_visible(c)).collect();
        for (card, shown) in self.cards.iter_mut().zip(shown) {
            card.shown = shown;
        }
        debug!(
            visible = self.visible_count(),
            total = self.cards.len(),
            "Applied filters"
        );
    }

    pub fn state(&self, dimension: FilterDimension) -> FilterState {
        self.states.get(dimension)
    }

    pub fn states(&self) -> &FilterStates {
        &self.states
    }

    /// トリガーの表示マーカー
    pub fn marker(&self, dimension: FilterDimension) -> StyleMarker {
        self.markers[dimension.index()]
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// 表示中のカード（元の順序）
    pub fn visible_cards(&self) -> impl Iterator<Item = &Card> {
        self.cards().iter().filter(|c| c.is_shown())
    }

    pub fn visible_count(&self) -> usize {
        self.visible_cards().count()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
