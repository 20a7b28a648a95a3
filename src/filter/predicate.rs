//! 可視性判定
//!
//! 描画環境に依存しない純粋な判定ロジック。

use super::dimension::FilterDimension;
use super::state::FilterStates;

/// 3 つのタグを持つカード
pub trait Tagged {
    /// 指定次元のタグ値
    fn tag(&self, dimension: FilterDimension) -> bool;
}

/// カードが全次元の制約を満たすか
///
/// 各次元について「`Unset`、または要求値とタグ値が一致」の AND。
pub fn is_visible<T: Tagged + ?Sized>(states: &FilterStates, card: &T) -> bool {
    states.iter().all(|(dim, state)| state.admits(card.tag(dim)))
}
