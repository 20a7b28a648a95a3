//! ルームカードのフィルタ
//!
//! direct / encrypted / unread の 3 次元それぞれに三値のフィルタを持ち、
//! 全次元の AND でカードの可視性を決める。
//!
//! - `dimension`: フィルタ次元
//! - `state`: 次元ごとの三値状態と表示マーカー
//! - `predicate`: 可視性判定（純粋関数）

mod dimension;
mod predicate;
mod state;

pub use dimension::FilterDimension;
pub use predicate::{is_visible, Tagged};
pub use state::{FilterState, FilterStates, StyleMarker};

#[cfg(test)]
mod proptests;
