//! 次元ごとのフィルタ状態
//!
//! `Unset → Require → Exclude → Unset` の固定サイクルで遷移する。

use super::dimension::FilterDimension;

// ============================================================================
// FilterState（三値状態）
// ============================================================================

/// 1 次元分のフィルタ状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterState {
    /// 制約なし
    #[default]
    Unset,
    /// タグを持つカードのみ
    Require,
    /// タグを持たないカードのみ
    Exclude,
}

impl FilterState {
    /// サイクル上の次の状態
    pub fn next(self) -> Self {
        match self {
            FilterState::Unset => FilterState::Require,
            FilterState::Require => FilterState::Exclude,
            FilterState::Exclude => FilterState::Unset,
        }
    }

    /// タグ値がこの状態の制約を満たすか
    pub fn admits(self, tag: bool) -> bool {
        match self {
            FilterState::Unset => true,
            FilterState::Require => tag,
            FilterState::Exclude => !tag,
        }
    }

    /// 表示マーカー
    pub fn marker(self) -> StyleMarker {
        match self {
            FilterState::Unset => StyleMarker::Neutral,
            FilterState::Require => StyleMarker::Active,
            FilterState::Exclude => StyleMarker::Inverted,
        }
    }

    /// `Unset` からこの状態に到達するのに必要なトグル回数
    pub fn toggles_from_unset(self) -> usize {
        match self {
            FilterState::Unset => 0,
            FilterState::Require => 1,
            FilterState::Exclude => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterState::Unset => "any",
            FilterState::Require => "only",
            FilterState::Exclude => "not",
        }
    }
}

// ============================================================================
// StyleMarker（トリガーの表示スタイル）
// ============================================================================

/// フィルタトリガーの表示スタイル（互いに排他）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleMarker {
    #[default]
    Neutral,
    Active,
    Inverted,
}

// ============================================================================
// FilterStates（次元 → 状態）
// ============================================================================

/// 次元ごとのフィルタ状態
///
/// 各次元に常にちょうど 1 つの状態があり、互いに独立。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterStates([FilterState; FilterDimension::COUNT]);

impl FilterStates {
    /// 全次元 `Unset` で作成
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, dimension: FilterDimension) -> FilterState {
        self.0[dimension.index()]
    }

    /// 指定次元のみサイクルを 1 つ進め、新しい状態を返す
    pub fn advance(&mut self, dimension: FilterDimension) -> FilterState {
        let slot = &mut self.0[dimension.index()];
        *slot = slot.next();
        *slot
    }

    pub fn iter(&self) -> impl Iterator<Item = (FilterDimension, FilterState)> + '_ {
        FilterDimension::all().iter().map(|&d| (d, self.get(d)))
    }

    /// どの次元にも制約がないか
    pub fn is_unconstrained(&self) -> bool {
        self.0.iter().all(|s| *s == FilterState::Unset)
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
