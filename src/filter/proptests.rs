//! filter モジュールのプロパティテスト

use super::*;
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
struct Tags([bool; FilterDimension::COUNT]);

impl Tagged for Tags {
    fn tag(&self, dimension: FilterDimension) -> bool {
        self.0[dimension.index()]
    }
}

fn dimension_strategy() -> impl Strategy<Value = FilterDimension> {
    prop_oneof![
        Just(FilterDimension::Direct),
        Just(FilterDimension::Encrypted),
        Just(FilterDimension::Unread),
    ]
}

fn tags_strategy() -> impl Strategy<Value = Tags> {
    any::<[bool; 3]>().prop_map(Tags)
}

/// 各次元のトグル回数から状態を構築
fn states_strategy() -> impl Strategy<Value = FilterStates> {
    prop::array::uniform3(0usize..3).prop_map(|counts| {
        let mut states = FilterStates::new();
        for (dim, count) in FilterDimension::all().iter().zip(counts) {
            for _ in 0..count {
                states.advance(*dim);
            }
        }
        states
    })
}

proptest! {
    /// 3 回進めると元の状態に戻る
    #[test]
    fn prop_cycle_closes_after_three_steps(
        states in states_strategy(),
        dim in dimension_strategy()
    ) {
        let mut advanced = states;
        for _ in 0..3 {
            advanced.advance(dim);
        }
        prop_assert_eq!(advanced, states);
    }

    /// 可視性は次元ごとの制約の AND と一致する
    #[test]
    fn prop_visibility_is_conjunction_of_constraints(
        states in states_strategy(),
        tags in tags_strategy()
    ) {
        let expected = FilterDimension::all().iter().all(|&d| {
            let tag = tags.tag(d);
            match states.get(d) {
                FilterState::Unset => true,
                FilterState::Require => tag,
                FilterState::Exclude => !tag,
            }
        });
        prop_assert_eq!(is_visible(&states, &tags), expected);
    }

    /// ある次元を進めても他の次元は変わらない
    #[test]
    fn prop_advance_keeps_other_dimensions(
        states in states_strategy(),
        dim in dimension_strategy()
    ) {
        let mut advanced = states;
        advanced.advance(dim);
        for &other in FilterDimension::all().iter().filter(|&&d| d != dim) {
            prop_assert_eq!(advanced.get(other), states.get(other));
        }
    }
}
