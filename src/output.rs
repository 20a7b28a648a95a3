use crate::filter::{FilterState, FilterStates};
use owo_colors::OwoColorize;

/// `list` のテーブル出力後に表示する 1 行サマリ
pub struct FilterSummary {
    pub prefix: String,
    pub message: String,
}

impl FilterSummary {
    pub fn format(shown: usize, total: usize, states: &FilterStates) -> Self {
        let prefix = match (shown, total) {
            (_, 0) | (0, _) => "•".yellow().to_string(),
            _ => "✓".green().to_string(),
        };
        Self {
            prefix,
            message: format!(
                "{} of {} rooms shown ({})",
                shown,
                total,
                describe_states(states)
            ),
        }
    }
}

/// 有効なフィルタを `direct: only, unread: not` の形式で列挙
fn describe_states(states: &FilterStates) -> String {
    if states.is_unconstrained() {
        return "no filters".to_string();
    }
    states
        .iter()
        .filter(|(_, state)| *state != FilterState::Unset)
        .map(|(dimension, state)| format!("{}: {}", dimension, state.label()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterDimension;

    #[test]
    fn summary_without_filters() {
        let summary = FilterSummary::format(3, 3, &FilterStates::new());
        assert_eq!(summary.message, "3 of 3 rooms shown (no filters)");
        assert!(summary.prefix.contains('✓'));
    }

    #[test]
    fn summary_lists_active_filters_in_dimension_order() {
        let mut states = FilterStates::new();
        states.advance(FilterDimension::Unread);
        states.advance(FilterDimension::Unread);
        states.advance(FilterDimension::Direct);

        let summary = FilterSummary::format(1, 4, &states);
        assert_eq!(summary.message, "1 of 4 rooms shown (direct: only, unread: not)");
    }

    #[test]
    fn summary_with_nothing_shown_uses_neutral_prefix() {
        let mut states = FilterStates::new();
        states.advance(FilterDimension::Encrypted);

        let summary = FilterSummary::format(0, 2, &states);
        assert!(summary.prefix.contains('•'));
        assert_eq!(summary.message, "0 of 2 rooms shown (encrypted: only)");
    }
}
