//! Positional connector-badge rules.
//!
//! A connector sits between consecutive cards `i` and `i+1`, so valid
//! connector indices run from 0 to `length - 2`. The trial loop spans the
//! cards after the 2nd through the 5th, giving loop badges at connector
//! indices 1..=3; pruning becomes possible between training and recording,
//! connector index 3. Both rules are pure functions of `(index, length)` —
//! no per-step flags are stored anywhere.

/// Connector indices carrying a loop badge, inclusive.
const LOOP_FIRST: usize = 1;
const LOOP_LAST: usize = 3;

/// Connector index where early stopping becomes possible.
const PRUNING_INDEX: usize = 3;

/// Label on the early-stopping badge.
pub const PRUNING_LABEL: &str = "⚡ Pruning 가능";

/// Which loop badge a connector position carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopBadge {
    /// First position in the loop range.
    Start,
    /// Strictly between first and last.
    Repeat,
    /// Last position in the loop range.
    RepeatAll,
}

impl LoopBadge {
    pub fn label(self) -> &'static str {
        match self {
            Self::Start => "Trial 루프 시작",
            Self::Repeat => "반복",
            Self::RepeatAll => "n_trials만큼 반복",
        }
    }
}

/// Loop badge for the connector after card `index`, if any. `None` past
/// the last connector or outside the loop range.
pub fn loop_badge(index: usize, length: usize) -> Option<LoopBadge> {
    if index + 1 >= length {
        return None;
    }
    match index {
        LOOP_FIRST => Some(LoopBadge::Start),
        LOOP_LAST => Some(LoopBadge::RepeatAll),
        i if i > LOOP_FIRST && i < LOOP_LAST => Some(LoopBadge::Repeat),
        _ => None,
    }
}

/// Whether the connector after card `index` carries the early-stopping
/// badge. Shown alongside the loop badge, never instead of it.
pub fn pruning_badge(index: usize, length: usize) -> bool {
    index + 1 < length && index == PRUNING_INDEX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loop_badge_exactly_at_indices_1_through_3() {
        let len = 6;
        assert_eq!(loop_badge(0, len), None);
        assert_eq!(loop_badge(1, len), Some(LoopBadge::Start));
        assert_eq!(loop_badge(2, len), Some(LoopBadge::Repeat));
        assert_eq!(loop_badge(3, len), Some(LoopBadge::RepeatAll));
        assert_eq!(loop_badge(4, len), None);
    }

    #[test]
    fn pruning_badge_only_between_fourth_and_fifth() {
        let len = 6;
        for i in 0..len {
            assert_eq!(pruning_badge(i, len), i == 3, "index {i}");
        }
    }

    #[test]
    fn nothing_after_the_final_card() {
        // Index length-1 has no connector at all, whatever the range says.
        assert_eq!(loop_badge(3, 4), None);
        assert!(!pruning_badge(3, 4));
        assert_eq!(loop_badge(5, 6), None);
        assert!(!pruning_badge(5, 6));
    }

    #[test]
    fn short_sequences_truncate_the_range() {
        // Two cards: one connector at index 0, outside the loop range.
        assert_eq!(loop_badge(0, 2), None);
        // Three cards: connector 1 is the loop start, nothing more fits.
        assert_eq!(loop_badge(1, 3), Some(LoopBadge::Start));
        assert_eq!(loop_badge(2, 3), None);
    }

    #[test]
    fn labels_are_position_fixed() {
        assert_eq!(LoopBadge::Start.label(), "Trial 루프 시작");
        assert_eq!(LoopBadge::Repeat.label(), "반복");
        assert_eq!(LoopBadge::RepeatAll.label(), "n_trials만큼 반복");
    }
}
