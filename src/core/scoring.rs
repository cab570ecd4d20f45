//! Scoring module - fixed reward table for line clears
//!
//! One evaluation happens per lock: 1 line = 100, 2 = 300, 3 = 500,
//! 4 = 800. No level multiplier, no combo tracking.

use crate::types::LINE_SCORES;

/// Score and line-count delta for one line-clear evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearReward {
    pub score: u32,
    pub lines: u32,
}

/// Look up the reward for `lines_cleared` rows in a single evaluation.
/// Values above 4 cannot occur (a piece has 4 cells); treated as a bug.
pub fn clear_reward(lines_cleared: usize) -> ClearReward {
    debug_assert!(lines_cleared <= 4, "cleared {lines_cleared} rows in one tick");
    if lines_cleared == 0 || lines_cleared > 4 {
        return ClearReward::default();
    }
    ClearReward {
        score: LINE_SCORES[lines_cleared],
        lines: lines_cleared as u32,
    }
}
