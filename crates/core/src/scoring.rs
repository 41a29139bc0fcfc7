//! Scoring policy - pure conversion of lock outcomes into score deltas.
//!
//! A clear is "difficult" if it is a spin clear with lines or a 4-line
//! clear. Difficult clears extend the back-to-back chain; when the
//! previous clear was also difficult the base value gains 50% before the
//! level multiplier. Any other clear breaks the chain. The controller
//! only consults this policy for locks that cleared lines or were spins,
//! so a plain lock leaves the chain untouched.

use blockfall_types::{
    B2B_DENOMINATOR, B2B_NUMERATOR, LINES_PER_LEVEL, LINE_CLEAR_SCORES, SPIN_CLEAR_SCORES,
};

/// Result of scoring one lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreDelta {
    /// Points awarded for this lock.
    pub delta: u32,
    /// Back-to-back state after this lock.
    pub back_to_back: bool,
}

/// Whether a clear extends the back-to-back chain.
pub fn is_difficult_clear(lines: u32, is_spin: bool) -> bool {
    (is_spin && lines > 0) || lines == 4
}

/// Score a lock that cleared `lines` rows (possibly 0 for a spin lock).
pub fn score_delta(lines: u32, is_spin: bool, level: u32, back_to_back: bool) -> ScoreDelta {
    let base = if is_spin {
        SPIN_CLEAR_SCORES.get(lines as usize).copied().unwrap_or(0)
    } else {
        LINE_CLEAR_SCORES.get(lines as usize).copied().unwrap_or(0)
    };

    let difficult = is_difficult_clear(lines, is_spin);
    let base = if difficult && back_to_back {
        base.saturating_mul(B2B_NUMERATOR) / B2B_DENOMINATOR
    } else {
        base
    };

    ScoreDelta {
        delta: base.saturating_mul(level),
        back_to_back: difficult,
    }
}

/// Points for manual drops: +1 per soft-drop cell, +2 per hard-drop cell.
pub fn drop_score(cells: u32, is_hard_drop: bool) -> u32 {
    if is_hard_drop {
        cells * 2
    } else {
        cells
    }
}

/// Level reached after clearing `total_lines` lines in a session.
/// Levels start at 1 and advance every 10 lines.
pub fn level_for_lines(total_lines: u32) -> u32 {
    1 + total_lines / LINES_PER_LEVEL
}
