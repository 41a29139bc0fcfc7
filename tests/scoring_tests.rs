//! Scoring policy tests - base tables, level multiplier, back-to-back.

use blockfall::core::{drop_score, level_for_lines, score_delta, ScoreDelta};

#[test]
fn test_base_table() {
    assert_eq!(score_delta(1, false, 1, false).delta, 100);
    assert_eq!(score_delta(2, false, 1, false).delta, 300);
    assert_eq!(score_delta(3, false, 1, false).delta, 500);
    assert_eq!(score_delta(4, false, 1, false).delta, 800);
}

#[test]
fn test_spin_table() {
    assert_eq!(score_delta(0, true, 1, false).delta, 400);
    assert_eq!(score_delta(1, true, 1, false).delta, 800);
    assert_eq!(score_delta(2, true, 1, false).delta, 1200);
    assert_eq!(score_delta(3, true, 1, false).delta, 1600);
}

#[test]
fn test_reference_cases() {
    assert_eq!(
        score_delta(1, false, 1, false),
        ScoreDelta {
            delta: 100,
            back_to_back: false
        }
    );
    assert_eq!(
        score_delta(4, false, 1, false),
        ScoreDelta {
            delta: 800,
            back_to_back: true
        }
    );
    // Second consecutive Tetris: 800 * 1.5.
    assert_eq!(
        score_delta(4, false, 1, true),
        ScoreDelta {
            delta: 1200,
            back_to_back: true
        }
    );
    // Easy clear after a difficult one resets the chain, no bonus.
    assert_eq!(
        score_delta(2, false, 1, true),
        ScoreDelta {
            delta: 300,
            back_to_back: false
        }
    );
}

#[test]
fn test_bonus_applies_before_level_multiplier() {
    // 800 -> 1200 from the chain, then x3 for the level.
    assert_eq!(score_delta(4, false, 3, true).delta, 3600);
}

#[test]
fn test_chain_across_clear_kinds() {
    // Tetris, spin double, Tetris: every link keeps and earns the bonus.
    let a = score_delta(4, false, 1, false);
    let b = score_delta(2, true, 1, a.back_to_back);
    let c = score_delta(4, false, 1, b.back_to_back);
    assert_eq!(a.delta, 800);
    assert_eq!(b.delta, 1800); // 1200 * 3/2
    assert_eq!(c.delta, 1200); // 800 * 3/2
    assert!(c.back_to_back);
}

#[test]
fn test_zero_line_spin_scores_but_breaks_chain() {
    let result = score_delta(0, true, 2, true);
    assert_eq!(result.delta, 800); // 400 x level 2, no bonus
    assert!(!result.back_to_back);
}

#[test]
fn test_drop_scores() {
    assert_eq!(drop_score(1, false), 1);
    assert_eq!(drop_score(7, false), 7);
    assert_eq!(drop_score(7, true), 14);
}

#[test]
fn test_level_for_lines() {
    assert_eq!(level_for_lines(0), 1);
    assert_eq!(level_for_lines(9), 1);
    assert_eq!(level_for_lines(10), 2);
    assert_eq!(level_for_lines(19), 2);
    assert_eq!(level_for_lines(240), 25);
}
