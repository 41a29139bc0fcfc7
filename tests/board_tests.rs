//! Board tests - bounds, collision soundness, locking and compaction.

use blockfall::core::{get_shape, Board};
use blockfall::types::{
    PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH, PIECE_BOX, ROTATION_COUNT, VISIBLE_ROWS,
};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.row_bound(), 0);

    // All cells empty, headroom included.
    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(board.is_valid(x, y), "cell ({}, {}) should be free", x, y);
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(PieceKind::T)));
}

#[test]
fn test_headroom_rows_accept_pieces() {
    let mut board = Board::new();
    let y = VISIBLE_ROWS as i8; // first headroom row
    assert!(board.can_place(PieceKind::O, Rotation::R0, 0, y));
    board.lock(PieceKind::O, Rotation::R0, 0, y);
    assert!(board.is_occupied(1, y + 1));
    assert_eq!(board.row_bound(), BOARD_HEIGHT as usize);
}

/// `can_place` must agree with the naive definition - every cell within
/// bounds and unoccupied - for all kinds, rotations and a sweep of
/// anchors beyond every edge.
#[test]
fn test_can_place_matches_naive_predicate() {
    let mut board = Board::new();
    // A scattering of locked cells to exercise the occupancy half.
    for &(x, y) in &[(0, 0), (5, 0), (9, 3), (4, 10), (2, 19), (7, 21)] {
        board.set(x, y, Some(PieceKind::L));
    }

    for kind in PieceKind::ALL {
        for r in 0..ROTATION_COUNT as u8 {
            let rotation = Rotation::from_index(r);
            let shape = get_shape(kind, rotation);
            for x in -5..(BOARD_WIDTH as i8 + 2) {
                for y in -5..(BOARD_HEIGHT as i8 + 2) {
                    let expected = shape.iter().all(|&(dx, dy)| {
                        let (px, py) = (x + dx, y + dy);
                        px >= 0
                            && px < BOARD_WIDTH as i8
                            && py >= 0
                            && py < BOARD_HEIGHT as i8
                            && board.get(px, py) == Some(None)
                    });
                    assert_eq!(
                        board.can_place(kind, rotation, x, y),
                        expected,
                        "{:?} r{} at ({}, {})",
                        kind,
                        r,
                        x,
                        y
                    );
                }
            }
        }
    }
}

#[test]
fn test_lock_marks_exactly_the_piece_cells() {
    let mut board = Board::new();
    board.lock(PieceKind::T, Rotation::R0, 3, 0);

    let shape = get_shape(PieceKind::T, Rotation::R0);
    let mut expected = 0;
    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            let in_shape = shape.iter().any(|&(dx, dy)| (3 + dx, dy) == (x, y));
            assert_eq!(board.is_occupied(x, y), in_shape, "cell ({}, {})", x, y);
            if in_shape {
                expected += 1;
            }
        }
    }
    assert_eq!(expected, 4);
}

#[test]
fn test_lock_raises_bound_monotonically() {
    let mut board = Board::new();
    board.lock(PieceKind::O, Rotation::R0, 0, 0);
    assert_eq!(board.row_bound(), PIECE_BOX);

    board.lock(PieceKind::O, Rotation::R0, 4, 6);
    assert_eq!(board.row_bound(), 6 + PIECE_BOX);

    // A lower lock never shrinks the bound.
    board.lock(PieceKind::O, Rotation::R0, 7, 0);
    assert_eq!(board.row_bound(), 6 + PIECE_BOX);
}

#[test]
fn test_is_row_full() {
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, 2, Some(PieceKind::S));
    }
    assert!(board.is_row_full(2));

    board.set(4, 2, None);
    assert!(!board.is_row_full(2));
    assert!(!board.is_row_full(BOARD_HEIGHT as usize)); // out of range
}

#[test]
fn test_compact_zero_full_rows_returns_zero_and_changes_nothing() {
    let mut codes = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
    // Checkerboard-ish partial fill.
    for y in 0..8usize {
        for x in 0..BOARD_WIDTH as usize {
            if (x + y) % 2 == 0 {
                codes[y][x] = PieceKind::J.code();
            }
        }
    }
    let mut board = Board::from_parts(&codes, 8);
    let before = board.clone();

    assert_eq!(board.compact_full_rows(), 0);
    assert_eq!(board.cells(), before.cells());
    assert_eq!(board.row_bound(), 8);
}

#[test]
fn test_compact_entirely_full_region_returns_scanned_count() {
    let mut codes = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
    for row in codes.iter_mut().take(10) {
        *row = [PieceKind::I.code(); BOARD_WIDTH as usize];
    }
    let mut board = Board::from_parts(&codes, 10);

    assert_eq!(board.compact_full_rows(), 10);
    assert_eq!(board.row_bound(), 0);
    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(board.is_valid(x, y));
        }
    }
}

#[test]
fn test_compact_preserves_surviving_row_order() {
    let mut codes = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
    codes[0] = [PieceKind::I.code(); BOARD_WIDTH as usize]; // full
    codes[1][3] = PieceKind::T.code();
    codes[2] = [PieceKind::Z.code(); BOARD_WIDTH as usize]; // full
    codes[3][7] = PieceKind::S.code();
    codes[4][9] = PieceKind::L.code();
    let mut board = Board::from_parts(&codes, 5);

    assert_eq!(board.compact_full_rows(), 2);
    // Rows 1, 3, 4 survive as rows 0, 1, 2 in the same order.
    assert_eq!(board.get(3, 0), Some(Some(PieceKind::T)));
    assert_eq!(board.get(7, 1), Some(Some(PieceKind::S)));
    assert_eq!(board.get(9, 2), Some(Some(PieceKind::L)));
    assert_eq!(board.row_bound(), 3);
}

#[test]
fn test_compact_result_matches_full_height_scan() {
    // Scanning only up to the bound must be indistinguishable from
    // scanning the whole grid, because rows above the bound are empty.
    let mut a_codes = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
    a_codes[0] = [PieceKind::O.code(); BOARD_WIDTH as usize];
    a_codes[1][2] = PieceKind::J.code();

    let mut bounded = Board::from_parts(&a_codes, 2);
    let mut full_scan = Board::from_parts(&a_codes, BOARD_HEIGHT as usize);

    assert_eq!(bounded.compact_full_rows(), full_scan.compact_full_rows());
    assert_eq!(bounded.cells(), full_scan.cells());
}
