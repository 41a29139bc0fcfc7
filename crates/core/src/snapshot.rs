//! Session snapshot - the persisted-state layout for an external save
//! system.
//!
//! The core does not read or write files; it only defines this value and
//! the [`GameState::snapshot`](crate::GameState::snapshot) /
//! [`GameState::from_snapshot`](crate::GameState::from_snapshot) pair.
//! Everything needed to resume a session bit-for-bit is here, including
//! the RNG state and the back-to-back flag.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use blockfall_types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH, PREVIEW_LEN};

use crate::game_state::Tetromino;

/// Active piece fields as plain data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

/// Everything an external save system needs to resume a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Grid cell codes, row-major bottom to top (0 = empty, 1-7 = kind).
    pub cells: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    /// Cached ghost anchor for the active piece.
    pub ghost: Option<(i8, i8)>,
    /// Preview queue in deal order.
    pub preview: [PieceKind; PREVIEW_LEN],
    /// Kinds remaining in the current bag, in deal order.
    pub bag: ArrayVec<PieceKind, 7>,
    pub hold: Option<PieceKind>,
    pub held_this_turn: bool,
    /// Exclusive bound on rows that may contain locked cells.
    pub row_bound: usize,
    /// Auto-drop accumulator, seconds.
    pub drop_timer: f32,
    pub rng_state: u32,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub back_to_back: bool,
    pub game_over: bool,
}
