//! Shared types and gameplay constants for the blockfall simulation core.
//!
//! Pure data: no game logic lives here. Everything derives `serde` so the
//! external save layer can persist snapshots without mirror types.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Visible height**: 20 rows (indexed 0-19, bottom to top)
//! - **Headroom**: 4 extra rows above the visible top, usable by the
//!   active piece and ghost for spawning and rotation
//!
//! Row 0 is the **bottom** row; y grows upward.

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns).
pub const BOARD_WIDTH: u8 = 10;

/// Visible board height in cells (20 rows).
pub const VISIBLE_ROWS: u8 = 20;

/// Extra rows above the visible top for spawning and rotation.
pub const HEADROOM_ROWS: u8 = 4;

/// Total board height including headroom.
pub const BOARD_HEIGHT: u8 = VISIBLE_ROWS + HEADROOM_ROWS;

/// Bounding-box span of any piece; no piece extends further than this
/// above its anchor row.
pub const PIECE_BOX: usize = 4;

/// Number of distinct rotation states per piece.
pub const ROTATION_COUNT: usize = 4;

/// Number of distinct piece kinds.
pub const PIECE_COUNT: usize = 7;

/// Length of the next-piece preview queue.
pub const PREVIEW_LEN: usize = 3;

/// Lines required to advance one level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear base scores, indexed by lines cleared (0-4).
pub const LINE_CLEAR_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Spin clear base scores, indexed by lines cleared (0-3).
/// A 4-line spin is geometrically impossible.
pub const SPIN_CLEAR_SCORES: [u32; 4] = [400, 800, 1200, 1600];

/// Back-to-back bonus ratio (numerator / denominator applied to the base).
pub const B2B_NUMERATOR: u32 = 3;
pub const B2B_DENOMINATOR: u32 = 2;

/// Highest level the gravity curve distinguishes.
pub const GRAVITY_LEVEL_CAP: u32 = 25;

/// Automatic drop interval per level, in seconds. Index 0 is level 1.
/// Classic guideline curve: 0.8s at level 1 down to 0.0333s at 20+.
pub const DROP_INTERVALS: [f32; GRAVITY_LEVEL_CAP as usize] = [
    0.8, 0.7167, 0.6333, 0.55, 0.4667, 0.3833, 0.3, 0.2167, 0.1333, 0.1, // 1-10
    0.0833, 0.0833, 0.0833, 0.0667, 0.0667, 0.0667, 0.05, 0.05, 0.05, // 11-19
    0.0333, 0.0333, 0.0333, 0.0333, 0.0333, 0.0333, // 20-25
];

/// The seven tetromino kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in canonical order. One bag holds exactly this set.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Non-zero cell code for grid snapshots (0 encodes an empty cell).
    pub fn code(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`code`](Self::code); `None` for 0 or out-of-range codes.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::J),
            3 => Some(PieceKind::L),
            4 => Some(PieceKind::O),
            5 => Some(PieceKind::S),
            6 => Some(PieceKind::T),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Parse piece kind from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// Rotation states, clockwise from spawn orientation.
///
/// The four states form a cyclic group: stepping +1 rotates clockwise,
/// -1 counter-clockwise, with wraparound at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    /// Index in [0, 4).
    pub fn index(self) -> u8 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 1,
            Rotation::R180 => 2,
            Rotation::R270 => 3,
        }
    }

    /// Rotation for an index, reduced mod 4.
    pub fn from_index(index: u8) -> Self {
        match index % ROTATION_COUNT as u8 {
            0 => Rotation::R0,
            1 => Rotation::R90,
            2 => Rotation::R180,
            _ => Rotation::R270,
        }
    }

    /// Step by `direction` rotation states. Negative steps wrap to the
    /// high end (stepping -1 from `R0` yields `R270`).
    pub fn step(self, direction: i8) -> Self {
        let idx = (self.index() as i8 + direction).rem_euclid(ROTATION_COUNT as i8);
        Self::from_index(idx as u8)
    }

    /// Rotate clockwise.
    pub fn rotate_cw(self) -> Self {
        self.step(1)
    }

    /// Rotate counter-clockwise.
    pub fn rotate_ccw(self) -> Self {
        self.step(-1)
    }
}

/// Cell on the board (`None` = empty, `Some` = locked with a piece kind).
pub type Cell = Option<PieceKind>;

/// Events emitted by the controller, drained by the caller once per step.
///
/// Dispatch is pull-based: the core appends, the caller takes the queue
/// after issuing commands. The core is never re-entered mid-mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Spawn or hold-swap collision; the simulation accepts no further
    /// mutating commands.
    GameOver,
    /// The active piece was committed into the grid.
    PieceLocked,
    /// Rows were removed (or a 0-line spin lock was scored).
    LinesCleared { count: u32, is_spin: bool },
    /// The hold slot changed.
    HoldChanged(Option<PieceKind>),
    /// The preview queue changed; index 0 is the next piece dealt.
    PreviewChanged([PieceKind; PREVIEW_LEN]),
    /// One successful soft-drop step.
    SoftDropStep,
    /// A hard drop fell `distance` cells before locking.
    HardDrop { distance: u32 },
}
