//! Shape table - tetromino cell layouts and colors.
//!
//! Offsets are relative to the piece anchor with the origin at the
//! bottom-left of each piece's bounding box, y growing upward. Rotation
//! states are indexed clockwise (0, 90, 180, 270 degrees).
//!
//! Rotation here is a straight table lookup: there is no kick table, and
//! a rotation whose target cells collide simply fails at the controller.

use blockfall_types::{PieceKind, Rotation};

/// Offset of a single cell relative to the piece anchor.
pub type CellOffset = (i8, i8);

/// Shape of a piece - 4 cell offsets from the piece anchor.
pub type PieceShape = [CellOffset; 4];

/// RGB color identity of a piece kind.
pub type PieceColor = (u8, u8, u8);

/// Anchor position for newly spawned pieces (x, y).
///
/// Row 17 of the 20 visible rows; tall spawn shapes reach into the
/// headroom above the visible top.
pub const SPAWN_POSITION: (i8, i8) = (3, 17);

/// Get the shape (cell offsets) for a piece kind and rotation.
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    match kind {
        PieceKind::I => get_i_shape(rotation),
        PieceKind::J => get_j_shape(rotation),
        PieceKind::L => get_l_shape(rotation),
        PieceKind::O => get_o_shape(rotation),
        PieceKind::S => get_s_shape(rotation),
        PieceKind::T => get_t_shape(rotation),
        PieceKind::Z => get_z_shape(rotation),
    }
}

/// Get the color identity for a piece kind.
pub fn get_color(kind: PieceKind) -> PieceColor {
    match kind {
        PieceKind::I => (0, 255, 255),   // cyan
        PieceKind::J => (0, 0, 255),     // blue
        PieceKind::L => (255, 128, 0),   // orange
        PieceKind::O => (255, 255, 0),   // yellow
        PieceKind::S => (0, 255, 0),     // green
        PieceKind::T => (153, 0, 255),   // purple
        PieceKind::Z => (255, 0, 0),     // red
    }
}

/// Shape of a new piece at spawn orientation.
pub fn get_spawn_shape(kind: PieceKind) -> PieceShape {
    get_shape(kind, Rotation::R0)
}

/// I piece shapes
fn get_i_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        // horizontal, row 2 of the box
        Rotation::R0 => [(0, 2), (1, 2), (2, 2), (3, 2)],
        // vertical, column 2
        Rotation::R90 => [(2, 0), (2, 1), (2, 2), (2, 3)],
        // horizontal, row 1
        Rotation::R180 => [(0, 1), (1, 1), (2, 1), (3, 1)],
        // vertical, column 1
        Rotation::R270 => [(1, 0), (1, 1), (1, 2), (1, 3)],
    }
}

/// J piece shapes
fn get_j_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::R0 => [(0, 1), (1, 1), (2, 1), (0, 2)],
        Rotation::R90 => [(1, 0), (1, 1), (1, 2), (2, 2)],
        Rotation::R180 => [(2, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::R270 => [(0, 0), (1, 0), (1, 1), (1, 2)],
    }
}

/// L piece shapes
fn get_l_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::R0 => [(0, 1), (1, 1), (2, 1), (2, 2)],
        Rotation::R90 => [(1, 0), (2, 0), (1, 1), (1, 2)],
        Rotation::R180 => [(0, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::R270 => [(1, 0), (1, 1), (0, 2), (1, 2)],
    }
}

/// O piece shapes (visually invariant under rotation)
fn get_o_shape(_rotation: Rotation) -> PieceShape {
    [(1, 1), (2, 1), (1, 2), (2, 2)]
}

/// S piece shapes
fn get_s_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::R0 => [(0, 1), (1, 1), (1, 2), (2, 2)],
        Rotation::R90 => [(2, 0), (1, 1), (2, 1), (1, 2)],
        Rotation::R180 => [(0, 0), (1, 0), (1, 1), (2, 1)],
        Rotation::R270 => [(1, 0), (0, 1), (1, 1), (0, 2)],
    }
}

/// T piece shapes
fn get_t_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::R0 => [(0, 1), (1, 1), (2, 1), (1, 2)],
        Rotation::R90 => [(1, 0), (1, 1), (2, 1), (1, 2)],
        Rotation::R180 => [(1, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::R270 => [(1, 0), (0, 1), (1, 1), (1, 2)],
    }
}

/// Z piece shapes
fn get_z_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::R0 => [(1, 1), (2, 1), (0, 2), (1, 2)],
        Rotation::R90 => [(1, 0), (1, 1), (2, 1), (2, 2)],
        Rotation::R180 => [(1, 0), (2, 0), (0, 1), (1, 1)],
        Rotation::R270 => [(0, 0), (0, 1), (1, 1), (1, 2)],
    }
}
