//! Board - the locked-cell grid, collision queries and row compaction.
//!
//! The board is 10 columns by 24 rows (20 visible + 4 headroom), stored
//! as a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) with x in 0..9 left to right and y in 0..23
//! **bottom to top**; row 0 is the floor, rows 20..23 are headroom the
//! active piece may pass through but the player never sees.
//!
//! The board also caches an exclusive upper bound on rows that can hold
//! locked cells. Locking raises it, compaction rewrites it; full-row
//! scans stop there instead of walking the whole grid. Rows at or above
//! the bound are empty by invariant, so results are identical to a full
//! scan.

use blockfall_types::{Cell, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH, PIECE_BOX};

use crate::pieces::get_shape;

/// Total number of cells on the board.
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The locked-cell grid, row-major from the bottom row up.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x).
    cells: [Cell; BOARD_SIZE],
    /// Exclusive bound on rows that may contain locked cells.
    row_bound: usize,
}

impl Board {
    /// Create a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
            row_bound: 0,
        }
    }

    /// Rebuild a board from a persisted cell-code grid and row bound.
    pub fn from_parts(
        codes: &[[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
        row_bound: usize,
    ) -> Self {
        let mut cells = [None; BOARD_SIZE];
        for (y, row) in codes.iter().enumerate() {
            for (x, &code) in row.iter().enumerate() {
                cells[y * BOARD_WIDTH as usize + x] = PieceKind::from_code(code);
            }
        }
        Self {
            cells,
            row_bound: row_bound.min(BOARD_HEIGHT as usize),
        }
    }

    /// Calculate flat index from (x, y) coordinates.
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get width of the board.
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get total height of the board, headroom included.
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y).
    /// Returns None if out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y).
    /// Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is inside the grid (headroom included).
    pub fn is_within_bounds(&self, x: i8, y: i8) -> bool {
        x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8
    }

    /// Check if position is within bounds and empty.
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if an in-bounds position holds a locked cell. Callers
    /// bounds-check first; out-of-range positions are a contract bug.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        debug_assert!(self.is_within_bounds(x, y));
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// True iff all 4 cells of the piece at `anchor` are within bounds
    /// and unoccupied.
    pub fn can_place(&self, kind: PieceKind, rotation: Rotation, x: i8, y: i8) -> bool {
        get_shape(kind, rotation)
            .iter()
            .all(|&(dx, dy)| self.is_valid(x + dx, y + dy))
    }

    /// Commit a piece's 4 cells into the grid and raise the row bound.
    /// The caller has already verified the placement with `can_place`.
    pub fn lock(&mut self, kind: PieceKind, rotation: Rotation, x: i8, y: i8) {
        debug_assert!(self.can_place(kind, rotation, x, y));
        for (dx, dy) in get_shape(kind, rotation) {
            self.set(x + dx, y + dy, Some(kind));
        }
        // The anchor row may be negative when a shape's occupied cells
        // sit high in its bounding box.
        let top = (y as i32 + PIECE_BOX as i32).clamp(0, BOARD_HEIGHT as i32) as usize;
        self.row_bound = self.row_bound.max(top);
    }

    /// Check if a row is completely filled.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove all full rows below the row bound, sliding surviving rows
    /// down to close the gaps. Returns the number of rows removed.
    ///
    /// Single stable pass bottom to top with a write pointer; surviving
    /// rows keep their relative order. The row bound shrinks to the
    /// surviving-row count.
    pub fn compact_full_rows(&mut self) -> usize {
        let width = BOARD_WIDTH as usize;
        let bound = self.row_bound;
        let mut write_row = 0usize;
        let mut cleared = 0usize;

        for read_row in 0..bound {
            if self.is_row_full(read_row) {
                cleared += 1;
            } else {
                if write_row != read_row {
                    let src = read_row * width;
                    let dst = write_row * width;
                    self.cells.copy_within(src..src + width, dst);
                }
                write_row += 1;
            }
        }

        // Rows vacated at the top of the scanned region become empty.
        for row in write_row..bound {
            let start = row * width;
            for cell in &mut self.cells[start..start + width] {
                *cell = None;
            }
        }

        self.row_bound = write_row;
        cleared
    }

    /// Exclusive bound on rows that may contain locked cells.
    pub fn row_bound(&self) -> usize {
        self.row_bound
    }

    /// Get a reference to the internal cells array.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Export the grid as cell codes (0 = empty, 1-7 = kind) for the
    /// snapshot layer.
    pub fn write_cell_codes(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (y, row) in out.iter_mut().enumerate() {
            for (x, slot) in row.iter_mut().enumerate() {
                *slot = self.cells[y * BOARD_WIDTH as usize + x].map_or(0, PieceKind::code);
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
