//! Game state - the controller state machine over board, bag and piece.
//!
//! Owns the active piece and applies every command against the board
//! before committing. Single-writer: nothing here is shared or locked;
//! the caller advances time with [`GameState::tick`] and drains events
//! with [`GameState::take_events`] once per step.

use blockfall_types::{GameEvent, PieceKind, Rotation};

use crate::board::Board;
use crate::gravity;
use crate::pieces::{get_color, get_shape, PieceColor, PieceShape, SPAWN_POSITION};
use crate::rng::BagRandomizer;
use crate::scoring;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};

/// Active falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at the spawn anchor.
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::R0,
            x: SPAWN_POSITION.0,
            y: SPAWN_POSITION.1,
        }
    }

    /// Cell offsets for the current rotation.
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Color identity of this piece.
    pub fn color(&self) -> PieceColor {
        get_color(self.kind)
    }
}

/// Complete simulation state.
///
/// Constructed once per session by the application root and handed to
/// collaborators by reference; there are no globals.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Tetromino>,
    /// Cached ghost anchor, re-derived after every committed change.
    ghost: Option<(i8, i8)>,
    bag: BagRandomizer,
    hold: Option<PieceKind>,
    held_this_turn: bool,
    score: u32,
    level: u32,
    lines: u32,
    back_to_back: bool,
    /// Auto-drop accumulator, seconds.
    drop_timer: f32,
    game_over: bool,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with the given RNG seed and spawn the first
    /// piece. Events from the initial spawn are already queued.
    pub fn new(seed: u32) -> Self {
        let mut state = Self {
            board: Board::new(),
            active: None,
            ghost: None,
            bag: BagRandomizer::new(seed),
            hold: None,
            held_this_turn: false,
            score: 0,
            level: 1,
            lines: 0,
            back_to_back: false,
            drop_timer: 0.0,
            game_over: false,
            events: Vec::new(),
        };
        state.spawn_from_queue();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    /// Anchor the active piece would rest at if dropped straight down.
    pub fn ghost(&self) -> Option<(i8, i8)> {
        self.ghost
    }

    /// Upcoming pieces in deal order (index 0 is next).
    pub fn preview(&self) -> &[PieceKind] {
        self.bag.preview()
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold
    }

    pub fn held_this_turn(&self) -> bool {
        self.held_this_turn
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn back_to_back(&self) -> bool {
        self.back_to_back
    }

    /// Auto-drop accumulator value, exposed for session save/restore.
    pub fn drop_timer(&self) -> f32 {
        self.drop_timer
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Current automatic drop interval in seconds.
    pub fn drop_interval(&self) -> f32 {
        gravity::drop_interval(self.level)
    }

    /// Hand the queued events to the caller, leaving the queue empty.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Move the active piece one column left.
    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    /// Move the active piece one column right.
    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// Move the active piece one row down. On success the auto-drop
    /// timer restarts and one point is awarded; failure means the piece
    /// is resting and the next auto-drop will lock it.
    pub fn soft_drop(&mut self) -> bool {
        let moved = self.try_move(0, -1);
        if moved {
            self.drop_timer = 0.0;
            self.score += scoring::drop_score(1, false);
            self.events.push(GameEvent::SoftDropStep);
        }
        moved
    }

    /// Rotate one state counter-clockwise; fails outright on collision.
    pub fn rotate_left(&mut self) -> bool {
        self.try_rotate(-1)
    }

    /// Rotate one state clockwise; fails outright on collision.
    pub fn rotate_right(&mut self) -> bool {
        self.try_rotate(1)
    }

    /// Drop the active piece to its rest position and lock immediately.
    /// Returns the fall distance in cells (worth 2 points each).
    pub fn hard_drop(&mut self) -> u32 {
        if self.game_over || self.active.is_none() {
            return 0;
        }
        let mut distance: u32 = 0;
        while self.try_move(0, -1) {
            distance += 1;
        }
        self.score += scoring::drop_score(distance, true);
        self.lock_active();
        self.events.push(GameEvent::HardDrop { distance });
        distance
    }

    /// Stash the active piece, at most once between two locks. An empty
    /// slot stores the piece and spawns from the queue; an occupied slot
    /// swaps, and a swap that collides at the spawn anchor ends the game.
    pub fn hold(&mut self) -> bool {
        if self.game_over || self.held_this_turn {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        match self.hold {
            None => {
                self.hold = Some(active.kind);
                self.spawn_from_queue();
            }
            Some(held) => {
                let swapped = Tetromino::new(held);
                self.hold = Some(active.kind);
                if !self
                    .board
                    .can_place(swapped.kind, swapped.rotation, swapped.x, swapped.y)
                {
                    self.enter_game_over();
                    return false;
                }
                self.active = Some(swapped);
                self.refresh_ghost();
            }
        }

        self.held_this_turn = true;
        self.events.push(GameEvent::HoldChanged(self.hold));
        true
    }

    /// Advance the auto-drop timer by `dt` seconds. Each elapsed
    /// interval drops the piece one row; the drop that fails locks the
    /// piece, and at most one lock happens per call.
    pub fn tick(&mut self, dt: f32) {
        if self.game_over || self.active.is_none() {
            return;
        }
        let interval = self.drop_interval();
        self.drop_timer += dt;
        while self.drop_timer >= interval {
            self.drop_timer -= interval;
            if !self.try_move(0, -1) {
                self.lock_active();
                break;
            }
        }
    }

    /// Try to move the active piece; commits and re-derives the ghost on
    /// success.
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        if !self
            .board
            .can_place(active.kind, active.rotation, active.x + dx, active.y + dy)
        {
            return false;
        }

        self.active = Some(Tetromino {
            x: active.x + dx,
            y: active.y + dy,
            ..active
        });
        self.refresh_ghost();
        true
    }

    /// Try to rotate the active piece in place (no kicks).
    fn try_rotate(&mut self, direction: i8) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotation = active.rotation.step(direction);
        if !self
            .board
            .can_place(active.kind, rotation, active.x, active.y)
        {
            return false;
        }

        self.active = Some(Tetromino { rotation, ..active });
        self.refresh_ghost();
        true
    }

    /// Commit the active piece into the board, resolve clears and
    /// scoring, then spawn the next piece.
    fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        self.board
            .lock(piece.kind, piece.rotation, piece.x, piece.y);
        self.events.push(GameEvent::PieceLocked);

        // Spin check must precede compaction: it inspects neighbor cells
        // the compaction is about to move.
        let is_spin = self.is_spin_lock(&piece);
        self.held_this_turn = false;

        let cleared = self.board.compact_full_rows() as u32;
        if cleared > 0 || is_spin {
            self.lines += cleared;
            self.level = scoring::level_for_lines(self.lines);
            let result = scoring::score_delta(cleared, is_spin, self.level, self.back_to_back);
            self.score += result.delta;
            self.back_to_back = result.back_to_back;
            self.events.push(GameEvent::LinesCleared {
                count: cleared,
                is_spin,
            });
        }

        self.spawn_from_queue();
    }

    /// A T lock with at least 3 of the 4 diagonal neighbors of its
    /// anchor cell blocked (occupied or out of bounds) is a spin lock.
    fn is_spin_lock(&self, piece: &Tetromino) -> bool {
        if piece.kind != PieceKind::T {
            return false;
        }
        let corners = [(-1, -1), (1, -1), (-1, 1), (1, 1)];
        let blocked = corners
            .iter()
            .filter(|&&(dx, dy)| {
                let (cx, cy) = (piece.x + dx, piece.y + dy);
                !self.board.is_within_bounds(cx, cy) || self.board.is_occupied(cx, cy)
            })
            .count();
        blocked >= 3
    }

    /// Deal the next piece and place it at the spawn anchor. A spawn
    /// that collides ends the game.
    fn spawn_from_queue(&mut self) {
        let kind = self.bag.next_piece();
        let piece = Tetromino::new(kind);
        self.drop_timer = 0.0;
        self.events
            .push(GameEvent::PreviewChanged(self.bag.preview_array()));

        if !self
            .board
            .can_place(piece.kind, piece.rotation, piece.x, piece.y)
        {
            self.enter_game_over();
            return;
        }

        self.active = Some(piece);
        self.refresh_ghost();
    }

    fn enter_game_over(&mut self) {
        self.game_over = true;
        self.active = None;
        self.ghost = None;
        self.events.push(GameEvent::GameOver);
    }

    /// Re-derive the cached ghost anchor: the lowest anchor reachable by
    /// moving the active piece straight down from where it stands.
    fn refresh_ghost(&mut self) {
        self.ghost = self.active.map(|p| {
            let mut ghost_y = p.y;
            while self.board.can_place(p.kind, p.rotation, p.x, ghost_y - 1) {
                ghost_y -= 1;
            }
            (p.x, ghost_y)
        });
    }

    /// Capture the full session state for an external save system.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut cells = Default::default();
        self.board.write_cell_codes(&mut cells);
        GameSnapshot {
            cells,
            active: self.active.map(ActiveSnapshot::from),
            ghost: self.ghost,
            preview: self.bag.preview_array(),
            bag: self.bag.bag().iter().copied().collect(),
            hold: self.hold,
            held_this_turn: self.held_this_turn,
            row_bound: self.board.row_bound(),
            drop_timer: self.drop_timer,
            rng_state: self.bag.rng_state(),
            score: self.score,
            level: self.level,
            lines: self.lines,
            back_to_back: self.back_to_back,
            game_over: self.game_over,
        }
    }

    /// Resume a session captured with [`snapshot`](Self::snapshot).
    pub fn from_snapshot(snapshot: &GameSnapshot) -> Self {
        Self {
            board: Board::from_parts(&snapshot.cells, snapshot.row_bound),
            active: snapshot.active.map(|a| Tetromino {
                kind: a.kind,
                rotation: a.rotation,
                x: a.x,
                y: a.y,
            }),
            ghost: snapshot.ghost,
            bag: BagRandomizer::from_parts(
                snapshot.bag.clone(),
                snapshot.preview.iter().copied().collect(),
                snapshot.rng_state,
            ),
            hold: snapshot.hold,
            held_this_turn: snapshot.held_this_turn,
            score: snapshot.score,
            level: snapshot.level,
            lines: snapshot.lines,
            back_to_back: snapshot.back_to_back,
            drop_timer: snapshot.drop_timer,
            game_over: snapshot.game_over,
            events: Vec::new(),
        }
    }
}
