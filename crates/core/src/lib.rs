//! Simulation core for a falling-block puzzle game.
//!
//! Pure, deterministic gameplay logic with **zero dependencies** on
//! rendering, input devices or persistence frameworks:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//!   and, given the same commands, the same game
//! - **Synchronous**: every command applies or no-ops within the call;
//!   time only advances through [`GameState::tick`]
//! - **Observable**: state is queried through snapshots and accessors,
//!   and side effects surface as a drained event queue
//!
//! # Module Structure
//!
//! - [`pieces`]: shape table - per-rotation cell offsets and colors for
//!   the 7 kinds
//! - [`rng`]: 7-bag randomizer with a dealt-ahead preview queue
//! - [`gravity`]: level to automatic-drop-interval curve
//! - [`board`]: 10x24 grid - collision queries, locking, row compaction
//! - [`game_state`]: the controller state machine and event queue
//! - [`scoring`]: line/spin clear scoring with back-to-back bonuses
//! - [`snapshot`]: persisted-state layout for an external save system
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//!
//! let mut game = GameState::new(12345);
//! game.move_right();
//! game.rotate_right();
//! game.hard_drop();
//! assert!(game.score() > 0); // hard drop awards 2 points per cell
//!
//! for event in game.take_events() {
//!     // forward to presentation
//!     let _ = event;
//! }
//! ```

pub mod board;
pub mod game_state;
pub mod gravity;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, Tetromino};
pub use gravity::drop_interval;
pub use pieces::{get_color, get_shape, get_spawn_shape, SPAWN_POSITION};
pub use rng::{BagRandomizer, SimpleRng};
pub use scoring::{drop_score, level_for_lines, score_delta, ScoreDelta};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
