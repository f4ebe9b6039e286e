//! Grid engine - pure, deterministic, and testable
//!
//! This crate contains the rules of the sliding-tile game: the board, the
//! per-line merge, random tile spawning and the win / stuck checks.
//! It has **no dependencies** on UI, persistence, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Randomness is injected through [`RandomSource`]
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Boards are `Copy` and slides never allocate
//!
//! # Module Structure
//!
//! - [`board`]: N x N tile grid, line extraction and whole-board slides
//! - `merge` (internal): The compaction + merge-once rule for a single line
//! - [`game_state`]: The engine: score, sticky win flag, stuck detection, spawns
//! - [`rng`]: Injectable random source and a seedable LCG
//! - [`snapshot`]: Copyable view of the engine state for renderers
//!
//! # Game Rules
//!
//! - **Slide**: every line is compacted towards the target edge
//! - **Merge**: two equal neighbours (after compaction) become one tile of
//!   double value; a tile merges at most once per slide. Tiles are capped
//!   at `MAX_TILE` (2^31) and a pair of those does not merge
//! - **Score**: each merge adds the merged value, saturating at `u32::MAX`
//! - **Spawn**: after a slide that changed the board, a 2 (90%) or 4 (10%)
//!   appears on a random empty cell
//! - **Win**: any tile reaches 2048 (the flag stays set)
//! - **Stuck**: the board is full and no two neighbours are equal
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::Direction;
//!
//! let mut game = GameState::new(4, 12345).unwrap();
//! game.start_game();
//! assert_eq!(game.board().tile_count(), 2);
//!
//! let outcome = game.slide(Direction::Left);
//! assert_eq!(game.score(), outcome.score_delta);
//! assert!(!game.is_stuck());
//! ```

pub mod board;
pub mod error;
pub mod game_state;
mod merge;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{is_valid_tile, Board, SlideResult};
pub use error::EngineError;
pub use game_state::{direction_from_index, parse_direction, GameState, SlideOutcome};
pub use merge::Line;
pub use rng::{RandomSource, SimpleRng};
pub use snapshot::GameSnapshot;
