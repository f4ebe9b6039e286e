//! Game state module - the grid engine
//!
//! Ties together the board, the random source and the score. Exposes the
//! slide operation, tile spawning and the win / stuck status queries.
//!
//! The engine has no notion of pause or time. Callers must not slide while
//! their own pause flag is set or after `is_stuck()` turned true; the engine
//! does not gate these calls itself.

use tracing::{debug, trace};

use crate::board::Board;
use crate::error::EngineError;
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::GameSnapshot;
use crate::types::{
    Direction, Spawn, INITIAL_TILES, SPAWN_HIGH_PERCENT, SPAWN_HIGH_VALUE,
    SPAWN_LOW_VALUE,
};

/// What a single slide did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideOutcome {
    /// Whether any cell changed
    pub moved: bool,
    /// Score gained by merges in this slide
    pub score_delta: u32,
    /// Sticky win flag after the slide
    pub won: bool,
    /// Whether no further slide can change the board
    pub stuck: bool,
    /// Tile spawned after the slide, if any
    pub spawned: Option<Spawn>,
}

/// Complete engine state
#[derive(Debug, Clone)]
pub struct GameState<R: RandomSource = SimpleRng> {
    board: Board,
    score: u32,
    won: bool,
    stuck: bool,
    rng: R,
}

impl GameState<SimpleRng> {
    /// Create an empty engine with a seeded [`SimpleRng`]
    pub fn new(size: usize, seed: u32) -> Result<Self, EngineError> {
        Self::with_rng(size, SimpleRng::new(seed))
    }

    /// Classic 4x4 engine
    pub fn classic(seed: u32) -> Self {
        Self {
            board: Board::default(),
            score: 0,
            won: false,
            stuck: false,
            rng: SimpleRng::new(seed),
        }
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create an empty engine drawing spawns from `rng`.
    ///
    /// The board starts all zero; nothing is spawned until [`start_game`].
    ///
    /// [`start_game`]: GameState::start_game
    pub fn with_rng(size: usize, rng: R) -> Result<Self, EngineError> {
        Ok(Self {
            board: Board::new(size)?,
            score: 0,
            won: false,
            stuck: false,
            rng,
        })
    }

    /// Adopt a prepared board. Score starts at 0; flags are derived from the
    /// board.
    pub fn with_board(board: Board, rng: R) -> Self {
        let mut state = Self {
            board,
            score: 0,
            won: false,
            stuck: false,
            rng,
        };
        state.won = state.check_win();
        state.stuck = state.check_stuck();
        state
    }

    /// Clear the board, score and flags, then spawn the opening tiles
    pub fn start_game(&mut self) {
        self.board.clear();
        self.score = 0;
        self.won = false;
        self.stuck = false;
        for _ in 0..INITIAL_TILES {
            self.spawn_random_tile();
        }
        self.stuck = self.check_stuck();
        debug!(size = self.board.size(), board = ?self.board, "game started");
    }

    /// Place a 2 (90%) or 4 (10%) on a uniformly chosen empty cell.
    ///
    /// Returns `None` without touching anything when the board is full.
    pub fn spawn_random_tile(&mut self) -> Option<Spawn> {
        let empty = self.board.empty_count();
        if empty == 0 {
            return None;
        }

        let pick = self.rng.next_range(empty as u32) as usize;
        let (row, col) = self.board.empty_cells().nth(pick)?;
        let value = if self.rng.chance_percent(SPAWN_HIGH_PERCENT) {
            SPAWN_HIGH_VALUE
        } else {
            SPAWN_LOW_VALUE
        };
        self.board.set(row, col, value);
        trace!(row, col, value, "spawned tile");

        Some(Spawn {
            row: row as u8,
            col: col as u8,
            value,
        })
    }

    /// Slide all tiles towards `direction`.
    ///
    /// The new board is computed on a copy and committed in one step. When
    /// nothing changed the state is untouched and `moved` is false.
    pub fn slide(&mut self, direction: Direction) -> SlideOutcome {
        let result = self.board.slide(direction);
        if result.board == self.board {
            trace!(?direction, "slide did not move");
            return SlideOutcome {
                moved: false,
                score_delta: 0,
                won: self.won,
                stuck: self.stuck,
                spawned: None,
            };
        }

        self.board = result.board;
        self.score = self.score.saturating_add(result.score);

        let spawned = self.spawn_random_tile();
        if self.check_win() {
            self.won = true;
        }
        self.stuck = self.check_stuck();

        trace!(
            ?direction,
            score_delta = result.score,
            merges = result.merges,
            score = self.score,
            won = self.won,
            stuck = self.stuck,
            "slide"
        );

        SlideOutcome {
            moved: true,
            score_delta: result.score,
            won: self.won,
            stuck: self.stuck,
            spawned,
        }
    }

    /// Any cell holds the winning tile
    pub fn check_win(&self) -> bool {
        self.board.has_win_tile()
    }

    /// No empty cell and no adjacent equal pair.
    ///
    /// Always derived from the current board.
    pub fn check_stuck(&self) -> bool {
        self.board.is_stuck()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Sticky win flag
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Stuck flag as of the last state change
    pub fn is_stuck(&self) -> bool {
        self.stuck
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = self.board;
        out.score = self.score;
        out.won = self.won;
        out.stuck = self.stuck;
        out.max_tile = self.board.max_tile();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::new(self.board);
        self.snapshot_into(&mut s);
        s
    }
}

/// Parse a slide direction from user or protocol text
///
/// # Examples
///
/// ```
/// use tui_2048_core::{parse_direction, EngineError};
/// use tui_2048_types::Direction;
///
/// assert_eq!(parse_direction("Left"), Ok(Direction::Left));
/// assert!(matches!(parse_direction("sideways"), Err(EngineError::InvalidDirection(_))));
/// ```
pub fn parse_direction(s: &str) -> Result<Direction, EngineError> {
    Direction::from_name(s).ok_or_else(|| EngineError::InvalidDirection(s.to_string()))
}

/// Map a numeric direction (0=Up, 1=Down, 2=Left, 3=Right)
pub fn direction_from_index(index: u8) -> Result<Direction, EngineError> {
    Direction::from_index(index).ok_or_else(|| EngineError::InvalidDirection(index.to_string()))
}
