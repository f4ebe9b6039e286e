//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine, session bookkeeping, terminal rendering).
//!
//! # Board Dimensions
//!
//! The classic game is played on a 4x4 grid. The engine stores boards in a
//! fixed-capacity flat array, so any side length in
//! `MIN_BOARD_SIZE..=MAX_BOARD_SIZE` fits without allocation.
//!
//! # Tile Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_SIZE` | 4 | Side length of the classic board |
//! | `WIN_TILE` | 2048 | Reaching this value sets the sticky `won` flag |
//! | `MAX_TILE` | 2^31 | Largest tile a `u32` cell holds; pairs of it never merge |
//! | `SPAWN_LOW_VALUE` | 2 | Value of most spawned tiles |
//! | `SPAWN_HIGH_VALUE` | 4 | Value of the rarer spawned tile |
//! | `SPAWN_HIGH_PERCENT` | 10 | Chance (in percent) of spawning the high value |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, Theme, BOARD_SIZE, WIN_TILE};
//!
//! let dir = Direction::Left;
//! assert_eq!(dir.opposite(), Direction::Right);
//! assert!(dir.is_horizontal());
//!
//! let action = GameAction::Slide(Direction::Up);
//! assert_eq!(action.as_str(), "slideUp");
//!
//! assert_eq!(Theme::Light.toggle(), Theme::Dark);
//! assert_eq!(BOARD_SIZE, 4);
//! assert_eq!(WIN_TILE, 2048);
//! ```

/// Side length of the classic board
pub const BOARD_SIZE: usize = 4;

/// Smallest side length the engine accepts
pub const MIN_BOARD_SIZE: usize = 2;

/// Largest side length the fixed board storage can hold
pub const MAX_BOARD_SIZE: usize = 8;

/// Number of cells in the fixed board storage
pub const MAX_CELLS: usize = MAX_BOARD_SIZE * MAX_BOARD_SIZE;

/// Tile value that wins the game
pub const WIN_TILE: u32 = 2048;

/// Largest tile value a cell can hold. Two of these stay side by side
/// instead of merging.
pub const MAX_TILE: u32 = 1 << 31;

/// Value of the common spawned tile (90%)
pub const SPAWN_LOW_VALUE: u32 = 2;

/// Value of the rare spawned tile (10%)
pub const SPAWN_HIGH_VALUE: u32 = 4;

/// Percent chance that a spawned tile takes `SPAWN_HIGH_VALUE`
pub const SPAWN_HIGH_PERCENT: u32 = 10;

/// Number of tiles placed on a cleared board when a game starts
pub const INITIAL_TILES: usize = 2;

/// Value stored in an empty cell
pub const EMPTY: u32 = 0;


/// The four slide directions
///
/// Each direction names the edge tiles travel towards:
/// - **Up**: columns, towards row 0
/// - **Down**: columns, towards the last row
/// - **Left**: rows, towards column 0
/// - **Right**: rows, towards the last column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in a stable order (Up, Down, Left, Right)
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Stable numeric index (0=Up, 1=Down, 2=Left, 3=Right)
    pub fn index(self) -> u8 {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    /// Inverse of [`Direction::index`]
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_index(2), Some(Direction::Left));
    /// assert_eq!(Direction::from_index(9), None);
    /// ```
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Direction::Up),
            1 => Some(Direction::Down),
            2 => Some(Direction::Left),
            3 => Some(Direction::Right),
            _ => None,
        }
    }

    /// Parse from a name or single letter (case-insensitive)
    ///
    /// Accepts "up" | "u", "down" | "d", "left" | "l", "right" | "r".
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True when the slide operates on rows
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// True when lines are read from the far edge back to index 0
    pub fn is_reversed(self) -> bool {
        matches!(self, Direction::Down | Direction::Right)
    }
}

/// Actions the player can take
///
/// Produced by the input layer and consumed by the session. Only
/// `Slide` ever reaches the grid engine; the rest drive presentation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide every tile towards an edge
    Slide(Direction),
    /// Toggle pause state
    Pause,
    /// Discard the current game and start a fresh one
    NewGame,
    /// Switch between light and dark palettes
    ToggleTheme,
    /// Enable or disable sound cues
    ToggleSound,
    /// Show the instructions overlay
    Help,
    /// Start, resume, or continue after a win (context dependent)
    Confirm,
}

impl GameAction {
    /// Convert to camelCase string (used in logs)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Slide(Direction::Up) => "slideUp",
            GameAction::Slide(Direction::Down) => "slideDown",
            GameAction::Slide(Direction::Left) => "slideLeft",
            GameAction::Slide(Direction::Right) => "slideRight",
            GameAction::Pause => "pause",
            GameAction::NewGame => "newGame",
            GameAction::ToggleTheme => "toggleTheme",
            GameAction::ToggleSound => "toggleSound",
            GameAction::Help => "help",
            GameAction::Confirm => "confirm",
        }
    }
}

/// Colour palette selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Stored representation ("light" / "dark")
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value; anything other than "dark" reads as light.
    pub fn from_stored(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("dark") {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// A tile placed by the random spawner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Spawn {
    pub row: u8,
    pub col: u8,
    pub value: u32,
}
