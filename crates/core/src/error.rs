//! Engine error type.

use thiserror::Error;

/// Errors surfaced by the grid engine.
///
/// All variants are caller errors: they are reported immediately and never
/// leave the engine in a partially updated state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Board side length outside `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`, or a
    /// non-square set of rows.
    #[error("invalid board configuration: size {size}")]
    InvalidConfiguration { size: usize },

    /// Unrecognized slide direction at a text or numeric boundary.
    #[error("invalid direction: {0:?}")]
    InvalidDirection(String),

    /// Cell value that is neither empty nor a power of two >= 2.
    #[error("invalid tile {value} at row {row}, col {col}")]
    InvalidTile { row: usize, col: usize, value: u32 },
}
