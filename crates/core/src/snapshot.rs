//! Plain-value view of the engine state for renderers.

use crate::board::Board;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: Board,
    pub score: u32,
    pub won: bool,
    pub stuck: bool,
    pub max_tile: u32,
}

impl GameSnapshot {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            score: 0,
            won: false,
            stuck: false,
            max_tile: board.max_tile(),
        }
    }

    pub fn clear(&mut self) {
        self.board.clear();
        self.score = 0;
        self.won = false;
        self.stuck = false;
        self.max_tile = 0;
    }

    /// A slide may still change the board
    pub fn playable(&self) -> bool {
        !self.stuck
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self::new(Board::default())
    }
}
