//! Board module - manages the tile grid
//!
//! The board is an N x N grid of tile values where `0` is an empty cell and
//! every other value is a power of two >= 2.
//! Uses a fixed-capacity flat array so the board is `Copy` and slides never
//! allocate. Coordinates are (row, col), row 0 at the top, col 0 at the left.

use std::fmt;

use crate::error::EngineError;
use crate::merge::{line_can_merge, merge_line, merged_value, Line};
use crate::types::{
    Direction, BOARD_SIZE, EMPTY, MAX_BOARD_SIZE, MAX_CELLS, MIN_BOARD_SIZE, WIN_TILE,
};

/// Result of sliding a whole board (not yet committed anywhere)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideResult {
    pub board: Board,
    /// Sum of merge values across all lines
    pub score: u32,
    pub merges: u32,
}

/// The game board - N x N tiles using flat array storage
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    size: u8,
    /// Row-major cells, stride `size` (row * size + col). Cells past
    /// `size * size` are always empty.
    cells: [u32; MAX_CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new(size: usize) -> Result<Self, EngineError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(EngineError::InvalidConfiguration { size });
        }
        Ok(Self {
            size: size as u8,
            cells: [EMPTY; MAX_CELLS],
        })
    }

    /// Build a board from explicit rows.
    ///
    /// Rows must form a square of a supported size and every value must be
    /// empty or a power of two >= 2.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, EngineError> {
        let size = rows.len();
        let mut board = Self::new(size)?;
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(EngineError::InvalidConfiguration { size });
            }
            for (col, &value) in values.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(EngineError::InvalidTile { row, col, value });
                }
                board.cells[row * size + col] = value;
            }
        }
        Ok(board)
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        let n = self.size as usize;
        if row >= n || col >= n {
            return None;
        }
        Some(row * n + col)
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Get tile at (row, col). Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Set tile at (row, col). Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, value: u32) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// The active cells in row-major order
    pub fn cells(&self) -> &[u32] {
        let n = self.size();
        &self.cells[..n * n]
    }

    /// Iterate rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.cells().chunks(self.size())
    }

    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.rows().map(|r| r.to_vec()).collect()
    }

    pub fn empty_count(&self) -> usize {
        self.cells().iter().filter(|&&v| v == EMPTY).count()
    }

    pub fn tile_count(&self) -> usize {
        self.cells().len() - self.empty_count()
    }

    pub fn is_full(&self) -> bool {
        self.cells().iter().all(|&v| v != EMPTY)
    }

    /// Empty cells as (row, col), row-major
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.size();
        self.cells()
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == EMPTY)
            .map(move |(i, _)| (i / n, i % n))
    }

    /// Highest tile on the board (0 when empty)
    pub fn max_tile(&self) -> u32 {
        self.cells().iter().copied().max().unwrap_or(EMPTY)
    }

    /// True if any cell holds the winning tile
    pub fn has_win_tile(&self) -> bool {
        self.cells().contains(&WIN_TILE)
    }

    /// True if two horizontally or vertically adjacent cells could merge
    pub fn has_adjacent_pair(&self) -> bool {
        let n = self.size();
        for row in 0..n {
            for col in 0..n {
                let v = self.cells[row * n + col];
                if col + 1 < n && merged_value(v, self.cells[row * n + col + 1]).is_some() {
                    return true;
                }
                if row + 1 < n && merged_value(v, self.cells[(row + 1) * n + col]).is_some() {
                    return true;
                }
            }
        }
        false
    }

    /// Flat index of position `pos` along line `line` for a slide towards
    /// `dir`. Position 0 is on the target edge.
    #[inline(always)]
    fn line_index(&self, dir: Direction, line: usize, pos: usize) -> usize {
        let n = self.size();
        let along = if dir.is_reversed() { n - 1 - pos } else { pos };
        if dir.is_horizontal() {
            line * n + along
        } else {
            along * n + line
        }
    }

    /// Extract a line oriented towards the `dir` edge
    pub fn line(&self, dir: Direction, line: usize) -> Line {
        (0..self.size())
            .map(|pos| self.cells[self.line_index(dir, line, pos)])
            .collect()
    }

    /// Write a line back at its original orientation
    fn set_line(&mut self, dir: Direction, line: usize, values: &[u32]) {
        for (pos, &v) in values.iter().enumerate() {
            let i = self.line_index(dir, line, pos);
            self.cells[i] = v;
        }
    }

    /// Slide every line towards `dir` and return the resulting board.
    ///
    /// `self` is left untouched; the caller decides whether to commit.
    pub fn slide(&self, dir: Direction) -> SlideResult {
        let mut next = *self;
        let mut score = 0u32;
        let mut merges = 0u32;
        for line in 0..self.size() {
            let merged = merge_line(&self.line(dir, line));
            next.set_line(dir, line, &merged.cells);
            score = score.saturating_add(merged.score);
            merges += merged.merges;
        }
        SlideResult {
            board: next,
            score,
            merges,
        }
    }

    /// True if sliding towards `dir` would change the board
    pub fn can_slide(&self, dir: Direction) -> bool {
        (0..self.size()).any(|line| line_can_merge(&self.line(dir, line)))
    }

    /// No empty cell and no adjacent equal pair: no slide can change the board
    pub fn is_stuck(&self) -> bool {
        self.is_full() && !self.has_adjacent_pair()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells = [EMPTY; MAX_CELLS];
    }
}

impl Default for Board {
    /// Empty classic 4x4 board
    fn default() -> Self {
        Self {
            size: BOARD_SIZE as u8,
            cells: [EMPTY; MAX_CELLS],
        }
    }
}

/// Empty, or a power of two from 2 up to `MAX_TILE`
pub fn is_valid_tile(value: u32) -> bool {
    value == EMPTY || (value >= 2 && value.is_power_of_two())
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (i, v) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                if *v == EMPTY {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{v:>5}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
