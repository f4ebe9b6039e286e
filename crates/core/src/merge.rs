//! Line merge - the per-line slide rule
//!
//! A line is one row or column, already oriented so the slide's target edge
//! is index 0. Merging is a pure function of the line: the board commits the
//! result afterwards.
//!
//! Rules, applied in order:
//! 1. Compaction: empty cells are dropped, order preserved.
//! 2. Merge: scanning from index 0, two consecutive equal values become one
//!    cell of double the value. The pair is consumed, so a tile merges at most
//!    once per slide (`[2, 2, 2]` becomes `[4, 2, 0]`).
//! 3. Padding: zeros refill the line to its original length.
//!
//! A pair of [`MAX_TILE`] tiles has no representable double and stays
//! unmerged.

use arrayvec::ArrayVec;

use crate::types::{EMPTY, MAX_BOARD_SIZE, MAX_TILE};

/// Fixed-capacity line buffer
pub type Line = ArrayVec<u32, MAX_BOARD_SIZE>;

/// Result of merging one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedLine {
    /// Merged cells, padded to the input length
    pub cells: Line,
    /// Sum of all values produced by merges in this line
    pub score: u32,
    /// Number of merges performed
    pub merges: u32,
}

/// Value two equal neighbours merge into, or `None` when they cannot merge
/// (empty cells, or tiles already at [`MAX_TILE`]).
pub fn merged_value(a: u32, b: u32) -> Option<u32> {
    if a != b || a == EMPTY || a > MAX_TILE / 2 {
        return None;
    }
    a.checked_mul(2)
}

/// Merge a single line towards index 0.
///
/// Lines come from [`Board::line`](crate::Board::line), so they never exceed
/// `MAX_BOARD_SIZE` cells.
pub fn merge_line(line: &Line) -> MergedLine {
    let compacted: Line = line.iter().copied().filter(|&v| v != EMPTY).collect();

    let mut cells = Line::new();
    let mut score = 0u32;
    let mut merges = 0u32;

    let mut i = 0;
    while i < compacted.len() {
        let value = compacted[i];
        let merged = compacted
            .get(i + 1)
            .and_then(|&next| merged_value(value, next));
        match merged {
            Some(merged) => {
                cells.push(merged);
                score = score.saturating_add(merged);
                merges += 1;
                i += 2;
            }
            None => {
                cells.push(value);
                i += 1;
            }
        }
    }

    while cells.len() < line.len() {
        cells.push(EMPTY);
    }

    MergedLine {
        cells,
        score,
        merges,
    }
}

/// True when merging `line` would change it.
///
/// Cheaper than [`merge_line`] for move detection: a line changes iff it has
/// a gap before a tile, or two equal tiles adjacent after compaction.
pub fn line_can_merge(line: &Line) -> bool {
    let mut seen_gap = false;
    let mut prev = EMPTY;
    for &v in line {
        if v == EMPTY {
            seen_gap = true;
            continue;
        }
        if seen_gap || merged_value(prev, v).is_some() {
            return true;
        }
        prev = v;
    }
    false
}
