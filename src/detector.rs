//! S-O-S sequence detection around a just-placed letter.
//!
//! Directions are enumerated as full vectors, not axes, so a placement
//! completing runs in both senses of one line finds them all: the middle
//! `S` of `S O S O S` completes two distinct runs, one per sense. The same
//! physical run is also visible from both senses (as the leading `S` in
//! one direction and the trailing `S` in the opposite one), so results are
//! deduplicated by endpoint pair before being returned.

use crate::board::Board;
use crate::common::Cell;

/// The eight direction vectors, in scan order. Result ordering follows this
/// order, with the three placement patterns checked per direction.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A completed S-O-S run, identified by the coordinates of its two outer
/// `S` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sequence {
    pub start: (usize, usize),
    pub end: (usize, usize),
}

impl Sequence {
    /// True if `other` covers the same two outer cells, in either order.
    pub fn same_run(&self, other: &Sequence) -> bool {
        (self.start == other.start && self.end == other.end)
            || (self.start == other.end && self.end == other.start)
    }
}

fn step(size: usize, row: usize, col: usize, dir: (i32, i32), k: i32) -> Option<(usize, usize)> {
    let r = row as i32 + dir.0 * k;
    let c = col as i32 + dir.1 * k;
    if r < 0 || c < 0 || r >= size as i32 || c >= size as i32 {
        return None;
    }
    Some((r as usize, c as usize))
}

fn cell(board: &Board, row: usize, col: usize, dir: (i32, i32), k: i32) -> Option<Cell> {
    let (r, c) = step(board.size(), row, col, dir, k)?;
    board.get(r, c).ok()
}

fn push_unique(found: &mut Vec<Sequence>, seq: Sequence) {
    if !found.iter().any(|s| s.same_run(&seq)) {
        found.push(seq);
    }
}

/// Enumerate every sequence completed by the letter at (row, col), one
/// entry per physical run.
///
/// For each direction the placed cell is tested in all three roles: the
/// leading `S`, the middle `O` and the trailing `S`. Patterns running off
/// the board are skipped. Detection is advisory and never mutates state;
/// an out-of-range or empty cell yields no sequences.
pub fn sequences_through(board: &Board, row: usize, col: usize) -> Vec<Sequence> {
    let Ok(placed) = board.get(row, col) else {
        return Vec::new();
    };
    let mut found = Vec::new();

    for dir in DIRECTIONS {
        if placed == Cell::S {
            // placed cell is the first S of the run
            if cell(board, row, col, dir, 1) == Some(Cell::O)
                && cell(board, row, col, dir, 2) == Some(Cell::S)
            {
                if let Some(end) = step(board.size(), row, col, dir, 2) {
                    push_unique(
                        &mut found,
                        Sequence {
                            start: (row, col),
                            end,
                        },
                    );
                }
            }
        }

        if placed == Cell::O {
            // placed cell is the middle O
            if cell(board, row, col, dir, -1) == Some(Cell::S)
                && cell(board, row, col, dir, 1) == Some(Cell::S)
            {
                if let (Some(start), Some(end)) = (
                    step(board.size(), row, col, dir, -1),
                    step(board.size(), row, col, dir, 1),
                ) {
                    push_unique(&mut found, Sequence { start, end });
                }
            }
        }

        if placed == Cell::S {
            // placed cell is the last S of the run
            if cell(board, row, col, dir, -2) == Some(Cell::S)
                && cell(board, row, col, dir, -1) == Some(Cell::O)
            {
                if let Some(start) = step(board.size(), row, col, dir, -2) {
                    push_unique(
                        &mut found,
                        Sequence {
                            start,
                            end: (row, col),
                        },
                    );
                }
            }
        }
    }

    found
}
