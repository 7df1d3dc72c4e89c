//! Board state: an `N x N` grid of letter cells behind bounds-checked access.

use crate::common::{Cell, Letter, MoveError};
use crate::config::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use core::fmt;

/// The playing grid. Cells are write-once: `set` refuses an occupied cell
/// and nothing ever clears one within a game.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board of `size x size` cells.
    pub fn new(size: usize) -> Result<Self, MoveError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(MoveError::InvalidBoardSize { size });
        }
        Ok(Board {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// Edge length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, MoveError> {
        if row >= self.size || col >= self.size {
            return Err(MoveError::OutOfRange { row, col });
        }
        Ok(row * self.size + col)
    }

    /// Cell contents at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, MoveError> {
        Ok(self.cells[self.index(row, col)?])
    }

    /// Write `letter` at (row, col). Fails without side effects if the
    /// coordinates are invalid or the cell is occupied.
    pub fn set(&mut self, row: usize, col: usize, letter: Letter) -> Result<(), MoveError> {
        let idx = self.index(row, col)?;
        if self.cells[idx] != Cell::Empty {
            return Err(MoveError::CellOccupied { row, col });
        }
        self.cells[idx] = Cell::from(letter);
        Ok(())
    }

    /// True iff no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Coordinates of every empty cell, in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(move |(i, _)| (i / size, i % size))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..self.size {
            write!(f, " {}", (b'A' + c as u8) as char)?;
        }
        writeln!(f)?;
        for r in 0..self.size {
            write!(f, "{:2} ", r + 1)?;
            for c in 0..self.size {
                let ch = match self.cells[r * self.size + c] {
                    Cell::Empty => '.',
                    Cell::S => 'S',
                    Cell::O => 'O',
                };
                write!(f, " {}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {}x{}:", self.size, self.size)?;
        fmt::Display::fmt(self, f)
    }
}
