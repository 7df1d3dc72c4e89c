//! Common types for SOS: players, letters, cells, moves and move errors.

use core::fmt;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Blue,
    Red,
}

impl Player {
    /// The other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Blue => Player::Red,
            Player::Red => Player::Blue,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Blue => write!(f, "Blue"),
            Player::Red => write!(f, "Red"),
        }
    }
}

/// A letter a player may place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    S,
    O,
}

impl Letter {
    pub fn as_char(self) -> char {
        match self {
            Letter::S => 'S',
            Letter::O => 'O',
        }
    }

    /// Parse a letter from user input, case-insensitive.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'S' => Some(Letter::S),
            'O' => Some(Letter::O),
            _ => None,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Contents of a single board cell. Cells start `Empty` and once written
/// are never reset within a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    S,
    O,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Letter> for Cell {
    fn from(letter: Letter) -> Self {
        match letter {
            Letter::S => Cell::S,
            Letter::O => Cell::O,
        }
    }
}

/// A proposed placement. Produced by a strategy, consumed by the engine,
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub letter: Letter,
}

/// Errors returned by board and engine operations. Every failure is a
/// plain rejection: the operation that produced it had no side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Row or column outside `[0, size)`.
    OutOfRange { row: usize, col: usize },
    /// Target cell already holds a letter.
    CellOccupied { row: usize, col: usize },
    /// Move submitted after the game ended.
    GameAlreadyOver,
    /// Requested board size outside the supported range.
    InvalidBoardSize { size: usize },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfRange { row, col } => {
                write!(f, "coordinates ({}, {}) are out of range", row, col)
            }
            MoveError::CellOccupied { row, col } => {
                write!(f, "cell ({}, {}) is already occupied", row, col)
            }
            MoveError::GameAlreadyOver => write!(f, "the game is already over"),
            MoveError::InvalidBoardSize { size } => {
                write!(f, "board size {} is not supported", size)
            }
        }
    }
}

impl std::error::Error for MoveError {}
