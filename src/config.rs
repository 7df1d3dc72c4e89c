//! Game configuration: rule variant, board size and per-player setup.

use crate::common::{Letter, MoveError, Player};

/// Smallest supported board edge.
pub const MIN_BOARD_SIZE: usize = 3;
/// Largest supported board edge.
pub const MAX_BOARD_SIZE: usize = 8;

/// Ruleset selecting how sequences end or score the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// First completed sequence wins; full board with none is a draw.
    Simple,
    /// Sequences score; most sequences when the board fills wins.
    General,
}

/// Per-game setup chosen when a new game starts. A `GameConfig` is
/// immutable once handed to the engine; a new game gets a new config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub variant: Variant,
    pub board_size: usize,
    pub blue_automated: bool,
    pub red_automated: bool,
    pub blue_letter: Letter,
    pub red_letter: Letter,
}

impl GameConfig {
    /// Build a config with human players and `S` as both default letters.
    /// Fails if `board_size` is outside `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
    pub fn new(variant: Variant, board_size: usize) -> Result<Self, MoveError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&board_size) {
            return Err(MoveError::InvalidBoardSize { size: board_size });
        }
        Ok(GameConfig {
            variant,
            board_size,
            blue_automated: false,
            red_automated: false,
            blue_letter: Letter::S,
            red_letter: Letter::S,
        })
    }

    /// Default letter the given player places when none is specified.
    pub fn letter_for(&self, player: Player) -> Letter {
        match player {
            Player::Blue => self.blue_letter,
            Player::Red => self.red_letter,
        }
    }

    /// Whether the given player's moves are computed rather than typed.
    pub fn is_automated(&self, player: Player) -> bool {
        match player {
            Player::Blue => self.blue_automated,
            Player::Red => self.red_automated,
        }
    }
}
