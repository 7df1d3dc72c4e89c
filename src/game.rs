//! Core game logic: turn order, move validation and the two rule variants.

use crate::board::Board;
use crate::common::{Letter, MoveError, Player};
use crate::config::{GameConfig, Variant};
use crate::detector;

/// Current status of a game. A game leaves `InProgress` exactly once and
/// never returns to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

/// A sequence completed during play, kept for rendering and auditing. The
/// endpoints are the run's two outer `S` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedSequence {
    pub start: (usize, usize),
    pub end: (usize, usize),
    pub player: Player,
}

/// Game engine owning the board, turn state and variant rule. All mutation
/// goes through [`GameEngine::place_letter`]; once the game is over the
/// engine is effectively read-only.
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    current: Player,
    status: GameStatus,
    blue_score: u32,
    red_score: u32,
    sequences: Vec<CompletedSequence>,
}

impl GameEngine {
    /// Start a fresh game from `config`. Blue moves first.
    pub fn new(config: GameConfig) -> Result<Self, MoveError> {
        let board = Board::new(config.board_size)?;
        Ok(GameEngine {
            config,
            board,
            current: Player::Blue,
            status: GameStatus::InProgress,
            blue_score: 0,
            red_score: 0,
            sequences: Vec::new(),
        })
    }

    /// The configuration this game was started with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Immutable view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Edge length of the board.
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    /// The player whose turn it is. Meaningless once the game is over.
    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// The winning player, or `None` while in progress or on a draw.
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Number of sequences the given player has completed so far.
    pub fn score(&self, player: Player) -> u32 {
        match player {
            Player::Blue => self.blue_score,
            Player::Red => self.red_score,
        }
    }

    /// Every sequence completed so far, in detection order.
    pub fn sequences(&self) -> &[CompletedSequence] {
        &self.sequences
    }

    /// Apply the current player's move at (row, col).
    ///
    /// On acceptance the letter is written, newly completed sequences are
    /// detected and the variant rule decides whether the game ends or the
    /// turn passes; the number of sequences the move completed is returned.
    /// A rejected move (`GameAlreadyOver`, `OutOfRange`, `CellOccupied`)
    /// leaves the engine untouched.
    pub fn place_letter(
        &mut self,
        row: usize,
        col: usize,
        letter: Letter,
    ) -> Result<usize, MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameAlreadyOver);
        }
        self.board.set(row, col, letter)?;

        let mover = self.current;
        let completed = detector::sequences_through(&self.board, row, col);
        let count = completed.len();
        for seq in &completed {
            self.sequences.push(CompletedSequence {
                start: seq.start,
                end: seq.end,
                player: mover,
            });
        }
        match mover {
            Player::Blue => self.blue_score += count as u32,
            Player::Red => self.red_score += count as u32,
        }
        log::debug!("{} placed {} at ({}, {}): {} sequence(s)", mover, letter, row, col, count);

        match self.config.variant {
            Variant::Simple => {
                // A sequence wins outright, even on the board-filling move.
                if count > 0 {
                    self.status = GameStatus::Won(mover);
                } else if self.board.is_full() {
                    self.status = GameStatus::Draw;
                } else {
                    self.current = mover.opponent();
                }
            }
            Variant::General => {
                if self.board.is_full() {
                    self.status = if self.blue_score > self.red_score {
                        GameStatus::Won(Player::Blue)
                    } else if self.red_score > self.blue_score {
                        GameStatus::Won(Player::Red)
                    } else {
                        GameStatus::Draw
                    };
                } else {
                    self.current = mover.opponent();
                }
            }
        }
        if self.is_game_over() {
            log::info!("{}", self.status_text());
        }
        Ok(count)
    }

    /// Human-readable one-line summary of the game state.
    pub fn status_text(&self) -> String {
        match self.config.variant {
            Variant::Simple => match self.status {
                GameStatus::InProgress => format!("Ongoing: {} to move.", self.current),
                GameStatus::Won(player) => format!("Game over: {} wins!", player),
                GameStatus::Draw => "Game over: Draw.".to_string(),
            },
            Variant::General => match self.status {
                GameStatus::InProgress => format!(
                    "Ongoing: {} to move (Blue {}, Red {}).",
                    self.current, self.blue_score, self.red_score
                ),
                GameStatus::Won(player) => format!(
                    "Game over: {} wins {}-{}!",
                    player,
                    self.score(player),
                    self.score(player.opponent())
                ),
                GameStatus::Draw => {
                    format!("Game over: Draw {}-{}.", self.blue_score, self.red_score)
                }
            },
        }
    }
}
