//! Computer player: uniformly random legal moves.

use crate::common::{Letter, Move, Player};
use crate::game::GameEngine;
use crate::strategy::MoveStrategy;
use rand::rngs::SmallRng;
use rand::seq::IteratorRandom;
use rand::Rng;

/// Picks a uniformly random empty cell and a random letter. No lookahead.
pub struct RandomStrategy;

impl RandomStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveStrategy for RandomStrategy {
    fn choose_move(
        &mut self,
        rng: &mut SmallRng,
        game: &GameEngine,
        _player: Player,
    ) -> Option<Move> {
        let (row, col) = game.board().empty_cells().choose(rng)?;
        let letter = if rng.random_bool(0.5) {
            Letter::S
        } else {
            Letter::O
        };
        Some(Move { row, col, letter })
    }
}
