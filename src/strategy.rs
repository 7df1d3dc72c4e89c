//! Pluggable move selection.

use crate::common::{Move, Player};
use crate::game::GameEngine;
use rand::rngs::SmallRng;

/// A policy producing the next move for a player, given only what the
/// engine's query surface exposes.
///
/// Implementations need not play well, only legally: whenever an empty
/// cell exists a strategy should return some move targeting one. `None`
/// signals that no move could be produced (full board, or the external
/// actor went away). Legality is enforced by the engine, not here.
pub trait MoveStrategy {
    fn choose_move(
        &mut self,
        rng: &mut SmallRng,
        game: &GameEngine,
        player: Player,
    ) -> Option<Move>;
}
