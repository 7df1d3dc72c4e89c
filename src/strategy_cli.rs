//! Human player: moves typed on stdin.

use std::io::{self, Write};

use crate::common::{Letter, Move, Player};
use crate::game::GameEngine;
use crate::strategy::MoveStrategy;
use rand::rngs::SmallRng;

/// Defers move selection to a human typing `<col><row>` plus an optional
/// letter, e.g. `B2` or `B2 O`. When the letter is omitted the player's
/// configured default letter is used. Coordinates are not range-checked
/// here; the engine rejects illegal moves and the prompt repeats.
pub struct CliStrategy;

impl CliStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliStrategy {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_coord(input: &str) -> Option<(usize, usize)> {
    if input.len() < 2 {
        return None;
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row_str: String = chars.collect();
    let row: usize = row_str.parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((row - 1, col))
}

/// Parse a move from one input line. Falls back to `default_letter` when
/// no letter token is present.
pub fn parse_move(input: &str, default_letter: Letter) -> Option<Move> {
    let mut parts = input.split_whitespace();
    let (row, col) = parse_coord(parts.next()?)?;
    let letter = match parts.next() {
        Some(tok) => Letter::from_char(tok.chars().next()?)?,
        None => default_letter,
    };
    if parts.next().is_some() {
        return None;
    }
    Some(Move { row, col, letter })
}

impl MoveStrategy for CliStrategy {
    fn choose_move(
        &mut self,
        _rng: &mut SmallRng,
        game: &GameEngine,
        player: Player,
    ) -> Option<Move> {
        let default_letter = game.config().letter_for(player);
        loop {
            print!("{} move (e.g. B2 or B2 O): ", player);
            io::stdout().flush().ok()?;
            let mut buf = String::new();
            let read = io::stdin().read_line(&mut buf).ok()?;
            if read == 0 {
                // stdin closed
                return None;
            }
            match parse_move(buf.trim(), default_letter) {
                Some(mv) => return Some(mv),
                None => println!("Could not read a move from '{}'.", buf.trim()),
            }
        }
    }
}
