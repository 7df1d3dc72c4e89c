mod board;
mod common;
mod config;
mod detector;
mod game;
mod logging;
mod strategy;
mod strategy_cli;
mod strategy_random;

pub use board::*;
pub use common::*;
pub use config::*;
pub use detector::*;
pub use game::*;
pub use logging::init_logging;
pub use strategy::*;
pub use strategy_cli::*;
pub use strategy_random::*;
