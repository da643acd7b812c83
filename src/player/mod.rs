//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - RandomPlayer: picks uniformly among the moves it may still legally play
//! - ScriptedPlayer: replays a fixed list of raw submissions
//! - CliPlayer: interactive command-line player

use alloc::string::String;
use rand::rngs::SmallRng;

use crate::core::{PlayerView, RoundRecord};

/// Interface implemented by different player types.
///
/// A Player only produces raw text. Validation, including bomb allowance,
/// is left to the engine so that every source of input is judged the same.
pub trait Player {
    /// Produce the raw submission for the round described by `view`.
    fn choose_move(&mut self, rng: &mut SmallRng, view: &PlayerView) -> String;

    /// Inform the player of the record of the round just played.
    fn handle_round_result(&mut self, _record: &RoundRecord) {}
}

pub mod ai;
pub use ai::RandomPlayer;

pub mod scripted;
pub use scripted::ScriptedPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::CliPlayer;
