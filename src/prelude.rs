//! Commonly used types and utilities for ease of import.

pub use crate::{
    GameEngine, GameError, MatchResult, MatchSession, Move, Outcome, Player, PlayerId,
    RandomPlayer, RefereeApi, RoundRecord, ScriptedPlayer,
};

#[cfg(feature = "std")]
pub use crate::{
    ui::{print_final, print_round, print_rules},
    CliPlayer,
};
