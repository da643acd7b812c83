//! Core referee rules (no_std compatible)
//!
//! Move validation, round adjudication and match state. Needs only `alloc`
//! for the round history.

pub mod common;
pub mod config;
pub mod game;
pub mod resolve;
pub mod validator;

// Re-export commonly used types
pub use common::{GameError, Move, Outcome, PerPlayer, PlayerId};
pub use config::{RefereeConfig, MAX_ROUNDS, RULES, STANDARD_MOVES};
pub use game::{GameEngine, GameState, GameStatus, MatchResult, PlayerView, RoundRecord};
pub use resolve::{resolve, Resolution, RoundReason};
pub use validator::{classify, validate, Rejection, Verdict};
