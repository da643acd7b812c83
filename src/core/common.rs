//! Common types for the referee: moves, participants, outcomes and errors.

use core::fmt;

/// A move as classified by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    /// Single-use move that beats every standard move.
    Bomb,
    /// Sentinel for input that failed validation. Never playable.
    Invalid,
}

impl Move {
    /// Lowercase name as typed by players.
    pub const fn name(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Bomb => "bomb",
            Move::Invalid => "invalid",
        }
    }

    /// Cyclic relation between standard moves. Always false when either
    /// side is not a standard move.
    pub const fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Scissors, Move::Paper)
                | (Move::Paper, Move::Rock)
        )
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the two fixed participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum PlayerId {
    Player,
    Bot,
}

impl PlayerId {
    pub const ALL: [PlayerId; 2] = [PlayerId::Player, PlayerId::Bot];
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::Player => f.write_str("player"),
            PlayerId::Bot => f.write_str("bot"),
        }
    }
}

/// Result of a round or of a whole match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum Outcome {
    PlayerWin,
    BotWin,
    Draw,
}

impl Outcome {
    /// Winning participant, or `None` for a draw.
    pub const fn winner(self) -> Option<PlayerId> {
        match self {
            Outcome::PlayerWin => Some(PlayerId::Player),
            Outcome::BotWin => Some(PlayerId::Bot),
            Outcome::Draw => None,
        }
    }

    /// The same result seen with the participants swapped.
    pub const fn flipped(self) -> Outcome {
        match self {
            Outcome::PlayerWin => Outcome::BotWin,
            Outcome::BotWin => Outcome::PlayerWin,
            Outcome::Draw => Outcome::Draw,
        }
    }

    /// Compare two totals; higher wins, equal is a draw.
    pub fn from_scores(player: u32, bot: u32) -> Outcome {
        match player.cmp(&bot) {
            core::cmp::Ordering::Greater => Outcome::PlayerWin,
            core::cmp::Ordering::Less => Outcome::BotWin,
            core::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::PlayerWin => f.write_str("player wins"),
            Outcome::BotWin => f.write_str("bot wins"),
            Outcome::Draw => f.write_str("draw"),
        }
    }
}

/// A value kept for each participant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PerPlayer<T> {
    pub player: T,
    pub bot: T,
}

impl<T> PerPlayer<T> {
    pub fn get(&self, who: PlayerId) -> &T {
        match who {
            PlayerId::Player => &self.player,
            PlayerId::Bot => &self.bot,
        }
    }

    pub fn get_mut(&mut self, who: PlayerId) -> &mut T {
        match who {
            PlayerId::Player => &mut self.player,
            PlayerId::Bot => &mut self.bot,
        }
    }
}

/// Errors returned by engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// A round was submitted after the match finished.
    GameOver { rounds_played: u32 },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::GameOver { rounds_played } => write!(
                f,
                "Game is over after {} rounds; no further rounds accepted",
                rounds_played
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
