//! Classification of raw move text against the legal move set and the
//! submitting player's bomb allowance.

use core::fmt;

use super::{
    common::{Move, PlayerId},
    config::RefereeConfig,
};

/// Why a submission was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum Rejection {
    /// Empty, misspelled or unknown token.
    Unrecognized,
    /// Bomb requested after this player's bomb was already spent.
    BombSpent,
}

impl Rejection {
    /// Short note attached to the round record of a forfeited round.
    pub const fn note(self) -> &'static str {
        match self {
            Rejection::Unrecognized => "invalid move: forfeit",
            Rejection::BombSpent => "bomb already used: forfeit",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Unrecognized => {
                f.write_str("Invalid move. Valid: rock, paper, scissors, bomb")
            }
            Rejection::BombSpent => f.write_str("Bomb already used in this game"),
        }
    }
}

/// Result of classifying one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted(Move),
    Rejected(Rejection),
}

impl Verdict {
    /// Collapse to a [`Move`], mapping every rejection to [`Move::Invalid`].
    pub const fn into_move(self) -> Move {
        match self {
            Verdict::Accepted(m) => m,
            Verdict::Rejected(_) => Move::Invalid,
        }
    }

    pub const fn rejection(self) -> Option<Rejection> {
        match self {
            Verdict::Accepted(_) => None,
            Verdict::Rejected(r) => Some(r),
        }
    }
}

fn parse_token(token: &str, config: &RefereeConfig) -> Option<Move> {
    const NAMED: [Move; 4] = [Move::Rock, Move::Paper, Move::Scissors, Move::Bomb];
    if let Some(m) = NAMED.iter().find(|m| token.eq_ignore_ascii_case(m.name())) {
        return Some(*m);
    }
    if !config.accept_shorthand {
        return None;
    }
    match token {
        "r" | "R" => Some(Move::Rock),
        "p" | "P" => Some(Move::Paper),
        "s" | "S" => Some(Move::Scissors),
        _ => None,
    }
}

/// Classify `raw` for `player`, whose bomb has been spent if `bomb_used`.
///
/// Input is trimmed and compared case-insensitively. Malformed input is a
/// normal outcome ([`Verdict::Rejected`]), never an error.
pub fn classify(raw: &str, player: PlayerId, bomb_used: bool, config: &RefereeConfig) -> Verdict {
    let verdict = match parse_token(raw.trim(), config) {
        Some(Move::Bomb) if bomb_used => Verdict::Rejected(Rejection::BombSpent),
        Some(m) => Verdict::Accepted(m),
        None => Verdict::Rejected(Rejection::Unrecognized),
    };
    if let Verdict::Rejected(reason) = verdict {
        log::debug!("{} submitted {:?}: rejected ({:?})", player, raw, reason);
    }
    verdict
}

/// Classify `raw` with the default configuration and return the move.
pub fn validate(raw: &str, player: PlayerId, bomb_used: bool) -> Move {
    classify(raw, player, bomb_used, &RefereeConfig::default()).into_move()
}
