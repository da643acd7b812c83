//! Round adjudication from two already-validated moves.

use core::fmt;

use super::common::{Move, Outcome, PlayerId};

/// Which rule decided a round. Displays as the explanation line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum RoundReason {
    /// `loser` submitted an invalid move; the other side wins.
    Forfeit { loser: PlayerId },
    /// Both moves were invalid.
    DoubleForfeit,
    /// Bomb against bomb.
    BombStandoff,
    /// `winner` played the only bomb.
    BombBlast { winner: PlayerId },
    /// Standard moves, `winning` beats `losing`.
    Beats { winning: Move, losing: Move },
    /// Both sides played the same standard move.
    Mirror(Move),
}

impl fmt::Display for RoundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundReason::Forfeit { loser } => {
                write!(f, "Invalid input from {}: round forfeited.", loser)
            }
            RoundReason::DoubleForfeit => f.write_str("Both inputs invalid: nobody scores."),
            RoundReason::BombStandoff => f.write_str("Both used bomb: draw."),
            RoundReason::BombBlast { winner } => {
                write!(f, "Bomb from {} beats every other move.", winner)
            }
            RoundReason::Beats { winning, losing } => write!(f, "{} beats {}.", winning, losing),
            RoundReason::Mirror(m) => write!(f, "Both chose {}: draw.", m),
        }
    }
}

/// Outcome of one round together with the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub outcome: Outcome,
    pub reason: RoundReason,
}

impl Resolution {
    const fn new(outcome: Outcome, reason: RoundReason) -> Self {
        Self { outcome, reason }
    }
}

/// Adjudicate a round. Precedence: forfeits, then bombs, then the cyclic
/// rule between standard moves.
pub fn resolve(player_move: Move, bot_move: Move) -> Resolution {
    use Move::{Bomb, Invalid};
    match (player_move, bot_move) {
        (Invalid, Invalid) => Resolution::new(Outcome::Draw, RoundReason::DoubleForfeit),
        (Invalid, _) => Resolution::new(
            Outcome::BotWin,
            RoundReason::Forfeit {
                loser: PlayerId::Player,
            },
        ),
        (_, Invalid) => Resolution::new(
            Outcome::PlayerWin,
            RoundReason::Forfeit {
                loser: PlayerId::Bot,
            },
        ),
        (Bomb, Bomb) => Resolution::new(Outcome::Draw, RoundReason::BombStandoff),
        (Bomb, _) => Resolution::new(
            Outcome::PlayerWin,
            RoundReason::BombBlast {
                winner: PlayerId::Player,
            },
        ),
        (_, Bomb) => Resolution::new(
            Outcome::BotWin,
            RoundReason::BombBlast {
                winner: PlayerId::Bot,
            },
        ),
        (p, b) if p == b => Resolution::new(Outcome::Draw, RoundReason::Mirror(p)),
        (p, b) if p.beats(b) => Resolution::new(
            Outcome::PlayerWin,
            RoundReason::Beats {
                winning: p,
                losing: b,
            },
        ),
        (p, b) => Resolution::new(
            Outcome::BotWin,
            RoundReason::Beats {
                winning: b,
                losing: p,
            },
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forfeit_takes_precedence_over_bomb() {
        let r = resolve(Move::Bomb, Move::Invalid);
        assert_eq!(r.outcome, Outcome::PlayerWin);
        let r = resolve(Move::Invalid, Move::Bomb);
        assert_eq!(r.outcome, Outcome::BotWin);
        assert_eq!(
            r.reason,
            RoundReason::Forfeit {
                loser: PlayerId::Player
            }
        );
    }

    #[test]
    fn explanation_names_the_winning_move() {
        let r = resolve(Move::Scissors, Move::Rock);
        assert_eq!(r.outcome, Outcome::BotWin);
        assert_eq!(std::format!("{}", r.reason), "rock beats scissors.");
    }
}
