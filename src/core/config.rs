use super::common::Move;

/// Number of rounds in a match.
pub const MAX_ROUNDS: u32 = 3;

/// Moves that can always be played, regardless of bomb allowance.
pub const STANDARD_MOVES: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

/// Rule summary shown to a human before the first round.
pub const RULES: [&str; 3] = [
    "Best of 3 rounds (exactly 3 rounds). Valid moves: rock, paper, scissors, bomb.",
    "Bomb beats all others, bomb vs bomb = draw; each player may use bomb once per game.",
    "Invalid input wastes (forfeits) the round; game ends automatically after 3 rounds.",
];

/// Tunables for move validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct RefereeConfig {
    /// Also accept the one-letter aliases `r`, `p` and `s`.
    pub accept_shorthand: bool,
}

impl RefereeConfig {
    /// Configuration accepting `r`/`p`/`s` in addition to full move names.
    pub const fn with_shorthand() -> Self {
        Self {
            accept_shorthand: true,
        }
    }
}
