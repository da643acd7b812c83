use alloc::vec::Vec;

use super::{
    common::{GameError, Move, Outcome, PerPlayer, PlayerId},
    config::{RefereeConfig, MAX_ROUNDS},
    resolve::{resolve, RoundReason},
    validator::{classify, Rejection, Verdict},
};

/// Immutable record of one played round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct RoundRecord {
    /// 1-indexed, contiguous across a match.
    pub round_number: u32,
    pub player_move: Move,
    pub bot_move: Move,
    pub outcome: Outcome,
    /// Set when one side forfeited, e.g. "invalid move: forfeit".
    pub note: Option<&'static str>,
    pub reason: RoundReason,
    /// Why each side's submission was rejected, if it was.
    pub rejections: PerPlayer<Option<Rejection>>,
}

impl RoundRecord {
    /// Move submitted by `who` after validation.
    pub fn move_of(&self, who: PlayerId) -> Move {
        match who {
            PlayerId::Player => self.player_move,
            PlayerId::Bot => self.bot_move,
        }
    }
}

/// Full state of one match. Mutated only by [`GameEngine::play_round`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameState {
    pub round_count: u32,
    pub max_rounds: u32,
    pub scores: PerPlayer<u32>,
    pub bomb_used: PerPlayer<bool>,
    pub history: Vec<RoundRecord>,
    pub finished: bool,
}

impl GameState {
    fn new(max_rounds: u32) -> Self {
        Self {
            round_count: 0,
            max_rounds,
            scores: PerPlayer::default(),
            bomb_used: PerPlayer::default(),
            history: Vec::with_capacity(max_rounds as usize),
            finished: false,
        }
    }

    /// Number of drawn rounds so far.
    pub fn draws(&self) -> u32 {
        self.history
            .iter()
            .filter(|r| r.outcome == Outcome::Draw)
            .count() as u32
    }
}

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    InProgress,
    Finished,
}

/// Read-only snapshot of scores and, once finished, the match outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct MatchResult {
    pub scores: PerPlayer<u32>,
    pub finished: bool,
    /// `None` until the final round has been played.
    pub match_outcome: Option<Outcome>,
}

/// What a participant may see before choosing its next move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerView {
    pub who: PlayerId,
    /// Number of the round about to be played.
    pub round_number: u32,
    pub max_rounds: u32,
    pub bomb_available: bool,
    pub scores: PerPlayer<u32>,
}

/// Owns a single match and drives it one round at a time.
pub struct GameEngine {
    state: GameState,
    config: RefereeConfig,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Create a new engine with all counters zeroed.
    pub fn new() -> Self {
        Self::with_config(RefereeConfig::default())
    }

    pub fn with_config(config: RefereeConfig) -> Self {
        Self {
            state: GameState::new(MAX_ROUNDS),
            config,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn history(&self) -> &[RoundRecord] {
        &self.state.history
    }

    pub fn status(&self) -> GameStatus {
        if self.state.finished {
            GameStatus::Finished
        } else {
            GameStatus::InProgress
        }
    }

    /// Classify `raw` for `who` against its current bomb allowance.
    pub fn classify(&self, raw: &str, who: PlayerId) -> Verdict {
        classify(raw, who, *self.state.bomb_used.get(who), &self.config)
    }

    /// Validate both submissions, resolve the round and apply its effects.
    ///
    /// Fails with [`GameError::GameOver`] once the match is finished, in
    /// which case the state is left untouched.
    pub fn play_round(&mut self, player_raw: &str, bot_raw: &str) -> Result<RoundRecord, GameError> {
        if self.state.finished {
            log::warn!("round submitted after match finished");
            return Err(GameError::GameOver {
                rounds_played: self.state.round_count,
            });
        }

        // Both sides are judged against the pre-round bomb flags.
        let player = self.classify(player_raw, PlayerId::Player);
        let bot = self.classify(bot_raw, PlayerId::Bot);
        let (player_move, bot_move) = (player.into_move(), bot.into_move());
        let resolution = resolve(player_move, bot_move);

        let note = match resolution.reason {
            RoundReason::Forfeit { loser } => {
                let verdict = if loser == PlayerId::Player { player } else { bot };
                verdict.rejection().map(|r| r.note())
            }
            RoundReason::DoubleForfeit => Some("both moves invalid: no score"),
            _ => None,
        };

        let state = &mut self.state;
        state.round_count += 1;
        for who in PlayerId::ALL {
            let mv = if who == PlayerId::Player { player_move } else { bot_move };
            if mv == Move::Bomb {
                *state.bomb_used.get_mut(who) = true;
            }
        }
        if let Some(winner) = resolution.outcome.winner() {
            *state.scores.get_mut(winner) += 1;
        }
        let record = RoundRecord {
            round_number: state.round_count,
            player_move,
            bot_move,
            outcome: resolution.outcome,
            note,
            reason: resolution.reason,
            rejections: PerPlayer {
                player: player.rejection(),
                bot: bot.rejection(),
            },
        };
        state.history.push(record);
        if state.round_count == state.max_rounds {
            state.finished = true;
        }

        log::debug!(
            "round {}: {} vs {} -> {:?} ({}-{})",
            record.round_number,
            player_move,
            bot_move,
            record.outcome,
            state.scores.player,
            state.scores.bot
        );
        if state.finished {
            log::debug!(
                "match finished: {} ({}-{})",
                Outcome::from_scores(state.scores.player, state.scores.bot),
                state.scores.player,
                state.scores.bot
            );
        }
        Ok(record)
    }

    /// Snapshot of scores and, once finished, the overall outcome.
    pub fn current_result(&self) -> MatchResult {
        let scores = self.state.scores;
        MatchResult {
            scores,
            finished: self.state.finished,
            match_outcome: self
                .state
                .finished
                .then(|| Outcome::from_scores(scores.player, scores.bot)),
        }
    }

    /// View of the match for `who` ahead of the next round. Once the match
    /// is finished the round number stays at the last round played.
    pub fn view(&self, who: PlayerId) -> PlayerView {
        PlayerView {
            who,
            round_number: (self.state.round_count + 1).min(self.state.max_rounds),
            max_rounds: self.state.max_rounds,
            bomb_available: !*self.state.bomb_used.get(who),
            scores: self.state.scores,
        }
    }
}
