use crate::core::{GameEngine, GameError, MatchResult, Move, PlayerId, PlayerView, RoundRecord};

/// Call/response contract used by whatever drives a match: a console loop,
/// a scripted simulation or an agent tool layer.
pub trait RefereeApi {
    /// Classify raw text for `who` against its current bomb allowance.
    fn validate(&self, raw: &str, who: PlayerId) -> Move;
    fn play_round(&mut self, player_raw: &str, bot_raw: &str) -> Result<RoundRecord, GameError>;
    fn current_result(&self) -> MatchResult;
    fn view(&self, who: PlayerId) -> PlayerView;
}

impl RefereeApi for GameEngine {
    fn validate(&self, raw: &str, who: PlayerId) -> Move {
        self.classify(raw, who).into_move()
    }

    fn play_round(&mut self, player_raw: &str, bot_raw: &str) -> Result<RoundRecord, GameError> {
        GameEngine::play_round(self, player_raw, bot_raw)
    }

    fn current_result(&self) -> MatchResult {
        GameEngine::current_result(self)
    }

    fn view(&self, who: PlayerId) -> PlayerView {
        GameEngine::view(self, who)
    }
}
