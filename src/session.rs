use alloc::boxed::Box;
use rand::rngs::SmallRng;

use crate::{
    api::RefereeApi,
    core::{GameError, MatchResult, PlayerId, RoundRecord},
    player::Player,
};

/// Drives one match between two players through a [`RefereeApi`].
pub struct MatchSession<E: RefereeApi> {
    engine: E,
    player: Box<dyn Player>,
    bot: Box<dyn Player>,
}

impl<E: RefereeApi> MatchSession<E> {
    pub fn new(engine: E, player: Box<dyn Player>, bot: Box<dyn Player>) -> Self {
        Self {
            engine,
            player,
            bot,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn into_engine(self) -> E {
        self.engine
    }

    pub fn is_finished(&self) -> bool {
        self.engine.current_result().finished
    }

    /// Collect one submission from each side and resolve the round.
    pub fn play_next(&mut self, rng: &mut SmallRng) -> Result<RoundRecord, GameError> {
        let player_raw = self
            .player
            .choose_move(rng, &self.engine.view(PlayerId::Player));
        let bot_raw = self.bot.choose_move(rng, &self.engine.view(PlayerId::Bot));
        let record = self.engine.play_round(&player_raw, &bot_raw)?;
        self.player.handle_round_result(&record);
        self.bot.handle_round_result(&record);
        Ok(record)
    }

    /// Play until the match finishes, calling `on_round` after every round.
    pub fn run<F>(&mut self, rng: &mut SmallRng, mut on_round: F) -> Result<MatchResult, GameError>
    where
        F: FnMut(&RoundRecord, &MatchResult),
    {
        while !self.is_finished() {
            let record = self.play_next(rng)?;
            on_round(&record, &self.engine.current_result());
        }
        Ok(self.engine.current_result())
    }
}
