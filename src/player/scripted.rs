use alloc::{collections::VecDeque, string::String};
use rand::rngs::SmallRng;

use crate::core::PlayerView;

use super::Player;

/// Replays a fixed sequence of raw submissions. Once exhausted it submits
/// empty text, which forfeits.
pub struct ScriptedPlayer {
    moves: VecDeque<String>,
}

impl ScriptedPlayer {
    pub fn new<I, S>(moves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            moves: moves.into_iter().map(Into::into).collect(),
        }
    }

    /// Submissions not yet played.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl Player for ScriptedPlayer {
    fn choose_move(&mut self, _rng: &mut SmallRng, _view: &PlayerView) -> String {
        self.moves.pop_front().unwrap_or_default()
    }
}
