use alloc::{string::String, vec::Vec};
use rand::{rngs::SmallRng, Rng};

use crate::core::{Move, PlayerView, STANDARD_MOVES};

use super::Player;

/// Bot that picks uniformly at random from the moves it may legally play.
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Moves `view.who` may play this round.
pub fn allowed_moves(view: &PlayerView) -> Vec<Move> {
    let mut moves = STANDARD_MOVES.to_vec();
    if view.bomb_available {
        moves.push(Move::Bomb);
    }
    moves
}

impl Player for RandomPlayer {
    fn choose_move(&mut self, rng: &mut SmallRng, view: &PlayerView) -> String {
        let moves = allowed_moves(view);
        let pick = moves[rng.random_range(0..moves.len())];
        String::from(pick.name())
    }
}
