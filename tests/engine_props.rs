use proptest::prelude::*;
use rps_referee::{resolve, GameEngine, Move, Outcome, PlayerId, MAX_ROUNDS, STANDARD_MOVES};

fn raw_move() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("rock".to_string()),
        Just("paper".to_string()),
        Just("scissors".to_string()),
        Just("bomb".to_string()),
        Just(" BOMB ".to_string()),
        "[a-z ]{0,8}",
    ]
}

fn any_move() -> impl Strategy<Value = Move> {
    prop_oneof![
        Just(Move::Rock),
        Just(Move::Paper),
        Just(Move::Scissors),
        Just(Move::Bomb),
        Just(Move::Invalid),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Swapping sides flips the outcome.
    #[test]
    fn resolution_is_antisymmetric(a in any_move(), b in any_move()) {
        prop_assert_eq!(resolve(a, b).outcome, resolve(b, a).outcome.flipped());
    }

    /// Bomb beats every standard move and draws against bomb.
    #[test]
    fn bomb_dominates_standard(idx in 0..STANDARD_MOVES.len()) {
        let m = STANDARD_MOVES[idx];
        prop_assert_eq!(resolve(Move::Bomb, m).outcome, Outcome::PlayerWin);
        prop_assert_eq!(resolve(m, Move::Bomb).outcome, Outcome::BotWin);
        prop_assert_eq!(resolve(Move::Bomb, Move::Bomb).outcome, Outcome::Draw);
    }

    /// Invariants hold after every round of an arbitrary match.
    #[test]
    fn match_invariants(rounds in proptest::collection::vec((raw_move(), raw_move()), 3..6)) {
        let mut engine = GameEngine::new();
        let mut bomb_flips = [0u32; 2];

        for (i, (p, b)) in rounds.iter().enumerate() {
            let before = engine.state().clone();
            let res = engine.play_round(p, b);

            if before.finished {
                prop_assert!(res.is_err());
                prop_assert_eq!(engine.state(), &before);
                continue;
            }
            let record = res.unwrap();
            let state = engine.state();

            prop_assert_eq!(state.round_count, before.round_count + 1);
            prop_assert!(state.round_count <= state.max_rounds);
            prop_assert_eq!(state.history.len() as u32, state.round_count);
            prop_assert_eq!(record.round_number, i as u32 + 1);
            prop_assert_eq!(state.finished, state.round_count == MAX_ROUNDS);
            prop_assert_eq!(
                state.scores.player + state.scores.bot + state.draws(),
                state.round_count
            );

            for (idx, who) in PlayerId::ALL.into_iter().enumerate() {
                let was = *before.bomb_used.get(who);
                let now = *state.bomb_used.get(who);
                prop_assert!(!was || now, "bomb flag reset");
                if !was && now {
                    bomb_flips[idx] += 1;
                    prop_assert_eq!(record.move_of(who), Move::Bomb);
                }
                if was {
                    prop_assert_ne!(record.move_of(who), Move::Bomb);
                }
                let gained = *state.scores.get(who) - *before.scores.get(who);
                prop_assert_eq!(gained, u32::from(record.outcome.winner() == Some(who)));
            }
        }
        prop_assert!(bomb_flips.iter().all(|&n| n <= 1));
        prop_assert!(engine.state().finished);
    }
}
