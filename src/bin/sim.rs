#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    use rand::{rngs::SmallRng, SeedableRng};
    use rps_referee::{GameEngine, MatchSession, RandomPlayer};
    use serde_json::json;

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    // Both bots share one stream seeded from the pair.
    let mut rng = SmallRng::seed_from_u64(seed1 ^ seed2.rotate_left(32));

    let mut session = MatchSession::new(
        GameEngine::new(),
        Box::new(RandomPlayer::new()),
        Box::new(RandomPlayer::new()),
    );
    let result = session.run(&mut rng, |_, _| {})?;

    let winner = result
        .match_outcome
        .and_then(|o| o.winner())
        .map(|w| w.to_string());

    let out = json!({
        "rounds": session.engine().history(),
        "scores": result.scores,
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&out)?);
    Ok(())
}
