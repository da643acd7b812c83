#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use rps_referee::{
    init_logging,
    ui::{print_final, print_round, print_rules},
    CliPlayer, GameEngine, MatchSession, Player, RandomPlayer, RefereeConfig,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a match against the bot from the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible bot moves (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Also accept r/p/s as move names")]
        shorthand: bool,
    },
    /// Watch two bots play a match.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn run_match(
    engine: GameEngine,
    player: Box<dyn Player>,
    mut rng: SmallRng,
) -> anyhow::Result<()> {
    let mut out = std::io::stdout();
    print_rules(&mut out)?;
    let mut session = MatchSession::new(engine, player, Box::new(RandomPlayer::new()));
    let mut write_err = None;
    let result = session.run(&mut rng, |record, snapshot| {
        if let Err(e) = print_round(&mut out, record, snapshot) {
            write_err.get_or_insert(e);
        }
    })?;
    if let Some(e) = write_err {
        return Err(e.into());
    }
    print_final(&mut out, &result)?;
    Ok(())
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, shorthand } => {
            let config = if shorthand {
                RefereeConfig::with_shorthand()
            } else {
                RefereeConfig::default()
            };
            let rng = make_rng(seed);
            run_match(GameEngine::with_config(config), Box::new(CliPlayer::new()), rng)?;
        }
        Commands::Auto { seed } => {
            println!("Starting bot vs bot match...");
            let rng = make_rng(seed);
            run_match(GameEngine::new(), Box::new(RandomPlayer::new()), rng)?;
        }
    }
    Ok(())
}
