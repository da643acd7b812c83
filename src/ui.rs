#![cfg(feature = "std")]

use std::io::{self, Write};

use crate::core::{MatchResult, Move, Outcome, RoundRecord, RULES};

fn move_label(m: Move) -> &'static str {
    match m {
        Move::Invalid => "INVALID",
        other => other.name(),
    }
}

fn result_label(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerWin => "YOU",
        Outcome::BotWin => "BOT",
        Outcome::Draw => "DRAW",
    }
}

/// Print the title and rule summary.
pub fn print_rules(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "AI Game Referee — Rock-Paper-Scissors-Plus")?;
    for line in RULES {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Print one round block with the running score.
pub fn print_round(out: &mut impl Write, record: &RoundRecord, result: &MatchResult) -> io::Result<()> {
    writeln!(out, "\nRound {}:", record.round_number)?;
    writeln!(out, "- Your move: {}", move_label(record.player_move))?;
    writeln!(out, "- Bot move : {}", move_label(record.bot_move))?;
    writeln!(out, "- Result   : {}", result_label(record.outcome))?;
    writeln!(out, "- Explain  : {}", record.reason)?;
    writeln!(
        out,
        "- Score    : You {} — Bot {}",
        result.scores.player, result.scores.bot
    )
}

/// Print the final verdict. Does nothing while the match is in progress.
pub fn print_final(out: &mut impl Write, result: &MatchResult) -> io::Result<()> {
    let Some(outcome) = result.match_outcome else {
        return Ok(());
    };
    let (you, bot) = (result.scores.player, result.scores.bot);
    writeln!(out, "\nGame over — final result:")?;
    match outcome {
        Outcome::PlayerWin => writeln!(out, "You win! Final score You {} — Bot {}", you, bot),
        Outcome::BotWin => writeln!(out, "Bot wins. Final score You {} — Bot {}", you, bot),
        Outcome::Draw => writeln!(out, "Draw. Final score You {} — Bot {}", you, bot),
    }
}
