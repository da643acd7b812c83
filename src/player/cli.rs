#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use rand::rngs::SmallRng;

use crate::core::{PlayerView, RoundRecord};

use super::Player;

/// Interactive player reading one line per round.
///
/// The line is passed through untouched; a read error or end of input
/// submits empty text, which the engine treats as a forfeit.
pub struct CliPlayer {
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
}

impl CliPlayer {
    /// Player bound to stdin and stdout.
    pub fn new() -> Self {
        Self::with_io(Box::new(io::BufReader::new(io::stdin())), Box::new(io::stdout()))
    }

    pub fn with_io(input: Box<dyn BufRead>, output: Box<dyn Write>) -> Self {
        Self { input, output }
    }

    fn prompt(&mut self, view: &PlayerView) -> io::Result<String> {
        write!(
            self.output,
            "\nEnter your move for round {} (rock/paper/scissors/bomb): ",
            view.round_number
        )?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line)
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for CliPlayer {
    fn choose_move(&mut self, _rng: &mut SmallRng, view: &PlayerView) -> String {
        match self.prompt(view) {
            Ok(line) => line,
            Err(e) => {
                log::warn!("failed to read move: {}", e);
                String::new()
            }
        }
    }

    fn handle_round_result(&mut self, record: &RoundRecord) {
        if let Some(reason) = record.rejections.player {
            let _ = writeln!(self.output, "Note: {}. This wastes the round.", reason);
        }
    }
}
