//! Terminal display of a round

use super::formatters::render_board;
use crate::game::{Round, RoundStatus};
use colored::Colorize;
use std::io::{self, Write};

pub const WIN_MESSAGE: &str = "You win!";
pub const LOSE_MESSAGE: &str = "Game Over (you lose.)";

/// Write every board row, played turns first
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_board<W: Write>(out: &mut W, round: &Round) -> io::Result<()> {
    for row in render_board(round.history(), round.max_turns()) {
        writeln!(out, "{row}")?;
    }
    Ok(())
}

/// Write the end-of-round message, revealing the code on a loss
///
/// Writes nothing while the round is still in progress.
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_outcome<W: Write>(out: &mut W, round: &Round) -> io::Result<()> {
    match round.status() {
        RoundStatus::Won => writeln!(out, "{}", WIN_MESSAGE.green().bold()),
        RoundStatus::Lost => {
            writeln!(out, "{}", LOSE_MESSAGE.red().bold())?;
            if let Some(secret) = round.reveal_secret() {
                writeln!(out, "The code was {}", secret.to_string().bright_yellow())?;
            }
            Ok(())
        }
        RoundStatus::InProgress => Ok(()),
    }
}
