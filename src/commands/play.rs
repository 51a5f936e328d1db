//! Interactive play
//!
//! Line-based game loop: read a guess, score it, redraw the board.

use crate::game::{GameError, Round, RoundConfig, RoundStatus, SecretSource};
use crate::output::{print_board, print_outcome};
use log::{info, warn};
use std::io::{self, BufRead, Write};

/// Errors that end a session
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("could not start round: {0}")]
    Game(#[from] GameError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// How a session finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Won { turns: usize },
    Lost,
    /// Input ran out before the round ended
    Abandoned,
}

/// Drives one round against a line-based input and a text output
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Play one round to the end
    ///
    /// Malformed guesses are reported and re-read without using up a turn.
    ///
    /// # Errors
    /// Returns `SessionError::Game` if `config` is invalid and
    /// `SessionError::Io` if reading input or writing output fails.
    pub fn play<S: SecretSource + ?Sized>(
        &mut self,
        config: RoundConfig,
        source: &mut S,
    ) -> Result<SessionOutcome, SessionError> {
        let mut round = Round::from_config(config, source)?;
        print_board(&mut self.output, &round)?;

        while !round.status().is_terminal() {
            if !self.take_turn(&mut round)? {
                info!("Input closed after {} turns", round.turns_played());
                return Ok(SessionOutcome::Abandoned);
            }
            print_board(&mut self.output, &round)?;
        }

        print_outcome(&mut self.output, &round)?;
        self.output.flush()?;

        Ok(match round.status() {
            RoundStatus::Won => SessionOutcome::Won {
                turns: round.turns_played(),
            },
            _ => SessionOutcome::Lost,
        })
    }

    /// Prompt until one guess is accepted
    ///
    /// Returns `false` if the input ends first.
    fn take_turn(&mut self, round: &mut Round) -> Result<bool, SessionError> {
        writeln!(self.output, "What's your guess?")?;
        self.output.flush()?;

        loop {
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };

            match round.submit_raw(&line) {
                Ok(_) => return Ok(true),
                Err(GameError::InvalidGuess(err)) => {
                    warn!("Rejected guess {:?}: {err}", line.trim_end());
                    writeln!(self.output, "{err}")?;
                    writeln!(self.output, "Invalid guess. Try again?")?;
                    self.output.flush()?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Read one line, replacing invalid UTF-8 with `U+FFFD`
    ///
    /// Undecodable bytes become tokens outside the alphabet, so they are
    /// rejected as a bad guess instead of ending the session.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

/// Play one round on stdin/stdout
///
/// # Errors
/// See [`Session::play`].
pub fn run_play<S: SecretSource + ?Sized>(
    config: RoundConfig,
    source: &mut S,
) -> Result<SessionOutcome, SessionError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(stdin.lock(), stdout.lock()).play(config, source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Code;
    use crate::game::FixedSecret;
    use std::io::Cursor;

    fn play(secret: &str, max_turns: usize, input: &str) -> (SessionOutcome, String) {
        colored::control::set_override(false);
        let mut output = Vec::new();
        let mut source = FixedSecret(Code::parse(secret).unwrap());
        let outcome = Session::new(Cursor::new(input.to_string()), &mut output)
            .play(RoundConfig::new(max_turns), &mut source)
            .unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn session_win_reports_turns() {
        let (outcome, text) = play("RGBY", 10, "rgbo\nrgby\n");
        assert_eq!(outcome, SessionOutcome::Won { turns: 2 });
        assert!(text.contains("R G B O | B B B _"));
        assert!(text.contains("R G B Y | B B B B"));
        assert!(text.ends_with("You win!\n"));
    }

    #[test]
    fn session_loss_after_budget() {
        let (outcome, text) = play("RGBY", 2, "OOOO\nPPPP\n");
        assert_eq!(outcome, SessionOutcome::Lost);
        assert!(text.contains("Game Over (you lose.)"));
        assert!(text.contains("The code was R G B Y"));
    }

    #[test]
    fn session_invalid_guess_reprompts_without_turn() {
        let (outcome, text) = play("RGBY", 1, "RGB\nRGBX\nRGBY\n");
        assert_eq!(outcome, SessionOutcome::Won { turns: 1 });
        assert_eq!(text.matches("Invalid guess. Try again?").count(), 2);
        assert!(text.contains("A guess needs exactly 4 colors, got 3"));
        assert!(text.contains("Can't choose color X"));
        // One prompt per turn, not per attempt
        assert_eq!(text.matches("What's your guess?").count(), 1);
    }

    #[test]
    fn session_invalid_utf8_reprompts() {
        colored::control::set_override(false);
        let mut output = Vec::new();
        let mut source = FixedSecret(Code::parse("RGBY").unwrap());
        let outcome = Session::new(Cursor::new(b"\xff\xfeRG\nRGBY\n".to_vec()), &mut output)
            .play(RoundConfig::new(10), &mut source)
            .unwrap();
        assert_eq!(outcome, SessionOutcome::Won { turns: 1 });

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Invalid guess. Try again?").count(), 1);
        assert!(text.contains("Can't choose color \u{fffd}, \u{fffd}"));
    }

    #[test]
    fn session_eof_abandons() {
        let (outcome, text) = play("RGBY", 10, "OOOO\n");
        assert_eq!(outcome, SessionOutcome::Abandoned);
        assert!(!text.contains("You win!"));
        assert!(!text.contains("Game Over"));
    }

    #[test]
    fn session_zero_turns_is_an_error() {
        let mut output = Vec::new();
        let mut source = FixedSecret(Code::parse("RGBY").unwrap());
        let result = Session::new(Cursor::new(String::new()), &mut output)
            .play(RoundConfig::new(0), &mut source);
        assert!(matches!(
            result,
            Err(SessionError::Game(GameError::InvalidConfiguration { .. }))
        ));
        assert!(output.is_empty());
    }
}
