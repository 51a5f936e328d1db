//! Round tracking
//!
//! A [`Round`] owns the secret, the ordered history of scored guesses and the
//! turn budget. It is the only thing that mutates that history.

use super::{GameError, SecretSource};
use crate::core::{Code, Feedback, GuessError};
use log::{debug, info};

/// Turn budget used when nothing else is configured
pub const DEFAULT_MAX_TURNS: usize = 10;

/// Settings for a new round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    pub max_turns: usize,
}

impl RoundConfig {
    #[must_use]
    pub const fn new(max_turns: usize) -> Self {
        Self { max_turns }
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TURNS)
    }
}

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    /// Won and Lost accept no further guesses
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One submitted guess and the feedback it earned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnRecord {
    pub guess: Code,
    pub feedback: Feedback,
}

/// A single game against one hidden code
#[derive(Debug, Clone)]
pub struct Round {
    secret: Code,
    history: Vec<TurnRecord>,
    max_turns: usize,
}

impl Round {
    /// Start a round, drawing the secret from `source`
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfiguration` if `max_turns` is zero.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Code;
    /// use mastermind::game::{FixedSecret, Round, RoundStatus};
    ///
    /// let secret = Code::parse("RGBY").unwrap();
    /// let mut round = Round::start(10, &mut FixedSecret(secret)).unwrap();
    ///
    /// let feedback = round.submit_raw("rgbo").unwrap();
    /// assert_eq!((feedback.exact(), feedback.partial()), (3, 0));
    ///
    /// assert!(round.submit_raw("RGBY").unwrap().is_solved());
    /// assert_eq!(round.status(), RoundStatus::Won);
    /// ```
    pub fn start<S: SecretSource + ?Sized>(
        max_turns: usize,
        source: &mut S,
    ) -> Result<Self, GameError> {
        if max_turns == 0 {
            return Err(GameError::InvalidConfiguration { max_turns });
        }

        info!("Starting round with {max_turns} turns");
        Ok(Self {
            secret: source.draw(),
            history: Vec::with_capacity(max_turns),
            max_turns,
        })
    }

    /// Start a round from a [`RoundConfig`]
    ///
    /// # Errors
    /// See [`Round::start`].
    pub fn from_config<S: SecretSource + ?Sized>(
        config: RoundConfig,
        source: &mut S,
    ) -> Result<Self, GameError> {
        Self::start(config.max_turns, source)
    }

    /// Score a guess and record it
    ///
    /// # Errors
    /// Returns `GameError::InvalidGuess(GuessError::RoundOver)` once the round
    /// has been won or lost. A rejected guess is not recorded.
    pub fn submit_guess(&mut self, guess: Code) -> Result<Feedback, GameError> {
        if self.status().is_terminal() {
            return Err(GuessError::RoundOver.into());
        }

        let feedback = Feedback::score(&self.secret, &guess);
        self.history.push(TurnRecord { guess, feedback });
        debug!(
            "Turn {}/{}: {guess} -> {} exact, {} partial",
            self.history.len(),
            self.max_turns,
            feedback.exact(),
            feedback.partial()
        );

        match self.status() {
            RoundStatus::Won => info!("Round won in {} turns", self.history.len()),
            RoundStatus::Lost => info!("Round lost after {} turns", self.history.len()),
            RoundStatus::InProgress => {}
        }

        Ok(feedback)
    }

    /// Parse a line of player input and submit it
    ///
    /// # Errors
    /// Returns `GameError::InvalidGuess` if the input is not four known colors
    /// or the round is over.
    pub fn submit_raw(&mut self, input: &str) -> Result<Feedback, GameError> {
        let guess = Code::parse(input)?;
        self.submit_guess(guess)
    }

    /// Current status, derived from the history
    #[must_use]
    pub fn status(&self) -> RoundStatus {
        match self.history.last() {
            Some(turn) if turn.feedback.is_solved() => RoundStatus::Won,
            _ if self.history.len() >= self.max_turns => RoundStatus::Lost,
            _ => RoundStatus::InProgress,
        }
    }

    /// Turns left before the round is lost
    #[inline]
    #[must_use]
    pub fn turns_remaining(&self) -> usize {
        self.max_turns.saturating_sub(self.history.len())
    }

    #[inline]
    #[must_use]
    pub fn turns_played(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub const fn max_turns(&self) -> usize {
        self.max_turns
    }

    /// Scored guesses, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// The secret, once the round is over
    #[must_use]
    pub fn reveal_secret(&self) -> Option<Code> {
        self.status().is_terminal().then_some(self.secret)
    }
}
