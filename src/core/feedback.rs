//! Guess scoring
//!
//! Feedback counts how many pegs of a guess are the right color in the right
//! slot (exact) and how many are the right color in the wrong slot (partial).
//!
//! Scoring uses color-frequency overlap: the per-color minimum of the guess
//! and secret counts gives every color credit at most as many times as it
//! appears in both codes, and subtracting the exact hits leaves the partials.

use super::code::CODE_LENGTH;
use super::{Code, Color};

/// Result of scoring one guess against the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    exact: u8,
    partial: u8,
}

impl Feedback {
    /// Four exact matches
    pub const SOLVED: Self = Self {
        exact: CODE_LENGTH as u8,
        partial: 0,
    };

    /// Build feedback from raw counts
    ///
    /// Returns `None` if `exact + partial` exceeds the code length.
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, partial: u8) -> Option<Self> {
        match exact.checked_add(partial) {
            Some(total) if total as usize <= CODE_LENGTH => Some(Self { exact, partial }),
            _ => None,
        }
    }

    /// Score `guess` against `secret`
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Feedback};
    ///
    /// let secret = Code::parse("RRGG").unwrap();
    /// let guess = Code::parse("GGGG").unwrap();
    ///
    /// let feedback = Feedback::score(&secret, &guess);
    /// assert_eq!(feedback.exact(), 2);
    /// assert_eq!(feedback.partial(), 0);
    /// ```
    #[must_use]
    pub fn score(secret: &Code, guess: &Code) -> Self {
        let exact = secret
            .colors()
            .iter()
            .zip(guess.colors())
            .filter(|(s, g)| s == g)
            .count() as u8;

        let secret_counts = secret.color_counts();
        let guess_counts = guess.color_counts();
        let overlap: u8 = Color::ALL
            .iter()
            .map(|color| {
                let in_secret = secret_counts.get(color).copied().unwrap_or(0);
                let in_guess = guess_counts.get(color).copied().unwrap_or(0);
                in_secret.min(in_guess)
            })
            .sum();

        Self {
            exact,
            partial: overlap - exact,
        }
    }

    /// Pegs with the right color in the right slot
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Pegs with a color present in the secret but in a different slot
    #[inline]
    #[must_use]
    pub const fn partial(self) -> u8 {
        self.partial
    }

    /// Pegs whose color earned no credit
    #[inline]
    #[must_use]
    pub const fn absent(self) -> u8 {
        CODE_LENGTH as u8 - self.exact - self.partial
    }

    /// Check whether the guess matched the secret exactly
    #[inline]
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.exact as usize == CODE_LENGTH
    }
}

/// Score `guess` against `secret`; shorthand for [`Feedback::score`]
#[must_use]
pub fn score(secret: &Code, guess: &Code) -> Feedback {
    Feedback::score(secret, guess)
}
