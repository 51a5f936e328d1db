//! Four-peg code representation
//!
//! A Code is both the hidden secret and each guess the player makes.

use super::Color;
use rand::Rng;
use rustc_hash::FxHashMap;
use std::fmt;

/// Number of pegs in every code
pub const CODE_LENGTH: usize = 4;

/// An ordered sequence of exactly four colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code([Color; CODE_LENGTH]);

/// Why a piece of player input is not a usable guess
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    #[error("A guess needs exactly {expected} colors, got {found}")]
    WrongLength { expected: usize, found: usize },

    #[error("Can't choose color {}", join_symbols(.0))]
    UnknownColors(Vec<char>),

    #[error("The round is already over")]
    RoundOver,
}

fn join_symbols(symbols: &[char]) -> String {
    symbols
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Normalize a raw input line into single-character color tokens
///
/// Uppercases everything and drops whitespace, so `"r g b y\n"` and `"RGBY"`
/// produce the same tokens. Every typed character yields exactly one token;
/// a character whose uppercase form is not a single char is kept as typed.
#[must_use]
pub fn normalize(input: &str) -> Vec<char> {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) => u,
                _ => c,
            }
        })
        .collect()
}

impl Code {
    /// Create a code from four colors
    #[inline]
    #[must_use]
    pub const fn new(colors: [Color; CODE_LENGTH]) -> Self {
        Self(colors)
    }

    /// Build a code from already-normalized tokens
    ///
    /// # Errors
    /// Returns `GuessError::WrongLength` if there are not exactly four tokens,
    /// otherwise `GuessError::UnknownColors` listing every token outside the
    /// alphabet.
    pub fn from_tokens(tokens: &[char]) -> Result<Self, GuessError> {
        if tokens.len() != CODE_LENGTH {
            return Err(GuessError::WrongLength {
                expected: CODE_LENGTH,
                found: tokens.len(),
            });
        }

        let unknown: Vec<char> = tokens
            .iter()
            .copied()
            .filter(|&t| Color::from_symbol(t).is_none())
            .collect();
        if !unknown.is_empty() {
            return Err(GuessError::UnknownColors(unknown));
        }

        let mut colors = [Color::Red; CODE_LENGTH];
        for (slot, &token) in colors.iter_mut().zip(tokens) {
            if let Some(color) = Color::from_symbol(token) {
                *slot = color;
            }
        }
        Ok(Self(colors))
    }

    /// Parse a line of player input into a code
    ///
    /// # Errors
    /// See [`Code::from_tokens`].
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Color, GuessError};
    ///
    /// let code = Code::parse("rgby").unwrap();
    /// assert_eq!(code.colors()[3], Color::Yellow);
    ///
    /// assert!(matches!(Code::parse("RGB"), Err(GuessError::WrongLength { found: 3, .. })));
    /// assert_eq!(Code::parse("RGBX"), Err(GuessError::UnknownColors(vec!['X'])));
    /// ```
    pub fn parse(input: &str) -> Result<Self, GuessError> {
        Self::from_tokens(&normalize(input))
    }

    /// Draw a code uniformly at random, each slot independently
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut colors = [Color::Red; CODE_LENGTH];
        for slot in &mut colors {
            *slot = Color::ALL[rng.random_range(0..Color::COUNT)];
        }
        Self(colors)
    }

    /// The colors in slot order
    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &[Color; CODE_LENGTH] {
        &self.0
    }

    /// Occurrences of each color across all four slots
    ///
    /// Colors that do not appear are absent from the map.
    #[must_use]
    pub fn color_counts(&self) -> FxHashMap<Color, u8> {
        let mut counts = FxHashMap::default();
        for &color in &self.0 {
            *counts.entry(color).or_insert(0) += 1;
        }
        counts
    }
}

impl std::str::FromStr for Code {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a} {b} {c} {d}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn code_parse_valid() {
        let code = Code::parse("RGBY").unwrap();
        assert_eq!(
            code.colors(),
            &[Color::Red, Color::Green, Color::Blue, Color::Yellow]
        );
    }

    #[test]
    fn code_parse_uppercase_normalized() {
        assert_eq!(Code::parse("opgr").unwrap(), Code::parse("OPGR").unwrap());
        assert_eq!(Code::parse("oPgR").unwrap(), Code::parse("OPGR").unwrap());
    }

    #[test]
    fn code_parse_ignores_whitespace() {
        assert_eq!(
            Code::parse("  r g b y\n").unwrap(),
            Code::parse("RGBY").unwrap()
        );
    }

    #[test]
    fn code_parse_invalid_length() {
        assert_eq!(
            Code::parse("RGBYO"),
            Err(GuessError::WrongLength {
                expected: 4,
                found: 5
            })
        );
        assert_eq!(
            Code::parse(""),
            Err(GuessError::WrongLength {
                expected: 4,
                found: 0
            })
        );
    }

    #[test]
    fn code_parse_length_checked_before_colors() {
        // Too short and full of bad symbols: length wins
        assert!(matches!(
            Code::parse("XZ"),
            Err(GuessError::WrongLength { found: 2, .. })
        ));
    }

    #[test]
    fn code_parse_reports_every_unknown_color() {
        assert_eq!(
            Code::parse("RxGz"),
            Err(GuessError::UnknownColors(vec!['X', 'Z']))
        );
    }

    #[test]
    fn guess_error_messages_name_the_problem() {
        let err = Code::parse("RGBXZ").unwrap_err();
        assert_eq!(err.to_string(), "A guess needs exactly 4 colors, got 5");

        let err = Code::parse("R1G!").unwrap_err();
        assert_eq!(err.to_string(), "Can't choose color 1, !");
    }

    #[test]
    fn normalize_keeps_one_token_per_character() {
        // 'ß' uppercases to "SS"; it must stay a single token
        assert_eq!(normalize("ßrgb"), vec!['ß', 'R', 'G', 'B']);
        assert_eq!(
            Code::parse("ßRGB"),
            Err(GuessError::UnknownColors(vec!['ß']))
        );
        assert_eq!(
            Code::parse("ßRG"),
            Err(GuessError::WrongLength {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn code_from_str_trait() {
        let code: Code = "PPOO".parse().unwrap();
        assert_eq!(code.colors()[0], Color::Purple);
        assert!("PPO".parse::<Code>().is_err());
    }

    #[test]
    fn code_color_counts_with_repeats() {
        let code = Code::parse("RRGG").unwrap();
        let counts = code.color_counts();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts.get(&Color::Red), Some(&2));
        assert_eq!(counts.get(&Color::Green), Some(&2));
        assert_eq!(counts.get(&Color::Blue), None);
    }

    #[test]
    fn code_color_counts_all_same() {
        let counts = Code::parse("YYYY").unwrap().color_counts();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(&Color::Yellow), Some(&4));
    }

    #[test]
    fn code_random_is_deterministic_for_a_seed() {
        let a = Code::random(&mut StdRng::seed_from_u64(42));
        let b = Code::random(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn code_random_covers_the_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.extend(Code::random(&mut rng).colors().iter().copied());
        }
        assert_eq!(seen.len(), Color::COUNT);
    }

    #[test]
    fn code_display_space_joined() {
        let code = Code::parse("RGBO").unwrap();
        assert_eq!(format!("{code}"), "R G B O");
    }
}
