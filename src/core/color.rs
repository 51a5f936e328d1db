//! Peg colors
//!
//! The game uses a fixed alphabet of six colors, each written as a single
//! uppercase letter.

use std::fmt;

/// A single peg color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Purple,
}

impl Color {
    /// Every color in the alphabet, in display order
    pub const ALL: [Self; 6] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::Orange,
        Self::Purple,
    ];

    /// Number of colors in the alphabet
    pub const COUNT: usize = Self::ALL.len();

    /// Parse a color from its symbol
    ///
    /// Only the uppercase symbol is accepted; callers normalize case first.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Color;
    ///
    /// assert_eq!(Color::from_symbol('R'), Some(Color::Red));
    /// assert_eq!(Color::from_symbol('r'), None);
    /// assert_eq!(Color::from_symbol('X'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'R' => Some(Self::Red),
            'G' => Some(Self::Green),
            'B' => Some(Self::Blue),
            'Y' => Some(Self::Yellow),
            'O' => Some(Self::Orange),
            'P' => Some(Self::Purple),
            _ => None,
        }
    }

    /// The single-letter symbol for this color
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Yellow => 'Y',
            Self::Orange => 'O',
            Self::Purple => 'P',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
