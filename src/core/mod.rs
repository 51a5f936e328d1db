//! Core domain types for Mastermind
//!
//! Colors, codes and the scoring of a guess against the secret. Everything
//! here is pure and deterministic.

mod code;
mod color;
mod feedback;

pub use code::{CODE_LENGTH, Code, GuessError, normalize};
pub use color::Color;
pub use feedback::{Feedback, score};
