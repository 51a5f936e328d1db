//! Mastermind
//!
//! Break a hidden four-peg code drawn from six colors. Each guess is scored
//! with exact matches (right color, right slot) and partial matches (right
//! color, wrong slot).
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Code, score};
//!
//! let secret = Code::parse("RGBY").unwrap();
//! let guess = Code::parse("RBGO").unwrap();
//!
//! let feedback = score(&secret, &guess);
//! assert_eq!(feedback.exact(), 1);
//! assert_eq!(feedback.partial(), 2);
//! ```

// Core domain types
pub mod core;

// Round state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
