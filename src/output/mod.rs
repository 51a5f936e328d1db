//! Terminal output formatting
//!
//! Board rendering and end-of-round messages.

pub mod display;
pub mod formatters;

pub use display::{LOSE_MESSAGE, WIN_MESSAGE, print_board, print_outcome};
pub use formatters::{blank_row, feedback_markers, render_board, turn_row};
