//! Plain-text board formatting

use crate::core::{CODE_LENGTH, Code, Feedback};
use crate::game::TurnRecord;

/// Marker for a peg of the right color in the right slot
pub const EXACT_MARKER: char = 'B';
/// Marker for a peg of the right color in the wrong slot
pub const PARTIAL_MARKER: char = 'W';
/// Marker for an empty or unscored slot
pub const EMPTY_MARKER: char = '_';

fn join_markers(markers: impl Iterator<Item = char>) -> String {
    markers.map(String::from).collect::<Vec<_>>().join(" ")
}

/// Format feedback as grouped markers, e.g. `"B B W _"`
///
/// Exact markers come first, then partial, then absent. The order says
/// nothing about which slot earned which marker.
#[must_use]
pub fn feedback_markers(feedback: Feedback) -> String {
    let exact = std::iter::repeat_n(EXACT_MARKER, usize::from(feedback.exact()));
    let partial = std::iter::repeat_n(PARTIAL_MARKER, usize::from(feedback.partial()));
    let absent = std::iter::repeat_n(EMPTY_MARKER, usize::from(feedback.absent()));
    join_markers(exact.chain(partial).chain(absent))
}

/// Format a guess and its feedback as one board row
#[must_use]
pub fn turn_row(guess: &Code, feedback: Feedback) -> String {
    format!("{guess} | {}", feedback_markers(feedback))
}

/// Row shown for a turn that has not been played yet
#[must_use]
pub fn blank_row() -> String {
    let slots = join_markers(std::iter::repeat_n(EMPTY_MARKER, CODE_LENGTH));
    format!("{slots} | {slots}")
}

/// Render the whole board: played turns oldest first, then one blank row
/// per remaining turn
#[must_use]
pub fn render_board(history: &[TurnRecord], max_turns: usize) -> Vec<String> {
    let blanks = max_turns.saturating_sub(history.len());
    history
        .iter()
        .map(|turn| turn_row(&turn.guess, turn.feedback))
        .chain(std::iter::repeat_with(blank_row).take(blanks))
        .collect()
}
