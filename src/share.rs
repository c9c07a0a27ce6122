//! Share/export summary
//!
//! Renders a finished game as the familiar spoiler-free emoji grid, derived
//! purely from the guesses and the solution.

use crate::core::{Feedback, MAX_GUESSES, Word};

/// Textual share summary for a game
///
/// Header is `Palabra #<day> <score>/6` where score is the number of guesses
/// used on a win or `X` on a loss, followed by one emoji row per guess.
#[must_use]
pub fn share_text(day: u64, guesses: &[Word], solution: &Word) -> String {
    // Score is the 1-based index of the winning guess; in a normal game that
    // is the last entry, but hand-edited storage can put it earlier.
    let score = guesses
        .iter()
        .position(|g| g == solution)
        .map_or_else(|| "X".to_string(), |i| (i + 1).to_string());

    let mut text = format!("Palabra #{day} {score}/{MAX_GUESSES}\n");
    for guess in guesses {
        text.push('\n');
        text.push_str(&Feedback::evaluate(guess, solution).to_emoji());
    }
    text
}
