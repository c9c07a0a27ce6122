//! Core domain types
//!
//! Word and feedback types shared by every other module.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterStatus, letter_hints};
pub use word::{Word, WordError};

/// Length of every solution and guess word
pub const WORD_LENGTH: usize = 6;

/// Maximum number of guesses per game
pub const MAX_GUESSES: usize = 6;
