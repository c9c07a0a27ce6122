//! Guess lifecycle state machine
//!
//! A `Game` consumes letter/delete/enter input events, validates and appends
//! guesses, and tracks the terminal win/loss status. Guesses are append-only
//! and capped at [`MAX_GUESSES`]; once the game is won or lost all further
//! input is ignored.

use crate::core::{Feedback, MAX_GUESSES, WORD_LENGTH, Word};
use crate::wordlists::Dictionary;

/// Lifecycle status of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Guesses remain and none matched the solution yet
    InProgress,
    /// Some guess equals the solution
    Won,
    /// All six guesses used without a match
    Lost,
}

/// Result of submitting the current buffer with Enter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Game already over; input ignored
    Ignored,
    /// Buffer shorter than the word length; nothing changed
    NotEnoughLetters,
    /// Buffer is not in the dictionary; nothing changed
    WordNotFound,
    /// Guess appended, game continues
    Accepted,
    /// Guess appended and it matched the solution
    Won { guesses_used: usize },
    /// Sixth guess appended without a match
    Lost,
}

/// A single game against one solution word
#[derive(Debug, Clone)]
pub struct Game {
    solution: Word,
    guesses: Vec<Word>,
    buffer: String,
    status: GameStatus,
}

impl Game {
    /// Start a fresh game with no guesses
    #[must_use]
    pub fn new(solution: Word) -> Self {
        Self {
            solution,
            guesses: Vec::new(),
            buffer: String::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Rebuild a game from persisted guesses
    ///
    /// The win/loss status is re-derived from the guesses themselves, never
    /// taken from storage. Anything beyond six guesses is dropped.
    #[must_use]
    pub fn restore(solution: Word, mut guesses: Vec<Word>) -> Self {
        guesses.truncate(MAX_GUESSES);
        let status = derive_status(&guesses, &solution);
        Self {
            solution,
            guesses,
            buffer: String::new(),
            status,
        }
    }

    #[must_use]
    pub fn solution(&self) -> &Word {
        &self.solution
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Letters typed so far for the next guess
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the game is won or lost
    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self.status, GameStatus::InProgress)
    }

    /// Feedback rows for all submitted guesses, in order
    #[must_use]
    pub fn feedback_rows(&self) -> Vec<Feedback> {
        self.guesses
            .iter()
            .map(|guess| Feedback::evaluate(guess, &self.solution))
            .collect()
    }

    /// Append a typed letter to the buffer
    ///
    /// Silent no-op if the buffer is full, all guesses are used, the game is
    /// over, or the character is not a letter.
    pub fn on_char(&mut self, c: char) {
        if self.is_over() || self.guesses.len() >= MAX_GUESSES {
            return;
        }
        if self.buffer.len() < WORD_LENGTH && c.is_ascii_alphabetic() {
            self.buffer.push(c.to_ascii_lowercase());
        }
    }

    /// Remove the last typed letter; no-op on an empty buffer
    pub fn on_delete(&mut self) {
        if self.is_over() {
            return;
        }
        self.buffer.pop();
    }

    /// Submit the current buffer as a guess
    ///
    /// Validation failures leave the buffer and guess list untouched so the
    /// player can correct the word. An accepted guess clears the buffer and
    /// may end the game.
    pub fn on_enter(&mut self, dictionary: &Dictionary) -> SubmitOutcome {
        if self.is_over() {
            return SubmitOutcome::Ignored;
        }

        if self.buffer.len() != WORD_LENGTH {
            return SubmitOutcome::NotEnoughLetters;
        }

        // The buffer only ever receives ASCII letters, so this cannot fail,
        // but an unknown word is the right answer if it somehow does.
        let Ok(guess) = Word::new(self.buffer.as_str()) else {
            return SubmitOutcome::WordNotFound;
        };

        if !dictionary.contains(&guess) {
            return SubmitOutcome::WordNotFound;
        }

        let winning = guess == self.solution;
        self.guesses.push(guess);
        self.buffer.clear();

        if winning {
            self.status = GameStatus::Won;
            SubmitOutcome::Won {
                guesses_used: self.guesses.len(),
            }
        } else if self.guesses.len() == MAX_GUESSES {
            self.status = GameStatus::Lost;
            SubmitOutcome::Lost
        } else {
            SubmitOutcome::Accepted
        }
    }
}

fn derive_status(guesses: &[Word], solution: &Word) -> GameStatus {
    if guesses.iter().any(|g| g == solution) {
        GameStatus::Won
    } else if guesses.len() == MAX_GUESSES {
        GameStatus::Lost
    } else {
        GameStatus::InProgress
    }
}
