//! Guess feedback calculation
//!
//! Compares a guess against the solution and classifies every letter as
//! correct, present-in-the-wrong-position, or absent. Duplicate letters are
//! handled with the standard two-pass rule: exact matches consume solution
//! letters first, then remaining letters are matched left to right.

use rustc_hash::FxHashMap;

use super::{WORD_LENGTH, Word};

/// Per-letter feedback classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    /// Letter is in the solution at this exact position
    Correct,
    /// Letter is in the solution but at a different position
    Present,
    /// Letter is not in the solution (or all its occurrences are used up)
    Absent,
}

/// Feedback for one complete guess
///
/// One `LetterStatus` per position. Derived from the guess and the solution,
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

impl Feedback {
    /// Evaluate a guess against the solution
    ///
    /// Pure function. Lengths always match because both arguments are
    /// validated [`Word`]s.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches and consume those solution
    ///    letters from the unmatched pool.
    /// 2. Second pass: for each remaining position, left to right, mark
    ///    `Present` if the letter still has an unconsumed occurrence in the
    ///    pool, otherwise `Absent`.
    ///
    /// A guess with more copies of a letter than the solution contains marks
    /// only as many as remain, the rest come back `Absent`.
    #[must_use]
    pub fn evaluate(guess: &Word, solution: &Word) -> Self {
        let mut result = [LetterStatus::Absent; WORD_LENGTH];
        let mut unmatched: FxHashMap<u8, u8> = solution.char_counts();

        // First pass: exact matches
        // Allow: Index needed to access guess[i], solution[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            let letter = guess.chars()[i];
            if letter == solution.chars()[i] {
                result[i] = LetterStatus::Correct;
                if let Some(count) = unmatched.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong-position matches from the remaining pool
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == LetterStatus::Correct {
                continue;
            }
            let letter = guess.chars()[i];
            if let Some(count) = unmatched.get_mut(&letter)
                && *count > 0
            {
                result[i] = LetterStatus::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Per-position statuses
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// True if every position is `Correct` (the guess equals the solution)
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Convert feedback to an emoji row like "🟩🟨⬜🟩🟨⬜"
    ///
    /// Used by the share/export summary.
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|status| match status {
                LetterStatus::Correct => '🟩',
                LetterStatus::Present => '🟨',
                LetterStatus::Absent => '⬜',
            })
            .collect()
    }
}

/// Best-known status per letter across all submitted guesses
///
/// For keyboard hinting: `Correct` beats `Present` beats `Absent`, and a
/// letter never appears in the map before it has been guessed.
#[must_use]
pub fn letter_hints(guesses: &[Word], solution: &Word) -> FxHashMap<u8, LetterStatus> {
    fn rank(status: LetterStatus) -> u8 {
        match status {
            LetterStatus::Correct => 2,
            LetterStatus::Present => 1,
            LetterStatus::Absent => 0,
        }
    }

    let mut hints: FxHashMap<u8, LetterStatus> = FxHashMap::default();
    for guess in guesses {
        let feedback = Feedback::evaluate(guess, solution);
        for (i, &status) in feedback.statuses().iter().enumerate() {
            let letter = guess.char_at(i);
            hints
                .entry(letter)
                .and_modify(|known| {
                    if rank(status) > rank(*known) {
                        *known = status;
                    }
                })
                .or_insert(status);
        }
    }
    hints
}

#[cfg(test)]
mod tests {
    use super::LetterStatus::{Absent, Correct, Present};
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn evaluate_all_correct() {
        let solution = word("camisa");
        let feedback = Feedback::evaluate(&solution, &solution);

        assert_eq!(feedback.statuses(), &[Correct; 6]);
        assert!(feedback.is_win());
    }

    #[test]
    fn evaluate_all_absent() {
        let feedback = Feedback::evaluate(&word("dinero"), &word("llamas"));
        assert_eq!(
            feedback.statuses(),
            &[Absent, Absent, Absent, Absent, Absent, Absent]
        );
        assert!(!feedback.is_win());
    }

    #[test]
    fn evaluate_camion_vs_camisa() {
        // c-a-m-i match in place, o and n are not in the solution
        let feedback = Feedback::evaluate(&word("camion"), &word("camisa"));
        assert_eq!(
            feedback.statuses(),
            &[Correct, Correct, Correct, Correct, Absent, Absent]
        );
    }

    #[test]
    fn evaluate_wrong_positions() {
        // sonado vs dinero: n and the final o match in place; the exact
        // matches consume their pool entries, so the o at position 1 has
        // nothing left and comes back Absent. The d is Present.
        let feedback = Feedback::evaluate(&word("sonado"), &word("dinero"));
        assert_eq!(
            feedback.statuses(),
            &[Absent, Absent, Correct, Absent, Present, Correct]
        );
    }

    #[test]
    fn evaluate_duplicate_letters_consume_pool() {
        // Guess has three a's, solution "camisa" has two, and both solution
        // a's line up exactly with guess positions 1 and 5. The third guess
        // 'a' (position 3) finds an empty pool and must be Absent.
        let feedback = Feedback::evaluate(&word("banana"), &word("camisa"));
        assert_eq!(
            feedback.statuses(),
            &[Absent, Correct, Absent, Absent, Absent, Correct]
        );
    }

    #[test]
    fn evaluate_correct_consumes_before_present() {
        // Solution "asalto" has two a's. Guess "altura": position 0 'a' is
        // Correct (consumes one), 'l' present, 't' present, 'u' absent,
        // 'r' absent, trailing 'a' takes the last pooled 'a' as Present.
        let feedback = Feedback::evaluate(&word("altura"), &word("asalto"));
        assert_eq!(
            feedback.statuses(),
            &[Correct, Present, Present, Absent, Absent, Present]
        );
    }

    #[test]
    fn evaluate_present_count_never_exceeds_solution_count() {
        let solution = word("camisa");
        for guess in ["banana", "ananas", "salsas", "camisa", "maasai"] {
            let Ok(guess) = Word::new(guess) else {
                continue;
            };
            let feedback = Feedback::evaluate(&guess, &solution);

            // For each letter, correct + present marks never exceed the
            // letter's occurrence count in the solution.
            for letter in b'a'..=b'z' {
                let marks = feedback
                    .statuses()
                    .iter()
                    .zip(guess.chars())
                    .filter(|&(s, &c)| c == letter && *s != Absent)
                    .count();
                let in_solution =
                    solution.chars().iter().filter(|&&c| c == letter).count();
                assert!(
                    marks <= in_solution,
                    "letter {} over-marked in {} vs {}",
                    letter as char,
                    guess,
                    solution
                );
            }
        }
    }

    #[test]
    fn feedback_to_emoji() {
        let feedback = Feedback::evaluate(&word("camion"), &word("camisa"));
        assert_eq!(feedback.to_emoji(), "🟩🟩🟩🟩⬜⬜");

        let win = Feedback::evaluate(&word("camisa"), &word("camisa"));
        assert_eq!(win.to_emoji(), "🟩🟩🟩🟩🟩🟩");
    }

    #[test]
    fn letter_hints_best_status_wins() {
        let solution = word("camisa");
        let guesses = vec![word("sonado"), word("camion")];
        let hints = letter_hints(&guesses, &solution);

        // 'c' correct from the second guess
        assert_eq!(hints.get(&b'c'), Some(&Correct));
        // 's' present from the first guess ("camisa" has an s)
        assert_eq!(hints.get(&b's'), Some(&Present));
        // 'n' absent in both guesses
        assert_eq!(hints.get(&b'n'), Some(&Absent));
        // never guessed letters have no entry
        assert_eq!(hints.get(&b'z'), None);
    }

    #[test]
    fn letter_hints_upgrade_only() {
        let solution = word("camisa");
        // 'a' present in first guess, correct in second; must end Correct
        let guesses = vec![word("altura"), word("camisa")];
        let hints = letter_hints(&guesses, &solution);
        assert_eq!(hints.get(&b'a'), Some(&Correct));
    }
}
