//! Word source: embedded word lists, dictionary membership, daily solution
//!
//! The answers list supplies the daily solution (one per day, cycling), the
//! allowed list is the superset of guessable words.

mod embedded;
pub mod loader;

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use rustc_hash::FxHashSet;

use crate::core::Word;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

/// Launch date (2022-01-10) in whole days since the Unix epoch.
/// Day index 0 maps to the first answer word.
const LAUNCH_EPOCH_DAYS: u64 = 19002;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Dictionary used for guess validation
///
/// Backed by a hash set for O(1) membership tests. Word order is irrelevant.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from a list of words
    #[must_use]
    pub fn from_words(words: &[Word]) -> Self {
        Self {
            words: words.iter().map(|w| w.text().to_string()).collect(),
        }
    }

    /// Dictionary over the embedded allowed list
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            words: ALLOWED.iter().map(|&s| s.to_string()).collect(),
        }
    }

    /// Membership test
    ///
    /// Words are lowercase by construction, so no further normalization is
    /// needed here.
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word.text())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Day index for a point in time
///
/// Whole days elapsed since the launch date. Clocks before the launch date
/// (or before the Unix epoch) saturate to day 0.
#[must_use]
pub fn day_index(now: SystemTime) -> u64 {
    let days_since_epoch = now
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_secs()
        / SECONDS_PER_DAY;
    days_since_epoch.saturating_sub(LAUNCH_EPOCH_DAYS)
}

/// Solution word for a given day index
///
/// Cycles through the embedded answers list.
///
/// # Panics
/// Will not panic - the embedded answers are validated 6-letter words.
#[must_use]
pub fn solution_for_day(index: u64) -> Word {
    let text = ANSWERS[(index % ANSWERS.len() as u64) as usize];
    Word::new(text).expect("embedded answers are validated at build time")
}
