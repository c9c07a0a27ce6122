//! Statistics aggregation
//!
//! Running win/loss counts and the guess-distribution histogram. Stats are
//! updated exactly once per completed game and persist across daily
//! solutions.

use serde::{Deserialize, Serialize};

use crate::core::MAX_GUESSES;

/// How a completed game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Won using this many guesses (1 through 6)
    Won { guesses_used: usize },
    /// All guesses used without a match
    Lost,
}

/// Persisted play statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub total_games: u32,
    pub total_wins: u32,
    pub current_streak: u32,
    pub best_streak: u32,
    /// Wins bucketed by guesses used (index 0 = won on the first guess)
    pub win_distribution: [u32; MAX_GUESSES],
}

impl GameStats {
    /// Fold one completed game into the stats
    ///
    /// Pure: returns a new value, the input is untouched. A loss resets the
    /// current streak and leaves the distribution alone.
    #[must_use]
    pub fn add_completed_game(&self, result: GameResult) -> Self {
        let mut next = self.clone();
        next.total_games += 1;

        match result {
            GameResult::Won { guesses_used } => {
                next.total_wins += 1;
                next.current_streak += 1;
                next.best_streak = next.best_streak.max(next.current_streak);
                if let Some(bucket) = guesses_used
                    .checked_sub(1)
                    .and_then(|i| next.win_distribution.get_mut(i))
                {
                    *bucket += 1;
                }
            }
            GameResult::Lost => {
                next.current_streak = 0;
            }
        }

        next
    }

    /// Percentage of games won (0 when no games have been played)
    #[must_use]
    pub fn win_percentage(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            f64::from(self.total_wins) / f64::from(self.total_games) * 100.0
        }
    }
}
