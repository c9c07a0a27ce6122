//! Durable local persistence
//!
//! Two independent JSON records in a data directory: the in-progress game
//! state (keyed by solution identity) and the long-lived statistics. Missing
//! or malformed files are treated as absent and never surface to the player.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::Word;
use crate::game::Game;
use crate::stats::GameStats;

const STATE_FILE: &str = "state.json";
const STATS_FILE: &str = "stats.json";

/// Persisted game-state record
#[derive(Debug, Serialize, Deserialize)]
struct StoredGame {
    solution: Word,
    guesses: Vec<Word>,
}

/// File-backed store for game state and statistics
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Store rooted at a specific directory
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store at the default data directory
    ///
    /// `$PALABRA_DATA_DIR` if set, otherwise `$XDG_DATA_HOME/palabra`, falling
    /// back to `~/.local/share/palabra`.
    #[must_use]
    pub fn open_default() -> Self {
        Self::new(default_dir())
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist the game's solution and guesses, overwriting the previous record
    ///
    /// # Errors
    /// Returns an I/O error if the directory cannot be created or the file
    /// cannot be written.
    pub fn save_game(&self, game: &Game) -> io::Result<()> {
        let record = StoredGame {
            solution: game.solution().clone(),
            guesses: game.guesses().to_vec(),
        };
        self.write_json(STATE_FILE, &record)
    }

    /// Load the persisted guesses for the current solution
    ///
    /// Returns `None` when no record exists, the record is malformed, or it
    /// was written for a different solution (stale data from a previous day).
    #[must_use]
    pub fn load_game(&self, current_solution: &Word) -> Option<Vec<Word>> {
        let record: StoredGame = self.read_json(STATE_FILE)?;
        if record.solution != *current_solution {
            return None;
        }
        Some(record.guesses)
    }

    /// Persist the statistics record
    ///
    /// # Errors
    /// Returns an I/O error if the directory cannot be created or the file
    /// cannot be written.
    pub fn save_stats(&self, stats: &GameStats) -> io::Result<()> {
        self.write_json(STATS_FILE, stats)
    }

    /// Load statistics, zeroed when absent or malformed
    ///
    /// No staleness check: stats are solution-independent.
    #[must_use]
    pub fn load_stats(&self) -> GameStats {
        self.read_json(STATS_FILE).unwrap_or_default()
    }

    fn write_json<T: Serialize>(&self, file: &str, value: &T) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        fs::write(self.dir.join(file), json)
    }

    fn read_json<T: for<'de> Deserialize<'de>>(&self, file: &str) -> Option<T> {
        let content = fs::read_to_string(self.dir.join(file)).ok()?;
        serde_json::from_str(&content).ok()
    }
}

/// Default data directory for persisted records
///
/// Resolution order: `$PALABRA_DATA_DIR`, `$XDG_DATA_HOME/palabra`,
/// `~/.local/share/palabra`.
#[must_use]
pub fn default_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("PALABRA_DATA_DIR")
        && !dir.trim().is_empty()
    {
        return PathBuf::from(dir);
    }

    std::env::var("XDG_DATA_HOME")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("/tmp"))
                .join(".local")
                .join("share")
        })
        .join("palabra")
}
