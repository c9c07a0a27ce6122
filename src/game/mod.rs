//! Game state manager
//!
//! Owns the guess list, the current input buffer, and the win/loss lifecycle,
//! plus the transient-alert scheduling used by the display layer.

mod alerts;
mod state;

pub use alerts::{ALERT_TTL, AlertKind, Alerts, random_win_message};
pub use state::{Game, GameStatus, SubmitOutcome};
