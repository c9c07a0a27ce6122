//! Transient alert scheduling
//!
//! Each alert kind has its own expiry deadline; re-triggering an alert
//! replaces the old deadline, so a new trigger supersedes a stale one instead
//! of racing it. The stats modal is scheduled the same way after a win or
//! loss.

use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// How long a transient alert stays visible
pub const ALERT_TTL: Duration = Duration::from_millis(2000);

const WIN_MESSAGES: &[&str] = &["¡Tremendo!", "¡Wepa!", "¡Bien hecho!", "¡Eso es!"];

/// Pick a congratulatory message for a win
#[must_use]
pub fn random_win_message() -> &'static str {
    use rand::prelude::IndexedRandom;

    WIN_MESSAGES
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or("¡Bien hecho!")
}

/// Kinds of transient alerts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertKind {
    /// Enter pressed with fewer than six letters typed
    NotEnoughLetters,
    /// Submitted word is not in the dictionary
    WordNotFound,
    /// Congratulatory message after a win (carries its text)
    Success,
}

/// Deadline-keyed transient alerts plus the deferred stats-modal and
/// solution-reveal triggers
#[derive(Debug, Default)]
pub struct Alerts {
    deadlines: FxHashMap<AlertKind, Instant>,
    success_message: Option<String>,
    stats_due: Option<Instant>,
    reveal_due: Option<Instant>,
    reveal_visible: bool,
}

impl Alerts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show an alert for the next [`ALERT_TTL`]
    ///
    /// Re-triggering an already-active alert pushes its deadline out.
    pub fn trigger(&mut self, kind: AlertKind, now: Instant) {
        self.deadlines.insert(kind, now + ALERT_TTL);
    }

    /// Show a success alert with a message
    pub fn trigger_success(&mut self, message: impl Into<String>, now: Instant) {
        self.success_message = Some(message.into());
        self.trigger(AlertKind::Success, now);
    }

    /// Schedule the stats modal to surface after the alert delay
    pub fn schedule_stats(&mut self, now: Instant) {
        self.stats_due = Some(now + ALERT_TTL);
    }

    /// Schedule the solution reveal after the alert delay
    ///
    /// Unlike transient alerts the reveal never expires once shown.
    pub fn schedule_reveal(&mut self, now: Instant) {
        self.reveal_due = Some(now + ALERT_TTL);
    }

    /// Show the solution reveal immediately (restored finished games)
    pub fn show_reveal(&mut self) {
        self.reveal_due = None;
        self.reveal_visible = true;
    }

    /// Expire due alerts; returns true when the stats modal becomes due
    pub fn tick(&mut self, now: Instant) -> bool {
        self.deadlines.retain(|_, deadline| *deadline > now);
        if !self.deadlines.contains_key(&AlertKind::Success) {
            self.success_message = None;
        }

        if let Some(due) = self.reveal_due
            && now >= due
        {
            self.reveal_due = None;
            self.reveal_visible = true;
        }

        if let Some(due) = self.stats_due
            && now >= due
        {
            self.stats_due = None;
            return true;
        }
        false
    }

    /// True once a scheduled (or immediate) reveal has surfaced
    #[must_use]
    pub const fn is_reveal_visible(&self) -> bool {
        self.reveal_visible
    }

    #[must_use]
    pub fn is_active(&self, kind: AlertKind) -> bool {
        self.deadlines.contains_key(&kind)
    }

    /// Message of the active success alert, if any
    #[must_use]
    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }
}
