//! TUI application state and logic

use crate::core::Word;
use crate::game::{AlertKind, Alerts, Game, GameStatus, SubmitOutcome, random_win_message};
use crate::persist::Store;
use crate::stats::{GameResult, GameStats};
use crate::wordlists::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Application state
pub struct App {
    pub game: Game,
    pub dictionary: Dictionary,
    pub stats: GameStats,
    pub alerts: Alerts,
    pub day: u64,
    pub is_stats_open: bool,
    pub should_quit: bool,
    pub save_warning: Option<String>,
    store: Option<Store>,
}

impl App {
    /// Build the app, restoring any persisted state for today's solution
    ///
    /// With no store the game runs in-memory only (used by tests; also the
    /// degraded mode after a write failure).
    #[must_use]
    pub fn new(day: u64, solution: Word, dictionary: Dictionary, store: Option<Store>) -> Self {
        let (game, stats) = match &store {
            Some(store) => {
                let guesses = store.load_game(&solution).unwrap_or_default();
                (Game::restore(solution, guesses), store.load_stats())
            }
            None => (Game::new(solution), GameStats::default()),
        };

        // A game finished in an earlier session goes straight to the stats
        // view, with the solution already revealed on a loss
        let is_stats_open = game.is_over();
        let mut alerts = Alerts::new();
        if game.status() == GameStatus::Lost {
            alerts.show_reveal();
        }

        Self {
            game,
            dictionary,
            stats,
            alerts,
            day,
            is_stats_open,
            should_quit: false,
            save_warning: None,
            store,
        }
    }

    /// Handle one key press
    pub fn on_key(&mut self, code: KeyCode, modifiers: KeyModifiers, now: Instant) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.is_stats_open {
            match code {
                KeyCode::Esc | KeyCode::Tab => self.is_stats_open = false,
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.is_stats_open = true,
            KeyCode::Char('q') if self.game.is_over() => self.should_quit = true,
            KeyCode::Char(c) => self.game.on_char(c),
            KeyCode::Backspace => self.game.on_delete(),
            KeyCode::Enter => self.submit(now),
            _ => {}
        }
    }

    fn submit(&mut self, now: Instant) {
        match self.game.on_enter(&self.dictionary) {
            SubmitOutcome::Ignored => {}
            SubmitOutcome::NotEnoughLetters => {
                self.alerts.trigger(AlertKind::NotEnoughLetters, now);
            }
            SubmitOutcome::WordNotFound => {
                self.alerts.trigger(AlertKind::WordNotFound, now);
            }
            SubmitOutcome::Accepted => {
                self.persist_game();
            }
            SubmitOutcome::Won { guesses_used } => {
                self.persist_game();
                self.complete_game(GameResult::Won { guesses_used });
                self.alerts.trigger_success(random_win_message(), now);
                self.alerts.schedule_stats(now);
            }
            SubmitOutcome::Lost => {
                self.persist_game();
                self.complete_game(GameResult::Lost);
                self.alerts.schedule_reveal(now);
                self.alerts.schedule_stats(now);
            }
        }
    }

    fn complete_game(&mut self, result: GameResult) {
        self.stats = self.stats.add_completed_game(result);
        let Some(store) = self.store.clone() else {
            return;
        };
        if let Err(err) = store.save_stats(&self.stats) {
            self.degrade(format!("stats not saved: {err}"));
        }
    }

    fn persist_game(&mut self) {
        let Some(store) = self.store.clone() else {
            return;
        };
        if let Err(err) = store.save_game(&self.game) {
            self.degrade(format!("progress not saved: {err}"));
        }
    }

    // Storage failed once; keep playing in memory rather than aborting.
    fn degrade(&mut self, warning: String) {
        self.save_warning = Some(warning);
        self.store = None;
    }

    /// Advance timers; expired alerts disappear and a due stats modal opens
    pub fn tick(&mut self, now: Instant) {
        if self.alerts.tick(now) {
            self.is_stats_open = true;
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Poll with a timeout so alert deadlines expire without input
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.on_key(key.code, key.modifiers, Instant::now());
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::Store;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn dictionary() -> Dictionary {
        let words: Vec<Word> = ["camisa", "dinero", "fiesta", "suerte", "verano", "tiempo"]
            .iter()
            .map(|w| word(w))
            .collect();
        Dictionary::from_words(&words)
    }

    fn press(app: &mut App, code: KeyCode, now: Instant) {
        app.on_key(code, KeyModifiers::NONE, now);
    }

    fn type_word(app: &mut App, text: &str, now: Instant) {
        for c in text.chars() {
            press(app, KeyCode::Char(c), now);
        }
    }

    #[test]
    fn typing_and_submitting_a_guess() {
        let mut app = App::new(0, word("camisa"), dictionary(), None);
        let now = Instant::now();

        type_word(&mut app, "dinero", now);
        assert_eq!(app.game.buffer(), "dinero");

        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.game.guesses().len(), 1);
        assert_eq!(app.game.buffer(), "");
    }

    #[test]
    fn short_guess_raises_alert() {
        let mut app = App::new(0, word("camisa"), dictionary(), None);
        let now = Instant::now();

        type_word(&mut app, "din", now);
        press(&mut app, KeyCode::Enter, now);

        assert!(app.alerts.is_active(AlertKind::NotEnoughLetters));
        assert!(app.game.guesses().is_empty());
    }

    #[test]
    fn unknown_word_raises_alert() {
        let mut app = App::new(0, word("camisa"), dictionary(), None);
        let now = Instant::now();

        type_word(&mut app, "zzzzzz", now);
        press(&mut app, KeyCode::Enter, now);

        assert!(app.alerts.is_active(AlertKind::WordNotFound));
        assert!(app.game.guesses().is_empty());
    }

    #[test]
    fn win_updates_stats_and_schedules_modal() {
        let mut app = App::new(0, word("camisa"), dictionary(), None);
        let start = Instant::now();

        type_word(&mut app, "camisa", start);
        press(&mut app, KeyCode::Enter, start);

        assert!(app.game.is_over());
        assert_eq!(app.stats.total_wins, 1);
        assert_eq!(app.stats.win_distribution, [1, 0, 0, 0, 0, 0]);
        assert!(app.alerts.success_message().is_some());

        // Stats modal surfaces only after the alert delay
        assert!(!app.is_stats_open);
        app.tick(start + Duration::from_millis(2000));
        assert!(app.is_stats_open);
    }

    #[test]
    fn loss_updates_stats_once() {
        let mut app = App::new(0, word("camisa"), dictionary(), None);
        let now = Instant::now();

        for miss in ["dinero", "fiesta", "suerte", "verano", "tiempo", "dinero"] {
            type_word(&mut app, miss, now);
            press(&mut app, KeyCode::Enter, now);
        }

        assert!(app.game.is_over());
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.total_wins, 0);
        assert_eq!(app.stats.current_streak, 0);

        // Further input must not touch stats again
        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn loss_reveals_solution_after_delay() {
        let mut app = App::new(0, word("camisa"), dictionary(), None);
        let start = Instant::now();

        for miss in ["dinero", "fiesta", "suerte", "verano", "tiempo", "dinero"] {
            type_word(&mut app, miss, start);
            press(&mut app, KeyCode::Enter, start);
        }
        assert!(app.game.is_over());

        // Reveal and stats view surface together after the alert delay
        assert!(!app.alerts.is_reveal_visible());
        app.tick(start + Duration::from_millis(1000));
        assert!(!app.alerts.is_reveal_visible());
        assert!(!app.is_stats_open);

        app.tick(start + Duration::from_millis(2000));
        assert!(app.alerts.is_reveal_visible());
        assert!(app.is_stats_open);
    }

    #[test]
    fn restored_lost_game_shows_reveal_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let now = Instant::now();

        {
            let store = Store::new(dir.path());
            let mut app = App::new(0, word("camisa"), dictionary(), Some(store));
            for miss in ["dinero", "fiesta", "suerte", "verano", "tiempo", "dinero"] {
                type_word(&mut app, miss, now);
                press(&mut app, KeyCode::Enter, now);
            }
        }

        let store = Store::new(dir.path());
        let app = App::new(0, word("camisa"), dictionary(), Some(store));
        assert!(app.game.is_over());
        assert!(app.alerts.is_reveal_visible());
        assert!(app.is_stats_open);
    }

    #[test]
    fn failed_save_degrades_to_in_memory_play() {
        let dir = tempfile::tempdir().unwrap();
        let now = Instant::now();

        // Route the store through a regular file so create_dir_all fails
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let store = Store::new(blocker.join("data"));

        let mut app = App::new(0, word("camisa"), dictionary(), Some(store));
        assert!(app.save_warning.is_none());

        type_word(&mut app, "dinero", now);
        press(&mut app, KeyCode::Enter, now);

        assert_eq!(app.game.guesses().len(), 1);
        assert!(app.save_warning.is_some());

        // Play continues in memory after the store is dropped
        type_word(&mut app, "fiesta", now);
        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.game.guesses().len(), 2);

        type_word(&mut app, "camisa", now);
        press(&mut app, KeyCode::Enter, now);
        assert!(app.game.is_over());
        assert_eq!(app.stats.total_wins, 1);
    }

    #[test]
    fn stats_modal_blocks_game_input() {
        let mut app = App::new(0, word("camisa"), dictionary(), None);
        let now = Instant::now();

        press(&mut app, KeyCode::Tab, now);
        assert!(app.is_stats_open);

        type_word(&mut app, "din", now);
        assert_eq!(app.game.buffer(), "");

        press(&mut app, KeyCode::Esc, now);
        assert!(!app.is_stats_open);
        assert!(!app.should_quit);
    }

    #[test]
    fn escape_quits_when_no_modal() {
        let mut app = App::new(0, word("camisa"), dictionary(), None);
        press(&mut app, KeyCode::Esc, Instant::now());
        assert!(app.should_quit);
    }

    #[test]
    fn persisted_game_restores_across_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let now = Instant::now();

        {
            let store = Store::new(dir.path());
            let mut app = App::new(0, word("camisa"), dictionary(), Some(store));
            type_word(&mut app, "dinero", now);
            press(&mut app, KeyCode::Enter, now);
        }

        let store = Store::new(dir.path());
        let app = App::new(0, word("camisa"), dictionary(), Some(store));
        assert_eq!(app.game.guesses().len(), 1);
        assert_eq!(app.game.guesses()[0].text(), "dinero");
    }

    #[test]
    fn finished_session_reopens_on_stats_view() {
        let dir = tempfile::tempdir().unwrap();
        let now = Instant::now();

        {
            let store = Store::new(dir.path());
            let mut app = App::new(3, word("camisa"), dictionary(), Some(store));
            type_word(&mut app, "camisa", now);
            press(&mut app, KeyCode::Enter, now);
        }

        let store = Store::new(dir.path());
        let app = App::new(3, word("camisa"), dictionary(), Some(store));
        assert!(app.game.is_over());
        assert!(app.is_stats_open);
        // Completed game was counted in the earlier session only
        assert_eq!(app.stats.total_games, 1);
    }
}
