//! TUI rendering with ratatui
//!
//! Guess grid, keyboard hints, alerts, and the statistics modal.

use super::app::App;
use crate::core::{LetterStatus, MAX_GUESSES, WORD_LENGTH, letter_hints};
use crate::game::AlertKind;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                   // Header
            Constraint::Length(MAX_GUESSES as u16 + 2), // Guess grid
            Constraint::Length(5),                   // Keyboard
            Constraint::Min(4),                      // Alerts
            Constraint::Length(3),                   // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_grid(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_alerts(f, app, chunks[3]);
    render_status(f, app, chunks[4]);

    if app.is_stats_open {
        render_stats_modal(f, app);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("LA PALABRA #{}", app.day))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn cell_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        LetterStatus::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        LetterStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let feedback_rows = app.game.feedback_rows();
    let mut lines: Vec<Line> = Vec::with_capacity(MAX_GUESSES);

    // Submitted guesses, colored by feedback
    for (guess, feedback) in app.game.guesses().iter().zip(&feedback_rows) {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for (i, &status) in feedback.statuses().iter().enumerate() {
            let letter = (guess.char_at(i) as char).to_ascii_uppercase();
            spans.push(Span::styled(format!(" {letter} "), cell_style(status)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    // Current input row
    if !app.game.is_over() && app.game.guesses().len() < MAX_GUESSES {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        let buffer: Vec<char> = app.game.buffer().chars().collect();
        for i in 0..WORD_LENGTH {
            let cell = buffer.get(i).map_or(" _ ".to_string(), |c| {
                format!(" {} ", c.to_ascii_uppercase())
            });
            spans.push(Span::styled(
                cell,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    // Remaining empty rows
    while lines.len() < MAX_GUESSES {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for _ in 0..WORD_LENGTH {
            spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let hints = letter_hints(app.game.guesses(), app.game.solution());

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|letter| {
                    let style = hints.get(&letter).map_or_else(
                        || Style::default().fg(Color::White),
                        |&status| cell_style(status),
                    );
                    Span::styled(format!(" {} ", (letter as char).to_ascii_uppercase()), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_alerts(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    if app.alerts.is_active(AlertKind::NotEnoughLetters) {
        lines.push(Line::from(Span::styled(
            "No hay suficientes letras",
            Style::default().fg(Color::Red),
        )));
    }
    if app.alerts.is_active(AlertKind::WordNotFound) {
        lines.push(Line::from(Span::styled(
            "Palabra no encontrada",
            Style::default().fg(Color::Red),
        )));
    }
    if let Some(message) = app.alerts.success_message() {
        lines.push(Line::from(Span::styled(
            message.to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
    }
    if app.alerts.is_reveal_visible() {
        lines.push(Line::from(Span::styled(
            format!(
                "La palabra era {}",
                app.game.solution().text().to_uppercase()
            ),
            Style::default().fg(Color::Yellow),
        )));
    }

    let alerts = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(alerts, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help = if app.is_stats_open {
        "TAB/ESC: cerrar | q: salir"
    } else if app.game.is_over() {
        "TAB: estadísticas | q: salir"
    } else {
        "Escribe tu palabra | ENTER: probar | TAB: estadísticas | ESC: salir"
    };

    let text = match &app.save_warning {
        Some(warning) => format!("{help}  ({warning})"),
        None => help.to_string(),
    };

    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}

fn render_stats_modal(f: &mut Frame, app: &App) {
    let area = centered_rect(50, 60, f.area());
    f.render_widget(Clear, area);

    let stats = &app.stats;
    let mut lines = vec![
        Line::from(vec![
            Span::raw("Jugadas: "),
            Span::styled(
                stats.total_games.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("   Victorias: "),
            Span::styled(
                format!("{:.0}%", stats.win_percentage()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!(
            "Racha: {}   Mejor racha: {}",
            stats.current_streak, stats.best_streak
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Distribución",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
    ];

    let max_bucket = stats.win_distribution.iter().max().copied().unwrap_or(0);
    for (i, &count) in stats.win_distribution.iter().enumerate() {
        let width = if max_bucket == 0 {
            0
        } else {
            (count * 20).div_ceil(max_bucket) as usize
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{}: ", i + 1)),
            Span::styled("█".repeat(width), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let modal = Paragraph::new(lines).block(
        Block::default()
            .title(" Estadísticas ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(modal, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
