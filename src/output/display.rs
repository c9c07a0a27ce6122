//! Display functions for command results

use crate::stats::GameStats;
use colored::Colorize;

/// Print the persisted statistics with a guess-distribution histogram
pub fn print_stats(stats: &GameStats) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("{}", "Estadísticas".bright_yellow().bold());
    println!("{}", "─".repeat(40).cyan());

    println!("Jugadas:      {}", stats.total_games);
    println!(
        "Victorias:    {} ({:.0}%)",
        stats.total_wins,
        stats.win_percentage()
    );
    println!("Racha actual: {}", stats.current_streak);
    println!("Mejor racha:  {}", stats.best_streak);

    println!("\n{}", "Distribución de intentos".bold());
    let max_bucket = stats.win_distribution.iter().max().copied().unwrap_or(0);
    for (i, &count) in stats.win_distribution.iter().enumerate() {
        let width = if max_bucket == 0 {
            0
        } else {
            (count * 24).div_ceil(max_bucket) as usize
        };
        println!("{}: {} {}", i + 1, "█".repeat(width).green(), count);
    }
    println!();
}

/// Print the share grid for a finished game
pub fn print_share_text(text: &str) {
    println!("\n{text}");
}
