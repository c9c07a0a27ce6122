//! La Palabra - CLI
//!
//! Daily 6-letter word game with a TUI play mode, plus commands for
//! inspecting statistics and sharing a finished grid.

use std::path::PathBuf;
use std::time::SystemTime;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use palabra::{
    core::Word,
    game::Game,
    interactive::{App, run_tui},
    output::{print_share_text, print_stats},
    persist::Store,
    share::share_text,
    wordlists::{
        ANSWERS, Dictionary, day_index, loader::words_from_slice, solution_for_day,
    },
};

#[derive(Parser)]
#[command(
    name = "palabra",
    about = "Daily 6-letter word-guessing game for the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default), 'answers' (solutions only), or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Override the data directory used for saved state and statistics
    #[arg(short = 'd', long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play today's word in the terminal (default)
    Play,

    /// Print the persisted play statistics
    Stats,

    /// Print the spoiler-free share grid for today's finished game
    Share,

    /// Check whether a word is accepted by the dictionary
    Check {
        /// Word to look up
        word: String,
    },
}

/// Build the guess-validation dictionary based on the -w flag
fn load_dictionary(wordlist_mode: &str) -> Result<Dictionary> {
    use palabra::wordlists::loader::load_from_file;

    match wordlist_mode {
        "all" => Ok(Dictionary::embedded()),
        "answers" => Ok(Dictionary::from_words(&words_from_slice(ANSWERS))),
        path => {
            let custom_words = load_from_file(path)?;
            if custom_words.is_empty() {
                bail!("wordlist '{path}' contains no valid 6-letter words");
            }
            Ok(Dictionary::from_words(&custom_words))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)?;
    let store = match cli.data_dir {
        Some(dir) => Store::new(dir),
        None => Store::open_default(),
    };

    let day = day_index(SystemTime::now());
    let solution = solution_for_day(day);

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(day, solution, dictionary, store),
        Commands::Stats => {
            print_stats(&store.load_stats());
            Ok(())
        }
        Commands::Share => run_share_command(day, &solution, &store),
        Commands::Check { word } => run_check_command(&word, &dictionary),
    }
}

fn run_play_command(day: u64, solution: Word, dictionary: Dictionary, store: Store) -> Result<()> {
    let app = App::new(day, solution, dictionary, Some(store));
    run_tui(app)
}

fn run_share_command(day: u64, solution: &Word, store: &Store) -> Result<()> {
    let guesses = store
        .load_game(solution)
        .unwrap_or_default();
    let game = Game::restore(solution.clone(), guesses);

    if !game.is_over() {
        bail!("today's game is not finished yet - nothing to share");
    }

    print_share_text(&share_text(day, game.guesses(), solution));
    Ok(())
}

fn run_check_command(word: &str, dictionary: &Dictionary) -> Result<()> {
    let word = match Word::new(word) {
        Ok(word) => word,
        Err(err) => bail!("invalid word: {err}"),
    };

    if dictionary.contains(&word) {
        println!("'{word}' is in the word list");
        Ok(())
    } else {
        println!("'{word}' is not in the word list");
        std::process::exit(1);
    }
}
