//! La Palabra
//!
//! A daily 6-letter word-guessing game for the terminal: six guesses,
//! per-letter feedback, and persistent play statistics.
//!
//! # Quick Start
//!
//! ```rust
//! use palabra::core::{Feedback, Word};
//!
//! let solution = Word::new("camisa").unwrap();
//! let guess = Word::new("camion").unwrap();
//!
//! let feedback = Feedback::evaluate(&guess, &solution);
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Game state machine and transient alerts
pub mod game;

// Statistics aggregation
pub mod stats;

// Durable local persistence
pub mod persist;

// Share/export summary
pub mod share;

// Word lists and daily solution selection
pub mod wordlists;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
