//! Terminal output formatting

pub mod display;

pub use display::{print_share_text, print_stats};
