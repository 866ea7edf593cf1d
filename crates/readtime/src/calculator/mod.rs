//! calculator module
pub mod reading_time;

/// Re-export
pub use reading_time::{DEFAULT_WORDS_PER_MINUTE, calculate, calculate_from_reader, word_count};
