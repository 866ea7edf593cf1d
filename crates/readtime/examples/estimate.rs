//! readtime crate example
//!
//! Estimates reading time for a few sample texts at different speeds.

use readtime::{DEFAULT_WORDS_PER_MINUTE, calculate, calculate_from_reader};

/// Application common result type
type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() -> AppResult<()> {
  let samples = [
    ("greeting", "Hello from Nakuru Kenya"),
    ("empty", ""),
    ("hyphenated", "state-of-the-art reading-time estimation"),
  ];

  for (label, text) in samples {
    let result = calculate(text, DEFAULT_WORDS_PER_MINUTE)?;
    println!(
      "{label}: {} words -> {} (at {} wpm)",
      result.word_count, result.display, result.words_per_minute
    );
  }

  // A faster reader gets a shorter estimate for the same text.
  let article = "word ".repeat(600);
  let slow = calculate(&article, 200)?;
  let fast = calculate(&article, 300)?;
  println!("600 words: {} at 200 wpm, {} at 300 wpm", slow.display, fast.display);

  // Byte streams work too, e.g. file contents.
  let from_stream = calculate_from_reader("streamed input".as_bytes(), DEFAULT_WORDS_PER_MINUTE)?;
  println!("streamed: {} words -> {}", from_stream.word_count, from_stream.display);

  Ok(())
}
