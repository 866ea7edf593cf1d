//! Reading-time calculation.
//!
//! Always rounds up to the next whole minute: 251 words at 250 wpm is
//! 1.004 minutes of reading, displayed as 2 minutes.

use std::io::Read;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{CalculatorError, CalculatorResult};
use crate::models::ReadingTimeResult;

/// Default reading speed.
///
/// 250 words per minute is the usual assumption for adult silent reading.
pub const DEFAULT_WORDS_PER_MINUTE: i64 = 250;

/// A word token is a maximal run of Unicode word characters
/// (alphanumeric or underscore), so `"word-word"` and `"hello.world"`
/// both count as two words.
static WORD_TOKEN: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"\w+").expect("word token pattern is valid"));

/// Counts word tokens in `text`.
#[must_use]
pub fn word_count(text: &str) -> u64 {
  WORD_TOKEN.find_iter(text).count() as u64
}

/// Calculates the reading time of `text` at `words_per_minute`.
///
/// # Arguments
/// * `text` - The content to analyze
/// * `words_per_minute` - Reading speed; pass [`DEFAULT_WORDS_PER_MINUTE`]
///   when the caller has no preference
///
/// # Errors
/// Returns [`CalculatorError::SpeedNotPositive`] when `words_per_minute` is
/// zero or negative. Speed is validated before any tokenization.
pub fn calculate(text: &str, words_per_minute: i64) -> CalculatorResult<ReadingTimeResult> {
  if words_per_minute <= 0 {
    return Err(CalculatorError::SpeedNotPositive {
      actual: words_per_minute,
    });
  }

  // words_per_minute > 0 here
  let speed = words_per_minute as u64;

  // Empty or whitespace-only text short-circuits to the zero result instead
  // of going through the tokenizer.
  if text.trim().is_empty() {
    return Ok(ReadingTimeResult::from_counts(0, speed));
  }

  Ok(ReadingTimeResult::from_counts(word_count(text), speed))
}

/// Calculates the reading time of a byte stream, e.g. an uploaded file.
///
/// The stream is read to the end and decoded as UTF-8 with invalid bytes
/// replaced, then handed to [`calculate`].
///
/// # Errors
/// Returns [`CalculatorError::Io`] when reading fails, or any error
/// [`calculate`] produces.
pub fn calculate_from_reader<R: Read>(
  mut reader: R,
  words_per_minute: i64,
) -> CalculatorResult<ReadingTimeResult> {
  let mut bytes = Vec::new();
  reader
    .read_to_end(&mut bytes)
    .map_err(|e| CalculatorError::Io(Arc::new(e)))?;

  let text = String::from_utf8_lossy(&bytes);
  calculate(&text, words_per_minute)
}
