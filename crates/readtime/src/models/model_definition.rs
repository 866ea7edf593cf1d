//! Data Model Definition

use serde::Serialize;

/// Result of a reading-time calculation.
///
/// Constructed per call, serialized, and discarded; carries no identity.
#[derive(Debug, Clone, Serialize)]
pub struct ReadingTimeResult {
  /// Estimated reading time in whole minutes, always rounded up
  pub minutes: u64,

  /// Number of word tokens found in the input
  pub word_count: u64,

  /// The reading speed this calculation used
  pub words_per_minute: u64,

  /// Human-readable form, e.g. `"1 min"`
  pub display: String,
}

impl ReadingTimeResult {
  /// Builds a result from a word count and a validated speed.
  ///
  /// `minutes` is the ceiling of `word_count / words_per_minute`, so any
  /// non-empty text reads in at least one minute. A word count of zero
  /// yields zero minutes and the `"0 min"` display.
  #[must_use]
  pub fn from_counts(word_count: u64, words_per_minute: u64) -> Self {
    let minutes = word_count.div_ceil(words_per_minute);

    Self {
      minutes,
      word_count,
      words_per_minute,
      display: Self::display_string(minutes),
    }
  }

  /// Formats the display string: `"1 min"` for the singular case, otherwise
  /// `"<minutes> min"` (including `"0 min"`).
  #[must_use]
  pub fn display_string(minutes: u64) -> String {
    if minutes == 1 {
      "1 min".to_string()
    } else {
      format!("{minutes} min")
    }
  }
}
