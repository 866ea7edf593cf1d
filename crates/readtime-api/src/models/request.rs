//! Request model definitions

use serde::Deserialize;

/// Query parameters for the single-text endpoint
///
/// `wpm` stays a string here on purpose: the handler converts it itself so
/// that a malformed value maps to the InvalidParameter envelope instead of
/// an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct ReadingTimeParams {
  /// The content to analyze
  #[serde(default)]
  pub text: String,

  /// Reading speed, as it appeared in the query string
  pub wpm: Option<String>,
}
