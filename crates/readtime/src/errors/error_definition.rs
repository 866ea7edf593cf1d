//! Error definitions

use std::io;
use std::sync::Arc;
use thiserror::Error;

/// Errors produced by the reading-time calculator.
///
/// Cloneable so that bulk callers can attach the same failure to several
/// items without re-deriving it.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum CalculatorError {
  /// The reading speed is zero or negative
  #[error("Words per minute must be positive (greater than 0)")]
  SpeedNotPositive {
    /// The rejected value
    actual: i64,
  },

  /// The reading speed is not an integer
  ///
  /// The calculator's own signature rules this out; JSON boundaries produce
  /// it when a speed value arrives as a float or a string.
  #[error("Words per minute must be an integer")]
  SpeedNotInteger,

  /// The input is not a string
  ///
  /// Same boundary situation as [`CalculatorError::SpeedNotInteger`]: a JSON
  /// list can carry numbers or objects where text is expected.
  #[error("Text must be a string")]
  TextNotString,

  /// Reading the input stream failed
  #[error("Failed to read input: {0}")]
  Io(Arc<io::Error>),
}

/// Result alias for calculator operations
pub type CalculatorResult<T> = Result<T, CalculatorError>;
