//! Reading-Time Calculation Service

use readtime::{CalculatorResult, ReadingTimeResult};

/// Common interface for the reading-time calculation service
///
/// This trait allows swapping the production implementation
/// (`ReadingTimeServiceImpl`) with test stubs/mocks.
pub trait ReadingTimeService: Send + Sync {
  /// Calculates the reading time of one text
  ///
  /// # Errors
  /// Propagates calculator failures (non-positive speed)
  fn calculate(&self, text: &str, words_per_minute: i64) -> CalculatorResult<ReadingTimeResult>;
}

/// Production implementation delegating to the readtime crate
///
/// The calculation is pure and cheap, so the service holds no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadingTimeServiceImpl;

impl ReadingTimeServiceImpl {
  /// Creates the service
  #[must_use]
  pub fn new() -> Self {
    Self
  }
}

impl ReadingTimeService for ReadingTimeServiceImpl {
  fn calculate(&self, text: &str, words_per_minute: i64) -> CalculatorResult<ReadingTimeResult> {
    readtime::calculate(text, words_per_minute)
  }
}
