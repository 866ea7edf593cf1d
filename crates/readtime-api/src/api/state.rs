//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::ReadingTimeService;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Reading-Time Calculation Service
  ///
  /// - Production: `Arc::new(ReadingTimeServiceImpl::new())`
  /// - Test: `Arc::new(StubReadingTimeService)`
  pub service: Arc<dyn ReadingTimeService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn ReadingTimeService>) -> Self {
    Self { config, service }
  }
}
