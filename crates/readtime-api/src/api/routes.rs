//! Router definitions

use axum::{
  Router,
  routing::{get, post},
};
use tower_http::trace::TraceLayer;

use super::handlers::{bulk_method_not_allowed, get_reading_time, health_check, post_bulk};
use super::state::AppState;
use crate::errors::ApiError;

/// Creates the API router
///
/// # Arguments
/// * `state` - Application state
///
/// # Returns
/// Configured Router
pub fn create_router(state: AppState) -> Router {
  Router::new()
    .route("/", get(get_reading_time))
    .route("/health/", get(health_check))
    .route("/bulk/", post(post_bulk).fallback(bulk_method_not_allowed))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// Starts the server
///
/// # Arguments
/// * `state` - Application state
///
/// # Errors
/// Returns an error if the server fails to bind or serve
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = &state.config.bind_addr;
  let listener = tokio::net::TcpListener::bind(addr)
    .await
    .map_err(|e| ApiError::config(format!("Failed to bind {addr}: {e}")))?;

  tracing::info!("Starting server: http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .await
    .map_err(|e| ApiError::internal(format!("Server error: {e}")))?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use super::*;
  use crate::config::Config;
  use crate::service::ReadingTimeService;
  use readtime::{CalculatorResult, ReadingTimeResult};

  /// Dummy implementation for tests (never calculates anything real)
  #[derive(Clone)]
  struct DummyService;

  impl ReadingTimeService for DummyService {
    fn calculate(&self, _text: &str, _words_per_minute: i64) -> CalculatorResult<ReadingTimeResult> {
      Ok(ReadingTimeResult::from_counts(0, 250))
    }
  }

  fn create_test_state() -> AppState {
    let config = Config {
      bind_addr: "127.0.0.1:5541".to_string(),
      default_wpm: 250,
    };

    let service = Arc::new(DummyService) as Arc<dyn ReadingTimeService>;
    AppState::new(config, service)
  }

  #[test]
  fn test_router_creation() {
    let state = create_test_state();
    let _router = create_router(state);
    // Confirm the router can be assembled with a stubbed service
  }
}
