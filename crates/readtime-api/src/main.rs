//! readtime-api server entry point

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use readtime_api::ApiError;
use readtime_api::api::AppState;
use readtime_api::api::run_server;
use readtime_api::config::Config;
use readtime_api::service::ReadingTimeServiceImpl;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // Initialize logging
  tracing_subscriber::registry().with(tracing_subscriber::fmt::layer()).init();

  // Load configuration
  let config = Config::from_env()?;
  tracing::info!(
    bind_addr = %config.bind_addr,
    default_wpm = config.default_wpm,
    "configuration loaded"
  );

  // Initialize the service
  let service = Arc::new(ReadingTimeServiceImpl::new());

  // Create application state
  let state = AppState::new(config, service);

  // Start server
  run_server(state).await
}
