//! Config loading from environment variables

use readtime::DEFAULT_WORDS_PER_MINUTE;

use super::constants::DEFAULT_BIND_ADDR;
use crate::errors::ApiError;

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:5540")
  pub bind_addr: String,
  /// Reading speed used when a request does not supply one
  pub default_wpm: i64,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// - `READTIME_API_BIND_ADDR` - bind address
  /// - `READTIME_DEFAULT_WPM` - default reading speed
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    let bind_addr =
      std::env::var("READTIME_API_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let default_wpm = match std::env::var("READTIME_DEFAULT_WPM") {
      Ok(value) => parse_default_wpm(&value).map_err(ApiError::config)?,
      Err(_) => DEFAULT_WORDS_PER_MINUTE,
    };

    Ok(Self { bind_addr, default_wpm })
  }
}

/// Parses and validates a default reading speed value.
fn parse_default_wpm(value: &str) -> Result<i64, String> {
  let wpm: i64 = value
    .parse()
    .map_err(|_| format!("READTIME_DEFAULT_WPM must be an integer, got: {value}"))?;

  if wpm <= 0 {
    return Err(format!("READTIME_DEFAULT_WPM must be positive, got: {wpm}"));
  }

  Ok(wpm)
}
