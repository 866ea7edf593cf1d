//! HTTP handler definitions

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use serde_json::Value as JsonValue;
use tracing::{debug, info};

use readtime::CalculatorError;

use crate::errors::ApiError;
use crate::models::{
  BulkItem, BulkResponse, HealthResponse, ReadingTimeEnvelope, ReadingTimeParams,
};

use super::state::AppState;

/// GET /health/ endpoint
///
/// Lets callers confirm the API is up before sending real traffic.
pub async fn health_check() -> Json<HealthResponse> {
  Json(HealthResponse::operational())
}

/// GET / endpoint
///
/// Calculates the reading time of a single text.
///
/// # Query Parameters
/// - `text` - the content to analyze (default: empty)
/// - `wpm` - reading speed (default: the configured speed)
///
/// # Response
/// - 200 OK: success envelope with the calculation
/// - 400 Bad Request: malformed `wpm` or invalid calculator input
/// - 500 Internal Server Error: internal error
pub async fn get_reading_time(
  State(state): State<AppState>,
  Query(params): Query<ReadingTimeParams>,
) -> Result<Json<ReadingTimeEnvelope>, ApiError> {
  debug!(text_len = params.text.len(), wpm = ?params.wpm, "reading-time request received");

  // The parameter arrives as a string; a value that is not an integer is a
  // request error, a value that is not positive is a calculator error.
  let wpm = match params.wpm {
    Some(raw) => raw
      .parse::<i64>()
      .map_err(|_| ApiError::invalid_parameter("wpm must be a valid integer"))?,
    None => state.config.default_wpm,
  };

  let result = state.service.calculate(&params.text, wpm)?;

  info!(
    word_count = result.word_count,
    minutes = result.minutes,
    "reading time calculated"
  );

  Ok(Json(ReadingTimeEnvelope::success(result)))
}

/// POST /bulk/ endpoint
///
/// Calculates reading times for a list of texts in one request.
///
/// # Request Body
/// ```json
/// { "texts": ["First text", "Second text"], "wpm": 250 }
/// ```
///
/// # Response
/// - 200 OK: summary plus per-item results in input order; a failing item
///   becomes an error entry and the batch continues
/// - 400 Bad Request: invalid JSON body, missing `texts`, non-array `texts`
/// - 405 Method Not Allowed: any method other than POST
/// - 500 Internal Server Error: internal error
pub async fn post_bulk(
  State(state): State<AppState>,
  payload: Result<Json<JsonValue>, JsonRejection>,
) -> Result<Json<BulkResponse>, ApiError> {
  let Json(body) = payload.map_err(|rejection| {
    debug!(reason = %rejection, "bulk request body rejected");
    ApiError::InvalidJson
  })?;

  let texts = body.get("texts").ok_or_else(|| ApiError::missing_field("texts"))?;
  let texts =
    texts.as_array().ok_or_else(|| ApiError::invalid_type("'texts' must be an array/list"))?;

  debug!(total = texts.len(), "bulk request received");

  // The speed is shared by every item, so a bad value fails each item
  // individually rather than rejecting the whole request.
  let wpm: Result<i64, CalculatorError> = match body.get("wpm") {
    None => Ok(state.config.default_wpm),
    Some(value) => value.as_i64().ok_or(CalculatorError::SpeedNotInteger),
  };

  let mut results = Vec::with_capacity(texts.len());
  for (index, item) in texts.iter().enumerate() {
    let outcome = wpm.clone().and_then(|speed| match item.as_str() {
      Some(text) => state.service.calculate(text, speed),
      None => Err(CalculatorError::TextNotString),
    });

    results.push(BulkItem::from_outcome(index, item, outcome));
  }

  // The summary echoes the requested speed as-is, including values that
  // failed validation.
  let wpm_echo =
    body.get("wpm").cloned().unwrap_or_else(|| JsonValue::from(state.config.default_wpm));

  let response = BulkResponse::from_results(results, wpm_echo);

  info!(
    total = response.summary.total_texts,
    successful = response.summary.successful,
    failed = response.summary.failed,
    "bulk calculation completed"
  );

  Ok(Json(response))
}

/// Fallback for non-POST methods on /bulk/
///
/// axum's default 405 response has an empty body; this keeps the JSON
/// error envelope.
pub async fn bulk_method_not_allowed() -> ApiError {
  ApiError::MethodNotAllowed
}
