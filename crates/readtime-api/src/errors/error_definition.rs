//! API error definitions

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

use readtime::CalculatorError;

/// Error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// A calculator input was invalid
  InvalidArgument,
  /// A request parameter could not be converted
  InvalidParameter,
  /// The request body was not valid JSON
  InvalidJson,
  /// A required body field was absent
  MissingField,
  /// A body field had the wrong type
  InvalidType,
  /// The HTTP method is not supported by the endpoint
  MethodNotAllowed,
  /// Unexpected internal failure
  Internal,
  /// Bulk request could not be processed
  Processing,
  /// Configuration error
  Config,
}

impl ApiErrorKind {
  /// Returns the error code used on the wire
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::InvalidArgument => "InvalidArgument",
      Self::InvalidParameter => "InvalidParameter",
      Self::InvalidJson => "InvalidJSON",
      Self::MissingField => "MissingField",
      Self::InvalidType => "InvalidType",
      Self::MethodNotAllowed => "MethodNotAllowed",
      Self::Internal => "InternalError",
      Self::Processing => "ProcessingError",
      Self::Config => "ConfigError",
    }
  }

  /// Returns the HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::InvalidArgument
      | Self::InvalidParameter
      | Self::InvalidJson
      | Self::MissingField
      | Self::InvalidType => StatusCode::BAD_REQUEST,
      Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
      Self::Internal | Self::Processing | Self::Config => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// API error
#[derive(Debug, Error)]
pub enum ApiError {
  /// The calculator rejected its input
  #[error("{0}")]
  InvalidArgument(CalculatorError),

  /// A request parameter could not be converted
  #[error("{0}")]
  InvalidParameter(String),

  /// The request body was not valid JSON
  #[error("Request body must be valid JSON")]
  InvalidJson,

  /// A required body field was absent
  #[error("Missing '{0}' field in request body")]
  MissingField(&'static str),

  /// A body field had the wrong type
  #[error("{0}")]
  InvalidType(String),

  /// The HTTP method is not supported by the endpoint
  #[error("Only POST method is allowed for this endpoint")]
  MethodNotAllowed,

  /// Unexpected internal failure
  ///
  /// The message is for logs; the wire carries a generic message.
  #[error("Internal error: {0}")]
  Internal(String),

  /// Bulk request could not be processed
  #[error("Processing error: {0}")]
  Processing(String),

  /// Configuration error (startup only, never reaches the wire in normal
  /// operation)
  #[error("Config error: {0}")]
  Config(String),
}

impl ApiError {
  /// Returns the error kind
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::InvalidArgument(_) => ApiErrorKind::InvalidArgument,
      Self::InvalidParameter(_) => ApiErrorKind::InvalidParameter,
      Self::InvalidJson => ApiErrorKind::InvalidJson,
      Self::MissingField(_) => ApiErrorKind::MissingField,
      Self::InvalidType(_) => ApiErrorKind::InvalidType,
      Self::MethodNotAllowed => ApiErrorKind::MethodNotAllowed,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Processing(_) => ApiErrorKind::Processing,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// Returns the error code used on the wire
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// Returns the HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// Creates an invalid-parameter error
  #[must_use]
  pub fn invalid_parameter(message: impl Into<String>) -> Self {
    Self::InvalidParameter(message.into())
  }

  /// Creates a missing-field error
  #[must_use]
  pub fn missing_field(field: &'static str) -> Self {
    Self::MissingField(field)
  }

  /// Creates an invalid-type error
  #[must_use]
  pub fn invalid_type(message: impl Into<String>) -> Self {
    Self::InvalidType(message.into())
  }

  /// Creates an internal error
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// Creates a processing error
  #[must_use]
  pub fn processing(message: impl Into<String>) -> Self {
    Self::Processing(message.into())
  }

  /// Creates a configuration error
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// JSON structure of the error envelope
#[derive(Serialize)]
struct ErrorEnvelope {
  status: &'static str,
  error: &'static str,
  message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  suggestion: Option<&'static str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  required_fields: Option<Vec<&'static str>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  example: Option<JsonValue>,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let kind = self.kind();
    let status = kind.status();

    // Server-side failures keep their detail in the logs and send a generic
    // message on the wire.
    let message = match kind {
      ApiErrorKind::Internal | ApiErrorKind::Config => {
        tracing::error!(code = kind.code(), detail = %self, "request failed");
        "An unexpected error occurred".to_string()
      }
      ApiErrorKind::Processing => {
        tracing::error!(code = kind.code(), detail = %self, "bulk request failed");
        "Failed to process bulk request".to_string()
      }
      _ => self.to_string(),
    };

    let body = ErrorEnvelope {
      status: "error",
      error: kind.code(),
      message,
      suggestion: match kind {
        ApiErrorKind::InvalidParameter => Some("Example: ?wpm=250"),
        ApiErrorKind::InvalidArgument => Some("Check your text and wpm parameters"),
        _ => None,
      },
      required_fields: match &self {
        Self::MissingField(field) => Some(vec![*field]),
        _ => None,
      },
      example: match kind {
        ApiErrorKind::InvalidType => Some(serde_json::json!({ "texts": ["text1", "text2"] })),
        _ => None,
      },
    };

    (status, Json(body)).into_response()
  }
}

/// Conversion from CalculatorError to ApiError
///
/// Maps domain-layer errors to API-layer errors.
impl From<CalculatorError> for ApiError {
  fn from(err: CalculatorError) -> Self {
    match err {
      // Stream errors cannot come from request input; surface as internal.
      CalculatorError::Io(_) => ApiError::internal(format!("calculator failure: {err}")),
      _ => ApiError::InvalidArgument(err),
    }
  }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn invalid_parameter_creation() {
    let err = ApiError::invalid_parameter("wpm must be a valid integer");
    assert_eq!(err.kind(), ApiErrorKind::InvalidParameter);
    assert_eq!(err.code(), "InvalidParameter");
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.to_string(), "wpm must be a valid integer");
  }

  #[test]
  fn missing_field_creation() {
    let err = ApiError::missing_field("texts");
    assert_eq!(err.kind(), ApiErrorKind::MissingField);
    assert_eq!(err.code(), "MissingField");
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.to_string(), "Missing 'texts' field in request body");
  }

  #[test]
  fn invalid_json_creation() {
    let err = ApiError::InvalidJson;
    assert_eq!(err.code(), "InvalidJSON");
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.to_string(), "Request body must be valid JSON");
  }

  #[test]
  fn method_not_allowed_creation() {
    let err = ApiError::MethodNotAllowed;
    assert_eq!(err.code(), "MethodNotAllowed");
    assert_eq!(err.status(), StatusCode::METHOD_NOT_ALLOWED);
  }

  #[test]
  fn internal_creation() {
    let err = ApiError::internal("database on fire");
    assert_eq!(err.kind(), ApiErrorKind::Internal);
    assert_eq!(err.code(), "InternalError");
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
  }

  #[test]
  fn processing_creation() {
    let err = ApiError::processing("loop failed");
    assert_eq!(err.code(), "ProcessingError");
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
  }

  #[test]
  fn config_creation() {
    let err = ApiError::config("bad bind address");
    assert_eq!(err.kind(), ApiErrorKind::Config);
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
  }

  #[test]
  fn from_calculator_error_speed() {
    let calc_err = CalculatorError::SpeedNotPositive { actual: -1 };
    let api_err: ApiError = calc_err.into();
    assert_eq!(api_err.kind(), ApiErrorKind::InvalidArgument);
    assert_eq!(api_err.code(), "InvalidArgument");
    assert_eq!(api_err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
      api_err.to_string(),
      "Words per minute must be positive (greater than 0)"
    );
  }

  #[test]
  fn from_calculator_error_text_not_string() {
    let api_err: ApiError = CalculatorError::TextNotString.into();
    assert_eq!(api_err.kind(), ApiErrorKind::InvalidArgument);
    assert_eq!(api_err.to_string(), "Text must be a string");
  }

  #[test]
  fn from_calculator_error_io_is_internal() {
    use std::sync::Arc;

    let calc_err = CalculatorError::Io(Arc::new(std::io::Error::other("stream closed")));
    let api_err: ApiError = calc_err.into();
    assert_eq!(api_err.kind(), ApiErrorKind::Internal);
    assert_eq!(api_err.status(), StatusCode::INTERNAL_SERVER_ERROR);
  }
}
