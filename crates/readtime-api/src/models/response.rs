//! Response model definitions

use serde::Serialize;
use serde_json::Value as JsonValue;

use readtime::{CalculatorResult, ReadingTimeResult};

/// Version string advertised in envelopes
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of characters of source text echoed back per bulk item
const PREVIEW_MAX_CHARS: usize = 50;

/// Health check payload
#[derive(Debug, Serialize)]
pub struct HealthResponse {
  /// Service name
  pub service: &'static str,
  /// Crate version
  pub version: &'static str,
  /// Operational status marker
  pub status: &'static str,
  /// Message for humans probing the endpoint
  pub message: &'static str,
  /// Pointer to the main endpoint
  pub documentation: &'static str,
}

impl HealthResponse {
  /// Builds the payload reported while the service is up
  #[must_use]
  pub fn operational() -> Self {
    Self {
      service: "Reading Time API",
      version: API_VERSION,
      status: "operational",
      message: "API is ready to calculate your reading times!",
      documentation: "Use /?text=Your+text+here",
    }
  }
}

/// Success envelope for the single-text endpoint
#[derive(Debug, Serialize)]
pub struct ReadingTimeEnvelope {
  /// Fixed "success" marker
  pub status: &'static str,
  /// Calculation result
  pub data: ReadingTimeResult,
  /// Metadata about the API itself
  pub api_info: ApiInfo,
}

impl ReadingTimeEnvelope {
  /// Wraps a calculation result in the success envelope
  #[must_use]
  pub fn success(data: ReadingTimeResult) -> Self {
    Self {
      status: "success",
      data,
      api_info: ApiInfo::reading_time(),
    }
  }
}

/// Envelope metadata describing the API
#[derive(Debug, Serialize)]
pub struct ApiInfo {
  /// Crate version
  pub version: &'static str,
  /// Endpoint name
  pub endpoint: &'static str,
  /// Name of the rounding convention applied
  pub calculation: &'static str,
}

impl ApiInfo {
  fn reading_time() -> Self {
    Self {
      version: API_VERSION,
      endpoint: "reading-time",
      calculation: "rounded_up_minutes",
    }
  }
}

/// Bulk calculation response
#[derive(Debug, Serialize)]
pub struct BulkResponse {
  /// Fixed "success" marker; per-item failures live in `results`
  pub status: &'static str,
  /// Batch totals
  pub summary: BulkSummary,
  /// Per-item entries, in input order
  pub results: Vec<BulkItem>,
}

impl BulkResponse {
  /// Builds the envelope, deriving the summary from the per-item entries
  #[must_use]
  pub fn from_results(results: Vec<BulkItem>, words_per_minute: JsonValue) -> Self {
    let successful = results.iter().filter(|item| !item.is_error()).count();
    let failed = results.len() - successful;

    Self {
      status: "success",
      summary: BulkSummary {
        total_texts: results.len(),
        successful,
        failed,
        words_per_minute,
      },
      results,
    }
  }
}

/// Batch totals for a bulk response
#[derive(Debug, Serialize)]
pub struct BulkSummary {
  /// Number of input texts
  pub total_texts: usize,
  /// Items that calculated successfully
  pub successful: usize,
  /// Items that failed
  pub failed: usize,
  /// The requested speed, echoed as-is (or the configured default)
  pub words_per_minute: JsonValue,
}

/// One entry in the bulk results array
///
/// A failed item keeps its position: `error` carries the reason and the
/// count fields serialize as null.
#[derive(Debug, Serialize)]
pub struct BulkItem {
  /// Position of the source text in the request list
  pub text_index: usize,
  /// Truncated echo of the source text
  pub text_preview: String,
  /// Failure reason, absent on success
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
  /// Reading time, null when the item failed
  pub minutes: Option<u64>,
  /// Word count, null when the item failed
  pub word_count: Option<u64>,
  /// Speed used, absent when the item failed
  #[serde(skip_serializing_if = "Option::is_none")]
  pub words_per_minute: Option<u64>,
  /// Display string, absent when the item failed
  #[serde(skip_serializing_if = "Option::is_none")]
  pub display: Option<String>,
}

impl BulkItem {
  /// Builds the entry for one input item from its calculation outcome
  ///
  /// # Arguments
  /// * `text_index` - position in the request list
  /// * `source` - the raw JSON item; non-strings are previewed via their
  ///   JSON rendering
  /// * `outcome` - result of the calculation for this item
  #[must_use]
  pub fn from_outcome(
    text_index: usize,
    source: &JsonValue,
    outcome: CalculatorResult<ReadingTimeResult>,
  ) -> Self {
    let text_preview = match source.as_str() {
      Some(text) => text_preview(text),
      None => text_preview(&source.to_string()),
    };

    match outcome {
      Ok(result) => Self {
        text_index,
        text_preview,
        error: None,
        minutes: Some(result.minutes),
        word_count: Some(result.word_count),
        words_per_minute: Some(result.words_per_minute),
        display: Some(result.display),
      },
      Err(err) => Self {
        text_index,
        text_preview,
        error: Some(err.to_string()),
        minutes: None,
        word_count: None,
        words_per_minute: None,
        display: None,
      },
    }
  }

  /// Whether this entry records a per-item failure
  #[must_use]
  pub fn is_error(&self) -> bool {
    self.error.is_some()
  }
}

/// Truncates `text` to the first 50 characters, marking longer input.
///
/// Counts characters rather than bytes so multi-byte input never splits
/// mid-character.
fn text_preview(text: &str) -> String {
  let mut preview: String = text.chars().take(PREVIEW_MAX_CHARS).collect();
  if text.chars().count() > PREVIEW_MAX_CHARS {
    preview.push_str("...");
  }
  preview
}
