//! readtime-api crate
//!
//! Web server exposing reading-time estimation as an HTTP API.
//!
//! ## Endpoints
//! - `GET /` - Reading-time calculation (query: `text`, `wpm`)
//! - `GET /health/` - Health check
//! - `POST /bulk/` - Bulk calculation over a list of texts
//!
//! ## Usage Example
//! ```bash
//! curl 'http://127.0.0.1:5540/?text=Hello+from+Nakuru+Kenya&wpm=300'
//!
//! curl -X POST http://127.0.0.1:5540/bulk/ \
//!   -H "Content-Type: application/json" \
//!   -d '{"texts": ["First text", "Second text"], "wpm": 250}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{BulkResponse, HealthResponse, ReadingTimeEnvelope, ReadingTimeParams};
pub use service::ReadingTimeServiceImpl;
