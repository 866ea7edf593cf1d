//! Model module

mod request;
mod response;

pub use request::ReadingTimeParams;
pub use response::{
  ApiInfo, BulkItem, BulkResponse, BulkSummary, HealthResponse, ReadingTimeEnvelope,
};
