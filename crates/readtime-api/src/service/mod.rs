//! Service module

mod reading_time_service;

pub use reading_time_service::{ReadingTimeService, ReadingTimeServiceImpl};
