//! API configuration constants

/// Default bind address
///
/// Localhost port intended for development use.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5540";
