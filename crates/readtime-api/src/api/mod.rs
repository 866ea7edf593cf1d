//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::{bulk_method_not_allowed, get_reading_time, health_check, post_bulk};
pub use routes::{create_router, run_server};
pub use state::AppState;
