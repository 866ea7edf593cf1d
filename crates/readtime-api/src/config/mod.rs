//! Config module

mod constants;
mod env;

pub use constants::DEFAULT_BIND_ADDR;
pub use env::Config;
