//! Process startup: tracing and configuration loading.

mod startup;
mod tracing_init;

pub use startup::{load_config, AppConfig};
pub use tracing_init::{init_tracing, DEFAULT_FILTER};
