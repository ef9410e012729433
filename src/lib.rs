//! Storefront Config - startup configuration for a headless commerce backend.
//!
//! This crate assembles the configuration record the backend reads once at
//! process start:
//!
//! - **config**: Environment loading, CORS allow-lists, signing secrets
//! - **admin**: Dev-server override hook for the admin UI build tool
//! - **bootstrap**: Tracing initialization and one-call config loading
//!
//! # Features
//!
//! - `config` - Configuration assembly (enabled by default)
//! - `admin` - Admin dev-server overrides (enabled by default)
//! - `bootstrap` - Tracing setup and [`load_config`] (enabled by default)
//! - `full` - All features
//!
//! # Example
//!
//! ```rust,no_run
//! use storefront_config::{init_tracing, load_config, DEFAULT_FILTER};
//!
//! fn main() {
//!     init_tracing(DEFAULT_FILTER);
//!     let config = match load_config(std::path::Path::new(".")) {
//!         Ok(config) => config,
//!         Err(err) => {
//!             eprintln!("refusing to start: {err}");
//!             std::process::exit(1);
//!         }
//!     };
//!
//!     // Hand the record to the backend
//!     let _json = config.to_json();
//! }
//! ```

#[cfg(feature = "config")]
pub mod config;

#[cfg(feature = "admin")]
pub mod admin;

#[cfg(feature = "bootstrap")]
pub mod bootstrap;

// Re-exports for convenience
#[cfg(feature = "config")]
pub use config::{ConfigError, EnvSource, MapEnv, ProjectConfig, RuntimeMode, SecretPolicy};

#[cfg(feature = "admin")]
pub use admin::{apply_dev_server_overrides, DevServerOverrides};

#[cfg(feature = "bootstrap")]
pub use bootstrap::{init_tracing, load_config, AppConfig, DEFAULT_FILTER};
