//! The runtime mode is fixed before the env file is read.
//!
//! Kept in its own test binary: it clears and loads process-wide variables.

use std::fs;

use storefront_config::{load_config, RuntimeMode};

#[test]
fn node_env_inside_env_file_does_not_change_mode() {
    std::env::remove_var("NODE_ENV");
    std::env::remove_var("APP_ENV");

    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(".env"),
        "\
NODE_ENV=production
STORE_CORS=http://localhost:8000
ADMIN_CORS=http://localhost:9000
AUTH_CORS=http://localhost:9000
",
    )
    .unwrap();

    let config = load_config(dir.path()).unwrap();

    // The development file was loaded, and it did set NODE_ENV.
    assert_eq!(std::env::var("NODE_ENV").as_deref(), Ok("production"));
    assert_eq!(config.mode, RuntimeMode::Development);
    assert!(config.project.uses_placeholder_secrets());
}
