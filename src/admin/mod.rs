//! Admin UI build settings.
//!
//! Only the dev-server override hook lives here; the build tool itself is
//! driven by the host framework.

mod dev_server;

use serde_json::Value;

pub use dev_server::{DevServerOverrides, ALLOW_ALL_HOSTS, BIND_ALL_INTERFACES, HMR_PORT};

/// Admin section of the application config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdminConfig {
    pub dev_server: DevServerOverrides,
}

/// Apply the default dev-server overrides to `config`.
pub fn apply_dev_server_overrides(config: Value) -> Value {
    DevServerOverrides::default().apply(config)
}
