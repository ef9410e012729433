//! Dev-server override for the admin UI build tool.

use serde_json::{Map, Value};

/// Bind address that listens on every interface.
pub const BIND_ALL_INTERFACES: &str = "0.0.0.0";

/// `allowedHosts` value that accepts any `Host` header.
pub const ALLOW_ALL_HOSTS: &str = "all";

/// Port the hot-reload socket is pinned to.
pub const HMR_PORT: u16 = 5173;

/// Settings forced onto the admin dev server.
///
/// The defaults make the server reachable behind load balancers and on
/// direct IPs, with the hot-reload socket on a fixed port so it can be
/// exposed through the container.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use storefront_config::admin::DevServerOverrides;
///
/// let config = json!({ "root": "src/admin", "server": { "open": true } });
/// let patched = DevServerOverrides::default().apply(config);
///
/// assert_eq!(patched["root"], "src/admin");
/// assert_eq!(patched["server"]["open"], true);
/// assert_eq!(patched["server"]["host"], "0.0.0.0");
/// assert_eq!(patched["server"]["hmr"]["port"], 5173);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevServerOverrides {
    pub host: String,
    pub allowed_hosts: String,
    pub hmr_port: u16,
    pub hmr_client_port: u16,
}

impl Default for DevServerOverrides {
    fn default() -> Self {
        Self {
            host: BIND_ALL_INTERFACES.to_string(),
            allowed_hosts: ALLOW_ALL_HOSTS.to_string(),
            hmr_port: HMR_PORT,
            hmr_client_port: HMR_PORT,
        }
    }
}

impl DevServerOverrides {
    /// Rewrite a dev-server configuration tree.
    ///
    /// Sets `server.host`, `server.allowedHosts`, `server.hmr.port` and
    /// `server.hmr.clientPort`. Every other key is kept as it was. A
    /// non-object at the root, at `server` or at `server.hmr` is replaced
    /// by an empty object before the overrides are written.
    pub fn apply(&self, config: Value) -> Value {
        let mut root = into_object(config);

        let mut server = into_object(root.remove("server").unwrap_or(Value::Null));
        server.insert("host".into(), Value::from(self.host.as_str()));
        server.insert("allowedHosts".into(), Value::from(self.allowed_hosts.as_str()));

        let mut hmr = into_object(server.remove("hmr").unwrap_or(Value::Null));
        hmr.insert("port".into(), Value::from(self.hmr_port));
        hmr.insert("clientPort".into(), Value::from(self.hmr_client_port));

        server.insert("hmr".into(), Value::Object(hmr));
        root.insert("server".into(), Value::Object(server));
        Value::Object(root)
    }

    /// The overrides alone, as they appear in an otherwise empty config.
    pub fn to_json(&self) -> Value {
        self.apply(Value::Object(Map::new()))
    }
}

fn into_object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
