//! Project configuration handed to the commerce backend at startup.

use std::fmt;

use serde::Serialize;

use super::cors::CorsOrigins;
use super::env::{EnvSource, ProcessEnv, RuntimeMode};
use super::error::ConfigResult;
use super::secret::{Secret, SecretPolicy};

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const REDIS_URL_VAR: &str = "REDIS_URL";
pub const STORE_CORS_VAR: &str = "STORE_CORS";
pub const ADMIN_CORS_VAR: &str = "ADMIN_CORS";
pub const AUTH_CORS_VAR: &str = "AUTH_CORS";
pub const JWT_SECRET_VAR: &str = "JWT_SECRET";
pub const COOKIE_SECRET_VAR: &str = "COOKIE_SECRET";

/// Backend project configuration.
///
/// Built once from environment variables:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | `DATABASE_URL` | (none) | Database connection string, passed verbatim |
/// | `REDIS_URL` | (none) | Cache connection string, passed verbatim |
/// | `STORE_CORS` | required | Storefront allowed origins |
/// | `ADMIN_CORS` | required | Admin allowed origins |
/// | `AUTH_CORS` | required | Auth routes allowed origins |
/// | `JWT_SECRET` | `supersecret`* | Token signing secret |
/// | `COOKIE_SECRET` | `supersecret`* | Session cookie signing secret |
///
/// \* Only where the [`SecretPolicy`] permits placeholders.
///
/// # Example
///
/// ```rust
/// use storefront_config::config::{MapEnv, ProjectConfig, RuntimeMode, SecretPolicy};
///
/// let env = MapEnv::from_pairs([
///     ("STORE_CORS", "http://localhost:8000"),
///     ("ADMIN_CORS", "http://localhost:9000"),
///     ("AUTH_CORS", "http://localhost:9000"),
/// ]);
/// let policy = SecretPolicy::for_mode(RuntimeMode::Development);
/// let config = ProjectConfig::from_source(&env, &policy).unwrap();
/// assert!(config.http.jwt_secret.is_placeholder());
/// ```
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redis_url: Option<String>,
    pub http: HttpConfig,
    pub database_driver_options: DatabaseDriverOptions,
}

/// HTTP layer settings: CORS allow-lists and signing secrets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpConfig {
    pub store_cors: CorsOrigins,
    pub admin_cors: CorsOrigins,
    pub auth_cors: CorsOrigins,
    pub jwt_secret: Secret,
    pub cookie_secret: Secret,
}

/// Transport flags for the database client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseDriverOptions {
    pub ssl: bool,
    pub sslmode: String,
}

impl Default for DatabaseDriverOptions {
    fn default() -> Self {
        Self {
            ssl: false,
            sslmode: "disable".to_string(),
        }
    }
}

impl ProjectConfig {
    /// Build the configuration from `env`.
    ///
    /// CORS variables are checked first, in store, admin, auth order, then
    /// the secrets. The first failure is returned.
    pub fn from_source(env: &impl EnvSource, policy: &SecretPolicy) -> ConfigResult<Self> {
        let http = HttpConfig {
            store_cors: CorsOrigins::from_source(env, STORE_CORS_VAR)?,
            admin_cors: CorsOrigins::from_source(env, ADMIN_CORS_VAR)?,
            auth_cors: CorsOrigins::from_source(env, AUTH_CORS_VAR)?,
            jwt_secret: policy.resolve(env, JWT_SECRET_VAR)?,
            cookie_secret: policy.resolve(env, COOKIE_SECRET_VAR)?,
        };

        Ok(Self {
            database_url: optional_url(env, DATABASE_URL_VAR),
            redis_url: optional_url(env, REDIS_URL_VAR),
            http,
            database_driver_options: DatabaseDriverOptions::default(),
        })
    }

    /// Build the configuration from the process environment.
    ///
    /// The secret policy follows the detected [`RuntimeMode`] and the
    /// `ALLOW_INSECURE_SECRETS` opt-in.
    pub fn from_env() -> ConfigResult<Self> {
        let mode = RuntimeMode::detect(&ProcessEnv);
        let policy = SecretPolicy::from_source(&ProcessEnv, mode);
        Self::from_source(&ProcessEnv, &policy)
    }

    /// Whether either signing secret is the built-in placeholder.
    pub fn uses_placeholder_secrets(&self) -> bool {
        self.http.jwt_secret.is_placeholder() || self.http.cookie_secret.is_placeholder()
    }
}

// Connection strings routinely embed credentials.
impl fmt::Debug for ProjectConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |value: &Option<String>| value.as_ref().map(|_| "[REDACTED]");
        f.debug_struct("ProjectConfig")
            .field("database_url", &redact(&self.database_url))
            .field("redis_url", &redact(&self.redis_url))
            .field("http", &self.http)
            .field("database_driver_options", &self.database_driver_options)
            .finish()
    }
}

fn optional_url(env: &impl EnvSource, name: &'static str) -> Option<String> {
    let value = env.get_present(name);
    if value.is_none() {
        tracing::warn!(variable = name, "{name} is not set, the backend may fail to connect");
    }
    value
}
