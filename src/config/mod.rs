//! Project configuration assembled from environment variables.

mod cors;
mod env;
mod error;
mod project;
mod secret;

pub use cors::CorsOrigins;
pub use env::{
    env_file_name, load_env, EnvSource, MapEnv, ProcessEnv, RuntimeMode, MODE_FALLBACK_VAR,
    MODE_VAR,
};
pub use error::{ConfigError, ConfigResult};
pub use project::{
    DatabaseDriverOptions, HttpConfig, ProjectConfig, ADMIN_CORS_VAR, AUTH_CORS_VAR,
    COOKIE_SECRET_VAR, DATABASE_URL_VAR, JWT_SECRET_VAR, REDIS_URL_VAR, STORE_CORS_VAR,
};
pub use secret::{
    Secret, SecretPolicy, SecretSource, ALLOW_INSECURE_SECRETS_VAR, PLACEHOLDER_SECRET,
};
