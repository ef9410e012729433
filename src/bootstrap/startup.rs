//! One-shot configuration loading for the host process.

use std::path::Path;

use serde_json::{json, Value};

use crate::admin::AdminConfig;
use crate::config::{
    load_env, ConfigResult, EnvSource, ProcessEnv, ProjectConfig, RuntimeMode, SecretPolicy,
};

/// Complete application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mode: RuntimeMode,
    pub project: ProjectConfig,
    pub admin: AdminConfig,
}

impl AppConfig {
    /// Build from `env` without touching the process environment.
    pub fn from_source(env: &impl EnvSource) -> ConfigResult<Self> {
        Self::from_source_with_mode(env, RuntimeMode::detect(env))
    }

    /// Build from `env` for an already resolved `mode`.
    ///
    /// The mode variables in `env` are not consulted.
    pub fn from_source_with_mode(env: &impl EnvSource, mode: RuntimeMode) -> ConfigResult<Self> {
        let policy = SecretPolicy::from_source(env, mode.clone());
        let project = ProjectConfig::from_source(env, &policy)?;
        Ok(Self {
            mode,
            project,
            admin: AdminConfig::default(),
        })
    }

    /// Render in the host framework's shape.
    ///
    /// The admin build hook is emitted as the settings it forces onto an
    /// empty dev-server config.
    pub fn to_json(&self) -> serde_json::Result<Value> {
        Ok(json!({
            "projectConfig": serde_json::to_value(&self.project)?,
            "admin": {
                "vite": self.admin.dev_server.to_json(),
            },
        }))
    }
}

/// Load the env file for the current mode from `dir`, then build the config.
///
/// The mode is read from the process environment before the file is
/// loaded and is kept for the rest of assembly. A `NODE_ENV` inside the
/// env file does not change which mode, or which secret policy, applies.
pub fn load_config(dir: &Path) -> ConfigResult<AppConfig> {
    let mode = RuntimeMode::detect(&ProcessEnv);
    let env_file = load_env(&mode, dir)?;
    let config = AppConfig::from_source_with_mode(&ProcessEnv, mode)?;

    let http = &config.project.http;
    tracing::info!(
        mode = %config.mode,
        env_file = ?env_file,
        database_configured = config.project.database_url.is_some(),
        cache_configured = config.project.redis_url.is_some(),
        store_origins = http.store_cors.origins().count(),
        admin_origins = http.admin_cors.origins().count(),
        auth_origins = http.auth_cors.origins().count(),
        placeholder_secrets = config.project.uses_placeholder_secrets(),
        "configuration loaded"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, MapEnv, PLACEHOLDER_SECRET};

    fn base_env() -> MapEnv {
        MapEnv::from_pairs([
            ("STORE_CORS", "http://store.test"),
            ("ADMIN_CORS", "http://admin.test"),
            ("AUTH_CORS", "http://admin.test,http://store.test"),
        ])
    }

    #[test]
    fn test_from_source_detects_mode() {
        let mut env = base_env();
        env.set("NODE_ENV", "test");
        let config = AppConfig::from_source(&env).unwrap();
        assert_eq!(config.mode, RuntimeMode::Test);
        assert_eq!(config.admin, AdminConfig::default());
    }

    #[test]
    fn test_explicit_mode_ignores_mode_vars() {
        let mut env = base_env();
        env.set("NODE_ENV", "production");
        let config = AppConfig::from_source_with_mode(&env, RuntimeMode::Development).unwrap();
        assert_eq!(config.mode, RuntimeMode::Development);
        assert!(config.project.uses_placeholder_secrets());
    }

    #[test]
    fn test_mixed_case_production_requires_secrets() {
        for raw in ["Production", "PRODUCTION", "prod"] {
            let mut env = base_env();
            env.set("NODE_ENV", raw);
            assert!(
                matches!(AppConfig::from_source(&env), Err(ConfigError::InsecureSecret { .. })),
                "{raw}"
            );
        }
    }

    #[test]
    fn test_production_requires_secrets_or_opt_in() {
        let mut env = base_env();
        env.set("NODE_ENV", "production");
        assert!(matches!(
            AppConfig::from_source(&env),
            Err(ConfigError::InsecureSecret { .. })
        ));

        env.set("ALLOW_INSECURE_SECRETS", "1");
        let config = AppConfig::from_source(&env).unwrap();
        assert!(config.project.uses_placeholder_secrets());
    }

    #[test]
    fn test_to_json_shape() {
        let mut env = base_env();
        env.set("DATABASE_URL", "postgres://localhost/shop");
        env.set("REDIS_URL", "redis://localhost:6379");
        let json = AppConfig::from_source(&env).unwrap().to_json().unwrap();

        let project = &json["projectConfig"];
        assert_eq!(project["databaseUrl"], "postgres://localhost/shop");
        assert_eq!(project["redisUrl"], "redis://localhost:6379");
        assert_eq!(project["http"]["authCors"], "http://admin.test,http://store.test");
        assert_eq!(project["http"]["jwtSecret"], PLACEHOLDER_SECRET);
        assert_eq!(project["databaseDriverOptions"]["sslmode"], "disable");

        let server = &json["admin"]["vite"]["server"];
        assert_eq!(server["host"], "0.0.0.0");
        assert_eq!(server["allowedHosts"], "all");
        assert_eq!(server["hmr"]["port"], 5173);
        assert_eq!(server["hmr"]["clientPort"], 5173);
    }
}
