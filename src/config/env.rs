//! Environment access, runtime mode detection and env-file loading.

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use super::error::{ConfigError, ConfigResult};

/// Primary variable selecting the runtime mode.
pub const MODE_VAR: &str = "NODE_ENV";

/// Fallback mode variable, consulted when [`MODE_VAR`] is unset or empty.
pub const MODE_FALLBACK_VAR: &str = "APP_ENV";

/// Read-only view of environment variables.
///
/// Configuration is always built through this trait so it can be assembled
/// from a fixed map in tests instead of the live process environment.
pub trait EnvSource {
    /// Get the value of an environment variable by name.
    fn get(&self, name: &str) -> Option<String>;

    /// Get a variable, treating an empty or whitespace-only value as unset.
    fn get_nonempty(&self, name: &str) -> Option<String> {
        self.get(name).filter(|value| !value.trim().is_empty())
    }

    /// Get a variable, treating only the empty string as unset.
    ///
    /// Whitespace is kept as-is, for values that are passed on verbatim.
    fn get_present(&self, name: &str) -> Option<String> {
        self.get(name).filter(|value| !value.is_empty())
    }
}

/// Environment source backed by the current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Environment source backed by an in-memory map.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map environment from key-value pairs.
    pub fn from_pairs<I, K, V>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }
}

impl EnvSource for MapEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Deployment mode the process runs in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RuntimeMode {
    #[default]
    Development,
    Test,
    Staging,
    Production,
    /// Any other mode name, kept verbatim.
    Other(String),
}

impl RuntimeMode {
    /// Parse a mode name, ignoring case. Empty input means development.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        match value.to_ascii_lowercase().as_str() {
            "" | "development" | "dev" => Self::Development,
            "test" => Self::Test,
            "staging" => Self::Staging,
            "production" | "prod" => Self::Production,
            _ => Self::Other(value.to_string()),
        }
    }

    /// Detect the mode from `NODE_ENV`, falling back to `APP_ENV`.
    pub fn detect(env: &impl EnvSource) -> Self {
        env.get_nonempty(MODE_VAR)
            .or_else(|| env.get_nonempty(MODE_FALLBACK_VAR))
            .map(|value| Self::parse(&value))
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Staging => "staging",
            Self::Production => "production",
            Self::Other(name) => name,
        }
    }

    /// Whether this mode is known to run only on developer or CI machines.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Development | Self::Test)
    }
}

impl fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name of the env file loaded for `mode`.
///
/// Test, staging and production each have a dedicated file; every other
/// mode, development included, reads the plain `.env`.
pub fn env_file_name(mode: &RuntimeMode) -> String {
    match mode {
        RuntimeMode::Test | RuntimeMode::Staging | RuntimeMode::Production => {
            format!(".env.{}", mode.as_str())
        }
        RuntimeMode::Development | RuntimeMode::Other(_) => ".env".to_string(),
    }
}

/// Load the env file for `mode` from `dir` into the process environment.
///
/// Variables that are already set keep their value. Returns the path that
/// was loaded, or `None` when the file does not exist.
///
/// Mutates the process environment, so call it before spawning threads.
pub fn load_env(mode: &RuntimeMode, dir: &Path) -> ConfigResult<Option<PathBuf>> {
    let path = dir.join(env_file_name(mode));
    match dotenvy::from_path(&path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "loaded env file");
            Ok(Some(path))
        }
        Err(dotenvy::Error::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no env file, using process environment");
            Ok(None)
        }
        Err(source) => Err(ConfigError::EnvFile { path, source }),
    }
}
