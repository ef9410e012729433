//! Errors raised while assembling the startup configuration.

use std::path::PathBuf;

use thiserror::Error;

use super::env::RuntimeMode;

/// Reasons the configuration cannot be built.
///
/// Every variant is fatal for startup: the host process should refuse to
/// bind any listener when it receives one.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required variable is not set at all.
    #[error("{name} must be set")]
    MissingVar { name: &'static str },

    /// A required variable is set but holds only whitespace.
    #[error("{name} must not be empty")]
    EmptyVar { name: &'static str },

    /// A secret is unset and placeholder secrets are not allowed in this mode.
    #[error(
        "{name} is not set and placeholder secrets are disabled in {mode} mode \
         (set {name}, or ALLOW_INSECURE_SECRETS=true to opt in)"
    )]
    InsecureSecret {
        name: &'static str,
        mode: RuntimeMode,
    },

    /// The mode-specific env file exists but could not be read or parsed.
    #[error("failed to load env file {}: {source}", path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

/// Result alias for configuration assembly.
pub type ConfigResult<T> = Result<T, ConfigError>;
