//! Signing secrets and the policy for substituting placeholders.

use std::fmt;

use serde::{Serialize, Serializer};

use super::env::{EnvSource, RuntimeMode};
use super::error::{ConfigError, ConfigResult};

/// Value substituted when a signing secret is not configured.
///
/// Publicly known and therefore insecure. Only acceptable for local work.
pub const PLACEHOLDER_SECRET: &str = "supersecret";

/// Opt-in flag that allows [`PLACEHOLDER_SECRET`] outside development and test.
pub const ALLOW_INSECURE_SECRETS_VAR: &str = "ALLOW_INSECURE_SECRETS";

/// Where a [`Secret`] value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretSource {
    /// Read from the environment.
    Environment,
    /// The built-in [`PLACEHOLDER_SECRET`].
    Placeholder,
}

/// A signing secret. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret {
    value: String,
    source: SecretSource,
}

impl Secret {
    pub fn from_env_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            source: SecretSource::Environment,
        }
    }

    pub fn placeholder() -> Self {
        Self {
            value: PLACEHOLDER_SECRET.to_string(),
            source: SecretSource::Placeholder,
        }
    }

    /// The raw secret, for handing to the signing layer.
    pub fn expose(&self) -> &str {
        &self.value
    }

    pub fn source(&self) -> SecretSource {
        self.source
    }

    pub fn is_placeholder(&self) -> bool {
        self.source == SecretSource::Placeholder
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secret")
            .field("value", &"[REDACTED]")
            .field("source", &self.source)
            .finish()
    }
}

// The host framework reads the plain value from the serialized config.
impl Serialize for Secret {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

/// Decides whether a missing secret may fall back to [`PLACEHOLDER_SECRET`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretPolicy {
    mode: RuntimeMode,
    allow_placeholder: bool,
}

impl SecretPolicy {
    /// Placeholders are allowed in development and test only.
    ///
    /// Unrecognised modes are treated like production.
    pub fn for_mode(mode: RuntimeMode) -> Self {
        let allow_placeholder = mode.is_local();
        Self {
            mode,
            allow_placeholder,
        }
    }

    /// Like [`for_mode`](Self::for_mode), honouring `ALLOW_INSECURE_SECRETS`.
    pub fn from_source(env: &impl EnvSource, mode: RuntimeMode) -> Self {
        let opt_in = env
            .get_nonempty(ALLOW_INSECURE_SECRETS_VAR)
            .is_some_and(|value| parse_flag(ALLOW_INSECURE_SECRETS_VAR, &value));
        let policy = Self::for_mode(mode);
        if opt_in && !policy.allow_placeholder {
            tracing::warn!(
                mode = %policy.mode,
                "{ALLOW_INSECURE_SECRETS_VAR} is set, placeholder secrets are permitted"
            );
        }
        Self {
            allow_placeholder: policy.allow_placeholder || opt_in,
            ..policy
        }
    }

    /// Explicitly allow placeholders regardless of mode.
    pub fn allow_insecure(mode: RuntimeMode) -> Self {
        Self {
            mode,
            allow_placeholder: true,
        }
    }

    pub fn mode(&self) -> &RuntimeMode {
        &self.mode
    }

    pub fn allows_placeholder(&self) -> bool {
        self.allow_placeholder
    }

    /// Read secret `name`, substituting the placeholder when permitted.
    ///
    /// Only the empty string counts as unset; any other value is used as-is.
    pub fn resolve(&self, env: &impl EnvSource, name: &'static str) -> ConfigResult<Secret> {
        if let Some(value) = env.get_present(name) {
            return Ok(Secret::from_env_value(value));
        }
        if !self.allow_placeholder {
            return Err(ConfigError::InsecureSecret {
                name,
                mode: self.mode.clone(),
            });
        }
        tracing::warn!(
            variable = name,
            mode = %self.mode,
            "{name} is not set, using the insecure placeholder secret"
        );
        Ok(Secret::placeholder())
    }
}

fn parse_flag(name: &str, value: &str) -> bool {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        other => {
            tracing::warn!(variable = name, value = other, "unrecognised boolean, treating as false");
            false
        }
    }
}
