//! CORS allow-lists.

use serde::Serialize;

use super::env::EnvSource;
use super::error::{ConfigError, ConfigResult};

/// A comma-separated list of allowed origins.
///
/// The raw string is handed to the HTTP layer untouched; [`origins`](Self::origins)
/// is a convenience view for callers that need the individual entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CorsOrigins(String);

impl CorsOrigins {
    /// Wrap `raw`, rejecting empty or whitespace-only values.
    pub fn new(name: &'static str, raw: impl Into<String>) -> ConfigResult<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ConfigError::EmptyVar { name });
        }
        Ok(Self(raw))
    }

    /// Read the required variable `name`.
    pub fn from_source(env: &impl EnvSource, name: &'static str) -> ConfigResult<Self> {
        let raw = env.get(name).ok_or(ConfigError::MissingVar { name })?;
        Self::new(name, raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Individual origins, trimmed, skipping empty entries.
    pub fn origins(&self) -> impl Iterator<Item = &str> {
        self.0
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env::MapEnv;

    #[test]
    fn test_keeps_raw_value() {
        let cors = CorsOrigins::new("STORE_CORS", "http://a.com, http://b.com").unwrap();
        assert_eq!(cors.as_str(), "http://a.com, http://b.com");
    }

    #[test]
    fn test_origins_split_and_trimmed() {
        let cors = CorsOrigins::new("ADMIN_CORS", " http://a.com ,,http://b.com, ").unwrap();
        let origins: Vec<_> = cors.origins().collect();
        assert_eq!(origins, vec!["http://a.com", "http://b.com"]);
    }

    #[test]
    fn test_missing_and_empty_rejected() {
        let env = MapEnv::from_pairs([("AUTH_CORS", "   ")]);
        assert!(matches!(
            CorsOrigins::from_source(&env, "STORE_CORS"),
            Err(ConfigError::MissingVar { name: "STORE_CORS" })
        ));
        assert!(matches!(
            CorsOrigins::from_source(&env, "AUTH_CORS"),
            Err(ConfigError::EmptyVar { name: "AUTH_CORS" })
        ));
    }
}
