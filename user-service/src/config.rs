// Runtime configuration
// Read once at startup from the process environment (and an optional .env file)

use crate::error::{ServiceError, ServiceResult};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ENV_NAME: &str = "local";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// TCP port to listen on (`PORT`)
    pub port: u16,
    /// Deployment label echoed in every response (`ENV_NAME`)
    pub env_name: String,
}

impl ServiceConfig {
    pub fn new(port: u16, env_name: impl Into<String>) -> Self {
        Self {
            port,
            env_name: env_name.into(),
        }
    }

    /// Load `.env` if present, then read `PORT` and `ENV_NAME`.
    pub fn from_env() -> ServiceResult<Self> {
        match dotenv::dotenv() {
            Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
            Err(err) if err.not_found() => {}
            Err(err) => return Err(ServiceError::Config(format!("failed to read .env: {}", err))),
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset and empty values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> ServiceResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                ServiceError::Config(format!("PORT must be a port number, got '{}'", raw))
            })?,
            None => DEFAULT_PORT,
        };

        let env_name = get("ENV_NAME").unwrap_or_else(|| DEFAULT_ENV_NAME.to_string());

        Ok(Self { port, env_name })
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PORT, DEFAULT_ENV_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServiceConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.port, 3000);
        assert_eq!(config.env_name, "local");
    }

    #[test]
    fn test_reads_port_and_env_name() {
        let config =
            ServiceConfig::from_lookup(lookup(&[("PORT", "8080"), ("ENV_NAME", "homol")])).unwrap();
        assert_eq!(config, ServiceConfig::new(8080, "homol"));
    }

    #[test]
    fn test_empty_values_fall_back() {
        let config = ServiceConfig::from_lookup(lookup(&[("PORT", ""), ("ENV_NAME", "")])).unwrap();
        assert_eq!(config, ServiceConfig::default());
    }

    #[test]
    fn test_invalid_port_is_config_error() {
        let err = ServiceConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
        assert!(matches!(err, ServiceError::Config(_)));

        let err = ServiceConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
        assert!(err.to_string().contains("70000"));
    }
}
