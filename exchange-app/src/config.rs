//! Configuration loading from environment.

use std::env;
use std::time::Duration;

use exchange_rates::{DEFAULT_API_URL, ProviderConfig, ProviderKind};

/// Application configuration.
#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub provider: ProviderConfig,
    pub rate_fluctuation: bool,
    pub otel_enabled: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port: u16 = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|e| anyhow::anyhow!("PORT must be a port number: {}", e))?;

        let kind: ProviderKind = match lookup("RATE_PROVIDER") {
            Some(value) => value.parse().map_err(|e: String| anyhow::anyhow!(e))?,
            None => ProviderKind::Static,
        };

        let api_key = lookup("EXCHANGE_API_KEY");
        if kind == ProviderKind::Http && api_key.is_none() {
            anyhow::bail!("EXCHANGE_API_KEY environment variable is required for the http provider");
        }

        let timeout_secs: u64 = lookup("EXCHANGE_API_TIMEOUT_SECS")
            .unwrap_or_else(|| "10".to_string())
            .parse()
            .map_err(|e| anyhow::anyhow!("EXCHANGE_API_TIMEOUT_SECS must be whole seconds: {}", e))?;

        Ok(Self {
            port,
            provider: ProviderConfig {
                kind,
                api_url: lookup("EXCHANGE_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
                api_key,
                timeout: Duration::from_secs(timeout_secs),
            },
            rate_fluctuation: parse_flag(lookup("RATE_FLUCTUATION"), "RATE_FLUCTUATION")?,
            otel_enabled: parse_flag(lookup("OTEL_ENABLED"), "OTEL_ENABLED")?,
        })
    }
}

fn parse_flag(value: Option<String>, name: &str) -> anyhow::Result<bool> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(false),
        Some("1") | Some("true") | Some("TRUE") | Some("yes") => Ok(true),
        Some("0") | Some("false") | Some("FALSE") | Some("no") => Ok(false),
        Some(other) => anyhow::bail!("{} must be true or false, got {}", name, other),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.provider.kind, ProviderKind::Static);
        assert_eq!(config.provider.api_url, DEFAULT_API_URL);
        assert_eq!(config.provider.timeout, Duration::from_secs(10));
        assert!(!config.rate_fluctuation);
        assert!(!config.otel_enabled);
    }

    #[test]
    fn test_http_provider_settings() {
        let config = config_from(&[
            ("RATE_PROVIDER", "http"),
            ("EXCHANGE_API_KEY", "secret"),
            ("EXCHANGE_API_URL", "http://localhost:9000/v6"),
            ("EXCHANGE_API_TIMEOUT_SECS", "3"),
        ])
        .unwrap();
        assert_eq!(config.provider.kind, ProviderKind::Http);
        assert_eq!(config.provider.api_key.as_deref(), Some("secret"));
        assert_eq!(config.provider.api_url, "http://localhost:9000/v6");
        assert_eq!(config.provider.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_http_provider_without_key_fails() {
        assert!(config_from(&[("RATE_PROVIDER", "http")]).is_err());
    }

    #[test]
    fn test_invalid_values_fail() {
        assert!(config_from(&[("PORT", "http")]).is_err());
        assert!(config_from(&[("RATE_PROVIDER", "carrier-pigeon")]).is_err());
        assert!(config_from(&[("RATE_FLUCTUATION", "maybe")]).is_err());
    }

    #[test]
    fn test_flags() {
        let config = config_from(&[("RATE_FLUCTUATION", "true"), ("OTEL_ENABLED", "1")]).unwrap();
        assert!(config.rate_fluctuation);
        assert!(config.otel_enabled);
    }
}
