//! # Exchange Rates
//!
//! Rate service adapters (outbound side of the hexagon). Both implement the
//! `ExchangeService` port from `exchange-types`:
//! - [`StaticRateProvider`] - hardcoded table for development and testing
//! - [`HttpRateProvider`] - ExchangeRate-API style HTTP service
//!
//! # Example
//! ```
//! use exchange_rates::{CurrencyCode, rate_between};
//!
//! let rate = rate_between(CurrencyCode::USD, CurrencyCode::INR);
//! assert!(rate > 1.0);
//! ```

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use exchange_types::ExchangeService;

mod currencies;
mod http_provider;
mod static_provider;

pub use currencies::{
    CurrencyCode, UnknownCurrency, apply_variance, disable_fluctuation, enable_fluctuation,
    is_fluctuation_enabled, rate_between,
};
pub use http_provider::{DEFAULT_API_URL, HttpRateProvider};
pub use static_provider::StaticRateProvider;

/// Which adapter serves rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    #[default]
    Static,
    Http,
}

impl FromStr for ProviderKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "static" => Ok(ProviderKind::Static),
            "http" => Ok(ProviderKind::Http),
            _ => Err(format!("Unknown rate provider: {} (expected static or http)", s)),
        }
    }
}

/// Settings needed to build a rate service.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub api_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            kind: ProviderKind::Static,
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(10),
        }
    }
}

/// Build the configured rate service.
///
/// # Examples
///
/// ```ignore
/// let provider = build_provider(&ProviderConfig::default())?;
/// let use_case = ExchangeCurrencyUseCase::new(provider);
/// ```
pub fn build_provider(config: &ProviderConfig) -> anyhow::Result<Arc<dyn ExchangeService>> {
    match config.kind {
        ProviderKind::Static => {
            tracing::info!("Using static rate table");
            Ok(Arc::new(StaticRateProvider::new()))
        }
        ProviderKind::Http => {
            let api_key = config
                .api_key
                .as_deref()
                .filter(|k| !k.trim().is_empty())
                .ok_or_else(|| anyhow::anyhow!("An API key is required for the http provider"))?;
            tracing::info!("Using rate service at {}", config.api_url);
            let provider =
                HttpRateProvider::with_timeout(config.api_url.clone(), api_key, config.timeout)?;
            Ok(Arc::new(provider))
        }
    }
}
