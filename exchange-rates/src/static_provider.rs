//! In-process rate service backed by the currency table.

use async_trait::async_trait;
use exchange_types::{
    Exception, ExceptionKind, ExchangeCurrencyInput, ExchangeError, ExchangeService,
};

use crate::currencies::{CurrencyCode, UnknownCurrency, rate_between};

/// Rate service for development and testing. Needs no network.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticRateProvider;

impl StaticRateProvider {
    pub fn new() -> Self {
        Self
    }

    fn parse(code: &str) -> Result<CurrencyCode, ExchangeError> {
        code.parse().map_err(|err: UnknownCurrency| {
            ExchangeError::Rejected(Exception::new(
                ExceptionKind::UnsupportedCode,
                err.to_string(),
            ))
        })
    }
}

#[async_trait]
impl ExchangeService for StaticRateProvider {
    async fn get_exchange_rate(&self, input: &ExchangeCurrencyInput) -> Result<f64, ExchangeError> {
        let from = Self::parse(&input.base_currency_code)?;
        let to = Self::parse(&input.target_currency_code)?;
        let rate = rate_between(from, to);
        tracing::debug!(%from, %to, rate, "static rate lookup");
        Ok(rate)
    }
}
