//! Exchange rate service port.
//!
//! This trait defines the interface for exchange rate services.
//! Implementations can be HTTP clients, static tables, mock providers, etc.

use std::sync::Arc;

use crate::dto::ExchangeCurrencyInput;
use crate::error::Exception;

/// Error type for exchange rate lookups.
#[derive(Debug, thiserror::Error)]
pub enum ExchangeError {
    /// The service answered and reported a failure it knows about.
    #[error("Rate service rejected the request: {0}")]
    Rejected(Exception),

    /// The lookup failed in a way the service could not describe.
    #[error("Rate service fault: {0}")]
    Fault(String),
}

/// Port trait for exchange rate services.
#[async_trait::async_trait]
pub trait ExchangeService: Send + Sync + 'static {
    /// Get the rate from `input.base_currency_code` to `input.target_currency_code`.
    /// Returns how many units of target currency you get for 1 unit of base currency.
    async fn get_exchange_rate(&self, input: &ExchangeCurrencyInput) -> Result<f64, ExchangeError>;
}

#[async_trait::async_trait]
impl<T: ExchangeService + ?Sized> ExchangeService for Arc<T> {
    async fn get_exchange_rate(&self, input: &ExchangeCurrencyInput) -> Result<f64, ExchangeError> {
        (**self).get_exchange_rate(input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(f64);

    #[async_trait::async_trait]
    impl ExchangeService for Fixed {
        async fn get_exchange_rate(
            &self,
            _input: &ExchangeCurrencyInput,
        ) -> Result<f64, ExchangeError> {
            Ok(self.0)
        }
    }

    #[tokio::test]
    async fn test_arc_dyn_delegates_to_inner_service() {
        let service: Arc<dyn ExchangeService> = Arc::new(Fixed(1.25));
        let rate = service
            .get_exchange_rate(&ExchangeCurrencyInput::new("USD", "GBP", 1.0))
            .await
            .unwrap();
        assert_eq!(rate, 1.25);
    }
}
