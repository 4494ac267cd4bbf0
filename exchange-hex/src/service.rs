//! Exchange Currency Use Case
//!
//! Looks up a rate through the `ExchangeService` port and applies it.
//! Contains NO infrastructure logic - pure orchestration.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;

use exchange_types::{
    Exception, ExceptionKind, ExchangeCurrencyInput, ExchangeCurrencyOutput, ExchangeError,
    ExchangeService,
};

/// Application service converting an amount between two currencies.
///
/// Generic over `S: ExchangeService` - the rate service is injected at construction.
/// Every failure, including a panic inside the rate service, comes back as an
/// [`Exception`]:
///
/// | Rate service outcome         | Exception kind              |
/// |------------------------------|-----------------------------|
/// | rejected, `unsupported-code` | `unsupported-currency-code` |
/// | rejected, any other kind     | `internal-server-error`     |
/// | fault or panic               | `InternalError`             |
/// | rate or product not finite   | `InternalError`             |
pub struct ExchangeCurrencyUseCase<S: ExchangeService> {
    service: S,
}

impl<S: ExchangeService> ExchangeCurrencyUseCase<S> {
    /// Creates a new use case over the given rate service.
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Returns a reference to the underlying rate service.
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Converts `input.amount` from the base to the target currency.
    #[tracing::instrument(
        skip(self, input),
        fields(
            base = %input.base_currency_code,
            target = %input.target_currency_code,
            amount = input.amount
        )
    )]
    pub async fn run(
        &self,
        input: ExchangeCurrencyInput,
    ) -> Result<ExchangeCurrencyOutput, Exception> {
        match AssertUnwindSafe(self.convert(&input)).catch_unwind().await {
            Ok(result) => result,
            Err(panic) => {
                tracing::error!(panic = %panic_message(&*panic), "exchange aborted by panic");
                Err(Exception::internal_error())
            }
        }
    }

    async fn convert(
        &self,
        input: &ExchangeCurrencyInput,
    ) -> Result<ExchangeCurrencyOutput, Exception> {
        let exchange_rate = match self.service.get_exchange_rate(input).await {
            Ok(rate) => rate,
            Err(ExchangeError::Rejected(err)) => return Err(handle_service_error(err)),
            Err(ExchangeError::Fault(reason)) => {
                tracing::error!(%reason, "rate lookup failed");
                return Err(Exception::internal_error());
            }
        };

        let exchange_result = calculate_exchange_result(exchange_rate, input.amount);
        if !exchange_result.is_finite() {
            tracing::error!(exchange_rate, amount = input.amount, "exchange result is not finite");
            return Err(Exception::internal_error());
        }

        Ok(ExchangeCurrencyOutput {
            exchange_rate,
            exchange_result: format_currency_value(exchange_result),
        })
    }
}

/// Collapses a rate service rejection into the public taxonomy.
fn handle_service_error(err: Exception) -> Exception {
    tracing::warn!(kind = %err.kind, message = %err.message, "rate service rejected lookup");

    if err.kind == ExceptionKind::UnsupportedCode {
        return Exception::unsupported_currency_code();
    }

    Exception::internal_server_error()
}

fn calculate_exchange_result(exchange_rate: f64, amount: f64) -> f64 {
    exchange_rate * amount
}

// TODO: round to the target currency's minor units once the rate service
// reports them.
fn format_currency_value(amount: f64) -> f64 {
    amount
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        *msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "non-string panic payload"
    }
}
