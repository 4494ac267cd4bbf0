//! Data Transfer Objects (DTOs) for the exchange use case.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to convert an amount from one currency to another.
///
/// Currency codes are passed through untouched; whether a code is supported
/// is decided by the rate service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeCurrencyInput {
    /// Code of the currency being converted from
    #[schema(example = "USD")]
    pub base_currency_code: String,
    /// Code of the currency being converted to
    #[schema(example = "EUR")]
    pub target_currency_code: String,
    /// Amount in units of the base currency
    #[schema(example = 100.0)]
    pub amount: f64,
}

impl ExchangeCurrencyInput {
    pub fn new(
        base_currency_code: impl Into<String>,
        target_currency_code: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            base_currency_code: base_currency_code.into(),
            target_currency_code: target_currency_code.into(),
            amount,
        }
    }
}

/// Result of a successful conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeCurrencyOutput {
    /// Units of target currency per unit of base currency
    #[schema(example = 0.9)]
    pub exchange_rate: f64,
    /// `amount * exchange_rate`, unrounded
    #[schema(example = 90.0)]
    pub exchange_result: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_uses_camel_case_fields() {
        let json = r#"{"baseCurrencyCode":"USD","targetCurrencyCode":"EUR","amount":100}"#;
        let input: ExchangeCurrencyInput = serde_json::from_str(json).unwrap();
        assert_eq!(input, ExchangeCurrencyInput::new("USD", "EUR", 100.0));
    }

    #[test]
    fn test_output_serializes_camel_case() {
        let output = ExchangeCurrencyOutput {
            exchange_rate: 0.9,
            exchange_result: 90.0,
        };
        let value = serde_json::to_value(output).unwrap();
        assert_eq!(value["exchangeRate"], 0.9);
        assert_eq!(value["exchangeResult"], 90.0);
    }

    #[test]
    fn test_input_missing_amount_rejected() {
        let json = r#"{"baseCurrencyCode":"USD","targetCurrencyCode":"EUR"}"#;
        assert!(serde_json::from_str::<ExchangeCurrencyInput>(json).is_err());
    }
}
