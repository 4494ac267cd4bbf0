//! HTTP client for an ExchangeRate-API (v6) style rate service.
//!
//! Looks up a single pair with `GET {base_url}/{api_key}/pair/{BASE}/{TARGET}`.
//! A successful body carries `conversion_rate`; a failed one carries
//! `"result": "error"` and an `error-type` such as `unsupported-code`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;

use exchange_types::{
    Exception, ExceptionKind, ExchangeCurrencyInput, ExchangeError, ExchangeService,
};

pub const DEFAULT_API_URL: &str = "https://v6.exchangerate-api.com/v6";

#[derive(Debug, Deserialize)]
struct PairResponse {
    result: String,
    #[serde(default)]
    conversion_rate: Option<f64>,
    #[serde(default, rename = "error-type")]
    error_type: Option<String>,
}

/// Rate service reached over HTTP.
pub struct HttpRateProvider {
    base_url: String,
    api_key: String,
    http: Client,
}

impl HttpRateProvider {
    /// Creates a provider with reqwest's default client (no request timeout).
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            http: Client::new(),
        }
    }

    /// Creates a provider whose requests give up after `timeout`.
    pub fn with_timeout(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            http,
        })
    }

    fn pair_url(&self, base: &str, target: &str) -> Result<Url, ExchangeError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ExchangeError::Fault(format!("Invalid rate service URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| ExchangeError::Fault("Rate service URL cannot have a path".into()))?
            .pop_if_empty()
            .extend([self.api_key.as_str(), "pair", base, target]);
        Ok(url)
    }

    fn interpret(status: StatusCode, body: &str) -> Result<f64, ExchangeError> {
        let parsed = serde_json::from_str::<PairResponse>(body);

        if let Ok(PairResponse {
            error_type: Some(kind),
            ..
        }) = &parsed
        {
            return Err(ExchangeError::Rejected(Exception::new(
                kind.as_str(),
                format!("Rate service reported {}", kind),
            )));
        }

        if !status.is_success() {
            return Err(ExchangeError::Rejected(Exception::new(
                ExceptionKind::Other(format!("http-{}", status.as_u16())),
                format!("Rate service responded with {}", status),
            )));
        }

        match parsed {
            Ok(PairResponse {
                result,
                conversion_rate: Some(rate),
                ..
            }) if result == "success" => Ok(rate),
            Ok(resp) => Err(ExchangeError::Fault(format!(
                "Rate service returned result '{}' without a conversion rate",
                resp.result
            ))),
            Err(e) => Err(ExchangeError::Fault(format!(
                "Undecodable rate service response: {}",
                e
            ))),
        }
    }
}

#[async_trait]
impl ExchangeService for HttpRateProvider {
    #[tracing::instrument(skip(self, input), fields(base = %input.base_currency_code, target = %input.target_currency_code))]
    async fn get_exchange_rate(&self, input: &ExchangeCurrencyInput) -> Result<f64, ExchangeError> {
        let url = self.pair_url(&input.base_currency_code, &input.target_currency_code)?;

        // without_url: the API key is part of the path
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ExchangeError::Fault(e.without_url().to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ExchangeError::Fault(e.without_url().to_string()))?;

        tracing::debug!(%status, "rate service responded");
        Self::interpret(status, &body)
    }
}
