//! Error taxonomy for the exchange service.
//!
//! Failures are values: the use case returns `Result<_, Exception>` and never
//! lets a panic or adapter error cross its boundary.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Discriminator of an [`Exception`].
///
/// The wire form is a plain string. `InternalError` keeps its historical
/// capitalised spelling so existing clients matching on it keep working.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExceptionKind {
    /// Reported by a rate service for a code it does not know.
    UnsupportedCode,
    /// Base or target code rejected by the rate service.
    UnsupportedCurrencyCode,
    /// Rate service failed for any other reason.
    InternalServerError,
    /// Unexpected fault inside the use case.
    InternalError,
    /// Request could not be read by an inbound adapter.
    InvalidRequest,
    /// Any other kind a rate service may report.
    Other(String),
}

impl ExceptionKind {
    pub fn as_str(&self) -> &str {
        match self {
            ExceptionKind::UnsupportedCode => "unsupported-code",
            ExceptionKind::UnsupportedCurrencyCode => "unsupported-currency-code",
            ExceptionKind::InternalServerError => "internal-server-error",
            ExceptionKind::InternalError => "InternalError",
            ExceptionKind::InvalidRequest => "invalid-request",
            ExceptionKind::Other(kind) => kind,
        }
    }
}

impl From<String> for ExceptionKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "unsupported-code" => ExceptionKind::UnsupportedCode,
            "unsupported-currency-code" => ExceptionKind::UnsupportedCurrencyCode,
            "internal-server-error" => ExceptionKind::InternalServerError,
            "InternalError" => ExceptionKind::InternalError,
            "invalid-request" => ExceptionKind::InvalidRequest,
            _ => ExceptionKind::Other(kind),
        }
    }
}

impl From<&str> for ExceptionKind {
    fn from(kind: &str) -> Self {
        ExceptionKind::from(kind.to_string())
    }
}

impl From<ExceptionKind> for String {
    fn from(kind: ExceptionKind) -> Self {
        match kind {
            ExceptionKind::Other(kind) => kind,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ExceptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A modeled failure: a kind plus a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct Exception {
    #[schema(value_type = String, example = "unsupported-currency-code")]
    pub kind: ExceptionKind,
    #[schema(example = "The Base or Target currency code is not supported")]
    pub message: String,
}

impl Exception {
    pub const UNSUPPORTED_CURRENCY_CODE_MESSAGE: &'static str =
        "The Base or Target currency code is not supported";
    pub const INTERNAL_SERVER_ERROR_MESSAGE: &'static str = "Something unexpected happened";
    pub const INTERNAL_ERROR_MESSAGE: &'static str = "Something went wrong";

    pub fn new(kind: impl Into<ExceptionKind>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }

    pub fn unsupported_currency_code() -> Self {
        Self::new(
            ExceptionKind::UnsupportedCurrencyCode,
            Self::UNSUPPORTED_CURRENCY_CODE_MESSAGE,
        )
    }

    pub fn internal_server_error() -> Self {
        Self::new(
            ExceptionKind::InternalServerError,
            Self::INTERNAL_SERVER_ERROR_MESSAGE,
        )
    }

    pub fn internal_error() -> Self {
        Self::new(ExceptionKind::InternalError, Self::INTERNAL_ERROR_MESSAGE)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ExceptionKind::InvalidRequest, message)
    }
}
