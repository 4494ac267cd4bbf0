//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use utoipa::OpenApi;

use exchange_types::{Exception, ExceptionKind, ExchangeCurrencyInput, ExchangeService};

use crate::ExchangeCurrencyUseCase;
use crate::openapi::ApiDoc;

/// Application state shared across handlers.
pub struct AppState<S: ExchangeService> {
    pub use_case: ExchangeCurrencyUseCase<S>,
}

/// Wrapper to implement IntoResponse for Exception (orphan rule workaround).
#[derive(Debug)]
pub struct ApiError(pub Exception);

impl From<Exception> for ApiError {
    fn from(err: Exception) -> Self {
        ApiError(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(Exception::invalid_request(rejection.body_text()))
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.kind {
            ExceptionKind::UnsupportedCurrencyCode | ExceptionKind::InvalidRequest => {
                StatusCode::BAD_REQUEST
            }
            ExceptionKind::InternalServerError => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.0)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Convert an amount between two currencies.
///
/// Body rejections are answered with the same `Exception` JSON as every other error.
#[tracing::instrument(skip_all)]
pub async fn exchange<S: ExchangeService>(
    State(state): State<Arc<AppState<S>>>,
    payload: Result<Json<ExchangeCurrencyInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload?;
    let output = state.use_case.run(req).await?;
    Ok(Json(output))
}

/// Serve the OpenAPI document.
pub async fn openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(
            ApiError(Exception::unsupported_currency_code()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError(Exception::internal_server_error()).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError(Exception::invalid_request("bad body")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError(Exception::internal_error()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
