//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use exchange_types::{Exception, ExchangeCurrencyInput, ExchangeCurrencyOutput};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Convert an amount between two currencies
#[utoipa::path(
    post,
    path = "/api/exchange",
    tag = "exchange",
    request_body = ExchangeCurrencyInput,
    responses(
        (status = 200, description = "Converted amount", body = ExchangeCurrencyOutput),
        (status = 400, description = "Currency code not supported, or request body unreadable", body = Exception,
            example = json!({"kind": "unsupported-currency-code", "message": "The Base or Target currency code is not supported"})),
        (status = 502, description = "Rate service failed", body = Exception,
            example = json!({"kind": "internal-server-error", "message": "Something unexpected happened"})),
        (status = 500, description = "Unexpected failure", body = Exception,
            example = json!({"kind": "InternalError", "message": "Something went wrong"}))
    )
)]
async fn exchange() {}

/// OpenAPI documentation for the Exchange API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Currency Exchange API",
        version = "1.0.0",
        description = "Converts an amount between two currencies using rates from an external rate service.",
        license(name = "MIT"),
    ),
    paths(health, exchange),
    components(schemas(ExchangeCurrencyInput, ExchangeCurrencyOutput, Exception)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "exchange", description = "Currency conversion"),
    )
)]
pub struct ApiDoc;
