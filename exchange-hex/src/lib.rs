//! # Exchange Hex
//!
//! Application service layer and HTTP adapter for the currency exchange service.
//!
//! ## Architecture
//!
//! - `service/` - The exchange use case (orchestrates one rate lookup)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi/` - OpenAPI document served by the adapter
//!
//! The use case is generic over `S: ExchangeService`, allowing
//! different rate services to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use service::ExchangeCurrencyUseCase;
