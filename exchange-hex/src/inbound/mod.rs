//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server that drives the exchange use case.

mod handlers;
mod server;

pub use handlers::ApiError;
pub use server::HttpServer;
