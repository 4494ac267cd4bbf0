//! # Exchange Types
//!
//! Data structures and port traits for the currency exchange service.
//! This crate has ZERO IO dependencies - only DTOs, the error taxonomy
//! and trait definitions.
//!
//! ## Architecture
//!
//! This crate is the **innermost core** of the hexagonal architecture:
//! - `dto/` - Input and output of the exchange use case
//! - `error/` - The `Exception` value returned across the use-case boundary
//! - `ports/` - Trait definitions that rate adapters must implement

pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use dto::{ExchangeCurrencyInput, ExchangeCurrencyOutput};
pub use error::{Exception, ExceptionKind};
pub use ports::{ExchangeError, ExchangeService};
