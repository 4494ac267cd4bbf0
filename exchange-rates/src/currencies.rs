//! Macro-generated table of known currencies and their USD rates.
//!
//! # Adding a New Currency
//! Add a line to the `define_currencies!` invocation at the bottom:
//! ```ignore
//! define_currencies! {
//!     // ... existing currencies ...
//!     SEK => ("SEK", "kr", "Swedish Krona", 0.095, 0.5),
//! }
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

// ─────────────────────────────────────────────────────────────────────────────
// Global Fluctuation Control
// ─────────────────────────────────────────────────────────────────────────────

static FLUCTUATION_ENABLED: AtomicBool = AtomicBool::new(false);

/// Enable random rate fluctuation for realistic simulation.
pub fn enable_fluctuation() {
    FLUCTUATION_ENABLED.store(true, Ordering::Relaxed);
}

/// Disable rate fluctuation (use base rates only).
pub fn disable_fluctuation() {
    FLUCTUATION_ENABLED.store(false, Ordering::Relaxed);
}

/// Check if fluctuation is enabled.
pub fn is_fluctuation_enabled() -> bool {
    FLUCTUATION_ENABLED.load(Ordering::Relaxed)
}

fn fluctuate(base_rate: f64, max_variance_percent: f64) -> f64 {
    if !is_fluctuation_enabled() {
        return base_rate;
    }
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .subsec_nanos();
    let random_factor = ((nanos % 2001) as f64 / 1000.0) - 1.0;
    apply_variance(base_rate, max_variance_percent, random_factor)
}

/// Moves `base_rate` by `factor` (clamped to [-1.0, 1.0]) times `max_variance_percent`.
pub fn apply_variance(base_rate: f64, max_variance_percent: f64, factor: f64) -> f64 {
    let factor = factor.clamp(-1.0, 1.0);
    base_rate + base_rate * (max_variance_percent / 100.0) * factor
}

/// Returned when a code is not in the table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported currency: {0}")]
pub struct UnknownCurrency(pub String);

/// Defines the currency table.
///
/// # Syntax
/// ```ignore
/// define_currencies! {
///     Name => ("CODE", "SYMBOL", "display name", to_usd_rate, variance%),
/// }
/// ```
macro_rules! define_currencies {
    (
        $(
            $name:ident => ($code:literal, $symbol:literal, $display:literal, $to_usd:expr, $variance:expr)
        ),* $(,)?
    ) => {
        /// A currency known to the static rate table.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
        #[serde(rename_all = "UPPERCASE")]
        pub enum CurrencyCode {
            $($name),*
        }

        impl CurrencyCode {
            pub fn code(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $code),*
                }
            }

            pub fn symbol(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $symbol),*
                }
            }

            pub fn display_name(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $display),*
                }
            }

            /// USD value of one unit, without fluctuation.
            pub fn base_to_usd_rate(&self) -> f64 {
                match self {
                    $(CurrencyCode::$name => $to_usd),*
                }
            }

            /// Largest fluctuation, in percent of the base rate.
            pub fn max_variance_percent(&self) -> f64 {
                match self {
                    $(CurrencyCode::$name => $variance),*
                }
            }

            /// USD value of one unit, fluctuated when simulation is on.
            pub fn to_usd_rate(&self) -> f64 {
                fluctuate(self.base_to_usd_rate(), self.max_variance_percent())
            }

            pub fn all() -> &'static [CurrencyCode] {
                &[$(CurrencyCode::$name),*]
            }
        }

        impl std::fmt::Display for CurrencyCode {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.code())
            }
        }

        impl std::str::FromStr for CurrencyCode {
            type Err = UnknownCurrency;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_uppercase().as_str() {
                    $($code => Ok(CurrencyCode::$name),)*
                    _ => Err(UnknownCurrency(s.to_string())),
                }
            }
        }
    };
}

/// Units of `to` per one unit of `from`.
pub fn rate_between(from: CurrencyCode, to: CurrencyCode) -> f64 {
    if from == to {
        return 1.0;
    }
    from.to_usd_rate() / to.to_usd_rate()
}

// ─────────────────────────────────────────────────────────────────────────────
// CURRENCY DEFINITIONS
// ─────────────────────────────────────────────────────────────────────────────

define_currencies! {
    USD => ("USD", "$", "US Dollar", 1.0, 0.0),
    EUR => ("EUR", "€", "Euro", 1.087, 0.5),
    GBP => ("GBP", "£", "Pound Sterling", 1.266, 0.5),
    INR => ("INR", "₹", "Indian Rupee", 0.01203, 0.3),
    JPY => ("JPY", "¥", "Japanese Yen", 0.0067, 0.5),
    CHF => ("CHF", "Fr", "Swiss Franc", 1.13, 0.4),
    CAD => ("CAD", "$", "Canadian Dollar", 0.73, 0.4),
    AUD => ("AUD", "$", "Australian Dollar", 0.66, 0.6),
}
