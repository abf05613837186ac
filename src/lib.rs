// ============================================================================
// Precise Money Library
// Currency-aware, immutable monetary values on exact decimal arithmetic
// ============================================================================

//! # Precise Money
//!
//! An immutable money type that pairs an exact decimal magnitude with an
//! ISO-4217-style currency code.
//!
//! ## Features
//!
//! - **Exact arithmetic** on `rust_decimal::Decimal`, never binary floats
//! - **Currency safety**: cross-currency arithmetic and ordering are errors
//! - **Per-currency precision** from a static registry (JPY 0, USD 2, BTC 8, ...)
//! - **Locale-tolerant parsing** of `"1,234.56"`, `"1.234,56"` and `"$10.00"`
//! - **Integer interchange** via smallest units and a fixed 10 000 scale
//! - **Optional serde support** through the `{value, currency_code}` record
//!
//! ## Example
//!
//! ```rust
//! use precise_money::prelude::*;
//!
//! let price = Money::from_currency("USD", "19.99")?;
//! let qty_total = price.multiply(3)?;
//! let shipping = Money::from_smallest_unit_integer("USD", 450)?;
//!
//! let total = Money::sum([qty_total, shipping])?;
//! assert_eq!(total.to_string(), "64.47 USD");
//! assert_eq!(total.to_symbol_string(), "$64.47");
//! assert_eq!(total.to_smallest_unit_integer()?, 6447);
//!
//! let euros = Money::from_currency("EUR", "5")?;
//! assert!(total.add(&euros).is_err());
//! # Ok::<(), MoneyError>(())
//! ```

pub mod currency;
pub mod domain;
pub mod interfaces;
#[cfg(feature = "logging")]
pub mod logging;
pub mod numeric;
pub mod serialization;
pub mod utils;

pub use currency::CurrencyCode;
pub use domain::{ConversionOptions, Money, FIXED_SCALE};
pub use interfaces::{NumericFactor, ToExactDecimal};
pub use numeric::{DecimalContext, MoneyError, MoneyErrorKind, MoneyResult, Rounding};
pub use serialization::MoneyRecord;

// Re-exports for convenience
pub mod prelude {
    pub use crate::currency::{CurrencyCode, NULL_CURRENCY_CODE};
    pub use crate::domain::{ConversionOptions, Money, FIXED_SCALE};
    pub use crate::interfaces::{NumericFactor, ToExactDecimal};
    pub use crate::numeric::{
        parse_monetary_str, DecimalContext, MoneyError, MoneyErrorKind, MoneyResult, Rounding,
    };
    pub use crate::serialization::MoneyRecord;
}
