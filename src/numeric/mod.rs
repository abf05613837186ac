// ============================================================================
// Numeric Module
// Exact decimal arithmetic, quantization and parsing for monetary values
// ============================================================================
//
// This module provides:
// - MoneyError: Error taxonomy shared by the whole crate
// - DecimalContext / Rounding: call-scoped precision and rounding policy
// - parse_monetary_str: locale-tolerant amount parsing
//
// Design principles:
// - No floating-point arithmetic
// - All fallible operations return Result (no panics)
// - No global mutable context; precision travels with each call

mod context;
mod errors;
mod parser;

pub use context::{quantize, quantize_default, DecimalContext, Rounding, DECIMAL_PRECISION};
pub use errors::{MoneyError, MoneyErrorKind, MoneyResult};
pub use parser::parse_monetary_str;
