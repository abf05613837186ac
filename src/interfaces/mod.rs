// ============================================================================
// Interfaces Module
// Contains the trait seams external types plug into
// ============================================================================

mod decimal_source;

pub use decimal_source::{NumericFactor, ToExactDecimal};
