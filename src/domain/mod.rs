// ============================================================================
// Domain Models Module
// The monetary value type and the options used to build it
// ============================================================================

pub mod config;
pub mod money;

pub use config::{ConversionOptions, FIXED_SCALE};
pub use money::Money;
