// ============================================================================
// Conversion Options
// How raw amounts are interpreted and rounded when a Money is built
// ============================================================================

use crate::numeric::Rounding;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Scale of the fixed-point integer encoding (4 fractional digits, ISO-style).
pub const FIXED_SCALE: u64 = 10_000;

/// Options applied by `Money::from_currency_with` and friends.
///
/// The default reads the amount as a decimal in major units, quantizes it to
/// the currency's decimal places and rounds half-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConversionOptions {
    /// Divide the amount by 10^decimal_places (source counts smallest units)
    pub normalize: bool,

    /// Round the result to the currency's decimal places
    pub quantize: bool,

    /// Rounding rule used for quantization and stored on the result
    pub rounding: Rounding,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            normalize: false,
            quantize: true,
            rounding: Rounding::default(),
        }
    }
}

impl ConversionOptions {
    /// Create options with every field explicit
    pub const fn new(normalize: bool, quantize: bool, rounding: Rounding) -> Self {
        Self {
            normalize,
            quantize,
            rounding,
        }
    }

    /// Builder method: Set rounding rule
    pub const fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Builder method: Enable or disable normalization
    pub const fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Builder method: Enable or disable quantization
    pub const fn with_quantize(mut self, quantize: bool) -> Self {
        self.quantize = quantize;
        self
    }
}

// ============================================================================
// Preset Options (Factory Methods)
// ============================================================================

impl ConversionOptions {
    /// Amount is an integer count of smallest units (e.g. cents)
    pub fn smallest_unit() -> Self {
        Self::default().with_normalize(true)
    }

    /// Keep every digit of the amount
    pub fn unquantized() -> Self {
        Self::default().with_quantize(false)
    }

    /// Quantize with the given rounding rule
    pub fn rounded(rounding: Rounding) -> Self {
        Self::default().with_rounding(rounding)
    }
}
