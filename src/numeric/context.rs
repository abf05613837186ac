// ============================================================================
// Decimal Context & Quantization
// Call-scoped precision and rounding policy for monetary decimals
// ============================================================================

use super::errors::{MoneyError, MoneyResult};
use crate::currency::{ABSOLUTE_MAX_DECIMAL_PLACES, DEFAULT_MAX_QUANTIZING_DECIMAL_PLACES};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Significant digits carried by the default context.
pub const DECIMAL_PRECISION: u32 = 28;

/// Largest fractional scale `rust_decimal` can store.
const MAX_STORABLE_SCALE: u32 = 28;

// ============================================================================
// Rounding Policy
// ============================================================================

/// Rounding rule applied when a value is quantized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rounding {
    /// Ties away from zero (2.5 -> 3, -2.5 -> -3)
    HalfUp,
    /// Ties toward zero (2.5 -> 2, 2.51 -> 3)
    #[default]
    HalfDown,
    /// Ties to the even neighbour (banker's rounding)
    HalfEven,
    /// Truncate toward zero
    Down,
    /// Away from zero
    Up,
    /// Toward positive infinity
    Ceiling,
    /// Toward negative infinity
    Floor,
}

impl Rounding {
    /// Every supported policy, in declaration order.
    pub const ALL: [Rounding; 7] = [
        Rounding::HalfUp,
        Rounding::HalfDown,
        Rounding::HalfEven,
        Rounding::Down,
        Rounding::Up,
        Rounding::Ceiling,
        Rounding::Floor,
    ];

    #[inline]
    pub const fn strategy(self) -> RoundingStrategy {
        match self {
            Rounding::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Rounding::HalfDown => RoundingStrategy::MidpointTowardZero,
            Rounding::HalfEven => RoundingStrategy::MidpointNearestEven,
            Rounding::Down => RoundingStrategy::ToZero,
            Rounding::Up => RoundingStrategy::AwayFromZero,
            Rounding::Ceiling => RoundingStrategy::ToPositiveInfinity,
            Rounding::Floor => RoundingStrategy::ToNegativeInfinity,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Rounding::HalfUp => "ROUND_HALF_UP",
            Rounding::HalfDown => "ROUND_HALF_DOWN",
            Rounding::HalfEven => "ROUND_HALF_EVEN",
            Rounding::Down => "ROUND_DOWN",
            Rounding::Up => "ROUND_UP",
            Rounding::Ceiling => "ROUND_CEILING",
            Rounding::Floor => "ROUND_FLOOR",
        }
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rounding {
    type Err = MoneyError;

    /// Accepts selectors such as `ROUND_HALF_UP`, `half-up` or `HALF_EVEN`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        let name = normalized.strip_prefix("ROUND_").unwrap_or(&normalized);

        match name {
            "HALF_UP" => Ok(Rounding::HalfUp),
            "HALF_DOWN" => Ok(Rounding::HalfDown),
            "HALF_EVEN" => Ok(Rounding::HalfEven),
            "DOWN" => Ok(Rounding::Down),
            "UP" => Ok(Rounding::Up),
            "CEILING" => Ok(Rounding::Ceiling),
            "FLOOR" => Ok(Rounding::Floor),
            _ => Err(MoneyError::quantization(format!(
                "unknown rounding selector '{}'",
                s
            ))),
        }
    }
}

// ============================================================================
// Decimal Context
// ============================================================================

/// Arithmetic context carrying the number of significant digits.
///
/// A context is a plain value: callers build one per operation and pass it
/// along, so there is no process-wide default that could be mutated or leak
/// between threads.
///
/// # Example
/// ```
/// use precise_money::numeric::{DecimalContext, Rounding};
/// use rust_decimal::Decimal;
///
/// let ctx = DecimalContext::default();
/// let value: Decimal = "10.0089".parse().unwrap();
/// let q = ctx.quantize(value, 2, Rounding::HalfUp).unwrap();
/// assert_eq!(q.to_string(), "10.01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecimalContext {
    precision: u32,
}

impl Default for DecimalContext {
    #[inline]
    fn default() -> Self {
        Self {
            precision: DECIMAL_PRECISION,
        }
    }
}

impl DecimalContext {
    /// Create a context with a custom number of significant digits (1..=28).
    pub fn with_precision(precision: u32) -> MoneyResult<Self> {
        if precision == 0 || precision > DECIMAL_PRECISION {
            return Err(MoneyError::quantization(format!(
                "precision {} is not within 1..={}",
                precision, DECIMAL_PRECISION
            )));
        }
        Ok(Self { precision })
    }

    #[inline]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    /// Round an intermediate result to the context precision (half-even).
    #[inline]
    fn fit(&self, value: Decimal) -> Decimal {
        value
            .round_sf_with_strategy(self.precision, RoundingStrategy::MidpointNearestEven)
            .unwrap_or(value)
    }

    /// Checked addition.
    pub fn checked_add(&self, lhs: Decimal, rhs: Decimal) -> MoneyResult<Decimal> {
        lhs.checked_add(rhs)
            .map(|d| self.fit(d))
            .ok_or_else(|| MoneyError::quantization("addition overflow"))
    }

    /// Checked subtraction.
    pub fn checked_sub(&self, lhs: Decimal, rhs: Decimal) -> MoneyResult<Decimal> {
        lhs.checked_sub(rhs)
            .map(|d| self.fit(d))
            .ok_or_else(|| MoneyError::quantization("subtraction overflow"))
    }

    /// Checked multiplication.
    pub fn checked_mul(&self, lhs: Decimal, rhs: Decimal) -> MoneyResult<Decimal> {
        lhs.checked_mul(rhs)
            .map(|d| self.fit(d))
            .ok_or_else(|| MoneyError::quantization("multiplication overflow"))
    }

    /// Checked division.
    ///
    /// # Errors
    /// `DivisionByZero` for a zero divisor, `InvalidQuantization` on overflow.
    pub fn checked_div(&self, lhs: Decimal, rhs: Decimal) -> MoneyResult<Decimal> {
        if rhs.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        lhs.checked_div(rhs)
            .map(|d| self.fit(d))
            .ok_or_else(|| MoneyError::quantization("division overflow"))
    }

    /// 10^places as an exact decimal.
    pub fn power_of_ten(&self, places: u32) -> MoneyResult<Decimal> {
        if places > MAX_STORABLE_SCALE {
            return Err(MoneyError::quantization(format!(
                "10^{} is not representable",
                places
            )));
        }
        Decimal::try_from_i128_with_scale(10_i128.pow(places), 0)
            .map_err(|e| MoneyError::quantization(e.to_string()))
    }

    /// Round `value` to `places` fractional digits.
    ///
    /// # Errors
    /// - `DecimalPlacesOutOfRange` if `places` > 34
    /// - `InvalidQuantization` if the quantized coefficient needs more
    ///   significant digits than the context precision
    pub fn quantize(
        &self,
        value: Decimal,
        places: u32,
        rounding: Rounding,
    ) -> MoneyResult<Decimal> {
        if places > ABSOLUTE_MAX_DECIMAL_PLACES {
            return Err(MoneyError::DecimalPlacesOutOfRange { places });
        }

        let target = places.min(MAX_STORABLE_SCALE);
        let mut rounded = value.round_dp_with_strategy(target, rounding.strategy());

        let digits = coefficient_digits(rounded, places);
        if digits > self.precision as i64 {
            tracing::trace!(%value, places, digits, "quantization exceeds context precision");
            return Err(MoneyError::quantization(format!(
                "{} at {} places needs {} digits, precision is {}",
                value, places, digits, self.precision
            )));
        }

        // Pad to exactly `target` fractional digits; fits because digits <= precision.
        rounded.rescale(target);
        Ok(rounded)
    }
}

/// Number of coefficient digits `value` would have written with `places` fractional digits.
fn coefficient_digits(value: Decimal, places: u32) -> i64 {
    if value.is_zero() {
        return 1;
    }
    let mantissa_digits = value
        .mantissa()
        .unsigned_abs()
        .checked_ilog10()
        .map_or(1, |d| d + 1);
    mantissa_digits as i64 + places as i64 - value.scale() as i64
}

// ============================================================================
// Free Functions
// ============================================================================

/// Quantize in a fresh default context.
///
/// # Example
/// ```
/// use precise_money::numeric::{quantize, Rounding};
/// use rust_decimal::Decimal;
///
/// let v: Decimal = "12.3456".parse().unwrap();
/// assert_eq!(quantize(v, 2, Rounding::Down).unwrap().to_string(), "12.34");
/// ```
#[inline]
pub fn quantize(value: Decimal, places: u32, rounding: Rounding) -> MoneyResult<Decimal> {
    DecimalContext::default().quantize(value, places, rounding)
}

/// Quantize to the default ad-hoc precision (6 places, half-down).
#[inline]
pub fn quantize_default(value: Decimal) -> MoneyResult<Decimal> {
    quantize(
        value,
        DEFAULT_MAX_QUANTIZING_DECIMAL_PLACES,
        Rounding::default(),
    )
}

// ============================================================================
// Tests
// ============================================================================
