// ============================================================================
// Decimal Source Interface
// Narrow "convert me to an exact decimal" capability
// ============================================================================

use crate::numeric::{parse_monetary_str, MoneyError, MoneyResult};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Anything that can yield an exact decimal amount.
///
/// Implemented for `Decimal`, the integer primitives, floats (through their
/// shortest round-trip text form) and strings (through
/// [`parse_monetary_str`]). External decimal types plug in by implementing
/// this trait; the money type never depends on them directly.
///
/// # Example
/// ```
/// use precise_money::interfaces::ToExactDecimal;
/// use precise_money::numeric::MoneyResult;
/// use rust_decimal::Decimal;
///
/// /// A database decimal stored as (coefficient, exponent).
/// struct Decimal128 { coefficient: i64, exponent: u32 }
///
/// impl ToExactDecimal for Decimal128 {
///     fn to_exact_decimal(&self) -> MoneyResult<Decimal> {
///         Ok(Decimal::new(self.coefficient, self.exponent))
///     }
/// }
///
/// let stored = Decimal128 { coefficient: 1575, exponent: 2 };
/// assert_eq!(stored.to_exact_decimal().unwrap().to_string(), "15.75");
/// ```
pub trait ToExactDecimal {
    fn to_exact_decimal(&self) -> MoneyResult<Decimal>;
}

/// Plain numeric operands accepted by `multiply` / `divide`.
///
/// Strings and other non-numeric sources do not implement it.
pub trait NumericFactor: ToExactDecimal {}

impl ToExactDecimal for Decimal {
    #[inline]
    fn to_exact_decimal(&self) -> MoneyResult<Decimal> {
        Ok(*self)
    }
}

impl NumericFactor for Decimal {}

macro_rules! impl_integer_source {
    ($($t:ty),*) => {
        $(
            impl ToExactDecimal for $t {
                #[inline]
                fn to_exact_decimal(&self) -> MoneyResult<Decimal> {
                    Ok(Decimal::from(*self))
                }
            }

            impl NumericFactor for $t {}
        )*
    };
}

impl_integer_source!(i8, i16, i32, i64, u8, u16, u32, u64, isize, usize);

impl ToExactDecimal for i128 {
    fn to_exact_decimal(&self) -> MoneyResult<Decimal> {
        Decimal::try_from_i128_with_scale(*self, 0)
            .map_err(|_| MoneyError::monetary_value(self.to_string()))
    }
}

impl NumericFactor for i128 {}

macro_rules! impl_float_source {
    ($($t:ty),*) => {
        $(
            impl ToExactDecimal for $t {
                /// Converts via the shortest decimal text that round-trips,
                /// so `0.1` becomes exactly `0.1`.
                fn to_exact_decimal(&self) -> MoneyResult<Decimal> {
                    if !self.is_finite() {
                        return Err(MoneyError::monetary_value(self.to_string()));
                    }
                    let text = self.to_string();
                    Decimal::from_str(&text).map_err(|_| MoneyError::monetary_value(text))
                }
            }

            impl NumericFactor for $t {}
        )*
    };
}

impl_float_source!(f32, f64);

impl ToExactDecimal for str {
    #[inline]
    fn to_exact_decimal(&self) -> MoneyResult<Decimal> {
        parse_monetary_str(self)
    }
}

impl ToExactDecimal for String {
    #[inline]
    fn to_exact_decimal(&self) -> MoneyResult<Decimal> {
        parse_monetary_str(self)
    }
}

impl<T: ToExactDecimal + ?Sized> ToExactDecimal for &T {
    #[inline]
    fn to_exact_decimal(&self) -> MoneyResult<Decimal> {
        (**self).to_exact_decimal()
    }
}

impl<T: NumericFactor + ?Sized> NumericFactor for &T {}
