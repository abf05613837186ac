// ============================================================================
// Money
// Immutable, currency-aware monetary value
// ============================================================================

use super::config::{ConversionOptions, FIXED_SCALE};
use crate::currency::{self, CurrencyCode};
use crate::interfaces::{NumericFactor, ToExactDecimal};
use crate::numeric::{DecimalContext, MoneyError, MoneyResult, Rounding};
use crate::utils::{format_grouped, format_plain};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use crate::serialization::MoneyRecord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A monetary amount in a single currency.
///
/// Values are immutable: every operation returns a new `Money`. Arithmetic
/// and ordering between different currencies fail with `CurrencyMismatch`;
/// equality simply reports `false`.
///
/// # Example
/// ```
/// use precise_money::Money;
///
/// let a = Money::from_currency("USD", "10.00").unwrap();
/// let b = Money::from_currency("USD", "20.00").unwrap();
/// let total = a.add(&b).unwrap();
/// assert_eq!(total.to_display_string(), "30.00");
/// assert_eq!(total.currency_code(), "USD");
/// ```
#[derive(Clone, Copy, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(into = "MoneyRecord", try_from = "MoneyRecord")
)]
pub struct Money {
    value: Decimal,
    currency: CurrencyCode,
    decimal_places: u32,
    rounding: Rounding,
}

impl Money {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Build from a currency code and an amount in major units, quantized
    /// half-down to the currency's decimal places.
    ///
    /// # Errors
    /// - `InvalidCurrencyCode` for malformed or unregistered codes
    /// - `InvalidMonetaryValue` if the amount cannot be read
    /// - `MissingCurrency` for a non-zero amount with the NULL code
    pub fn from_currency(code: &str, amount: impl ToExactDecimal) -> MoneyResult<Self> {
        Self::from_currency_with(code, amount, ConversionOptions::default())
    }

    /// Build from a currency code and an amount using explicit options.
    ///
    /// # Example
    /// ```
    /// use precise_money::{ConversionOptions, Money, Rounding};
    ///
    /// let m = Money::from_currency_with(
    ///     "USD",
    ///     "10.0089",
    ///     ConversionOptions::rounded(Rounding::HalfUp),
    /// )
    /// .unwrap();
    /// assert_eq!(m.to_display_string(), "10.01");
    ///
    /// let cents =
    ///     Money::from_currency_with("USD", 1050, ConversionOptions::smallest_unit()).unwrap();
    /// assert_eq!(cents.to_display_string(), "10.50");
    /// ```
    pub fn from_currency_with(
        code: &str,
        amount: impl ToExactDecimal,
        options: ConversionOptions,
    ) -> MoneyResult<Self> {
        let ctx = DecimalContext::default();
        let currency = currency::validate_code(code)?;
        let decimal_places = currency::decimal_places_for(currency.as_str());

        let mut value = amount.to_exact_decimal()?;
        if options.normalize {
            value = ctx.checked_div(value, ctx.power_of_ten(decimal_places)?)?;
        }
        if options.quantize {
            value = ctx.quantize(value, decimal_places, options.rounding)?;
        }

        if currency.is_null() && !value.is_zero() {
            return Err(MoneyError::MissingCurrency { value });
        }

        Ok(Self {
            value,
            currency,
            decimal_places,
            rounding: options.rounding,
        })
    }

    /// Build from an integer count of the currency's smallest unit (e.g. cents).
    pub fn from_smallest_unit_integer(code: &str, amount: i128) -> MoneyResult<Self> {
        Self::from_currency_with(code, amount, ConversionOptions::smallest_unit())
    }

    /// Build from a fixed-scale integer (value × 10 000).
    ///
    /// ```
    /// use precise_money::Money;
    ///
    /// let usd = Money::from_fixed_scale_integer("USD", 123456).unwrap();
    /// assert_eq!(usd.to_display_string(), "12.35");
    /// let yen = Money::from_fixed_scale_integer("JPY", 1234567).unwrap();
    /// assert_eq!(yen.to_display_string(), "123");
    /// ```
    pub fn from_fixed_scale_integer(code: &str, amount: i128) -> MoneyResult<Self> {
        Self::from_fixed_scale_integer_with(code, amount, FIXED_SCALE, ConversionOptions::default())
    }

    /// Build from an integer encoded at an arbitrary scale.
    ///
    /// The division by `scale` is exact; `options.normalize` is ignored.
    ///
    /// # Errors
    /// `DivisionByZero` if `scale` is zero, plus every `from_currency_with` error.
    pub fn from_fixed_scale_integer_with(
        code: &str,
        amount: i128,
        scale: u64,
        options: ConversionOptions,
    ) -> MoneyResult<Self> {
        if scale == 0 {
            return Err(MoneyError::DivisionByZero);
        }
        let ctx = DecimalContext::default();
        let divisor = i128::from(scale);

        // Split so the integer part alone has to fit a Decimal
        let whole = Decimal::try_from_i128_with_scale(amount / divisor, 0).map_err(|_| {
            MoneyError::quantization(format!("{} / {} exceeds decimal range", amount, scale))
        })?;
        let remainder = (amount % divisor).to_exact_decimal()?;
        let fraction = ctx.checked_div(remainder, Decimal::from(scale))?;
        let value = ctx.checked_add(whole, fraction)?;

        Self::from_currency_with(code, value, options.with_normalize(false))
    }

    /// Exact zero with no currency.
    pub fn zero() -> Self {
        let currency = CurrencyCode::null();
        Self {
            value: Decimal::ZERO,
            decimal_places: currency::decimal_places_for(currency.as_str()),
            currency,
            rounding: Rounding::default(),
        }
    }

    /// Exact, unquantized zero in `code`.
    pub fn zero_in(code: &str) -> MoneyResult<Self> {
        Self::from_fixed_scale_integer_with(code, 0, FIXED_SCALE, ConversionOptions::unquantized())
    }

    /// Build from any external decimal source: `Decimal`, integers, floats
    /// (via their exact text form), strings (via the monetary parser) or a
    /// custom [`ToExactDecimal`] adapter.
    ///
    /// ```
    /// use precise_money::{ConversionOptions, Money};
    ///
    /// let m = Money::from_external_value("100.000,00", "EUR", ConversionOptions::default())
    ///     .unwrap();
    /// assert_eq!(m.to_string(), "100,000.00 EUR");
    /// ```
    pub fn from_external_value(
        value: impl ToExactDecimal,
        code: &str,
        options: ConversionOptions,
    ) -> MoneyResult<Self> {
        Self::from_currency_with(code, value, options)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The exact magnitude.
    #[inline]
    pub fn value(&self) -> Decimal {
        self.value
    }

    #[inline]
    pub fn currency(&self) -> CurrencyCode {
        self.currency
    }

    #[inline]
    pub fn currency_code(&self) -> &str {
        self.currency.as_str()
    }

    #[inline]
    pub fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    #[inline]
    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    pub fn currency_symbol(&self) -> &str {
        currency::symbol_for(self.currency.as_str())
    }

    /// 10^decimal_places: smallest units per major unit.
    pub fn conversion_factor(&self) -> u128 {
        10_u128.pow(self.decimal_places)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.value < Decimal::ZERO
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.value > Decimal::ZERO
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    fn ensure_same_currency(&self, other: &Money) -> MoneyResult<()> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch {
                left: self.currency.to_string(),
                right: other.currency.to_string(),
            });
        }
        Ok(())
    }

    /// Integer scale shared by both operands: at least 10 000, and enough to
    /// hold every fractional digit of the currency.
    fn shared_scale(&self) -> MoneyResult<u64> {
        10_u64
            .checked_pow(self.decimal_places)
            .map(|scale| scale.max(FIXED_SCALE))
            .ok_or_else(|| {
                MoneyError::quantization(format!(
                    "{} decimal places exceed the fixed-scale range",
                    self.decimal_places
                ))
            })
    }

    /// Same-currency addition through exact fixed-scale integers.
    ///
    /// # Errors
    /// `CurrencyMismatch` if the currencies differ.
    pub fn add(&self, other: &Money) -> MoneyResult<Money> {
        self.combine(other, i128::checked_add)
    }

    /// Same-currency subtraction through exact fixed-scale integers.
    ///
    /// # Errors
    /// `CurrencyMismatch` if the currencies differ.
    pub fn subtract(&self, other: &Money) -> MoneyResult<Money> {
        self.combine(other, i128::checked_sub)
    }

    fn combine(&self, other: &Money, op: fn(i128, i128) -> Option<i128>) -> MoneyResult<Money> {
        self.ensure_same_currency(other)?;
        let scale = self.shared_scale()?;
        let lhs = self.to_fixed_scale_integer_with(scale)?;
        let rhs = other.to_fixed_scale_integer_with(scale)?;
        let raw = op(lhs, rhs).ok_or_else(|| MoneyError::quantization("fixed-scale overflow"))?;

        Self::from_fixed_scale_integer_with(
            other.currency.as_str(),
            raw,
            scale,
            ConversionOptions::rounded(self.rounding),
        )
    }

    /// Flip the sign, re-quantized.
    pub fn negate(&self) -> MoneyResult<Money> {
        Self::from_currency_with(
            self.currency.as_str(),
            -self.value,
            ConversionOptions::rounded(self.rounding),
        )
    }

    /// Absolute value.
    pub fn abs(&self) -> MoneyResult<Money> {
        if self.is_negative() {
            self.negate()
        } else {
            Ok(*self)
        }
    }

    /// Multiply by a plain number; the product is re-quantized.
    ///
    /// ```
    /// use precise_money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let m = Money::from_currency("USD", "10.00").unwrap();
    /// assert_eq!(m.multiply(3).unwrap().to_display_string(), "30.00");
    /// assert_eq!(m.multiply(Decimal::new(15, 1)).unwrap().to_display_string(), "15.00");
    /// ```
    pub fn multiply(&self, factor: impl NumericFactor) -> MoneyResult<Money> {
        let ctx = DecimalContext::default();
        let product = ctx.checked_mul(self.value, factor.to_exact_decimal()?)?;
        Self::from_currency_with(
            self.currency.as_str(),
            product,
            ConversionOptions::rounded(self.rounding),
        )
    }

    /// Divide by a plain number; the quotient is re-quantized.
    ///
    /// # Errors
    /// `DivisionByZero` for a zero divisor.
    pub fn divide(&self, divisor: impl NumericFactor) -> MoneyResult<Money> {
        let ctx = DecimalContext::default();
        let quotient = ctx.checked_div(self.value, divisor.to_exact_decimal()?)?;
        Self::from_currency_with(
            self.currency.as_str(),
            quotient,
            ConversionOptions::rounded(self.rounding),
        )
    }

    /// Apply a pure decimal transform, quantized half-down.
    ///
    /// ```
    /// use precise_money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let options = precise_money::ConversionOptions::unquantized();
    /// let m = Money::from_currency_with("USD", "12.3456", options).unwrap();
    /// let half = m.apply(|v| v / Decimal::TWO).unwrap();
    /// assert_eq!(half.to_display_string(), "6.17");
    /// ```
    pub fn apply<F>(&self, transform: F) -> MoneyResult<Money>
    where
        F: FnOnce(Decimal) -> Decimal,
    {
        self.apply_with(transform, true, Rounding::default())
    }

    /// Apply a pure decimal transform and rebuild with the given policy.
    pub fn apply_with<F>(
        &self,
        transform: F,
        quantize: bool,
        rounding: Rounding,
    ) -> MoneyResult<Money>
    where
        F: FnOnce(Decimal) -> Decimal,
    {
        let transformed = transform(self.value);
        Self::from_currency_with(
            self.currency.as_str(),
            transformed,
            ConversionOptions::new(false, quantize, rounding),
        )
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Order two same-currency values by their fixed-scale integers.
    ///
    /// # Errors
    /// `CurrencyMismatch` if the currencies differ.
    pub fn compare(&self, other: &Money) -> MoneyResult<Ordering> {
        self.ensure_same_currency(other)?;
        let scale = self.shared_scale()?;
        let lhs = self.to_fixed_scale_integer_with(scale)?;
        let rhs = other.to_fixed_scale_integer_with(scale)?;
        Ok(lhs.cmp(&rhs))
    }

    pub fn less_than(&self, other: &Money) -> MoneyResult<bool> {
        Ok(self.compare(other)?.is_lt())
    }

    pub fn less_or_equal(&self, other: &Money) -> MoneyResult<bool> {
        Ok(self.compare(other)?.is_le())
    }

    pub fn greater_than(&self, other: &Money) -> MoneyResult<bool> {
        Ok(self.compare(other)?.is_gt())
    }

    pub fn greater_or_equal(&self, other: &Money) -> MoneyResult<bool> {
        Ok(self.compare(other)?.is_ge())
    }

    /// Run a custom predicate over two same-currency raw values.
    ///
    /// ```
    /// use precise_money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let a = Money::from_currency("USD", "10").unwrap();
    /// let b = Money::from_currency("USD", "20").unwrap();
    /// let far_apart = a.compare_with(&b, |x, y| (x - y).abs() > Decimal::from(5)).unwrap();
    /// assert!(far_apart);
    /// ```
    pub fn compare_with<F>(&self, other: &Money, predicate: F) -> MoneyResult<bool>
    where
        F: FnOnce(Decimal, Decimal) -> bool,
    {
        self.ensure_same_currency(other)?;
        Ok(predicate(self.value, other.value))
    }

    /// Magnitude quantized with this value's own rounding rule.
    fn quantized_value(&self) -> Decimal {
        DecimalContext::default()
            .quantize(self.value, self.decimal_places, self.rounding)
            .unwrap_or(self.value)
    }

    // ========================================================================
    // Reduction
    // ========================================================================

    /// Sum a sequence of values.
    ///
    /// Folding starts from [`Money::zero`]. A NULL-currency zero accumulator
    /// adopts the currency of the next element and NULL-currency zeros later
    /// in the sequence are skipped, so a sequence in one currency never trips
    /// the currency check. An empty sequence yields the NULL zero.
    ///
    /// ```
    /// use precise_money::Money;
    ///
    /// let items = [
    ///     Money::from_currency("USD", "10").unwrap(),
    ///     Money::from_currency("USD", "20").unwrap(),
    ///     Money::from_currency("USD", "30").unwrap(),
    /// ];
    /// assert_eq!(Money::sum(&items).unwrap().to_string(), "60.00 USD");
    /// assert!(Money::sum(Vec::<Money>::new()).unwrap().currency().is_null());
    /// ```
    ///
    /// # Errors
    /// `CurrencyMismatch` if two elements carry different real currencies.
    pub fn sum<I>(values: I) -> MoneyResult<Money>
    where
        I: IntoIterator,
        I::Item: Borrow<Money>,
    {
        values
            .into_iter()
            .try_fold(Money::zero(), |acc, next| acc.accumulate(next.borrow()))
    }

    fn accumulate(&self, next: &Money) -> MoneyResult<Money> {
        if next.currency.is_null() && next.value.is_zero() {
            return Ok(*self);
        }
        if self.currency.is_null() && self.value.is_zero() {
            return Money::zero_in(next.currency.as_str())?.add(next);
        }
        self.add(next)
    }

    // ========================================================================
    // Conversions
    // ========================================================================

    /// Value rounded half-even for presentation.
    fn display_value(&self) -> Decimal {
        DecimalContext::default()
            .quantize(self.value, self.decimal_places, Rounding::HalfEven)
            .unwrap_or(self.value)
    }

    /// Thousands-grouped amount with exactly `decimal_places` digits.
    pub fn to_display_string(&self) -> String {
        format_grouped(self.display_value(), self.decimal_places)
    }

    /// Ungrouped amount with exactly `decimal_places` digits, used for interchange.
    pub fn to_plain_string(&self) -> String {
        format_plain(self.display_value(), self.decimal_places)
    }

    /// Currency symbol followed by the display string, e.g. `$1,234.56`.
    pub fn to_symbol_string(&self) -> String {
        format!("{}{}", self.currency_symbol(), self.to_display_string())
    }

    /// Whether converting to `f64` may lose precision.
    pub fn has_float_precision_risk(&self) -> bool {
        let magnitude = self.value.abs();
        let upper = Decimal::from(1_000_000_000_000_000_i64);
        let lower = Decimal::new(1, 15);
        magnitude > upper || (!magnitude.is_zero() && magnitude < lower)
    }

    /// Lossy conversion to `f64` after quantization.
    ///
    /// Very large or very small magnitudes are still converted; a warning is
    /// logged instead of failing.
    pub fn to_approximate_float(&self) -> MoneyResult<f64> {
        let quantized =
            DecimalContext::default().quantize(self.value, self.decimal_places, self.rounding)?;
        if self.has_float_precision_risk() {
            tracing::warn!(
                value = %self.value,
                currency = %self.currency,
                "converting to float may lose precision"
            );
        }
        quantized
            .to_f64()
            .ok_or_else(|| MoneyError::quantization("value is not representable as f64"))
    }

    /// Quantize, then express as an integer count of smallest units.
    ///
    /// ```
    /// use precise_money::{ConversionOptions, Money, Rounding};
    ///
    /// let options = ConversionOptions::rounded(Rounding::HalfUp);
    /// let m = Money::from_currency_with("USD", "12.348", options).unwrap();
    /// assert_eq!(m.to_smallest_unit_integer().unwrap(), 1235);
    /// ```
    pub fn to_smallest_unit_integer(&self) -> MoneyResult<i128> {
        let ctx = DecimalContext::default();
        let quantized = ctx.quantize(self.value, self.decimal_places, self.rounding)?;
        let factor = 10_i128.checked_pow(self.decimal_places).ok_or_else(|| {
            MoneyError::quantization(format!("10^{} overflows", self.decimal_places))
        })?;
        Self::truncate_scaled(quantized, factor)
    }

    /// Quantize, then express as a fixed-scale integer (× 10 000).
    pub fn to_fixed_scale_integer(&self) -> MoneyResult<i128> {
        self.to_fixed_scale_integer_with(FIXED_SCALE)
    }

    /// Quantize, then express as an integer at an arbitrary scale.
    pub fn to_fixed_scale_integer_with(&self, scale: u64) -> MoneyResult<i128> {
        if scale == 0 {
            return Err(MoneyError::quantization("fixed scale must be positive"));
        }
        let quantized =
            DecimalContext::default().quantize(self.value, self.decimal_places, self.rounding)?;
        Self::truncate_scaled(quantized, i128::from(scale))
    }

    /// `value × factor` truncated toward zero, computed on the mantissa in i128.
    fn truncate_scaled(value: Decimal, factor: i128) -> MoneyResult<i128> {
        let overflow = || MoneyError::quantization(format!("{} x {} overflows", value, factor));
        let mantissa = value.mantissa();
        let divisor = 10_i128.checked_pow(value.scale()).ok_or_else(overflow)?;

        if factor % divisor == 0 {
            mantissa.checked_mul(factor / divisor).ok_or_else(overflow)
        } else {
            mantissa
                .checked_mul(factor)
                .map(|scaled| scaled / divisor)
                .ok_or_else(overflow)
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.currency == other.currency && self.quantized_value() == other.quantized_value()
    }
}

impl Eq for Money {}

impl Hash for Money {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.currency.hash(state);
        self.quantized_value().hash(state);
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.to_display_string(), self.currency)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::NULL_CURRENCY_CODE;
    use crate::numeric::{parse_monetary_str, MoneyErrorKind};

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn usd(amount: &str) -> Money {
        Money::from_currency("USD", amount).unwrap()
    }

    #[test]
    fn test_creation() {
        assert_eq!(usd("10.00").to_string(), "10.00 USD");
        assert_eq!(Money::from_currency("usd", 10).unwrap().to_string(), "10.00 USD");
        assert_eq!(
            Money::from_currency("USD", dec("10.00")).unwrap().to_string(),
            "10.00 USD"
        );
    }

    #[test]
    fn test_creation_with_quantize() {
        let up = Money::from_currency_with(
            "USD",
            dec("10.0089"),
            ConversionOptions::rounded(Rounding::HalfUp),
        )
        .unwrap();
        assert_eq!(up.to_display_string(), "10.01");
        assert_eq!(up.rounding(), Rounding::HalfUp);

        let down = Money::from_currency_with(
            "USD",
            dec("10.00500"),
            ConversionOptions::rounded(Rounding::HalfDown),
        )
        .unwrap();
        assert_eq!(down.to_string(), "10.00 USD");
    }

    #[test]
    fn test_creation_without_quantize() {
        let m =
            Money::from_currency_with("USD", "12.3456", ConversionOptions::unquantized()).unwrap();
        assert_eq!(m.value(), dec("12.3456"));
        assert_eq!(m.to_display_string(), "12.35");
    }

    #[test]
    fn test_rounding_rules() {
        let up =
            Money::from_currency_with("USD", "1.235", ConversionOptions::rounded(Rounding::HalfUp))
                .unwrap();
        let down =
            Money::from_currency_with("USD", "1.235", ConversionOptions::rounded(Rounding::Down))
                .unwrap();
        assert_eq!(up.to_string(), "1.24 USD");
        assert_eq!(down.to_string(), "1.23 USD");
    }

    #[test]
    fn test_invalid_construction() {
        assert_eq!(
            Money::from_currency("banana", "1").unwrap_err().kind(),
            MoneyErrorKind::InvalidCurrencyCode
        );
        assert_eq!(
            Money::from_currency("USD", "twelve").unwrap_err().kind(),
            MoneyErrorKind::InvalidMonetaryValue
        );
        assert_eq!(
            Money::from_currency(NULL_CURRENCY_CODE, "5").unwrap_err(),
            MoneyError::MissingCurrency { value: dec("5.00") }
        );
        // A value that quantizes to zero is allowed without a currency
        assert!(Money::from_currency(NULL_CURRENCY_CODE, "0.001").unwrap().is_zero());
    }

    #[test]
    fn test_normalization() {
        let m = Money::from_currency_with("USD", 1000, ConversionOptions::smallest_unit()).unwrap();
        assert_eq!(m.to_string(), "10.00 USD");
        assert_eq!(Money::from_smallest_unit_integer("BTC", 1).unwrap().value(), dec("0.00000001"));
        assert_eq!(Money::from_smallest_unit_integer("JPY", 1050).unwrap().value(), dec("1050"));
    }

    #[test]
    fn test_fixed_scale_construction() {
        assert_eq!(
            Money::from_fixed_scale_integer("USD", 123456).unwrap().to_string(),
            "12.35 USD"
        );
        assert_eq!(Money::from_fixed_scale_integer("JPY", 1234567).unwrap().value(), dec("123"));

        let raw = Money::from_fixed_scale_integer_with(
            "USD",
            1234567,
            FIXED_SCALE,
            ConversionOptions::unquantized(),
        )
        .unwrap();
        assert_eq!(raw.value(), dec("123.4567"));

        assert_eq!(
            Money::from_fixed_scale_integer_with("USD", 1, 0, ConversionOptions::default()),
            Err(MoneyError::DivisionByZero)
        );
    }

    #[test]
    fn test_zero_creation() {
        let zero = Money::zero();
        assert_eq!(zero.to_string(), "0.00 NO_CURRENCY");
        assert_eq!(zero.to_display_string(), "0.00");
        assert_eq!(zero.currency_code(), NULL_CURRENCY_CODE);
        assert!(zero.is_zero());

        let usd_zero = Money::zero_in("USD").unwrap();
        assert_eq!(usd_zero.to_string(), "0.00 USD");
        assert_eq!(usd_zero, Money::zero_in("USD").unwrap());
        assert_ne!(usd_zero, Money::zero_in("EUR").unwrap());
        assert_eq!(Money::zero_in("JPY").unwrap().to_string(), "0 JPY");
    }

    #[test]
    fn test_from_external_value() {
        let opts = ConversionOptions::default();
        let external = |value: &str, code: &str| {
            Money::from_external_value(value, code, opts).unwrap().to_string()
        };
        assert_eq!(
            Money::from_external_value(dec("10.00"), "USD", opts).unwrap().to_string(),
            "10.00 USD"
        );
        assert_eq!(external("$10.00", "USD"), "10.00 USD");

        let grouped = Money::from_external_value("100,000.00", "USD", opts).unwrap();
        assert_eq!(grouped.to_string(), "100,000.00 USD");
        assert_eq!(grouped.value(), dec("100000.00"));

        let european = Money::from_external_value("100.000,00", "USD", opts).unwrap();
        assert_eq!(european.value(), dec("100000.00"));

        assert_eq!(external("10,00", "EUR"), "10.00 EUR");
        assert_eq!(external("500,15", "AUD"), "500.15 AUD");
        assert_eq!(Money::from_external_value(0.1_f64, "USD", opts).unwrap().value(), dec("0.10"));
        assert_eq!(Money::from_external_value(42_u8, "JPY", opts).unwrap().to_string(), "42 JPY");
    }

    #[test]
    fn test_external_adapter() {
        struct Decimal128(&'static str);

        impl ToExactDecimal for Decimal128 {
            fn to_exact_decimal(&self) -> MoneyResult<Decimal> {
                self.0
                    .parse()
                    .map_err(|_| MoneyError::InvalidMonetaryValue { input: self.0.to_string() })
            }
        }

        let m = Money::from_external_value(Decimal128("15.75"), "EUR", ConversionOptions::default())
            .unwrap();
        assert_eq!(m.to_string(), "15.75 EUR");
    }

    #[test]
    fn test_addition_and_subtraction() {
        assert_eq!(usd("10.00").add(&usd("20.00")).unwrap().to_string(), "30.00 USD");
        assert_eq!(usd("30.00").subtract(&usd("20.00")).unwrap().to_string(), "10.00 USD");
        assert_eq!(usd("0.10").add(&usd("0.20")).unwrap().value(), dec("0.30"));
        assert!(usd("5").subtract(&usd("7.5")).unwrap().is_negative());
    }

    #[test]
    fn test_addition_keeps_sub_fixed_scale_digits() {
        let sat = Money::from_smallest_unit_integer("BTC", 1).unwrap();
        let sum = sat.add(&sat).unwrap();
        assert_eq!(sum.value(), dec("0.00000002"));
    }

    #[test]
    fn test_large_values_use_integer_scaling() {
        let big = usd("8000000000000000000000000");
        assert_eq!(big.compare(&usd("1")).unwrap(), Ordering::Greater);
        assert!(usd("1").less_than(&big).unwrap());
        assert_eq!(
            big.to_fixed_scale_integer().unwrap(),
            80_000_000_000_000_000_000_000_000_000
        );

        let half = usd("5000000000000000000000000");
        let sum = half.add(&half).unwrap();
        assert_eq!(sum.value(), dec("10000000000000000000000000"));
        assert_eq!(sum.subtract(&half).unwrap(), half);
    }

    #[test]
    fn test_fixed_scale_overflow_is_quantization_error() {
        let err = Money::from_fixed_scale_integer_with(
            "USD",
            i128::MAX,
            1,
            ConversionOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), MoneyErrorKind::InvalidQuantization);

        let yen = Money::from_currency("JPY", "9000000000000000000000000000").unwrap();
        assert_eq!(yen.add(&yen).unwrap_err().kind(), MoneyErrorKind::InvalidQuantization);
    }

    #[test]
    fn test_fixed_scale_truncates_toward_zero() {
        assert_eq!(usd("-1.01").to_fixed_scale_integer_with(3).unwrap(), -3);
        assert_eq!(usd("1.01").to_fixed_scale_integer_with(3).unwrap(), 3);
        let negative = Money::from_fixed_scale_integer("USD", -123_456).unwrap();
        assert_eq!(negative.value(), dec("-12.35"));
    }

    #[test]
    fn test_negate_and_abs() {
        let m = usd("-10.00");
        assert!(m.is_negative());
        assert_eq!(m.abs().unwrap().to_string(), "10.00 USD");
        assert!(m.abs().unwrap().is_positive());
        assert_eq!(m.negate().unwrap(), usd("10"));
        assert_eq!(usd("3").abs().unwrap(), usd("3"));
    }

    #[test]
    fn test_multiplication_and_division() {
        assert_eq!(usd("10.00").multiply(3).unwrap().to_string(), "30.00 USD");
        assert_eq!(usd("30.00").divide(3).unwrap().to_string(), "10.00 USD");
        assert_eq!(usd("10.00").divide(3).unwrap().value(), dec("3.33"));
        assert_eq!(usd("10.00").multiply(0.5_f64).unwrap().value(), dec("5.00"));
        assert_eq!(usd("10.00").divide(0), Err(MoneyError::DivisionByZero));

        let unquantized = ConversionOptions::unquantized();
        let max = Money::from_currency_with("JPY", Decimal::MAX, unquantized).unwrap();
        assert_eq!(
            max.multiply(10).unwrap_err().kind(),
            MoneyErrorKind::InvalidQuantization
        );
    }

    #[test]
    fn test_apply() {
        let m = usd("12.3456");
        // 12.35 / 2 = 6.175, half-down
        assert_eq!(m.apply(|v| v / Decimal::TWO).unwrap().to_string(), "6.17 USD");

        let raw =
            Money::from_currency_with("USD", "12.3456", ConversionOptions::unquantized()).unwrap();
        assert_eq!(raw.apply(|v| v / Decimal::TWO).unwrap().to_string(), "6.17 USD");
        let taxed = raw.apply_with(|v| v * dec("1.5"), true, Rounding::HalfUp).unwrap();
        assert_eq!(taxed.to_string(), "18.52 USD");
        // The receiver is untouched
        assert_eq!(raw.value(), dec("12.3456"));
    }

    #[test]
    fn test_comparison() {
        let ten = usd("10.00");
        let twenty = usd("20.00");
        assert!(ten.less_than(&twenty).unwrap());
        assert!(twenty.greater_than(&ten).unwrap());
        assert!(ten.less_or_equal(&ten).unwrap());
        assert!(ten.greater_or_equal(&ten).unwrap());
        assert_eq!(ten.compare(&twenty).unwrap(), Ordering::Less);
        assert_ne!(ten, twenty);
    }

    #[test]
    fn test_comparison_across_internal_precision() {
        let raw =
            Money::from_currency_with("USD", "10.001", ConversionOptions::unquantized()).unwrap();
        assert_eq!(raw.compare(&usd("10.00")).unwrap(), Ordering::Equal);
        assert_eq!(raw, usd("10.00"));
    }

    #[test]
    fn test_currency_mismatch() {
        let dollars = usd("10.00");
        let bitcoin = Money::from_currency("BTC", "10.00").unwrap();

        for result in [dollars.add(&bitcoin), dollars.subtract(&bitcoin)] {
            assert_eq!(
                result,
                Err(MoneyError::CurrencyMismatch {
                    left: "USD".to_string(),
                    right: "BTC".to_string(),
                })
            );
        }
        assert_eq!(
            dollars.less_than(&bitcoin).unwrap_err().kind(),
            MoneyErrorKind::CurrencyMismatch
        );
        assert_eq!(
            dollars.compare_with(&bitcoin, |a, b| a == b).unwrap_err().kind(),
            MoneyErrorKind::CurrencyMismatch
        );
        assert_ne!(dollars, bitcoin);
    }

    #[test]
    fn test_sum() {
        let items = vec![usd("10"), usd("20"), usd("30")];
        assert_eq!(Money::sum(&items).unwrap().to_string(), "60.00 USD");
        assert_eq!(Money::sum(items).unwrap().currency_code(), "USD");

        let empty = Money::sum(Vec::<Money>::new()).unwrap();
        assert!(empty.currency().is_null());
        assert!(empty.is_zero());

        let mixed = [usd("1"), Money::from_currency("EUR", "1").unwrap()];
        assert_eq!(Money::sum(&mixed).unwrap_err().kind(), MoneyErrorKind::CurrencyMismatch);

        let with_null_zero = [Money::zero(), usd("5"), Money::zero_in("USD").unwrap()];
        assert_eq!(Money::sum(&with_null_zero).unwrap(), usd("5"));

        let trailing_null_zero = [usd("5"), Money::zero()];
        assert_eq!(Money::sum(&trailing_null_zero).unwrap(), usd("5"));

        let interleaved = [usd("1"), Money::zero(), usd("2"), Money::zero()];
        let total = Money::sum(&interleaved).unwrap();
        assert_eq!(total.to_string(), "3.00 USD");

        let only_null = Money::sum([Money::zero(), Money::zero()]).unwrap();
        assert!(only_null.currency().is_null());
    }

    #[test]
    fn test_string_conversions() {
        let m = usd("1234.56");
        assert_eq!(m.to_display_string(), "1,234.56");
        assert_eq!(m.to_plain_string(), "1234.56");
        assert_eq!(m.to_symbol_string(), "$1,234.56");
        assert_eq!(m.currency_symbol(), "$");

        let yen = Money::from_currency("JPY", "1234567").unwrap();
        assert_eq!(yen.to_symbol_string(), "¥1,234,567");
        assert_eq!(Money::from_currency("CLF", "1").unwrap().to_symbol_string(), "CLF1.0000");
    }

    #[test]
    fn test_float_conversion() {
        let m = usd("1234.56");
        assert!((m.to_approximate_float().unwrap() - 1234.56).abs() < 1e-9);
        assert!(!m.has_float_precision_risk());

        let huge = Money::from_currency("USD", "2000000000000000").unwrap();
        assert!(huge.has_float_precision_risk());
        assert!(huge.to_approximate_float().is_ok());

        let tiny =
            Money::from_currency_with("USD", "0.0000000000000001", ConversionOptions::unquantized())
                .unwrap();
        assert!(tiny.has_float_precision_risk());
        assert!(!Money::zero().has_float_precision_risk());
    }

    #[test]
    fn test_integer_conversions() {
        let half_up = ConversionOptions::rounded(Rounding::HalfUp);
        let m = Money::from_currency_with("USD", "12.348", half_up).unwrap();
        assert_eq!(m.to_smallest_unit_integer().unwrap(), 1235);

        let half_down = ConversionOptions::rounded(Rounding::HalfDown);
        let m = Money::from_currency_with("USD", "12.342", half_down).unwrap();
        assert_eq!(m.to_smallest_unit_integer().unwrap(), 1234);

        assert_eq!(usd("12.3456").to_fixed_scale_integer().unwrap(), 123500);
        assert_eq!(usd("-1.50").to_smallest_unit_integer().unwrap(), -150);
        assert_eq!(usd("1").to_fixed_scale_integer_with(100).unwrap(), 100);
        assert!(usd("1").to_fixed_scale_integer_with(0).is_err());
        assert_eq!(usd("1").conversion_factor(), 100);
    }

    #[test]
    fn test_equality_and_hash() {
        use std::collections::HashSet;

        let raw =
            Money::from_currency_with("USD", "10.001", ConversionOptions::unquantized()).unwrap();
        let set: HashSet<Money> = [usd("10.00"), usd("10"), raw].into_iter().collect();
        assert_eq!(set.len(), 1);
        assert!(!set.contains(&Money::from_currency("EUR", "10").unwrap()));
    }

    #[test]
    fn test_display_parse_round_trip() {
        let m = usd("-9876543.21");
        assert_eq!(parse_monetary_str(&m.to_display_string()).unwrap(), m.value());
    }

    #[test]
    fn test_money_is_send_sync_copy() {
        fn assert_traits<T: Send + Sync + Copy>() {}
        assert_traits::<Money>();
    }

    #[test]
    fn test_concurrent_operations_are_independent() {
        fn workload(seed: i64) -> MoneyResult<Vec<Money>> {
            let base = Money::from_currency("USD", Decimal::new(seed * 1_001, 3))?;
            Ok(vec![
                base.multiply(Decimal::new(7, 1))?,
                base.divide(3)?,
                base.add(&base)?,
                base.apply_with(|v| v * Decimal::new(3, 0), true, Rounding::HalfEven)?,
            ])
        }

        let expected: Vec<_> = (1..=16).map(|seed| workload(seed).unwrap()).collect();

        let actual = crossbeam::scope(|s| {
            let handles: Vec<_> = (1..=16)
                .map(|seed| s.spawn(move |_| workload(seed)))
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap().unwrap())
                .collect::<Vec<_>>()
        })
        .unwrap();

        assert_eq!(actual, expected);
    }
}

// ============================================================================
// Property-based tests
// ============================================================================
