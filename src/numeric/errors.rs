// ============================================================================
// Money Errors
// Error types for monetary construction, arithmetic and parsing
// ============================================================================

use rust_decimal::Decimal;
use std::fmt;

/// Errors that can occur while building or operating on monetary values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MoneyError {
    /// Non-zero amount paired with the NULL currency code
    MissingCurrency { value: Decimal },
    /// Arithmetic or ordering attempted across differing currencies
    CurrencyMismatch { left: String, right: String },
    /// Rounding could not produce a valid decimal (overflow, bad selector)
    InvalidQuantization { reason: String },
    /// Requested fractional-digit count outside [0, 34]
    DecimalPlacesOutOfRange { places: u32 },
    /// Input could not be resolved to a number
    InvalidMonetaryValue { input: String },
    /// Code is malformed or not registered
    InvalidCurrencyCode { code: String },
    /// Attempted division by zero
    DivisionByZero,
}

/// Stable, payload-free classification of a [`MoneyError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoneyErrorKind {
    MissingCurrency,
    CurrencyMismatch,
    InvalidQuantization,
    DecimalPlacesOutOfRange,
    InvalidMonetaryValue,
    InvalidCurrencyCode,
    DivisionByZero,
}

impl MoneyErrorKind {
    /// Machine-readable key, stable across releases.
    pub const fn as_str(self) -> &'static str {
        match self {
            MoneyErrorKind::MissingCurrency => "MISSING_CURRENCY",
            MoneyErrorKind::CurrencyMismatch => "CURRENCY_MISMATCH",
            MoneyErrorKind::InvalidQuantization => "INVALID_QUANTIZATION",
            MoneyErrorKind::DecimalPlacesOutOfRange => "DECIMAL_PLACES_OUT_OF_RANGE",
            MoneyErrorKind::InvalidMonetaryValue => "INVALID_MONETARY_VALUE",
            MoneyErrorKind::InvalidCurrencyCode => "INVALID_CURRENCY_CODE",
            MoneyErrorKind::DivisionByZero => "DIVISION_BY_ZERO",
        }
    }
}

impl fmt::Display for MoneyErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl MoneyError {
    pub fn kind(&self) -> MoneyErrorKind {
        match self {
            MoneyError::MissingCurrency { .. } => MoneyErrorKind::MissingCurrency,
            MoneyError::CurrencyMismatch { .. } => MoneyErrorKind::CurrencyMismatch,
            MoneyError::InvalidQuantization { .. } => MoneyErrorKind::InvalidQuantization,
            MoneyError::DecimalPlacesOutOfRange { .. } => MoneyErrorKind::DecimalPlacesOutOfRange,
            MoneyError::InvalidMonetaryValue { .. } => MoneyErrorKind::InvalidMonetaryValue,
            MoneyError::InvalidCurrencyCode { .. } => MoneyErrorKind::InvalidCurrencyCode,
            MoneyError::DivisionByZero => MoneyErrorKind::DivisionByZero,
        }
    }

    pub(crate) fn quantization(reason: impl Into<String>) -> Self {
        MoneyError::InvalidQuantization {
            reason: reason.into(),
        }
    }

    pub(crate) fn monetary_value(input: impl Into<String>) -> Self {
        MoneyError::InvalidMonetaryValue {
            input: input.into(),
        }
    }
}

impl fmt::Display for MoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyError::MissingCurrency { value } => write!(
                f,
                "missing currency: non-zero amount {} requires a currency",
                value
            ),
            MoneyError::CurrencyMismatch { left, right } => write!(
                f,
                "currency mismatch: unable to operate on {} and {}",
                left, right
            ),
            MoneyError::InvalidQuantization { reason } => {
                write!(f, "invalid quantization: {}", reason)
            },
            MoneyError::DecimalPlacesOutOfRange { places } => write!(
                f,
                "decimal places out of range: {} is not within 0..=34",
                places
            ),
            MoneyError::InvalidMonetaryValue { input } => write!(
                f,
                "invalid monetary value: unable to parse '{}'",
                input
            ),
            MoneyError::InvalidCurrencyCode { code } => {
                write!(f, "invalid currency code: {}", code)
            },
            MoneyError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for MoneyError {}

/// Result type alias for monetary operations
pub type MoneyResult<T> = Result<T, MoneyError>;
