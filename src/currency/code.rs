// ============================================================================
// Currency Code
// Inline, validated currency code
// ============================================================================

use super::registry::{validate_code, NULL_CURRENCY_CODE};
use crate::numeric::MoneyError;
use arrayvec::ArrayString;
use std::fmt;
use std::str::FromStr;

/// Longest code we store ("NO_CURRENCY").
const CODE_CAPACITY: usize = 11;

/// An uppercase, registered currency code or the NULL code.
///
/// Stored inline so values holding it stay `Copy`. Construct through
/// [`validate_code`] or `str::parse`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurrencyCode(ArrayString<CODE_CAPACITY>);

impl CurrencyCode {
    /// The reserved "no currency" code.
    pub fn null() -> Self {
        let mut inner = ArrayString::new();
        inner.push_str(NULL_CURRENCY_CODE);
        Self(inner)
    }

    /// Wrap an already-validated uppercase code.
    pub(crate) fn from_registered(code: &str) -> Option<Self> {
        ArrayString::from(code).ok().map(Self)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.0.as_str() == NULL_CURRENCY_CODE
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::null()
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CurrencyCode({})", self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_code(s)
    }
}

impl PartialEq<str> for CurrencyCode {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for CurrencyCode {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
