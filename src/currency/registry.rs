// ============================================================================
// Currency Registry
// Static currency metadata: decimal places and display symbols
// ============================================================================

use super::code::CurrencyCode;
use crate::numeric::{MoneyError, MoneyResult};

/// Reserved code meaning "no specific currency"; valid only for zero amounts.
pub const NULL_CURRENCY_CODE: &str = "NO_CURRENCY";

/// Decimal places used for unknown currencies and display defaults.
pub const DEFAULT_DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Decimal places used by ad-hoc quantization when none are given.
pub const DEFAULT_MAX_QUANTIZING_DECIMAL_PLACES: u32 = 6;

/// Upper bound on fractional digits accepted anywhere in the crate.
pub const ABSOLUTE_MAX_DECIMAL_PLACES: u32 = 34;

/// Read-only metadata for one registered currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurrencyMetadata {
    pub code: &'static str,
    pub decimal_places: u32,
    pub symbol: Option<&'static str>,
}

const fn entry(
    code: &'static str,
    decimal_places: u32,
    symbol: Option<&'static str>,
) -> CurrencyMetadata {
    CurrencyMetadata {
        code,
        decimal_places,
        symbol,
    }
}

static CURRENCIES: &[CurrencyMetadata] = &[
    entry(NULL_CURRENCY_CODE, 2, None),
    entry("USD", 2, Some("$")),
    entry("CAD", 2, Some("$")),
    entry("BTC", 8, Some("₿")),
    entry("MXN", 2, Some("$")),
    entry("EUR", 2, Some("€")),
    entry("INR", 0, Some("₹")),
    entry("CLF", 4, None),
    entry("GBP", 2, Some("£")),
    entry("JPY", 0, Some("¥")),
    entry("CNY", 2, Some("¥")),
    entry("AUD", 2, Some("$")),
    entry("SGD", 2, Some("$")),
    entry("HKD", 2, Some("$")),
    entry("NZD", 2, Some("$")),
    entry("CHF", 2, Some("₣")),
    entry("ZAR", 2, Some("R")),
    entry("BRL", 2, Some("R$")),
    entry("RUB", 2, Some("₽")),
    entry("TRY", 2, Some("₺")),
    entry("THB", 2, Some("฿")),
    entry("KRW", 0, Some("₩")),
    entry("VND", 0, Some("₫")),
    entry("PHP", 2, Some("₱")),
    entry("IDR", 0, Some("Rp")),
    entry("MYR", 2, Some("RM")),
    entry("BDT", 0, Some("৳")),
    entry("NGN", 2, Some("₦")),
    entry("ZMW", 2, Some("ZK")),
    entry("XAF", 0, Some("FCFA")),
    entry("XOF", 0, Some("CFA")),
    entry("XCD", 2, Some("$")),
    entry("XDR", 2, Some("SDR")),
    // Precious metals and testing/unit-of-account codes
    entry("XAG", 2, Some("XAG")),
    entry("XAU", 2, Some("XAU")),
    entry("XPD", 2, Some("XPD")),
    entry("XPT", 2, Some("XPT")),
    entry("XTS", 2, Some("XTS")),
    entry("XXX", 2, Some("XXX")),
    entry("XBB", 2, Some("XBB")),
    entry("XBC", 2, Some("XBC")),
    entry("XBD", 2, Some("XBD")),
];

/// Look up registered metadata (case-insensitive).
pub fn metadata_for(code: &str) -> Option<&'static CurrencyMetadata> {
    CURRENCIES
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code))
}

#[inline]
pub fn is_registered(code: &str) -> bool {
    metadata_for(code).is_some()
}

/// All registered codes, NULL code included.
pub fn registered_codes() -> impl Iterator<Item = &'static str> {
    CURRENCIES.iter().map(|c| c.code)
}

/// Decimal places for `code`, falling back to 2 for unknown currencies.
pub fn decimal_places_for(code: &str) -> u32 {
    match metadata_for(code) {
        Some(meta) => meta.decimal_places,
        None => {
            tracing::debug!(code, "unknown currency, using default decimal places");
            DEFAULT_DISPLAY_DECIMAL_PLACES
        },
    }
}

/// Display symbol for `code`, or the code itself when it has none.
pub fn symbol_for(code: &str) -> &str {
    metadata_for(code)
        .and_then(|meta| meta.symbol)
        .unwrap_or(code)
}

/// Uppercase and validate a currency code.
///
/// # Errors
/// `InvalidCurrencyCode` unless the code is three ASCII letters (or the NULL
/// code) and registered.
pub fn validate_code(code: &str) -> MoneyResult<CurrencyCode> {
    let upper = code.to_ascii_uppercase();
    let well_formed = (upper.len() == 3 && upper.bytes().all(|b| b.is_ascii_uppercase()))
        || upper == NULL_CURRENCY_CODE;

    if !well_formed || !is_registered(&upper) {
        return Err(MoneyError::InvalidCurrencyCode {
            code: code.to_string(),
        });
    }

    CurrencyCode::from_registered(&upper).ok_or_else(|| MoneyError::InvalidCurrencyCode {
        code: code.to_string(),
    })
}
