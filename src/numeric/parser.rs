// ============================================================================
// Monetary String Parsing
// Locale-tolerant parsing of human-written amounts
// ============================================================================
//
// Separator disambiguation is a heuristic. It covers the common
// "1,234.56" / "1.234,56" / "1234,56" / "1.234.567" shapes, but a lone dot
// followed by three digits ("1.234") is always read as a decimal point.

use super::errors::{MoneyError, MoneyResult};
use rust_decimal::Decimal;

/// Parse a human-written monetary amount into an exact decimal.
///
/// Currency symbols, spaces and any other characters that are not digits,
/// `,`, `.` or `-` are dropped before the separators are disambiguated.
///
/// # Examples
/// ```
/// use precise_money::numeric::parse_monetary_str;
///
/// assert_eq!(parse_monetary_str("$1,234.56").unwrap().to_string(), "1234.56");
/// assert_eq!(parse_monetary_str("1.234,56 €").unwrap().to_string(), "1234.56");
/// assert_eq!(parse_monetary_str("10,00").unwrap().to_string(), "10.00");
/// ```
///
/// # Errors
/// Returns `InvalidMonetaryValue` (carrying `text`) if no number remains.
pub fn parse_monetary_str(text: &str) -> MoneyResult<Decimal> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-'))
        .collect();

    let normalized = normalize_separators(cleaned);

    Decimal::from_str_exact(&normalized).map_err(|_| MoneyError::monetary_value(text))
}

/// Rewrite thousands/decimal separators so only a single `.` decimal point remains.
fn normalize_separators(value: String) -> String {
    let comma_count = value.matches(',').count();
    let dot_count = value.matches('.').count();

    match (comma_count, dot_count) {
        // 1234,56
        (1, 0) => value.replace(',', "."),
        // 1,234,567
        (c, 0) if c > 1 => value.replace(',', ""),
        // 1.234.567
        (0, d) if d > 1 => value.replace('.', ""),
        (c, 1) if c > 0 => {
            let comma_index = value.find(',');
            let dot_index = value.find('.');
            if comma_index < dot_index {
                // 1,234.56
                value.replace(',', "")
            } else {
                // 1.234,56
                value.replace('.', "").replace(',', ".")
            }
        },
        _ => value,
    }
}
