// ============================================================================
// Amount Formatting
// Thousands grouping with a fixed number of fractional digits
// ============================================================================

use rust_decimal::Decimal;

/// Render `value` with `,` thousands separators and exactly `places`
/// fractional digits.
///
/// `value` must already be rounded to at most `places` fractional digits;
/// missing digits are zero-padded, never rounded here.
///
/// # Example
/// ```
/// use precise_money::utils::format_grouped;
/// use rust_decimal::Decimal;
///
/// let v: Decimal = "-1234567.5".parse().unwrap();
/// assert_eq!(format_grouped(v, 2), "-1,234,567.50");
/// ```
pub fn format_grouped(value: Decimal, places: u32) -> String {
    render(value, places, true)
}

/// Same as [`format_grouped`] without thousands separators.
pub fn format_plain(value: Decimal, places: u32) -> String {
    render(value, places, false)
}

fn render(value: Decimal, places: u32, grouped: bool) -> String {
    let text = value.abs().to_string();
    let (int_digits, frac_digits) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (text.as_str(), ""),
    };

    let places = places as usize;
    let mut out = String::with_capacity(int_digits.len() + int_digits.len() / 3 + places + 2);

    if value.is_sign_negative() && !value.is_zero() {
        out.push('-');
    }

    let lead = int_digits.len() % 3;
    for (i, ch) in int_digits.chars().enumerate() {
        if grouped && i > 0 && (i + 3 - lead) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    if places > 0 {
        out.push('.');
        let kept = &frac_digits[..frac_digits.len().min(places)];
        out.push_str(kept);
        out.extend(std::iter::repeat_n('0', places - kept.len()));
    }

    out
}
