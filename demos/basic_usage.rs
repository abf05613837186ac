// ============================================================================
// Basic Usage Example
// ============================================================================

use precise_money::prelude::*;
use rust_decimal::Decimal;

fn main() -> Result<(), MoneyError> {
    #[cfg(feature = "logging")]
    if let Err(err) = precise_money::logging::init(tracing::Level::DEBUG) {
        eprintln!("logging disabled: {}", err);
    }

    println!("=== Precise Money Example ===\n");

    // Construction from strings, integers and smallest units
    let coffee = Money::from_currency("USD", "3.75")?;
    let sandwich = Money::from_currency("USD", 8)?;
    let tip = Money::from_smallest_unit_integer("USD", 250)?;
    println!("coffee:   {}", coffee);
    println!("sandwich: {}", sandwich);
    println!("tip:      {}", tip);

    // Summation and scaling
    let subtotal = Money::sum([coffee, sandwich, tip])?;
    let tax = subtotal.apply_with(|v| v * Decimal::new(825, 4), true, Rounding::HalfUp)?;
    let total = subtotal.add(&tax)?;
    println!("\nsubtotal: {}", subtotal.to_symbol_string());
    println!("tax:      {}", tax.to_symbol_string());
    println!("total:    {}", total.to_symbol_string());

    // Splitting a bill
    let per_person = total.divide(3)?;
    let remainder = total.subtract(&per_person.multiply(3)?)?;
    println!("\nper person: {} (remainder {})", per_person, remainder);

    // Locale-tolerant parsing
    println!("\n=== Parsing ===");
    for text in ["1,234.56", "1.234,56", "€ 99,90", "¥1,000,000"] {
        println!("{:>12} -> {}", text, parse_monetary_str(text)?);
    }

    // Precision per currency
    println!("\n=== Currency precision ===");
    for code in ["JPY", "USD", "CLF", "BTC"] {
        let m = Money::from_currency(code, "1234.567891234")?;
        println!(
            "{}: {} ({} places, {} smallest units)",
            code,
            m.to_symbol_string(),
            m.decimal_places(),
            m.to_smallest_unit_integer()?
        );
    }

    // Currency safety
    println!("\n=== Currency safety ===");
    let euros = Money::from_currency("EUR", "10")?;
    match total.add(&euros) {
        Ok(sum) => println!("unexpected sum: {}", sum),
        Err(err) => println!("{} ({})", err, err.kind()),
    }

    // Interchange record
    let record = total.to_record();
    println!("\nrecord: value={} currency_code={}", record.value, record.currency_code);
    let restored = Money::try_from(record)?;
    println!("restored equals total: {}", restored == total);

    Ok(())
}
