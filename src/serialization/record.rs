// ============================================================================
// Money Record
// Flat {value, currency_code} interchange form and field-map constructors
// ============================================================================

use crate::domain::Money;
use crate::numeric::{parse_monetary_str, MoneyError, MoneyResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Interchange form of a [`Money`].
///
/// `value` is the ungrouped amount at the currency's decimal places, e.g.
/// `{"value": "1234.56", "currency_code": "USD"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoneyRecord {
    pub value: String,
    pub currency_code: String,
}

impl MoneyRecord {
    pub fn new(value: impl Into<String>, currency_code: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            currency_code: currency_code.into(),
        }
    }

    /// Build a money value from a field map with explicit field names.
    ///
    /// # Example
    /// ```
    /// use precise_money::serialization::MoneyRecord;
    ///
    /// let fields = [("ccy", "EUR"), ("amount", "1.234,50")];
    /// let m = MoneyRecord::from_fields(fields, "ccy", "amount").unwrap();
    /// assert_eq!(m.to_string(), "1,234.50 EUR");
    /// ```
    ///
    /// # Errors
    /// `InvalidMonetaryValue` when either field is missing, plus any
    /// construction error.
    pub fn from_fields<I, K, V>(
        fields: I,
        currency_field: &str,
        amount_field: &str,
    ) -> MoneyResult<Money>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let (code, amount) = pick_fields(fields, currency_field, amount_field)?;
        Money::from_currency(&code, amount.as_str())
    }

    /// Like [`MoneyRecord::from_fields`], with the amount stored as a
    /// fixed-scale (× 10 000) integer.
    pub fn from_fixed_scale_fields<I, K, V>(
        fields: I,
        currency_field: &str,
        amount_field: &str,
    ) -> MoneyResult<Money>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let (code, amount) = pick_fields(fields, currency_field, amount_field)?;
        let raw: i128 = amount
            .trim()
            .parse()
            .map_err(|_| MoneyError::monetary_value(&amount))?;
        Money::from_fixed_scale_integer(&code, raw)
    }

    /// Like [`MoneyRecord::from_fields`], reading both fields from the sub-map
    /// stored under `container_field`.
    ///
    /// Returns `Ok(None)` when the container is absent.
    ///
    /// ```
    /// use precise_money::serialization::MoneyRecord;
    /// use std::collections::HashMap;
    ///
    /// let mut price = HashMap::new();
    /// price.insert("code", "USD");
    /// price.insert("amount", "9.99");
    /// let mut row = HashMap::new();
    /// row.insert("price", price);
    ///
    /// let m = MoneyRecord::from_nested_fields(&row, "price", "code", "amount").unwrap();
    /// assert_eq!(m.unwrap().to_string(), "9.99 USD");
    /// assert!(MoneyRecord::from_nested_fields(&row, "cost", "code", "amount")
    ///     .unwrap()
    ///     .is_none());
    /// ```
    ///
    /// # Errors
    /// Every [`MoneyRecord::from_fields`] error, once the container is found.
    pub fn from_nested_fields<I, K, M, MK, V>(
        fields: I,
        container_field: &str,
        currency_field: &str,
        amount_field: &str,
    ) -> MoneyResult<Option<Money>>
    where
        I: IntoIterator<Item = (K, M)>,
        K: AsRef<str>,
        M: IntoIterator<Item = (MK, V)>,
        MK: AsRef<str>,
        V: AsRef<str>,
    {
        fields
            .into_iter()
            .find(|(key, _)| key.as_ref() == container_field)
            .map(|(_, inner)| Self::from_fields(inner, currency_field, amount_field))
            .transpose()
    }

    /// Guess which of exactly two fields is the amount.
    ///
    /// The field whose value reads as a monetary string is the amount and the
    /// other one is the currency code. Names are ignored.
    ///
    /// ```
    /// use precise_money::serialization::MoneyRecord;
    ///
    /// let m = MoneyRecord::infer_from_fields([("a", "GBP"), ("b", "£12.50")]).unwrap();
    /// assert_eq!(m.to_string(), "12.50 GBP");
    /// assert!(MoneyRecord::infer_from_fields([("a", "12"), ("b", "13")]).is_err());
    /// ```
    ///
    /// # Errors
    /// `InvalidMonetaryValue` for any field count other than two, or when zero
    /// or both values parse as amounts.
    pub fn infer_from_fields<I, K, V>(fields: I) -> MoneyResult<Money>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let values: Vec<String> = fields
            .into_iter()
            .map(|(_, v)| v.as_ref().to_string())
            .collect();

        let [first, second] = values.as_slice() else {
            return Err(MoneyError::monetary_value(format!(
                "expected exactly two fields, got {}",
                values.len()
            )));
        };

        let (code, amount) = match (parse_monetary_str(first), parse_monetary_str(second)) {
            (Ok(_), Err(_)) => (second, first),
            (Err(_), Ok(_)) => (first, second),
            (Ok(_), Ok(_)) => {
                return Err(MoneyError::monetary_value(format!(
                    "ambiguous amount: both {first:?} and {second:?} parse"
                )))
            }
            (Err(_), Err(_)) => {
                return Err(MoneyError::monetary_value(format!(
                    "no amount among {first:?} and {second:?}"
                )))
            }
        };

        tracing::debug!(currency = %code, amount = %amount, "inferred money fields");
        Money::from_currency(code, amount.as_str())
    }
}

fn pick_fields<I, K, V>(
    fields: I,
    currency_field: &str,
    amount_field: &str,
) -> MoneyResult<(String, String)>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut code = None;
    let mut amount = None;
    for (key, value) in fields {
        let key = key.as_ref();
        if key == currency_field {
            code = Some(value.as_ref().to_string());
        } else if key == amount_field {
            amount = Some(value.as_ref().to_string());
        }
    }

    match (code, amount) {
        (Some(code), Some(amount)) => Ok((code, amount)),
        (None, _) => Err(MoneyError::monetary_value(format!("missing field {currency_field:?}"))),
        (_, None) => Err(MoneyError::monetary_value(format!("missing field {amount_field:?}"))),
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl Money {
    /// Interchange record for this value.
    pub fn to_record(&self) -> MoneyRecord {
        MoneyRecord::new(self.to_plain_string(), self.currency_code())
    }
}

impl From<Money> for MoneyRecord {
    fn from(money: Money) -> Self {
        money.to_record()
    }
}

impl From<&Money> for MoneyRecord {
    fn from(money: &Money) -> Self {
        money.to_record()
    }
}

impl TryFrom<MoneyRecord> for Money {
    type Error = MoneyError;

    fn try_from(record: MoneyRecord) -> MoneyResult<Self> {
        Money::from_currency(&record.currency_code, record.value.as_str())
    }
}
