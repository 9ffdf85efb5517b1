//! Price range types decoded from repeated currency symbols.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Currencies understood by the `$$$`-style price range notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Gbp,
    Yen,
    Eur,
}

impl Currency {
    const ALL: [Currency; 4] = [Currency::Usd, Currency::Gbp, Currency::Yen, Currency::Eur];

    /// Parse a currency code (`USD`, `GBP`, `YEN`, `EUR`).
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|currency| currency.code() == code)
    }

    /// The symbol repeated in range notation.
    pub fn symbol(&self) -> char {
        match self {
            Currency::Usd => '$',
            Currency::Gbp => '£',
            Currency::Yen => '¥',
            Currency::Eur => '€',
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
            Currency::Yen => "YEN",
            Currency::Eur => "EUR",
        }
    }
}

/// A decoded price range bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    pub price_range_currency: Currency,
    pub price_range_min: u32,
    /// Absent for the open-ended top bucket
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range_max: Option<u32>,
}

impl PriceRange {
    /// Render an optional range as JSON, using `{}` when nothing was decoded.
    pub fn to_value_or_empty(range: Option<&PriceRange>) -> Value {
        range
            .and_then(|r| serde_json::to_value(r).ok())
            .unwrap_or_else(|| Value::Object(Default::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_currency_codes() {
        assert_eq!(Currency::from_code("GBP"), Some(Currency::Gbp));
        assert_eq!(Currency::from_code("usd"), None);
        assert_eq!(Currency::Yen.symbol(), '¥');
        assert_eq!(Currency::Eur.code(), "EUR");
    }

    #[test]
    fn test_range_serialization() {
        let bounded = PriceRange {
            price_range_currency: Currency::Usd,
            price_range_min: 40,
            price_range_max: Some(55),
        };
        assert_eq!(
            PriceRange::to_value_or_empty(Some(&bounded)),
            json!({"priceRangeCurrency": "USD", "priceRangeMin": 40, "priceRangeMax": 55})
        );

        let open = PriceRange {
            price_range_max: None,
            ..bounded
        };
        assert_eq!(
            serde_json::to_value(&open).unwrap(),
            json!({"priceRangeCurrency": "USD", "priceRangeMin": 40})
        );

        assert_eq!(PriceRange::to_value_or_empty(None), json!({}));
    }
}
