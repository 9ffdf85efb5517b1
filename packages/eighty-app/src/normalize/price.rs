//! Price normalization and `$$$`-style range decoding.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::price::{Currency, PriceRange};

/// First digit run, allowing `,`, `|` or `.` between digit groups.
static RE_DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:[0-9]+(?:[,|.][0-9]+)*)+").unwrap());

/// Leading decimal literal of a string.
static RE_LEADING_FLOAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)").unwrap());

/// Range buckets per currency, indexed by symbol count minus one.
const PRICE_BUCKETS: &[(Currency, [(u32, Option<u32>); 4])] = &[
    (Currency::Usd, [(0, Some(25)), (25, Some(40)), (40, Some(55)), (55, None)]),
    (Currency::Gbp, [(0, Some(15)), (15, Some(25)), (25, Some(35)), (35, None)]),
    (Currency::Yen, [(0, Some(2807)), (2807, Some(4491)), (4491, Some(6175)), (6175, None)]),
    (Currency::Eur, [(0, Some(21)), (21, Some(34)), (34, Some(47)), (47, None)]),
];

/// Normalize the first number in a price string to two decimal places.
///
/// A comma within the last three characters is read as a decimal separator
/// (`123,45` → `123.45`); other commas are thousands separators. Text around
/// the number is kept: `USD 5` → `USD 5.00`. Returns `None` when the string
/// holds no number.
pub fn normalize_price(price: &str) -> Option<String> {
    let price = price.trim();
    if price.is_empty() {
        return None;
    }

    let tail_start = price
        .char_indices()
        .rev()
        .nth(2)
        .map(|(idx, _)| idx)
        .unwrap_or(0);
    let price = if price[tail_start..].contains(',') {
        format!("{}{}", &price[..tail_start], price[tail_start..].replacen(',', ".", 1))
    } else {
        price.to_string()
    };

    let run = RE_DIGIT_RUN.find(&price)?;
    let digits = run.as_str().replace(',', "");
    let number = parse_leading_float(&digits)?;
    if !number.is_finite() {
        return None;
    }

    Some(format!(
        "{}{:.2}{}",
        &price[..run.start()],
        number,
        &price[run.end()..]
    ))
}

/// Parse a normalized price into a number, ignoring surrounding text.
pub fn parse_price(price: &str) -> Option<f64> {
    let normalized = normalize_price(price)?;
    let run = RE_DIGIT_RUN.find(&normalized)?;
    parse_leading_float(run.as_str())
}

fn parse_leading_float(text: &str) -> Option<f64> {
    RE_LEADING_FLOAT
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Decode a run of repeated currency symbols into a price range.
///
/// `$$$` in USD is 40 to 55; four symbols are open-ended. Returns `None` for
/// an unknown currency, or text that is not one to four of the currency's
/// symbol.
pub fn get_price_range_replace(text: &str, currency: &str) -> Option<PriceRange> {
    let currency = Currency::from_code(currency)?;
    let symbol = currency.symbol();

    let count = text.chars().count();
    if !(1..=4).contains(&count) || text.chars().any(|c| c != symbol) {
        return None;
    }

    let (_, buckets) = PRICE_BUCKETS.iter().find(|(c, _)| *c == currency)?;
    let (min, max) = buckets[count - 1];
    Some(PriceRange {
        price_range_currency: currency,
        price_range_min: min,
        price_range_max: max,
    })
}
