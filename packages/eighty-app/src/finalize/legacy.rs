//! Migration of legacy field shapes into value record lists.
//!
//! Older apps emit `description: "..."`, scalar `upc`, review lists without
//! provenance and prices like `"USD 5.00"`. The rules below run in order over
//! a single record. Entries that already carry `sourceURLs` are never
//! re-wrapped, so migrating a migrated record changes nothing.

use regex::Regex;
use serde_json::{Map, Number, Value};
use std::sync::LazyLock;

use super::field::finalize_field_with_source;
use crate::normalize::price::parse_price;
use crate::types::record::{FieldValue, ValueRecord, DATE_SEEN_KEY};

/// Key used when wrapping a bare value as a value record.
const VALUE_KEY: &str = "value";

/// `USD 5.00` or `EUR 5,00 - 7,50`.
static RE_LEGACY_PRICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z]{3})\s*([0-9][0-9.,]*)(?:\s*-\s*([0-9][0-9.,]*))?\s*$").unwrap()
});

#[derive(Debug, Clone, Copy)]
enum LegacyRule {
    /// Fold a singular field into its plural value record list
    Rename { from: &'static str, to: &'static str },
    /// Promote a scalar to a one-element list
    ScalarToList(&'static str),
    /// Promote each entry's scalar `value` to a one-element list
    KeyValueList(&'static str),
    /// Split combined `price` strings, then attribute
    Prices(&'static str),
    /// Attach provenance to each entry
    Attributed(&'static str),
    /// Attach `sourceURLs` to each entry, without `dateSeen`
    Sourced(&'static str),
}

const LEGACY_RULES: &[LegacyRule] = &[
    LegacyRule::Rename { from: "description", to: "descriptions" },
    LegacyRule::Rename { from: "quantity", to: "quantities" },
    LegacyRule::Rename { from: "sku", to: "skus" },
    LegacyRule::ScalarToList("upc"),
    LegacyRule::ScalarToList("ean"),
    LegacyRule::KeyValueList("features"),
    LegacyRule::Prices("prices"),
    LegacyRule::Attributed("availableDates"),
    LegacyRule::Attributed("brokers"),
    LegacyRule::Attributed("deposits"),
    LegacyRule::Attributed("descriptions"),
    LegacyRule::Attributed("fees"),
    LegacyRule::Attributed("leasingTerms"),
    LegacyRule::Attributed("managedBy"),
    LegacyRule::Attributed("nearbySchools"),
    LegacyRule::Attributed("people"),
    LegacyRule::Attributed("propertyTaxes"),
    LegacyRule::Attributed("quantities"),
    LegacyRule::Attributed("reviews"),
    LegacyRule::Attributed("rooms"),
    LegacyRule::Sourced("skus"),
    LegacyRule::Attributed("statuses"),
    LegacyRule::Attributed("unavailableDates"),
];

/// Where and when the values of a record were observed.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Provenance<'a> {
    pub source_url: &'a str,
    pub date_seen: &'a str,
}

/// Apply every legacy rule to a record.
pub(crate) fn migrate_legacy_fields(
    mut record: Map<String, Value>,
    provenance: Provenance<'_>,
) -> Map<String, Value> {
    for rule in LEGACY_RULES {
        match *rule {
            LegacyRule::Rename { from, to } => rename_field(&mut record, from, to),
            LegacyRule::ScalarToList(key) => {
                if let Some(value) = record.get_mut(key) {
                    promote_scalar(value);
                }
            }
            LegacyRule::KeyValueList(key) => {
                if let Some(Value::Array(entries)) = record.get_mut(key) {
                    for entry in entries.iter_mut().filter_map(Value::as_object_mut) {
                        if let Some(value) = entry.get_mut(VALUE_KEY) {
                            promote_scalar(value);
                        }
                    }
                }
            }
            LegacyRule::Prices(key) => {
                if let Some(Value::Array(entries)) = record.get_mut(key) {
                    for entry in entries.iter_mut().filter_map(Value::as_object_mut) {
                        split_legacy_price(entry);
                    }
                }
                attribute_field(&mut record, key, provenance, true);
            }
            LegacyRule::Attributed(key) => attribute_field(&mut record, key, provenance, true),
            LegacyRule::Sourced(key) => attribute_field(&mut record, key, provenance, false),
        }
    }
    record
}

/// Remove `key`, keeping the order of the remaining fields.
pub(crate) fn remove_ordered(record: &mut Map<String, Value>, key: &str) -> Option<Value> {
    let value = record.get(key).cloned()?;
    *record = std::mem::take(record)
        .into_iter()
        .filter(|(k, _)| k != key)
        .collect();
    Some(value)
}

fn rename_field(record: &mut Map<String, Value>, from: &str, to: &str) {
    if record.get(from).map_or(true, Value::is_null) {
        return;
    }
    let Some(legacy) = remove_ordered(record, from) else {
        return;
    };

    let mut entries = match record.get(to) {
        Some(Value::Array(items)) => items.clone(),
        Some(Value::Null) | None => Vec::new(),
        Some(other) => vec![other.clone()],
    };
    match legacy {
        Value::Array(items) => entries.extend(items),
        other => entries.push(other),
    }
    record.insert(to.to_string(), Value::Array(entries));
}

fn promote_scalar(value: &mut Value) {
    if !value.is_null() && !value.is_array() {
        *value = Value::Array(vec![value.take()]);
    }
}

fn attribute_field(
    record: &mut Map<String, Value>,
    key: &str,
    provenance: Provenance<'_>,
    date_seen: bool,
) {
    let Some(value) = record.get_mut(key) else {
        return;
    };
    if value.is_null() {
        return;
    }

    let entries = match value.take() {
        Value::Array(items) => items,
        other => vec![other],
    };
    *value = Value::Array(
        entries
            .into_iter()
            .map(|entry| attribute_entry(entry, provenance, date_seen))
            .collect(),
    );
}

fn attribute_entry(entry: Value, provenance: Provenance<'_>, date_seen: bool) -> Value {
    match entry {
        Value::Object(mut object) if ValueRecord::is_finalized(&object) => {
            wrap_date_seen(&mut object);
            Value::Object(object)
        }
        nested @ Value::Array(_) => nested,
        other => stamp(other, provenance, date_seen),
    }
}

fn stamp(entry: Value, provenance: Provenance<'_>, date_seen: bool) -> Value {
    let record =
        finalize_field_with_source(VALUE_KEY, FieldValue::from(entry), provenance.source_url)
            .into_iter()
            .next()
            .unwrap_or_default();

    if record.fields().contains_key(DATE_SEEN_KEY) {
        let mut object = record.into_map();
        wrap_date_seen(&mut object);
        Value::Object(object)
    } else if date_seen {
        record.with_date_seen(provenance.date_seen).into_value()
    } else {
        record.into_value()
    }
}

fn wrap_date_seen(object: &mut Map<String, Value>) {
    if let Some(date_seen) = object.get_mut(DATE_SEEN_KEY) {
        promote_scalar(date_seen);
    }
}

/// Replace `price: "USD 5.00"` with `currency`, `amountMin` and `amountMax`.
fn split_legacy_price(entry: &mut Map<String, Value>) {
    let Some(parsed) = entry
        .get("price")
        .and_then(Value::as_str)
        .and_then(parse_legacy_price)
    else {
        return;
    };

    let (currency, min, max) = parsed;
    remove_ordered(entry, "price");
    entry.insert("currency".to_string(), Value::String(currency));
    entry.insert("amountMin".to_string(), number(min));
    entry.insert("amountMax".to_string(), number(max));
}

fn parse_legacy_price(price: &str) -> Option<(String, f64, f64)> {
    let caps = RE_LEGACY_PRICE.captures(price)?;
    let min = parse_price(&caps[2])?;
    let max = match caps.get(3) {
        Some(m) => parse_price(m.as_str())?,
        None => min,
    };
    Some((caps[1].to_uppercase(), min, max))
}

fn number(value: f64) -> Value {
    Number::from_f64(value).map_or(Value::Null, Value::Number)
}
