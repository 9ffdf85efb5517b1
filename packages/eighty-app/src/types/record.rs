//! Record-level types: field values, data types and value records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Top-level list of origin URLs on a finalized record or value record.
pub const SOURCE_URLS_KEY: &str = "sourceURLs";

/// Observation timestamps on a value record.
pub const DATE_SEEN_KEY: &str = "dateSeen";

/// Crawl timestamp on a finalized record.
pub const DATE_CRAWLED_KEY: &str = "dateCrawled";

/// Canonical data type key.
pub const DATA_TYPE_KEY: &str = "dataType";

/// Data type key written by older apps.
pub const LEGACY_DATA_TYPE_KEY: &str = "data_type";

/// The shape of a single field in a raw record.
///
/// Raw records are loosely typed: the same field may hold a string on one
/// site, an object on another and a list on a third. Finalization matches on
/// this instead of probing the JSON value ad hoc.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// String, number, boolean or null
    Scalar(Value),
    /// A single nested object
    Object(Map<String, Value>),
    /// A list of scalars and/or objects
    Array(Vec<Value>),
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => FieldValue::Object(map),
            Value::Array(items) => FieldValue::Array(items),
            scalar => FieldValue::Scalar(scalar),
        }
    }
}

impl From<FieldValue> for Value {
    fn from(field: FieldValue) -> Self {
        match field {
            FieldValue::Scalar(value) => value,
            FieldValue::Object(map) => Value::Object(map),
            FieldValue::Array(items) => Value::Array(items),
        }
    }
}

/// Canonical record category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Product,
    Business,
    Property,
}

impl DataType {
    /// Map a canonical or legacy data type name onto the enumeration.
    ///
    /// Legacy synonyms: `products`, `location`, `locations`, `properties`.
    /// Anything else is unrecognized.
    pub fn from_legacy(name: &str) -> Option<Self> {
        match name {
            "product" | "products" => Some(DataType::Product),
            "business" | "location" | "locations" => Some(DataType::Business),
            "property" | "properties" => Some(DataType::Property),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Product => "product",
            DataType::Business => "business",
            DataType::Property => "property",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One extracted value plus its provenance.
///
/// Serializes as a flat object: the original key/value pairs followed by
/// `sourceURLs` and, when stamped, `dateSeen`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValueRecord {
    fields: Map<String, Value>,
}

impl ValueRecord {
    /// Wrap a single value under `key`.
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        let mut fields = Map::new();
        fields.insert(key.into(), value);
        Self { fields }
    }

    /// Start from an existing object, keeping its fields.
    pub fn from_object(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Set `sourceURLs` to the single given URL.
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.fields.insert(
            SOURCE_URLS_KEY.to_string(),
            Value::Array(vec![Value::String(url.into())]),
        );
        self
    }

    /// Set `dateSeen` to the single given timestamp.
    pub fn with_date_seen(mut self, stamp: impl Into<String>) -> Self {
        self.fields.insert(
            DATE_SEEN_KEY.to_string(),
            Value::Array(vec![Value::String(stamp.into())]),
        );
        self
    }

    /// Whether an object already carries provenance and must not be re-wrapped.
    pub fn is_finalized(object: &Map<String, Value>) -> bool {
        object.contains_key(SOURCE_URLS_KEY)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.fields
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

impl From<ValueRecord> for Value {
    fn from(record: ValueRecord) -> Self {
        record.into_value()
    }
}
