//! Wrapping single fields as lists of value records.

use serde_json::{Map, Value};

use crate::links::flag::strip_80_flag_from_url;
use crate::types::record::{FieldValue, ValueRecord};

/// Build `{ key: value, sourceURLs: [url] }`, stripping the flag from `url`.
pub fn convert_element_to_object_with_source_url(
    key: &str,
    value: Value,
    url: &str,
) -> Map<String, Value> {
    ValueRecord::new(key, value)
        .with_source_url(strip_80_flag_from_url(url))
        .into_map()
}

/// Set `sourceURLs` on an object to the flag-stripped `url`.
pub fn add_source_url_to_object(object: Map<String, Value>, url: &str) -> Map<String, Value> {
    ValueRecord::from_object(object)
        .with_source_url(strip_80_flag_from_url(url))
        .into_map()
}

/// Convert any field shape into a list of value records.
///
/// A scalar becomes `[{ field_name: value, sourceURLs: [url] }]`, an object
/// gets `sourceURLs` and is wrapped in a list, and each element of a list is
/// treated the same way. The result is always a list.
pub fn finalize_field_as_list_of_objects(
    field_name: &str,
    value: impl Into<FieldValue>,
    url: &str,
) -> Vec<Value> {
    let source_url = strip_80_flag_from_url(url);
    finalize_field_with_source(field_name, value.into(), &source_url)
        .into_iter()
        .map(ValueRecord::into_value)
        .collect()
}

/// Same as [`finalize_field_as_list_of_objects`] with an already stripped URL.
pub(crate) fn finalize_field_with_source(
    field_name: &str,
    value: FieldValue,
    source_url: &str,
) -> Vec<ValueRecord> {
    let wrap = |value: Value| match value {
        Value::Object(object) => ValueRecord::from_object(object).with_source_url(source_url),
        other => ValueRecord::new(field_name, other).with_source_url(source_url),
    };

    match value {
        FieldValue::Scalar(scalar) => vec![wrap(scalar)],
        FieldValue::Object(object) => vec![wrap(Value::Object(object))],
        FieldValue::Array(items) => items.into_iter().map(wrap).collect(),
    }
}
