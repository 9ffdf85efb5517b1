//! Duplicate removal for lists and record fields.

use serde_json::{Map, Value};
use std::collections::HashSet;

use crate::normalize::text::remove_extra_whitespace;

/// Remove duplicates from a list by string representation.
///
/// Elements are keyed by how they print (`1` and `"1"` collide, every object
/// prints the same), and elements that print as nothing (`""`, `null`, `[]`)
/// are dropped. First occurrences keep their order. Returns `None` for
/// missing input.
pub fn eliminate_duplicates(items: Option<&[Value]>) -> Option<Vec<Value>> {
    let items = items?;
    let mut seen = HashSet::new();
    Some(
        items
            .iter()
            .filter(|item| {
                let key = display_string(item);
                !key.is_empty() && seen.insert(key)
            })
            .cloned()
            .collect(),
    )
}

/// Remove duplicate entries from every list field of a record.
///
/// Entries are compared with [`loose_eq`]. Only the record's own list fields
/// are touched; lists nested deeper are compared but not de-duplicated.
/// Returns `None` unless `data` is an object.
pub fn remove_all_duplicates(data: &Value) -> Option<Value> {
    remove_all_duplicates_with(data, loose_eq)
}

/// [`remove_all_duplicates`] with a caller-supplied equality.
pub fn remove_all_duplicates_with<F>(data: &Value, eq: F) -> Option<Value>
where
    F: Fn(&Value, &Value) -> bool,
{
    let record = data.as_object()?;
    Some(Value::Object(dedupe_fields(record, &eq)))
}

pub(crate) fn dedupe_fields<F>(record: &Map<String, Value>, eq: &F) -> Map<String, Value>
where
    F: Fn(&Value, &Value) -> bool,
{
    record
        .iter()
        .map(|(key, value)| {
            let value = match value {
                Value::Array(items) => Value::Array(unique_with(items, eq)),
                other => other.clone(),
            };
            (key.clone(), value)
        })
        .collect()
}

fn unique_with<F>(items: &[Value], eq: &F) -> Vec<Value>
where
    F: Fn(&Value, &Value) -> bool,
{
    let mut out: Vec<Value> = Vec::with_capacity(items.len());
    for item in items {
        if !out.iter().any(|kept| eq(kept, item)) {
            out.push(item.clone());
        }
    }
    out
}

/// Deep equality where strings compare case-insensitively with whitespace
/// runs collapsed. Numbers compare by value; types never coerce (`"2" != 2`).
pub fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::String(x), Value::String(y)) => {
            remove_extra_whitespace(x).to_lowercase() == remove_extra_whitespace(y).to_lowercase()
        }
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| loose_eq(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(key, x)| ys.get(key).is_some_and(|y| loose_eq(x, y)))
        }
        _ => a == b,
    }
}

/// How a value prints when used as a lookup key.
fn display_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(display_string).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn elim(value: Value) -> Vec<Value> {
        eliminate_duplicates(value.as_array().map(Vec::as_slice)).unwrap()
    }

    #[test]
    fn test_eliminate_duplicates() {
        assert_eq!(elim(json!(["a", "b", "a", "c", "b"])), vec![json!("a"), json!("b"), json!("c")]);
        assert_eq!(elim(json!([1, "1", 2.0, 2])), vec![json!(1), json!(2.0)]);
        assert_eq!(elim(json!(["", "x", null, [], 0, false])), vec![json!("x"), json!(0), json!(false)]);
    }

    #[test]
    fn test_eliminate_duplicates_objects_collapse() {
        assert_eq!(elim(json!([{"a": 1}, {"b": 2}])), vec![json!({"a": 1})]);
    }

    #[test]
    fn test_eliminate_duplicates_empty_and_missing() {
        assert_eq!(eliminate_duplicates(Some(&[][..])), Some(vec![]));
        assert_eq!(eliminate_duplicates(None), None);
    }

    #[test]
    fn test_remove_all_duplicates_typed() {
        let data = json!({"lst": ["1", "2", "2", 2, 1, "3"], "name": "x"});
        assert_eq!(
            remove_all_duplicates(&data).unwrap(),
            json!({"lst": ["1", "2", 2, 1, "3"], "name": "x"})
        );
    }

    #[test]
    fn test_remove_all_duplicates_loose_strings() {
        let data = json!({
            "people": [
                {"name": "John  Smith", "role": "Agent"},
                {"name": "john smith", "role": "AGENT "},
                {"name": "Jane", "role": "Agent"}
            ]
        });
        assert_eq!(
            remove_all_duplicates(&data).unwrap(),
            json!({
                "people": [
                    {"name": "John  Smith", "role": "Agent"},
                    {"name": "Jane", "role": "Agent"}
                ]
            })
        );
    }

    #[test]
    fn test_remove_all_duplicates_deep_compare() {
        let data = json!({"a": [{"b": [1, {"c": "X"}]}, {"b": [1, {"c": "x"}]}, {"b": [2]}]});
        assert_eq!(
            remove_all_duplicates(&data).unwrap(),
            json!({"a": [{"b": [1, {"c": "X"}]}, {"b": [2]}]})
        );
    }

    #[test]
    fn test_remove_all_duplicates_is_not_recursive() {
        let data = json!({"a": [{"test": [1, 1, 1]}]});
        assert_eq!(remove_all_duplicates(&data).unwrap(), data);
    }

    #[test]
    fn test_remove_all_duplicates_rejects_non_objects() {
        assert_eq!(remove_all_duplicates(&json!([1, 1])), None);
        assert_eq!(remove_all_duplicates(&json!("x")), None);
        assert_eq!(remove_all_duplicates(&Value::Null), None);
    }

    #[test]
    fn test_remove_all_duplicates_custom_comparator() {
        let data = json!({"n": [1, 2, 3, 4]});
        let same_parity = |a: &Value, b: &Value| a.as_i64().map(|x| x % 2) == b.as_i64().map(|x| x % 2);
        assert_eq!(
            remove_all_duplicates_with(&data, same_parity).unwrap(),
            json!({"n": [1, 2]})
        );
    }

    proptest! {
        #[test]
        fn prop_no_two_elements_print_alike(items in prop::collection::vec("[a-c]{0,2}", 0..20)) {
            let values: Vec<Value> = items.iter().cloned().map(Value::String).collect();
            let out = eliminate_duplicates(Some(values.as_slice())).unwrap();

            let keys: Vec<String> = out.iter().map(display_string).collect();
            let unique: HashSet<&String> = keys.iter().collect();
            prop_assert_eq!(unique.len(), keys.len());

            let mut expected: Vec<&String> = Vec::new();
            for item in items.iter().filter(|s| !s.is_empty()) {
                if !expected.contains(&item) {
                    expected.push(item);
                }
            }
            prop_assert_eq!(keys.iter().collect::<Vec<_>>(), expected);
        }
    }
}
