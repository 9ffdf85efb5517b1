//! Truthiness checks for extracted values.
//!
//! An extracted value is worth keeping when it carries information: a string
//! with a non-whitespace character, a non-empty list or object, a
//! non-negative number, `true`, or a parseable date.

use chrono::{DateTime, NaiveDate, TimeZone};
use serde_json::{Map, Value};

/// Types whose extracted values can be judged worth keeping.
pub trait Validate {
    fn is_valid(&self) -> bool;
}

/// Whether an extracted value is worth keeping.
pub fn is_valid<T: Validate + ?Sized>(value: &T) -> bool {
    value.is_valid()
}

impl Validate for str {
    fn is_valid(&self) -> bool {
        self.chars().any(|c| !c.is_whitespace())
    }
}

impl Validate for String {
    fn is_valid(&self) -> bool {
        self.as_str().is_valid()
    }
}

impl Validate for bool {
    fn is_valid(&self) -> bool {
        *self
    }
}

impl Validate for f64 {
    fn is_valid(&self) -> bool {
        // -0.0 counts as zero, which is kept
        !self.is_nan() && *self >= 0.0
    }
}

impl Validate for i64 {
    fn is_valid(&self) -> bool {
        *self >= 0
    }
}

impl Validate for u64 {
    fn is_valid(&self) -> bool {
        true
    }
}

impl<T: Validate> Validate for [T] {
    fn is_valid(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn is_valid(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Validate> Validate for Option<T> {
    fn is_valid(&self) -> bool {
        self.as_ref().is_some_and(Validate::is_valid)
    }
}

impl<Tz: TimeZone> Validate for DateTime<Tz> {
    fn is_valid(&self) -> bool {
        true
    }
}

impl Validate for NaiveDate {
    fn is_valid(&self) -> bool {
        true
    }
}

impl Validate for Map<String, Value> {
    fn is_valid(&self) -> bool {
        !self.is_empty()
    }
}

impl Validate for Value {
    fn is_valid(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => match (n.as_u64(), n.as_i64(), n.as_f64()) {
                (Some(_), _, _) => true,
                (None, Some(i), _) => i.is_valid(),
                (None, None, Some(f)) => f.is_valid(),
                _ => false,
            },
            Value::String(s) => s.is_valid(),
            Value::Array(items) => !items.is_empty(),
            Value::Object(map) => map.is_valid(),
        }
    }
}
