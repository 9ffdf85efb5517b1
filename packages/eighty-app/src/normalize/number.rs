//! Proximity-based number extraction.
//!
//! Finds the numeric expression closest to a pattern in free text, e.g. the
//! `5` in "I have 5 dogs" when searching for `dogs`. A numeric expression is
//! an integer, decimal or range such as `4`, `4.5`, `-32` or `0.9-1.2`.
//! Thousands separators are dropped before matching.

use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

use crate::error::{NormalizeError, Result};

/// Integer, decimal, signed or range expression.
const NUMBER_EXPRESSION: &str = r"[0-9]*\.??[0-9]*-??[0-9]*\.??[0-9]+";

/// A comma between two digits.
static RE_THOUSANDS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([0-9]),([0-9])").unwrap());

/// Return the numeric expression closest to the first match of `pattern`.
///
/// Looks for a number immediately before the match (with only non-digits in
/// between) and one immediately after it. When both exist, the one with fewer
/// characters between it and the match wins; a tie goes to the preceding
/// number. Returns an empty string when `text` is empty or no number is
/// adjacent to the pattern.
pub fn get_number_value(text: &str, pattern: &Regex) -> String {
    if text.is_empty() {
        return String::new();
    }

    let composite = match build_composite(pattern.as_str()) {
        Ok(re) => re,
        Err(e) => {
            warn!(pattern = %pattern.as_str(), error = %e, "Cannot wrap pattern for number extraction");
            return String::new();
        }
    };

    let text = RE_THOUSANDS.replace_all(text, "${1}${2}");
    let Some(caps) = composite.captures(&text) else {
        return String::new();
    };
    let Some(target) = caps.name("num_target") else {
        return String::new();
    };

    match (caps.name("num_before"), caps.name("num_after")) {
        (Some(before), Some(after)) => {
            let before_distance = text[before.end()..target.start()].chars().count();
            let after_distance = text[target.end()..after.start()].chars().count();
            if before_distance <= after_distance {
                before.as_str().to_string()
            } else {
                after.as_str().to_string()
            }
        }
        (Some(before), None) => before.as_str().to_string(),
        (None, Some(after)) => after.as_str().to_string(),
        (None, None) => String::new(),
    }
}

/// Like [`get_number_value`], compiling `pattern` first.
///
/// A pattern that is not a valid regular expression is an argument error,
/// not a soft failure.
pub fn get_number_value_str(text: &str, pattern: &str) -> Result<String> {
    let re = Regex::new(pattern).map_err(|source| NormalizeError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;
    Ok(get_number_value(text, &re))
}

fn build_composite(pattern: &str) -> std::result::Result<Regex, regex::Error> {
    Regex::new(&format!(
        "(?P<num_before>{NUMBER_EXPRESSION})?[^0-9]*?(?P<num_target>{pattern})[^0-9]*(?P<num_after>{NUMBER_EXPRESSION})?"
    ))
}
