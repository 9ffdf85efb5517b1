//! Opening hours, weekdays and payment types.
//!
//! Day and hour parsing are driven by ordered rule tables: the first rule
//! whose pattern matches decides the output.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Output for hour strings no rule understands.
pub const MANUAL_CHECK: &str = "manual check required";

/// Weekday abbreviations (and their full names) mapped to the full name.
const DAY_RULES: &[(&str, &str)] = &[
    (r"(?i)\bmon(?:day)?\b", "Monday"),
    (r"(?i)\btue(?:s|sday)?\b", "Tuesday"),
    (r"(?i)\bwed(?:nesday)?\b", "Wednesday"),
    (r"(?i)\bthu(?:r|rs|rsday)?\b", "Thursday"),
    (r"(?i)\bfri(?:day)?\b", "Friday"),
    (r"(?i)\bsat(?:urday)?\b", "Saturday"),
    (r"(?i)\bsun(?:day)?\b", "Sunday"),
];

#[derive(Debug, Clone, Copy)]
enum HourAction {
    /// Rewrite `H[:MM] am - H[:MM] pm` with minutes filled in
    NormalizeRange,
    /// Replace the whole value
    Fixed(&'static str),
}

const HOUR_RULES: &[(&str, HourAction)] = &[
    (
        r"(?i)(\d{1,2})(:\d{2})* *([ap]m) *(?:to|-|through) *(\d{1,2})(:\d{2})* *([ap]m)",
        HourAction::NormalizeRange,
    ),
    (r"(?i)24 hour", HourAction::Fixed("12:00 am - 11:59 pm")),
];

const PAYMENT_TYPES: &[&str] = &[
    "Amex",
    "American Express",
    "Visa",
    "Mastercard",
    "master card",
    "Diners Club",
    "PayPal",
    "Bitcoin",
    "Cash",
    "Check",
    "Debit",
    "Debit Card",
    "ACH",
    "JBC",
    "Access",
    "Discover",
    "Carte Blanch",
    "Novus",
    "Gift Card",
    "egift",
    "layaway",
    "euromastercard",
    "ATM",
];

static DAY_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    DAY_RULES
        .iter()
        .map(|(pattern, day)| (Regex::new(pattern).unwrap(), *day))
        .collect()
});

static HOUR_PATTERNS: LazyLock<Vec<(Regex, HourAction)>> = LazyLock::new(|| {
    HOUR_RULES
        .iter()
        .map(|(pattern, action)| (Regex::new(pattern).unwrap(), *action))
        .collect()
});

/// Convert `HH[:mm]` on a 24-hour clock to a 12-hour clock.
///
/// `0:00` and `24:00` are `12:00 AM`, `16:20` is `4:20 PM`, `8` is `8 AM`.
/// Hours below twelve keep their digits as written (`08:00` → `08:00 AM`).
/// Returns an empty string when the hour is missing or outside 0 to 24.
pub fn convert_24_hour_time(time: &str) -> String {
    let mut parts = time.split(':');
    let hour_digits: String = parts
        .next()
        .unwrap_or_default()
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    let minute_digits: String = parts
        .next()
        .unwrap_or_default()
        .chars()
        .filter(char::is_ascii_digit)
        .collect();

    let Ok(hours) = hour_digits.parse::<u32>() else {
        return String::new();
    };
    if hours > 24 {
        return String::new();
    }

    let minutes = if minute_digits.is_empty() {
        String::new()
    } else {
        format!(":{minute_digits}")
    };

    let (hour_text, meridiem) = match hours {
        0 | 24 => ("12".to_string(), "AM"),
        12..=23 => {
            let h = hours % 12;
            (if h == 0 { "12".to_string() } else { h.to_string() }, "PM")
        }
        _ => (hour_digits, "AM"),
    };

    format!("{hour_text}{minutes} {meridiem}")
}

/// Expand weekday abbreviations to full names (`Mon - Thu` → `Monday - Thursday`).
pub fn process_day(text: &str) -> String {
    DAY_PATTERNS
        .iter()
        .fold(text.to_string(), |acc, (pattern, day)| {
            pattern.replace_all(&acc, *day).into_owned()
        })
}

/// Normalize an opening-hours range to `h:mm am - h:mm pm`.
///
/// Returns [`MANUAL_CHECK`] when no rule recognizes the value and an empty
/// string for empty input.
pub fn process_hour(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    for (pattern, action) in HOUR_PATTERNS.iter() {
        if !pattern.is_match(text) {
            continue;
        }
        return match action {
            HourAction::NormalizeRange => pattern
                .replace(text, |caps: &Captures<'_>| {
                    let minutes = |i: usize| caps.get(i).map_or(":00", |m| m.as_str());
                    format!(
                        "{}{} {} - {}{} {}",
                        &caps[1],
                        minutes(2),
                        &caps[3],
                        &caps[4],
                        minutes(5),
                        &caps[6]
                    )
                })
                .to_lowercase(),
            HourAction::Fixed(value) => value.to_string(),
        };
    }

    MANUAL_CHECK.to_string()
}

/// Whether `payment` names an accepted payment type.
///
/// The value is read as a case-insensitive pattern and tested against each
/// accepted name, so `master card` and `visa` both pass. An empty value
/// matches every name. A value that is not a valid pattern is matched
/// literally.
pub fn process_payment_types(payment: &str) -> bool {
    let pattern = Regex::new(&format!("(?i){payment}"))
        .or_else(|_| Regex::new(&format!("(?i){}", regex::escape(payment))));

    match pattern {
        Ok(re) => PAYMENT_TYPES.iter().any(|name| re.is_match(name)),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_24_hour_time_boundaries() {
        assert_eq!(convert_24_hour_time("0:00"), "12:00 AM");
        assert_eq!(convert_24_hour_time("24:00"), "12:00 AM");
        assert_eq!(convert_24_hour_time("12:00"), "12:00 PM");
        assert_eq!(convert_24_hour_time("16:20"), "4:20 PM");
    }

    #[test]
    fn test_convert_24_hour_time_partial() {
        assert_eq!(convert_24_hour_time("8"), "8 AM");
        assert_eq!(convert_24_hour_time("17"), "5 PM");
        assert_eq!(convert_24_hour_time("08:15"), "08:15 AM");
    }

    #[test]
    fn test_convert_24_hour_time_invalid() {
        assert_eq!(convert_24_hour_time(""), "");
        assert_eq!(convert_24_hour_time("This is not a valid time"), "");
        assert_eq!(convert_24_hour_time("36:00"), "");
    }

    #[test]
    fn test_process_day() {
        assert_eq!(process_day("Mon - Thu"), "Monday - Thursday");
        assert_eq!(process_day("tues, SAT"), "Tuesday, Saturday");
        assert_eq!(process_day("Monday"), "Monday");
        assert_eq!(process_day("Other"), "Other");
    }

    #[test]
    fn test_process_hour_ranges() {
        assert_eq!(process_hour("08:00am - 09:00pm"), "08:00 am - 09:00 pm");
        assert_eq!(process_hour("8:00 am - 9:00 pm"), "8:00 am - 9:00 pm");
        assert_eq!(process_hour("9 AM to 5 PM"), "9:00 am - 5:00 pm");
        assert_eq!(process_hour("Open 8:30am through 4pm daily"), "open 8:30 am - 4:00 pm daily");
    }

    #[test]
    fn test_process_hour_fixed_and_unknown() {
        assert_eq!(process_hour("Open 24 Hours"), "12:00 am - 11:59 pm");
        assert_eq!(process_hour("44:00 am - 19:00"), MANUAL_CHECK);
        assert_eq!(process_hour("by appointment"), MANUAL_CHECK);
        assert_eq!(process_hour(""), "");
    }

    #[test]
    fn test_process_payment_types() {
        assert!(process_payment_types("Visa"));
        assert!(process_payment_types("master card"));
        assert!(process_payment_types("AMEX"));
        assert!(process_payment_types("Debit"));
        assert!(!process_payment_types("Other"));
        assert!(!process_payment_types("(unclosed"));
    }

    #[test]
    fn test_process_payment_types_empty_matches_any() {
        assert!(process_payment_types(""));
    }
}
