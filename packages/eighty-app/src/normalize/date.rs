//! Timestamp rounding and formatting.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Timestamp layout written into records.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Round to the nearest minute; thirty seconds rounds up.
pub fn nearest_minute(time: DateTime<Utc>) -> DateTime<Utc> {
    let millis = time.timestamp_millis();
    let rounded = (millis + 30_000).div_euclid(60_000) * 60_000;
    Utc.timestamp_millis_opt(rounded).single().unwrap_or(time)
}

/// Format as `yyyy-MM-ddTHH:mm:ssZ` in UTC.
pub fn format_date<Tz: TimeZone>(time: &DateTime<Tz>) -> String {
    time.with_timezone(&Utc).format(DATE_FORMAT).to_string()
}

/// Parse a date string and re-format it as [`DATE_FORMAT`].
///
/// Accepts RFC 3339 and `yyyy-MM-dd` optionally followed by ` HH:mm[:ss]`
/// (read as UTC). Returns `None` when nothing parses.
pub fn format_date_str(text: &str) -> Option<String> {
    let text = text.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(format_date(&parsed));
    }
    for layout in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, layout) {
            return Some(format_date(&parsed.and_utc()));
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| format_date(&dt.and_utc()))
}

/// Unix seconds for `amount` units before midnight (UTC) of `today`.
///
/// Units are `day`, `week`, `month` (30 days) and `year` (365 days), singular
/// or plural. Used for "posted 3 weeks ago" style dates.
pub fn relative_unix_time(today: NaiveDate, amount: i64, unit: &str) -> Option<i64> {
    let days_per_unit = match unit.trim().to_lowercase().as_str() {
        "day" | "days" => 1,
        "week" | "weeks" => 7,
        "month" | "months" => 30,
        "year" | "years" => 365,
        _ => return None,
    };
    let midnight = today.and_hms_opt(0, 0, 0)?.and_utc();
    let offset = Duration::try_days(amount.checked_mul(days_per_unit)?)?;
    Some((midnight - offset).timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(text: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(text).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_nearest_minute() {
        assert_eq!(nearest_minute(at("2017-08-07T23:27:29.999Z")), at("2017-08-07T23:27:00Z"));
        assert_eq!(nearest_minute(at("2017-08-07T23:27:30Z")), at("2017-08-07T23:28:00Z"));
        assert_eq!(nearest_minute(at("2017-08-07T23:59:45Z")), at("2017-08-08T00:00:00Z"));
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&at("2017-08-07T23:27:00Z")), "2017-08-07T23:27:00Z");
        assert_eq!(format_date(&at("2017-08-07T18:27:00-05:00")), "2017-08-07T23:27:00Z");
    }

    #[test]
    fn test_format_date_str() {
        assert_eq!(format_date_str("2017-08-07").as_deref(), Some("2017-08-07T00:00:00Z"));
        assert_eq!(
            format_date_str("2017-08-07 10:30").as_deref(),
            Some("2017-08-07T10:30:00Z")
        );
        assert_eq!(
            format_date_str("2017-08-07T10:30:00+02:00").as_deref(),
            Some("2017-08-07T08:30:00Z")
        );
        assert_eq!(format_date_str("yesterday"), None);
    }

    #[test]
    fn test_relative_unix_time() {
        let today = NaiveDate::from_ymd_opt(2020, 1, 15).unwrap();
        let midnight = 1_579_046_400;
        assert_eq!(relative_unix_time(today, 0, "days"), Some(midnight));
        assert_eq!(relative_unix_time(today, 2, "day"), Some(midnight - 2 * 86_400));
        assert_eq!(relative_unix_time(today, 1, "weeks"), Some(midnight - 7 * 86_400));
        assert_eq!(relative_unix_time(today, 1, "month"), Some(midnight - 30 * 86_400));
        assert_eq!(relative_unix_time(today, 1, "Years"), Some(midnight - 365 * 86_400));
        assert_eq!(relative_unix_time(today, 1, "fortnight"), None);
    }
}
