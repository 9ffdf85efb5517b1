//! The `80flag` query parameter.
//!
//! Apps pass state between requests by appending an encoded value to the
//! links they return; the crawler hands it back on the next page's URL.
//! The flag must never leak into a record's source URLs.

/// Reserved query parameter carrying app state between requests.
pub const FLAG_PARAMETER: &str = "80flag";

/// Percent-encode a query component, leaving `A-Za-z0-9 - _ . ! ~ * ' ( )`.
pub fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut buf = [0u8; 4];
    for c in value.chars() {
        if matches!(c, '!' | '*' | '\'' | '(' | ')') {
            out.push(c);
        } else {
            out.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        }
    }
    out
}

/// Decode a percent-encoded query component.
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
pub fn decode_component(value: &str) -> String {
    String::from_utf8_lossy(&urlencoding::decode_binary(value.as_bytes())).into_owned()
}

/// Append `value` to `link` as the flag parameter.
///
/// Returns whichever argument is present when the other is missing or empty.
pub fn append_80_flag_to_link(value: Option<&str>, link: Option<&str>) -> Option<String> {
    let value = value.filter(|v| !v.is_empty());
    let link = link.filter(|l| !l.is_empty());

    let (value, link) = match (value, link) {
        (Some(value), Some(link)) => (value, link),
        (Some(value), None) => return Some(value.to_string()),
        (None, Some(link)) => return Some(link.to_string()),
        (None, None) => return None,
    };

    let encoded = encode_component(value);
    let separator = if link.ends_with('?') || link.ends_with('&') {
        ""
    } else if link.contains('?') {
        "&"
    } else {
        "?"
    };
    Some(format!("{link}{separator}{FLAG_PARAMETER}={encoded}"))
}

/// Read the decoded flag value back out of a link.
///
/// Returns `None` when the link has no `80flag=`; an empty value is `Some("")`.
pub fn get_80_value(link: &str) -> Option<String> {
    let key = format!("{FLAG_PARAMETER}=");
    let start = link.find(&key)? + key.len();
    let rest = &link[start..];
    let raw = rest.split('&').next().unwrap_or_default();
    Some(decode_component(raw))
}

/// Remove every `param=...` entry from the query string of `url`.
///
/// Entries are split on `&` or `;` and rejoined with `&`. When nothing is
/// left the `?` goes too. URLs without a query string are returned unchanged.
pub fn remove_url_parameter(url: &str, param: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };

    let prefix = format!("{}=", encode_component(param));
    let kept: Vec<&str> = query
        .split(['&', ';'])
        .filter(|entry| !entry.starts_with(&prefix))
        .collect();

    if kept.is_empty() {
        base.to_string()
    } else {
        format!("{base}?{}", kept.join("&"))
    }
}

/// Remove the flag parameter from a URL.
pub fn strip_80_flag_from_url(url: &str) -> String {
    remove_url_parameter(url, FLAG_PARAMETER)
}
