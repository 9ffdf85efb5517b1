//! String normalization: whitespace, plain text, diacritics and case.
//!
//! Every function here accepts any text and returns an owned `String`; empty
//! input simply produces empty output.

use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Characters outside `[a-zA-Z0-9]`, whitespace and `. ' - : !`.
static RE_DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s.'\-:!]").unwrap());

/// A token delimited by whitespace, `:` or `-`.
static RE_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([^\s:-])([^\s:-]*)").unwrap());

static RE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<.*?>").unwrap());

/// Diacritic transliterations, both cases.
#[rustfmt::skip]
const SPECIAL_CHARACTERS: &[(char, &str)] = &[
    ('Ä', "A"), ('ä', "a"), ('Ç', "C"), ('ç', "c"), ('Ğ', "G"), ('ğ', "g"),
    ('İ', "I"), ('ı', "i"), ('Ö', "O"), ('ö', "o"), ('Ş', "S"), ('ş', "s"),
    ('Ü', "U"), ('ü', "u"), ('ß', "ss"), ('à', "a"), ('á', "a"), ('â', "a"),
    ('ã', "a"), ('è', "e"), ('é', "e"), ('ê', "e"), ('ë', "e"), ('ě', "e"),
    ('œ', "oe"), ('ì', "i"), ('í', "i"), ('î', "i"), ('ï', "i"), ('ñ', "n"),
    ('ò', "o"), ('ó', "o"), ('ô', "o"), ('õ', "o"), ('ř', "r"), ('ù', "u"),
    ('ú', "u"), ('û', "u"), ('ý', "y"), ('ÿ', "y"), ('ž', "z"), ('À', "A"),
    ('Á', "A"), ('Â', "A"), ('Ã', "A"), ('È', "E"), ('É', "E"), ('Ê', "E"),
    ('Ë', "E"), ('Ì', "I"), ('Í', "I"), ('Î', "I"), ('Ï', "I"), ('Ñ', "N"),
    ('Ò', "O"), ('Ó', "O"), ('Ô', "O"), ('Õ', "O"), ('Ù', "U"), ('Ú', "U"),
    ('Û', "U"), ('Ý', "Y"), ('Ž', "Z"),
];

static SPECIAL_CHARACTER_MAP: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| SPECIAL_CHARACTERS.iter().copied().collect());

/// Accented Spanish letters that `encode_spanish` percent-encodes.
#[rustfmt::skip]
const SPANISH_CHARACTERS: &[char] = &[
    'á', 'é', 'í', 'ó', 'ú', 'ñ', 'ü', 'Á', 'É', 'Í', 'Ó', 'Ú', 'Ñ', 'Ü',
];

/// Collapse every whitespace run to a single space and trim both ends.
pub fn remove_extra_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip everything but letters, digits, whitespace and `. ' - : !`, then
/// normalize whitespace.
pub fn get_plain_text(text: &str) -> String {
    remove_extra_whitespace(&RE_DISALLOWED.replace_all(text, ""))
}

/// Transliterate Latin diacritics to ASCII (`ä` → `a`, `ß` → `ss`).
pub fn replace_special_characters(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match SPECIAL_CHARACTER_MAP.get(&c) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
    }
    out
}

/// Title-case each token delimited by whitespace, `:` or `-`.
pub fn get_proper_case(text: &str) -> String {
    RE_TOKEN
        .replace_all(text, |caps: &regex::Captures<'_>| {
            format!("{}{}", caps[1].to_uppercase(), caps[2].to_lowercase())
        })
        .into_owned()
}

/// Apply [`remove_extra_whitespace`] to every string nested anywhere inside `value`.
pub fn trim_object(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(remove_extra_whitespace(&s)),
        Value::Array(items) => Value::Array(items.into_iter().map(trim_object).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key, trim_object(value)))
                .collect(),
        ),
        other => other,
    }
}

/// Normalize whitespace in every element of a list of strings.
///
/// Returns `None` unless `value` is a non-empty array holding only strings.
/// Elements that normalize to nothing are kept as written.
pub fn trim_all(value: &Value) -> Option<Vec<String>> {
    let items = value.as_array().filter(|items| !items.is_empty())?;
    items
        .iter()
        .map(|item| {
            let s = item.as_str()?;
            let trimmed = remove_extra_whitespace(s);
            Some(if trimmed.is_empty() { s.to_string() } else { trimmed })
        })
        .collect()
}

/// Remove every markup tag.
pub fn remove_tag(text: &str) -> String {
    RE_TAG.replace_all(text, "").into_owned()
}

/// First capture group of the first match, trimmed.
pub fn get_first_match(text: &str, pattern: &Regex) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Replace each match of `pattern` with the character whose hex code point is
/// in capture group 1 (for example `\\u([0-9a-fA-F]{4})`).
pub fn decode_unicode(pattern: &Regex, text: &str) -> String {
    pattern
        .replace_all(text, |caps: &regex::Captures<'_>| {
            caps.get(1)
                .and_then(|hex| u32::from_str_radix(hex.as_str(), 16).ok())
                .and_then(char::from_u32)
                .map(String::from)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Percent-encode accented Spanish letters, leaving everything else alone.
pub fn encode_spanish(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut buf = [0u8; 4];
    for c in text.chars() {
        if SPANISH_CHARACTERS.contains(&c) {
            out.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_remove_extra_whitespace() {
        assert_eq!(remove_extra_whitespace("  a   b\t\tc \n"), "a b c");
        assert_eq!(remove_extra_whitespace("a\tb\rc\nd\x0be\x0cf"), "a b c d e f");
        assert_eq!(remove_extra_whitespace(""), "");
        assert_eq!(remove_extra_whitespace(" \n\t "), "");
    }

    #[test]
    fn test_get_plain_text() {
        assert_eq!(get_plain_text("Hello, <b>World</b>!"), "Hello bWorldb!");
        assert_eq!(get_plain_text("it's 5:30 - done."), "it's 5:30 - done.");
        assert_eq!(get_plain_text("a @#$%  b"), "a b");
        assert_eq!(get_plain_text(""), "");
    }

    #[test]
    fn test_replace_special_characters() {
        assert_eq!(replace_special_characters("Straße"), "Strasse");
        assert_eq!(replace_special_characters("Ça va, señor?"), "Ca va, senor?");
        assert_eq!(replace_special_characters("cœur Žižek"), "coeur Zizek");
        assert_eq!(replace_special_characters(" plain\ttext "), " plain\ttext ");
    }

    #[test]
    fn test_get_proper_case() {
        assert_eq!(get_proper_case("hELLO wORLD"), "Hello World");
        assert_eq!(get_proper_case("cuidado íntimo"), "Cuidado Íntimo");
        assert_eq!(get_proper_case("one-two:three  four"), "One-Two:Three  Four");
        assert_eq!(get_proper_case(""), "");
    }

    #[test]
    fn test_trim_object_is_recursive() {
        let value = json!({
            "a": " x ",
            "b": [" y", {"c": "z "}],
            "d": 5,
            "e": null
        });
        assert_eq!(
            trim_object(value),
            json!({"a": "x", "b": ["y", {"c": "z"}], "d": 5, "e": null})
        );
        assert_eq!(trim_object(json!("  top  ")), json!("top"));
    }

    #[test]
    fn test_trim_object_collapses_interior_runs() {
        let value = json!({"a": " a   b ", "list": [{"name": "Big\t\n  Store"}]});
        assert_eq!(
            trim_object(value),
            json!({"a": "a b", "list": [{"name": "Big Store"}]})
        );
    }

    #[test]
    fn test_trim_all() {
        assert_eq!(
            trim_all(&json!(["  a  b ", "c", "   "])),
            Some(vec!["a b".to_string(), "c".to_string(), "   ".to_string()])
        );
        assert_eq!(trim_all(&json!([])), None);
        assert_eq!(trim_all(&json!(["a", 1])), None);
        assert_eq!(trim_all(&json!("a")), None);
        assert_eq!(trim_all(&Value::Null), None);
    }

    #[test]
    fn test_remove_tag() {
        assert_eq!(remove_tag("<p>Hello <b>there</b></p>"), "Hello there");
        assert_eq!(remove_tag("no tags"), "no tags");
    }

    #[test]
    fn test_get_first_match() {
        let re = Regex::new(r"Price:\s*(\S+ )").unwrap();
        assert_eq!(get_first_match("Price: $5.00 each", &re), Some("$5.00".to_string()));
        assert_eq!(get_first_match("nothing here", &re), None);

        let no_group = Regex::new("Price").unwrap();
        assert_eq!(get_first_match("Price", &no_group), None);
    }

    #[test]
    fn test_decode_unicode() {
        let re = Regex::new(r"\\u([0-9a-fA-F]{4})").unwrap();
        assert_eq!(decode_unicode(&re, r"caf\u00e9 \u0041"), "café A");
        assert_eq!(decode_unicode(&re, r"bad \ud800"), r"bad \ud800");
    }

    #[test]
    fn test_encode_spanish() {
        assert_eq!(encode_spanish("á"), "%C3%A1");
        assert_eq!(encode_spanish("Ñandú"), "%C3%91and%C3%BA");
        assert_eq!(encode_spanish("plain text"), "plain text");
    }
}
