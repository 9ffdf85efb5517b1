//! Hostname and root domain parsing.

/// Host part of a URL, without scheme, port, path or query.
pub fn extract_hostname(url: &str) -> &str {
    let host = match url.find("://") {
        Some(_) => url.split('/').nth(2).unwrap_or_default(),
        None => url.split('/').next().unwrap_or_default(),
    };
    let host = host.split(':').next().unwrap_or_default();
    host.split('?').next().unwrap_or_default()
}

/// Registrable domain of a URL (`www.80legs.co.uk` → `80legs.co.uk`).
///
/// Keeps the last two labels, or three when the last two are both two
/// characters long, which covers country-code second-level domains.
pub fn extract_root_domain(url: &str) -> String {
    let hostname = extract_hostname(url);
    let labels: Vec<&str> = hostname.split('.').collect();
    let n = labels.len();
    if n <= 2 {
        return hostname.to_string();
    }

    let keep = if labels[n - 2].len() == 2 && labels[n - 1].len() == 2 {
        3
    } else {
        2
    };
    labels[n - keep..].join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_hostname() {
        assert_eq!(extract_hostname("http://www.80legs.com/plans.html"), "www.80legs.com");
        assert_eq!(extract_hostname("https://80legs.com:8080/x"), "80legs.com");
        assert_eq!(extract_hostname("www.80legs.com/plans.html"), "www.80legs.com");
        assert_eq!(extract_hostname("www.80legs.com?q=1"), "www.80legs.com");
        assert_eq!(extract_hostname(""), "");
    }

    #[test]
    fn test_extract_root_domain() {
        assert_eq!(extract_root_domain("http://www.80legs.com/plans.html"), "80legs.com");
        assert_eq!(extract_root_domain("http://www.80legs.co.uk/"), "80legs.co.uk");
        assert_eq!(extract_root_domain("https://shop.news.bbc.com"), "bbc.com");
        assert_eq!(extract_root_domain("80legs.com"), "80legs.com");
        assert_eq!(extract_root_domain("localhost"), "localhost");
    }
}
