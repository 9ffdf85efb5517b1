//! Resolving hrefs found on a page into absolute links.

/// Resolve `href` against the site it was found on.
///
/// `domain` may be a bare host (`www.80legs.com`) or a full URL; only its
/// scheme and host are used, with `http` assumed when no scheme is given.
/// Absolute hrefs are returned unchanged and protocol-relative ones
/// (`//cdn.host/x.js`) always get `http:`. An href that already names the
/// site's host (`80legs.com/plans.html`) gets the scheme prepended; any
/// other href is joined to the host with exactly one `/` between them.
///
/// Resolve links before appending the `80flag` parameter: the host
/// comparison looks at the whole href string.
pub fn make_link(domain: Option<&str>, href: Option<&str>) -> Option<String> {
    let domain = domain.filter(|d| !d.is_empty());
    let href = href.filter(|h| !h.is_empty());

    let (domain, href) = match (domain, href) {
        (Some(domain), Some(href)) => (domain, href),
        (Some(domain), None) => return Some(domain.to_string()),
        (None, Some(href)) => return Some(href.to_string()),
        (None, None) => return None,
    };

    if href.contains("http://") || href.contains("https://") {
        return Some(href.to_string());
    }

    if href.starts_with("//") {
        return Some(format!("http:{href}"));
    }

    let (scheme, rest) = split_scheme(domain);
    let host = rest
        .find(['/', '?'])
        .map_or(rest, |idx| &rest[..idx]);
    let origin = format!("{scheme}://{host}");

    let bare_host = host.strip_prefix("www.").unwrap_or(host);
    if !bare_host.is_empty() && href.contains(bare_host) {
        return Some(match href.strip_prefix('/') {
            Some(path) => format!("{scheme}://{path}"),
            None => format!("{scheme}://{href}"),
        });
    }

    Some(if href.starts_with('/') {
        format!("{origin}{href}")
    } else {
        format!("{origin}/{href}")
    })
}

/// Split `https://host/...` into (`https`, `host/...`), defaulting to `http`.
fn split_scheme(url: &str) -> (&'static str, &str) {
    if let Some(idx) = url.find("https://") {
        ("https", &url[idx + "https://".len()..])
    } else if let Some(idx) = url.find("http://") {
        ("http", &url[idx + "http://".len()..])
    } else {
        ("http", url)
    }
}
