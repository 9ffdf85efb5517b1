//! A fetched page as handed to an app by the crawl harness.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One crawled page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// URL the page was fetched from, including any `80flag` parameter
    pub url: String,

    /// Raw HTML or XML body
    pub html: String,

    /// Response headers
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// HTTP status code
    pub status: u16,
}

impl Page {
    /// A page fetched with status 200 and no headers.
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            html: html.into(),
            headers: HashMap::new(),
            status: 200,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Look up a header, ignoring case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_builder() {
        let page = Page::new("http://a.com", "<html></html>")
            .with_header("Content-Type", "text/html")
            .with_status(404);

        assert_eq!(page.status, 404);
        assert_eq!(page.header("content-type"), Some("text/html"));
        assert_eq!(page.header("etag"), None);
    }
}
