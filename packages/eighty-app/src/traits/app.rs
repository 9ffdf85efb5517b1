//! The per-site app interface.

use serde_json::Value;

use crate::types::page::Page;

/// Site-specific extraction logic run by the crawl harness on every page.
///
/// Implementors bring their own DOM/XML query library; markup can be run
/// through [`prepare_markup`](crate::pipeline::prepare_markup) before parsing.
pub trait EightyApp: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Extract one record, a list of records, or `{}` when the page has
    /// nothing of interest.
    fn process_document(&self, page: &Page) -> Result<Value, Self::Error>;

    /// Links the crawler should follow from this page.
    fn parse_links(&self, page: &Page) -> Result<Vec<String>, Self::Error>;
}
