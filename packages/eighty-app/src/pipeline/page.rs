//! Per-page processing: app output in, finalized records and links out.

use indexmap::IndexSet;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};
use crate::finalize::clock::{Clock, SystemClock};
use crate::finalize::record::RecordFinalizer;
use crate::traits::app::EightyApp;
use crate::types::page::Page;

/// What the harness collects for one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageOutput {
    /// Finalized record, list of records, or `{}`
    pub records: Value,

    /// Links to follow, de-duplicated in first-seen order
    pub links: Vec<String>,
}

/// Runs an app over pages and finalizes the results.
#[derive(Debug, Clone, Default)]
pub struct PagePipeline<C = SystemClock> {
    finalizer: RecordFinalizer<C>,
}

impl PagePipeline<SystemClock> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> PagePipeline<C> {
    pub fn with_finalizer(finalizer: RecordFinalizer<C>) -> Self {
        Self { finalizer }
    }

    /// Process one page with `app`.
    pub fn run<A: EightyApp>(&self, app: &A, page: &Page) -> AppResult<PageOutput> {
        let raw = app.process_document(page).map_err(|e| {
            warn!(url = %page.url, error = %e, "App failed to process document");
            AppError::ProcessDocument {
                url: page.url.clone(),
                source: Box::new(e),
            }
        })?;
        let records = self.finalizer.finalize(&raw, &page.url);

        let links = app.parse_links(page).map_err(|e| {
            warn!(url = %page.url, error = %e, "App failed to parse links");
            AppError::ParseLinks {
                url: page.url.clone(),
                source: Box::new(e),
            }
        })?;
        let links: IndexSet<String> = links.into_iter().filter(|l| !l.is_empty()).collect();

        debug!(
            url = %page.url,
            status = page.status,
            content_type = page.header("content-type").unwrap_or_default(),
            links = links.len(),
            "Processed page"
        );
        Ok(PageOutput {
            records,
            links: links.into_iter().collect(),
        })
    }
}

/// Disable image loading in markup before it goes to a DOM parser.
pub fn prepare_markup(text: &str) -> String {
    text.replace("<img", "<img80")
}

/// Parse a JSON document, e.g. an API response or embedded JSON-LD.
pub fn parse_json(text: &str) -> AppResult<Value> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FixedClock, MockApp};
    use serde_json::json;

    fn pipeline() -> PagePipeline<FixedClock> {
        PagePipeline::with_finalizer(
            RecordFinalizer::new().with_clock(FixedClock::parse("2020-01-01T00:00:00Z")),
        )
    }

    #[test]
    fn test_run_finalizes_and_dedupes_links() {
        let app = MockApp::new()
            .with_record(json!({"dataType": "products", "name": "Shoe"}))
            .with_links(["http://a.com/1", "", "http://a.com/2", "http://a.com/1"]);
        let page = Page::new("http://a.com/?80flag=x", "<html></html>");

        let output = pipeline().run(&app, &page).unwrap();

        assert_eq!(output.records["dataType"], json!("product"));
        assert_eq!(output.records["sourceURLs"], json!(["http://a.com/"]));
        assert_eq!(output.links, vec!["http://a.com/1", "http://a.com/2"]);
        assert_eq!(app.calls(), vec!["process_document", "parse_links"]);
    }

    #[test]
    fn test_app_failure_is_reported() {
        let app = MockApp::new().failing("selector missing");
        let page = Page::new("http://a.com/", "");

        let err = pipeline().run(&app, &page).unwrap_err();
        assert!(matches!(err, AppError::ProcessDocument { ref url, .. } if url == "http://a.com/"));
    }

    #[test]
    fn test_prepare_markup() {
        assert_eq!(
            prepare_markup(r#"<div><img src="a.png"><IMG src="b.png"></div>"#),
            r#"<div><img80 src="a.png"><IMG src="b.png"></div>"#
        );
    }

    #[test]
    fn test_parse_json() {
        assert_eq!(parse_json(r#"{"a": [1]}"#).unwrap(), json!({"a": [1]}));
        assert!(matches!(parse_json("{oops"), Err(AppError::JsonParse(_))));
    }
}
