//! Running an app over a page and finalizing its output.

pub mod page;

pub use page::{parse_json, prepare_markup, PageOutput, PagePipeline};
