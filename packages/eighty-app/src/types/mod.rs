//! Data types shared across the finalization pipeline.

pub mod config;
pub mod page;
pub mod price;
pub mod record;

pub use config::FinalizeConfig;
pub use page::Page;
pub use price::{Currency, PriceRange};
pub use record::{DataType, FieldValue, ValueRecord};
