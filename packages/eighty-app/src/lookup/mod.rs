//! Read-only reference data.

pub mod codes;

pub use codes::{country_code, state_code};
