//! 80app Record Finalization Library
//!
//! Helpers for 80legs crawl apps: the per-site code that turns a fetched
//! page into structured business, product or property records. Apps use the
//! normalizers while extracting; the finalizer then canonicalizes whatever
//! they produced into a stable schema with provenance attached.
//!
//! # Usage
//!
//! ```rust,ignore
//! use eighty_app::{finalize_record, get_number_value, make_link, normalize_price};
//! use regex::Regex;
//!
//! let bedrooms = get_number_value("3 bedrooms, 2 baths", &Regex::new("bedrooms")?);
//! let link = make_link(Some("www.example.com"), Some("/listing/42"));
//! let price = normalize_price("$1,250");
//!
//! let record = json!({"data_type": "properties", "bedrooms": bedrooms, "price": price});
//! let finalized = finalize_record(&record, "http://www.example.com/listing/42?80flag=p2");
//! ```
//!
//! # Modules
//!
//! - [`normalize`] - Text, number, price, hours and date normalizers
//! - [`links`] - Link resolution, hostnames and the `80flag` parameter
//! - [`finalize`] - Record finalization, legacy migration and de-duplication
//! - [`lookup`] - Country and state code tables
//! - [`traits`] - The per-site app interface
//! - [`pipeline`] - Running an app over a page
//! - [`types`] - Shared data types and configuration
//! - [`testing`] - Fixed clock and mock app

pub mod error;
pub mod finalize;
pub mod links;
pub mod lookup;
pub mod normalize;
pub mod pipeline;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{AppError, NormalizeError};
pub use finalize::{
    add_source_url_to_object, convert_element_to_object_with_source_url, eliminate_duplicates,
    finalize_data_type, finalize_field_as_list_of_objects, finalize_record, remove_all_duplicates,
    remove_all_duplicates_with, Clock, RecordFinalizer, SystemClock,
};
pub use links::{
    append_80_flag_to_link, extract_hostname, extract_root_domain, get_80_value, make_link,
    remove_url_parameter, strip_80_flag_from_url, FLAG_PARAMETER,
};
pub use lookup::{country_code, state_code};
pub use normalize::{
    convert_24_hour_time, convert_alphanumeric_phone, decode_unicode, encode_spanish,
    format_date, format_date_str, get_first_match, get_number_value, get_number_value_str,
    get_plain_text, get_price_range_replace, get_proper_case, is_valid, nearest_minute,
    normalize_price, parse_price, process_day, process_hour, process_payment_types,
    relative_unix_time, remove_extra_whitespace, remove_tag, replace_special_characters,
    trim_all, trim_object, Validate,
};
pub use pipeline::{parse_json, prepare_markup, PageOutput, PagePipeline};
pub use traits::app::EightyApp;
pub use types::{
    config::FinalizeConfig,
    page::Page,
    price::{Currency, PriceRange},
    record::{DataType, FieldValue, ValueRecord},
};
