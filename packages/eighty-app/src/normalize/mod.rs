//! Text, number, price and date normalizers.
//!
//! These are the helpers per-site apps call while building a raw record, and
//! that finalization relies on. None of them fail: bad input produces an
//! empty string or `None`. The one exception is
//! [`number::get_number_value_str`], which rejects an invalid pattern.

pub mod date;
pub mod hours;
pub mod number;
pub mod phone;
pub mod price;
pub mod text;
pub mod validity;

pub use date::{format_date, format_date_str, nearest_minute, relative_unix_time};
pub use hours::{convert_24_hour_time, process_day, process_hour, process_payment_types};
pub use number::{get_number_value, get_number_value_str};
pub use phone::convert_alphanumeric_phone;
pub use price::{get_price_range_replace, normalize_price, parse_price};
pub use text::{
    decode_unicode, encode_spanish, get_first_match, get_plain_text, get_proper_case,
    remove_extra_whitespace, remove_tag, replace_special_characters, trim_all, trim_object,
};
pub use validity::{is_valid, Validate};
