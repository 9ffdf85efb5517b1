//! Link handling: href resolution, hostnames and the `80flag` parameter.

pub mod domain;
pub mod flag;
pub mod resolve;

pub use domain::{extract_hostname, extract_root_domain};
pub use flag::{
    append_80_flag_to_link, get_80_value, remove_url_parameter, strip_80_flag_from_url,
    FLAG_PARAMETER,
};
pub use resolve::make_link;
