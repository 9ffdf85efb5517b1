//! Record finalization: provenance, legacy migration and de-duplication.

pub mod clock;
pub mod dedup;
pub mod field;
mod legacy;
pub mod record;

pub use clock::{Clock, SystemClock};
pub use dedup::{eliminate_duplicates, loose_eq, remove_all_duplicates, remove_all_duplicates_with};
pub use field::{
    add_source_url_to_object, convert_element_to_object_with_source_url,
    finalize_field_as_list_of_objects,
};
pub use record::{finalize_data_type, finalize_record, RecordFinalizer};
