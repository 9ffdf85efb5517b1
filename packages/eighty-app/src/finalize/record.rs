//! Whole-record finalization.
//!
//! Takes whatever an app's `process_document` returned (one record, a list
//! of records, or an empty object) and produces canonical records: stamped
//! with `dateCrawled`, a canonical `dataType`, migrated legacy fields,
//! de-duplicated lists and a flag-free `sourceURLs`.
//!
//! Finalization never mutates its input; a new value is returned.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::clock::{Clock, SystemClock};
use super::dedup::{dedupe_fields, loose_eq};
use super::legacy::{migrate_legacy_fields, remove_ordered, Provenance};
use crate::links::flag::remove_url_parameter;
use crate::normalize::date::{format_date, nearest_minute};
use crate::types::config::FinalizeConfig;
use crate::types::record::{
    DataType, DATA_TYPE_KEY, DATE_CRAWLED_KEY, LEGACY_DATA_TYPE_KEY, SOURCE_URLS_KEY,
};

/// Map a canonical or legacy data type name to its canonical form.
pub fn finalize_data_type(name: &str) -> Option<DataType> {
    DataType::from_legacy(name)
}

/// Finalize with the default configuration and the system clock.
pub fn finalize_record(result: &Value, url: &str) -> Value {
    RecordFinalizer::new().finalize(result, url)
}

/// Turns raw app output into finalized records.
///
/// # Example
///
/// ```rust,ignore
/// use eighty_app::{FinalizeConfig, RecordFinalizer};
///
/// let finalizer = RecordFinalizer::with_config(FinalizeConfig::new().with_deduplication(false));
/// let record = finalizer.finalize(&raw, "http://www.example.com/item?80flag=2");
/// assert_eq!(record["sourceURLs"], json!(["http://www.example.com/item"]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordFinalizer<C = SystemClock> {
    config: FinalizeConfig,
    clock: C,
}

impl RecordFinalizer<SystemClock> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FinalizeConfig) -> Self {
        Self {
            config,
            clock: SystemClock,
        }
    }
}

impl<C: Clock> RecordFinalizer<C> {
    /// Swap the time source, e.g. for a fixed clock in tests.
    pub fn with_clock<D: Clock>(self, clock: D) -> RecordFinalizer<D> {
        RecordFinalizer {
            config: self.config,
            clock,
        }
    }

    /// Finalize one record or a list of records found at `url`.
    ///
    /// An empty object is returned as is. Lists are finalized element by
    /// element in order. Every record gets `sourceURLs` set to `url` without
    /// the flag parameter.
    pub fn finalize(&self, result: &Value, url: &str) -> Value {
        let stamp = format_date(&nearest_minute(self.clock.now()));
        let source_url = remove_url_parameter(url, &self.config.flag_parameter);
        let provenance = Provenance {
            source_url: &source_url,
            date_seen: &stamp,
        };

        let finalized = self.finalize_value(result, provenance);
        debug!(
            url = %source_url,
            records = record_count(&finalized),
            "Finalized extraction result"
        );
        finalized
    }

    fn finalize_value(&self, result: &Value, provenance: Provenance<'_>) -> Value {
        match result {
            Value::Object(record) if record.is_empty() => result.clone(),
            Value::Object(record) => {
                Value::Object(self.finalize_single(record.clone(), provenance))
            }
            Value::Array(items) => Value::Array(
                items
                    .iter()
                    .map(|item| self.finalize_value(item, provenance))
                    .collect(),
            ),
            other => {
                warn!(url = %provenance.source_url, "Extraction result is not a record; leaving as is");
                other.clone()
            }
        }
    }

    fn finalize_single(
        &self,
        mut record: Map<String, Value>,
        provenance: Provenance<'_>,
    ) -> Map<String, Value> {
        if self.config.stamp_date_crawled {
            record.insert(
                DATE_CRAWLED_KEY.to_string(),
                Value::String(provenance.date_seen.to_string()),
            );
        }

        if let Some(legacy) = remove_ordered(&mut record, LEGACY_DATA_TYPE_KEY) {
            record.insert(DATA_TYPE_KEY.to_string(), legacy);
        }
        let data_type = match record.get(DATA_TYPE_KEY) {
            Some(Value::String(name)) => {
                let data_type = finalize_data_type(name);
                if data_type.is_none() {
                    warn!(
                        url = %provenance.source_url,
                        data_type = %name,
                        "Unrecognized dataType; record needs manual correction"
                    );
                }
                data_type
            }
            _ => None,
        };
        record.insert(
            DATA_TYPE_KEY.to_string(),
            data_type.map_or(Value::Null, |t| Value::String(t.as_str().to_string())),
        );

        if self.config.map_legacy_fields {
            record = migrate_legacy_fields(record, provenance);
        }
        if self.config.deduplicate {
            record = dedupe_fields(&record, &loose_eq);
        }

        record.insert(
            SOURCE_URLS_KEY.to_string(),
            Value::Array(vec![Value::String(provenance.source_url.to_string())]),
        );
        record
    }
}

fn record_count(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.len(),
        Value::Object(record) if record.is_empty() => 0,
        _ => 1,
    }
}
