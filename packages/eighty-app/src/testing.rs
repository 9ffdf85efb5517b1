//! Testing utilities including mock implementations.
//!
//! These are useful for testing apps and harness code built on this library
//! without a real crawl or a moving clock.

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::sync::{Arc, RwLock};
use thiserror::Error;

use crate::finalize::clock::Clock;
use crate::traits::app::EightyApp;
use crate::types::page::Page;

/// A clock stuck at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(now)
    }

    /// Build from an RFC 3339 timestamp.
    ///
    /// # Panics
    ///
    /// Panics if `timestamp` is not valid RFC 3339.
    pub fn parse(timestamp: &str) -> Self {
        let now = DateTime::parse_from_rfc3339(timestamp)
            .unwrap_or_else(|e| panic!("invalid timestamp {timestamp:?}: {e}"))
            .with_timezone(&Utc);
        Self(now)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Error returned by a failing [`MockApp`].
#[derive(Debug, Clone, Error)]
#[error("mock app failure: {0}")]
pub struct MockAppError(pub String);

/// An app returning canned output.
#[derive(Debug, Clone)]
pub struct MockApp {
    /// Value returned by `process_document`
    record: Value,

    /// Links returned by `parse_links`
    links: Vec<String>,

    /// When set, every call fails with this message
    failure: Option<String>,

    /// Call tracking for assertions
    calls: Arc<RwLock<Vec<String>>>,
}

impl Default for MockApp {
    fn default() -> Self {
        Self {
            record: Value::Object(Default::default()),
            links: Vec::new(),
            failure: None,
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl MockApp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `record` from `process_document`.
    pub fn with_record(mut self, record: Value) -> Self {
        self.record = record;
        self
    }

    /// Return `links` from `parse_links`.
    pub fn with_links(mut self, links: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.links = links.into_iter().map(Into::into).collect();
        self
    }

    /// Fail every call with `message`.
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Names of the trait methods called so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().map(|c| c.clone()).unwrap_or_default()
    }

    fn track(&self, call: &str) -> Result<(), MockAppError> {
        if let Ok(mut calls) = self.calls.write() {
            calls.push(call.to_string());
        }
        match &self.failure {
            Some(message) => Err(MockAppError(message.clone())),
            None => Ok(()),
        }
    }
}

impl EightyApp for MockApp {
    type Error = MockAppError;

    fn process_document(&self, _page: &Page) -> Result<Value, Self::Error> {
        self.track("process_document")?;
        Ok(self.record.clone())
    }

    fn parse_links(&self, _page: &Page) -> Result<Vec<String>, Self::Error> {
        self.track("parse_links")?;
        Ok(self.links.clone())
    }
}
