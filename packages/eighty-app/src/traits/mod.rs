//! Core trait abstractions.
//!
//! Per-site extraction logic lives outside this crate; apps implement
//! [`app::EightyApp`] and the library finalizes what they return.

pub mod app;
