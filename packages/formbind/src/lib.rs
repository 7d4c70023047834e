//! formbind: bind logical form field names to live control handles.
//!
//! A form declares its field names once; the UI tree reports controls as
//! they mount and unmount, and the form reads single values, whole-form
//! snapshots and ordered payloads back from whatever is mounted right now.
//!
//! This crate re-exports the layers:
//! - `formbind-core`: field sets, the registry, attachments and accessors
//! - `formbind-serde` (default `serde` feature): typed snapshots and JSON
//!   payloads

pub use formbind_core::*;

#[cfg(feature = "serde")]
pub use formbind_serde::{payload_to_json, JsonPayload, TypedValues};

#[cfg(feature = "serde")]
pub type SerdeError = formbind_serde::Error;
