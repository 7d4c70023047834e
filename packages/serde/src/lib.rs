//! Serde Integration for formbind
//!
//! This layer provides typed access to form snapshots via serde. It adds:
//! - `TypedValues`: Decode a whole-form snapshot into a Rust type
//! - `JsonPayload`: A payload sink that builds a JSON array of pairs
//! - `payload_to_json`: Render an ordered payload as JSON
//!
//! Values are always strings; decoding never coerces them. A target struct
//! with a numeric field will fail to decode rather than parse the text.
//!
//! # Example
//!
//! ```rust
//! use formbind_core::{fields, MemoryControl, Mount, Registry};
//! use formbind_serde::TypedValues;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Login {
//!     username: String,
//!     password: String,
//! }
//!
//! let mut registry = Registry::new(fields!["username", "password"]);
//! for (name, text) in [("username", "alice"), ("password", "secret")] {
//!     let attachment = registry.attachment(name);
//!     attachment.deliver(&mut registry, Mount::Attach(MemoryControl::text(text))).unwrap();
//! }
//!
//! let login: Login = registry.values_as().unwrap();
//! assert_eq!(login.username, "alice");
//! ```

mod error;
mod json;
mod typed;

pub use error::Error;
pub use json::{payload_to_json, JsonPayload};
pub use typed::TypedValues;

// Re-export core types for convenience
pub use formbind_core::{FieldValues, PayloadSink};
