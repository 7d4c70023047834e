//! Core formbind: the field registry
//!
//! Binds logical field names to live form-control handles and derives reads
//! from them:
//! - `FieldSet`: The ordered, validated set of field names for one form
//! - `Registry`: One `Slot` per field, created once per form instance
//! - `Attachment`: The per-control write path, fed `Mount` messages by the UI
//! - Accessors: `value`, `handle`, `values`, `payload` on the registry
//!
//! Controls are anything implementing [`Control`]. Exclusive-choice controls
//! (radio buttons) sharing a field name are grouped into one slot; the
//! field's value is the content of the first selected member.
//!
//! # Example
//!
//! ```rust
//! use formbind_core::{fields, Error, MemoryControl, Mount, Registry};
//!
//! let mut registry = Registry::new(fields!["email", "plan"]);
//!
//! let email = registry.attachment("email");
//! email.deliver(&mut registry, Mount::Attach(MemoryControl::text("a@b.c"))).unwrap();
//!
//! // "plan" has not mounted yet
//! assert!(matches!(registry.values(), Err(Error::MissingBinding { .. })));
//!
//! let free = registry.attachment("plan");
//! let paid = registry.attachment("plan");
//! free.deliver(&mut registry, Mount::Attach(MemoryControl::choice("free", false))).unwrap();
//! paid.deliver(&mut registry, Mount::Attach(MemoryControl::choice("paid", true))).unwrap();
//!
//! let values = registry.values().unwrap();
//! assert_eq!(values.get("plan"), Some("paid"));
//! ```

mod binder;
mod config;
mod control;
mod error;
mod field;
mod form;
mod memory;
mod payload;
mod registry;
mod slot;

pub use binder::{Attachment, Mount};
pub use config::{BinderConfig, UnknownFieldPolicy};
pub use control::{Control, ControlKind};
pub use error::Error;
pub use field::{FieldKey, FieldName, FieldSet, FieldSetError};
pub use form::Form;
pub use memory::MemoryControl;
pub use payload::{FieldValues, PayloadSink};
pub use registry::Registry;
pub use slot::{is_present, BindingId, Bound, Handle, Slot, SlotKind};
