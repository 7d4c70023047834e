//! Error types for the registry, binder and accessors.

use crate::field::{FieldName, FieldSetError};
use crate::{ControlKind, SlotKind};

/// Errors raised by binding and reading form fields.
///
/// All of these indicate programming or timing errors in the caller: an
/// accessor used before the controls mounted, a name outside the field set,
/// or two kinds of control sharing one field. They are returned at the
/// point of the offending call and never retried internally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The field exists but no control is attached to it.
    #[error("no control is bound to field '{field}'")]
    MissingBinding { field: FieldName },

    /// The name is not part of the registry's field set.
    #[error("unknown field '{field}'")]
    UnknownField { field: String },

    /// A control of one kind was attached to a field holding the other kind.
    #[error("cannot attach a {control} control to field '{field}' holding a {slot} slot")]
    KindMismatch {
        field: FieldName,
        slot: SlotKind,
        control: ControlKind,
    },

    /// The registry was already borrowed when an attachment fired.
    #[error("registry is busy; cannot update field '{field}' while it is being read")]
    RegistryBusy { field: String },

    /// The form was read while an attachment was updating it.
    #[error("form is busy; it cannot be read while a control is attaching")]
    FormBusy,

    /// The field set could not be constructed.
    #[error("field set error: {0}")]
    FieldSet(#[from] FieldSetError),
}

impl Error {
    /// The field name the error concerns, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::MissingBinding { field } | Error::KindMismatch { field, .. } => {
                Some(field.as_str())
            }
            Error::UnknownField { field } | Error::RegistryBusy { field } => Some(field),
            Error::FormBusy | Error::FieldSet(_) => None,
        }
    }
}
