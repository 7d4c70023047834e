//! Typed snapshot extension trait.

use serde::de::DeserializeOwned;

use formbind_core::{Control, FieldValues, Form, Registry};

use crate::Error;

/// Extension trait for typed whole-form reads.
///
/// Implemented for [`Registry`] and [`Form`]. The snapshot is taken with the
/// same all-or-nothing check as `values()`, then handed to serde.
///
/// # Example
///
/// ```rust,ignore
/// use formbind_serde::TypedValues;
///
/// #[derive(Deserialize)]
/// struct Signup {
///     email: String,
///     plan: String,
/// }
///
/// fn on_submit(form: &Form<MemoryControl>) -> Result<Signup, Error> {
///     form.values_as()
/// }
/// ```
pub trait TypedValues {
    /// Take a snapshot of every field.
    fn snapshot(&self) -> Result<FieldValues, formbind_core::Error>;

    /// Take a snapshot and deserialize it into a Rust type.
    ///
    /// This method:
    /// 1. Reads every field's value, failing if any field is unbound
    /// 2. Builds a JSON object in declared field order
    /// 3. Deserializes the object to the target type
    fn values_as<T: DeserializeOwned>(&self) -> Result<T, Error> {
        let json = self.values_json()?;
        Ok(serde_json::from_value(json)?)
    }

    /// Take a snapshot as a `serde_json::Value` object.
    ///
    /// Convenience method when you don't know the exact type.
    fn values_json(&self) -> Result<serde_json::Value, Error> {
        let values = self.snapshot()?;
        Ok(serde_json::to_value(&values)?)
    }
}

impl<H: Control> TypedValues for Registry<H> {
    fn snapshot(&self) -> Result<FieldValues, formbind_core::Error> {
        self.values()
    }
}

impl<H: Control + 'static> TypedValues for Form<H> {
    fn snapshot(&self) -> Result<FieldValues, formbind_core::Error> {
        self.values()
    }
}
