//! Form: a registry owned behind a shared cell, for callback-style hosts.
//!
//! UI toolkits usually want a `'static` closure per control rather than an
//! object that needs the registry passed in. `Form` owns the registry and
//! hands out such closures; all of them write into the same registry, and
//! the accessors read from it.

use std::cell::RefCell;
use std::rc::Rc;

use crate::payload::{FieldValues, PayloadSink};
use crate::{Attachment, BinderConfig, Control, Error, FieldName, FieldSet, Mount, Registry};

/// A single form instance's registry plus its attach callbacks.
///
/// Construct it once per component instance and keep it across re-renders.
/// `Form` is neither `Clone` nor `Send`; the callbacks it hands
/// out are the only other holders of the registry.
///
/// # Example
///
/// ```rust
/// use formbind_core::{fields, Form, MemoryControl, Mount};
///
/// let form = Form::new(fields!["age"]);
/// let mut minor = form.attach_fn("age");
/// let mut major = form.attach_fn("age");
///
/// minor(Mount::Attach(MemoryControl::choice("minor", false))).unwrap();
/// major(Mount::Attach(MemoryControl::choice("major", true))).unwrap();
///
/// assert_eq!(form.value("age").unwrap(), "major");
/// ```
pub struct Form<H> {
    registry: Rc<RefCell<Registry<H>>>,
}

impl<H> Form<H> {
    pub fn new(fields: FieldSet) -> Self {
        Self::with_config(fields, BinderConfig::default())
    }

    pub fn with_config(fields: FieldSet, config: BinderConfig) -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry::with_config(fields, config))),
        }
    }

    /// Run a read against the registry.
    ///
    /// Use this for accessors that borrow from the registry, such as
    /// [`Registry::handle`].
    ///
    /// Fails with `Error::FormBusy` if called from inside an attach
    /// callback.
    pub fn read<R>(&self, f: impl FnOnce(&Registry<H>) -> R) -> Result<R, Error> {
        let registry = self.registry.try_borrow().map_err(|_| Error::FormBusy)?;
        Ok(f(&registry))
    }

    /// Check whether a control is attached to a field.
    pub fn is_bound(&self, name: &str) -> Result<bool, Error> {
        self.read(|registry| registry.is_bound(name))
    }

    /// Fields with no attached control, in declared order.
    pub fn missing(&self) -> Result<Vec<FieldName>, Error> {
        self.read(|registry| registry.missing().into_iter().cloned().collect())
    }
}

impl<H: Control + 'static> Form<H> {
    /// A mount callback for one physical control bound to `name`.
    ///
    /// Hand one callback to each control; radio buttons sharing a name each
    /// get their own.
    pub fn attach_fn(
        &self,
        name: &str,
    ) -> impl FnMut(Mount<H>) -> Result<(), Error> + 'static {
        let registry = Rc::clone(&self.registry);
        let field = name.to_string();
        let mut attachment: Option<Attachment> = None;

        move |event| {
            let mut registry = registry
                .try_borrow_mut()
                .map_err(|_| Error::RegistryBusy {
                    field: field.clone(),
                })?;
            let attachment = attachment.get_or_insert_with(|| registry.attachment(&field));
            attachment.deliver(&mut *registry, event)
        }
    }

    /// See [`Registry::value`].
    pub fn value(&self, name: &str) -> Result<String, Error> {
        self.read(|registry| registry.value(name))?
    }

    /// See [`Registry::values`].
    pub fn values(&self) -> Result<FieldValues, Error> {
        self.read(Registry::values)?
    }

    /// See [`Registry::payload`].
    pub fn payload(&self) -> Result<Vec<(String, String)>, Error> {
        self.read(Registry::payload)?
    }

    /// See [`Registry::write_payload`].
    pub fn write_payload<S: PayloadSink + ?Sized>(&self, sink: &mut S) -> Result<(), Error> {
        self.read(|registry| registry.write_payload(sink))?
    }
}
