//! The Registry: one slot per declared field, plus the read-side accessors.

use indexmap::IndexMap;

use crate::payload::{FieldValues, PayloadSink};
use crate::slot::{BindingId, Handle, Slot};
use crate::{BinderConfig, Control, Error, FieldName, FieldSet};

/// The slot collection for one form instance.
///
/// Create it once when the owning component is first constructed and keep
/// it for the component's whole lifetime; attachments write into it as
/// controls mount and unmount, and accessors read from it.
///
/// # Example
///
/// ```rust
/// use formbind_core::{fields, MemoryControl, Mount, Registry};
///
/// let mut registry = Registry::new(fields!["username", "password"]);
///
/// let username = registry.attachment("username");
/// let password = registry.attachment("password");
/// username.deliver(&mut registry, Mount::Attach(MemoryControl::text("alice"))).unwrap();
/// password.deliver(&mut registry, Mount::Attach(MemoryControl::text("secret"))).unwrap();
///
/// assert_eq!(registry.value("username").unwrap(), "alice");
/// assert_eq!(
///     registry.payload().unwrap(),
///     vec![
///         ("username".to_string(), "alice".to_string()),
///         ("password".to_string(), "secret".to_string()),
///     ]
/// );
/// ```
#[derive(Debug)]
pub struct Registry<H> {
    pub(crate) slots: IndexMap<FieldName, Slot<H>>,
    pub(crate) config: BinderConfig,
    next_binding: u64,
}

impl<H> Registry<H> {
    /// Create a registry with every slot empty.
    pub fn new(fields: FieldSet) -> Self {
        Self::with_config(fields, BinderConfig::default())
    }

    /// Create a registry with a binder configuration.
    pub fn with_config(fields: FieldSet, config: BinderConfig) -> Self {
        let slots = fields
            .iter()
            .map(|name| (name.clone(), Slot::Empty))
            .collect();
        Self {
            slots,
            config,
            next_binding: 0,
        }
    }

    /// The declared field names, in order.
    pub fn fields(&self) -> impl ExactSizeIterator<Item = &FieldName> {
        self.slots.keys()
    }

    /// The binder configuration attachments consult for unknown names.
    pub fn config(&self) -> &BinderConfig {
        &self.config
    }

    /// Check whether a name is part of the field set.
    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// The slot for a field, or `None` for a name outside the field set.
    pub fn slot(&self, name: &str) -> Option<&Slot<H>> {
        self.slots.get(name)
    }

    /// Iterate over every field and its slot in declared order.
    pub fn slots(&self) -> impl Iterator<Item = (&FieldName, &Slot<H>)> {
        self.slots.iter()
    }

    /// Check whether a control is attached to a field.
    pub fn is_bound(&self, name: &str) -> bool {
        self.slot(name).is_some_and(Slot::is_present)
    }

    /// Fields with no attached control, in declared order.
    pub fn missing(&self) -> Vec<&FieldName> {
        self.slots
            .iter()
            .filter(|(_, slot)| slot.is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    pub(crate) fn next_binding(&mut self) -> BindingId {
        self.next_binding += 1;
        BindingId(self.next_binding)
    }

    /// Look up a slot that must be non-empty.
    fn bound_slot(&self, name: &str) -> Result<(&FieldName, &Slot<H>), Error> {
        let (field, slot) = self
            .slots
            .get_key_value(name)
            .ok_or_else(|| Error::UnknownField {
                field: name.to_string(),
            })?;
        if slot.is_empty() {
            return Err(Error::MissingBinding {
                field: field.clone(),
            });
        }
        Ok((field, slot))
    }

    /// Check every slot before an all-fields read, failing on the first
    /// empty one in declared order.
    fn ensure_all_bound(&self) -> Result<(), Error> {
        match self.slots.iter().find(|(_, slot)| slot.is_empty()) {
            Some((field, _)) => Err(Error::MissingBinding {
                field: field.clone(),
            }),
            None => Ok(()),
        }
    }

    /// The handle(s) bound to a field.
    ///
    /// # Errors
    ///
    /// * `Error::UnknownField` - the name is not in the field set.
    /// * `Error::MissingBinding` - no control is attached yet.
    pub fn handle(&self, name: &str) -> Result<Handle<'_, H>, Error> {
        let (field, slot) = self.bound_slot(name)?;
        slot.as_handle().ok_or_else(|| Error::MissingBinding {
            field: field.clone(),
        })
    }

    /// The handle(s) bound to a field, or `None` if nothing is attached or
    /// the name is unknown.
    pub fn try_handle(&self, name: &str) -> Option<Handle<'_, H>> {
        self.slot(name).and_then(Slot::as_handle)
    }
}

impl<H: Control> Registry<H> {
    /// The logical value of one field.
    ///
    /// For an exclusive-choice group this is the content of the first
    /// selected member in mount order, or `""` when none is selected.
    ///
    /// # Errors
    ///
    /// * `Error::UnknownField` - the name is not in the field set.
    /// * `Error::MissingBinding` - no control is attached yet.
    pub fn value(&self, name: &str) -> Result<String, Error> {
        let (field, slot) = self.bound_slot(name)?;
        slot.value().ok_or_else(|| Error::MissingBinding {
            field: field.clone(),
        })
    }

    /// Every field's logical value, in declared order.
    ///
    /// Fails before reading anything if any field is unbound.
    pub fn values(&self) -> Result<FieldValues, Error> {
        self.ensure_all_bound()?;

        let mut values = FieldValues::with_capacity(self.slots.len());
        for (field, slot) in &self.slots {
            let value = slot.value().ok_or_else(|| Error::MissingBinding {
                field: field.clone(),
            })?;
            values.insert(field.clone(), value);
        }
        Ok(values)
    }

    /// Append one `(name, value)` pair per field, in declared order.
    ///
    /// Fails before appending anything if any field is unbound, so the sink
    /// never receives a partial payload.
    pub fn write_payload<S: PayloadSink + ?Sized>(&self, sink: &mut S) -> Result<(), Error> {
        let values = self.values()?;
        for (field, value) in &values {
            sink.append_pair(field.as_str(), value);
        }
        Ok(())
    }

    /// The ordered payload as owned pairs.
    pub fn payload(&self) -> Result<Vec<(String, String)>, Error> {
        let mut pairs = Vec::with_capacity(self.slots.len());
        self.write_payload(&mut pairs)?;
        Ok(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fields, MemoryControl, Mount, SlotKind};

    fn bind(registry: &mut Registry<MemoryControl>, name: &str, control: MemoryControl) {
        let attachment = registry.attachment(name);
        attachment
            .deliver(registry, Mount::Attach(control))
            .unwrap();
    }

    #[test]
    fn fresh_registry_is_all_empty() {
        let registry: Registry<MemoryControl> = Registry::new(fields!["a", "b", "c"]);
        for (_, slot) in registry.slots() {
            assert_eq!(slot.kind(), SlotKind::Empty);
        }
        let missing: Vec<&str> = registry.missing().iter().map(|f| f.as_str()).collect();
        assert_eq!(missing, vec!["a", "b", "c"]);
    }

    #[test]
    fn fields_follow_declared_order() {
        let registry: Registry<MemoryControl> = Registry::new(fields!["c", "a", "b"]);
        let names: Vec<&str> = registry.fields().map(FieldName::as_str).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
        assert_eq!(registry.fields().len(), 3);
        assert_eq!(*registry.config(), BinderConfig::default());
    }

    #[test]
    fn single_handle_is_returned() {
        let mut registry = Registry::new(fields!["username"]);
        let input = MemoryControl::text("alice");
        bind(&mut registry, "username", input.clone());

        let handle = registry.handle("username").unwrap();
        assert_eq!(handle.as_single(), Some(&input));
        assert_eq!(registry.slot("username").unwrap().kind(), SlotKind::Single);
    }

    #[test]
    fn value_tracks_live_content() {
        let mut registry = Registry::new(fields!["username"]);
        let input = MemoryControl::text("al");
        bind(&mut registry, "username", input.clone());

        assert_eq!(registry.value("username").unwrap(), "al");
        input.set_content("alice");
        assert_eq!(registry.value("username").unwrap(), "alice");
    }

    #[test]
    fn accessors_on_empty_slot_name_the_field() {
        let registry: Registry<MemoryControl> = Registry::new(fields!["email"]);
        let expected = Error::MissingBinding {
            field: FieldName::parse("email").unwrap(),
        };

        assert_eq!(registry.value("email").unwrap_err(), expected);
        assert_eq!(registry.handle("email").unwrap_err(), expected);
        assert_eq!(registry.values().unwrap_err(), expected);
        assert_eq!(registry.payload().unwrap_err(), expected);
    }

    #[test]
    fn all_field_reads_fail_atomically() {
        let mut registry = Registry::new(fields!["first", "second", "third"]);
        bind(&mut registry, "first", MemoryControl::text("1"));
        bind(&mut registry, "third", MemoryControl::text("3"));

        let mut sink: Vec<(String, String)> = Vec::new();
        let err = registry.write_payload(&mut sink).unwrap_err();
        assert_eq!(err.field(), Some("second"));
        assert!(sink.is_empty());
    }

    #[test]
    fn unknown_names_are_reported() {
        let registry: Registry<MemoryControl> = Registry::new(fields!["a"]);
        assert!(matches!(
            registry.value("b"),
            Err(Error::UnknownField { .. })
        ));
        assert!(registry.try_handle("b").is_none());
        assert!(!registry.contains("b"));
    }

    #[test]
    fn payload_follows_declared_order_not_mount_order() {
        let mut registry = Registry::new(fields!["c", "a", "b"]);
        bind(&mut registry, "b", MemoryControl::text("B"));
        bind(&mut registry, "a", MemoryControl::text("A"));
        bind(&mut registry, "c", MemoryControl::text("C"));

        let names: Vec<String> = registry
            .payload()
            .unwrap()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn group_contributes_one_pair() {
        let mut registry = Registry::new(fields!["age", "name"]);
        bind(&mut registry, "age", MemoryControl::choice("minor", false));
        bind(&mut registry, "age", MemoryControl::choice("major", true));
        bind(&mut registry, "name", MemoryControl::text("bo"));

        assert_eq!(
            registry.payload().unwrap(),
            vec![
                ("age".to_string(), "major".to_string()),
                ("name".to_string(), "bo".to_string()),
            ]
        );
    }

    #[test]
    fn reads_are_idempotent() {
        let mut registry = Registry::new(fields!["x", "y"]);
        bind(&mut registry, "x", MemoryControl::text("1"));
        bind(&mut registry, "y", MemoryControl::choice("on", true));

        assert_eq!(registry.value("y").unwrap(), registry.value("y").unwrap());
        assert_eq!(registry.values().unwrap(), registry.values().unwrap());
        assert_eq!(registry.payload().unwrap(), registry.payload().unwrap());
    }

    #[test]
    fn try_handle_supports_defensive_reads() {
        let mut registry = Registry::new(fields!["opt"]);
        assert!(!crate::is_present(&registry.try_handle("opt")));
        bind(&mut registry, "opt", MemoryControl::text("v"));
        assert!(crate::is_present(&registry.try_handle("opt")));
        assert!(registry.is_bound("opt"));
    }
}
