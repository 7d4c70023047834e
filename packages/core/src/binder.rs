//! The binder: attachments that write mounted controls into a registry.
//!
//! The host UI tree delivers one message per lifecycle change of a control:
//! - `Mount::Attach(handle)` when the control mounts (or re-renders with a
//!   new handle)
//! - `Mount::Detach` when it unmounts
//!
//! Each physical control gets its own [`Attachment`]. Radio buttons sharing a
//! field name therefore use one attachment each, all created for the same
//! field, and the registry groups their handles in mount order.

use log::{debug, trace, warn};

use crate::slot::{BindingId, Bound, Slot};
use crate::{Control, ControlKind, Error, Registry, SlotKind, UnknownFieldPolicy};

/// A lifecycle notification for one control.
#[derive(Debug, Clone, PartialEq)]
pub enum Mount<H> {
    /// The control mounted; store its handle.
    Attach(H),
    /// The control unmounted; forget whatever this attachment stored.
    Detach,
}

/// The per-control write path into a registry.
///
/// Obtained from [`Registry::attachment`]. An attachment only ever touches
/// the handle it stored itself: detaching never removes a sibling radio, and
/// a stale attachment whose handle was already replaced is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    field: String,
    id: BindingId,
}

impl Attachment {
    /// The field this attachment writes to.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The identity tagged onto every handle this attachment stores.
    pub fn id(&self) -> BindingId {
        self.id
    }

    /// Deliver a lifecycle message into the registry.
    ///
    /// # Errors
    ///
    /// * `Error::KindMismatch` - a single control was attached to a group
    ///   slot, or an exclusive-choice control to a single slot.
    /// * `Error::UnknownField` - the field is not in the registry's field
    ///   set and the registry is configured with
    ///   [`UnknownFieldPolicy::Reject`].
    pub fn deliver<H: Control>(
        &self,
        registry: &mut Registry<H>,
        event: Mount<H>,
    ) -> Result<(), Error> {
        registry.apply(&self.field, self.id, event)
    }
}

impl<H> Registry<H> {
    /// Create an attachment for one physical control bound to `name`.
    ///
    /// Names outside the field set still produce an attachment; writes
    /// through it are dropped according to the registry's
    /// [`UnknownFieldPolicy`].
    pub fn attachment(&mut self, name: &str) -> Attachment {
        Attachment {
            field: name.to_string(),
            id: self.next_binding(),
        }
    }

    fn unknown_field(&self, field: &str) -> Result<(), Error> {
        match self.config.unknown_field {
            UnknownFieldPolicy::Ignore => {
                debug!("Ignoring write to unknown field '{}'", field);
                Ok(())
            }
            UnknownFieldPolicy::Warn => {
                warn!("Dropped write to unknown field '{}'", field);
                Ok(())
            }
            UnknownFieldPolicy::Reject => Err(Error::UnknownField {
                field: field.to_string(),
            }),
        }
    }
}

impl<H: Control> Registry<H> {
    pub(crate) fn apply(
        &mut self,
        field: &str,
        id: BindingId,
        event: Mount<H>,
    ) -> Result<(), Error> {
        let Some((_, name, slot)) = self.slots.get_full_mut(field) else {
            return self.unknown_field(field);
        };

        match event {
            Mount::Attach(handle) => {
                let control = handle.kind();
                let bound = Bound::new(id, handle);

                match (slot.kind(), control) {
                    (SlotKind::Empty, ControlKind::ExclusiveChoice) => {
                        trace!("Field '{}': new group from {}", name, id);
                        *slot = Slot::Group(vec![bound]);
                    }
                    (SlotKind::Group, ControlKind::ExclusiveChoice) => {
                        if let Slot::Group(members) = slot {
                            join_group(members, bound);
                            trace!("Field '{}': group of {} after {}", name, members.len(), id);
                        }
                    }
                    (SlotKind::Empty | SlotKind::Single, ControlKind::Single) => {
                        trace!("Field '{}': single control from {}", name, id);
                        *slot = Slot::Single(bound);
                    }
                    (slot_kind, control) => {
                        return Err(Error::KindMismatch {
                            field: name.clone(),
                            slot: slot_kind,
                            control,
                        });
                    }
                }
            }
            Mount::Detach => match slot {
                Slot::Single(bound) if bound.id() == id => {
                    trace!("Field '{}': detached {}", name, id);
                    *slot = Slot::Empty;
                }
                Slot::Group(members) if members.iter().any(|m| m.id() == id) => {
                    members.retain(|m| m.id() != id);
                    trace!("Field '{}': {} left group", name, id);
                    if members.is_empty() {
                        *slot = Slot::Empty;
                    }
                }
                _ => debug!("Field '{}': stale detach from {} ignored", name, id),
            },
        }

        Ok(())
    }
}

/// Add a member to a group, replacing this attachment's previous handle in
/// place so re-renders keep mount order.
fn join_group<H>(members: &mut Vec<Bound<H>>, bound: Bound<H>) {
    match members.iter_mut().find(|m| m.id() == bound.id()) {
        Some(existing) => *existing = bound,
        None => members.push(bound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fields, BinderConfig, FieldName, MemoryControl};

    fn group_contents(registry: &Registry<MemoryControl>, name: &str) -> Vec<String> {
        registry
            .handle(name)
            .unwrap()
            .iter()
            .map(|c| c.content())
            .collect()
    }

    #[test]
    fn radios_group_in_mount_order() {
        let mut registry = Registry::new(fields!["age"]);
        let first = registry.attachment("age");
        let second = registry.attachment("age");
        let h1 = MemoryControl::choice("minor", false);
        let h2 = MemoryControl::choice("major", false);

        second
            .deliver(&mut registry, Mount::Attach(h2.clone()))
            .unwrap();
        first
            .deliver(&mut registry, Mount::Attach(h1.clone()))
            .unwrap();

        let members = registry.handle("age").unwrap().as_group().unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].handle(), &h2);
        assert_eq!(members[1].handle(), &h1);
        assert_eq!(registry.value("age").unwrap(), "");

        h1.set_selected(true);
        assert_eq!(registry.value("age").unwrap(), "minor");
    }

    #[test]
    fn reattach_replaces_group_member_in_place() {
        let mut registry = Registry::new(fields!["size"]);
        let small = registry.attachment("size");
        let large = registry.attachment("size");
        small
            .deliver(&mut registry, Mount::Attach(MemoryControl::choice("s", false)))
            .unwrap();
        large
            .deliver(&mut registry, Mount::Attach(MemoryControl::choice("l", false)))
            .unwrap();
        small
            .deliver(&mut registry, Mount::Attach(MemoryControl::choice("xs", false)))
            .unwrap();

        assert_eq!(group_contents(&registry, "size"), vec!["xs", "l"]);
    }

    #[test]
    fn single_attach_overwrites() {
        let mut registry = Registry::new(fields!["q"]);
        let attachment = registry.attachment("q");
        attachment
            .deliver(&mut registry, Mount::Attach(MemoryControl::text("old")))
            .unwrap();
        let newer = MemoryControl::text("new");
        attachment
            .deliver(&mut registry, Mount::Attach(newer.clone()))
            .unwrap();

        assert_eq!(registry.handle("q").unwrap().as_single(), Some(&newer));
    }

    #[test]
    fn detach_clears_single_slot() {
        let mut registry = Registry::new(fields!["q"]);
        let attachment = registry.attachment("q");
        attachment
            .deliver(&mut registry, Mount::Attach(MemoryControl::text("v")))
            .unwrap();
        attachment.deliver(&mut registry, Mount::Detach).unwrap();

        assert!(registry.slot("q").unwrap().is_empty());
        assert!(matches!(
            registry.value("q"),
            Err(Error::MissingBinding { .. })
        ));
    }

    #[test]
    fn stale_detach_keeps_newer_handle() {
        let mut registry = Registry::new(fields!["q"]);
        let old = registry.attachment("q");
        let new = registry.attachment("q");
        old.deliver(&mut registry, Mount::Attach(MemoryControl::text("old")))
            .unwrap();
        new.deliver(&mut registry, Mount::Attach(MemoryControl::text("new")))
            .unwrap();
        old.deliver(&mut registry, Mount::Detach).unwrap();

        assert_eq!(registry.value("q").unwrap(), "new");
    }

    #[test]
    fn detach_removes_only_matching_group_member() {
        let mut registry = Registry::new(fields!["color"]);
        let red = registry.attachment("color");
        let blue = registry.attachment("color");
        red.deliver(&mut registry, Mount::Attach(MemoryControl::choice("red", true)))
            .unwrap();
        blue.deliver(&mut registry, Mount::Attach(MemoryControl::choice("blue", false)))
            .unwrap();

        red.deliver(&mut registry, Mount::Detach).unwrap();
        assert_eq!(group_contents(&registry, "color"), vec!["blue"]);
        assert_eq!(registry.value("color").unwrap(), "");

        blue.deliver(&mut registry, Mount::Detach).unwrap();
        assert!(registry.slot("color").unwrap().is_empty());
    }

    #[test]
    fn choice_into_single_slot_is_a_kind_mismatch() {
        let mut registry = Registry::new(fields!["mixed"]);
        let text = registry.attachment("mixed");
        let radio = registry.attachment("mixed");
        text.deliver(&mut registry, Mount::Attach(MemoryControl::text("t")))
            .unwrap();

        let err = radio
            .deliver(&mut registry, Mount::Attach(MemoryControl::choice("r", true)))
            .unwrap_err();
        assert_eq!(
            err,
            Error::KindMismatch {
                field: FieldName::parse("mixed").unwrap(),
                slot: SlotKind::Single,
                control: ControlKind::ExclusiveChoice,
            }
        );
        assert_eq!(registry.value("mixed").unwrap(), "t");
    }

    #[test]
    fn single_into_group_slot_is_a_kind_mismatch() {
        let mut registry = Registry::new(fields!["mixed"]);
        let radio = registry.attachment("mixed");
        let text = registry.attachment("mixed");
        radio
            .deliver(&mut registry, Mount::Attach(MemoryControl::choice("r", true)))
            .unwrap();

        let err = text
            .deliver(&mut registry, Mount::Attach(MemoryControl::text("t")))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::KindMismatch {
                slot: SlotKind::Group,
                control: ControlKind::Single,
                ..
            }
        ));
        assert_eq!(registry.slot("mixed").unwrap().kind(), SlotKind::Group);
    }

    #[test]
    fn unknown_field_is_a_silent_noop_by_default() {
        let mut registry = Registry::new(fields!["known"]);
        let stray = registry.attachment("stray");
        stray
            .deliver(&mut registry, Mount::Attach(MemoryControl::text("x")))
            .unwrap();

        assert!(registry.slot("stray").is_none());
        assert_eq!(registry.slots().count(), 1);
        assert!(registry.slot("known").unwrap().is_empty());
    }

    #[test]
    fn unknown_field_warn_policy_still_drops_the_write() {
        let config = BinderConfig::default().with_unknown_field(UnknownFieldPolicy::Warn);
        let mut registry = Registry::with_config(fields!["known"], config);
        let stray = registry.attachment("stray");

        assert!(stray
            .deliver(&mut registry, Mount::Attach(MemoryControl::text("x")))
            .is_ok());
        assert!(!registry.contains("stray"));
    }

    #[test]
    fn unknown_field_reject_policy_errors() {
        let config = BinderConfig::default().with_unknown_field(UnknownFieldPolicy::Reject);
        let mut registry = Registry::with_config(fields!["known"], config);
        let stray = registry.attachment("stray");

        let err = stray
            .deliver(&mut registry, Mount::Attach(MemoryControl::text("x")))
            .unwrap_err();
        assert_eq!(
            err,
            Error::UnknownField {
                field: "stray".to_string()
            }
        );
    }

    #[test]
    fn attachments_get_distinct_ids() {
        let mut registry: Registry<MemoryControl> = Registry::new(fields!["a"]);
        let one = registry.attachment("a");
        let two = registry.attachment("a");
        assert_ne!(one.id(), two.id());
        assert_eq!(one.field(), "a");
    }
}
