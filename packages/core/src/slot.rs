//! The Slot type - per-field storage for bound control handles.

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::Control;

/// Identifies the attachment that stored a handle.
///
/// Every [`Attachment`](crate::Attachment) gets a fresh id from its
/// registry, so a detach can remove exactly the handle it attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BindingId(pub(crate) u64);

impl fmt::Display for BindingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A handle stored in a slot, tagged with the attachment that stored it.
#[derive(Debug, Clone, PartialEq)]
pub struct Bound<H> {
    id: BindingId,
    handle: H,
}

impl<H> Bound<H> {
    pub(crate) fn new(id: BindingId, handle: H) -> Self {
        Self { id, handle }
    }

    /// The attachment that stored this handle.
    pub fn id(&self) -> BindingId {
        self.id
    }

    /// The stored handle.
    pub fn handle(&self) -> &H {
        &self.handle
    }

    /// Take the handle out.
    pub fn into_handle(self) -> H {
        self.handle
    }
}

impl<H> Deref for Bound<H> {
    type Target = H;

    fn deref(&self) -> &H {
        &self.handle
    }
}

/// The storage state of one field.
///
/// A slot starts `Empty`. Single controls move it to `Single`; exclusive
/// choice controls move it to `Group` and append in mount order. Detaching
/// the last control moves it back to `Empty`.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot<H> {
    /// No control is attached.
    Empty,
    /// Exactly one control is attached.
    Single(Bound<H>),
    /// One or more exclusive-choice controls, in mount order. Never empty.
    Group(Vec<Bound<H>>),
}

impl<H> Default for Slot<H> {
    fn default() -> Self {
        Slot::Empty
    }
}

/// The shape of a slot, without its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    Empty,
    Single,
    Group,
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotKind::Empty => write!(f, "empty"),
            SlotKind::Single => write!(f, "single"),
            SlotKind::Group => write!(f, "group"),
        }
    }
}

impl<H> Slot<H> {
    // === Inspection ===

    /// The shape of this slot.
    pub fn kind(&self) -> SlotKind {
        match self {
            Slot::Empty => SlotKind::Empty,
            Slot::Single(_) => SlotKind::Single,
            Slot::Group(_) => SlotKind::Group,
        }
    }

    /// Check if no control is attached.
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    /// Check if at least one control is attached.
    pub fn is_present(&self) -> bool {
        !self.is_empty()
    }

    /// Borrow the stored handle(s), or `None` for an empty slot.
    pub fn as_handle(&self) -> Option<Handle<'_, H>> {
        match self {
            Slot::Empty => None,
            Slot::Single(bound) => Some(Handle::Single(bound.handle())),
            Slot::Group(members) => Some(Handle::Group(members)),
        }
    }

    /// Check whether any handle in this slot was stored by `id`.
    pub fn is_bound_by(&self, id: BindingId) -> bool {
        match self {
            Slot::Empty => false,
            Slot::Single(bound) => bound.id == id,
            Slot::Group(members) => members.iter().any(|m| m.id == id),
        }
    }
}

impl<H: Control> Slot<H> {
    /// The logical value of this slot.
    ///
    /// - `Single`: the control's content.
    /// - `Group`: the content of the first member, in mount order, that
    ///   reports itself selected; `""` if none does.
    /// - `Empty`: `None`.
    pub fn value(&self) -> Option<String> {
        match self {
            Slot::Empty => None,
            Slot::Single(bound) => Some(bound.content()),
            Slot::Group(members) => Some(
                members
                    .iter()
                    .find(|m| m.is_selected())
                    .map(|m| m.content())
                    .unwrap_or_default(),
            ),
        }
    }
}

/// A borrowed view of the handle(s) bound to a field.
#[derive(Debug)]
pub enum Handle<'a, H> {
    /// The field's single control.
    Single(&'a H),
    /// The field's exclusive-choice controls, in mount order.
    Group(&'a [Bound<H>]),
}

impl<H> Clone for Handle<'_, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H> Copy for Handle<'_, H> {}

impl<'a, H> Handle<'a, H> {
    /// The single control, if this is a single-control field.
    pub fn as_single(&self) -> Option<&'a H> {
        match self {
            Handle::Single(h) => Some(h),
            Handle::Group(_) => None,
        }
    }

    /// The group members, if this is an exclusive-choice field.
    pub fn as_group(&self) -> Option<&'a [Bound<H>]> {
        match self {
            Handle::Single(_) => None,
            Handle::Group(members) => Some(members),
        }
    }

    /// Iterate over every bound control, one for a single field.
    pub fn iter(&self) -> impl Iterator<Item = &'a H> + 'a {
        let none: &'a [Bound<H>] = &[];
        let (single, group) = match *self {
            Handle::Single(h) => (Some(h), none),
            Handle::Group(members) => (None, members),
        };
        single.into_iter().chain(group.iter().map(Bound::handle))
    }
}

/// Check whether a defensively fetched handle is present.
///
/// Pairs with [`Registry::try_handle`](crate::Registry::try_handle) for
/// callers that branch before dereferencing.
pub fn is_present<T>(handle: &Option<T>) -> bool {
    handle.is_some()
}
