//! Field names and the ordered field set a registry is created with.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

/// Errors related to field name and field set validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldSetError {
    /// A field name failed validation.
    #[error("invalid field name '{name}' at position {position}: {message}")]
    InvalidName {
        name: String,
        position: usize,
        message: String,
    },

    /// The same name was declared twice.
    #[error("duplicate field name '{name}' at position {position}")]
    Duplicate { name: String, position: usize },

    /// No field names were declared.
    #[error("field set must declare at least one field")]
    Empty,
}

/// A validated logical field name.
///
/// Field names are the `name` attributes controls are submitted under, so
/// almost anything goes: hyphens, brackets and non-ASCII text are all fine.
/// A name must not be empty, must not contain control characters and must
/// not carry leading or trailing whitespace.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FieldName(String);

impl FieldName {
    /// Parse and validate a single field name.
    ///
    /// ```rust
    /// use formbind_core::FieldName;
    ///
    /// assert!(FieldName::parse("user[email]").is_ok());
    /// assert!(FieldName::parse("").is_err());
    /// assert!(FieldName::parse(" padded").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, FieldSetError> {
        Self::validate(s, 0)?;
        Ok(FieldName(s.to_string()))
    }

    fn validate(name: &str, position: usize) -> Result<(), FieldSetError> {
        let invalid = |message: &str| FieldSetError::InvalidName {
            name: name.to_string(),
            position,
            message: message.to_string(),
        };

        if name.is_empty() {
            return Err(invalid("empty name"));
        }
        if name.trim() != name {
            return Err(invalid("leading or trailing whitespace"));
        }
        if let Some(c) = name.chars().find(|c| c.is_control()) {
            return Err(invalid(&format!("control character {:?}", c)));
        }

        Ok(())
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FieldName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for FieldName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for FieldName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FieldName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A closed set of field keys known at compile time.
///
/// Implement this on a fieldless enum to derive a [`FieldSet`] from it and
/// to address accessors without stringly-typed names:
///
/// ```rust
/// use formbind_core::{FieldKey, FieldSet};
///
/// #[derive(Clone, Copy)]
/// enum Login {
///     Username,
///     Password,
/// }
///
/// impl FieldKey for Login {
///     const ALL: &'static [Self] = &[Login::Username, Login::Password];
///
///     fn name(&self) -> &'static str {
///         match self {
///             Login::Username => "username",
///             Login::Password => "password",
///         }
///     }
/// }
///
/// let fields = FieldSet::of::<Login>().unwrap();
/// assert_eq!(fields.len(), 2);
/// assert!(fields.contains(Login::Password.name()));
/// ```
pub trait FieldKey: Copy + 'static {
    /// Every key, in declaration order.
    const ALL: &'static [Self];

    /// The field name this key binds to.
    fn name(&self) -> &'static str;
}

/// The ordered, duplicate-free set of field names a registry is built over.
///
/// Order is declaration order; it drives the iteration order of snapshots
/// and payloads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSet {
    names: Vec<FieldName>,
}

impl FieldSet {
    /// Build a field set from names, validating each one.
    pub fn new<I, S>(names: I) -> Result<Self, FieldSetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut validated = Vec::new();

        for (position, name) in names.into_iter().enumerate() {
            let name = name.as_ref();
            FieldName::validate(name, position)?;
            if !seen.insert(name.to_string()) {
                return Err(FieldSetError::Duplicate {
                    name: name.to_string(),
                    position,
                });
            }
            validated.push(FieldName(name.to_string()));
        }

        if validated.is_empty() {
            return Err(FieldSetError::Empty);
        }

        Ok(FieldSet { names: validated })
    }

    /// Build a field set from every key of a [`FieldKey`] enum.
    pub fn of<K: FieldKey>() -> Result<Self, FieldSetError> {
        Self::new(K::ALL.iter().map(|key| key.name()))
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the set declares no fields.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Check whether a name was declared.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Declaration index of a name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n.as_str() == name)
    }

    /// Iterate over names in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldName> {
        self.names.iter()
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = &'a FieldName;
    type IntoIter = std::slice::Iter<'a, FieldName>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

impl std::ops::Index<usize> for FieldSet {
    type Output = FieldName;

    fn index(&self, i: usize) -> &Self::Output {
        &self.names[i]
    }
}

/// Macro for declaring a field set from literals.
///
/// # Panics
///
/// Panics if the literals do not form a valid field set. Use
/// [`FieldSet::new`] for names that are not known at compile time.
///
/// ```rust
/// use formbind_core::fields;
///
/// let set = fields!["username", "password"];
/// assert_eq!(set.len(), 2);
/// ```
#[macro_export]
macro_rules! fields {
    ($($name:expr),+ $(,)?) => {
        $crate::FieldSet::new([$($name),+]).expect("invalid field set literal")
    };
}
