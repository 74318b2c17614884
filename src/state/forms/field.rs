//! Form field identifiers and per-field storage

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;
use thiserror::Error;

/// Identifies one of the four login form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Address,
    Email,
    Password,
}

impl FieldId {
    /// All fields in display order
    pub const ALL: [FieldId; 4] = [
        FieldId::Name,
        FieldId::Address,
        FieldId::Email,
        FieldId::Password,
    ];

    /// Identifier used as the field key (`name`, `address`, ...)
    pub fn key(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Address => "address",
            FieldId::Email => "email",
            FieldId::Password => "password",
        }
    }

    /// Human readable label, also used in error messages
    pub fn label(self) -> &'static str {
        match self {
            FieldId::Name => "Name",
            FieldId::Address => "Address",
            FieldId::Email => "Email",
            FieldId::Password => "Password",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            FieldId::Name | FieldId::Address => FieldKind::Text,
            FieldId::Email => FieldKind::Email,
            FieldId::Password => FieldKind::Password,
        }
    }

    /// Position of the field in display order
    pub fn index(self) -> usize {
        match self {
            FieldId::Name => 0,
            FieldId::Address => 1,
            FieldId::Email => 2,
            FieldId::Password => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a string does not name a form field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field `{0}`")]
pub struct FieldIdError(pub String);

impl FromStr for FieldId {
    type Err = FieldIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|id| id.key() == s)
            .ok_or_else(|| FieldIdError(s.to_string()))
    }
}

/// How a field's value is entered and displayed.
///
/// Email carries no format enforcement; the kind only describes intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
}

impl FieldKind {
    pub fn is_masked(self) -> bool {
        matches!(self, FieldKind::Password)
    }
}

/// One value per form field.
///
/// The four slots are fixed, so the key set can never grow or shrink.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap<T> {
    pub name: T,
    pub address: T,
    pub email: T,
    pub password: T,
}

impl<T> FieldMap<T> {
    /// Build a map by computing each slot from its field id
    pub fn from_fn(mut f: impl FnMut(FieldId) -> T) -> Self {
        Self {
            name: f(FieldId::Name),
            address: f(FieldId::Address),
            email: f(FieldId::Email),
            password: f(FieldId::Password),
        }
    }

    pub fn get(&self, field: FieldId) -> &T {
        match field {
            FieldId::Name => &self.name,
            FieldId::Address => &self.address,
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
        }
    }

    pub fn get_mut(&mut self, field: FieldId) -> &mut T {
        match field {
            FieldId::Name => &mut self.name,
            FieldId::Address => &mut self.address,
            FieldId::Email => &mut self.email,
            FieldId::Password => &mut self.password,
        }
    }

    /// Iterate slots in display order
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &T)> {
        FieldId::ALL.into_iter().map(move |id| (id, self.get(id)))
    }
}

impl<T> Index<FieldId> for FieldMap<T> {
    type Output = T;

    fn index(&self, field: FieldId) -> &T {
        self.get(field)
    }
}

impl<T> IndexMut<FieldId> for FieldMap<T> {
    fn index_mut(&mut self, field: FieldId) -> &mut T {
        self.get_mut(field)
    }
}

/// Current user-entered text for each field
pub type FormValues = FieldMap<String>;

/// Validation message for each field; an empty string means valid
pub type FormErrors = FieldMap<String>;

/// An input-change notification: the named field now holds `value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub field: FieldId,
    pub value: String,
}

impl FieldChange {
    pub fn new(field: FieldId, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

impl FormValues {
    /// Return a copy with exactly `change.field` replaced
    pub fn with_change(&self, change: FieldChange) -> FormValues {
        let mut next = self.clone();
        next[change.field] = change.value;
        next
    }

    /// Display value for a field, masked when the field kind requires it
    pub fn display_value(&self, field: FieldId, mask_char: char) -> String {
        let value = self.get(field);
        if field.kind().is_masked() {
            std::iter::repeat(mask_char)
                .take(value.chars().count())
                .collect()
        } else {
            value.clone()
        }
    }
}
