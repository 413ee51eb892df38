//! Field descriptors: the input to [crate::Layout::build].

use crate::{Encoding, Error};

/// Describes a named, typed, fixed-capacity field.
///
/// Descriptors are not validated until they are passed to [crate::Layout::build].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Name used to address the field.
    pub name: String,

    /// How the field's slots are interpreted.
    pub encoding: Encoding,

    /// Maximum number of UTF-16 code units for text fields. Ignored for
    /// integer fields. Defaults to 1 when `None`.
    pub capacity: Option<usize>,
}

impl FieldDescriptor {
    /// Creates a descriptor with the default capacity.
    pub fn new(name: impl Into<String>, encoding: Encoding) -> Self {
        Self {
            name: name.into(),
            encoding,
            capacity: None,
        }
    }

    /// Creates a text descriptor holding up to `capacity` code units.
    pub fn utf16(name: impl Into<String>, capacity: usize) -> Self {
        Self::new(name, Encoding::Utf16).with_capacity(capacity)
    }

    /// Creates an unsigned 16-bit integer descriptor.
    pub fn u16(name: impl Into<String>) -> Self {
        Self::new(name, Encoding::U16)
    }

    /// Sets the capacity of the descriptor.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }
}

impl TryFrom<(&str, &str)> for FieldDescriptor {
    type Error = Error;

    fn try_from((name, tag): (&str, &str)) -> Result<Self, Self::Error> {
        Ok(Self::new(name, tag.parse()?))
    }
}

impl TryFrom<(&str, &str, usize)> for FieldDescriptor {
    type Error = Error;

    fn try_from((name, tag, capacity): (&str, &str, usize)) -> Result<Self, Self::Error> {
        Ok(Self::new(name, tag.parse()?).with_capacity(capacity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tuples() {
        let name = FieldDescriptor::try_from(("name", "utf16", 4usize)).unwrap();
        assert_eq!(name, FieldDescriptor::utf16("name", 4));

        let age = FieldDescriptor::try_from(("age", "u16")).unwrap();
        assert_eq!(age, FieldDescriptor::u16("age"));
        assert_eq!(age.capacity, None);
    }

    #[test]
    fn test_unknown_tag() {
        let err = FieldDescriptor::try_from(("age", "i16")).unwrap_err();
        assert_eq!(err, Error::UnknownEncoding("i16".into()));
    }
}
