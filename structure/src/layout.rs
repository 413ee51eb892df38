//! Place fields back to back within a single buffer.
//!
//! # Format
//!
//! Fields occupy consecutive, non-overlapping byte ranges in declaration
//! order. Every slot is 2 bytes:
//!
//! ```text
//! [("name", utf16, 4), ("lastName", utf16, 5), ("age", u16)]
//!
//! +---+---+...+---+---+---+---+...+---+---+---+---+
//! | 0 | 1 |   | 7 | 8 | 9 |   |16 |17 |18 |19 |
//! +---+---+...+---+---+---+---+...+---+---+---+---+
//! |   name (4x2)  |  lastName (5x2)   |age (2)|
//! +---+---+...+---+---+---+---+...+---+---+---+---+
//! ```

use crate::{encoding::UNIT_SIZE, Encoding, Error, FieldDescriptor};
use core::ops::Range;
use std::collections::HashMap;
use tracing::debug;

/// Default capacity of a field declared without one.
pub const DEFAULT_CAPACITY: usize = 1;

/// A field placed within a [Layout].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    /// Name used to address the field.
    pub name: String,

    /// How the field's slots are interpreted.
    pub encoding: Encoding,

    /// Byte offset of the field within the buffer.
    pub offset: usize,

    /// Number of 16-bit slots in the field.
    pub units: usize,
}

impl Field {
    /// Returns the length of the field in bytes.
    pub fn len(&self) -> usize {
        self.units * UNIT_SIZE
    }

    /// Returns true if the field has no slots. Never true for a field produced
    /// by [Layout::build].
    pub fn is_empty(&self) -> bool {
        self.units == 0
    }

    /// Returns the byte range of the field within the buffer.
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.len()
    }
}

/// The placement of every field of a structure.
///
/// A layout is immutable once built and may back any number of
/// [crate::Structure]s, each with its own buffer.
#[derive(Clone, Debug, Default)]
pub struct Layout {
    fields: Vec<Field>,
    index: HashMap<String, usize>,
    size: usize,
}

impl Layout {
    /// Validates `descriptors` and places them in declaration order.
    ///
    /// Rejects empty names and explicit capacities of zero with
    /// [Error::InvalidDescriptor], and repeated names with [Error::DuplicateField].
    pub fn build<I>(descriptors: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = FieldDescriptor>,
    {
        let mut layout = Self::default();
        for descriptor in descriptors {
            let FieldDescriptor {
                name,
                encoding,
                capacity,
            } = descriptor;
            if name.is_empty() {
                return Err(Error::InvalidDescriptor(name, "empty name"));
            }
            if layout.index.contains_key(&name) {
                return Err(Error::DuplicateField(name));
            }
            let capacity = capacity.unwrap_or(DEFAULT_CAPACITY);
            if capacity == 0 {
                return Err(Error::InvalidDescriptor(name, "capacity must be positive"));
            }

            // Place the field after the previous one
            let units = encoding.units(capacity);
            let Some(size) = units
                .checked_mul(UNIT_SIZE)
                .and_then(|len| layout.size.checked_add(len))
            else {
                return Err(Error::InvalidDescriptor(name, "size overflow"));
            };
            layout.index.insert(name.clone(), layout.fields.len());
            layout.fields.push(Field {
                name,
                encoding,
                offset: layout.size,
                units,
            });
            layout.size = size;
        }
        debug!(fields = layout.fields.len(), size = layout.size, "built layout");
        Ok(layout)
    }

    /// Returns the field named `name`, if any.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.index.get(name).map(|&i| &self.fields[i])
    }

    /// Returns all fields in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns the total size of the buffer in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the layout has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
