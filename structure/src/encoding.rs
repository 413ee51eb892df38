//! Field encodings and their wire tags.

use crate::Error;
use core::{fmt, str::FromStr};

/// Size of a single slot in bytes. Every encoding stores 16-bit units.
pub const UNIT_SIZE: usize = 2;

/// How the slots of a field are interpreted.
///
/// The set is closed: every codec decision is an exhaustive `match` over it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// A sequence of UTF-16 code units. Capacity is the maximum number of units.
    Utf16,
    /// A single unsigned 16-bit integer.
    U16,
}

impl Encoding {
    /// Returns the tag used to name this encoding in descriptors.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Encoding::Utf16 => "utf16",
            Encoding::U16 => "u16",
        }
    }

    /// Returns the number of slots a field occupies given its declared capacity.
    ///
    /// Integer fields always occupy one slot, regardless of capacity.
    pub const fn units(&self, capacity: usize) -> usize {
        match self {
            Encoding::Utf16 => capacity,
            Encoding::U16 => 1,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "utf16" => Ok(Encoding::Utf16),
            "u16" => Ok(Encoding::U16),
            _ => Err(Error::UnknownEncoding(tag.to_string())),
        }
    }
}
