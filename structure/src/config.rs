//! Configuration for [crate::Structure].

/// What to do when a text value has more UTF-16 code units than its field holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Overflow {
    /// Keep the leading code units that fit and drop the rest.
    #[default]
    Truncate,

    /// Return [crate::Error::CapacityExceeded] and leave the field untouched.
    Reject,
}

/// Configuration for [crate::Structure].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Policy applied to text values that exceed their field's capacity.
    pub overflow: Overflow,
}
