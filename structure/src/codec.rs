//! Encode and decode field values to and from their slots.
//!
//! # Text (`utf16`)
//!
//! A text field of capacity `C` is read back as exactly `C` UTF-16 code
//! units: the slot is fixed-width and no length is stored. Writing a value
//! shorter than `C` leaves the trailing slots as they were (zero on a fresh
//! buffer), so those come back as NUL characters:
//!
//! ```text
//! capacity = 5, set("Jack")
//! +------+------+------+------+------+
//! | 'J'  | 'a'  | 'c'  | 'k'  | 0x00 |  -> get() == "Jack\0"
//! +------+------+------+------+------+
//! ```
//!
//! Values longer than `C` are truncated (or rejected, see [crate::Overflow]).
//! Round-trip equality therefore only holds when the value's UTF-16 length
//! equals the capacity.
//!
//! Slots holding an unpaired surrogate (for example, when truncation splits
//! a surrogate pair) decode to U+FFFD, which preserves the code unit count.
//!
//! # Integer (`u16`)
//!
//! Integers are stored in the field's single slot modulo 2^16, so negative
//! inputs wrap per unsigned 16-bit arithmetic (`-1` reads back as `65535`).

use crate::{
    view::{View, ViewMut},
    Encoding, Error, Field, Overflow, Value,
};
use core::char::{decode_utf16, REPLACEMENT_CHARACTER};
use tracing::{trace, warn};

/// Writes `value` into the slots of `field`.
///
/// Fails with [Error::TypeMismatch] if the value kind disagrees with the
/// field's encoding, and with [Error::CapacityExceeded] if the text does not
/// fit and `overflow` is [Overflow::Reject]. On failure, the slots are untouched.
pub fn write(
    field: &Field,
    view: &mut ViewMut<'_>,
    value: &Value,
    overflow: Overflow,
) -> Result<(), Error> {
    match (field.encoding, value) {
        (Encoding::Utf16, Value::Text(text)) => write_utf16(field, view, text, overflow),
        (Encoding::U16, Value::Integer(n)) => {
            write_u16(view, *n);
            Ok(())
        }
        (expected @ Encoding::Utf16, Value::Integer(_))
        | (expected @ Encoding::U16, Value::Text(_)) => Err(Error::TypeMismatch {
            field: field.name.clone(),
            expected,
            found: value.kind(),
        }),
    }
}

/// Reads the value stored in `view` according to `encoding`.
pub fn read(encoding: Encoding, view: View<'_>) -> Value {
    match encoding {
        Encoding::Utf16 => Value::Text(read_utf16(view)),
        Encoding::U16 => Value::Integer(read_u16(view) as i64),
    }
}

fn write_utf16(
    field: &Field,
    view: &mut ViewMut<'_>,
    text: &str,
    overflow: Overflow,
) -> Result<(), Error> {
    let capacity = view.len();
    let found = text.encode_utf16().count();
    if found > capacity {
        match overflow {
            Overflow::Truncate => {
                trace!(field = %field.name, capacity, found, "truncating text");
            }
            Overflow::Reject => {
                warn!(field = %field.name, capacity, found, "rejecting text");
                return Err(Error::CapacityExceeded {
                    field: field.name.clone(),
                    capacity,
                    found,
                });
            }
        }
    }
    for (index, unit) in text.encode_utf16().take(capacity).enumerate() {
        view.set(index, unit);
    }
    Ok(())
}

fn read_utf16(view: View<'_>) -> String {
    decode_utf16(view.iter())
        .map(|unit| unit.unwrap_or(REPLACEMENT_CHARACTER))
        .collect()
}

fn write_u16(view: &mut ViewMut<'_>, n: i64) {
    // Truncating the two's complement representation is reduction modulo 2^16.
    view.set(0, n as u16);
}

fn read_u16(view: View<'_>) -> u16 {
    view.get(0).unwrap_or_default()
}
