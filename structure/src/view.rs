//! Typed windows over a field's slots.
//!
//! A view borrows the bytes of exactly one field and exposes them as a
//! fixed number of 16-bit slots, stored little-endian.

use crate::encoding::UNIT_SIZE;
use bytes::{Buf, BufMut};

/// Read-only view over the slots of one field.
#[derive(Clone, Copy, Debug)]
pub struct View<'a> {
    bytes: &'a [u8],
}

impl<'a> View<'a> {
    /// Wraps a byte range. A trailing byte that does not fill a slot is ignored.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Returns the number of slots.
    pub fn len(&self) -> usize {
        self.bytes.len() / UNIT_SIZE
    }

    /// Returns true if the view has no slots.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the slot at `index`, or `None` if out of bounds.
    pub fn get(&self, index: usize) -> Option<u16> {
        let start = index.checked_mul(UNIT_SIZE)?;
        let end = start.checked_add(UNIT_SIZE)?;
        let mut slot = self.bytes.get(start..end)?;
        Some(slot.get_u16_le())
    }

    /// Iterates over all slots in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = u16> + 'a {
        self.bytes
            .chunks_exact(UNIT_SIZE)
            .map(|mut slot| slot.get_u16_le())
    }

    /// Returns the underlying bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

/// Mutable view over the slots of one field.
#[derive(Debug)]
pub struct ViewMut<'a> {
    bytes: &'a mut [u8],
}

impl<'a> ViewMut<'a> {
    /// Wraps a byte range. A trailing byte that does not fill a slot is ignored.
    pub fn new(bytes: &'a mut [u8]) -> Self {
        Self { bytes }
    }

    /// Returns the number of slots.
    pub fn len(&self) -> usize {
        self.bytes.len() / UNIT_SIZE
    }

    /// Returns true if the view has no slots.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stores `value` in the slot at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set(&mut self, index: usize, value: u16) {
        let start = index * UNIT_SIZE;
        let mut slot = &mut self.bytes[start..start + UNIT_SIZE];
        slot.put_u16_le(value);
    }

    /// Zeroes every slot.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Reborrows as a read-only view.
    pub fn as_view(&self) -> View<'_> {
        View::new(&self.bytes[..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_little_endian_slots() {
        let mut bytes = [0u8; 4];
        let mut view = ViewMut::new(&mut bytes);
        assert_eq!(view.len(), 2);
        view.set(0, 0x0102);
        view.set(1, 0xfffe);
        assert_eq!(bytes, [0x02, 0x01, 0xfe, 0xff]);

        let view = View::new(&bytes);
        assert_eq!(view.get(0), Some(0x0102));
        assert_eq!(view.get(1), Some(0xfffe));
        assert_eq!(view.get(2), None);
        assert_eq!(view.iter().collect::<Vec<_>>(), vec![0x0102, 0xfffe]);
    }

    #[test]
    fn test_clear() {
        let mut bytes = [0xaau8; 6];
        let mut view = ViewMut::new(&mut bytes);
        view.clear();
        assert!(view.as_view().iter().all(|slot| slot == 0));
        assert!(!view.is_empty());
    }

    #[test]
    fn test_trailing_byte_ignored() {
        let bytes = [1u8, 0, 9];
        let view = View::new(&bytes);
        assert_eq!(view.len(), 1);
        assert_eq!(view.get(0), Some(1));
        assert_eq!(view.get(1), None);
        assert_eq!(view.iter().count(), 1);
    }

    #[test]
    #[should_panic]
    fn test_set_out_of_bounds() {
        let mut bytes = [0u8; 2];
        ViewMut::new(&mut bytes).set(1, 7);
    }
}
