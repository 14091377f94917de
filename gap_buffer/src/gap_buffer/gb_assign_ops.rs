// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Assignment: replacing a range of elements, and overwriting or removing a single
//! element.

use super::GapBuffer;
use crate::{Item, Items, Result};

impl GapBuffer {
    /// Replace the elements in `[lo, hi)` with `items`. The range is clamped into the
    /// buffer the way slicing is, so an out of bounds range degrades to an insertion at
    /// the end. An empty `items` deletes the range.
    ///
    /// # Errors
    ///
    /// - [`GapBufferError::Locked`](crate::GapBufferError::Locked) while pinned.
    /// - [`GapBufferError::TypeMismatch`](crate::GapBufferError::TypeMismatch) if
    ///   `items` is of a different kind. Nothing is deleted in that case.
    #[allow(single_use_lifetimes)]
    pub fn replace<'a>(
        &mut self,
        lo: usize,
        hi: usize,
        items: impl Into<Items<'a>>,
    ) -> Result<()> {
        let items = items.into();
        self.ensure_unlocked("replace")?;
        self.ensure_kind("replace", items.kind())?;
        let (lo, hi) = self.clamp_range(lo, hi);
        let width = self.item_width();
        self.delete_encoded(lo * width, (hi - lo) * width);
        self.insert_encoded(lo * width, &items.encode());
        Ok(())
    }

    /// Overwrite the element at `index` with `item`, or remove it when `item` is
    /// [`None`].
    ///
    /// # Errors
    ///
    /// - [`GapBufferError::Locked`](crate::GapBufferError::Locked) while pinned.
    /// - [`GapBufferError::TypeMismatch`](crate::GapBufferError::TypeMismatch) if
    ///   `item` is of a different kind.
    /// - [`GapBufferError::OutOfRange`](crate::GapBufferError::OutOfRange) if
    ///   `index >= len()`.
    pub fn set_item_at(&mut self, index: usize, item: Option<Item>) -> Result<()> {
        self.ensure_unlocked("set_item_at")?;
        if let Some(item) = item {
            self.ensure_kind("set_item_at", item.kind())?;
        }
        let (byte_position, byte_length) = self.check_range("set_item_at", index, 1)?;
        match item {
            Some(item) => {
                let physical = self.logical_to_physical(byte_position);
                item.encode_into(&mut self.storage[physical..physical + byte_length]);
            }
            None => self.delete_encoded(byte_position, byte_length),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{GapBuffer, GapBufferError, Item};

    #[test]
    fn test_replace_within_range() {
        let mut buffer = GapBuffer::from_bytes(b"hello world");
        buffer.replace(0, 5, b"howdy").unwrap();
        assert_eq!(buffer.to_raw_vec(), b"howdy world".to_vec());
        buffer.replace(5, 6, b"").unwrap();
        assert_eq!(buffer.to_raw_vec(), b"howdyworld".to_vec());
        buffer.replace(5, 5, b", ").unwrap();
        assert_eq!(buffer.to_raw_vec(), b"howdy, world".to_vec());
        buffer.assert_invariants();
    }

    #[test]
    fn test_replace_clamps() {
        let mut buffer = GapBuffer::from_integers(&[1, 2, 3]);
        buffer.replace(2, 100, &[9_i32, 9]).unwrap();
        assert_eq!(buffer.retrieve_integers(0, 4).unwrap(), vec![1, 2, 9, 9]);
        buffer.replace(10, 0, &[7_i32]).unwrap();
        assert_eq!(buffer.retrieve_integers(0, 5).unwrap(), vec![1, 2, 9, 9, 7]);
    }

    #[test]
    fn test_replace_wrong_kind_deletes_nothing() {
        let mut buffer = GapBuffer::from_text("abc");
        let result = buffer.replace(0, 3, b"xyz");
        assert!(matches!(result, Err(GapBufferError::TypeMismatch { .. })));
        assert_eq!(buffer.retrieve(0, 3).unwrap().to_string_lossy(), "abc");
    }

    #[test]
    fn test_set_item_at() {
        let mut buffer = GapBuffer::from_text("cat");
        buffer.set_item_at(0, Some(Item::WideChar(u16::from(b'b')))).unwrap();
        assert_eq!(buffer.retrieve(0, 3).unwrap().to_string_lossy(), "bat");

        buffer.insert(1, "o").unwrap();
        // Gap now sits after "bo", the write lands in segment 2.
        buffer.set_item_at(3, Some(Item::WideChar(u16::from(b'h')))).unwrap();
        assert_eq!(buffer.retrieve(0, 4).unwrap().to_string_lossy(), "boah");

        buffer.set_item_at(1, None).unwrap();
        assert_eq!(buffer.retrieve(0, 3).unwrap().to_string_lossy(), "bah");
        buffer.assert_invariants();
    }

    #[test]
    fn test_set_item_at_errors() {
        let mut buffer = GapBuffer::from_integers(&[1, 2]);
        assert!(matches!(
            buffer.set_item_at(2, Some(Item::Integer(0))),
            Err(GapBufferError::OutOfRange { .. })
        ));
        assert!(matches!(
            buffer.set_item_at(0, Some(Item::Byte(0))),
            Err(GapBufferError::TypeMismatch { .. })
        ));
        assert!(matches!(
            buffer.set_item_at(2, None),
            Err(GapBufferError::OutOfRange { .. })
        ));

        let pin = buffer.pin_raw(crate::BufferAppearance::Contiguous).unwrap();
        assert!(matches!(
            buffer.set_item_at(0, None),
            Err(GapBufferError::Locked { pin_count: 1, .. })
        ));
        buffer.unpin_raw(pin).unwrap();
        assert_eq!(buffer.retrieve_integers(0, 2).unwrap(), vec![1, 2]);
    }
}
