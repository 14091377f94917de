// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Capacity planning for [`GapBuffer`]: growing the arena ahead of an insertion,
//! reallocating it, and compacting it back down.
//!
//! # Growth
//!
//! The arena only grows when the gap is too small for an insertion. Each time it grows
//! it gains the insertion length plus `grow_increment` bytes of slack, and
//! `grow_increment` doubles whenever it falls below `1 / growth_ratio` of the arena
//! size. The slack is therefore proportional to the size, and `N` appends cost
//! `O(log N)` reallocations.
//!
//! # Reallocation
//!
//! Reallocation always parks the gap at the end first, so the content is copied in a
//! single run and the new slack is appended to the existing gap.
//!
//! # Capacity overflow
//!
//! An arena never exceeds `isize::MAX` bytes. [`reserve()`](GapBuffer::reserve) reports
//! a larger request as [`GapBufferError::CapacityOverflow`]. Every other path that grows
//! the arena panics instead, the way [`Vec`] growth does.

use super::{GapBuffer, NULL_BYTE};
use crate::{GapBufferError, Result};

/// Largest arena a [`Vec<u8>`] can hold.
const MAX_ARENA_SIZE: usize = isize::MAX.unsigned_abs();

impl GapBuffer {
    /// Make sure the gap can take `insertion_length` more bytes and still be non-empty.
    ///
    /// # Panics
    ///
    /// If the grown arena would exceed `isize::MAX` bytes.
    pub(crate) fn ensure_room(&mut self, insertion_length: usize) {
        if let Err(error) = self.try_ensure_room("ensure_room", insertion_length) {
            panic!("{error}");
        }
    }

    /// As [`ensure_room()`](Self::ensure_room), reporting an oversized arena as
    /// [`GapBufferError::CapacityOverflow`] with nothing changed.
    pub(crate) fn try_ensure_room(
        &mut self,
        operation: &'static str,
        insertion_length: usize,
    ) -> Result<()> {
        if self.gap_length > insertion_length {
            return Ok(());
        }
        let grow_increment = self
            .policy
            .next_grow_increment(self.grow_increment, self.size());
        let new_size = self
            .size()
            .checked_add(insertion_length)
            .and_then(|it| it.checked_add(grow_increment))
            .filter(|&it| it <= MAX_ARENA_SIZE)
            .ok_or(GapBufferError::CapacityOverflow {
                operation,
                additional_items: insertion_length / self.item_width(),
            })?;
        self.grow_increment = grow_increment;
        self.reallocate(new_size);
        Ok(())
    }

    /// Move the content into a fresh arena of `new_size` bytes. `new_size` must be at
    /// least `content_length`.
    pub(crate) fn reallocate(&mut self, new_size: usize) {
        debug_assert!(new_size >= self.content_length);
        self.gap_to(self.content_length);

        let old_size = self.size();
        let mut storage = Vec::with_capacity(new_size);
        storage.extend_from_slice(&self.storage[..self.content_length]);
        storage.resize(new_size, NULL_BYTE);
        self.storage = storage;
        self.gap_length = new_size - self.content_length;
        self.reallocation_count += 1;

        tracing::trace!(
            message = "GapBuffer::reallocate",
            old_size,
            new_size,
            content_length = self.content_length,
            grow_increment = self.grow_increment
        );
    }

    /// Shrink the arena to fit the content plus a reduced growth increment. The growth
    /// increment is halved while it is large relative to the content, and the gap always
    /// keeps at least one byte.
    ///
    /// # Errors
    ///
    /// [`GapBufferError::Locked`](crate::GapBufferError::Locked) while pinned.
    pub fn compact(&mut self) -> Result<()> {
        self.ensure_unlocked("compact")?;
        let old_size = self.size();
        self.grow_increment = self
            .policy
            .compacted_grow_increment(self.grow_increment, self.content_length);
        let rounded = self.content_length / crate::COMPACT_ROUNDING * crate::COMPACT_ROUNDING;
        let new_size = (rounded + self.grow_increment).max(self.content_length + 1);
        self.reallocate(new_size);

        tracing::debug!(
            message = "GapBuffer::compact",
            old_size,
            new_size,
            grow_increment = self.grow_increment
        );
        Ok(())
    }

    /// Make room for `additional_items` more elements without inserting anything.
    ///
    /// # Errors
    ///
    /// - [`GapBufferError::Locked`] while pinned.
    /// - [`GapBufferError::CapacityOverflow`] if the arena would exceed `isize::MAX`
    ///   bytes. The buffer is unchanged.
    pub fn reserve(&mut self, additional_items: usize) -> Result<()> {
        self.ensure_unlocked("reserve")?;
        let additional_bytes = additional_items
            .checked_mul(self.item_width())
            .ok_or(GapBufferError::CapacityOverflow {
                operation: "reserve",
                additional_items,
            })?;
        self.try_ensure_room("reserve", additional_bytes)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{GapBuffer, GapBufferError, ItemKind};

    #[test]
    fn test_first_insert_allocates_with_slack() {
        let mut buffer = GapBuffer::new(ItemKind::Byte);
        buffer.insert(0, b"abc").unwrap();
        // 0 + 3 + 8.
        assert_eq!(buffer.size(), 11);
        assert_eq!(buffer.gap_length(), 8);
        assert_eq!(buffer.reallocation_count(), 1);
        buffer.assert_invariants();
    }

    #[test]
    fn test_gap_never_fills_completely() {
        let mut buffer = GapBuffer::new(ItemKind::Byte);
        buffer.insert(0, b"abc").unwrap();
        buffer.insert(3, b"12345678").unwrap();
        assert!(buffer.gap_length() >= 1);
        assert_eq!(buffer.reallocation_count(), 2);
        buffer.assert_invariants();
    }

    #[test]
    fn test_grow_increment_doubles_with_size() {
        let mut buffer = GapBuffer::new(ItemKind::Byte);
        for _ in 0..200 {
            buffer.extend(b"x").unwrap();
        }
        assert!(buffer.grow_increment() > 8);
        assert_eq!(buffer.len(), 200);
        buffer.assert_invariants();
    }

    #[test]
    fn test_reallocate_keeps_content_across_gap() {
        let mut buffer = GapBuffer::from_bytes(b"hello world");
        buffer.gap_to(5);
        buffer.reallocate(64);
        assert_eq!(buffer.size(), 64);
        assert_eq!(buffer.segment1_length(), buffer.content_length());
        assert_eq!(buffer.to_raw_vec(), b"hello world".to_vec());
        buffer.assert_invariants();
    }

    #[test]
    fn test_compact_shrinks_and_preserves_content() {
        let mut buffer = GapBuffer::new(ItemKind::Integer);
        for it in 0..1000_i32 {
            buffer.extend(&[it]).unwrap();
        }
        buffer.delete(10, 990).unwrap();
        let before = buffer.size();
        buffer.compact().unwrap();
        assert!(buffer.size() < before);
        assert!(buffer.gap_length() >= 1);
        assert_eq!(buffer.retrieve_integers(0, 10).unwrap(), (0..10).collect::<Vec<_>>());
        buffer.assert_invariants();
    }

    #[test]
    fn test_compact_empty_buffer_keeps_a_gap() {
        let mut buffer = GapBuffer::new(ItemKind::WideChar);
        buffer.compact().unwrap();
        assert_eq!(buffer.size(), 8);
        assert_eq!(buffer.gap_length(), 8);
        buffer.assert_invariants();
    }

    #[test]
    fn test_reserve_avoids_reallocation() {
        let mut buffer = GapBuffer::new(ItemKind::WideChar);
        buffer.reserve(100).unwrap();
        let count = buffer.reallocation_count();
        for _ in 0..100 {
            buffer.extend("a").unwrap();
        }
        assert_eq!(buffer.reallocation_count(), count);
    }

    #[test]
    fn test_compact_and_reserve_refused_while_pinned() {
        let mut buffer = GapBuffer::from_bytes(b"abc");
        let pin = buffer.pin_raw(crate::BufferAppearance::Segmented).unwrap();
        let layout = buffer.layout();
        assert!(matches!(buffer.compact(), Err(GapBufferError::Locked { .. })));
        assert!(matches!(buffer.reserve(10), Err(GapBufferError::Locked { .. })));
        assert_eq!(buffer.layout(), layout);
        buffer.unpin_raw(pin).unwrap();
        buffer.compact().unwrap();
    }

    #[test]
    fn test_reserve_beyond_arena_limit_is_an_error() {
        let mut buffer = GapBuffer::from_bytes(b"abc");
        let layout = buffer.layout();

        assert_eq!(
            buffer.reserve(usize::MAX),
            Err(GapBufferError::CapacityOverflow {
                operation: "reserve",
                additional_items: usize::MAX,
            })
        );
        assert_eq!(
            buffer.reserve(isize::MAX.unsigned_abs()),
            Err(GapBufferError::CapacityOverflow {
                operation: "reserve",
                additional_items: isize::MAX.unsigned_abs(),
            })
        );
        assert_eq!(buffer.layout(), layout);

        let mut integers = GapBuffer::from_integers(&[1]);
        assert!(matches!(
            integers.reserve(usize::MAX / 2),
            Err(GapBufferError::CapacityOverflow { .. })
        ));

        buffer.reserve(16).unwrap();
        assert!(buffer.gap_length() > 16);
    }
}
