// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The [`GapBuffer`] struct, its constructors, debug introspection, and the bounds and
//! addressing helpers every other operation goes through.

use std::{ops::Range,
          sync::atomic::{AtomicU64, Ordering}};

use crate::{GapBufferError, GrowthPolicy, Item, ItemKind, Items, Result};

/// Value the hole and fresh capacity are filled with. The gap is never exposed, this
/// only keeps the arena free of stale content.
pub const NULL_BYTE: u8 = b'\0';

static NEXT_BUFFER_ID: AtomicU64 = AtomicU64::new(1);

/// A mutable sequence of fixed-width elements stored in one contiguous arena with a
/// movable hole.
///
/// ```text
///            segment 1              gap                segment 2
///  ┌──────────────────────┬───────────────────┬──────────────────────────┐
///  │ h  e  l  l  o        │ .  .  .  .  .  .  │  w  o  r  l  d           │
///  └──────────────────────┴───────────────────┴──────────────────────────┘
///  0               segment1_length   segment1_length + gap_length       size
/// ```
///
/// Invariants, maintained by every operation:
/// - `gap_length == size - content_length`
/// - `segment1_length <= content_length`
/// - `content_length` and `segment1_length` are multiples of the item width
///
/// Positions and lengths in the public API are counted in elements. The arena is
/// addressed in bytes, only through [`logical_to_physical()`].
///
/// ```
/// use r3bl_gap_buffer::GapBuffer;
///
/// let mut buffer = GapBuffer::from_bytes(b"hello");
/// buffer.insert(5, b" world").unwrap();
/// buffer.delete(0, 1).unwrap();
/// assert_eq!(buffer.retrieve(0, 10).unwrap().to_string_lossy(), "ello world");
/// ```
///
/// [`logical_to_physical()`]: GapBuffer::logical_to_physical
#[derive(Debug)]
pub struct GapBuffer {
    /// Contiguous arena, `storage.len()` is the allocated size.
    pub(crate) storage: Vec<u8>,
    pub(crate) content_length: usize,
    pub(crate) segment1_length: usize,
    pub(crate) gap_length: usize,
    pub(crate) grow_increment: usize,
    pub(crate) item_kind: ItemKind,
    /// Outstanding zero-copy views. Mutation is refused while non-zero.
    pub(crate) pin_count: usize,
    pub(crate) policy: GrowthPolicy,
    pub(crate) reallocation_count: usize,
    /// Ties a [`crate::RawPin`] to the buffer that issued it.
    pub(crate) id: u64,
}

/// Snapshot of the internal layout, for tests and debugging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapLayout {
    pub size: usize,
    pub content_length: usize,
    pub segment1_length: usize,
    pub gap_length: usize,
    pub grow_increment: usize,
    pub item_width: usize,
    pub item_kind: ItemKind,
    pub pin_count: usize,
    pub reallocation_count: usize,
}

impl GapBuffer {
    /// Create an empty buffer of the given kind. No memory is allocated until the first
    /// insertion.
    #[must_use]
    pub fn new(item_kind: ItemKind) -> Self {
        Self::with_growth_policy(item_kind, GrowthPolicy::default())
    }

    #[must_use]
    pub fn with_growth_policy(item_kind: ItemKind, policy: GrowthPolicy) -> Self {
        Self {
            storage: Vec::new(),
            content_length: 0,
            segment1_length: 0,
            gap_length: 0,
            grow_increment: policy.initial_grow_increment,
            item_kind,
            pin_count: 0,
            policy,
            reallocation_count: 0,
            id: NEXT_BUFFER_ID.fetch_add(1, Ordering::SeqCst),
        }
    }

    /// Create an empty buffer whose arena already holds `item_capacity` elements.
    #[must_use]
    pub fn with_capacity(item_kind: ItemKind, item_capacity: usize) -> Self {
        let mut it = Self::new(item_kind);
        let byte_capacity = item_capacity.saturating_mul(item_kind.width());
        if byte_capacity > 0 {
            it.reallocate(byte_capacity);
        }
        it
    }

    /// Create a buffer whose kind is taken from `items`.
    #[must_use]
    #[allow(single_use_lifetimes)]
    pub fn from_items<'a>(items: impl Into<Items<'a>>) -> Self {
        let items = items.into();
        let mut it = Self::new(items.kind());
        it.insert_encoded(0, &items.encode());
        it
    }

    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self { Self::from_items(bytes) }

    /// Create a [`ItemKind::WideChar`] buffer holding the UTF-16 code units of `text`.
    #[must_use]
    pub fn from_text(text: &str) -> Self { Self::from_items(text) }

    #[must_use]
    pub fn from_wide(units: &[u16]) -> Self { Self::from_items(units) }

    #[must_use]
    pub fn from_integers(values: &[i32]) -> Self { Self::from_items(values) }

    /// Create an [`ItemKind::Integer`] buffer from any integer-producing iterable.
    ///
    /// # Errors
    ///
    /// [`GapBufferError::TypeMismatch`] if an element does not fit in an [`i32`].
    pub fn try_from_iter<I, T>(source: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: TryInto<i32>,
    {
        let mut it = Self::new(ItemKind::Integer);
        it.insert_from_iter(0, source)?;
        Ok(it)
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize { self.content_length / self.item_width() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.content_length == 0 }

    #[must_use]
    pub fn item_kind(&self) -> ItemKind { self.item_kind }

    #[must_use]
    pub fn item_width(&self) -> usize { self.item_kind.width() }

    /// Allocated arena size in bytes.
    #[must_use]
    pub fn size(&self) -> usize { self.storage.len() }

    #[must_use]
    pub fn content_length(&self) -> usize { self.content_length }

    #[must_use]
    pub fn segment1_length(&self) -> usize { self.segment1_length }

    #[must_use]
    pub fn gap_length(&self) -> usize { self.gap_length }

    #[must_use]
    pub fn grow_increment(&self) -> usize { self.grow_increment }

    #[must_use]
    pub fn pin_count(&self) -> usize { self.pin_count }

    #[must_use]
    pub fn is_pinned(&self) -> bool { self.pin_count > 0 }

    #[must_use]
    pub fn reallocation_count(&self) -> usize { self.reallocation_count }

    #[must_use]
    pub fn growth_policy(&self) -> GrowthPolicy { self.policy }

    #[must_use]
    pub fn layout(&self) -> GapLayout {
        GapLayout {
            size: self.size(),
            content_length: self.content_length,
            segment1_length: self.segment1_length,
            gap_length: self.gap_length,
            grow_increment: self.grow_increment,
            item_width: self.item_width(),
            item_kind: self.item_kind,
            pin_count: self.pin_count,
            reallocation_count: self.reallocation_count,
        }
    }

    /// Map a logical byte position to its offset in the arena, skipping the gap.
    #[must_use]
    pub fn logical_to_physical(&self, byte_position: usize) -> usize {
        if byte_position < self.segment1_length {
            byte_position
        } else {
            byte_position + self.gap_length
        }
    }

    /// The arena ranges holding logical bytes `[byte_position, byte_position +
    /// byte_length)`: the part before the gap, then the part after it. Either may be
    /// empty.
    pub(crate) fn physical_ranges(
        &self,
        byte_position: usize,
        byte_length: usize,
    ) -> (Range<usize>, Range<usize>) {
        let in_segment1 = self
            .segment1_length
            .saturating_sub(byte_position)
            .min(byte_length);
        let first = self.logical_to_physical(byte_position);
        let second = self.logical_to_physical(byte_position + in_segment1);
        (
            first..first + in_segment1,
            second..second + (byte_length - in_segment1),
        )
    }

    /// The two physical segments, in logical order.
    pub(crate) fn segments(&self) -> (&[u8], &[u8]) {
        let (first, second) = self.physical_ranges(0, self.content_length);
        (&self.storage[first], &self.storage[second])
    }

    pub(crate) fn ensure_unlocked(&self, operation: &'static str) -> Result<()> {
        if self.pin_count > 0 {
            return Err(GapBufferError::Locked {
                operation,
                pin_count: self.pin_count,
            });
        }
        Ok(())
    }

    pub(crate) fn ensure_kind(&self, operation: &'static str, found: ItemKind) -> Result<()> {
        if found != self.item_kind {
            return Err(GapBufferError::type_mismatch(
                operation,
                self.item_kind.as_ref(),
                found.as_ref(),
            ));
        }
        Ok(())
    }

    /// Validate the element range `[position, position + length)` and convert it to
    /// bytes.
    pub(crate) fn check_range(
        &self,
        operation: &'static str,
        position: usize,
        length: usize,
    ) -> Result<(usize, usize)> {
        let element_count = self.len();
        match position.checked_add(length) {
            Some(end) if end <= element_count => {
                let width = self.item_width();
                Ok((position * width, length * width))
            }
            _ => Err(GapBufferError::OutOfRange {
                operation,
                position,
                length,
                element_count,
            }),
        }
    }

    /// Validate an insertion point, which may equal the element count.
    pub(crate) fn check_insert_position(
        &self,
        operation: &'static str,
        position: usize,
    ) -> Result<usize> {
        self.check_range(operation, position, 0)
            .map(|(byte_position, _)| byte_position)
    }

    /// Clamp `[lo, hi)` into `[0, len]` with `hi >= lo`, the way slicing does.
    pub(crate) fn clamp_range(&self, lo: usize, hi: usize) -> (usize, usize) {
        let element_count = self.len();
        let lo = lo.min(element_count);
        (lo, hi.clamp(lo, element_count))
    }

    pub(crate) fn decode_at(&self, byte_position: usize) -> Item {
        let physical = self.logical_to_physical(byte_position);
        Item::decode(
            self.item_kind,
            &self.storage[physical..physical + self.item_width()],
        )
    }

    /// An empty buffer with the same kind and growth policy.
    pub(crate) fn empty_like(&self) -> Self {
        Self::with_growth_policy(self.item_kind, self.policy)
    }

    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        assert_eq!(self.gap_length, self.size() - self.content_length);
        assert!(self.segment1_length <= self.content_length);
        assert!(self.content_length.is_multiple_of(self.item_width()));
        assert!(self.segment1_length.is_multiple_of(self.item_width()));
    }
}

impl Default for GapBuffer {
    fn default() -> Self { Self::new(ItemKind::default()) }
}

/// Deep copy. The copy is never pinned, whatever the state of the original.
impl Clone for GapBuffer {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            pin_count: 0,
            id: NEXT_BUFFER_ID.fetch_add(1, Ordering::SeqCst),
            ..*self
        }
    }
}

impl FromIterator<i32> for GapBuffer {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self::from_items(iter.into_iter().collect::<Vec<_>>())
    }
}
