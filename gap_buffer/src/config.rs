// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Capacity planning constants for [`GapBuffer`](crate::GapBuffer).

/// Starting value of the growth increment, in bytes.
pub const DEFAULT_GROW_INCREMENT: usize = 8;

/// The increment doubles once `grow_increment * ratio` drops below the allocated size.
pub const DEFAULT_GROWTH_RATIO: usize = 6;

/// [`compact()`](crate::GapBuffer::compact) halves the increment while
/// `grow_increment * ratio` exceeds the content length.
pub const DEFAULT_COMPACT_RATIO: usize = 3;

/// [`compact()`](crate::GapBuffer::compact) rounds the content length down to a multiple
/// of this before adding the increment back.
pub const COMPACT_ROUNDING: usize = 8;

/// How a [`GapBuffer`](crate::GapBuffer) grows and shrinks its arena.
///
/// The [`Default`] policy keeps the growth increment proportional to the buffer size, so
/// `N` single element appends cost `O(log N)` reallocations in total.
///
/// ```
/// use r3bl_gap_buffer::{GapBuffer, GrowthPolicy, ItemKind};
///
/// let policy = GrowthPolicy {
///     initial_grow_increment: 64,
///     ..GrowthPolicy::default()
/// };
/// let buffer = GapBuffer::with_growth_policy(ItemKind::Byte, policy);
/// assert_eq!(buffer.grow_increment(), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthPolicy {
    /// Growth increment a new buffer starts with.
    pub initial_grow_increment: usize,
    /// Floor for the increment when compacting.
    pub min_grow_increment: usize,
    pub growth_ratio: usize,
    pub compact_ratio: usize,
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            initial_grow_increment: DEFAULT_GROW_INCREMENT,
            min_grow_increment: DEFAULT_GROW_INCREMENT,
            growth_ratio: DEFAULT_GROWTH_RATIO,
            compact_ratio: DEFAULT_COMPACT_RATIO,
        }
    }
}

impl GrowthPolicy {
    /// The increment to use for the next reallocation of an arena of `size` bytes.
    #[must_use]
    pub fn next_grow_increment(&self, grow_increment: usize, size: usize) -> usize {
        if grow_increment.saturating_mul(self.growth_ratio) < size {
            grow_increment.saturating_mul(2)
        } else {
            grow_increment
        }
    }

    /// The increment to keep after compacting down to `content_length` bytes.
    #[must_use]
    pub fn compacted_grow_increment(
        &self,
        mut grow_increment: usize,
        content_length: usize,
    ) -> usize {
        while grow_increment > self.min_grow_increment
            && grow_increment.saturating_mul(self.compact_ratio) > content_length
        {
            grow_increment /= 2;
        }
        grow_increment
    }
}
