// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Zero-copy access to the content of a [`GapBuffer`].
//!
//! A view into the arena stays valid only as long as nothing reallocates the arena or
//! moves the gap. Every view is therefore bracketed by a pin: pinning increments
//! [`GapBuffer::pin_count()`], and while it is non-zero every mutating operation fails
//! with [`GapBufferError::Locked`] and leaves the buffer unchanged.
//!
//! There are two ways to pin:
//!
//! 1. [`GapBuffer::pin()`] returns a [`PinGuard`] that borrows the buffer and unpins on
//!    drop, on every exit path including unwinding. Use this from Rust.
//! 2. [`GapBuffer::pin_raw()`] returns a [`RawPin`] token holding pointers and lengths,
//!    for adapters whose consumer holds the view across calls where no Rust borrow can
//!    express it. The token must be handed back to [`GapBuffer::unpin_raw()`]. A token
//!    that is dropped instead leaves the buffer locked. A token handed to the wrong
//!    buffer comes back inside a [`RejectedPin`], so it can still reach its issuer.
//!
//! # Appearance
//!
//! A view either shows the content as one run ([`BufferAppearance::Contiguous`], which
//! moves the gap to the end first) or as the two segments on either side of the gap
//! ([`BufferAppearance::Segmented`], which moves nothing).
//!
//! ```text
//! Contiguous   │ h e l l o   w o r l d │ . . . . │
//!              └──────── segment ──────┘
//! Segmented    │ h e l l o │ . . . . │   w o r l d │
//!              └─ seg 1 ───┘         └── seg 2 ────┘
//! ```

use std::{ops::Range, ptr::NonNull};

use smallvec::{SmallVec, smallvec};
use strum_macros::{Display, EnumIter, EnumString};

use super::GapBuffer;
use crate::{GapBufferError, ItemKind, Result};

/// How a pinned view presents the content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum BufferAppearance {
    /// One run. Pinning moves the gap behind the content first.
    #[default]
    Contiguous,
    /// Two runs, segment 1 then segment 2. The gap stays where it is.
    Segmented,
}

/// Scoped zero-copy view of a [`GapBuffer`], created by [`GapBuffer::pin()`].
#[derive(Debug)]
pub struct PinGuard<'a> {
    buffer: &'a mut GapBuffer,
    appearance: BufferAppearance,
}

impl PinGuard<'_> {
    #[must_use]
    pub fn appearance(&self) -> BufferAppearance { self.appearance }

    #[must_use]
    pub fn item_kind(&self) -> ItemKind { self.buffer.item_kind }

    /// Length of the content in bytes.
    #[must_use]
    pub fn len_bytes(&self) -> usize { self.buffer.content_length }

    /// The encoded content. One slice for [`BufferAppearance::Contiguous`], two for
    /// [`BufferAppearance::Segmented`]. Slices may be empty.
    #[must_use]
    pub fn segments(&self) -> SmallVec<[&[u8]; 2]> {
        self.buffer
            .view_ranges(self.appearance)
            .into_iter()
            .map(|range| &self.buffer.storage[range])
            .collect()
    }

    /// The content as one run, if this view is contiguous.
    #[must_use]
    pub fn as_contiguous(&self) -> Option<&[u8]> {
        match self.appearance {
            BufferAppearance::Contiguous => {
                Some(&self.buffer.storage[..self.buffer.content_length])
            }
            BufferAppearance::Segmented => None,
        }
    }

    /// Writable content as one run, if this view is contiguous. Writes change element
    /// values in place, the length is fixed.
    #[must_use]
    pub fn as_contiguous_mut(&mut self) -> Option<&mut [u8]> {
        match self.appearance {
            BufferAppearance::Contiguous => {
                let content_length = self.buffer.content_length;
                Some(&mut self.buffer.storage[..content_length])
            }
            BufferAppearance::Segmented => None,
        }
    }
}

impl Drop for PinGuard<'_> {
    fn drop(&mut self) { self.buffer.release_pin(); }
}

/// One run of pinned bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSegment {
    pub ptr: NonNull<u8>,
    pub len: usize,
}

/// Pin token from [`GapBuffer::pin_raw()`]. The pointers stay valid until the token is
/// handed back to [`GapBuffer::unpin_raw()`] of the same buffer, and the buffer is not
/// dropped or moved in the meantime.
#[derive(Debug)]
#[must_use = "a RawPin that is not handed back to unpin_raw() leaves the buffer locked"]
pub struct RawPin {
    buffer_id: u64,
    item_kind: ItemKind,
    appearance: BufferAppearance,
    segments: SmallVec<[RawSegment; 2]>,
}

impl RawPin {
    #[must_use]
    pub fn segments(&self) -> &[RawSegment] { &self.segments }

    #[must_use]
    pub fn item_kind(&self) -> ItemKind { self.item_kind }

    #[must_use]
    pub fn appearance(&self) -> BufferAppearance { self.appearance }

    /// Total pinned bytes across all segments.
    #[must_use]
    pub fn len_bytes(&self) -> usize { self.segments.iter().map(|it| it.len).sum() }
}

/// A [`RawPin`] refused by [`GapBuffer::unpin_raw()`], together with the reason. The
/// token inside is still live and must be handed back to the buffer that issued it.
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
#[must_use = "the RejectedPin still holds a live RawPin that keeps its buffer locked"]
pub struct RejectedPin {
    pub error: GapBufferError,
    pub pin: RawPin,
}

impl GapBuffer {
    /// Pin the buffer and borrow a view of its content.
    ///
    /// # Errors
    ///
    /// [`GapBufferError::Locked`] when a contiguous view needs the gap moved while raw
    /// pins are outstanding.
    pub fn pin(&mut self, appearance: BufferAppearance) -> Result<PinGuard<'_>> {
        self.acquire_pin("pin", appearance)?;
        Ok(PinGuard {
            buffer: self,
            appearance,
        })
    }

    /// Pin the buffer and return raw pointers to its content.
    ///
    /// # Errors
    ///
    /// See [`pin()`](Self::pin).
    pub fn pin_raw(&mut self, appearance: BufferAppearance) -> Result<RawPin> {
        self.acquire_pin("pin_raw", appearance)?;
        let ranges = self.view_ranges(appearance);
        // All segment pointers derive from the one arena pointer.
        let base = self.storage.as_mut_ptr();
        let segments = ranges
            .into_iter()
            .map(|range| RawSegment {
                ptr: NonNull::new(base.wrapping_add(range.start))
                    .unwrap_or(NonNull::dangling()),
                len: range.len(),
            })
            .collect();
        Ok(RawPin {
            buffer_id: self.id,
            item_kind: self.item_kind,
            appearance,
            segments,
        })
    }

    /// Hand back a token from [`pin_raw()`](Self::pin_raw).
    ///
    /// # Errors
    ///
    /// A [`RejectedPin`] carrying [`GapBufferError::TypeMismatch`] and the token itself
    /// if the token was issued by another buffer. The pin count of this buffer is
    /// unchanged in that case, and the issuing buffer stays locked until the returned
    /// token reaches it.
    pub fn unpin_raw(&mut self, pin: RawPin) -> std::result::Result<(), RejectedPin> {
        if pin.buffer_id != self.id {
            let error = GapBufferError::type_mismatch(
                "unpin_raw",
                format!("pin issued by buffer #{}", self.id),
                format!("pin issued by buffer #{}", pin.buffer_id),
            );
            return Err(RejectedPin { error, pin });
        }
        self.release_pin();
        Ok(())
    }

    fn acquire_pin(
        &mut self,
        operation: &'static str,
        appearance: BufferAppearance,
    ) -> Result<()> {
        if appearance == BufferAppearance::Contiguous
            && self.segment1_length != self.content_length
        {
            self.ensure_unlocked(operation)?;
            self.gap_to(self.content_length);
        }
        self.pin_count += 1;
        tracing::debug!(
            message = "GapBuffer::pin",
            operation,
            appearance = %appearance,
            pin_count = self.pin_count
        );
        Ok(())
    }

    fn release_pin(&mut self) {
        debug_assert!(self.pin_count > 0);
        self.pin_count = self.pin_count.saturating_sub(1);
        tracing::debug!(message = "GapBuffer::unpin", pin_count = self.pin_count);
    }

    fn view_ranges(&self, appearance: BufferAppearance) -> SmallVec<[Range<usize>; 2]> {
        match appearance {
            BufferAppearance::Contiguous => smallvec![0..self.content_length],
            BufferAppearance::Segmented => {
                let (first, second) = self.physical_ranges(0, self.content_length);
                smallvec![first, second]
            }
        }
    }
}
