// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Deletion from a [`GapBuffer`]. Deleted content is absorbed into the gap, nothing is
//! copied beyond the gap move and the arena never shrinks here. Use
//! [`GapBuffer::compact()`] to give memory back.

use super::GapBuffer;
use crate::Result;

impl GapBuffer {
    /// Remove `element_count` elements starting at `position`.
    ///
    /// # Errors
    ///
    /// - [`GapBufferError::Locked`](crate::GapBufferError::Locked) while pinned.
    /// - [`GapBufferError::OutOfRange`](crate::GapBufferError::OutOfRange) if
    ///   `position + element_count > len()`.
    pub fn delete(&mut self, position: usize, element_count: usize) -> Result<()> {
        self.ensure_unlocked("delete")?;
        let (byte_position, byte_length) =
            self.check_range("delete", position, element_count)?;
        self.delete_encoded(byte_position, byte_length);
        Ok(())
    }

    /// Remove all content, keeping the arena.
    ///
    /// # Errors
    ///
    /// [`GapBufferError::Locked`](crate::GapBufferError::Locked) while pinned.
    pub fn clear(&mut self) -> Result<()> {
        self.ensure_unlocked("clear")?;
        self.segment1_length = 0;
        self.content_length = 0;
        self.gap_length = self.size();
        Ok(())
    }

    /// Callers have validated the byte range.
    pub(crate) fn delete_encoded(&mut self, byte_position: usize, byte_length: usize) {
        if byte_length == 0 {
            return;
        }
        self.gap_to(byte_position);
        self.gap_length += byte_length;
        self.content_length -= byte_length;
    }
}
