// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Relocating the gap. [`GapBuffer::gap_to()`] is the only code that moves content
//! between the two segments, and its cost is proportional to the distance moved, not
//! the buffer size.
//!
//! ```text
//! gap_to(2), gap currently at 5:
//!
//! before  │ a b c d e │ . . . │ f g │
//! after   │ a b │ . . . │ c d e f g │
//!                 ▲ segment1_length = 2, "c d e" moved forward by gap_length
//! ```

use super::GapBuffer;
use crate::Result;

impl GapBuffer {
    /// Move the gap so it starts at logical byte offset `target`, which must be within
    /// `[0, content_length]`.
    pub(crate) fn gap_to(&mut self, target: usize) {
        debug_assert!(target <= self.content_length);
        let gap_length = self.gap_length;
        let segment1_length = self.segment1_length;

        if target < segment1_length {
            // Tail of segment 1 moves past the gap.
            self.storage
                .copy_within(target..segment1_length, target + gap_length);
        } else if target > segment1_length {
            // Head of segment 2 moves before the gap.
            self.storage.copy_within(
                segment1_length + gap_length..target + gap_length,
                segment1_length,
            );
        } else {
            return;
        }
        self.segment1_length = target;
    }

    /// Park the gap after the content so the content is one contiguous run.
    ///
    /// # Errors
    ///
    /// [`GapBufferError::Locked`](crate::GapBufferError::Locked) while pinned.
    pub fn defragment(&mut self) -> Result<()> {
        self.ensure_unlocked("defragment")?;
        self.gap_to(self.content_length);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{GapBuffer, GapBufferError};

    #[test]
    fn test_gap_to_backward_then_forward() {
        let mut buffer = GapBuffer::from_bytes(b"abcdefg");
        let gap = buffer.gap_length();

        buffer.gap_to(2);
        assert_eq!(buffer.segment1_length(), 2);
        assert_eq!(&buffer.storage[..2], b"ab");
        assert_eq!(&buffer.storage[2 + gap..], b"cdefg");
        assert_eq!(buffer.to_raw_vec(), b"abcdefg".to_vec());

        buffer.gap_to(6);
        assert_eq!(buffer.segment1_length(), 6);
        assert_eq!(&buffer.storage[..6], b"abcdef");
        assert_eq!(buffer.to_raw_vec(), b"abcdefg".to_vec());
        buffer.assert_invariants();
    }

    #[test]
    fn test_gap_to_same_position_is_noop() {
        let mut buffer = GapBuffer::from_bytes(b"abc");
        let storage = buffer.storage.clone();
        buffer.gap_to(3);
        assert_eq!(buffer.storage, storage);
        assert_eq!(buffer.segment1_length(), 3);
    }

    #[test]
    fn test_gap_to_whole_width_elements() {
        let mut buffer = GapBuffer::from_integers(&[1, 2, 3, 4]);
        buffer.gap_to(4);
        assert_eq!(buffer.retrieve_integers(0, 4).unwrap(), vec![1, 2, 3, 4]);
        buffer.gap_to(0);
        assert_eq!(buffer.segment1_length(), 0);
        assert_eq!(buffer.retrieve_integers(0, 4).unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_defragment() {
        let mut buffer = GapBuffer::from_bytes(b"hello");
        buffer.insert(2, b"--").unwrap();
        assert_eq!(buffer.segment1_length(), 4);
        buffer.defragment().unwrap();
        assert_eq!(buffer.segment1_length(), buffer.content_length());
        assert_eq!(&buffer.storage[..7], b"he--llo");
    }

    #[test]
    fn test_defragment_refused_while_pinned() {
        let mut buffer = GapBuffer::from_bytes(b"hello");
        buffer.insert(2, b"--").unwrap();
        let pin = buffer.pin_raw(crate::BufferAppearance::Segmented).unwrap();
        assert!(matches!(buffer.defragment(), Err(GapBufferError::Locked { .. })));
        assert_eq!(buffer.segment1_length(), 4);
        buffer.unpin_raw(pin).unwrap();
    }
}
