// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! New buffers derived from existing ones. The results are independent deep copies
//! with the kind and growth policy of the source. Sources are read segment by segment,
//! so none of these move the source's gap, and a buffer may be combined with itself.

use super::GapBuffer;
use crate::{GapBufferError, Result};

impl GapBuffer {
    /// Copy of the elements in `[lo, hi)`, clamped into the buffer. An empty or inverted
    /// range gives an empty buffer.
    #[must_use]
    pub fn slice(&self, lo: usize, hi: usize) -> GapBuffer {
        let (lo, hi) = self.clamp_range(lo, hi);
        let width = self.item_width();
        let (first, second) = self.physical_ranges(lo * width, (hi - lo) * width);

        let mut acc = self.empty_like();
        acc.ensure_room((hi - lo) * width);
        acc.append_encoded(&self.storage[first]);
        acc.append_encoded(&self.storage[second]);
        acc
    }

    /// A new buffer holding `self` followed by `other`.
    ///
    /// # Errors
    ///
    /// [`GapBufferError::TypeMismatch`] if the kinds differ.
    pub fn concat(&self, other: &GapBuffer) -> Result<GapBuffer> {
        if other.item_kind != self.item_kind {
            return Err(GapBufferError::type_mismatch(
                "concat",
                self.item_kind.as_ref(),
                other.item_kind.as_ref(),
            ));
        }
        let mut acc = self.empty_like();
        acc.ensure_room(self.content_length + other.content_length);
        for source in [self, other] {
            let (first, second) = source.segments();
            acc.append_encoded(first);
            acc.append_encoded(second);
        }
        Ok(acc)
    }

    /// A new buffer holding `count` copies of `self`. A `count` of zero gives an empty
    /// buffer of the same kind.
    ///
    /// # Panics
    ///
    /// If the copies would need an arena larger than `isize::MAX` bytes.
    #[must_use]
    pub fn repeat(&self, count: usize) -> GapBuffer {
        let mut acc = self.empty_like();
        if count == 0 || self.is_empty() {
            return acc;
        }
        if let Err(error) =
            acc.try_ensure_room("repeat", self.content_length.saturating_mul(count))
        {
            panic!("{error}");
        }
        let (first, second) = self.segments();
        for _ in 0..count {
            acc.append_encoded(first);
            acc.append_encoded(second);
        }
        acc
    }

    fn append_encoded(&mut self, bytes: &[u8]) {
        self.insert_encoded(self.content_length, bytes);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{GapBuffer, GapBufferError, ItemKind};

    fn gapped(text: &str, gap_at: usize) -> GapBuffer {
        let mut buffer = GapBuffer::from_text(text);
        buffer.gap_to(gap_at * 2);
        buffer
    }

    #[test]
    fn test_slice_across_gap() {
        let buffer = gapped("abcdefgh", 3);
        let slice = buffer.slice(1, 6);
        assert_eq!(slice.retrieve(0, 5).unwrap().to_string_lossy(), "bcdef");
        assert_eq!(slice.item_kind(), ItemKind::WideChar);
        // Source untouched.
        assert_eq!(buffer.segment1_length(), 6);
        slice.assert_invariants();
    }

    #[test]
    fn test_slice_clamps() {
        let buffer = GapBuffer::from_bytes(b"hello");
        assert_eq!(buffer.slice(3, 100).to_raw_vec(), b"lo".to_vec());
        assert!(buffer.slice(4, 2).is_empty());
        assert!(buffer.slice(50, 60).is_empty());
        assert_eq!(buffer.slice(4, 2).item_kind(), ItemKind::Byte);
    }

    #[test]
    fn test_concat() {
        let left = gapped("abc", 1);
        let right = gapped("def", 2);
        let both = left.concat(&right).unwrap();
        assert_eq!(both.retrieve(0, 6).unwrap().to_string_lossy(), "abcdef");
        assert_eq!(left.len(), 3);
        both.assert_invariants();
    }

    #[test]
    fn test_concat_with_itself() {
        let buffer = gapped("ab", 1);
        let doubled = buffer.concat(&buffer).unwrap();
        assert_eq!(doubled.retrieve(0, 4).unwrap().to_string_lossy(), "abab");
    }

    #[test]
    fn test_concat_kind_mismatch() {
        let text = GapBuffer::from_text("abc");
        let bytes = GapBuffer::from_bytes(b"abc");
        assert_eq!(
            text.concat(&bytes),
            Err(GapBufferError::type_mismatch("concat", "wide_char", "byte"))
        );
    }

    #[test]
    fn test_repeat() {
        let buffer = GapBuffer::from_integers(&[1, 2]);
        let repeated = buffer.repeat(3);
        assert_eq!(
            repeated.retrieve_integers(0, 6).unwrap(),
            vec![1, 2, 1, 2, 1, 2]
        );
        let none = buffer.repeat(0);
        assert!(none.is_empty());
        assert_eq!(none.item_kind(), ItemKind::Integer);
        repeated.assert_invariants();
    }

    #[test]
    #[should_panic(expected = "GapBuffer.repeat: capacity overflow")]
    fn test_repeat_past_arena_limit_panics() {
        let buffer = GapBuffer::from_bytes(b"ab");
        let _ = buffer.repeat(usize::MAX);
    }
}
