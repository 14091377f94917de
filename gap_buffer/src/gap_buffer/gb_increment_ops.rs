// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::GapBuffer;
use crate::{Result, increment_in_place};

impl GapBuffer {
    /// Add `value` to every element in `[position, position + length)`, in place. The gap
    /// does not move: a range that straddles it is processed as two runs.
    ///
    /// Addition wraps at the element width and `value` is truncated to that width, so
    /// on a byte buffer `increment(.., 255)` and `increment(.., -1)` are the same.
    ///
    /// # Errors
    ///
    /// - [`GapBufferError::Locked`](crate::GapBufferError::Locked) while pinned.
    /// - [`GapBufferError::OutOfRange`](crate::GapBufferError::OutOfRange) if the range
    ///   does not fit, including when `position + length` overflows.
    pub fn increment(&mut self, position: usize, length: usize, value: i32) -> Result<()> {
        self.ensure_unlocked("increment")?;
        let (byte_position, byte_length) = self.check_range("increment", position, length)?;
        let (first, second) = self.physical_ranges(byte_position, byte_length);
        let kind = self.item_kind;
        increment_in_place(kind, &mut self.storage[first], value);
        increment_in_place(kind, &mut self.storage[second], value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use crate::{GapBuffer, GapBufferError};

    #[test]
    fn test_increment_does_not_move_gap() {
        let mut buffer = GapBuffer::from_bytes(b"abcdef");
        buffer.insert(3, b"-").unwrap();
        let segment1_length = buffer.segment1_length();
        buffer.increment(0, 7, 1).unwrap();
        assert_eq!(buffer.segment1_length(), segment1_length);
        assert_eq!(buffer.to_raw_vec(), b"bcd.efg".to_vec());
    }

    #[test_case(0, 2; "before the gap")]
    #[test_case(2, 4; "straddling the gap")]
    #[test_case(5, 3; "after the gap")]
    #[test_case(0, 8; "everything")]
    fn test_increment_matches_flat_increment(position: usize, length: usize) {
        let values = [100, 200, 300, 400, 500, 600, 700, 800];
        let mut buffer = GapBuffer::from_integers(&values);
        buffer.gap_to(4 * 4);

        buffer.increment(position, length, -7).unwrap();

        let mut expected = values.to_vec();
        for it in &mut expected[position..position + length] {
            *it -= 7;
        }
        assert_eq!(buffer.retrieve_integers(0, 8).unwrap(), expected);
    }

    #[test]
    fn test_increment_wide_wraps() {
        let mut buffer = GapBuffer::from_wide(&[0xFFFF, 0x0041]);
        buffer.increment(0, 2, 1).unwrap();
        assert_eq!(buffer.retrieve_raw(0, 2).unwrap(), {
            let mut expected = 0_u16.to_ne_bytes().to_vec();
            expected.extend_from_slice(&0x42_u16.to_ne_bytes());
            expected
        });
    }

    #[test]
    fn test_increment_empty_range() {
        let mut buffer = GapBuffer::from_bytes(b"abc");
        buffer.increment(3, 0, 5).unwrap();
        assert_eq!(buffer.to_raw_vec(), b"abc".to_vec());
    }

    #[test]
    fn test_increment_out_of_range() {
        let mut buffer = GapBuffer::from_bytes(b"abc");
        assert!(matches!(
            buffer.increment(1, 3, 1),
            Err(GapBufferError::OutOfRange { .. })
        ));
        assert!(matches!(
            buffer.increment(1, usize::MAX, 1),
            Err(GapBufferError::OutOfRange { .. })
        ));
        assert_eq!(buffer.to_raw_vec(), b"abc".to_vec());
    }
}
