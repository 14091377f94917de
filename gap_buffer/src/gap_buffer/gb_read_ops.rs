// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Reading out of a [`GapBuffer`]. Every read addresses the content through
//! [`GapBuffer::physical_ranges()`], so the gap is never visible and reads never move
//! it.

use std::{borrow::Cow, iter::FusedIterator};

use super::GapBuffer;
use crate::{GapBufferError, Item, ItemKind, Items, Result};

/// Text copied out of a byte or wide char buffer by [`GapBuffer::retrieve()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetrievedText {
    Bytes(Vec<u8>),
    /// UTF-16 code units, not necessarily well formed.
    Wide(Vec<u16>),
}

impl RetrievedText {
    /// Decode as text. Bytes are treated as UTF-8, unpaired surrogates and invalid
    /// sequences become `U+FFFD`.
    #[must_use]
    pub fn to_string_lossy(&self) -> String {
        match self {
            RetrievedText::Bytes(it) => String::from_utf8_lossy(it).into_owned(),
            RetrievedText::Wide(it) => String::from_utf16_lossy(it),
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            RetrievedText::Bytes(it) => it.len(),
            RetrievedText::Wide(it) => it.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

impl GapBuffer {
    /// Copy `length` elements starting at `position` out of a byte or wide char buffer.
    ///
    /// # Errors
    ///
    /// - [`GapBufferError::TypeMismatch`] on an integer buffer.
    /// - [`GapBufferError::OutOfRange`] if the range does not fit.
    pub fn retrieve(&self, position: usize, length: usize) -> Result<RetrievedText> {
        if !self.item_kind.is_text() {
            return Err(GapBufferError::type_mismatch(
                "retrieve",
                "byte or wide_char",
                self.item_kind.as_ref(),
            ));
        }
        let bytes = self.retrieve_encoded("retrieve", position, length)?;
        Ok(match self.item_kind {
            ItemKind::WideChar => RetrievedText::Wide(decode_wide(&bytes)),
            ItemKind::Byte | ItemKind::Integer => RetrievedText::Bytes(bytes),
        })
    }

    /// Copy the encoded bytes of `length` elements starting at `position`, for any kind.
    ///
    /// # Errors
    ///
    /// [`GapBufferError::OutOfRange`] if the range does not fit.
    pub fn retrieve_raw(&self, position: usize, length: usize) -> Result<Vec<u8>> {
        self.retrieve_encoded("retrieve_raw", position, length)
    }

    /// # Errors
    ///
    /// - [`GapBufferError::TypeMismatch`] unless this is an integer buffer.
    /// - [`GapBufferError::OutOfRange`] if the range does not fit.
    pub fn retrieve_integers(&self, position: usize, length: usize) -> Result<Vec<i32>> {
        if self.item_kind != ItemKind::Integer {
            return Err(GapBufferError::type_mismatch(
                "retrieve_integers",
                ItemKind::Integer.as_ref(),
                self.item_kind.as_ref(),
            ));
        }
        let bytes = self.retrieve_encoded("retrieve_integers", position, length)?;
        Ok(decode_integers(&bytes))
    }

    /// The element at `index`.
    ///
    /// # Errors
    ///
    /// [`GapBufferError::OutOfRange`] if `index >= len()`.
    pub fn item_at(&self, index: usize) -> Result<Item> {
        let (byte_position, _) = self.check_range("item_at", index, 1)?;
        Ok(self.decode_at(byte_position))
    }

    /// Iterate over the decoded elements in logical order.
    #[must_use]
    pub fn iter(&self) -> ItemIter<'_> {
        ItemIter {
            buffer: self,
            front: 0,
            back: self.len(),
        }
    }

    /// Copy the whole content out as a typed run.
    #[must_use]
    pub fn to_items(&self) -> Items<'static> {
        let bytes = self.to_raw_vec();
        match self.item_kind {
            ItemKind::Byte => Items::Bytes(Cow::Owned(bytes)),
            ItemKind::WideChar => Items::WideChars(Cow::Owned(decode_wide(&bytes))),
            ItemKind::Integer => Items::Integers(Cow::Owned(decode_integers(&bytes))),
        }
    }

    /// Copy the whole content out, encoded, without the gap.
    #[must_use]
    pub fn to_raw_vec(&self) -> Vec<u8> {
        let (first, second) = self.segments();
        let mut acc = Vec::with_capacity(self.content_length);
        acc.extend_from_slice(first);
        acc.extend_from_slice(second);
        acc
    }

    fn retrieve_encoded(
        &self,
        operation: &'static str,
        position: usize,
        length: usize,
    ) -> Result<Vec<u8>> {
        let (byte_position, byte_length) = self.check_range(operation, position, length)?;
        let (first, second) = self.physical_ranges(byte_position, byte_length);
        let mut acc = Vec::with_capacity(byte_length);
        acc.extend_from_slice(&self.storage[first]);
        acc.extend_from_slice(&self.storage[second]);
        Ok(acc)
    }
}

pub(crate) fn decode_wide(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks_exact(2)
        .map(|it| u16::from_ne_bytes([it[0], it[1]]))
        .collect()
}

pub(crate) fn decode_integers(bytes: &[u8]) -> Vec<i32> {
    bytes
        .chunks_exact(4)
        .map(|it| i32::from_ne_bytes([it[0], it[1], it[2], it[3]]))
        .collect()
}

/// Iterator over the elements of a [`GapBuffer`], created by [`GapBuffer::iter()`].
#[derive(Debug, Clone)]
pub struct ItemIter<'a> {
    buffer: &'a GapBuffer,
    front: usize,
    back: usize,
}

impl Iterator for ItemIter<'_> {
    type Item = Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.buffer.decode_at(self.front * self.buffer.item_width());
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for ItemIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.buffer.decode_at(self.back * self.buffer.item_width()))
    }
}

impl ExactSizeIterator for ItemIter<'_> {}

impl FusedIterator for ItemIter<'_> {}

impl<'a> IntoIterator for &'a GapBuffer {
    type Item = Item;
    type IntoIter = ItemIter<'a>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// "hello world" with the gap parked after "hel".
    fn split_buffer() -> GapBuffer {
        let mut buffer = GapBuffer::from_bytes(b"heo world");
        buffer.insert(2, b"l").unwrap();
        buffer.insert(3, b"l").unwrap();
        assert_eq!(buffer.segment1_length(), 4);
        buffer.gap_to(3);
        buffer
    }

    #[test]
    fn test_retrieve_across_gap() {
        let buffer = split_buffer();
        assert_eq!(
            buffer.retrieve(1, 6).unwrap(),
            RetrievedText::Bytes(b"ello w".to_vec())
        );
        assert_eq!(buffer.retrieve(0, 11).unwrap().to_string_lossy(), "hello world");
        assert!(buffer.retrieve(0, 0).unwrap().is_empty());
    }

    #[test]
    fn test_retrieve_errors() {
        let buffer = split_buffer();
        assert_eq!(
            buffer.retrieve(5, 7),
            Err(GapBufferError::OutOfRange {
                operation: "retrieve",
                position: 5,
                length: 7,
                element_count: 11,
            })
        );

        let integers = GapBuffer::from_integers(&[1]);
        assert!(matches!(
            integers.retrieve(0, 1),
            Err(GapBufferError::TypeMismatch { .. })
        ));
        assert!(matches!(
            buffer.retrieve_integers(0, 1),
            Err(GapBufferError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_retrieve_wide_is_lossy_for_lone_surrogate() {
        let buffer = GapBuffer::from_wide(&[0x0068, 0xD800, 0x0069]);
        let text = buffer.retrieve(0, 3).unwrap();
        assert_eq!(text.len(), 3);
        assert_eq!(text.to_string_lossy(), "h\u{FFFD}i");
    }

    #[test]
    fn test_item_at_both_segments() {
        let buffer = split_buffer();
        assert_eq!(buffer.item_at(0), Ok(Item::Byte(b'h')));
        assert_eq!(buffer.item_at(3), Ok(Item::Byte(b'l')));
        assert_eq!(buffer.item_at(10), Ok(Item::Byte(b'd')));
        assert!(matches!(
            buffer.item_at(11),
            Err(GapBufferError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_iter_both_directions() {
        let mut buffer = GapBuffer::from_integers(&[1, 2, 4]);
        buffer.insert(2, &[3_i32]).unwrap();
        let forward = buffer.iter().collect::<Vec<_>>();
        assert_eq!(
            forward,
            vec![
                Item::Integer(1),
                Item::Integer(2),
                Item::Integer(3),
                Item::Integer(4)
            ]
        );
        assert_eq!(buffer.iter().len(), 4);
        assert_eq!(buffer.iter().next_back(), Some(Item::Integer(4)));

        let mut sum = 0;
        for it in &buffer {
            if let Item::Integer(value) = it {
                sum += value;
            }
        }
        assert_eq!(sum, 10);
    }

    #[test]
    fn test_to_items() {
        let buffer = split_buffer();
        assert_eq!(buffer.to_items(), Items::from(b"hello world".to_vec()));
        let wide = GapBuffer::from_text("ok");
        assert_eq!(wide.to_items(), Items::from("ok"));
        let integers = GapBuffer::from_integers(&[-1, 5]);
        assert_eq!(integers.to_items(), Items::from(vec![-1_i32, 5]));
    }
}
